// Copyright 2026 the Stele Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Renders "carved sandstone" images of Egyptian hieroglyph inscriptions.
//!
//! A render is a single linear pipeline: parse the glyph sequence, measure
//! glyph outlines from a font, lay them out horizontally or vertically,
//! generate a procedural sandstone texture, shade it with a carve-depth
//! relief, fill each glyph in three offset passes (shadow, highlight, ink)
//! and optionally enclose the whole inscription in a shen-ring cartouche.
//! The result is an RGB [`Pixmap`] that encodes to PNG.
//!
//! Glyph measurement is the only stage that touches a font; everything after
//! [`MeasuredGlyph`] is pure geometry and pixels, which is also how the test
//! suite drives the pipeline without font files.

pub mod filters;
pub mod glyph;
pub mod input;
pub mod layout;
pub mod pixmap;
pub mod relief;
pub mod ring;
pub mod texture;

mod error;
mod raster;
mod render;

pub use error::Error;
pub use glyph::{InscriptionFont, MeasuredGlyph};
pub use input::{parse_glyphs, validate_output_name};
pub use layout::{Direction, Layout, LayoutParams, Placement};
pub use pixmap::{GrayMap, Pixmap, Rgb};
pub use relief::ReliefParams;
pub use render::{CarvePalette, RenderParams, render, render_glyphs};
pub use ring::RingParams;
pub use texture::TextureParams;

/// Re-exported geometry types used in the public API.
pub use kurbo;
