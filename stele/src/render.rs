// Copyright 2026 the Stele Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The carving pipeline.
//!
//! A render is strictly linear: layout, background texture, carve-depth
//! relief, then the three-pass glyph fills and (optionally) the shen ring.
//! Every stage takes explicit inputs and returns its output; nothing is
//! shared between runs.

use kurbo::{Affine, BezPath, Shape, Stroke, StrokeOpts, Vec2, stroke};
use peniko::Fill;

use crate::Error;
use crate::glyph::{InscriptionFont, MeasuredGlyph};
use crate::layout::{Direction, Layout, LayoutParams};
use crate::pixmap::{Pixmap, Rgb};
use crate::raster;
use crate::relief::{self, ReliefParams};
use crate::ring::{RingParams, shen_ring};
use crate::texture::{self, TextureParams};

/// Colors of the three carve passes, derived from the stone base color.
#[derive(Debug, Clone, Copy)]
pub struct CarvePalette {
    /// Recessed-edge color, drawn at the carve offset.
    pub shadow: Rgb,
    /// Raised-edge color, drawn opposite the carve offset.
    pub highlight: Rgb,
    /// Main glyph fill.
    pub ink: Rgb,
}

impl CarvePalette {
    /// Derives the palette from the stone base color.
    pub fn for_base(base: Rgb) -> Self {
        Self {
            shadow: base.darken(30),
            highlight: base.lighten(20),
            ink: base.darken(15),
        }
    }
}

/// All configuration for a render.
#[derive(Debug, Clone, Copy)]
pub struct RenderParams {
    /// Glyph size in pixels per em.
    pub glyph_size: f64,
    /// Padding around and between glyphs.
    pub padding: f64,
    /// Offset of the shadow pass; the highlight pass uses its negation.
    ///
    /// The default of (-2, -2) places the shadow up-left, reading as light
    /// from the lower right. Flip the sign to flip the apparent relief.
    pub carve_offset: Vec2,
    /// Background texture parameters.
    pub texture: TextureParams,
    /// Relief shading parameters.
    pub relief: ReliefParams,
    /// Shen ring parameters; `None` renders without a cartouche.
    pub ring: Option<RingParams>,
}

impl Default for RenderParams {
    fn default() -> Self {
        Self {
            glyph_size: 240.0,
            padding: 60.0,
            carve_offset: Vec2::new(-2.0, -2.0),
            texture: TextureParams::default(),
            relief: ReliefParams::default(),
            ring: None,
        }
    }
}

/// Measures `chars` with `font` and renders the inscription.
pub fn render(
    font: &InscriptionFont,
    chars: &[char],
    direction: Direction,
    params: &RenderParams,
) -> Result<Pixmap, Error> {
    let glyphs = font.measure_all(chars, params.glyph_size)?;
    render_glyphs(&glyphs, direction, params)
}

/// Renders already-measured glyphs into a carved sandstone image.
pub fn render_glyphs(
    glyphs: &[MeasuredGlyph],
    direction: Direction,
    params: &RenderParams,
) -> Result<Pixmap, Error> {
    if glyphs.is_empty() {
        return Err(Error::EmptyInscription);
    }

    let layout = Layout::compute(
        glyphs,
        direction,
        &LayoutParams {
            padding: params.padding,
            ring_margin: params.ring.map(|r| r.extra_padding),
        },
    );
    log::debug!(
        "laid out {} glyphs on a {}x{} canvas",
        glyphs.len(),
        layout.width,
        layout.height
    );

    let mut image = texture::carved_sandstone(layout.width, layout.height, &params.texture);
    let depth = relief::height_map(glyphs, &layout, &params.relief);
    relief::apply_relief(&mut image, &depth, &params.relief);

    let palette = CarvePalette::for_base(params.texture.base);
    for (glyph, placement) in glyphs.iter().zip(&layout.placements) {
        let place = Affine::translate((
            placement.x - glyph.bbox.x0,
            placement.y - glyph.bbox.y0,
        ));
        carve_pass(&mut image, &glyph.path, place, Fill::NonZero, params, &palette);
    }

    if let Some(ring) = params.ring {
        let shen = shen_ring(
            direction,
            f64::from(layout.width),
            f64::from(layout.height),
            params.padding + ring.extra_padding,
            ring.line_width,
        );
        let bar = shen.bar.to_path(raster::DEFAULT_TOLERANCE);
        let offset = params.carve_offset;
        for (delta, color) in [(offset, palette.shadow), (-offset, palette.highlight)] {
            let shift = Affine::translate(delta);
            fill_into(&mut image, &shen.band, shift, Fill::EvenOdd, color);
            fill_into(&mut image, &bar, shift, Fill::NonZero, color);
        }
        // The main ring pass traces the contour rather than filling it.
        let traced = stroke(
            shen.outline.elements().iter().copied(),
            &Stroke::new(1.0),
            &StrokeOpts::default(),
            raster::DEFAULT_TOLERANCE,
        );
        fill_into(
            &mut image,
            &traced,
            Affine::IDENTITY,
            Fill::NonZero,
            palette.shadow,
        );
    }

    Ok(image)
}

/// Draws one shape three times: shadow at the carve offset, highlight at the
/// opposite offset, ink in place.
fn carve_pass(
    image: &mut Pixmap,
    path: &BezPath,
    place: Affine,
    fill: Fill,
    params: &RenderParams,
    palette: &CarvePalette,
) {
    let offset = params.carve_offset;
    fill_into(
        image,
        path,
        Affine::translate(offset) * place,
        fill,
        palette.shadow,
    );
    fill_into(
        image,
        path,
        Affine::translate(-offset) * place,
        fill,
        palette.highlight,
    );
    fill_into(image, path, place, fill, palette.ink);
}

fn fill_into(image: &mut Pixmap, path: &BezPath, transform: Affine, fill: Fill, color: Rgb) {
    raster::fill_path(path, transform, fill, image.height(), |y, x0, x1| {
        image.fill_span(y, x0, x1, color);
    });
}
