// Copyright 2026 the Stele Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Font loading and glyph measurement.

use std::sync::Arc;

use kurbo::{BezPath, Rect, Shape};
use peniko::{Blob, FontData};
use skrifa::MetadataProvider;
use skrifa::instance::{LocationRef, Size};
use skrifa::outline::{DrawSettings, OutlinePen};

use crate::Error;

/// A glyph measured at a concrete pixel size.
///
/// The outline is in y-down coordinates relative to the glyph's baseline
/// origin; `bbox` is the outline's bounding box in the same space, so its
/// origin carries the left/top bearings needed to center glyph bodies
/// rather than metric boxes.
#[derive(Debug, Clone)]
pub struct MeasuredGlyph {
    /// The character this outline was extracted for.
    pub ch: char,
    /// The glyph outline.
    pub path: BezPath,
    /// Bounding box of the outline.
    pub bbox: Rect,
}

impl MeasuredGlyph {
    /// Visual width of the glyph body.
    pub fn width(&self) -> f64 {
        self.bbox.width()
    }

    /// Visual height of the glyph body.
    pub fn height(&self) -> f64 {
        self.bbox.height()
    }
}

/// A loaded font used to measure and outline hieroglyphs.
#[derive(Debug, Clone)]
pub struct InscriptionFont {
    font: FontData,
}

impl InscriptionFont {
    /// Wraps raw font bytes, verifying they parse as a font.
    pub fn from_bytes(data: Vec<u8>) -> Result<Self, Error> {
        skrifa::FontRef::new(&data).map_err(|e| Error::Font(e.to_string()))?;
        Ok(Self {
            font: FontData::new(Blob::new(Arc::new(data)), 0),
        })
    }

    /// Loads a font from a file on disk.
    pub fn from_file(path: &std::path::Path) -> Result<Self, Error> {
        Self::from_bytes(std::fs::read(path)?)
    }

    /// Extracts the outline of `ch` at `size` pixels per em.
    pub fn measure(&self, ch: char, size: f64) -> Result<MeasuredGlyph, Error> {
        let font_ref = skrifa::FontRef::from_index(self.font.data.as_ref(), self.font.index)
            .map_err(|e| Error::Font(e.to_string()))?;
        let glyph_id = font_ref
            .charmap()
            .map(ch)
            .ok_or(Error::MissingGlyph(ch))?;
        let outlines = font_ref.outline_glyphs();
        let outline = outlines.get(glyph_id).ok_or(Error::MissingGlyph(ch))?;
        let settings = DrawSettings::unhinted(
            Size::new(size as f32),
            LocationRef::default(),
        );
        let mut pen = OutlinePath(BezPath::new());
        outline
            .draw(settings, &mut pen)
            .map_err(|e| Error::Font(e.to_string()))?;
        let path = pen.0;
        let bbox = path.bounding_box();
        Ok(MeasuredGlyph { ch, path, bbox })
    }

    /// Measures a whole glyph sequence at once.
    pub fn measure_all(&self, chars: &[char], size: f64) -> Result<Vec<MeasuredGlyph>, Error> {
        chars.iter().map(|&ch| self.measure(ch, size)).collect()
    }
}

/// Pen that records an outline into a [`BezPath`], flipping y so the path
/// lands in the y-down raster coordinate system.
struct OutlinePath(BezPath);

impl OutlinePen for OutlinePath {
    #[inline]
    fn move_to(&mut self, x: f32, y: f32) {
        self.0.move_to((f64::from(x), f64::from(-y)));
    }

    #[inline]
    fn line_to(&mut self, x: f32, y: f32) {
        self.0.line_to((f64::from(x), f64::from(-y)));
    }

    #[inline]
    fn curve_to(&mut self, cx0: f32, cy0: f32, cx1: f32, cy1: f32, x: f32, y: f32) {
        self.0.curve_to(
            (f64::from(cx0), f64::from(-cy0)),
            (f64::from(cx1), f64::from(-cy1)),
            (f64::from(x), f64::from(-y)),
        );
    }

    #[inline]
    fn quad_to(&mut self, cx: f32, cy: f32, x: f32, y: f32) {
        self.0
            .quad_to((f64::from(cx), f64::from(-cy)), (f64::from(x), f64::from(-y)));
    }

    #[inline]
    fn close(&mut self) {
        self.0.close_path();
    }
}
