// Copyright 2026 the Stele Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Canvas sizing and per-glyph placement.

use std::str::FromStr;

use crate::Error;
use crate::glyph::MeasuredGlyph;

/// Reading direction of the inscription.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Glyphs run left to right.
    Horizontal,
    /// Glyphs run top to bottom.
    Vertical,
}

impl FromStr for Direction {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "h" | "horizontal" => Ok(Self::Horizontal),
            "v" | "vertical" => Ok(Self::Vertical),
            _ => Err(Error::UnknownDirection(s.trim().to_owned())),
        }
    }
}

/// Spacing parameters for layout.
#[derive(Debug, Clone, Copy)]
pub struct LayoutParams {
    /// Padding around and between glyphs, in pixels.
    pub padding: f64,
    /// Extra main-axis margin reserved for a shen ring, if one is drawn.
    pub ring_margin: Option<f64>,
}

impl Default for LayoutParams {
    fn default() -> Self {
        Self {
            padding: 60.0,
            ring_margin: None,
        }
    }
}

/// Top-left corner of a glyph's visual box on the canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    /// Left edge of the visual box.
    pub x: f64,
    /// Top edge of the visual box.
    pub y: f64,
}

/// Computed canvas dimensions and glyph placements.
///
/// Immutable once computed; placements parallel the measured glyph slice
/// they were computed from.
#[derive(Debug, Clone)]
pub struct Layout {
    /// Canvas width in pixels.
    pub width: u32,
    /// Canvas height in pixels.
    pub height: u32,
    /// Per-glyph visual box origins, in input order.
    pub placements: Vec<Placement>,
}

impl Layout {
    /// Lays out `glyphs` along `direction`.
    ///
    /// Glyph bodies are centered on the cross axis; the main axis advances by
    /// each glyph's visual extent plus `padding`, with `padding` before the
    /// first and after the last glyph. An active ring margin widens the main
    /// axis by one margin on each end.
    pub fn compute(glyphs: &[MeasuredGlyph], direction: Direction, params: &LayoutParams) -> Self {
        let p = params.padding;
        let m = params.ring_margin.unwrap_or(0.0);
        let n = glyphs.len() as f64;
        let widths: f64 = glyphs.iter().map(MeasuredGlyph::width).sum();
        let heights: f64 = glyphs.iter().map(MeasuredGlyph::height).sum();
        let max_w = glyphs.iter().map(MeasuredGlyph::width).fold(0.0, f64::max);
        let max_h = glyphs.iter().map(MeasuredGlyph::height).fold(0.0, f64::max);

        let (width, height) = match direction {
            Direction::Horizontal => (widths + p * (n + 1.0) + 2.0 * m, max_h + 2.0 * p),
            Direction::Vertical => (max_w + 2.0 * p, heights + p * (n + 1.0) + 2.0 * m),
        };

        let mut placements = Vec::with_capacity(glyphs.len());
        let mut pen = p + m;
        for glyph in glyphs {
            match direction {
                Direction::Horizontal => {
                    placements.push(Placement {
                        x: pen,
                        y: (height - glyph.height()) / 2.0,
                    });
                    pen += glyph.width() + p;
                }
                Direction::Vertical => {
                    placements.push(Placement {
                        x: (width - glyph.width()) / 2.0,
                        y: pen,
                    });
                    pen += glyph.height() + p;
                }
            }
        }

        Self {
            width: width.ceil() as u32,
            height: height.ceil() as u32,
            placements,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::{Rect, Shape};

    /// A synthetic glyph whose body is the given rect relative to its origin.
    fn glyph(bbox: Rect) -> MeasuredGlyph {
        MeasuredGlyph {
            ch: '\u{13000}',
            path: bbox.to_path(0.1),
            bbox,
        }
    }

    #[test]
    fn direction_parses_both_spellings() {
        assert_eq!("V".parse::<Direction>().unwrap(), Direction::Vertical);
        assert_eq!("h".parse::<Direction>().unwrap(), Direction::Horizontal);
        assert_eq!(
            " Horizontal ".parse::<Direction>().unwrap(),
            Direction::Horizontal
        );
        assert!("diagonal".parse::<Direction>().is_err());
        assert!("".parse::<Direction>().is_err());
    }

    #[test]
    fn unknown_direction_echoes_input_as_typed() {
        let err = " DIAGONAL ".parse::<Direction>().unwrap_err();
        assert!(matches!(err, Error::UnknownDirection(s) if s == "DIAGONAL"));
    }

    #[test]
    fn single_glyph_horizontal_dimensions() {
        let glyphs = [glyph(Rect::new(0.0, -100.0, 80.0, 0.0))];
        let params = LayoutParams {
            padding: 60.0,
            ring_margin: None,
        };
        let layout = Layout::compute(&glyphs, Direction::Horizontal, &params);
        // W = w + 2p, H = h + 2p.
        assert_eq!(layout.width, 80 + 120);
        assert_eq!(layout.height, 100 + 120);
        assert_eq!(layout.placements[0], Placement { x: 60.0, y: 60.0 });
    }

    #[test]
    fn single_glyph_vertical_dimensions() {
        let glyphs = [glyph(Rect::new(0.0, -100.0, 80.0, 0.0))];
        let params = LayoutParams {
            padding: 10.0,
            ring_margin: None,
        };
        let layout = Layout::compute(&glyphs, Direction::Vertical, &params);
        assert_eq!(layout.width, 80 + 20);
        assert_eq!(layout.height, 100 + 20);
    }

    #[test]
    fn vertical_glyphs_stack_top_to_bottom() {
        let glyphs = [
            glyph(Rect::new(0.0, -90.0, 40.0, 0.0)),
            glyph(Rect::new(0.0, -50.0, 80.0, 0.0)),
        ];
        let params = LayoutParams {
            padding: 20.0,
            ring_margin: None,
        };
        let layout = Layout::compute(&glyphs, Direction::Vertical, &params);
        // H = Σh + p(n+1), W = max w + 2p.
        assert_eq!(layout.height, 90 + 50 + 60);
        assert_eq!(layout.width, 80 + 40);
        assert_eq!(layout.placements[0].y, 20.0);
        assert_eq!(layout.placements[1].y, 20.0 + 90.0 + 20.0);
        // Narrow glyph centered on the cross axis.
        assert_eq!(layout.placements[0].x, (120.0 - 40.0) / 2.0);
        assert_eq!(layout.placements[1].x, 20.0);
    }

    #[test]
    fn ring_margin_widens_main_axis_only() {
        let glyphs = [glyph(Rect::new(0.0, -100.0, 80.0, 0.0))];
        let without = Layout::compute(
            &glyphs,
            Direction::Horizontal,
            &LayoutParams {
                padding: 60.0,
                ring_margin: None,
            },
        );
        let with = Layout::compute(
            &glyphs,
            Direction::Horizontal,
            &LayoutParams {
                padding: 60.0,
                ring_margin: Some(30.0),
            },
        );
        assert_eq!(with.width, without.width + 60);
        assert_eq!(with.height, without.height);
        assert_eq!(with.placements[0].x, without.placements[0].x + 30.0);
    }

    #[test]
    fn empty_sequence_still_produces_padded_canvas() {
        let layout = Layout::compute(
            &[],
            Direction::Horizontal,
            &LayoutParams {
                padding: 60.0,
                ring_margin: None,
            },
        );
        assert_eq!(layout.width, 60);
        assert_eq!(layout.height, 120);
        assert!(layout.placements.is_empty());
    }
}
