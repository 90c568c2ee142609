// Copyright 2026 the Stele Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shen-ring cartouche geometry.
//!
//! The ring is a rounded rectangle band: the outer rounded rect and an inner
//! rounded rect inset by the line width, emitted as one even-odd region. A
//! solid crossbar closes the far end (right for horizontal inscriptions,
//! bottom for vertical ones), echoing the tied end of the Egyptian shen.

use kurbo::{BezPath, Rect, RoundedRect, Shape};

use crate::layout::Direction;
use crate::raster::DEFAULT_TOLERANCE;

/// Parameters controlling ring thickness and clearance.
#[derive(Debug, Clone, Copy)]
pub struct RingParams {
    /// Stroke thickness of the ring band.
    pub line_width: f64,
    /// Clearance between the glyph padding box and the ring.
    pub extra_padding: f64,
}

impl Default for RingParams {
    fn default() -> Self {
        Self {
            line_width: 10.0,
            extra_padding: 30.0,
        }
    }
}

/// Ready-to-draw shen ring geometry.
#[derive(Debug, Clone)]
pub struct ShenRing {
    /// The ring band, outer and inner rounded rects as one even-odd region.
    pub band: BezPath,
    /// The solid crossbar at the far end.
    pub bar: Rect,
    /// Outline of the outer contour and bar, for the final stroke pass.
    pub outline: BezPath,
}

/// Builds the shen ring for a canvas of `width` × `height`.
///
/// `margin` is the distance from the canvas edge to the outer contour on
/// every side (glyph padding plus the ring's extra padding).
pub fn shen_ring(
    direction: Direction,
    width: f64,
    height: f64,
    margin: f64,
    line_width: f64,
) -> ShenRing {
    let rect = Rect::new(margin, margin, width - margin, height - margin);
    // Capsule-like ends on the main axis, never more than half the cross axis.
    let radius = match direction {
        Direction::Horizontal => (rect.height() / 2.0).min(rect.width() / 4.0),
        Direction::Vertical => (rect.width() / 2.0).min(rect.height() / 4.0),
    };

    let outer = RoundedRect::from_rect(rect, radius);
    let mut band = outer.to_path(DEFAULT_TOLERANCE);
    let inner_rect = rect.inset(-line_width);
    if inner_rect.width() > 0.0 && inner_rect.height() > 0.0 {
        let inner = RoundedRect::from_rect(inner_rect, (radius - line_width).max(0.0));
        band.extend(inner.to_path(DEFAULT_TOLERANCE));
    }

    let bar = match direction {
        Direction::Horizontal => Rect::new(rect.x1 - line_width, rect.y0, rect.x1, rect.y1),
        Direction::Vertical => Rect::new(rect.x0, rect.y1 - line_width, rect.x1, rect.y1),
    };

    let mut outline = outer.to_path(DEFAULT_TOLERANCE);
    outline.extend(bar.to_path(DEFAULT_TOLERANCE));

    ShenRing { band, bar, outline }
}
