// Copyright 2026 the Stele Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Carve-depth height map and relief lighting.
//!
//! The height map encodes simulated carve depth per pixel: mid-gray for the
//! untouched surface, darker toward the carved outline and white at the
//! deepest fill. Its gradients drive a per-pixel lighting factor that is
//! multiplied into the background texture, which is what makes the glyphs
//! read as cut into the stone rather than painted on it.

use kurbo::Affine;
use peniko::Fill;

use crate::filters;
use crate::glyph::MeasuredGlyph;
use crate::layout::Layout;
use crate::pixmap::{GrayMap, Pixmap, Rgb};
use crate::raster;

/// Depth level of the untouched stone surface.
const SURFACE_LEVEL: u8 = 128;

/// Nested carve layers: scale about the glyph center and depth level.
const CARVE_LAYERS: [(f64, u8); 3] = [(1.0, 0), (0.92, 96), (0.84, 255)];

/// Parameters for relief shading.
#[derive(Debug, Clone, Copy)]
pub struct ReliefParams {
    /// Height map resolution relative to the canvas.
    pub map_scale: f64,
    /// Gaussian blur radius applied to the height map.
    pub blur_radius: f64,
    /// Scale applied to the combined gradient before clamping.
    pub strength: f64,
    /// Lower and upper clamp of the lighting intensity.
    pub light_range: (f64, f64),
}

impl Default for ReliefParams {
    fn default() -> Self {
        Self {
            map_scale: 0.5,
            blur_radius: 2.0,
            strength: 1.2,
            light_range: (0.6, 1.0),
        }
    }
}

/// Rasterizes the glyphs into a carve-depth height map.
///
/// The map shares the canvas aspect ratio at `map_scale` resolution. Each
/// glyph is filled at three nested scales, darkest outline first and white
/// fill last, then the whole map is blurred for smooth depth transitions.
pub fn height_map(glyphs: &[MeasuredGlyph], layout: &Layout, params: &ReliefParams) -> GrayMap {
    let scale = params.map_scale;
    let width = (f64::from(layout.width) * scale).ceil().max(1.0) as u32;
    let height = (f64::from(layout.height) * scale).ceil().max(1.0) as u32;
    let mut map = GrayMap::new(width, height, SURFACE_LEVEL);

    for (glyph, placement) in glyphs.iter().zip(&layout.placements) {
        let place = Affine::translate((
            placement.x - glyph.bbox.x0,
            placement.y - glyph.bbox.y0,
        ));
        for (layer_scale, level) in CARVE_LAYERS {
            let transform = Affine::scale(scale)
                * place
                * Affine::scale_about(layer_scale, glyph.bbox.center());
            raster::fill_path(&glyph.path, transform, Fill::NonZero, height, |y, x0, x1| {
                map.fill_span(y, x0, x1, level);
            });
        }
    }

    filters::gaussian_blur_gray(&mut map, params.blur_radius);
    map
}

/// Multiplies relief lighting derived from `map` into `texture`.
///
/// The map is resampled to the texture dimensions, forward-difference
/// gradients are taken along both axes and their sum becomes a lighting
/// intensity clamped to `light_range`. Texture dimensions and channel count
/// are unchanged.
pub fn apply_relief(texture: &mut Pixmap, map: &GrayMap, params: &ReliefParams) {
    let width = texture.width();
    let height = texture.height();
    let map = map.resize(width, height);
    let (lo, hi) = params.light_range;

    for y in 0..height {
        for x in 0..width {
            let here = f64::from(map.get(x, y));
            let gx = if x + 1 < width {
                f64::from(map.get(x + 1, y)) - here
            } else {
                0.0
            };
            let gy = if y + 1 < height {
                f64::from(map.get(x, y + 1)) - here
            } else {
                0.0
            };
            let intensity = (1.0 - params.strength * (gx + gy) / 255.0).clamp(lo, hi);
            let px = texture.pixel(x, y);
            texture.set_pixel(x, y, scale_rgb(px, intensity));
        }
    }
}

fn scale_rgb(px: Rgb, factor: f64) -> Rgb {
    let scale = |c: u8| (f64::from(c) * factor).round().clamp(0.0, 255.0) as u8;
    Rgb::new(scale(px.r), scale(px.g), scale(px.b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{Direction, LayoutParams};
    use kurbo::{Rect, Shape};

    fn square_glyph(side: f64) -> MeasuredGlyph {
        let bbox = Rect::new(0.0, -side, side, 0.0);
        MeasuredGlyph {
            ch: '\u{13000}',
            path: bbox.to_path(0.1),
            bbox,
        }
    }

    #[test]
    fn map_tracks_canvas_aspect_at_half_scale() {
        let glyphs = [square_glyph(40.0)];
        let layout = Layout::compute(
            &glyphs,
            Direction::Vertical,
            &LayoutParams {
                padding: 20.0,
                ring_margin: None,
            },
        );
        let map = height_map(&glyphs, &layout, &ReliefParams::default());
        assert_eq!(map.width(), layout.width.div_ceil(2));
        assert_eq!(map.height(), layout.height.div_ceil(2));
    }

    #[test]
    fn carved_region_departs_from_surface_level() {
        let glyphs = [square_glyph(40.0)];
        let layout = Layout::compute(
            &glyphs,
            Direction::Vertical,
            &LayoutParams {
                padding: 20.0,
                ring_margin: None,
            },
        );
        let map = height_map(&glyphs, &layout, &ReliefParams::default());
        // Corner is untouched stone; glyph center is deep fill.
        assert_eq!(map.get(0, 0), SURFACE_LEVEL);
        let center = map.get(map.width() / 2, map.height() / 2);
        assert!(center > 200, "glyph interior reads {center}");
    }

    #[test]
    fn flat_map_leaves_texture_unchanged() {
        let mut texture = Pixmap::new(20, 20, Rgb::new(198, 158, 109));
        let map = GrayMap::new(10, 10, SURFACE_LEVEL);
        apply_relief(&mut texture, &map, &ReliefParams::default());
        for y in 0..20 {
            for x in 0..20 {
                assert_eq!(texture.pixel(x, y), Rgb::new(198, 158, 109));
            }
        }
    }

    #[test]
    fn shading_only_darkens_within_the_clamp() {
        let mut texture = Pixmap::new(16, 16, Rgb::new(200, 200, 200));
        let mut map = GrayMap::new(16, 16, SURFACE_LEVEL);
        // A hard depth step through the middle.
        for y in 0..16 {
            map.fill_span(y, 8, 16, 255);
        }
        apply_relief(&mut texture, &map, &ReliefParams::default());
        for y in 0..16 {
            for x in 0..16 {
                let v = texture.pixel(x, y).r;
                assert!(v <= 200, "pixel ({x}, {y}) brightened to {v}");
                // 0.6 × 200 = 120 is the clamp floor.
                assert!(v >= 120, "pixel ({x}, {y}) darkened to {v}");
            }
        }
    }

    #[test]
    fn shading_preserves_dimensions() {
        let mut texture = Pixmap::new(33, 21, Rgb::new(198, 158, 109));
        let map = GrayMap::new(17, 11, SURFACE_LEVEL);
        apply_relief(&mut texture, &map, &ReliefParams::default());
        assert_eq!(texture.width(), 33);
        assert_eq!(texture.height(), 21);
        assert_eq!(texture.data().len(), 33 * 21 * 3);
    }
}
