// Copyright 2026 the Stele Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Procedural sandstone background texture.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::filters;
use crate::pixmap::{Pixmap, Rgb};

/// Parameters controlling the sandstone texture.
#[derive(Debug, Clone, Copy)]
pub struct TextureParams {
    /// Base sandstone color.
    pub base: Rgb,
    /// Maximum amplitude of the per-pixel grain noise.
    pub grain: u8,
    /// Column period of the darkened tool-mark bands.
    pub tool_mark_every: u32,
    /// Seed for the grain noise; equal seeds give identical textures.
    pub seed: u64,
}

impl Default for TextureParams {
    fn default() -> Self {
        Self {
            base: Rgb::new(198, 158, 109),
            grain: 15,
            tool_mark_every: 40,
            seed: 0,
        }
    }
}

/// Generates a carved-sandstone background of exactly `width` × `height`.
///
/// Composites per-pixel grain noise bounded by `grain`, a linear vertical
/// gradient spanning ±`grain`/2 across the rows and a darkened column every
/// `tool_mark_every` pixels, then softens the result with a small Gaussian
/// blur.
pub fn carved_sandstone(width: u32, height: u32, params: &TextureParams) -> Pixmap {
    let mut pixmap = Pixmap::new(width, height, params.base);
    let mut rng = StdRng::seed_from_u64(params.seed);
    let grain = i16::from(params.grain);
    let half = grain / 2;

    for y in 0..height {
        // Vertical gradient from -grain/2 at the top to +grain/2 at the bottom.
        let gradient = if height > 1 {
            (f64::from(half) * (2.0 * f64::from(y) / f64::from(height - 1) - 1.0)) as i16
        } else {
            -half
        };
        for x in 0..width {
            let mut delta = gradient;
            if grain > 0 {
                delta += rng.random_range(0..grain);
            }
            if params.tool_mark_every > 0 && x % params.tool_mark_every == 0 {
                delta -= grain / 4;
            }
            let base = params.base;
            pixmap.set_pixel(
                x,
                y,
                Rgb::new(
                    add_clipped(base.r, delta),
                    add_clipped(base.g, delta),
                    add_clipped(base.b, delta),
                ),
            );
        }
    }

    filters::gaussian_blur(&mut pixmap, 0.7);
    pixmap
}

fn add_clipped(channel: u8, delta: i16) -> u8 {
    (i16::from(channel) + delta).clamp(0, 255) as u8
}
