// Copyright 2026 the Stele Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! CPU image filters.

use crate::pixmap::{GrayMap, Pixmap};

/// Builds a normalized 1D Gaussian kernel with sigma = `radius`.
fn gaussian_kernel(radius: f64) -> Vec<f64> {
    let half = (radius * 3.0).ceil().max(1.0) as i32;
    let sigma2 = radius * radius;
    let mut kernel: Vec<f64> = (-half..=half)
        .map(|i| (-f64::from(i * i) / (2.0 * sigma2)).exp())
        .collect();
    let sum: f64 = kernel.iter().sum();
    for w in &mut kernel {
        *w /= sum;
    }
    kernel
}

/// Separable pass over one channel of an interleaved buffer.
///
/// `stride` is the element distance between pixels along the pass axis,
/// `lanes` the number of rows (or columns) and `len` the pixels per lane.
fn blur_axis(
    buf: &mut [u8],
    kernel: &[f64],
    lanes: usize,
    len: usize,
    lane_stride: usize,
    stride: usize,
    channels: usize,
    channel: usize,
) {
    let half = (kernel.len() / 2) as i64;
    let mut line = vec![0.0_f64; len];
    for lane in 0..lanes {
        let base = lane * lane_stride + channel;
        for (i, v) in line.iter_mut().enumerate() {
            let mut acc = 0.0;
            for (k, w) in kernel.iter().enumerate() {
                // Clamp samples at the edges.
                let j = (i as i64 + k as i64 - half).clamp(0, len as i64 - 1) as usize;
                acc += f64::from(buf[base + j * stride * channels]) * w;
            }
            *v = acc;
        }
        for (i, &v) in line.iter().enumerate() {
            buf[base + i * stride * channels] = v.round().clamp(0.0, 255.0) as u8;
        }
    }
}

fn blur_channels(buf: &mut [u8], width: usize, height: usize, channels: usize, radius: f64) {
    if radius <= 0.0 || width == 0 || height == 0 {
        return;
    }
    let kernel = gaussian_kernel(radius);
    for channel in 0..channels {
        // Horizontal pass: lanes are rows.
        blur_axis(
            buf,
            &kernel,
            height,
            width,
            width * channels,
            1,
            channels,
            channel,
        );
        // Vertical pass: lanes are columns.
        blur_axis(buf, &kernel, width, height, channels, width, channels, channel);
    }
}

/// Gaussian-blurs an RGB pixmap in place.
pub fn gaussian_blur(pixmap: &mut Pixmap, radius: f64) {
    let (w, h) = (pixmap.width() as usize, pixmap.height() as usize);
    blur_channels(pixmap.data_mut(), w, h, 3, radius);
}

/// Gaussian-blurs a gray map in place.
pub fn gaussian_blur_gray(map: &mut GrayMap, radius: f64) {
    let (w, h) = (map.width() as usize, map.height() as usize);
    blur_channels(map.data_mut(), w, h, 1, radius);
}
