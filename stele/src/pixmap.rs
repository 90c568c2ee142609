// Copyright 2026 the Stele Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pixel buffers for the rendered image and the carve-depth field.

use std::io::Write;

use crate::Error;

/// An opaque RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Rgb {
    /// Creates a color from its channels.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Lightens every channel by `amount`, saturating at 255.
    pub fn lighten(self, amount: u8) -> Self {
        Self::new(
            self.r.saturating_add(amount),
            self.g.saturating_add(amount),
            self.b.saturating_add(amount),
        )
    }

    /// Darkens every channel by `amount`, saturating at 0.
    pub fn darken(self, amount: u8) -> Self {
        Self::new(
            self.r.saturating_sub(amount),
            self.g.saturating_sub(amount),
            self.b.saturating_sub(amount),
        )
    }
}

/// A width × height RGB pixel buffer, row major, three bytes per pixel.
#[derive(Debug, Clone)]
pub struct Pixmap {
    width: u32,
    height: u32,
    buf: Vec<u8>,
}

impl Pixmap {
    /// Creates a pixmap filled with a solid color.
    pub fn new(width: u32, height: u32, fill: Rgb) -> Self {
        let mut buf = vec![0; width as usize * height as usize * 3];
        for px in buf.chunks_exact_mut(3) {
            px.copy_from_slice(&[fill.r, fill.g, fill.b]);
        }
        Self { width, height, buf }
    }

    /// The pixmap width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// The pixmap height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// The raw RGB bytes.
    pub fn data(&self) -> &[u8] {
        &self.buf
    }

    /// Mutable access to the raw RGB bytes.
    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.buf
    }

    /// Reads the pixel at (x, y).
    pub fn pixel(&self, x: u32, y: u32) -> Rgb {
        let i = (y as usize * self.width as usize + x as usize) * 3;
        Rgb::new(self.buf[i], self.buf[i + 1], self.buf[i + 2])
    }

    /// Overwrites the pixel at (x, y).
    pub fn set_pixel(&mut self, x: u32, y: u32, color: Rgb) {
        let i = (y as usize * self.width as usize + x as usize) * 3;
        self.buf[i] = color.r;
        self.buf[i + 1] = color.g;
        self.buf[i + 2] = color.b;
    }

    /// Fills the horizontal span `x0..x1` on row `y`, clipped to the buffer.
    pub fn fill_span(&mut self, y: u32, x0: u32, x1: u32, color: Rgb) {
        if y >= self.height {
            return;
        }
        let x1 = x1.min(self.width);
        let row = y as usize * self.width as usize * 3;
        for x in x0.min(self.width)..x1 {
            let i = row + x as usize * 3;
            self.buf[i] = color.r;
            self.buf[i + 1] = color.g;
            self.buf[i + 2] = color.b;
        }
    }

    /// Encodes the pixmap as an 8-bit RGB PNG.
    pub fn write_png<W: Write>(&self, w: W) -> Result<(), Error> {
        let mut encoder = png::Encoder::new(w, self.width, self.height);
        encoder.set_color(png::ColorType::Rgb);
        encoder.set_depth(png::BitDepth::Eight);
        let mut writer = encoder.write_header()?;
        writer.write_image_data(&self.buf)?;
        Ok(())
    }
}

/// A single-channel byte buffer, used for the carve-depth height map.
#[derive(Debug, Clone)]
pub struct GrayMap {
    width: u32,
    height: u32,
    buf: Vec<u8>,
}

impl GrayMap {
    /// Creates a gray map filled with a uniform level.
    pub fn new(width: u32, height: u32, fill: u8) -> Self {
        Self {
            width,
            height,
            buf: vec![fill; width as usize * height as usize],
        }
    }

    /// The map width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// The map height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// The raw bytes.
    pub fn data(&self) -> &[u8] {
        &self.buf
    }

    /// Mutable access to the raw bytes.
    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.buf
    }

    /// Reads the level at (x, y).
    pub fn get(&self, x: u32, y: u32) -> u8 {
        self.buf[y as usize * self.width as usize + x as usize]
    }

    /// Fills the horizontal span `x0..x1` on row `y`, clipped to the buffer.
    pub fn fill_span(&mut self, y: u32, x0: u32, x1: u32, level: u8) {
        if y >= self.height {
            return;
        }
        let x1 = x1.min(self.width);
        let row = y as usize * self.width as usize;
        for x in x0.min(self.width)..x1 {
            self.buf[row + x as usize] = level;
        }
    }

    /// Resamples the map to a new size with bilinear filtering.
    pub fn resize(&self, width: u32, height: u32) -> Self {
        let mut out = Self::new(width, height, 0);
        if width == 0 || height == 0 || self.width == 0 || self.height == 0 {
            return out;
        }
        let sx = f64::from(self.width) / f64::from(width);
        let sy = f64::from(self.height) / f64::from(height);
        for y in 0..height {
            let fy = ((f64::from(y) + 0.5) * sy - 0.5).max(0.0);
            let y0 = (fy as u32).min(self.height - 1);
            let y1 = (y0 + 1).min(self.height - 1);
            let ty = fy - f64::from(y0);
            for x in 0..width {
                let fx = ((f64::from(x) + 0.5) * sx - 0.5).max(0.0);
                let x0 = (fx as u32).min(self.width - 1);
                let x1 = (x0 + 1).min(self.width - 1);
                let tx = fx - f64::from(x0);
                let top = f64::from(self.get(x0, y0)) * (1.0 - tx) + f64::from(self.get(x1, y0)) * tx;
                let bottom =
                    f64::from(self.get(x0, y1)) * (1.0 - tx) + f64::from(self.get(x1, y1)) * tx;
                let v = top * (1.0 - ty) + bottom * ty;
                out.buf[y as usize * width as usize + x as usize] = v.round().clamp(0.0, 255.0) as u8;
            }
        }
        out
    }
}
