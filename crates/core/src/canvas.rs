//! Pixel buffer the dot field is drawn onto, and the observation it yields.
//!
//! [`FrameCanvas`] stores pixels column-major (`x` outer, `y` inner), the
//! layout of a classic surface pixel view. [`FrameCanvas::extract_frame`]
//! transposes into a row-major [`Frame`] with axis order
//! `(row = y, column = x, channel)`, the standard image order consumers
//! index with.

use crate::color::Rgb;
use crate::error::RdmError;
use glam::DVec2;

/// Number of channels per pixel.
pub const CHANNELS: usize = 3;

/// Square RGB canvas of `size × size` pixels, stored column-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameCanvas {
    size: usize,
    data: Vec<u8>,
}

impl FrameCanvas {
    /// Creates a canvas filled with `background`.
    ///
    /// Returns `RdmError::InvalidDimensions` if `size` is zero, the
    /// buffer length `size * size * 3` overflows `usize`, or the buffer
    /// cannot be allocated.
    pub fn new(size: usize, background: Rgb) -> Result<Self, RdmError> {
        if size == 0 {
            return Err(RdmError::InvalidDimensions);
        }
        let len = size
            .checked_mul(size)
            .and_then(|n| n.checked_mul(CHANNELS))
            .ok_or(RdmError::InvalidDimensions)?;
        let mut data = Vec::new();
        data.try_reserve_exact(len)
            .map_err(|_| RdmError::InvalidDimensions)?;
        data.resize(len, 0);
        let mut canvas = Self { size, data };
        canvas.clear(background);
        Ok(canvas)
    }

    /// Side length in pixels.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Raw column-major bytes.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    fn index(&self, x: usize, y: usize) -> usize {
        (x * self.size + y) * CHANNELS
    }

    /// Color at `(x, y)`, or `None` outside the canvas.
    pub fn pixel(&self, x: usize, y: usize) -> Option<Rgb> {
        if x >= self.size || y >= self.size {
            return None;
        }
        let i = self.index(x, y);
        Some(Rgb::new(self.data[i], self.data[i + 1], self.data[i + 2]))
    }

    /// Fills every pixel with `color`.
    pub fn clear(&mut self, color: Rgb) {
        let rgb = color.to_array();
        self.data
            .chunks_exact_mut(CHANNELS)
            .for_each(|px| px.copy_from_slice(&rgb));
    }

    /// Writes a filled `side × side` square centered at `center`.
    ///
    /// The top-left corner is `center - side/2` rounded to the nearest
    /// pixel. Pixels outside `[0, size)` on either axis are skipped.
    pub fn draw_square(&mut self, center: DVec2, side: usize, color: Rgb) {
        if side == 0 || !center.is_finite() {
            return;
        }
        let half = side as f64 / 2.0;
        let left = (center.x - half).round();
        let top = (center.y - half).round();
        let size = self.size as f64;

        // Clip in floating point first so far-away squares cannot overflow.
        let x0 = left.max(0.0);
        let y0 = top.max(0.0);
        let x1 = (left + side as f64).min(size);
        let y1 = (top + side as f64).min(size);
        if x0 >= x1 || y0 >= y1 {
            return;
        }

        let rgb = color.to_array();
        for x in x0 as usize..x1 as usize {
            let start = self.index(x, y0 as usize);
            let end = self.index(x, y1 as usize - 1) + CHANNELS;
            self.data[start..end]
                .chunks_exact_mut(CHANNELS)
                .for_each(|px| px.copy_from_slice(&rgb));
        }
    }

    /// Copies the canvas into a row-major `(y, x, channel)` frame.
    pub fn extract_frame(&self) -> Frame {
        let n = self.size;
        let mut data = vec![0u8; self.data.len()];
        for y in 0..n {
            for x in 0..n {
                let src = self.index(x, y);
                let dst = (y * n + x) * CHANNELS;
                data[dst..dst + CHANNELS].copy_from_slice(&self.data[src..src + CHANNELS]);
            }
        }
        Frame {
            height: n,
            width: n,
            data,
        }
    }
}

/// Row-major RGB observation with shape `(height, width, 3)`, `u8` channels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    height: usize,
    width: usize,
    data: Vec<u8>,
}

impl Frame {
    /// `(rows, columns, channels)`.
    pub fn shape(&self) -> (usize, usize, usize) {
        (self.height, self.width, CHANNELS)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Flat bytes, index `(y * width + x) * 3 + channel`.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }

    /// Channels at column `x`, row `y`, or `None` outside the frame.
    pub fn pixel(&self, x: usize, y: usize) -> Option<[u8; CHANNELS]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = (y * self.width + x) * CHANNELS;
        Some([self.data[i], self.data[i + 1], self.data[i + 2]])
    }

    /// Number of pixels equal to `color`.
    pub fn count_color(&self, color: Rgb) -> usize {
        let rgb = color.to_array();
        self.data
            .chunks_exact(CHANNELS)
            .filter(|px| *px == rgb)
            .count()
    }
}
