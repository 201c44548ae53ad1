// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Au-Zone Technologies. All Rights Reserved.

use core::fmt;
use image::{GrayImage, Pixel, Rgba};
use std::{error::Error, io};

/// Bytes per pixel of an RGBA 32-bit frame (8 bits per channel, with alpha)
pub const CHANNELS: usize = 4;

fn invalid(msg: String) -> Box<dyn Error> {
    Box::new(io::Error::new(io::ErrorKind::InvalidInput, msg))
}

/// Borrowed view over an RGBA frame owned by the host application.
///
/// The view never owns the pixel memory; its lifetime is tied to the slice
/// handed in by the caller so it cannot outlive a single processing call.
/// Rows may be padded: `stride` is the byte distance between the start of
/// consecutive rows and only the first `width * 4` bytes of each row are
/// treated as pixels.
///
/// # Example
///
/// ```
/// use edgeproc::frame::FrameBuffer;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let mut pixels = vec![0u8; 64 * 4 * 48];
/// let frame = FrameBuffer::new(&mut pixels, 64, 48, 64 * 4)?;
/// assert_eq!(frame.width(), 64);
/// assert_eq!(frame.height(), 48);
/// # Ok(())
/// # }
/// ```
pub struct FrameBuffer<'a> {
    data: &'a mut [u8],
    width: u32,
    height: u32,
    stride: usize,
}

impl<'a> FrameBuffer<'a> {
    /// Wraps host memory as an RGBA frame.
    ///
    /// # Errors
    ///
    /// Returns an `InvalidInput` error if:
    /// - Either dimension is zero
    /// - `stride` is smaller than `width * 4`
    /// - `data` cannot hold `height` rows of `stride` bytes (the final row
    ///   only needs its visible pixels, camera planes often omit its padding)
    pub fn new(
        data: &'a mut [u8],
        width: u32,
        height: u32,
        stride: usize,
    ) -> Result<Self, Box<dyn Error>> {
        if width == 0 || height == 0 {
            return Err(invalid(format!("empty frame {}x{}", width, height)));
        }

        // u64 so the checks also hold where usize is 32 bits
        let row_bytes = u64::from(width) * CHANNELS as u64;
        if (stride as u64) < row_bytes {
            return Err(invalid(format!(
                "stride {} smaller than row of {} bytes",
                stride, row_bytes
            )));
        }

        let required = (stride as u64)
            .checked_mul(u64::from(height) - 1)
            .and_then(|n| n.checked_add(row_bytes))
            .and_then(|n| usize::try_from(n).ok())
            .ok_or_else(|| invalid(format!("frame {}x{} overflows", width, height)))?;
        if data.len() < required {
            return Err(invalid(format!(
                "buffer of {} bytes too small for {}x{} stride {} ({} bytes)",
                data.len(),
                width,
                height,
                stride,
                required
            )));
        }

        Ok(Self {
            data,
            width,
            height,
            stride,
        })
    }

    /// Wraps host memory described with signed JNI integers.
    ///
    /// Negative values are rejected before any of the checks in
    /// [`FrameBuffer::new`].
    pub fn from_host(
        data: &'a mut [u8],
        width: i32,
        height: i32,
        stride: i32,
    ) -> Result<Self, Box<dyn Error>> {
        let width = u32::try_from(width).map_err(|_| invalid(format!("width {}", width)))?;
        let height = u32::try_from(height).map_err(|_| invalid(format!("height {}", height)))?;
        let stride = usize::try_from(stride).map_err(|_| invalid(format!("stride {}", stride)))?;
        Self::new(data, width, height, stride)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn stride(&self) -> usize {
        self.stride
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.data[..]
    }

    /// Visible pixels of row `y`, padding excluded.
    pub fn row(&self, y: u32) -> &[u8] {
        let start = y as usize * self.stride;
        &self.data[start..start + self.width as usize * CHANNELS]
    }

    pub fn row_mut(&mut self, y: u32) -> &mut [u8] {
        let start = y as usize * self.stride;
        &mut self.data[start..start + self.width as usize * CHANNELS]
    }

    /// Converts the frame to a single intensity channel.
    ///
    /// Uses the image library's standard luma weights; alpha is ignored.
    pub fn to_luma(&self) -> GrayImage {
        let mut gray = GrayImage::new(self.width, self.height);
        for y in 0..self.height {
            for (x, px) in self.row(y).chunks_exact(CHANNELS).enumerate() {
                gray.put_pixel(x as u32, y, Rgba::from_slice(px).to_luma());
            }
        }
        gray
    }

    /// Overwrites every visible pixel with the matching intensity.
    ///
    /// Intensity is replicated into R, G and B and alpha is set fully opaque,
    /// the library's default gray to RGBA mapping. Padding bytes are left as
    /// they were.
    pub fn write_luma(&mut self, luma: &GrayImage) -> Result<(), Box<dyn Error>> {
        if luma.dimensions() != (self.width, self.height) {
            return Err(invalid(format!(
                "{}x{} intensity image does not match {}x{} frame",
                luma.width(),
                luma.height(),
                self.width,
                self.height
            )));
        }

        for y in 0..self.height {
            let row = self.row_mut(y);
            for (x, px) in row.chunks_exact_mut(CHANNELS).enumerate() {
                px.copy_from_slice(&luma.get_pixel(x as u32, y).to_rgba().0);
            }
        }
        Ok(())
    }
}

impl fmt::Display for FrameBuffer<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}x{} RGBA stride:{} len:{}",
            self.width,
            self.height,
            self.stride,
            self.data.len()
        )
    }
}
