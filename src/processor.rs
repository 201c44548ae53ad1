// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Au-Zone Technologies. All Rights Reserved.

use crate::frame::FrameBuffer;
use core::fmt;
use imageproc::edges::canny;
use std::{
    error::Error,
    io,
    sync::atomic::{AtomicBool, Ordering},
};
use tracing::{info, trace};

/// Frame transform selected by the host.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Mode {
    /// Canny edge map replicated into RGB
    Edges,
    /// Desaturated preview of the camera frame
    Grayscale,
}

impl From<bool> for Mode {
    fn from(edges: bool) -> Self {
        if edges {
            Mode::Edges
        } else {
            Mode::Grayscale
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Mode::Edges => write!(f, "edges"),
            Mode::Grayscale => write!(f, "grayscale"),
        }
    }
}

/// Hysteresis thresholds for edge detection.
///
/// Gradients are computed with a 3x3 Sobel kernel so the aperture is fixed
/// at 3; only the threshold pair is configurable.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct EdgeParams {
    /// Gradient magnitude below which a pixel is never an edge
    pub low: f32,
    /// Gradient magnitude above which a pixel is always an edge
    pub high: f32,
}

impl EdgeParams {
    pub const DEFAULT: EdgeParams = EdgeParams {
        low: 50.0,
        high: 150.0,
    };

    /// Validates a threshold pair.
    ///
    /// # Errors
    ///
    /// Returns an `InvalidInput` error if either threshold is negative or not
    /// finite, or if `low` exceeds `high`.
    pub fn new(low: f32, high: f32) -> Result<Self, Box<dyn Error>> {
        if !low.is_finite() || !high.is_finite() || low < 0.0 || high < 0.0 {
            return Err(Box::new(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("invalid edge thresholds {} {}", low, high),
            )));
        }
        if low > high {
            return Err(Box::new(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("low threshold {} above high threshold {}", low, high),
            )));
        }
        Ok(Self { low, high })
    }
}

impl Default for EdgeParams {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// In-place RGBA frame processor.
///
/// Holds the edge/grayscale mode flag, which defaults to edge detection and
/// persists until changed. The flag is an atomic read once per frame, so a
/// `set_mode` racing a `process` call leaves at most one frame on the
/// previous mode.
///
/// `FrameProcessor::new` is `const` so a single processor can back the JNI
/// entry points from a `static`.
///
/// # Example
///
/// ```
/// use edgeproc::{frame::FrameBuffer, processor::FrameProcessor};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let processor = FrameProcessor::new();
/// processor.set_mode(false);
///
/// let mut pixels = vec![128u8; 32 * 4 * 24];
/// let mut frame = FrameBuffer::new(&mut pixels, 32, 24, 32 * 4)?;
/// processor.process(&mut frame)?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct FrameProcessor {
    edges: AtomicBool,
    params: EdgeParams,
}

impl FrameProcessor {
    pub const fn new() -> Self {
        Self::with_params(EdgeParams::DEFAULT)
    }

    pub const fn with_params(params: EdgeParams) -> Self {
        Self {
            edges: AtomicBool::new(true),
            params,
        }
    }

    /// Setup hook invoked once by the host before the first frame.
    pub fn initialize(&self) {
        info!(
            mode = %self.mode(),
            low = self.params.low,
            high = self.params.high,
            "frame processor initialized"
        );
    }

    /// Selects edge detection (`true`) or grayscale preview (`false`) for
    /// subsequent frames.
    pub fn set_mode(&self, edges: bool) {
        self.edges.store(edges, Ordering::Relaxed);
    }

    pub fn mode(&self) -> Mode {
        Mode::from(self.edges.load(Ordering::Relaxed))
    }

    pub fn params(&self) -> EdgeParams {
        self.params
    }

    /// Rewrites the frame in place according to the current mode.
    ///
    /// Dimensions and stride are unchanged and every visible pixel is
    /// overwritten. Intermediate images are dropped before returning.
    pub fn process(&self, frame: &mut FrameBuffer<'_>) -> Result<(), Box<dyn Error>> {
        let mode = self.mode();
        let gray = frame.to_luma();
        let out = match mode {
            Mode::Edges => canny(&gray, self.params.low, self.params.high),
            Mode::Grayscale => gray,
        };
        frame.write_luma(&out)?;
        trace!("processed {} {}", frame, mode);
        Ok(())
    }

    /// Validates a host buffer description then processes it.
    ///
    /// # Errors
    ///
    /// Returns the [`FrameBuffer::from_host`] validation error, in which case
    /// no byte of `data` has been written.
    pub fn process_bytes(
        &self,
        data: &mut [u8],
        width: i32,
        height: i32,
        stride: i32,
    ) -> Result<(), Box<dyn Error>> {
        let mut frame = FrameBuffer::from_host(data, width, height, stride)?;
        self.process(&mut frame)
    }
}

impl Default for FrameProcessor {
    fn default() -> Self {
        Self::new()
    }
}
