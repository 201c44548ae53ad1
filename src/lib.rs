// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Au-Zone Technologies. All Rights Reserved.

//! # Edge Preview Frame Processor
//!
//! Native side of the edge-detection camera preview. The Android host hands
//! each RGBA camera frame to this library, which rewrites it in place as
//! either a Canny edge map or a grayscale preview before the host renders it.
//!
//! ## Features
//!
//! - **Borrowed Frames**: [`frame::FrameBuffer`] wraps host-owned, optionally
//!   row-padded RGBA memory for the duration of a single call.
//! - **Edge Detection**: Canny with hysteresis thresholds 50/150 and a 3x3
//!   Sobel aperture, courtesy of `imageproc`.
//! - **Grayscale Preview**: luma conversion using the `image` crate's
//!   standard weights, replicated back to opaque RGBA.
//! - **JNI Bridge**: exports for `com.edge.detect.MainActivity` built into
//!   `libedgeproc.so`.
//!
//! ## Example
//!
//! ```
//! use edgeproc::{frame::FrameBuffer, processor::{FrameProcessor, Mode}};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let processor = FrameProcessor::new();
//! assert_eq!(processor.mode(), Mode::Edges);
//!
//! // 320x240 frame with 16 bytes of padding per row
//! let stride = 320 * 4 + 16;
//! let mut pixels = vec![0u8; stride * 240];
//! let mut frame = FrameBuffer::new(&mut pixels, 320, 240, stride)?;
//! processor.process(&mut frame)?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Safety
//!
//! `unsafe` is confined to the [`bridge`] module, where Java array elements
//! are pinned and viewed as a byte slice.

pub mod bridge;
pub mod frame;
pub mod logging;
pub mod processor;
