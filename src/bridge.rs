// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Au-Zone Technologies. All Rights Reserved.

//! JNI entry points for `com.edge.detect.MainActivity`.
//!
//! The host calls these from its camera analysis thread and UI thread. All
//! state lives in a single [`FrameProcessor`]; nothing is thrown back into
//! Java, failures are logged and the frame is left as delivered.

use crate::{logging, processor::FrameProcessor};
use jni::{
    objects::{JByteArray, JObject, ReleaseMode},
    sys::{jboolean, jbyte, jint, JNI_TRUE},
    JNIEnv,
};
use std::fmt;
use tracing::error;

static PROCESSOR: FrameProcessor = FrameProcessor::new();

#[no_mangle]
pub extern "system" fn Java_com_edge_detect_MainActivity_00024Companion_nativeInit(
    _env: JNIEnv,
    _this: JObject,
) {
}

#[no_mangle]
pub extern "system" fn Java_com_edge_detect_MainActivity_nativeInit(_env: JNIEnv, _this: JObject) {
    logging::init(false);
    PROCESSOR.initialize();
}

#[no_mangle]
pub extern "system" fn Java_com_edge_detect_MainActivity_nativeSetMode(
    _env: JNIEnv,
    _this: JObject,
    edge: jboolean,
) {
    PROCESSOR.set_mode(edge == JNI_TRUE);
}

/// Processes one RGBA frame held in a Java `byte[]`.
///
/// The array elements are pinned (or copied) for the duration of the call and
/// released with copy-back when the guard drops, on every return path.
#[no_mangle]
pub extern "system" fn Java_com_edge_detect_MainActivity_nativeOnFrameRGBA<'local>(
    mut env: JNIEnv<'local>,
    _this: JObject<'local>,
    data: JByteArray<'local>,
    width: jint,
    height: jint,
    stride: jint,
) {
    let mut elements = if data.is_null() {
        Err(jni::errors::Error::NullPtr("frame array"))
    } else {
        // SAFETY: no other reference to the array elements is taken while the
        // guard is alive and the guard does not outlive this call.
        unsafe { env.get_array_elements(&data, ReleaseMode::CopyBack) }
    };

    let pixels = match elements.as_mut() {
        Ok(elements) => Ok(as_bytes_mut(elements)),
        Err(e) => Err(e),
    };
    process_frame(&PROCESSOR, pixels, width, height, stride);
}

fn as_bytes_mut(elements: &mut [jbyte]) -> &mut [u8] {
    // SAFETY: jbyte and u8 share size and alignment; the result keeps the
    // borrow of `elements`.
    unsafe { &mut *(elements as *mut [jbyte] as *mut [u8]) }
}

/// Runs the processor over an acquired host buffer.
///
/// A failed acquisition or a rejected geometry is logged and leaves the
/// buffer untouched. Returns whether the frame was rewritten.
pub fn process_frame<E: fmt::Display>(
    processor: &FrameProcessor,
    pixels: Result<&mut [u8], E>,
    width: i32,
    height: i32,
    stride: i32,
) -> bool {
    let pixels = match pixels {
        Ok(pixels) => pixels,
        Err(e) => {
            error!("failed to acquire frame buffer: {}", e);
            return false;
        }
    };

    match processor.process_bytes(pixels, width, height, stride) {
        Ok(()) => true,
        Err(e) => {
            error!("frame {}x{} stride {} skipped: {}", width, height, stride, e);
            false
        }
    }
}
