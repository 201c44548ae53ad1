// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Au-Zone Technologies. All Rights Reserved.

use args::{Args, ModeSetting};
use clap::Parser;
use edgeproc::{
    frame::{FrameBuffer, CHANNELS},
    logging,
    processor::{EdgeParams, FrameProcessor},
};
use image::RgbaImage;
use std::{error::Error, fs, io, path::Path, time::Instant};
use tracing::{debug, info};

mod args;

fn update_fps(prev: &mut Instant, history: &mut [i64], index: &mut usize) -> i64 {
    let now = Instant::now();

    let elapsed = now.duration_since(*prev);
    *prev = now;

    history[*index] = 1e9 as i64 / (elapsed.as_nanos() as i64).max(1);
    *index = (*index + 1) % history.len();

    (history.iter().sum::<i64>() as f64 / history.len() as f64).round() as i64
}

/// Copies a packed RGBA image into rows of `stride` bytes, padding filled
/// with zeros.
fn to_strided(img: &RgbaImage, stride: usize) -> Vec<u8> {
    let row_bytes = img.width() as usize * CHANNELS;
    let mut data = vec![0u8; stride * img.height() as usize];
    for (src, dst) in img
        .as_raw()
        .chunks_exact(row_bytes)
        .zip(data.chunks_exact_mut(stride))
    {
        dst[..row_bytes].copy_from_slice(src);
    }
    data
}

fn from_strided(frame: &FrameBuffer) -> Result<RgbaImage, Box<dyn Error>> {
    let mut packed = Vec::with_capacity(frame.width() as usize * frame.height() as usize * CHANNELS);
    for y in 0..frame.height() {
        packed.extend_from_slice(frame.row(y));
    }
    RgbaImage::from_raw(frame.width(), frame.height(), packed).ok_or_else(|| {
        Box::new(io::Error::new(
            io::ErrorKind::InvalidData,
            "processed frame size mismatch",
        )) as Box<dyn Error>
    })
}

fn process_file(
    processor: &FrameProcessor,
    input: &Path,
    output: &Path,
    row_padding: usize,
) -> Result<(), Box<dyn Error>> {
    let img = image::open(input)?.to_rgba8();
    let (width, height) = img.dimensions();
    let stride = width as usize * CHANNELS + row_padding;

    let mut data = to_strided(&img, stride);
    let mut frame = FrameBuffer::new(&mut data, width, height, stride)?;

    let now = Instant::now();
    processor.process(&mut frame)?;
    debug!("{} processed in {:.2?}", frame, now.elapsed());

    let mut name = input
        .file_stem()
        .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "input has no file name"))?
        .to_os_string();
    name.push(".png");
    let dst = output.join(name);
    from_strided(&frame)?.save(&dst)?;
    debug!("saved {}", dst.display());

    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    logging::init(args.verbose);

    let params = EdgeParams::new(args.low_threshold, args.high_threshold)?;
    let processor = FrameProcessor::with_params(params);
    processor.initialize();
    processor.set_mode(args.mode == ModeSetting::Edges);

    fs::create_dir_all(&args.output)?;

    let mut prev = Instant::now();
    let mut history = vec![0; args.fps_window as usize];
    let mut index = 0;
    let mut fps = 0;
    let start = Instant::now();

    for input in &args.inputs {
        process_file(&processor, input, &args.output, args.row_padding)?;
        fps = update_fps(&mut prev, &mut history, &mut index);
        debug!("{} fps: {}", input.display(), fps);
    }

    info!(
        "processed {} frames in {:.2?} mode: {} fps: {}",
        args.inputs.len(),
        start.elapsed(),
        processor.mode(),
        fps
    );

    Ok(())
}
