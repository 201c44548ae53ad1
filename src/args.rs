// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Au-Zone Technologies. All Rights Reserved.

use clap::Parser;
use std::path::PathBuf;

/// Frame transform selection.
///
/// Mirrors the mode toggle of the mobile preview.
#[derive(clap::ValueEnum, Clone, Debug, PartialEq, Copy)]
pub enum ModeSetting {
    /// Canny edge map
    Edges,
    /// Grayscale preview
    Grayscale,
}

/// Command-line arguments for the desktop frame processor.
///
/// Runs still images through the same in-place processing path used by the
/// JNI bridge, treating the inputs as a sequence of camera frames. Arguments
/// can be specified via command line or environment variables.
///
/// # Example
///
/// ```bash
/// # Via command line
/// edgeproc --mode grayscale -o out frame0.png frame1.png
///
/// # Via environment variables
/// export MODE=edges
/// export ROW_PADDING=64
/// edgeproc frame0.png
/// ```
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Input frames (any format the image crate can decode)
    #[arg(required = true)]
    pub inputs: Vec<PathBuf>,

    /// Directory for processed frames, written as PNG
    #[arg(short, long, env = "OUTPUT", default_value = "out")]
    pub output: PathBuf,

    /// Frame transform
    #[arg(long, env = "MODE", default_value = "edges", value_enum)]
    pub mode: ModeSetting,

    /// Canny low hysteresis threshold
    #[arg(long, env = "LOW_THRESHOLD", default_value = "50")]
    pub low_threshold: f32,

    /// Canny high hysteresis threshold
    #[arg(long, env = "HIGH_THRESHOLD", default_value = "150")]
    pub high_threshold: f32,

    /// Extra bytes appended to each row to emulate padded camera planes
    #[arg(long, env = "ROW_PADDING", default_value = "0")]
    pub row_padding: usize,

    /// Number of frames averaged for the FPS readout
    #[arg(long, default_value = "10", value_parser = clap::value_parser!(u32).range(1..))]
    pub fps_window: u32,

    /// Enable verbose debug logging
    #[arg(short, long)]
    pub verbose: bool,
}
