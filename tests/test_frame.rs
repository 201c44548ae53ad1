// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Au-Zone Technologies. All Rights Reserved.

use edgeproc::frame::{FrameBuffer, CHANNELS};
use image::{GrayImage, Luma, Pixel, Rgba};
use std::error::Error;

const PAD: u8 = 0xAB;

fn strided(width: u32, height: u32, padding: usize) -> (Vec<u8>, usize) {
    let stride = width as usize * CHANNELS + padding;
    let mut data = vec![PAD; stride * height as usize];
    for y in 0..height as usize {
        for x in 0..width as usize {
            let i = y * stride + x * CHANNELS;
            data[i..i + 4].copy_from_slice(&[(x * 7) as u8, (y * 5) as u8, (x + y) as u8, 90]);
        }
    }
    (data, stride)
}

#[test]
fn test_dimensions() -> Result<(), Box<dyn Error>> {
    let (mut data, stride) = strided(64, 48, 32);
    let frame = FrameBuffer::new(&mut data, 64, 48, stride)?;

    println!("{}", frame);
    assert_eq!(frame.width(), 64);
    assert_eq!(frame.height(), 48);
    assert_eq!(frame.stride(), 64 * 4 + 32);
    assert_eq!(frame.row(3).len(), 64 * 4);
    assert_eq!(frame.as_slice().len(), stride * 48);

    Ok(())
}

#[test]
fn test_invalid_geometry() {
    let mut data = vec![0u8; 16 * 4 * 16];

    assert!(FrameBuffer::new(&mut data, 0, 16, 64).is_err());
    assert!(FrameBuffer::new(&mut data, 16, 0, 64).is_err());
    assert!(FrameBuffer::new(&mut data, 16, 16, 63).is_err());
    assert!(FrameBuffer::new(&mut data, 16, 17, 64).is_err());
    assert!(FrameBuffer::new(&mut data, 16, 16, usize::MAX).is_err());

    assert!(FrameBuffer::from_host(&mut data, -16, 16, 64).is_err());
    assert!(FrameBuffer::from_host(&mut data, 16, -16, 64).is_err());
    assert!(FrameBuffer::from_host(&mut data, 16, 16, -64).is_err());
    assert!(FrameBuffer::from_host(&mut data, 16, 16, 64).is_ok());
}

/// A width whose row size wraps a 32-bit usize must not slip past the stride
/// check.
#[test]
fn test_row_size_overflow() {
    let mut data = vec![0u8; 4];
    let original = data.clone();

    assert!(FrameBuffer::from_host(&mut data, 0x4000_0001, 1, 4).is_err());
    assert!(FrameBuffer::new(&mut data, 0x4000_0001, 1, 4).is_err());
    assert!(FrameBuffer::new(&mut data, u32::MAX, u32::MAX, usize::MAX).is_err());
    assert_eq!(data, original);
}

/// Camera planes frequently end after the last visible pixel rather than
/// after the last row's padding.
#[test]
fn test_unpadded_last_row() -> Result<(), Box<dyn Error>> {
    let stride = 10 * 4 + 24;
    let mut data = vec![0u8; stride * 7 + 10 * 4];
    let frame = FrameBuffer::new(&mut data, 10, 8, stride)?;
    assert_eq!(frame.row(7).len(), 40);

    let mut short = vec![0u8; stride * 7 + 10 * 4 - 1];
    assert!(FrameBuffer::new(&mut short, 10, 8, stride).is_err());

    Ok(())
}

#[test]
fn test_to_luma() -> Result<(), Box<dyn Error>> {
    let (mut data, stride) = strided(20, 10, 12);
    let expected: Vec<Luma<u8>> = (0..10u32)
        .flat_map(|y| {
            let data = &data;
            (0..20usize).map(move |x| {
                let i = y as usize * stride + x * CHANNELS;
                Rgba::from_slice(&data[i..i + 4]).to_luma()
            })
        })
        .collect();

    let frame = FrameBuffer::new(&mut data, 20, 10, stride)?;
    let gray = frame.to_luma();

    assert_eq!(gray.dimensions(), (20, 10));
    assert_eq!(gray.pixels().copied().collect::<Vec<_>>(), expected);

    Ok(())
}

#[test]
fn test_luma_ignores_alpha() -> Result<(), Box<dyn Error>> {
    let mut opaque = [10u8, 150, 220, 255].repeat(4);
    let mut clear = [10u8, 150, 220, 0].repeat(4);

    let a = FrameBuffer::new(&mut opaque, 2, 2, 8)?.to_luma();
    let b = FrameBuffer::new(&mut clear, 2, 2, 8)?.to_luma();
    assert_eq!(a, b);

    Ok(())
}

#[test]
fn test_write_luma() -> Result<(), Box<dyn Error>> {
    let (mut data, stride) = strided(16, 12, 20);
    let gray = GrayImage::from_fn(16, 12, |x, y| Luma([(x * 16 + y) as u8]));

    let mut frame = FrameBuffer::new(&mut data, 16, 12, stride)?;
    frame.write_luma(&gray)?;

    for y in 0..12 {
        for (x, px) in frame.row(y).chunks_exact(CHANNELS).enumerate() {
            let l = (x as u32 * 16 + y) as u8;
            assert_eq!(px, [l, l, l, 255]);
        }
    }

    for y in 0..12 {
        let start = y * stride + 16 * CHANNELS;
        assert!(data[start..start + 20].iter().all(|b| *b == PAD));
    }

    Ok(())
}

#[test]
fn test_write_luma_mismatch() -> Result<(), Box<dyn Error>> {
    let (mut data, stride) = strided(16, 12, 0);
    let original = data.clone();

    let mut frame = FrameBuffer::new(&mut data, 16, 12, stride)?;
    assert!(frame.write_luma(&GrayImage::new(12, 16)).is_err());
    assert_eq!(data, original);

    Ok(())
}
