#![allow(dead_code)]

use std::io::Cursor;

use harbor_core::models::image::ImageFile;
use image::{ImageFormat, RgbImage};

/// Deterministic noise, which compresses poorly and keeps encoded files large.
pub fn noisy_rgb(width: u32, height: u32, seed: u32) -> RgbImage {
    let mut state = seed.max(1);
    RgbImage::from_fn(width, height, |_, _| {
        let mut next = || {
            state ^= state << 13;
            state ^= state >> 17;
            state ^= state << 5;
            (state & 0xff) as u8
        };
        image::Rgb([next(), next(), next()])
    })
}

pub fn encode(img: &RgbImage, format: ImageFormat) -> Vec<u8> {
    let mut buf = Cursor::new(Vec::new());
    img.write_to(&mut buf, format).unwrap();
    buf.into_inner()
}

pub fn png_file(name: &str, width: u32, height: u32, seed: u32) -> ImageFile {
    let bytes = encode(&noisy_rgb(width, height, seed), ImageFormat::Png);
    ImageFile::new(name, "image/png", bytes)
}

pub fn jpeg_file(name: &str, width: u32, height: u32, seed: u32) -> ImageFile {
    let bytes = encode(&noisy_rgb(width, height, seed), ImageFormat::Jpeg);
    ImageFile::new(name, "image/jpeg", bytes)
}

pub fn webp_file(name: &str, width: u32, height: u32, seed: u32) -> ImageFile {
    let bytes = encode(&noisy_rgb(width, height, seed), ImageFormat::WebP);
    ImageFile::new(name, "image/webp", bytes)
}
