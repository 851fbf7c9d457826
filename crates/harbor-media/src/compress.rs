use harbor_core::models::image::ImageFile;
use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::PngEncoder;
use image::codecs::webp::WebPEncoder;
use image::imageops::FilterType;
use image::DynamicImage;

use crate::error::CompressError;

/// Files smaller than this are passed through untouched.
pub const SKIP_BELOW_BYTES: usize = 100 * 1024;

/// Longest side of a compressed image, in pixels.
pub const MAX_DIMENSION: u32 = 400;

/// Target size for a `width` x `height` image: the longer side is capped at
/// [`MAX_DIMENSION`] and the shorter side follows the aspect ratio.
pub fn target_dimensions(width: u32, height: u32) -> (u32, u32) {
    let scale = |side: u32, longer: u32| -> u32 {
        let scaled = f64::from(side) * f64::from(MAX_DIMENSION) / f64::from(longer);
        (scaled.round() as u32).max(1)
    };

    if width >= height {
        if width > MAX_DIMENSION {
            return (MAX_DIMENSION, scale(height, width));
        }
    } else if height > MAX_DIMENSION {
        return (scale(width, height), MAX_DIMENSION);
    }
    (width, height)
}

/// Downscale and re-encode an image, reporting progress (0–100) at each stage.
///
/// Small files skip processing entirely, even when their pixel dimensions
/// exceed [`MAX_DIMENSION`]. PNG output is lossless and ignores `quality`;
/// WebP output is lossless because the encoder has no lossy mode.
pub fn compress<F>(
    file: &ImageFile,
    quality: f64,
    mut on_progress: F,
) -> Result<ImageFile, CompressError>
where
    F: FnMut(u8),
{
    if file.size() < SKIP_BELOW_BYTES {
        on_progress(100);
        return Ok(file.clone());
    }

    let source = image::load_from_memory(&file.bytes)
        .map_err(|e| CompressError::ImageLoad(e.to_string()))?;
    on_progress(25);

    let (width, height) = target_dimensions(source.width(), source.height());
    on_progress(50);

    let resized = source.resize_exact(width, height, FilterType::Triangle);
    on_progress(75);

    let bytes = encode(&resized, &file.content_type, quality)?;
    on_progress(100);

    tracing::debug!(
        name = %file.name,
        original_bytes = file.size(),
        compressed_bytes = bytes.len(),
        width,
        height,
        "image compressed"
    );

    Ok(ImageFile {
        name: file.name.clone(),
        content_type: file.content_type.clone(),
        bytes,
        last_modified: jiff::Timestamp::now(),
    })
}

fn encode(
    image: &DynamicImage,
    content_type: &str,
    quality: f64,
) -> Result<Vec<u8>, CompressError> {
    let mut buf = Vec::new();
    let result = match content_type {
        "image/jpeg" | "image/jpg" => {
            let quality = (quality.clamp(0.0, 1.0) * 100.0).round().max(1.0) as u8;
            JpegEncoder::new_with_quality(&mut buf, quality).encode_image(&image.to_rgb8())
        }
        "image/png" => image.write_with_encoder(PngEncoder::new(&mut buf)),
        "image/webp" => DynamicImage::ImageRgba8(image.to_rgba8())
            .write_with_encoder(WebPEncoder::new_lossless(&mut buf)),
        other => {
            return Err(CompressError::Compression(format!(
                "cannot encode {other} images"
            )));
        }
    };
    result.map_err(|e| CompressError::Compression(e.to_string()))?;
    Ok(buf)
}
