use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::PngEncoder;
use image::codecs::webp::WebPEncoder;
use image::{ExtendedColorType, ImageEncoder};

use vidthumb_core::format::ImageFormat;

use crate::decoder::VideoFrame;
use crate::error::{MediaError, Result};

/// Encode a decoded frame into a complete image buffer.
///
/// Quality applies to JPEG only (0 = worst, 100 = best, the image crate's
/// convention). PNG is lossless; the available WebP encoder is lossless
/// as well, so both ignore quality.
pub fn encode_frame(frame: &VideoFrame, format: ImageFormat, quality: u8) -> Result<Vec<u8>> {
    let mut buf = Vec::new();

    let result = match format {
        ImageFormat::Jpeg => {
            // The JPEG encoder accepts 1-100.
            let quality = quality.clamp(1, 100);
            JpegEncoder::new_with_quality(&mut buf, quality).write_image(
                &frame.data,
                frame.width,
                frame.height,
                ExtendedColorType::Rgb8,
            )
        }
        ImageFormat::Png => PngEncoder::new(&mut buf).write_image(
            &frame.data,
            frame.width,
            frame.height,
            ExtendedColorType::Rgb8,
        ),
        ImageFormat::Webp => WebPEncoder::new_lossless(&mut buf).write_image(
            &frame.data,
            frame.width,
            frame.height,
            ExtendedColorType::Rgb8,
        ),
    };

    result.map_err(|e| MediaError::EncoderError(format!("{}: {e}", format.extension())))?;

    Ok(buf)
}
