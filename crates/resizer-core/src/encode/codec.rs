use std::io::Cursor;

use image::codecs::gif::GifEncoder;
use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::config::ImageFormat;
use crate::decode::DecodedImage;

/// Errors that can occur while encoding output images.
#[derive(Debug, Error)]
pub enum EncodeError {
    /// Pixel data length doesn't match expected dimensions
    #[error("Invalid pixel data: expected {expected} bytes (width * height * 4), got {actual}")]
    InvalidPixelData { expected: usize, actual: usize },

    /// Width or height is zero
    #[error("Invalid dimensions: width ({width}) and height ({height}) must be non-zero")]
    InvalidDimensions { width: u32, height: u32 },

    /// The codec rejected the image
    #[error("{format} encoding failed: {message}")]
    EncodingFailed {
        format: ImageFormat,
        message: String,
    },

    /// Writing the encoded bytes failed
    #[error("I/O error: {0}")]
    IoError(String),
}

/// Codec settings that are not part of the resize configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EncodeOptions {
    /// JPEG quality, 1-100. Ignored by PNG and GIF.
    pub jpeg_quality: u8,
}

impl EncodeOptions {
    pub const DEFAULT_JPEG_QUALITY: u8 = 75;

    /// Set the JPEG quality, clamped to 1-100.
    pub fn with_jpeg_quality(mut self, quality: u8) -> Self {
        self.jpeg_quality = quality.clamp(1, 100);
        self
    }
}

impl Default for EncodeOptions {
    fn default() -> Self {
        Self {
            jpeg_quality: Self::DEFAULT_JPEG_QUALITY,
        }
    }
}

/// Encode RGBA pixels as `format`.
///
/// # Errors
///
/// `InvalidDimensions` or `InvalidPixelData` if the image buffer is
/// inconsistent, `EncodingFailed` if the codec itself fails.
pub fn encode(
    image: &DecodedImage,
    format: ImageFormat,
    options: EncodeOptions,
) -> Result<Vec<u8>, EncodeError> {
    let (width, height) = (image.width, image.height);
    if width == 0 || height == 0 {
        return Err(EncodeError::InvalidDimensions { width, height });
    }

    let expected = width as usize * height as usize * DecodedImage::CHANNELS;
    if image.pixels.len() != expected {
        return Err(EncodeError::InvalidPixelData {
            expected,
            actual: image.pixels.len(),
        });
    }

    let failed = |e: image::ImageError| EncodeError::EncodingFailed {
        format,
        message: e.to_string(),
    };

    let bytes = match format {
        ImageFormat::Png => {
            let mut buffer = Cursor::new(Vec::new());
            PngEncoder::new(&mut buffer)
                .write_image(&image.pixels, width, height, ExtendedColorType::Rgba8)
                .map_err(failed)?;
            buffer.into_inner()
        }
        ImageFormat::Jpeg => {
            let rgb = strip_alpha(&image.pixels);
            let quality = options.jpeg_quality.clamp(1, 100);
            let mut buffer = Cursor::new(Vec::new());
            JpegEncoder::new_with_quality(&mut buffer, quality)
                .write_image(&rgb, width, height, ExtendedColorType::Rgb8)
                .map_err(failed)?;
            buffer.into_inner()
        }
        ImageFormat::Gif => {
            let mut buffer = Vec::new();
            {
                // The trailer is written when the encoder drops.
                let mut encoder = GifEncoder::new_with_speed(&mut buffer, 10);
                encoder
                    .encode(&image.pixels, width, height, ExtendedColorType::Rgba8)
                    .map_err(failed)?;
            }
            buffer
        }
    };

    debug!(%format, width, height, size = bytes.len(), "encoded image");
    Ok(bytes)
}

fn strip_alpha(rgba: &[u8]) -> Vec<u8> {
    let mut rgb = Vec::with_capacity(rgba.len() / 4 * 3);
    for px in rgba.chunks_exact(4) {
        rgb.extend_from_slice(&px[..3]);
    }
    rgb
}
