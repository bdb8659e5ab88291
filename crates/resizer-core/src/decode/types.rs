//! Core types for loading sources.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::ImageFormat;
use crate::geometry::Dimensions;

/// Error types for loading and resampling source images.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The bytes do not start with any known image signature.
    #[error("Unable to determine the image format")]
    UnrecognizedFormat,

    /// The image is in a format other than PNG, JPEG or GIF.
    #[error("Unknown image type `{0}` provided")]
    UnsupportedFormat(String),

    /// The image file is corrupted or incomplete.
    #[error("Corrupted or incomplete image file: {0}")]
    CorruptedFile(String),

    /// The image reports a zero width or height.
    #[error("Invalid dimensions: width ({width}) and height ({height}) must be non-zero")]
    InvalidDimensions { width: u32, height: u32 },

    /// A resize plan does not fit the image it was applied to.
    #[error("Resize plan does not fit a {width}x{height} source")]
    PlanMismatch { width: u32, height: u32 },

    /// I/O error during file reading.
    #[error("I/O error: {0}")]
    IoError(String),
}

/// Interpolation used when scaling the sampled region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterType {
    /// Nearest neighbor (fastest, blocky).
    Nearest,
    /// Bilinear (the usual speed/quality balance).
    #[default]
    Bilinear,
    /// Catmull-Rom cubic.
    CatmullRom,
    /// Lanczos with a 3 lobe window (slowest, sharpest).
    Lanczos3,
}

impl FilterType {
    /// Convert to the image crate's FilterType.
    pub fn to_image_filter(self) -> image::imageops::FilterType {
        match self {
            FilterType::Nearest => image::imageops::FilterType::Nearest,
            FilterType::Bilinear => image::imageops::FilterType::Triangle,
            FilterType::CatmullRom => image::imageops::FilterType::CatmullRom,
            FilterType::Lanczos3 => image::imageops::FilterType::Lanczos3,
        }
    }
}

impl fmt::Display for FilterType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            FilterType::Nearest => "nearest",
            FilterType::Bilinear => "bilinear",
            FilterType::CatmullRom => "catmullrom",
            FilterType::Lanczos3 => "lanczos3",
        })
    }
}

impl FromStr for FilterType {
    type Err = crate::config::ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "nearest" => Ok(FilterType::Nearest),
            "bilinear" | "triangle" => Ok(FilterType::Bilinear),
            "catmullrom" | "bicubic" => Ok(FilterType::CatmullRom),
            "lanczos3" | "lanczos" => Ok(FilterType::Lanczos3),
            _ => Err(crate::config::ConfigError::invalid_value(
                "filter",
                s,
                "one of: nearest, bilinear, catmullrom, lanczos3",
            )),
        }
    }
}

/// What the decoder reports about a source before any pixels are decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceInfo {
    pub dimensions: Dimensions,
    pub format: ImageFormat,
}

/// A decoded image with RGBA pixel data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedImage {
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
    /// RGBA pixel data in row-major order (4 bytes per pixel).
    pub pixels: Vec<u8>,
}

impl DecodedImage {
    /// Bytes per pixel in [`pixels`](Self::pixels).
    pub const CHANNELS: usize = 4;

    /// Create a new DecodedImage with the given dimensions and pixel data.
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        debug_assert_eq!(
            pixels.len(),
            width as usize * height as usize * Self::CHANNELS,
            "Pixel buffer size mismatch"
        );
        Self {
            width,
            height,
            pixels,
        }
    }

    pub fn from_rgba_image(img: image::RgbaImage) -> Self {
        let (width, height) = img.dimensions();
        Self {
            width,
            height,
            pixels: img.into_raw(),
        }
    }

    /// Copy into an owned `image` buffer, `None` if the pixel length is inconsistent.
    pub fn to_rgba_image(&self) -> Option<image::RgbaImage> {
        image::RgbaImage::from_raw(self.width, self.height, self.pixels.clone())
    }

    pub fn dimensions(&self) -> Dimensions {
        Dimensions::new(self.width, self.height)
    }

    /// Get the size of the pixel buffer in bytes.
    pub fn byte_size(&self) -> usize {
        self.pixels.len()
    }

    /// Check if this is an empty/invalid image.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0 || self.pixels.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_type_conversion() {
        assert!(matches!(
            FilterType::Nearest.to_image_filter(),
            image::imageops::FilterType::Nearest
        ));
        assert!(matches!(
            FilterType::Bilinear.to_image_filter(),
            image::imageops::FilterType::Triangle
        ));
        assert!(matches!(
            FilterType::CatmullRom.to_image_filter(),
            image::imageops::FilterType::CatmullRom
        ));
        assert!(matches!(
            FilterType::Lanczos3.to_image_filter(),
            image::imageops::FilterType::Lanczos3
        ));
    }

    #[test]
    fn test_filter_type_parsing() {
        assert_eq!("Lanczos".parse::<FilterType>().unwrap(), FilterType::Lanczos3);
        assert_eq!("triangle".parse::<FilterType>().unwrap(), FilterType::Bilinear);
        assert_eq!(FilterType::default(), FilterType::Bilinear);
        assert!("gaussian".parse::<FilterType>().is_err());

        for filter in [
            FilterType::Nearest,
            FilterType::Bilinear,
            FilterType::CatmullRom,
            FilterType::Lanczos3,
        ] {
            assert_eq!(filter.to_string().parse::<FilterType>().unwrap(), filter);
        }
    }

    #[test]
    fn test_decoded_image_creation() {
        let img = DecodedImage::new(100, 50, vec![0u8; 100 * 50 * 4]);

        assert_eq!(img.dimensions(), Dimensions::new(100, 50));
        assert_eq!(img.byte_size(), 20000);
        assert!(!img.is_empty());
        assert!(img.to_rgba_image().is_some());
    }

    #[test]
    fn test_decoded_image_empty() {
        let img = DecodedImage::new(0, 0, vec![]);
        assert!(img.is_empty());
    }

    #[test]
    fn test_inconsistent_buffer_has_no_rgba_image() {
        let img = DecodedImage {
            width: 10,
            height: 10,
            pixels: vec![0u8; 12],
        };
        assert!(img.to_rgba_image().is_none());
    }

    #[test]
    fn test_decode_error_display() {
        let err = DecodeError::UnsupportedFormat("Bmp".to_string());
        assert_eq!(err.to_string(), "Unknown image type `Bmp` provided");

        let err = DecodeError::PlanMismatch {
            width: 4,
            height: 2,
        };
        assert_eq!(err.to_string(), "Resize plan does not fit a 4x2 source");
    }
}
