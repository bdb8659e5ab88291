//! Reading and decoding source images.

use std::io::Cursor;
use std::path::Path;

use image::ImageReader;
use tracing::{debug, warn};

use super::{DecodeError, DecodedImage, SourceInfo};
use crate::config::ImageFormat;
use crate::geometry::Dimensions;

/// Read a source file from disk.
pub fn read_file(path: impl AsRef<Path>) -> Result<Vec<u8>, DecodeError> {
    let path = path.as_ref();
    std::fs::read(path).map_err(|e| DecodeError::IoError(format!("{}: {e}", path.display())))
}

/// Report the dimensions and format of a source without decoding its pixels.
///
/// # Errors
///
/// - `UnrecognizedFormat` if no image signature matches.
/// - `UnsupportedFormat` for anything other than PNG, JPEG or GIF.
/// - `CorruptedFile` if the header cannot be read.
/// - `InvalidDimensions` if the header reports a zero side.
pub fn probe(bytes: &[u8]) -> Result<SourceInfo, DecodeError> {
    let format = detect_format(bytes)?;
    let (width, height) = ImageReader::with_format(Cursor::new(bytes), format.to_image_format())
        .into_dimensions()
        .map_err(|e| DecodeError::CorruptedFile(e.to_string()))?;

    if width == 0 || height == 0 {
        return Err(DecodeError::InvalidDimensions { width, height });
    }

    Ok(SourceInfo {
        dimensions: Dimensions::new(width, height),
        format,
    })
}

/// Decode a PNG, JPEG or GIF source to RGBA pixels.
///
/// GIF sources decode to their first frame.
pub fn decode_image(bytes: &[u8]) -> Result<DecodedImage, DecodeError> {
    let format = detect_format(bytes)?;
    let img = ImageReader::with_format(Cursor::new(bytes), format.to_image_format())
        .decode()
        .map_err(|e| DecodeError::CorruptedFile(e.to_string()))?;

    let decoded = DecodedImage::from_rgba_image(img.into_rgba8());
    if decoded.width == 0 || decoded.height == 0 {
        return Err(DecodeError::InvalidDimensions {
            width: decoded.width,
            height: decoded.height,
        });
    }

    debug!(
        %format,
        width = decoded.width,
        height = decoded.height,
        "decoded source image"
    );
    Ok(decoded)
}

fn detect_format(bytes: &[u8]) -> Result<ImageFormat, DecodeError> {
    let detected = image::guess_format(bytes).map_err(|_| DecodeError::UnrecognizedFormat)?;
    ImageFormat::from_image_format(detected).ok_or_else(|| {
        warn!(?detected, "rejecting source in unsupported format");
        DecodeError::UnsupportedFormat(format!("{detected:?}"))
    })
}
