//! Source loading and resampling.
//!
//! This module provides functionality for:
//! - Probing a source's dimensions and format without decoding pixels
//! - Decoding PNG, JPEG and GIF sources to RGBA pixel buffers
//! - Executing a [`ResizePlan`](crate::geometry::ResizePlan) against a decoded buffer
//!
//! Any other container (BMP, WebP, TIFF, ...) is detected and rejected with
//! [`DecodeError::UnsupportedFormat`] rather than passed through.
//!
//! # Examples
//!
//! ```ignore
//! use resizer_core::decode::{decode_image, probe};
//!
//! let bytes = std::fs::read("photo.jpg")?;
//! let info = probe(&bytes)?;
//! println!("{} source, {}x{}", info.format, info.dimensions.width, info.dimensions.height);
//! let image = decode_image(&bytes)?;
//! ```

mod resample;
mod source;
mod types;

pub use resample::resample;
pub use source::{decode_image, probe, read_file};
pub use types::{DecodeError, DecodedImage, FilterType, SourceInfo};
