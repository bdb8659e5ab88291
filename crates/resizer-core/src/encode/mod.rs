//! Encoding resampled pixels to the configured output format.
//!
//! PNG and GIF keep the alpha channel (GIF through palette quantization);
//! JPEG drops it.
//!
//! # Examples
//!
//! ```ignore
//! use resizer_core::config::ImageFormat;
//! use resizer_core::decode::DecodedImage;
//! use resizer_core::encode::{encode, EncodeOptions};
//!
//! let image = DecodedImage::new(100, 100, vec![128u8; 100 * 100 * 4]);
//! let png = encode(&image, ImageFormat::Png, EncodeOptions::default()).unwrap();
//! println!("Encoded {} bytes", png.len());
//! ```

mod codec;

pub use codec::{encode, EncodeError, EncodeOptions};
