//! Image resizing WASM bindings.
//!
//! # Functions
//!
//! - [`probe_image`] - Read dimensions and format without decoding pixels
//! - [`resize_image`] - Decode, resize and re-encode in one call
//!
//! # Example
//!
//! ```typescript
//! import { probe_image, resize_image } from '@image-resizer/wasm';
//!
//! const bytes = new Uint8Array(await file.arrayBuffer());
//! const info = probe_image(bytes);
//! const thumb = resize_image(bytes, { format: 'jpeg', mode: 'cover', width: 300, height: 300 });
//! const blob = new Blob([thumb.bytes()], { type: thumb.mime_type });
//! ```

use crate::plan::parse_overrides;
use crate::types::{JsResizedImage, JsSourceInfo};
use resizer_core::{decode, ConfigOverrides, EncodeOptions, ImageResizer, ResizedImage};
use wasm_bindgen::prelude::*;

/// Read the dimensions and format of a PNG, JPEG or GIF image.
///
/// # Errors
///
/// Returns an error for unrecognised, unsupported or corrupted input.
#[wasm_bindgen]
pub fn probe_image(bytes: &[u8]) -> Result<JsSourceInfo, JsValue> {
    decode::probe(bytes)
        .map(JsSourceInfo::from_info)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Resize an encoded image.
///
/// `config` takes the same optional object as `compute_plan`. `quality` is
/// the JPEG quality (1-100, default 75) and is ignored for other formats.
///
/// # Errors
///
/// Returns an error for invalid configuration, an undecodable source, or an
/// encoder failure.
#[wasm_bindgen]
pub fn resize_image(
    bytes: &[u8],
    config: JsValue,
    quality: Option<u8>,
) -> Result<JsResizedImage, JsValue> {
    let overrides = parse_overrides(config)?;
    resize_with_overrides(bytes, &overrides, quality)
        .map(JsResizedImage::from_resized)
        .map_err(|e| JsValue::from_str(&e))
}

pub(crate) fn resize_with_overrides(
    bytes: &[u8],
    overrides: &ConfigOverrides,
    quality: Option<u8>,
) -> Result<ResizedImage, String> {
    let mut options = EncodeOptions::default();
    if let Some(quality) = quality {
        options = options.with_jpeg_quality(quality);
    }

    ImageResizer::default()
        .with_encode_options(options)
        .process(bytes, Some(overrides))
        .map_err(|e| e.to_string())
}
