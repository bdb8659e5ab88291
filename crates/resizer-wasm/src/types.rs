//! WASM-compatible wrapper types.
//!
//! Core types are plain Rust values; these wrappers expose them to
//! JavaScript through getters.

use resizer_core::{ImageFormat, ResizePlan, ResizedImage, SourceInfo};
use wasm_bindgen::prelude::*;

/// A resize plan for JavaScript: where to sample and where to draw.
///
/// Maps directly onto `CanvasRenderingContext2D.drawImage(img, sx, sy, sw,
/// sh, dx, dy, dw, dh)` on a canvas of `canvas_width x canvas_height`.
#[wasm_bindgen]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JsResizePlan {
    inner: ResizePlan,
}

#[wasm_bindgen]
impl JsResizePlan {
    #[wasm_bindgen(getter)]
    pub fn source_x(&self) -> u32 {
        self.inner.source_rect.x
    }

    #[wasm_bindgen(getter)]
    pub fn source_y(&self) -> u32 {
        self.inner.source_rect.y
    }

    #[wasm_bindgen(getter)]
    pub fn source_width(&self) -> u32 {
        self.inner.source_rect.width
    }

    #[wasm_bindgen(getter)]
    pub fn source_height(&self) -> u32 {
        self.inner.source_rect.height
    }

    #[wasm_bindgen(getter)]
    pub fn dest_x(&self) -> u32 {
        self.inner.dest_rect.x
    }

    #[wasm_bindgen(getter)]
    pub fn dest_y(&self) -> u32 {
        self.inner.dest_rect.y
    }

    #[wasm_bindgen(getter)]
    pub fn dest_width(&self) -> u32 {
        self.inner.dest_rect.width
    }

    #[wasm_bindgen(getter)]
    pub fn dest_height(&self) -> u32 {
        self.inner.dest_rect.height
    }

    #[wasm_bindgen(getter)]
    pub fn canvas_width(&self) -> u32 {
        self.inner.canvas_width
    }

    #[wasm_bindgen(getter)]
    pub fn canvas_height(&self) -> u32 {
        self.inner.canvas_height
    }
}

impl JsResizePlan {
    pub fn from_plan(inner: ResizePlan) -> Self {
        Self { inner }
    }

    pub fn to_plan(&self) -> ResizePlan {
        self.inner
    }
}

/// Dimensions and format of an encoded source.
#[wasm_bindgen]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JsSourceInfo {
    width: u32,
    height: u32,
    format: ImageFormat,
}

#[wasm_bindgen]
impl JsSourceInfo {
    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Format name: "png", "jpeg" or "gif".
    #[wasm_bindgen(getter)]
    pub fn format(&self) -> String {
        self.format.name().to_string()
    }

    #[wasm_bindgen(getter)]
    pub fn mime_type(&self) -> String {
        self.format.mime_type().to_string()
    }
}

impl JsSourceInfo {
    pub fn from_info(info: SourceInfo) -> Self {
        Self {
            width: info.dimensions.width,
            height: info.dimensions.height,
            format: info.format,
        }
    }
}

/// An encoded output image.
#[wasm_bindgen]
pub struct JsResizedImage {
    bytes: Vec<u8>,
    format: ImageFormat,
    plan: ResizePlan,
}

#[wasm_bindgen]
impl JsResizedImage {
    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.plan.canvas_width
    }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.plan.canvas_height
    }

    #[wasm_bindgen(getter)]
    pub fn format(&self) -> String {
        self.format.name().to_string()
    }

    #[wasm_bindgen(getter)]
    pub fn mime_type(&self) -> String {
        self.format.mime_type().to_string()
    }

    #[wasm_bindgen(getter)]
    pub fn byte_length(&self) -> usize {
        self.bytes.len()
    }

    /// Returns the encoded bytes as a Uint8Array (copied).
    pub fn bytes(&self) -> Vec<u8> {
        self.bytes.clone()
    }

    /// The plan the image was resampled with.
    pub fn plan(&self) -> JsResizePlan {
        JsResizePlan::from_plan(self.plan)
    }
}

impl JsResizedImage {
    pub fn from_resized(resized: ResizedImage) -> Self {
        Self {
            bytes: resized.bytes,
            format: resized.format,
            plan: resized.plan,
        }
    }
}
