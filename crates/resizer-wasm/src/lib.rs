//! Resizer WASM - WebAssembly bindings for the image resizer
//!
//! # Module Structure
//!
//! - `types` - WASM-compatible wrappers for plans, source info and output
//! - `plan` - Plan computation for canvas-based callers
//! - `resize` - Probing and the full decode/resize/encode pipeline
//!
//! # Usage
//!
//! ```typescript
//! import init, { resize_image } from '@image-resizer/wasm';
//!
//! await init();
//!
//! const bytes = new Uint8Array(await file.arrayBuffer());
//! const out = resize_image(bytes, { mode: 'shrink', width: 640, height: 640 });
//! console.log(`Resized to ${out.width}x${out.height}`);
//! ```

use wasm_bindgen::prelude::*;

mod plan;
mod resize;
mod types;

pub use plan::compute_plan;
pub use resize::{probe_image, resize_image};
pub use types::{JsResizePlan, JsResizedImage, JsSourceInfo};

/// Initialize the WASM module (called automatically on load)
#[wasm_bindgen(start)]
pub fn init() {}

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
