//! Plan computation bindings.
//!
//! A JavaScript caller that draws with a 2D canvas only needs the plan, not
//! the pixel pipeline.
//!
//! # Example
//!
//! ```typescript
//! import { compute_plan } from '@image-resizer/wasm';
//!
//! const plan = compute_plan(img.naturalWidth, img.naturalHeight, { mode: 'cover', width: 300, height: 300 });
//! canvas.width = plan.canvas_width;
//! canvas.height = plan.canvas_height;
//! ctx.drawImage(img,
//!   plan.source_x, plan.source_y, plan.source_width, plan.source_height,
//!   plan.dest_x, plan.dest_y, plan.dest_width, plan.dest_height);
//! ```

use crate::types::JsResizePlan;
use resizer_core::{geometry, ConfigOverrides, Dimensions, ResizeConfig, ResizePlan};
use wasm_bindgen::prelude::*;

/// Compute the resize plan for a source of the given size.
///
/// `config` is an optional object with any of `format`, `mode`, `width` and
/// `height`; missing fields take their defaults (png, cover, 300, 200).
///
/// # Errors
///
/// Returns an error if the config object has unknown keys or invalid values,
/// or if a source dimension is zero.
#[wasm_bindgen]
pub fn compute_plan(
    source_width: u32,
    source_height: u32,
    config: JsValue,
) -> Result<JsResizePlan, JsValue> {
    let overrides = parse_overrides(config)?;
    plan_with_overrides(source_width, source_height, &overrides)
        .map(JsResizePlan::from_plan)
        .map_err(|e| JsValue::from_str(&e))
}

/// Read a config object; `undefined` and `null` mean "use the defaults".
pub(crate) fn parse_overrides(config: JsValue) -> Result<ConfigOverrides, JsValue> {
    if config.is_undefined() || config.is_null() {
        return Ok(ConfigOverrides::default());
    }
    serde_wasm_bindgen::from_value(config).map_err(|e| JsValue::from_str(&e.to_string()))
}

pub(crate) fn plan_with_overrides(
    source_width: u32,
    source_height: u32,
    overrides: &ConfigOverrides,
) -> Result<ResizePlan, String> {
    let config = ResizeConfig::default()
        .merge_overrides(overrides)
        .map_err(|e| e.to_string())?;
    geometry::compute_plan(Dimensions::new(source_width, source_height), &config)
        .map_err(|e| e.to_string())
}
