//! Resizer Core - image resize geometry and pipeline
//!
//! This crate computes how a source image maps onto a target box under the
//! `cover`, `shrink` and `stretch` policies, and provides thin decode,
//! resample and encode adapters over the `image` crate so a plan can be
//! executed end to end.
//!
//! # Module Structure
//!
//! - `config` - Validated resize configuration and per-call overrides
//! - `geometry` - Pure plan computation ([`compute_plan`])
//! - `decode` - Source probing, decoding and plan-driven resampling
//! - `encode` - PNG, JPEG and GIF output
//! - `resizer` - The [`ImageResizer`] pipeline facade

pub mod config;
pub mod decode;
pub mod encode;
pub mod geometry;
pub mod resizer;

pub use config::{ConfigError, ConfigOverrides, ImageFormat, ResizeConfig, ResizeMode};
pub use decode::{DecodeError, DecodedImage, FilterType, SourceInfo};
pub use encode::{EncodeError, EncodeOptions};
pub use geometry::{compute_plan, Dimensions, Rect, ResizePlan};
pub use resizer::{ImageResizer, ResizeError, ResizedImage, DEFAULT_MAX_CANVAS_PIXELS};
