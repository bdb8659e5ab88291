//! The decode → plan → resample → encode pipeline.

use std::path::Path;

use serde::Serialize;
use thiserror::Error;
use tracing::debug;

use crate::config::{ConfigError, ConfigOverrides, ImageFormat, ResizeConfig};
use crate::decode::{self, DecodeError, FilterType};
use crate::encode::{self, EncodeError, EncodeOptions};
use crate::geometry::{compute_plan, Dimensions, ResizePlan};

/// Any failure along the pipeline, unchanged from the stage that raised it.
#[derive(Debug, Error)]
pub enum ResizeError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error(transparent)]
    Encode(#[from] EncodeError),
}

/// An encoded output image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResizedImage {
    /// Encoded image bytes.
    pub bytes: Vec<u8>,
    /// Format of `bytes`.
    pub format: ImageFormat,
    /// The plan the image was resampled with.
    pub plan: ResizePlan,
}

impl ResizedImage {
    pub fn width(&self) -> u32 {
        self.plan.canvas_width
    }

    pub fn height(&self) -> u32 {
        self.plan.canvas_height
    }
}

/// Largest output canvas [`ImageResizer`] will allocate by default, in pixels.
pub const DEFAULT_MAX_CANVAS_PIXELS: u64 = 50_000_000;

/// Resizes encoded images according to a base configuration.
///
/// Per-call overrides are merged into a copy of the base configuration; the
/// resizer itself never changes, so one instance can serve many requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageResizer {
    config: ResizeConfig,
    filter: FilterType,
    encode_options: EncodeOptions,
    max_canvas_pixels: u64,
}

impl Default for ImageResizer {
    fn default() -> Self {
        Self {
            config: ResizeConfig::default(),
            filter: FilterType::default(),
            encode_options: EncodeOptions::default(),
            max_canvas_pixels: DEFAULT_MAX_CANVAS_PIXELS,
        }
    }
}

impl ImageResizer {
    pub fn new(config: ResizeConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn with_filter(mut self, filter: FilterType) -> Self {
        self.filter = filter;
        self
    }

    pub fn with_encode_options(mut self, options: EncodeOptions) -> Self {
        self.encode_options = options;
        self
    }

    /// Cap the output canvas area. Plans above it fail before any decoding.
    pub fn with_max_canvas_pixels(mut self, max_pixels: u64) -> Self {
        self.max_canvas_pixels = max_pixels;
        self
    }

    pub fn config(&self) -> &ResizeConfig {
        &self.config
    }

    pub fn filter(&self) -> FilterType {
        self.filter
    }

    /// The configuration a call with `overrides` would use.
    pub fn effective_config(
        &self,
        overrides: Option<&ConfigOverrides>,
    ) -> Result<ResizeConfig, ConfigError> {
        match overrides {
            Some(overrides) => self.config.merge_overrides(overrides),
            None => Ok(self.config),
        }
    }

    /// Compute the plan for a source of the given size without touching pixels.
    ///
    /// Fails with `InvalidConfiguration` if the canvas exceeds the pixel cap.
    pub fn plan(
        &self,
        source: Dimensions,
        overrides: Option<&ConfigOverrides>,
    ) -> Result<ResizePlan, ConfigError> {
        self.bounded_plan(source, &self.effective_config(overrides)?)
    }

    fn bounded_plan(
        &self,
        source: Dimensions,
        config: &ResizeConfig,
    ) -> Result<ResizePlan, ConfigError> {
        let plan = compute_plan(source, config)?;
        let pixels = u64::from(plan.canvas_width) * u64::from(plan.canvas_height);
        if pixels > self.max_canvas_pixels {
            return Err(ConfigError::InvalidConfiguration(format!(
                "canvas of {}x{} exceeds the limit of {} pixels",
                plan.canvas_width, plan.canvas_height, self.max_canvas_pixels
            )));
        }
        Ok(plan)
    }

    /// Resize an encoded image.
    ///
    /// Overrides are validated before the source is decoded, so a bad
    /// override fails without decoding anything.
    pub fn process(
        &self,
        bytes: &[u8],
        overrides: Option<&ConfigOverrides>,
    ) -> Result<ResizedImage, ResizeError> {
        let config = self.effective_config(overrides)?;

        let info = decode::probe(bytes)?;
        let plan = self.bounded_plan(info.dimensions, &config)?;

        let source = decode::decode_image(bytes)?;
        let resampled = decode::resample(&source, &plan, self.filter)?;
        let bytes = encode::encode(&resampled, config.format(), self.encode_options)?;

        debug!(
            source_format = %info.format,
            output_format = %config.format(),
            width = plan.canvas_width,
            height = plan.canvas_height,
            size = bytes.len(),
            "resized image"
        );

        Ok(ResizedImage {
            bytes,
            format: config.format(),
            plan,
        })
    }

    /// Resize the image at `input` and write the result to `output`.
    pub fn save(
        &self,
        input: impl AsRef<Path>,
        output: impl AsRef<Path>,
        overrides: Option<&ConfigOverrides>,
    ) -> Result<ResizedImage, ResizeError> {
        let output = output.as_ref();
        let source = decode::read_file(input)?;
        let resized = self.process(&source, overrides)?;

        std::fs::write(output, &resized.bytes)
            .map_err(|e| EncodeError::IoError(format!("{}: {e}", output.display())))?;

        debug!(path = %output.display(), "saved resized image");
        Ok(resized)
    }
}
