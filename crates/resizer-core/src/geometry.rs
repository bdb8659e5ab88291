//! Resize geometry: which source pixels map to which destination pixels.
//!
//! [`compute_plan`] turns source dimensions and a [`ResizeConfig`] into a
//! [`ResizePlan`]. It is a pure O(1) function; it never touches pixels.
//!
//! # Modes
//!
//! | mode    | canvas                        | source rect                  |
//! |---------|-------------------------------|------------------------------|
//! | stretch | target                        | full source                  |
//! | shrink  | scaled from the driving axis  | full source                  |
//! | cover   | target                        | cropped to target aspect     |
//!
//! Aspect ratios are compared by cross-multiplication and every offset and
//! size is computed with integer division, so results truncate toward zero
//! and equal aspect ratios are detected exactly.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::{ConfigError, ResizeConfig, ResizeMode};

/// Width × height in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl Dimensions {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Width divided by height.
    pub fn aspect_ratio(&self) -> f64 {
        self.width as f64 / self.height as f64
    }

    /// True if either side is zero.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

impl From<(u32, u32)> for Dimensions {
    fn from((width, height): (u32, u32)) -> Self {
        Self::new(width, height)
    }
}

/// Axis-aligned rectangle in pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    pub const fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Rectangle at the origin covering `size`.
    pub const fn at_origin(size: Dimensions) -> Self {
        Self::new(0, 0, size.width, size.height)
    }

    pub fn size(&self) -> Dimensions {
        Dimensions::new(self.width, self.height)
    }

    /// True if the rect is non-empty and lies inside `(0, 0, bounds)`.
    pub fn fits_within(&self, bounds: Dimensions) -> bool {
        self.width >= 1
            && self.height >= 1
            && u64::from(self.x) + u64::from(self.width) <= u64::from(bounds.width)
            && u64::from(self.y) + u64::from(self.height) <= u64::from(bounds.height)
    }
}

/// Everything a resampler needs to perform the blit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResizePlan {
    /// Region of the source image to sample.
    pub source_rect: Rect,
    /// Region of the canvas to write.
    pub dest_rect: Rect,
    /// Width of the destination buffer to allocate.
    pub canvas_width: u32,
    /// Height of the destination buffer to allocate.
    pub canvas_height: u32,
}

impl ResizePlan {
    fn unpadded(source_rect: Rect, dest: Dimensions) -> Self {
        Self {
            source_rect,
            dest_rect: Rect::at_origin(dest),
            canvas_width: dest.width,
            canvas_height: dest.height,
        }
    }

    pub fn canvas(&self) -> Dimensions {
        Dimensions::new(self.canvas_width, self.canvas_height)
    }

    /// Whether only part of the source is sampled.
    pub fn needs_crop(&self, source: Dimensions) -> bool {
        self.source_rect != Rect::at_origin(source)
    }

    /// Whether the plan copies the source unchanged.
    pub fn is_identity(&self, source: Dimensions) -> bool {
        !self.needs_crop(source) && self.dest_rect == Rect::at_origin(source)
    }

    /// Check the plan invariants against the source it was computed for:
    /// non-empty rects, source rect inside the source, dest rect inside the canvas.
    pub fn is_valid_for(&self, source: Dimensions) -> bool {
        self.source_rect.fits_within(source) && self.dest_rect.fits_within(self.canvas())
    }
}

/// Compute the resize plan for a source of the given size.
///
/// # Errors
///
/// - [`ConfigError::InvalidValue`] if the source has a zero dimension.
/// - [`ConfigError::InvalidConfiguration`] if a derived dimension does not fit
///   in `u32` (shrink mode with an extreme source aspect ratio).
pub fn compute_plan(source: Dimensions, config: &ResizeConfig) -> Result<ResizePlan, ConfigError> {
    if source.width == 0 {
        return Err(ConfigError::invalid_value(
            "source width",
            source.width,
            "an integer > 0",
        ));
    }
    if source.height == 0 {
        return Err(ConfigError::invalid_value(
            "source height",
            source.height,
            "an integer > 0",
        ));
    }

    let target = Dimensions::new(config.width(), config.height());
    let plan = match config.mode() {
        ResizeMode::Stretch => ResizePlan::unpadded(Rect::at_origin(source), target),
        ResizeMode::Shrink => ResizePlan::unpadded(Rect::at_origin(source), shrink(source, target)?),
        ResizeMode::Cover => ResizePlan::unpadded(cover_crop(source, target), target),
    };

    debug!(
        mode = %config.mode(),
        source_width = source.width,
        source_height = source.height,
        ?plan,
        "computed resize plan"
    );
    Ok(plan)
}

/// `source_aspect > target_aspect`, exactly.
fn source_is_wider(source: Dimensions, target: Dimensions) -> bool {
    u64::from(source.width) * u64::from(target.height)
        > u64::from(target.width) * u64::from(source.height)
}

fn shrink(source: Dimensions, target: Dimensions) -> Result<Dimensions, ConfigError> {
    if source_is_wider(source, target) {
        let width = scale_dimension(target.height, source.width, source.height)?;
        Ok(Dimensions::new(width, target.height))
    } else {
        let height = scale_dimension(target.width, source.height, source.width)?;
        Ok(Dimensions::new(target.width, height))
    }
}

/// `floor(basis * num / den)`, raised to at least 1.
fn scale_dimension(basis: u32, num: u32, den: u32) -> Result<u32, ConfigError> {
    let scaled = (u64::from(basis) * u64::from(num) / u64::from(den)).max(1);
    u32::try_from(scaled).map_err(|_| {
        ConfigError::InvalidConfiguration(format!(
            "scaled dimension {scaled} exceeds the maximum of {}",
            u32::MAX
        ))
    })
}

/// Source region with the target's aspect ratio.
///
/// The offset is half the overflow of the scaled source on the cropped axis,
/// measured at target scale and truncated, then clamped so the region stays
/// inside the source.
fn cover_crop(source: Dimensions, target: Dimensions) -> Rect {
    let (sw, sh) = (u64::from(source.width), u64::from(source.height));
    let (tw, th) = (u64::from(target.width), u64::from(target.height));

    if source_is_wider(source, target) {
        // sw * th > tw * sh, so the cropped width is strictly below sw.
        let width = (sh * tw / th).max(1);
        let offset = (th * sw - tw * sh) / (2 * sh);
        let x = offset.min(sw - width);
        Rect::new(x as u32, 0, width as u32, source.height)
    } else {
        let height = (sw * th / tw).clamp(1, sh);
        let offset = (tw * sh - th * sw) / (2 * sw);
        let y = offset.min(sh - height);
        Rect::new(0, y as u32, source.width, height as u32)
    }
}


// ============================================================================
// Property-Based Tests
// ============================================================================
