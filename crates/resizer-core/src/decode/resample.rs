//! Executing a [`ResizePlan`] against decoded pixels.

use image::{imageops, RgbaImage};
use tracing::debug;

use super::{DecodeError, DecodedImage, FilterType};
use crate::geometry::ResizePlan;

/// Sample `plan.source_rect` of `image`, scale it to `plan.dest_rect`, and
/// place it on a transparent canvas of the planned size.
///
/// # Errors
///
/// - `PlanMismatch` if the plan was not computed for an image of this size.
/// - `CorruptedFile` if the pixel buffer does not match the image dimensions.
pub fn resample(
    image: &DecodedImage,
    plan: &ResizePlan,
    filter: FilterType,
) -> Result<DecodedImage, DecodeError> {
    let source = image.dimensions();
    if !plan.is_valid_for(source) {
        return Err(DecodeError::PlanMismatch {
            width: source.width,
            height: source.height,
        });
    }

    if plan.is_identity(source) && plan.canvas() == source {
        return Ok(image.clone());
    }

    let rgba = image.to_rgba_image().ok_or_else(|| {
        DecodeError::CorruptedFile(format!(
            "pixel buffer of {} bytes does not match {}x{}",
            image.byte_size(),
            image.width,
            image.height
        ))
    })?;

    let src = plan.source_rect;
    let dst = plan.dest_rect;

    let sampled = if plan.needs_crop(source) {
        imageops::crop_imm(&rgba, src.x, src.y, src.width, src.height).to_image()
    } else {
        rgba
    };

    let scaled = if sampled.dimensions() == (dst.width, dst.height) {
        sampled
    } else {
        imageops::resize(&sampled, dst.width, dst.height, filter.to_image_filter())
    };

    let output = if dst.x == 0
        && dst.y == 0
        && (dst.width, dst.height) == (plan.canvas_width, plan.canvas_height)
    {
        scaled
    } else {
        let mut canvas = RgbaImage::new(plan.canvas_width, plan.canvas_height);
        imageops::replace(&mut canvas, &scaled, i64::from(dst.x), i64::from(dst.y));
        canvas
    };

    debug!(
        %filter,
        from_width = source.width,
        from_height = source.height,
        to_width = output.width(),
        to_height = output.height(),
        "resampled image"
    );
    Ok(DecodedImage::from_rgba_image(output))
}
