use std::path::{Path, PathBuf};

use image::{Rgba, RgbaImage, imageops};
use tracing::debug;

use crate::error::{ChartError, ChartResult};

/// Horizontal inset of the shaded rectangle from the image edges.
pub const OVERLAY_INSET_X: u32 = 100;
/// Vertical inset of the shaded rectangle from the image edges.
pub const OVERLAY_INSET_Y: u32 = 50;
/// 20 % black, truncated to an 8-bit alpha.
pub const OVERLAY_ALPHA: u8 = 51;

/// Darkens the inset region of the PNG at `path` and saves it back in place.
///
/// `height`/`width` describe the intended chart size and place the rectangle
/// corners at `(100, 50)` and `(width - 100, height - 50)`, both inclusive;
/// anything outside the actual image is clipped. Applying the overlay twice
/// darkens the region twice.
pub fn apply_overlay(path: impl AsRef<Path>, height: u32, width: u32) -> ChartResult<PathBuf> {
    let path = path.as_ref();
    let io_error = |source| ChartError::ImageIo {
        path: path.to_path_buf(),
        source,
    };

    let mut base = image::open(path).map_err(io_error)?.to_rgba8();
    let overlay = build_overlay(base.width(), base.height(), height, width);
    imageops::overlay(&mut base, &overlay, 0, 0);
    base.save(path).map_err(io_error)?;

    debug!(path = %path.display(), height, width, "applied overlay");
    Ok(path.to_path_buf())
}

/// Transparent layer the size of the image with the shaded inset rectangle.
#[must_use]
pub fn build_overlay(image_width: u32, image_height: u32, height: u32, width: u32) -> RgbaImage {
    let mut overlay = RgbaImage::from_pixel(image_width, image_height, Rgba([0, 0, 0, 0]));
    let Some(right) = width.checked_sub(OVERLAY_INSET_X) else {
        return overlay;
    };
    let Some(bottom) = height.checked_sub(OVERLAY_INSET_Y) else {
        return overlay;
    };

    let shade = Rgba([0, 0, 0, OVERLAY_ALPHA]);
    for y in OVERLAY_INSET_Y..=bottom.min(image_height.saturating_sub(1)) {
        for x in OVERLAY_INSET_X..=right.min(image_width.saturating_sub(1)) {
            overlay.put_pixel(x, y, shade);
        }
    }
    overlay
}
