//! Crosshair guide-lines drawn over a frame.

use image::Rgb;

use crate::capture::Frame;

pub const GUIDE_COLOR: Rgb<u8> = Rgb([255, 255, 255]);

/// Whether the guide-lines are drawn on the preview.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct OverlayState {
    enabled: bool,
}

impl OverlayState {
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }
}

/// Return a copy of `frame` with a horizontal line at row `H/2` and a
/// vertical line at column `W/2`, one pixel thick, in `GUIDE_COLOR`.
///
/// Applying it twice is not the same as applying it once: always start from
/// the raw frame.
pub fn apply_overlay(frame: &Frame) -> Frame {
    let mut out = frame.clone();
    let (width, height) = (out.width(), out.height());
    if width == 0 || height == 0 {
        return out;
    }

    let image = out.image_mut();
    let mid_row = height / 2;
    let mid_col = width / 2;
    for x in 0..width {
        image.put_pixel(x, mid_row, GUIDE_COLOR);
    }
    for y in 0..height {
        image.put_pixel(mid_col, y, GUIDE_COLOR);
    }
    out
}
