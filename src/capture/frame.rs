//! Captured frame type.

use image::RgbImage;

/// Bytes per pixel of every frame (packed RGB8).
pub const CHANNELS: usize = 3;

/// One decoded RGB image read from a device.
///
/// Frames are never cached: each render tick and each save reads its own.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    image: RgbImage,
}

impl Frame {
    pub fn new(image: RgbImage) -> Self {
        Self { image }
    }

    /// Build a frame from packed RGB8 bytes.
    ///
    /// Returns `None` if `data` is shorter than `width * height * 3`.
    pub fn from_raw(width: u32, height: u32, data: Vec<u8>) -> Option<Self> {
        RgbImage::from_raw(width, height, data).map(Self::new)
    }

    /// A frame filled with a single colour
    #[cfg(test)]
    pub fn filled(width: u32, height: u32, color: [u8; 3]) -> Self {
        Self::new(RgbImage::from_pixel(width, height, image::Rgb(color)))
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Row stride in bytes
    pub fn stride(&self) -> usize {
        self.image.width() as usize * CHANNELS
    }

    #[cfg(test)]
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 3] {
        self.image.get_pixel(x, y).0
    }

    pub fn image(&self) -> &RgbImage {
        &self.image
    }

    pub fn image_mut(&mut self) -> &mut RgbImage {
        &mut self.image
    }

    pub fn into_raw(self) -> Vec<u8> {
        self.image.into_raw()
    }
}
