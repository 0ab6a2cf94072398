use gtk4 as gtk;

use gtk::{gdk, glib};

use crate::capture::Frame;

/// Convert a frame into a GDK texture for the preview picture.
pub fn frame_to_texture(frame: Frame) -> gdk::MemoryTexture {
    let width = frame.width() as i32;
    let height = frame.height() as i32;
    let stride = frame.stride();
    let bytes = glib::Bytes::from_owned(frame.into_raw());

    gdk::MemoryTexture::new(width, height, gdk::MemoryFormat::R8g8b8, &bytes, stride)
}
