use gtk4 as gtk;

use gtk::gdk;
use gtk4::prelude::*;

use crate::capture::Frame;
use crate::render::frame_to_texture;

pub struct PreviewComponents {
    pub picture: gtk::Picture,
    pub placeholder_icon: gtk::Image,
    pub overlay: gtk::Overlay,
}

pub fn create_preview() -> PreviewComponents {
    let picture = gtk::Picture::builder()
        .hexpand(true)
        .vexpand(true)
        .content_fit(gtk::ContentFit::Contain)
        .build();
    picture.add_css_class("view");

    let placeholder_icon = gtk::Image::builder()
        .icon_name("camera-disabled-symbolic")
        .pixel_size(128)
        .opacity(0.2)
        .halign(gtk::Align::Center)
        .valign(gtk::Align::Center)
        .build();

    let overlay = gtk::Overlay::builder().child(&picture).build();
    overlay.add_overlay(&placeholder_icon);

    PreviewComponents {
        picture,
        placeholder_icon,
        overlay,
    }
}

impl PreviewComponents {
    /// Replace the displayed image with `frame`
    pub fn publish(&self, frame: Frame) {
        let texture = frame_to_texture(frame);
        self.picture.set_paintable(Some(&texture));
        self.placeholder_icon.set_visible(false);
    }

    /// Drop the last image and show the placeholder
    pub fn clear(&self) {
        if self.picture.paintable().is_some() {
            self.picture.set_paintable(None::<&gdk::Paintable>);
        }
        self.placeholder_icon.set_visible(true);
    }
}
