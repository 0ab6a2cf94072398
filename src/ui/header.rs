use gtk4 as gtk;
use libadwaita as adw;

use adw::prelude::*;
use gtk::Orientation;

pub struct HeaderComponents {
    pub header_bar: adw::HeaderBar,
    pub device_model: gtk::StringList,
    pub device_dropdown: gtk::DropDown,
    pub refresh_btn: gtk::Button,
    pub overlay_btn: gtk::ToggleButton,
    pub save_btn: gtk::Button,
    pub shortcuts_btn: gtk::Button,
}

pub fn create_header_bar(devices: &[String]) -> HeaderComponents {
    let names: Vec<&str> = devices.iter().map(String::as_str).collect();
    let device_model = gtk::StringList::new(&names);

    let device_label = gtk::Label::new(Some("Camera:"));
    device_label.add_css_class("dim-label");

    let device_dropdown = gtk::DropDown::builder()
        .model(&device_model)
        .tooltip_text("Select Camera")
        .build();

    let refresh_btn = gtk::Button::builder()
        .icon_name("view-refresh-symbolic")
        .tooltip_text("Refresh Cameras")
        .build();

    let device_box = gtk::Box::builder()
        .orientation(Orientation::Horizontal)
        .build();
    device_box.add_css_class("linked");
    device_box.append(&device_dropdown);
    device_box.append(&refresh_btn);

    let title_box = gtk::Box::builder()
        .orientation(Orientation::Horizontal)
        .spacing(12)
        .build();
    title_box.append(&device_label);
    title_box.append(&device_box);

    let save_btn = gtk::Button::builder()
        .label("Save")
        .icon_name("document-save-symbolic")
        .tooltip_text("Save Frame")
        .build();
    save_btn.add_css_class("suggested-action");

    let overlay_btn = gtk::ToggleButton::builder()
        .icon_name("view-grid-symbolic")
        .tooltip_text("Toggle Guide Lines")
        .build();

    let shortcuts_btn = gtk::Button::builder()
        .icon_name("preferences-desktop-keyboard-shortcuts-symbolic")
        .tooltip_text("Keyboard Shortcuts")
        .build();

    let end_box = gtk::Box::builder()
        .orientation(Orientation::Horizontal)
        .spacing(6)
        .build();
    end_box.append(&overlay_btn);
    end_box.append(&shortcuts_btn);

    let header_bar = adw::HeaderBar::builder().title_widget(&title_box).build();
    header_bar.pack_start(&save_btn);
    header_bar.pack_end(&end_box);

    HeaderComponents {
        header_bar,
        device_model,
        device_dropdown,
        refresh_btn,
        overlay_btn,
        save_btn,
        shortcuts_btn,
    }
}
