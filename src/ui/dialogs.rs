use gtk4 as gtk;
use libadwaita as adw;
use log::debug;

use gtk::gio;
use gtk4::prelude::*;
use std::path::PathBuf;

use crate::app::config::DEFAULT_FILE_NAME;

/// Show a dismissible error message over `parent`
pub fn show_error(parent: &impl IsA<gtk::Window>, message: &str, detail: &str) {
    let dialog = gtk::AlertDialog::builder()
        .modal(true)
        .message(message)
        .detail(detail)
        .build();
    dialog.show(Some(parent));
}

/// Ask the user where to save the frame.
///
/// Returns `None` if the dialog was cancelled.
pub async fn choose_save_path(parent: &adw::ApplicationWindow) -> Option<PathBuf> {
    let filter = gtk::FileFilter::new();
    filter.set_name(Some("PNG Image"));
    filter.add_suffix("png");
    filter.add_mime_type("image/png");

    let filters = gio::ListStore::new::<gtk::FileFilter>();
    filters.append(&filter);

    let dialog = gtk::FileDialog::builder()
        .title("Save Frame")
        .modal(true)
        .initial_name(DEFAULT_FILE_NAME)
        .filters(&filters)
        .default_filter(&filter)
        .build();

    match dialog.save_future(Some(parent)).await {
        Ok(file) => file.path(),
        Err(e) => {
            debug!("Save dialog dismissed: {}", e);
            None
        }
    }
}
