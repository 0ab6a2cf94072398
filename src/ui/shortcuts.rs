use adw::prelude::*;
use gtk4 as gtk;
use libadwaita as adw;

use crate::app::config::{Action, ShortcutConfig};

pub fn show_shortcuts_dialog(shortcuts: &ShortcutConfig, parent: &impl IsA<gtk::Window>) {
    let window = adw::PreferencesWindow::builder()
        .transient_for(parent)
        .modal(true)
        .title("Keyboard Shortcuts")
        .default_width(420)
        .default_height(360)
        .search_enabled(false)
        .build();

    let page = adw::PreferencesPage::new();
    window.add(&page);

    let group_preview = adw::PreferencesGroup::builder().title("Preview").build();
    add_action_row(shortcuts, &group_preview, Action::SaveFrame);
    add_action_row(shortcuts, &group_preview, Action::ToggleOverlay);
    add_action_row(shortcuts, &group_preview, Action::RefreshDevices);
    page.add(&group_preview);

    let group_general = adw::PreferencesGroup::builder().title("General").build();
    add_action_row(shortcuts, &group_general, Action::ShowShortcuts);
    add_action_row(shortcuts, &group_general, Action::Quit);
    page.add(&group_general);

    window.present();
}

fn add_action_row(shortcuts: &ShortcutConfig, group: &adw::PreferencesGroup, action: Action) {
    let shortcut_label = shortcuts.get_shortcut_label(action);

    let row = adw::ActionRow::builder().title(action.label()).build();

    let accel = gtk::Label::builder()
        .label(&shortcut_label)
        .valign(gtk::Align::Center)
        .build();
    accel.add_css_class("dim-label");

    row.add_suffix(&accel);
    group.add(&row);
}
