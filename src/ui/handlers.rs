//! UI event handlers.
//!
//! One function per user action, each taking the application context. The
//! `connect_*` functions only route widget signals to them.

use gtk::glib;
use gtk4 as gtk;
use libadwaita as adw;
use log::{debug, error, info, warn};

use gtk4::prelude::*;
use std::rc::Rc;

use crate::app::config::{Action, APP_TITLE, TICK_INTERVAL};
use crate::app::AppContext;
use crate::render::RenderState;
use crate::ui::dialogs::{choose_save_path, show_error};
use crate::ui::header::HeaderComponents;
use crate::ui::preview::PreviewComponents;
use crate::ui::shortcuts::show_shortcuts_dialog;

pub struct UiComponents {
    pub window: adw::ApplicationWindow,
    pub header: HeaderComponents,
    pub preview: PreviewComponents,
}

/// Open the first camera once the window exists
pub fn open_initial_device(ctx: &Rc<AppContext>) {
    let result = ctx.state.borrow_mut().start().map(str::to_owned);
    match result {
        Ok(name) => ctx.ui.window.set_title(Some(&name)),
        Err(e) => {
            warn!("Initial camera could not be opened: {}", e);
            sync_device_picker(ctx);
            show_error(&ctx.ui.window, "Camera Unavailable", &e.to_string());
        }
    }
}

pub fn on_device_selected(ctx: &Rc<AppContext>, name: &str) {
    if ctx.updating_devices.get() {
        return;
    }

    info!("Camera selected: {}", name);
    let result = ctx.state.borrow_mut().select_device_named(name);
    match result {
        Ok(_) => ctx.ui.window.set_title(Some(name)),
        Err(e) => {
            ctx.ui.window.set_title(Some(APP_TITLE));
            ctx.ui.preview.clear();
            sync_device_picker(ctx);
            show_error(&ctx.ui.window, "Camera Unavailable", &e.to_string());
        }
    }
}

pub fn on_refresh(ctx: &Rc<AppContext>) {
    debug!("Refreshing camera list");
    let result = ctx.state.borrow_mut().refresh_devices();
    let devices = match result {
        Ok(devices) => devices,
        Err(e) => {
            warn!("Camera refresh failed: {}", e);
            show_error(&ctx.ui.window, "No Cameras Found", &e.to_string());
            return;
        }
    };

    // The open device is not reconciled with the new list
    let names: Vec<&str> = devices.iter().map(String::as_str).collect();

    ctx.updating_devices.set(true);
    let model = &ctx.ui.header.device_model;
    model.splice(0, model.n_items(), &names);
    ctx.updating_devices.set(false);
    sync_device_picker(ctx);

    info!("Camera list refreshed: {} device(s)", names.len());
}

/// Point the picker at the open device, or at no row while idle so that
/// choosing the same device again still emits a selection change.
fn sync_device_picker(ctx: &Rc<AppContext>) {
    let selection = ctx.state.borrow().picker_selection();
    let position = selection.map_or(gtk::INVALID_LIST_POSITION, |index| index as u32);

    ctx.updating_devices.set(true);
    ctx.ui.header.device_dropdown.set_selected(position);
    ctx.updating_devices.set(false);
}

pub fn on_save(ctx: &Rc<AppContext>) {
    let ctx = ctx.clone();
    glib::spawn_future_local(async move {
        let path = choose_save_path(&ctx.ui.window).await;
        let result = ctx.state.borrow_mut().export_frame(path.as_deref());
        match result {
            Ok(Some(path)) => debug!("Save finished: {:?}", path),
            Ok(None) => debug!("Save cancelled"),
            Err(e) => {
                error!("Failed to save frame: {}", e);
                show_error(&ctx.ui.window, "Could Not Save Frame", &e.to_string());
            }
        }
    });
}

pub fn on_toggle_overlay(ctx: &Rc<AppContext>, enabled: bool) {
    debug!("Guide lines {}", if enabled { "on" } else { "off" });
    ctx.state.borrow_mut().set_overlay(enabled);
}

/// One render tick: pull a frame and publish it, or show the idle placeholder
pub fn on_tick(ctx: &Rc<AppContext>) {
    let frame = ctx.state.borrow_mut().tick();
    match frame {
        Some(frame) => ctx.ui.preview.publish(frame),
        None => {
            if ctx.state.borrow().render_state() == RenderState::Idle {
                ctx.ui.preview.clear();
            }
        }
    }
}

pub fn on_shortcut(ctx: &Rc<AppContext>, action: Action) {
    debug!("Shortcut: {:?}", action);
    match action {
        Action::SaveFrame => on_save(ctx),
        Action::RefreshDevices => on_refresh(ctx),
        Action::ToggleOverlay => {
            // Goes through the button so its state stays in sync
            let btn = &ctx.ui.header.overlay_btn;
            btn.set_active(!btn.is_active());
        }
        Action::ShowShortcuts => show_shortcuts_dialog(&ctx.shortcuts, &ctx.ui.window),
        Action::Quit => ctx.ui.window.close(),
    }
}

pub fn start_render_loop(ctx: &Rc<AppContext>) -> glib::SourceId {
    debug!("Starting render loop every {:?}", TICK_INTERVAL);
    let ctx = ctx.clone();
    glib::timeout_add_local(TICK_INTERVAL, move || {
        on_tick(&ctx);
        glib::ControlFlow::Continue
    })
}

pub fn connect_device_handlers(ctx: &Rc<AppContext>) {
    ctx.ui.header.device_dropdown.connect_selected_notify({
        let ctx = ctx.clone();
        move |dropdown| {
            let Some(item) = dropdown
                .selected_item()
                .and_downcast::<gtk::StringObject>()
            else {
                return;
            };
            on_device_selected(&ctx, &item.string());
        }
    });

    ctx.ui.header.refresh_btn.connect_clicked({
        let ctx = ctx.clone();
        move |_| on_refresh(&ctx)
    });
}

pub fn connect_save_handler(ctx: &Rc<AppContext>) {
    ctx.ui.header.save_btn.connect_clicked({
        let ctx = ctx.clone();
        move |_| on_save(&ctx)
    });
}

pub fn connect_overlay_handler(ctx: &Rc<AppContext>) {
    ctx.ui.header.overlay_btn.connect_toggled({
        let ctx = ctx.clone();
        move |btn| on_toggle_overlay(&ctx, btn.is_active())
    });
}

pub fn connect_shortcut_handlers(ctx: &Rc<AppContext>) {
    ctx.ui.header.shortcuts_btn.connect_clicked({
        let ctx = ctx.clone();
        move |_| show_shortcuts_dialog(&ctx.shortcuts, &ctx.ui.window)
    });

    let keys = gtk::EventControllerKey::new();
    keys.connect_key_pressed({
        let ctx = ctx.clone();
        move |_, key, _, modifiers| match ctx.shortcuts.get_action(key, modifiers) {
            Some(action) => {
                on_shortcut(&ctx, action);
                glib::Propagation::Stop
            }
            None => glib::Propagation::Proceed,
        }
    });
    ctx.ui.window.add_controller(keys);
}

pub fn connect_all_handlers(ctx: &Rc<AppContext>) {
    debug!("Initializing UI handlers");
    connect_device_handlers(ctx);
    connect_save_handler(ctx);
    connect_overlay_handler(ctx);
    connect_shortcut_handlers(ctx);
}
