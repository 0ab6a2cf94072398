pub mod dialogs;
pub mod handlers;
pub mod header;
pub mod preview;
pub mod shortcuts;

pub use handlers::UiComponents;

use gtk4 as gtk;
use libadwaita as adw;

use adw::prelude::*;
use gtk::Orientation;
use std::rc::Rc;

use crate::app::config::{APP_TITLE, DEFAULT_HEIGHT, DEFAULT_WIDTH};
use crate::app::{AppContext, AppState};

pub fn build_ui(app: &adw::Application, state: AppState) -> Rc<AppContext> {
    let header = header::create_header_bar(state.registry.devices());
    let preview = preview::create_preview();

    let content = gtk::Box::builder()
        .orientation(Orientation::Vertical)
        .build();
    content.append(&header.header_bar);
    content.append(&preview.overlay);

    let window = adw::ApplicationWindow::builder()
        .application(app)
        .title(APP_TITLE)
        .content(&content)
        .default_width(DEFAULT_WIDTH)
        .default_height(DEFAULT_HEIGHT)
        .build();

    let components = UiComponents {
        window,
        header,
        preview,
    };
    let ctx = Rc::new(AppContext::new(state, components));

    handlers::connect_all_handlers(&ctx);
    handlers::open_initial_device(&ctx);
    handlers::start_render_loop(&ctx);

    ctx.ui.window.present();
    ctx
}
