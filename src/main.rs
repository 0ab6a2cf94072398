mod app;
mod capture;
mod export;
mod render;
mod ui;

use gtk4 as gtk;
use libadwaita as adw;

use adw::prelude::*;
use gtk::glib;
use log::error;
use std::backtrace::Backtrace;
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::app::config::{APP_ID, EXIT_PANIC};
use crate::app::{AppContext, AppState};
use crate::capture::NokhwaBackend;

fn main() -> glib::ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    install_panic_hook();

    // No camera means nothing to show: fail before any window exists
    let state = match AppState::bootstrap(NokhwaBackend::new()) {
        Ok(state) => state,
        Err(e) => {
            error!("Cannot start: {}", e);
            return glib::ExitCode::FAILURE;
        }
    };

    let app = adw::Application::builder().application_id(APP_ID).build();

    let pending = RefCell::new(Some(state));
    let context: Rc<RefCell<Option<Rc<AppContext>>>> = Rc::new(RefCell::new(None));

    app.connect_activate({
        let context = context.clone();
        move |app| match pending.borrow_mut().take() {
            Some(state) => *context.borrow_mut() = Some(ui::build_ui(app, state)),
            None => {
                if let Some(window) = app.active_window() {
                    window.present();
                }
            }
        }
    });

    app.connect_shutdown(move |_| {
        if let Some(ctx) = context.borrow_mut().take() {
            ctx.state.borrow_mut().shutdown();
        }
    });

    app.run()
}

/// Report any panic on the main loop and terminate instead of continuing
/// with possibly inconsistent state.
fn install_panic_hook() {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        default_hook(info);
        handle_panic(info, |code| std::process::exit(code));
    }));
}

fn panic_report(message: &dyn fmt::Display) -> String {
    format!(
        "Unrecoverable error: {}\n{}",
        message,
        Backtrace::force_capture()
    )
}

/// Log the panic with a backtrace, then hand `EXIT_PANIC` to `exit`
fn handle_panic(message: &dyn fmt::Display, exit: impl FnOnce(i32)) {
    error!("{}", panic_report(message));
    exit(EXIT_PANIC);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_panic_report_carries_message_and_backtrace() {
        let report = panic_report(&"camera handle poisoned");
        let mut lines = report.lines();
        assert_eq!(
            lines.next(),
            Some("Unrecoverable error: camera handle poisoned")
        );
        assert!(lines.next().is_some(), "backtrace missing: {}", report);
    }

    #[test]
    fn test_handle_panic_exits_with_panic_code() {
        let code = Cell::new(None);
        handle_panic(&"boom", |c| code.set(Some(c)));
        assert_eq!(code.get(), Some(EXIT_PANIC));
        assert_eq!(EXIT_PANIC, 70);
    }
}
