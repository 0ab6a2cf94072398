use std::cell::{Cell, RefCell};

use super::config::ShortcutConfig;
use super::state::AppState;
use crate::ui::UiComponents;

/// Everything a UI callback needs, passed explicitly instead of living in
/// toolkit globals.
pub struct AppContext {
    pub state: RefCell<AppState>,
    pub ui: UiComponents,
    pub shortcuts: ShortcutConfig,
    /// Set while the device picker is being rebuilt, so the selection
    /// changes it emits are not treated as user choices
    pub updating_devices: Cell<bool>,
}

impl AppContext {
    pub fn new(state: AppState, ui: UiComponents) -> Self {
        Self {
            state: RefCell::new(state),
            ui,
            shortcuts: ShortcutConfig::default(),
            updating_devices: Cell::new(false),
        }
    }
}
