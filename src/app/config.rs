use gtk::gdk;
use gtk4 as gtk;
use std::collections::HashMap;
use std::time::Duration;

pub const APP_ID: &str = "org.example.WebcamGnome";
pub const APP_TITLE: &str = "GNOME Webcam";

pub const DEFAULT_WIDTH: i32 = 900;
pub const DEFAULT_HEIGHT: i32 = 600;

/// Render tick interval (~60 Hz)
pub const TICK_INTERVAL: Duration = Duration::from_millis(16);

/// File name suggested by the save dialog
pub const DEFAULT_FILE_NAME: &str = "image.png";

/// Exit code used when a panic reaches the top of the main loop
pub const EXIT_PANIC: i32 = 70;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    SaveFrame,
    RefreshDevices,
    ToggleOverlay,
    ShowShortcuts,
    Quit,
}

impl Action {
    #[cfg(test)]
    pub const ALL: [Action; 5] = [
        Action::SaveFrame,
        Action::RefreshDevices,
        Action::ToggleOverlay,
        Action::ShowShortcuts,
        Action::Quit,
    ];

    pub fn label(&self) -> &str {
        match self {
            Action::SaveFrame => "Save Frame",
            Action::RefreshDevices => "Refresh Cameras",
            Action::ToggleOverlay => "Toggle Guide Lines",
            Action::ShowShortcuts => "Keyboard Shortcuts",
            Action::Quit => "Quit",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Shortcut {
    pub key: gdk::Key,
    pub modifiers: gdk::ModifierType,
}

#[derive(Debug, Clone)]
pub struct ShortcutConfig {
    bindings: HashMap<Action, Shortcut>,
}

impl Default for ShortcutConfig {
    fn default() -> Self {
        let mut bindings = HashMap::new();

        bindings.insert(
            Action::SaveFrame,
            Shortcut {
                key: gdk::Key::s,
                modifiers: gdk::ModifierType::CONTROL_MASK,
            },
        );
        bindings.insert(
            Action::RefreshDevices,
            Shortcut {
                key: gdk::Key::F5,
                modifiers: gdk::ModifierType::empty(),
            },
        );
        bindings.insert(
            Action::ToggleOverlay,
            Shortcut {
                key: gdk::Key::g,
                modifiers: gdk::ModifierType::CONTROL_MASK,
            },
        );
        bindings.insert(
            Action::ShowShortcuts,
            Shortcut {
                key: gdk::Key::F1,
                modifiers: gdk::ModifierType::empty(),
            },
        );
        bindings.insert(
            Action::Quit,
            Shortcut {
                key: gdk::Key::q,
                modifiers: gdk::ModifierType::CONTROL_MASK,
            },
        );

        Self { bindings }
    }
}

impl ShortcutConfig {
    pub fn get_action(&self, key: gdk::Key, modifiers: gdk::ModifierType) -> Option<Action> {
        // Filter out irrelevant modifiers like NumLock/CapsLock/ScrollLock
        let mask = gdk::ModifierType::CONTROL_MASK
            | gdk::ModifierType::SHIFT_MASK
            | gdk::ModifierType::ALT_MASK
            | gdk::ModifierType::SUPER_MASK
            | gdk::ModifierType::META_MASK;

        let clean_mods = modifiers & mask;
        let key = key.to_lower();

        self.bindings
            .iter()
            .find(|(_, sc)| sc.key == key && sc.modifiers == clean_mods)
            .map(|(action, _)| *action)
    }

    pub fn get_shortcut_label(&self, action: Action) -> String {
        if let Some(sc) = self.bindings.get(&action) {
            return gtk::accelerator_get_label(sc.key, sc.modifiers).to_string();
        }
        String::new()
    }
}
