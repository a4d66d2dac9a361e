//! Platform-specific key bindings

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Cmd on macOS, Ctrl elsewhere
pub const COPY_MODIFIER: KeyModifiers = if cfg!(target_os = "macos") {
    KeyModifiers::SUPER
} else {
    KeyModifiers::CONTROL
};

/// Ctrl+S works on all platforms
pub const SUBMIT_SHORTCUT: &str = "Ctrl+S";

pub const BACK_SHORTCUT: &str = "Ctrl+B";

pub const COPY_LINK_SHORTCUT: &str = if cfg!(target_os = "macos") {
    "Cmd+Y"
} else {
    "Ctrl+Y"
};

/// Whether the key copies the booking link
pub fn is_copy_link(key: &KeyEvent) -> bool {
    key.code == KeyCode::Char('y') && key.modifiers.contains(COPY_MODIFIER)
}
