//! Platform-specific key bindings

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Modifier for the submit shortcut
/// - macOS: SUPER (Cmd key), when the terminal reports it
/// - Linux/Windows: CONTROL
#[cfg(target_os = "macos")]
pub const SUBMIT_MODIFIER: KeyModifiers = KeyModifiers::SUPER;

#[cfg(not(target_os = "macos"))]
pub const SUBMIT_MODIFIER: KeyModifiers = KeyModifiers::CONTROL;

/// Submit shortcut for help text; Ctrl+S works on every platform
pub const SUBMIT_SHORTCUT: &str = "Ctrl+S";

/// Ctrl+S, or Cmd+S on macOS
pub fn is_submit_shortcut(key: &KeyEvent) -> bool {
    key.code == KeyCode::Char('s')
        && (key.modifiers.contains(KeyModifiers::CONTROL)
            || key.modifiers.contains(SUBMIT_MODIFIER))
}
