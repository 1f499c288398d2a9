//! Default panel keybindings
//!
//! Escape hides the panel and Ctrl+Enter returns focus to the document.
//! Ctrl+PageUp/PageDown cycle items like notebook tabs do.

use super::binding::Keybinding;
use super::command::Command;
use super::config::{load_keymap_file, parse_keymap_yaml};
use super::types::{KeyCode, Keystroke, Modifiers};

/// Default keymap YAML embedded at compile time
const DEFAULT_KEYMAP_YAML: &str = include_str!("../../keymap.yaml");

/// The embedded default keymap source
pub fn get_default_keymap_yaml() -> &'static str {
    DEFAULT_KEYMAP_YAML
}

/// Built-in keybindings
pub fn default_bindings() -> Vec<Keybinding> {
    vec![
        Keybinding::new(Keystroke::key(KeyCode::Escape), Command::ClosePanel),
        Keybinding::new(
            Keystroke::new(KeyCode::Enter, Modifiers::CTRL),
            Command::FocusDocument,
        ),
        Keybinding::new(
            Keystroke::new(KeyCode::PageDown, Modifiers::CTRL),
            Command::NextItem,
        ),
        Keybinding::new(
            Keystroke::new(KeyCode::PageUp, Modifiers::CTRL),
            Command::PrevItem,
        ),
    ]
}

/// Load and merge keymaps: defaults + user overrides
///
/// 1. Embedded `keymap.yaml` (hardcoded defaults if it fails to parse)
/// 2. User config at `~/.config/dockpanel/keymap.yaml`
pub fn load_default_keymap() -> Vec<Keybinding> {
    let mut bindings = match parse_keymap_yaml(DEFAULT_KEYMAP_YAML) {
        Ok(b) => {
            tracing::debug!("Loaded embedded default keymap ({} bindings)", b.len());
            b
        }
        Err(e) => {
            tracing::warn!(
                "Failed to parse embedded keymap: {}, using hardcoded defaults",
                e
            );
            default_bindings()
        }
    };

    let Some(user_path) = crate::config_paths::keymap_file() else {
        return bindings;
    };

    if user_path.exists() {
        match load_keymap_file(&user_path) {
            Ok(user_bindings) => {
                tracing::info!(
                    "Merging user keymap from {} ({} bindings)",
                    user_path.display(),
                    user_bindings.len()
                );
                bindings = merge_bindings(bindings, user_bindings);
            }
            Err(e) => {
                tracing::warn!("Failed to load user keymap from {}: {}", user_path.display(), e);
            }
        }
    }

    bindings
}

/// Merge user bindings into base bindings
///
/// - Same keystroke → user binding replaces the base one
/// - Command `Unbound` → removes base bindings for that keystroke
/// - Otherwise → user binding is added
pub fn merge_bindings(base: Vec<Keybinding>, user: Vec<Keybinding>) -> Vec<Keybinding> {
    let mut result = base;

    for user_binding in user {
        if user_binding.command == Command::Unbound {
            result.retain(|b| b.keystroke != user_binding.keystroke);
            continue;
        }

        match result
            .iter()
            .position(|b| b.keystroke == user_binding.keystroke)
        {
            Some(idx) => result[idx] = user_binding,
            None => result.push(user_binding),
        }
    }

    result
}
