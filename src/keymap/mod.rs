//! Configurable panel keybindings
//!
//! ```text
//! winit::KeyEvent → Keystroke → Keymap::lookup() → Command → Panel
//! ```
//!
//! The defaults bind Escape to hiding the panel and Ctrl+Enter to handing
//! focus back to the document. Users can rebind or unbind them in
//! `~/.config/dockpanel/keymap.yaml`.

mod binding;
mod command;
mod config;
mod defaults;
#[allow(clippy::module_inception)]
mod keymap;
mod types;
mod winit_adapter;

pub use binding::Keybinding;
pub use command::Command;
pub use config::{load_keymap_file, parse_key_string, parse_keymap_yaml, KeymapError};
pub use defaults::{
    default_bindings, get_default_keymap_yaml, load_default_keymap, merge_bindings,
};
pub use keymap::Keymap;
pub use types::{KeyCode, Keystroke, Modifiers};
pub use winit_adapter::{keystroke_from_winit, modifiers_from_winit};

#[cfg(test)]
mod tests;
