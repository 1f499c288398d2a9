//! Keymap struct for storing and looking up keybindings

use std::collections::HashMap;

use super::binding::Keybinding;
use super::command::Command;
use super::defaults::default_bindings;
use super::types::Keystroke;

/// The keymap stores all keybindings and handles lookup
#[derive(Debug, Clone, Default)]
pub struct Keymap {
    bindings: Vec<Keybinding>,
    /// Keystroke → index into bindings; the first binding for a keystroke wins
    lookup: HashMap<Keystroke, usize>,
}

impl Keymap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_bindings(bindings: Vec<Keybinding>) -> Self {
        let mut keymap = Self::new();
        for binding in bindings {
            keymap.add_binding(binding);
        }
        keymap
    }

    pub fn add_binding(&mut self, binding: Keybinding) {
        let idx = self.bindings.len();
        self.lookup.entry(binding.keystroke).or_insert(idx);
        self.bindings.push(binding);
    }

    /// Command bound to a keystroke, if any
    pub fn lookup(&self, keystroke: &Keystroke) -> Option<Command> {
        let idx = *self.lookup.get(keystroke)?;
        match self.bindings[idx].command {
            Command::Unbound => None,
            command => Some(command),
        }
    }

    /// First keystroke bound to a command (for tooltips and menus)
    pub fn keystroke_for(&self, command: Command) -> Option<Keystroke> {
        self.bindings
            .iter()
            .find(|b| b.command == command)
            .map(|b| b.keystroke)
    }

    pub fn bindings(&self) -> &[Keybinding] {
        &self.bindings
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

impl Keymap {
    /// Keymap with the built-in panel bindings
    pub fn panel_defaults() -> Self {
        Self::with_bindings(default_bindings())
    }
}
