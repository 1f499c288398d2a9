//! Keybinding struct mapping a keystroke to a panel command

use super::command::Command;
use super::types::Keystroke;

/// A single keybinding
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keybinding {
    pub keystroke: Keystroke,
    pub command: Command,
}

impl Keybinding {
    pub fn new(keystroke: Keystroke, command: Command) -> Self {
        Self { keystroke, command }
    }

    pub fn matches(&self, keystroke: &Keystroke) -> bool {
        self.keystroke == *keystroke
    }

    /// Get display string for this keybinding
    pub fn display_string(&self) -> String {
        format!("{} → {}", self.keystroke, self.command.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keymap::types::{KeyCode, Modifiers};

    #[test]
    fn test_binding_matches_exact_modifiers() {
        let stroke = Keystroke::new(KeyCode::Enter, Modifiers::CTRL);
        let binding = Keybinding::new(stroke, Command::FocusDocument);

        assert!(binding.matches(&stroke));
        assert!(!binding.matches(&Keystroke::key(KeyCode::Enter)));
        assert_eq!(binding.display_string(), "Ctrl+Enter → FocusDocument");
    }
}
