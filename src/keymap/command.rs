//! Actions that keybindings can trigger on a panel

use std::str::FromStr;

/// All panel actions that can be bound to keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    /// Hide the panel (Escape)
    ClosePanel,
    /// Hand focus back to the active document view (Ctrl+Enter)
    FocusDocument,
    /// Activate the next item, wrapping around (Ctrl+PageDown)
    NextItem,
    /// Activate the previous item, wrapping around (Ctrl+PageUp)
    PrevItem,
    /// Removes a default binding when used in a user keymap
    Unbound,
}

impl Command {
    /// Name used in keymap files
    pub fn name(&self) -> &'static str {
        match self {
            Command::ClosePanel => "ClosePanel",
            Command::FocusDocument => "FocusDocument",
            Command::NextItem => "NextItem",
            Command::PrevItem => "PrevItem",
            Command::Unbound => "Unbound",
        }
    }
}

impl FromStr for Command {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ClosePanel" | "Close" => Ok(Command::ClosePanel),
            "FocusDocument" => Ok(Command::FocusDocument),
            "NextItem" => Ok(Command::NextItem),
            "PrevItem" | "PreviousItem" => Ok(Command::PrevItem),
            "Unbound" => Ok(Command::Unbound),
            _ => Err(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_round_trips_through_from_str() {
        for command in [
            Command::ClosePanel,
            Command::FocusDocument,
            Command::NextItem,
            Command::PrevItem,
            Command::Unbound,
        ] {
            assert_eq!(command.name().parse::<Command>(), Ok(command));
        }
        assert!("SaveFile".parse::<Command>().is_err());
    }
}
