//! Side-effect commands returned from update

use crate::panel::WidgetId;

/// Commands returned by update functions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cmd {
    /// Panel content changed and must be repainted
    Redraw,
    /// Move keyboard focus to this widget
    GrabFocus(WidgetId),
    /// Execute multiple commands
    Batch(Vec<Cmd>),
}

impl Cmd {
    /// Create a batch of commands
    pub fn batch(cmds: Vec<Cmd>) -> Self {
        Cmd::Batch(cmds)
    }

    /// Check if this command requires a redraw
    pub fn needs_redraw(&self) -> bool {
        match self {
            Cmd::Redraw => true,
            Cmd::GrabFocus(_) => false,
            Cmd::Batch(cmds) => cmds.iter().any(|c| c.needs_redraw()),
        }
    }

    /// Widget to focus, if any command asks for one
    pub fn focus_target(&self) -> Option<WidgetId> {
        match self {
            Cmd::GrabFocus(widget) => Some(*widget),
            Cmd::Redraw => None,
            Cmd::Batch(cmds) => cmds.iter().find_map(Cmd::focus_target),
        }
    }
}
