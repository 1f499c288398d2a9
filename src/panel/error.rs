//! Panel operation errors

use std::fmt;

use super::item::WidgetId;

/// Why a panel operation was refused
///
/// Every failure leaves the panel unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelError {
    /// Caller broke the API contract (e.g. empty item id)
    InvalidArgument(&'static str),
    /// An item with this id is already in the panel
    DuplicateId(String),
    /// This widget is already hosted by the panel
    AlreadyAdded(WidgetId),
    /// This widget is not hosted by the panel
    NotFound(WidgetId),
}

impl fmt::Display for PanelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PanelError::InvalidArgument(msg) => write!(f, "Invalid argument: {}", msg),
            PanelError::DuplicateId(id) => {
                write!(f, "An item with id '{}' already exists", id)
            }
            PanelError::AlreadyAdded(widget) => write!(f, "{} is already in the panel", widget),
            PanelError::NotFound(widget) => write!(f, "{} is not in the panel", widget),
        }
    }
}

impl std::error::Error for PanelError {}
