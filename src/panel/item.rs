//! Panel items and their identity records

use serde::{Deserialize, Serialize};
use std::fmt;

use super::icon::Icon;

/// Handle to an externally-owned view widget hosted by a panel
///
/// The panel never owns the view itself. Hosts allocate ids however they
/// like, as long as each live view has a distinct one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct WidgetId(pub u64);

impl fmt::Display for WidgetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "widget#{}", self.0)
    }
}

/// Identity record for an item: unique id, display name, icon
#[derive(Debug, Clone, PartialEq)]
pub struct PanelItem {
    pub id: String,
    pub display_name: String,
    pub icon: Icon,
}

impl PanelItem {
    pub fn new(id: impl Into<String>, display_name: impl Into<String>, icon: Icon) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
            icon,
        }
    }

    /// Stable numeric id for session persistence
    pub fn stable_id(&self) -> u32 {
        stable_id(&self.id)
    }
}

/// Hash an item id into a stable 32-bit value
///
/// djb2 (`h = h * 33 + c`, seed 5381) over the bytes as signed chars, so
/// values written by older sessions keep matching.
pub fn stable_id(id: &str) -> u32 {
    id.bytes().fold(5381u32, |h, b| {
        h.wrapping_mul(33).wrapping_add(b as i8 as i32 as u32)
    })
}
