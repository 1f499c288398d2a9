//! Message types for the Elm-style architecture
//!
//! All panel state changes driven by a host flow through `PanelMsg`.

use crate::keymap::Keystroke;
use crate::panel::{Icon, WidgetId};
use crate::widget::Rect;

/// Panel messages
#[derive(Debug, Clone)]
pub enum PanelMsg {
    // === Items ===
    /// Host a widget as a new item
    AddItem {
        widget: WidgetId,
        id: String,
        display_name: String,
        icon: Option<Icon>,
    },
    /// Stop hosting a widget
    RemoveItem(WidgetId),
    /// Bring an item's page to the front
    ActivateItem(WidgetId),
    /// The host destroyed a widget the panel still hosts
    ItemDestroyed(WidgetId),

    // === Navigation ===
    /// User clicked a tab (index in tab order)
    SwitchPage(usize),
    NextItem,
    PrevItem,
    /// Reactivate an item by stable id from a saved session
    RestoreActive(u32),

    // === Visibility ===
    Show,
    Hide,

    // === Input and layout ===
    Key(Keystroke),
    /// Primary click in panel coordinates
    Click { x: f32, y: f32 },
    /// New allocation from the parent container
    Allocate(Rect),
}

impl PanelMsg {
    /// Create an add-item message with the default icon
    pub fn add_item(widget: WidgetId, id: impl Into<String>, display_name: impl Into<String>) -> Self {
        PanelMsg::AddItem {
            widget,
            id: id.into(),
            display_name: display_name.into(),
            icon: None,
        }
    }

    /// Noisy messages are not logged per update
    pub fn is_noisy(&self) -> bool {
        matches!(self, PanelMsg::Allocate(_))
    }
}
