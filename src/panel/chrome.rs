//! Panel chrome: title bar, close button and tab labels

use super::icon::{Icon, GENERIC_ICON_NAME};
use super::item::PanelItem;
use super::orientation::Orientation;

/// Title shown by a side panel with no items
pub const EMPTY_TITLE: &str = "Empty";

/// Tooltip of the close button
pub const CLOSE_TOOLTIP: &str = "Hide panel";

/// Label of one notebook tab
#[derive(Debug, Clone, PartialEq)]
pub struct TabLabel {
    pub text: String,
    pub icon: Icon,
    /// Side panels keep the text hidden and only show the icon
    pub text_visible: bool,
    pub tooltip: String,
}

impl TabLabel {
    pub fn new(text: impl Into<String>, icon: Icon, text_visible: bool) -> Self {
        let text = text.into();
        Self {
            tooltip: text.clone(),
            text,
            icon,
            text_visible,
        }
    }
}

/// Title bar of a side panel: icon and name of the active item
#[derive(Debug, Clone, PartialEq)]
pub struct TitleBar {
    pub icon: Icon,
    pub label: String,
    empty_label: String,
    empty_icon: String,
    /// Whether an item is shown, as opposed to the empty state
    showing_item: bool,
}

impl TitleBar {
    pub fn new(empty_label: impl Into<String>, empty_icon: impl Into<String>) -> Self {
        let empty_label = empty_label.into();
        let empty_icon = empty_icon.into();
        Self {
            icon: Icon::Named(empty_icon.clone()),
            label: empty_label.clone(),
            empty_label,
            empty_icon,
            showing_item: false,
        }
    }

    /// Show `item`, or the empty state when there is none
    pub fn sync(&mut self, item: Option<&PanelItem>) {
        match item {
            Some(item) => {
                self.label = item.display_name.clone();
                self.icon = item.icon.copy_for_title();
                self.showing_item = true;
            }
            None => {
                self.label = self.empty_label.clone();
                self.icon = Icon::Named(self.empty_icon.clone());
                self.showing_item = false;
            }
        }
    }

    pub fn is_empty_state(&self) -> bool {
        !self.showing_item
    }
}

impl Default for TitleBar {
    fn default() -> Self {
        Self::new(EMPTY_TITLE, GENERIC_ICON_NAME)
    }
}

/// The small button that hides the panel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CloseButton {
    pub tooltip: String,
}

impl Default for CloseButton {
    fn default() -> Self {
        Self {
            tooltip: CLOSE_TOOLTIP.to_string(),
        }
    }
}

/// Orientation-specific decoration around the notebook
#[derive(Debug, Clone, PartialEq)]
pub enum PanelChrome {
    /// Title bar above the notebook, close button at the end of the title
    Vertical { title: TitleBar, close: CloseButton },
    /// Close button in a column to the right of the notebook
    Horizontal { close: CloseButton },
}

impl PanelChrome {
    pub fn build(orientation: Orientation, title: TitleBar, close: CloseButton) -> Self {
        if orientation.has_title_bar() {
            PanelChrome::Vertical { title, close }
        } else {
            PanelChrome::Horizontal { close }
        }
    }

    pub fn title(&self) -> Option<&TitleBar> {
        match self {
            PanelChrome::Vertical { title, .. } => Some(title),
            PanelChrome::Horizontal { .. } => None,
        }
    }

    pub fn title_mut(&mut self) -> Option<&mut TitleBar> {
        match self {
            PanelChrome::Vertical { title, .. } => Some(title),
            PanelChrome::Horizontal { .. } => None,
        }
    }

    pub fn close_button(&self) -> &CloseButton {
        match self {
            PanelChrome::Vertical { close, .. } | PanelChrome::Horizontal { close } => close,
        }
    }
}
