//! Panel orientation

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Orientation of a panel, fixed when the panel is created
///
/// A vertical panel is a side panel (tall and narrow, title bar on top).
/// A horizontal panel is a bottom panel (wide and short, close button on the right).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    Horizontal,
    #[default]
    Vertical,
}

impl Orientation {
    /// Style class applied to the panel container
    pub fn style_class(&self) -> &'static str {
        match self {
            Orientation::Horizontal => "horizontal",
            Orientation::Vertical => "vertical",
        }
    }

    /// Only side panels carry a title bar
    pub fn has_title_bar(&self) -> bool {
        matches!(self, Orientation::Vertical)
    }

    /// Side panels show icon-only tabs; bottom panels show icon and text
    pub fn shows_tab_text(&self) -> bool {
        matches!(self, Orientation::Horizontal)
    }

    /// Name of the session slot this orientation persists into
    pub fn session_key(&self) -> &'static str {
        match self {
            Orientation::Horizontal => "bottom-panel-active-page",
            Orientation::Vertical => "side-panel-active-page",
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.style_class())
    }
}

impl FromStr for Orientation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "horizontal" | "bottom" => Ok(Orientation::Horizontal),
            "vertical" | "side" => Ok(Orientation::Vertical),
            other => Err(format!("Unknown orientation: {}", other)),
        }
    }
}
