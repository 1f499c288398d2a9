//! Persistent panel session
//!
//! Remembers which item was active in each panel and whether the panel was
//! shown, so the next run can restore them. Items are recorded by their
//! stable id (a hash of the item id), which survives restarts as long as
//! the same items are added again.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::panel::{Orientation, Panel};

/// Saved state of one window's panels
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PanelSession {
    /// Schema version for forward compatibility
    #[serde(default)]
    pub version: u32,
    /// Stable id of the side panel's active item (0 = none)
    #[serde(default)]
    pub side_panel_active: u32,
    /// Stable id of the bottom panel's active item (0 = none)
    #[serde(default)]
    pub bottom_panel_active: u32,
    /// Whether the side panel was shown (`None` = never saved)
    #[serde(default)]
    pub side_visible: Option<bool>,
    #[serde(default)]
    pub bottom_visible: Option<bool>,
}

impl PanelSession {
    pub const CURRENT_VERSION: u32 = 1;

    pub fn new() -> Self {
        Self {
            version: Self::CURRENT_VERSION,
            ..Self::default()
        }
    }

    /// Load the session from `~/.config/dockpanel/session.json`
    pub fn load() -> Self {
        match crate::config_paths::session_file() {
            Some(path) => Self::load_from(&path),
            None => Self::default(),
        }
    }

    /// Load a session file, falling back to an empty session
    pub fn load_from(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(session) => {
                    tracing::debug!("Loaded panel session from {}", path.display());
                    session
                }
                Err(e) => {
                    tracing::warn!("Ignoring malformed session {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(_) => Self::default(),
        }
    }

    /// Save the session to `~/.config/dockpanel/session.json`
    pub fn save(&self) -> std::io::Result<()> {
        let Some(path) = crate::config_paths::session_file() else {
            return Err(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "No config directory available",
            ));
        };
        crate::config_paths::ensure_config_dir().map_err(std::io::Error::other)?;
        self.save_to(&path)
    }

    pub fn save_to(&self, path: &Path) -> std::io::Result<()> {
        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(path, contents)
    }

    /// Record a panel's active item and visibility in its orientation slot
    pub fn capture(&mut self, panel: &Panel) {
        let active = panel.active_item_stable_id();
        let visible = panel.is_visible();
        match panel.orientation() {
            Orientation::Vertical => {
                self.side_panel_active = active;
                self.side_visible = Some(visible);
            }
            Orientation::Horizontal => {
                self.bottom_panel_active = active;
                self.bottom_visible = Some(visible);
            }
        }
        self.version = Self::CURRENT_VERSION;
        tracing::debug!("Captured {} = {}", panel.orientation().session_key(), active);
    }

    /// Saved visibility of the panel with this orientation, if any
    pub fn visibility(&self, orientation: Orientation) -> Option<bool> {
        match orientation {
            Orientation::Vertical => self.side_visible,
            Orientation::Horizontal => self.bottom_visible,
        }
    }

    /// Reapply the saved state for a panel's orientation
    ///
    /// Unknown stable ids leave the active item alone, and a panel with no
    /// saved visibility keeps its current one.
    pub fn restore(&self, panel: &mut Panel) {
        let active = match panel.orientation() {
            Orientation::Vertical => self.side_panel_active,
            Orientation::Horizontal => self.bottom_panel_active,
        };

        panel.set_active_item_by_stable_id(active);
        match self.visibility(panel.orientation()) {
            Some(true) => panel.show(),
            Some(false) => panel.hide(),
            None => {}
        }
    }
}
