//! Panel configuration persistence
//!
//! Stores user preferences in `~/.config/dockpanel/panel.yaml`

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::panel::{TabPosition, CLOSE_TOOLTIP, EMPTY_TITLE, GENERIC_ICON_NAME};

/// Panel configuration that persists across sessions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PanelConfig {
    /// Title shown by a side panel with no items
    #[serde(default = "default_empty_title")]
    pub empty_title: String,

    /// Icon name used for items added without an icon
    #[serde(default = "default_icon")]
    pub default_icon: String,

    /// Tooltip of the close button
    #[serde(default = "default_close_tooltip")]
    pub close_tooltip: String,

    /// Edge of the notebook the tabs sit on
    #[serde(default)]
    pub tab_position: TabPosition,

    /// Scroll overflowing tabs instead of widening the panel
    #[serde(default = "default_true")]
    pub scrollable_tabs: bool,

    /// Offer a popup menu of all items on the tab strip
    #[serde(default = "default_true")]
    pub tab_menu: bool,
}

fn default_empty_title() -> String {
    EMPTY_TITLE.to_string()
}

fn default_icon() -> String {
    GENERIC_ICON_NAME.to_string()
}

fn default_close_tooltip() -> String {
    CLOSE_TOOLTIP.to_string()
}

fn default_true() -> bool {
    true
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            empty_title: default_empty_title(),
            default_icon: default_icon(),
            close_tooltip: default_close_tooltip(),
            tab_position: TabPosition::Bottom,
            scrollable_tabs: true,
            tab_menu: true,
        }
    }
}

impl PanelConfig {
    /// Load config from disk, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };

        Self::load_from(&path)
    }

    /// Load config from a specific file, falling back to defaults
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match serde_yaml::from_str(&content) {
                Ok(config) => {
                    tracing::info!("Loaded config from {}", path.display());
                    config
                }
                Err(e) => {
                    tracing::warn!("Failed to parse config at {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Save config to disk
    ///
    /// Creates the config directory if it doesn't exist.
    pub fn save(&self) -> Result<(), String> {
        let path = crate::config_paths::config_file()
            .ok_or_else(|| "No config directory available".to_string())?;
        self.save_to(&path)
    }

    /// Save config to a specific file
    pub fn save_to(&self, path: &Path) -> Result<(), String> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create config directory: {}", e))?;
        }

        let content = serde_yaml::to_string(self)
            .map_err(|e| format!("Failed to serialize config: {}", e))?;

        std::fs::write(path, content)
            .map_err(|e| format!("Failed to write config to {}: {}", path.display(), e))?;

        tracing::info!("Saved config to {}", path.display());
        Ok(())
    }
}
