//! Logging setup and panel state snapshots
//!
//! Configure via RUST_LOG environment variable:
//! - `RUST_LOG=debug` - all debug logs
//! - `RUST_LOG=dockpanel::panel=trace` - module-level filtering
//!
//! Logs are also written to `~/.config/dockpanel/logs/dockpanel.log` with
//! daily rotation, at debug level.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::panel::{Orientation, Panel};

/// Initialize tracing subscriber with console and file logging
pub fn init() {
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let console_layer = fmt::layer()
        .with_target(true)
        .with_line_number(true)
        .with_writer(std::io::stderr)
        .with_filter(console_filter);

    let file_layer = match crate::config_paths::ensure_logs_dir() {
        Ok(logs_dir) => {
            let file_appender = tracing_appender::rolling::daily(logs_dir, "dockpanel.log");
            Some(
                fmt::layer()
                    .with_writer(file_appender)
                    .with_ansi(false)
                    .with_target(true)
                    .with_line_number(true)
                    .with_filter(EnvFilter::new("debug")),
            )
        }
        Err(e) => {
            eprintln!("Warning: Could not initialize file logging: {}", e);
            None
        }
    };

    // A second init (e.g. from tests) keeps the first subscriber
    let _ = tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .try_init();
}

/// Lightweight snapshot of panel state for diffing around an update
#[derive(Debug, Clone, PartialEq)]
pub struct PanelSnapshot {
    pub orientation: Orientation,
    pub items: Vec<String>,
    pub active: Option<String>,
    pub visible: bool,
    pub title: Option<String>,
}

impl PanelSnapshot {
    pub fn from_panel(panel: &Panel) -> Self {
        let active = panel.active_item();
        Self {
            orientation: panel.orientation(),
            items: panel.items().map(|(_, item)| item.id.clone()).collect(),
            active: panel
                .items()
                .find(|(widget, _)| Some(*widget) == active)
                .map(|(_, item)| item.id.clone()),
            visible: panel.is_visible(),
            title: panel.title().map(str::to_string),
        }
    }

    /// Describe what changed between two snapshots
    pub fn diff(&self, other: &PanelSnapshot) -> Option<String> {
        let mut changes = Vec::new();

        if self.items != other.items {
            changes.push(format!(
                "items: [{}] → [{}]",
                self.items.join(", "),
                other.items.join(", ")
            ));
        }
        if self.active != other.active {
            changes.push(format!(
                "active: {} → {}",
                self.active.as_deref().unwrap_or("none"),
                other.active.as_deref().unwrap_or("none")
            ));
        }
        if self.visible != other.visible {
            let status = if other.visible { "shown" } else { "hidden" };
            changes.push(status.to_string());
        }
        if self.title != other.title {
            changes.push(format!(
                "title: {:?} → {:?}",
                self.title.as_deref().unwrap_or(""),
                other.title.as_deref().unwrap_or("")
            ));
        }

        if changes.is_empty() {
            None
        } else {
            Some(changes.join("; "))
        }
    }
}
