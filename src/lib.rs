//! dockpanel - dockable side and bottom panels for an editor window
//!
//! A `Panel` hosts named tool views as notebook pages, shows the active
//! one in a title bar (side panels) or on its tabs (bottom panels), and
//! remembers the active item across sessions by a stable hash of its id.
//! Hosts drive it directly or through the Elm-style `PanelMsg` / `update_panel`.

pub mod commands;
pub mod config;
pub mod config_paths;
pub mod host;
pub mod keymap;
pub mod messages;
pub mod panel;
pub mod session;
pub mod tracing;
pub mod update;
pub mod widget;

// Re-export commonly used types
pub use commands::Cmd;
pub use config::PanelConfig;
pub use messages::PanelMsg;
pub use panel::{Orientation, Panel, PanelError, PanelEvent, WidgetId};
pub use update::update_panel;
