//! Dockable panel widget
//!
//! A panel sits at the side (vertical) or bottom (horizontal) of an editor
//! window and hosts tool views as notebook pages.
//!
//! ## Architecture
//!
//! - `Orientation`: Vertical (side panel with title bar) or Horizontal (bottom panel)
//! - `PanelItem`: id, display name and icon of one hosted view
//! - `Notebook`: ordered pages with a current page
//! - `PanelChrome`: title bar and close button, fixed at construction
//! - `Listeners`: item-added, item-removed, close and focus-document observers
//! - `geometry` / `paint`: pure layout, hit-testing and display list output
//! - `Panel`: ties it all together
//!
//! ## Integration
//!
//! - Keyboard via `Panel::handle_key` with bindings from `crate::keymap`
//! - Message dispatch via `PanelMsg` in `crate::update`
//! - Session persistence via stable ids in `crate::session`

mod chrome;
mod error;
mod events;
pub mod geometry;
mod icon;
mod item;
mod notebook;
mod orientation;
mod paint;
#[allow(clippy::module_inception)]
mod panel;

pub use chrome::{CloseButton, PanelChrome, TabLabel, TitleBar, CLOSE_TOOLTIP, EMPTY_TITLE};
pub use error::PanelError;
pub use events::{ListenerId, Listeners, PanelEvent};
pub use geometry::{HitTarget, PanelLayout};
pub use icon::{Icon, GENERIC_ICON_NAME, MENU_ICON_SIZE};
pub use item::{stable_id, PanelItem, WidgetId};
pub use notebook::{Notebook, Page, PageSwitch, TabPosition};
pub use orientation::Orientation;
pub use paint::{DisplayList, PaintOp};
pub use panel::{KeyOutcome, Panel};
