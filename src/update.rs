//! Update function for the Elm-style architecture
//!
//! All host-driven panel state transformations flow through `update_panel`.

use tracing::{debug, span, Level};

use crate::commands::Cmd;
use crate::messages::PanelMsg;
use crate::panel::{KeyOutcome, Panel};
use crate::tracing::PanelSnapshot;
use crate::widget::Sizeable;

/// Apply one message to a panel
///
/// Errors from item operations are logged and produce no command; the
/// panel is left unchanged in that case.
pub fn update_panel(panel: &mut Panel, msg: PanelMsg) -> Option<Cmd> {
    if msg.is_noisy() {
        return update_inner(panel, msg);
    }

    let msg_name = format!("{:?}", msg);
    let _span = span!(Level::DEBUG, "update", msg = %msg_name).entered();
    debug!(target: "message", msg = %msg_name, "processing");

    let before = PanelSnapshot::from_panel(panel);
    let result = update_inner(panel, msg);
    let after = PanelSnapshot::from_panel(panel);

    if let Some(diff) = before.diff(&after) {
        debug!(target: "panel", %diff, "state changed");
    }

    result
}

fn update_inner(panel: &mut Panel, msg: PanelMsg) -> Option<Cmd> {
    match msg {
        PanelMsg::AddItem {
            widget,
            id,
            display_name,
            icon,
        } => panel
            .add_item(widget, &id, &display_name, icon)
            .map(|()| Cmd::Redraw)
            .map_err(|e| tracing::warn!("AddItem failed: {}", e))
            .ok(),

        PanelMsg::RemoveItem(widget) => panel
            .remove_item(widget)
            .map(|()| Cmd::Redraw)
            .map_err(|e| tracing::warn!("RemoveItem failed: {}", e))
            .ok(),

        PanelMsg::ItemDestroyed(widget) => panel.item_destroyed(widget).ok().map(|()| Cmd::Redraw),

        PanelMsg::ActivateItem(widget) => panel
            .activate_item(widget)
            .map(|()| Cmd::Redraw)
            .map_err(|e| tracing::warn!("ActivateItem failed: {}", e))
            .ok(),

        PanelMsg::SwitchPage(index) => panel.switch_page(index).then_some(Cmd::Redraw),
        PanelMsg::NextItem => panel.next_item().then_some(Cmd::Redraw),
        PanelMsg::PrevItem => panel.prev_item().then_some(Cmd::Redraw),
        PanelMsg::RestoreActive(stable) => panel
            .set_active_item_by_stable_id(stable)
            .then_some(Cmd::Redraw),

        PanelMsg::Show => {
            if panel.is_visible() {
                return None;
            }
            panel.show();
            Some(Cmd::Redraw)
        }

        PanelMsg::Hide => {
            if !panel.is_visible() {
                return None;
            }
            panel.hide();
            Some(Cmd::Redraw)
        }

        PanelMsg::Key(keystroke) => match panel.handle_key(keystroke) {
            KeyOutcome::Ignored => None,
            KeyOutcome::Handled => Some(Cmd::Redraw),
            KeyOutcome::FocusView(view) => Some(Cmd::GrabFocus(view)),
        },

        PanelMsg::Click { x, y } => panel.click(x, y).map(|_| Cmd::Redraw),

        PanelMsg::Allocate(rect) => {
            if panel.allocation() == rect {
                return None;
            }
            panel.size_allocate(rect);
            Some(Cmd::Redraw)
        }
    }
}
