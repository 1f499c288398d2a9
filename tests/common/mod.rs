//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use dockpanel::host::{EditorWindow, Toplevel};
use dockpanel::panel::{Orientation, Panel, PanelEvent, WidgetId};

/// Create a panel with one item per `(id, name)`, widgets numbered from 1
pub fn test_panel(orientation: Orientation, items: &[(&str, &str)]) -> Panel {
    let mut panel = Panel::new(orientation);
    for (i, (id, name)) in items.iter().enumerate() {
        panel
            .add_item(widget(i + 1), id, name, None)
            .expect("test item should be accepted");
    }
    panel
}

/// Side panel holding "a"/Alpha and "b"/Beta
pub fn side_panel_ab() -> Panel {
    test_panel(Orientation::Vertical, &[("a", "Alpha"), ("b", "Beta")])
}

pub fn widget(n: usize) -> WidgetId {
    WidgetId(n as u64)
}

/// Record every event the panel emits
pub fn record_events(panel: &mut Panel) -> Rc<RefCell<Vec<PanelEvent>>> {
    let events = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&events);
    panel.connect(move |event| sink.borrow_mut().push(*event));
    events
}

/// Editor window with a fixed active view
pub struct TestWindow {
    pub active_view: Option<WidgetId>,
}

impl Toplevel for TestWindow {
    fn as_editor_window(&self) -> Option<&dyn EditorWindow> {
        Some(self)
    }
}

impl EditorWindow for TestWindow {
    fn active_view(&self) -> Option<WidgetId> {
        self.active_view
    }
}

/// A toplevel that is not an editor window
pub struct PlainToplevel;

impl Toplevel for PlainToplevel {}

/// A container that reports it is not a real toplevel
pub struct DetachedContainer;

impl Toplevel for DetachedContainer {
    fn is_toplevel(&self) -> bool {
        false
    }

    fn as_editor_window(&self) -> Option<&dyn EditorWindow> {
        None
    }
}
