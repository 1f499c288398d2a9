//! Panel notifications and listener registration

use std::fmt;

use super::item::WidgetId;

/// Notifications a panel emits to its listeners
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelEvent {
    /// An item was appended to the panel
    ItemAdded(WidgetId),
    /// An item left the panel (removed or destroyed)
    ItemRemoved(WidgetId),
    /// The close action ran; the panel hides itself afterwards
    Close,
    /// The focus-document action ran
    FocusDocument,
}

/// Handle returned by `connect`, used to disconnect a listener
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

type Listener = Box<dyn FnMut(&PanelEvent)>;

/// Registered listeners, called in connection order
#[derive(Default)]
pub struct Listeners {
    next_id: u64,
    entries: Vec<(ListenerId, Listener)>,
}

impl Listeners {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn connect(&mut self, listener: impl FnMut(&PanelEvent) + 'static) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, Box::new(listener)));
        id
    }

    /// Returns false if the listener was not connected
    pub fn disconnect(&mut self, id: ListenerId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry_id, _)| *entry_id != id);
        self.entries.len() != before
    }

    pub fn emit(&mut self, event: PanelEvent) {
        tracing::trace!(?event, listeners = self.entries.len(), "emit");
        for (_, listener) in self.entries.iter_mut() {
            listener(&event);
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Debug for Listeners {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Listeners")
            .field("count", &self.entries.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_emit_reaches_listeners_in_order() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut listeners = Listeners::new();

        let first = Rc::clone(&log);
        listeners.connect(move |e| first.borrow_mut().push(("first", *e)));
        let second = Rc::clone(&log);
        listeners.connect(move |e| second.borrow_mut().push(("second", *e)));

        listeners.emit(PanelEvent::Close);
        assert_eq!(
            *log.borrow(),
            vec![("first", PanelEvent::Close), ("second", PanelEvent::Close)]
        );
    }

    #[test]
    fn test_disconnect() {
        let count = Rc::new(RefCell::new(0));
        let mut listeners = Listeners::new();
        let c = Rc::clone(&count);
        let id = listeners.connect(move |_| *c.borrow_mut() += 1);

        listeners.emit(PanelEvent::FocusDocument);
        assert!(listeners.disconnect(id));
        assert!(!listeners.disconnect(id));
        listeners.emit(PanelEvent::FocusDocument);

        assert_eq!(*count.borrow(), 1);
        assert!(listeners.is_empty());
    }
}
