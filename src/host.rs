//! Collaborators provided by the host application
//!
//! A panel is embedded in some window hierarchy it knows nothing about.
//! When asked to hand focus back to the document, it walks up to its
//! toplevel and, if that toplevel is an editor window, asks it for the
//! active document view.

use crate::panel::WidgetId;

/// The root of the widget hierarchy a panel lives in
pub trait Toplevel {
    /// Whether this is really a toplevel window (not a detached container)
    fn is_toplevel(&self) -> bool {
        true
    }

    /// Downcast to an editor window, if this toplevel is one
    fn as_editor_window(&self) -> Option<&dyn EditorWindow> {
        None
    }
}

/// An application window that hosts documents
pub trait EditorWindow {
    /// The document view that currently has the user's attention
    fn active_view(&self) -> Option<WidgetId>;
}
