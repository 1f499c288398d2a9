//! Display list produced when painting a panel
//!
//! The panel does not draw pixels itself. It emits a flat list of
//! primitives that the host renderer turns into real drawing calls.

use super::icon::Icon;
use super::item::WidgetId;
use crate::widget::Rect;

/// A single drawing primitive
#[derive(Debug, Clone, PartialEq)]
pub enum PaintOp {
    /// Framed background carrying a style class ("title", "title-empty", "notebook")
    Frame { rect: Rect, style_class: &'static str },
    Icon { rect: Rect, icon: Icon },
    /// Single-line label, ellipsized at the end if it does not fit
    Label { rect: Rect, text: String },
    CloseButton { rect: Rect, tooltip: String },
    Tab {
        rect: Rect,
        text: Option<String>,
        icon: Icon,
        selected: bool,
    },
    /// Area where the host draws the hosted widget itself
    Page { rect: Rect, widget: WidgetId },
}

/// Ordered list of primitives, back to front
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DisplayList {
    ops: Vec<PaintOp>,
}

impl DisplayList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, op: PaintOp) {
        self.ops.push(op);
    }

    pub fn ops(&self) -> &[PaintOp] {
        &self.ops
    }

    pub fn len(&self) -> usize {
        self.ops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    pub fn clear(&mut self) {
        self.ops.clear();
    }

    /// All label texts in paint order
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.ops.iter().filter_map(|op| match op {
            PaintOp::Label { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }
}
