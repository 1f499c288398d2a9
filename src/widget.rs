//! Widget capabilities
//!
//! The panel does not subclass a toolkit widget. Instead it implements a
//! small set of capabilities that a host renderer/layout pass can drive:
//!
//! - `Sizeable`: size negotiation and allocation
//! - `Focusable`: keyboard focus forwarding
//! - `Paintable`: produce a display list for the host to draw

use serde::{Deserialize, Serialize};

use crate::panel::{DisplayList, WidgetId};

/// Axis-aligned rectangle in logical pixels
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn contains(&self, px: f32, py: f32) -> bool {
        px >= self.x && px < self.x + self.width && py >= self.y && py < self.y + self.height
    }

    /// Right edge (exclusive)
    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Bottom edge (exclusive)
    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

/// Minimum and natural size along one axis
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SizeRequest {
    pub minimum: f32,
    pub natural: f32,
}

impl SizeRequest {
    pub const ZERO: SizeRequest = SizeRequest {
        minimum: 0.0,
        natural: 0.0,
    };

    pub fn new(minimum: f32, natural: f32) -> Self {
        Self {
            minimum,
            natural: natural.max(minimum),
        }
    }

    /// Fixed size (minimum == natural)
    pub fn fixed(size: f32) -> Self {
        Self::new(size, size)
    }

    /// Largest of both requests, component-wise
    pub fn max(self, other: SizeRequest) -> SizeRequest {
        SizeRequest {
            minimum: self.minimum.max(other.minimum),
            natural: self.natural.max(other.natural),
        }
    }

    /// Stack two requests along the same axis
    pub fn add(self, other: SizeRequest) -> SizeRequest {
        SizeRequest {
            minimum: self.minimum + other.minimum,
            natural: self.natural + other.natural,
        }
    }
}

/// Something that takes part in size negotiation
pub trait Sizeable {
    fn preferred_width(&self) -> SizeRequest;
    fn preferred_height(&self) -> SizeRequest;
    fn size_allocate(&mut self, allocation: Rect);
}

/// Something that can forward keyboard focus
pub trait Focusable {
    /// Returns the widget that should receive focus, if any
    fn grab_focus(&mut self) -> Option<WidgetId>;
}

/// Something that can describe how it should be drawn
pub trait Paintable {
    fn paint(&self, list: &mut DisplayList);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_contains_is_half_open() {
        let rect = Rect::new(10.0, 10.0, 20.0, 5.0);
        assert!(rect.contains(10.0, 10.0));
        assert!(rect.contains(29.9, 14.9));
        assert!(!rect.contains(30.0, 12.0));
        assert!(!rect.contains(15.0, 15.0));
    }

    #[test]
    fn test_size_request_combinators() {
        let a = SizeRequest::new(10.0, 40.0);
        let b = SizeRequest::fixed(24.0);
        assert_eq!(a.max(b), SizeRequest::new(24.0, 40.0));
        assert_eq!(a.add(b), SizeRequest::new(34.0, 64.0));
        // natural never below minimum
        assert_eq!(SizeRequest::new(30.0, 10.0).natural, 30.0);
    }
}
