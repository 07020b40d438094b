use super::{Position, Size, Viewport};
use crate::config::Metrics;
use crate::window::WindowId;

/// An in-progress title-bar drag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderDrag {
    pub id: WindowId,
    /// Pointer position relative to the window origin when the drag began.
    pub offset: Position,
    /// Pointer position when the drag began.
    pub start: Position,
    /// Whether the pointer has moved since the drag began.
    pub moved: bool,
    /// The window was maximized when pressed and is restored on first motion.
    pub restore_pending: bool,
}

impl HeaderDrag {
    pub fn new(id: WindowId, pointer: Position, window_origin: Position) -> Self {
        Self {
            id,
            offset: pointer.offset_from(window_origin),
            start: pointer,
            moved: false,
            restore_pending: false,
        }
    }

    /// Drag of a maximized window. The offset is taken once the window has
    /// been restored to floating geometry.
    pub fn from_maximized(id: WindowId, pointer: Position) -> Self {
        Self {
            id,
            offset: Position::new(0, 0),
            start: pointer,
            moved: false,
            restore_pending: true,
        }
    }

    /// Drag continuing against a freshly restored window origin.
    pub fn restored(self, window_origin: Position) -> Self {
        Self {
            moved: self.moved,
            ..Self::new(self.id, self.start, window_origin)
        }
    }

    /// Window origin for the current pointer position, with the top edge kept
    /// inside the viewport.
    pub fn origin_for(&self, pointer: Position) -> Position {
        Position::new(pointer.x - self.offset.x, (pointer.y - self.offset.y).max(0))
    }
}

/// Clamp a requested size to the minimum sane window size.
pub fn clamp_size(size: Size, metrics: &Metrics) -> Size {
    size.at_least(metrics.min_window)
}

/// Placement of a window being pulled out of the maximized state.
///
/// The window keeps the horizontal proportion under the cursor that the cursor
/// had across the maximized width, and its title bar centers vertically on the
/// cursor.
pub fn restore_position_for_drag(
    cursor_x_ratio: f64,
    cursor: Position,
    width: i32,
    metrics: &Metrics,
) -> Position {
    let ratio = if cursor_x_ratio.is_finite() {
        cursor_x_ratio.clamp(0.0, 1.0)
    } else {
        0.0
    };
    let x = (f64::from(cursor.x) - ratio * f64::from(width)).round() as i32;
    let y = (cursor.y - metrics.title_bar_height / 2).max(0);
    Position::new(x, y)
}

/// Floating size used when un-maximizing: the retained size unless it would
/// already fill the usable viewport.
pub fn restore_size_for_drag(retained: Size, fallback: Size, viewport: Viewport) -> Size {
    if retained.width < viewport.width && retained.height < viewport.usable_height() {
        retained
    } else {
        fallback
    }
}
