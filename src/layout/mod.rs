pub mod floating;
pub mod snap;

pub use snap::{SnapZone, bounds_for_zone, classify_snap_zone, maximized_bounds};

use ratatui::prelude::Rect;
use serde::{Deserialize, Serialize};

/// Top-left corner of a window in viewport coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn offset_from(self, origin: Position) -> Position {
        Position::new(self.x - origin.x, self.y - origin.y)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Size {
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// Grow each dimension to at least `min`. Negative or zero sizes end up at `min`.
    pub fn at_least(self, min: Size) -> Size {
        Size::new(self.width.max(min.width), self.height.max(min.height))
    }
}

/// Signed rectangle in viewport coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Bounds {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Bounds {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn from_parts(origin: Position, size: Size) -> Self {
        Self::new(origin.x, origin.y, size.width, size.height)
    }

    pub fn origin(&self) -> Position {
        Position::new(self.x, self.y)
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    pub fn right(&self) -> i32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.height
    }

    pub fn contains(&self, point: Position) -> bool {
        if self.width <= 0 || self.height <= 0 {
            return false;
        }
        point.x >= self.x && point.x < self.right() && point.y >= self.y && point.y < self.bottom()
    }

    /// Portion of these bounds visible inside `area`, as a terminal rect.
    pub fn visible_in(&self, area: Rect) -> Option<Rect> {
        let left = self.x.max(i32::from(area.x));
        let top = self.y.max(i32::from(area.y));
        let right = self.right().min(i32::from(area.x) + i32::from(area.width));
        let bottom = self.bottom().min(i32::from(area.y) + i32::from(area.height));
        if right <= left || bottom <= top {
            return None;
        }
        Some(Rect {
            x: left as u16,
            y: top as u16,
            width: (right - left) as u16,
            height: (bottom - top) as u16,
        })
    }
}

impl From<Rect> for Bounds {
    fn from(rect: Rect) -> Self {
        Self::new(
            i32::from(rect.x),
            i32::from(rect.y),
            i32::from(rect.width),
            i32::from(rect.height),
        )
    }
}

/// Host-provided screen dimensions, read at interaction time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: i32,
    pub height: i32,
    /// Strip at the bottom (a taskbar) excluded from snap and maximize bounds.
    pub reserved_bottom: i32,
}

impl Viewport {
    pub const fn new(width: i32, height: i32, reserved_bottom: i32) -> Self {
        Self {
            width,
            height,
            reserved_bottom,
        }
    }

    pub fn usable_height(&self) -> i32 {
        (self.height - self.reserved_bottom).max(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_contains_is_half_open() {
        let b = Bounds::new(10, 10, 5, 5);
        assert!(b.contains(Position::new(10, 10)));
        assert!(b.contains(Position::new(14, 14)));
        assert!(!b.contains(Position::new(15, 10)));
        assert!(!Bounds::new(0, 0, 0, 5).contains(Position::new(0, 0)));
    }

    #[test]
    fn visible_in_clips_negative_origin() {
        let area = Rect {
            x: 0,
            y: 0,
            width: 80,
            height: 24,
        };
        let b = Bounds::new(-5, 3, 20, 6);
        assert_eq!(
            b.visible_in(area),
            Some(Rect {
                x: 0,
                y: 3,
                width: 15,
                height: 6
            })
        );
        assert_eq!(Bounds::new(100, 0, 5, 5).visible_in(area), None);
    }

    #[test]
    fn size_at_least_clamps_negative_dimensions() {
        let min = Size::new(100, 100);
        assert_eq!(Size::new(-20, 300).at_least(min), Size::new(100, 300));
    }

    #[test]
    fn usable_height_excludes_reserved_strip() {
        assert_eq!(Viewport::new(1920, 1080, 48).usable_height(), 1032);
        assert_eq!(Viewport::new(10, 10, 48).usable_height(), 0);
    }
}
