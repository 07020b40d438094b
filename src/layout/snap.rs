//! Edge and corner snap detection.
//!
//! Both functions are pure: classification depends only on the pointer, the
//! viewport and the metrics; bounds depend only on the zone and the viewport.

use serde::{Deserialize, Serialize};

use super::{Bounds, Position, Viewport};
use crate::config::Metrics;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SnapZone {
    Left,
    Right,
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
    Maximize,
    None,
}

impl SnapZone {
    pub fn is_none(self) -> bool {
        self == SnapZone::None
    }
}

/// Classify the pointer position into a snap zone.
///
/// The top edge is tested first, so the first `snap_threshold` rows maximize
/// unless the pointer also sits within a corner span horizontally. Corner
/// tests along the sides only apply inside the left/right edge branches.
pub fn classify_snap_zone(pointer: Position, viewport: Viewport, metrics: &Metrics) -> SnapZone {
    let Position { x, y } = pointer;
    let threshold = metrics.snap_threshold;
    let corner = metrics.corner_size;
    let usable_height = viewport.usable_height();

    if y < threshold {
        if x < corner {
            SnapZone::TopLeft
        } else if x > viewport.width - corner {
            SnapZone::TopRight
        } else {
            SnapZone::Maximize
        }
    } else if x < threshold {
        if y < corner {
            SnapZone::TopLeft
        } else if y > usable_height - corner {
            SnapZone::BottomLeft
        } else {
            SnapZone::Left
        }
    } else if x > viewport.width - threshold {
        if y < corner {
            SnapZone::TopRight
        } else if y > usable_height - corner {
            SnapZone::BottomRight
        } else {
            SnapZone::Right
        }
    } else {
        SnapZone::None
    }
}

/// Full viewport minus the reserved strip.
pub fn maximized_bounds(viewport: Viewport) -> Bounds {
    Bounds::new(0, 0, viewport.width.max(0), viewport.usable_height())
}

/// Target bounds a window takes when released in `zone`.
pub fn bounds_for_zone(zone: SnapZone, viewport: Viewport) -> Option<Bounds> {
    let width = viewport.width.max(0);
    let height = viewport.usable_height();
    let half_w = width / 2;
    let half_h = height / 2;
    let bounds = match zone {
        SnapZone::None => return None,
        SnapZone::Maximize => maximized_bounds(viewport),
        SnapZone::Left => Bounds::new(0, 0, half_w, height),
        SnapZone::Right => Bounds::new(half_w, 0, width - half_w, height),
        SnapZone::TopLeft => Bounds::new(0, 0, half_w, half_h),
        SnapZone::TopRight => Bounds::new(half_w, 0, width - half_w, half_h),
        SnapZone::BottomLeft => Bounds::new(0, half_h, half_w, height - half_h),
        SnapZone::BottomRight => Bounds::new(half_w, half_h, width - half_w, height - half_h),
    };
    Some(bounds)
}
