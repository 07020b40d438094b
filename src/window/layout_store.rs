//! Persisted window geometry and the reducers that change it.

use serde::{Deserialize, Serialize};

use crate::config::Metrics;
use crate::layout::floating::{clamp_size, restore_position_for_drag, restore_size_for_drag};
use crate::layout::{Bounds, Position, Size, SnapZone, Viewport, maximized_bounds};
use crate::storage::KeyValueStore;

/// Geometry and display mode of one window.
///
/// While maximized, `position` and `size` are the values restored when the
/// window leaves the maximized state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WindowLayout {
    pub position: Position,
    pub size: Size,
    pub is_maximized: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub snap_zone: Option<SnapZone>,
}

impl WindowLayout {
    pub fn new(position: Position, size: Size) -> Self {
        Self {
            position,
            size,
            is_maximized: false,
            snap_zone: None,
        }
    }

    pub fn floating_bounds(&self) -> Bounds {
        Bounds::from_parts(self.position, self.size)
    }

    /// Bounds the window occupies on screen.
    pub fn effective_bounds(&self, viewport: Viewport) -> Bounds {
        if self.is_maximized {
            maximized_bounds(viewport)
        } else {
            self.floating_bounds()
        }
    }

    pub fn moved_to(self, x: i32, y: i32) -> Self {
        if self.is_maximized {
            return self;
        }
        Self {
            position: Position::new(x, y.max(0)),
            ..self
        }
    }

    pub fn resized_to(self, width: i32, height: i32, metrics: &Metrics) -> Self {
        Self {
            size: clamp_size(Size::new(width, height), metrics),
            ..self
        }
    }

    pub fn toggled_maximize(self) -> Self {
        Self {
            is_maximized: !self.is_maximized,
            ..self
        }
    }

    pub fn snapped(self, zone: SnapZone, bounds: Bounds) -> Self {
        match zone {
            SnapZone::Maximize => Self {
                is_maximized: true,
                ..self
            },
            _ => Self {
                position: bounds.origin(),
                size: bounds.size(),
                is_maximized: false,
                snap_zone: Some(zone),
            },
        }
    }

    /// Leave the maximized state so that the window sits under a cursor that
    /// started dragging it.
    pub fn restored_from_maximize_at(
        self,
        cursor_x_ratio: f64,
        cursor: Position,
        fallback: Size,
        viewport: Viewport,
        metrics: &Metrics,
    ) -> Self {
        let size = restore_size_for_drag(self.size, fallback, viewport);
        Self {
            position: restore_position_for_drag(cursor_x_ratio, cursor, size.width, metrics),
            size,
            is_maximized: false,
            snap_zone: None,
        }
    }
}

/// Reads and writes `WindowLayout`s through a key-value port.
pub struct LayoutStore {
    storage: Box<dyn KeyValueStore>,
    metrics: Metrics,
}

impl std::fmt::Debug for LayoutStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LayoutStore")
            .field("metrics", &self.metrics)
            .finish_non_exhaustive()
    }
}

impl LayoutStore {
    pub fn new(storage: impl KeyValueStore + 'static, metrics: Metrics) -> Self {
        Self {
            storage: Box::new(storage),
            metrics,
        }
    }

    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    /// Previously saved layout for `key`. Missing, unreadable or malformed
    /// entries all yield `None`.
    pub fn load(&self, key: &str) -> Option<WindowLayout> {
        let raw = match self.storage.get(key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(err) => {
                tracing::warn!(key = %key, error = %err, "failed to read window layout");
                return None;
            }
        };
        match serde_json::from_str::<WindowLayout>(&raw) {
            Ok(layout) => Some(WindowLayout {
                size: clamp_size(layout.size, &self.metrics),
                ..layout
            }),
            Err(err) => {
                tracing::warn!(key = %key, error = %err, "ignoring malformed window layout");
                None
            }
        }
    }

    /// Write-through persist. Failures are logged and otherwise ignored.
    pub fn save(&mut self, key: &str, layout: &WindowLayout) {
        let encoded = match serde_json::to_string(layout) {
            Ok(encoded) => encoded,
            Err(err) => {
                tracing::warn!(key = %key, error = %err, "failed to encode window layout");
                return;
            }
        };
        if let Err(err) = self.storage.set(key, encoded) {
            tracing::warn!(key = %key, error = %err, "failed to persist window layout");
        }
    }

    pub fn initial(&self, key: &str, fallback: WindowLayout) -> WindowLayout {
        self.load(key).unwrap_or(fallback)
    }
}
