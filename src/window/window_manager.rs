use crate::config::Metrics;
use crate::layout::{Bounds, Position, SnapZone, Viewport};
use crate::registry::{AppCatalog, ContentRegistry};

use super::decorator::TitleBar;
use super::{
    ContentType, LayoutStore, WindowId, WindowInstance, WindowLayout, WindowSpec, ZBand,
};

/// One window to draw this frame, in back-to-front order.
#[derive(Debug)]
pub struct WindowDraw<'a, H> {
    pub window: &'a WindowInstance,
    /// Effective bounds: the maximized area while maximized, else the floating
    /// geometry.
    pub bounds: Bounds,
    pub band: ZBand,
    pub focused: bool,
    /// Handler registered for the window's content type, if any.
    pub handler: Option<&'a H>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskbarEntry {
    pub app_id: &'static str,
    pub name: &'static str,
    pub has_open_windows: bool,
    pub has_visible_windows: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LaunchOutcome {
    Opened(WindowId),
    Restored(WindowId),
    External(&'static str),
    NotFound,
}

/// Owns the open windows, the focus and every window's layout.
///
/// All operations are total: ids that are not (or no longer) open are ignored,
/// since a taskbar click can race a window closing.
#[derive(Debug)]
pub struct WindowManager<H> {
    registry: ContentRegistry<H>,
    store: LayoutStore,
    windows: Vec<WindowInstance>,
    focused: Option<WindowId>,
    next_id: u64,
}

impl<H> WindowManager<H> {
    pub fn new(registry: ContentRegistry<H>, store: LayoutStore) -> Self {
        Self {
            registry,
            store,
            windows: Vec::new(),
            focused: None,
            next_id: 1,
        }
    }

    pub fn metrics(&self) -> &Metrics {
        self.store.metrics()
    }

    pub fn windows(&self) -> &[WindowInstance] {
        &self.windows
    }

    pub fn window(&self, id: WindowId) -> Option<&WindowInstance> {
        self.windows.iter().find(|w| w.id == id)
    }

    fn window_mut(&mut self, id: WindowId) -> Option<&mut WindowInstance> {
        self.windows.iter_mut().find(|w| w.id == id)
    }

    pub fn focused(&self) -> Option<WindowId> {
        self.focused
    }

    pub fn is_focused(&self, id: WindowId) -> bool {
        self.focused == Some(id)
    }

    /// Z-band of an open, non-minimized window.
    pub fn z_band(&self, id: WindowId) -> Option<ZBand> {
        let window = self.window(id)?;
        if window.minimized {
            return None;
        }
        Some(if self.is_focused(id) {
            ZBand::Focused
        } else {
            ZBand::Unfocused
        })
    }

    pub fn open_window(&mut self, spec: WindowSpec) -> WindowId {
        let id = WindowId(self.next_id);
        self.next_id = self.next_id.saturating_add(1);

        let metrics = *self.metrics();
        let fallback = spec.initial.unwrap_or_else(|| {
            WindowLayout::new(metrics.default_position, metrics.default_window)
        });
        let fallback = WindowLayout {
            size: fallback.size.at_least(metrics.min_window),
            ..fallback
        };
        let key = super::persistence_key(spec.content_type, id);
        let layout = self.store.initial(&key, fallback);

        self.windows.push(WindowInstance {
            id,
            content_type: spec.content_type,
            title: spec.title,
            props: spec.props,
            minimized: false,
            minimizable: spec.minimizable,
            maximizable: spec.maximizable,
            fallback_size: fallback.size,
            layout,
        });
        self.focused = Some(id);
        tracing::debug!(window_id = %id, content = %spec.content_type, "opened window");
        id
    }

    pub fn close_window(&mut self, id: WindowId) {
        let before = self.windows.len();
        self.windows.retain(|w| w.id != id);
        if self.windows.len() == before {
            tracing::debug!(window_id = %id, "close ignored for unknown window");
            return;
        }
        if self.focused == Some(id) {
            self.focused = None;
        }
        tracing::debug!(window_id = %id, "closed window");
    }

    /// Focus a window, restoring it first if it is minimized.
    pub fn focus_window(&mut self, id: WindowId) {
        let Some(window) = self.window_mut(id) else {
            tracing::debug!(window_id = %id, "focus ignored for unknown window");
            return;
        };
        window.minimized = false;
        self.focused = Some(id);
    }

    pub fn minimize_window(&mut self, id: WindowId) {
        let Some(window) = self.window_mut(id) else {
            return;
        };
        if !window.minimizable {
            tracing::debug!(window_id = %id, "window is not minimizable");
            return;
        }
        window.minimized = true;
        if self.focused == Some(id) {
            self.focused = None;
        }
    }

    /// Bring a window back from the minimized state and focus it. A window
    /// that is not minimized is simply focused.
    pub fn restore_window(&mut self, id: WindowId) {
        self.focus_window(id);
    }

    fn update_layout(&mut self, id: WindowId, f: impl FnOnce(WindowLayout) -> WindowLayout) {
        let Some(window) = self.windows.iter_mut().find(|w| w.id == id) else {
            return;
        };
        let next = f(window.layout);
        if next == window.layout {
            return;
        }
        window.layout = next;
        let key = window.persistence_key();
        self.store.save(&key, &next);
    }

    pub fn move_window(&mut self, id: WindowId, x: i32, y: i32) {
        self.update_layout(id, |layout| layout.moved_to(x, y));
    }

    pub fn resize_window(&mut self, id: WindowId, width: i32, height: i32) {
        let metrics = *self.metrics();
        self.update_layout(id, |layout| layout.resized_to(width, height, &metrics));
    }

    pub fn toggle_maximize(&mut self, id: WindowId) {
        if !self.window(id).is_some_and(|w| w.maximizable) {
            return;
        }
        self.update_layout(id, WindowLayout::toggled_maximize);
    }

    pub fn apply_snap(&mut self, id: WindowId, zone: SnapZone, bounds: Bounds) {
        if zone.is_none() {
            return;
        }
        if zone == SnapZone::Maximize && !self.window(id).is_some_and(|w| w.maximizable) {
            return;
        }
        tracing::debug!(window_id = %id, zone = ?zone, "snapping window");
        self.update_layout(id, |layout| layout.snapped(zone, bounds));
    }

    pub fn restore_from_maximize_at(
        &mut self,
        id: WindowId,
        cursor_x_ratio: f64,
        cursor: Position,
        viewport: Viewport,
    ) {
        let metrics = *self.metrics();
        let Some(fallback) = self.window(id).map(|w| w.fallback_size) else {
            return;
        };
        self.update_layout(id, |layout| {
            if !layout.is_maximized {
                return layout;
            }
            layout.restored_from_maximize_at(cursor_x_ratio, cursor, fallback, viewport, &metrics)
        });
    }

    /// Bounds a window currently occupies on screen.
    pub fn effective_bounds(&self, id: WindowId, viewport: Viewport) -> Option<Bounds> {
        self.window(id)
            .map(|window| window.layout.effective_bounds(viewport))
    }

    pub fn title_bar(&self, id: WindowId) -> Option<TitleBar> {
        self.window(id).map(|w| TitleBar {
            minimizable: w.minimizable,
            maximizable: w.maximizable,
        })
    }

    fn draw_entry<'a>(
        &'a self,
        window: &'a WindowInstance,
        focused: bool,
        viewport: Viewport,
    ) -> WindowDraw<'a, H> {
        WindowDraw {
            window,
            bounds: window.layout.effective_bounds(viewport),
            band: if focused {
                ZBand::Focused
            } else {
                ZBand::Unfocused
            },
            focused,
            handler: self.registry.resolve(window.content_type),
        }
    }

    /// Visible windows back to front: unfocused windows in open order, then
    /// the focused window.
    pub fn window_draw_plan(&self, viewport: Viewport) -> Vec<WindowDraw<'_, H>> {
        let mut plan: Vec<_> = self
            .windows
            .iter()
            .filter(|w| !w.minimized && !self.is_focused(w.id))
            .map(|w| self.draw_entry(w, false, viewport))
            .collect();
        if let Some(focused) = self.focused.and_then(|id| self.window(id))
            && !focused.minimized
        {
            plan.push(self.draw_entry(focused, true, viewport));
        }
        plan
    }

    /// Topmost visible window under `point`.
    pub fn hit_test(&self, point: Position, viewport: Viewport) -> Option<WindowId> {
        self.window_draw_plan(viewport)
            .iter()
            .rev()
            .find(|draw| draw.bounds.contains(point))
            .map(|draw| draw.window.id)
    }

    pub fn windows_of_type(&self, content_type: ContentType) -> impl Iterator<Item = &WindowInstance> {
        self.windows
            .iter()
            .filter(move |w| w.content_type == content_type)
    }

    /// Open a window for an app, or restore its minimized window if it has one.
    pub fn launch_app(&mut self, catalog: &AppCatalog, app_id: &str) -> LaunchOutcome {
        let Some(app) = catalog.get(app_id) else {
            tracing::warn!(app = %app_id, "app not found in catalog");
            return LaunchOutcome::NotFound;
        };
        if let Some(href) = app.href {
            return LaunchOutcome::External(href);
        }
        let Some(window_type) = app.window_type else {
            tracing::warn!(app = %app_id, "app has no launch target");
            return LaunchOutcome::NotFound;
        };
        let minimized = self
            .windows_of_type(window_type)
            .find(|w| w.minimized)
            .map(|w| w.id);
        if let Some(id) = minimized {
            self.restore_window(id);
            return LaunchOutcome::Restored(id);
        }
        let mut spec = WindowSpec::new(window_type, app.name);
        if window_type == ContentType::FileExplorer {
            spec = spec.with_prop("initialPath", "This PC");
        }
        LaunchOutcome::Opened(self.open_window(spec))
    }

    pub fn taskbar_entries(&self, catalog: &AppCatalog) -> Vec<TaskbarEntry> {
        catalog
            .pinned()
            .map(|app| {
                let (open, visible) = app.window_type.map_or((false, false), |ty| {
                    let mut windows = self.windows_of_type(ty).peekable();
                    let open = windows.peek().is_some();
                    (open, windows.any(|w| !w.minimized))
                });
                TaskbarEntry {
                    app_id: app.id,
                    name: app.name,
                    has_open_windows: open,
                    has_visible_windows: visible,
                }
            })
            .collect()
    }
}
