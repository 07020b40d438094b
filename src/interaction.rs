//! Pointer handling for window chrome: title-bar drags with snap preview,
//! title-bar controls and double-click maximize.
//!
//! The controller is single-threaded and event driven. It keeps only transient
//! state (the active drag and the snap preview); every lasting change goes
//! through the `WindowManager` operations.

use std::time::{Duration, Instant};

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use crate::layout::floating::HeaderDrag;
use crate::layout::{Bounds, Position, SnapZone, Viewport, bounds_for_zone, classify_snap_zone};
use crate::window::decorator::HeaderAction;
use crate::window::{WindowId, WindowManager};

/// Where the dragged window would land if released now.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SnapPreview {
    pub zone: SnapZone,
    pub bounds: Bounds,
}

#[derive(Debug, Default)]
pub struct InteractionController {
    drag: Option<HeaderDrag>,
    preview: Option<SnapPreview>,
    last_header_click: Option<(WindowId, Instant)>,
}

impl InteractionController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn dragging(&self) -> Option<WindowId> {
        self.drag.map(|drag| drag.id)
    }

    pub fn snap_preview(&self) -> Option<SnapPreview> {
        self.preview
    }

    /// Title-bar action under `pointer` for the topmost window there.
    fn header_hit<H>(
        wm: &WindowManager<H>,
        pointer: Position,
        viewport: Viewport,
    ) -> Option<(WindowId, HeaderAction)> {
        let id = wm.hit_test(pointer, viewport)?;
        let bounds = wm.effective_bounds(id, viewport)?;
        let bar = wm.title_bar(id)?;
        Some((id, bar.hit_test(bounds, pointer, wm.metrics())))
    }

    /// Handle a primary-button press. Returns whether a window consumed it.
    pub fn pointer_down<H>(
        &mut self,
        wm: &mut WindowManager<H>,
        pointer: Position,
        viewport: Viewport,
    ) -> bool {
        let Some((id, action)) = Self::header_hit(wm, pointer, viewport) else {
            return false;
        };
        match action {
            HeaderAction::Minimize => wm.minimize_window(id),
            HeaderAction::Maximize => {
                wm.focus_window(id);
                wm.toggle_maximize(id);
            }
            HeaderAction::Close => wm.close_window(id),
            HeaderAction::None => wm.focus_window(id),
            HeaderAction::Drag => {
                wm.focus_window(id);
                self.begin_drag(wm, id, pointer);
            }
        }
        true
    }

    /// Start a title-bar drag. A maximized window stays maximized until the
    /// pointer actually moves, so a click or double click leaves its restore
    /// geometry untouched.
    fn begin_drag<H>(&mut self, wm: &WindowManager<H>, id: WindowId, pointer: Position) {
        let Some(window) = wm.window(id) else {
            return;
        };
        self.drag = Some(if window.layout.is_maximized {
            HeaderDrag::from_maximized(id, pointer)
        } else {
            HeaderDrag::new(id, pointer, window.layout.position)
        });
        self.preview = None;
        tracing::debug!(window_id = %id, x = pointer.x, y = pointer.y, "drag started");
    }

    /// Pull a maximized window out under the point where its drag began and
    /// take the drag offset against the restored geometry.
    fn restore_for_drag<H>(
        wm: &mut WindowManager<H>,
        drag: HeaderDrag,
        viewport: Viewport,
    ) -> HeaderDrag {
        let ratio = if viewport.width > 0 {
            f64::from(drag.start.x) / f64::from(viewport.width)
        } else {
            0.0
        };
        wm.restore_from_maximize_at(drag.id, ratio, drag.start, viewport);
        match wm.window(drag.id) {
            Some(window) => drag.restored(window.layout.position),
            None => drag,
        }
    }

    /// Handle pointer motion. Only does anything while a drag is active.
    pub fn pointer_move<H>(
        &mut self,
        wm: &mut WindowManager<H>,
        pointer: Position,
        viewport: Viewport,
    ) -> bool {
        let Some(drag) = self.drag.as_mut() else {
            return false;
        };
        if pointer != drag.start {
            drag.moved = true;
        }
        let mut drag = *drag;
        if wm.window(drag.id).is_none() {
            self.drag = None;
            self.preview = None;
            return false;
        }
        if drag.restore_pending {
            if !drag.moved {
                return true;
            }
            drag = Self::restore_for_drag(wm, drag, viewport);
            self.drag = Some(drag);
        }
        let origin = drag.origin_for(pointer);
        wm.move_window(drag.id, origin.x, origin.y);

        // A press without motion never previews, so a plain click cannot snap.
        self.preview = if drag.moved {
            let zone = classify_snap_zone(pointer, viewport, wm.metrics());
            bounds_for_zone(zone, viewport).map(|bounds| SnapPreview { zone, bounds })
        } else {
            None
        };
        true
    }

    /// Handle the primary-button release: commit any snap preview and end the
    /// drag.
    pub fn pointer_up<H>(&mut self, wm: &mut WindowManager<H>) -> bool {
        let Some(drag) = self.drag.take() else {
            return false;
        };
        if let Some(preview) = self.preview.take() {
            wm.apply_snap(drag.id, preview.zone, preview.bounds);
        }
        tracing::debug!(window_id = %drag.id, "drag finished");
        true
    }

    /// Double-click on a title bar outside its controls toggles maximize.
    pub fn double_click<H>(
        &mut self,
        wm: &mut WindowManager<H>,
        pointer: Position,
        viewport: Viewport,
    ) -> bool {
        let Some((id, HeaderAction::Drag)) = Self::header_hit(wm, pointer, viewport) else {
            return false;
        };
        self.drag = None;
        self.preview = None;
        wm.focus_window(id);
        wm.toggle_maximize(id);
        true
    }

    /// Route a terminal mouse event. A second left press on the same title bar
    /// within the double-click interval counts as a double click.
    pub fn handle_mouse<H>(
        &mut self,
        wm: &mut WindowManager<H>,
        event: &MouseEvent,
        now: Instant,
        viewport: Viewport,
    ) -> bool {
        let pointer = Position::new(i32::from(event.column), i32::from(event.row));
        match event.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                let interval = wm.metrics().double_click;
                let header = Self::header_hit(wm, pointer, viewport);
                if let Some((id, HeaderAction::Drag)) = header {
                    if self.is_double_click(id, now, interval) {
                        self.last_header_click = None;
                        return self.double_click(wm, pointer, viewport);
                    }
                    self.last_header_click = Some((id, now));
                } else {
                    self.last_header_click = None;
                }
                self.pointer_down(wm, pointer, viewport)
            }
            MouseEventKind::Drag(MouseButton::Left) => self.pointer_move(wm, pointer, viewport),
            MouseEventKind::Up(MouseButton::Left) => self.pointer_up(wm),
            _ => false,
        }
    }

    fn is_double_click(&self, id: WindowId, now: Instant, interval: Duration) -> bool {
        self.last_header_click
            .is_some_and(|(prev_id, at)| prev_id == id && now.duration_since(at) <= interval)
    }
}
