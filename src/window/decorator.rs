use crate::config::Metrics;
use crate::layout::{Bounds, Position};

/// What a pointer press on a window's chrome should do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderAction {
    Minimize,
    Maximize,
    Close,
    Drag,
    None,
}

/// Which controls a title bar shows. Controls are right-aligned in the order
/// minimize, maximize, close.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TitleBar {
    pub minimizable: bool,
    pub maximizable: bool,
}

impl TitleBar {
    pub fn title_rect(window: Bounds, metrics: &Metrics) -> Bounds {
        Bounds::new(
            window.x,
            window.y,
            window.width,
            metrics.title_bar_height.min(window.height),
        )
    }

    /// Button rects from right to left, paired with their actions.
    pub fn buttons(&self, window: Bounds, metrics: &Metrics) -> Vec<(HeaderAction, Bounds)> {
        let bar = Self::title_rect(window, metrics);
        let mut actions = vec![HeaderAction::Close];
        if self.maximizable {
            actions.push(HeaderAction::Maximize);
        }
        if self.minimizable {
            actions.push(HeaderAction::Minimize);
        }
        let mut right = bar.right();
        actions
            .into_iter()
            .map(|action| {
                let x = (right - metrics.button_width).max(bar.x);
                let rect = Bounds::new(x, bar.y, right - x, bar.height);
                right = x;
                (action, rect)
            })
            .collect()
    }

    pub fn hit_test(&self, window: Bounds, point: Position, metrics: &Metrics) -> HeaderAction {
        let bar = Self::title_rect(window, metrics);
        if !bar.contains(point) {
            return HeaderAction::None;
        }
        self.buttons(window, metrics)
            .into_iter()
            .find(|(_, rect)| rect.contains(point))
            .map(|(action, _)| action)
            .unwrap_or(HeaderAction::Drag)
    }
}
