//! The reserved strip at the bottom of the desktop: one button per pinned app.

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::Block;

use crate::theme;
use crate::ui::{UiFrame, truncate_to_width};
use crate::window::TaskbarEntry;

const START_LABEL: &str = concat!("≡ ", env!("CARGO_PKG_NAME"), " ");

#[derive(Debug, Clone, Copy)]
struct TaskbarHit {
    app_id: &'static str,
    rect: Rect,
}

/// Taskbar layout from the last frame, kept for pointer hit testing.
#[derive(Debug, Default)]
pub struct Taskbar {
    area: Rect,
    hits: Vec<TaskbarHit>,
}

impl Taskbar {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn area(&self) -> Rect {
        self.area
    }

    pub fn render(&mut self, frame: &mut UiFrame<'_>, area: Rect, entries: &[TaskbarEntry]) {
        self.area = area;
        self.hits.clear();
        if area.width == 0 || area.height == 0 {
            return;
        }
        let base = Style::default()
            .bg(theme::taskbar_bg())
            .fg(theme::taskbar_fg());
        frame.render_widget(Block::default().style(base), area);

        let y = area.y;
        let max_x = area.x.saturating_add(area.width);
        let mut x = area.x;
        frame.set_string(area, x, y, START_LABEL, base.add_modifier(Modifier::BOLD));
        x = x.saturating_add(START_LABEL.chars().count() as u16);

        for (index, entry) in entries.iter().enumerate() {
            if x >= max_x {
                break;
            }
            let chunk = format!(" {} {} ", index + 1, entry.name);
            let chunk = truncate_to_width(&chunk, max_x.saturating_sub(x) as usize);
            let width = chunk.chars().count() as u16;
            let style = if entry.has_visible_windows {
                base.bg(theme::taskbar_visible_bg())
                    .add_modifier(Modifier::BOLD)
            } else if entry.has_open_windows {
                base.fg(theme::taskbar_open_fg())
                    .add_modifier(Modifier::UNDERLINED)
            } else {
                base
            };
            frame.set_string(area, x, y, &chunk, style);
            self.hits.push(TaskbarHit {
                app_id: entry.app_id,
                rect: Rect::new(x, y, width, 1),
            });
            x = x.saturating_add(width);
        }
    }

    /// App whose button was drawn under the given cell in the last frame.
    pub fn hit_test(&self, column: u16, row: u16) -> Option<&'static str> {
        self.hits
            .iter()
            .find(|hit| {
                column >= hit.rect.x
                    && column < hit.rect.right()
                    && row >= hit.rect.y
                    && row < hit.rect.bottom()
            })
            .map(|hit| hit.app_id)
    }

    pub fn contains(&self, column: u16, row: u16) -> bool {
        column >= self.area.x
            && column < self.area.right()
            && row >= self.area.y
            && row < self.area.bottom()
    }
}
