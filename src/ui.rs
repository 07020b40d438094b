//! Desktop compositing on top of ratatui.
//!
//! `UiFrame` wraps a `ratatui::Frame` (or a bare buffer) and clips every draw
//! call to its area, so window rectangles that hang off the screen never write
//! out of bounds. Windows are painted into an offscreen buffer at their full
//! size and then blitted at their signed position, which keeps chrome and
//! content intact when a window is only partly visible.

use ratatui::Frame;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, Widget};

use crate::config::Metrics;
use crate::content::WindowContent;
use crate::interaction::{InteractionController, SnapPreview};
use crate::layout::{Bounds, Viewport};
use crate::registry::AppCatalog;
use crate::taskbar::Taskbar;
use crate::theme;
use crate::window::decorator::{HeaderAction, TitleBar};
use crate::window::{WindowDraw, WindowManager};

/// Largest offscreen window buffer, per dimension.
const MAX_OFFSCREEN: i32 = 1024;

pub struct UiFrame<'a> {
    area: Rect,
    buffer: &'a mut Buffer,
}

impl<'a> UiFrame<'a> {
    pub fn new(frame: &'a mut Frame<'_>) -> Self {
        let area = frame.area();
        let buffer = frame.buffer_mut();
        Self { area, buffer }
    }

    /// Draw into a bare buffer, used for offscreen window painting.
    pub fn from_parts(area: Rect, buffer: &'a mut Buffer) -> Self {
        Self { area, buffer }
    }

    pub fn area(&self) -> Rect {
        self.area
    }

    pub fn buffer_mut(&mut self) -> &mut Buffer {
        self.buffer
    }

    fn clip_rect(&self, rect: Rect) -> Option<Rect> {
        let clipped = rect.intersection(self.area);
        if clipped.width == 0 || clipped.height == 0 {
            None
        } else {
            Some(clipped)
        }
    }

    pub fn render_widget<W>(&mut self, widget: W, area: Rect)
    where
        W: Widget,
    {
        if let Some(clipped) = self.clip_rect(area) {
            widget.render(clipped, self.buffer);
        }
    }

    pub fn set_string(&mut self, bounds: Rect, x: u16, y: u16, text: &str, style: Style) {
        if let Some(bounds) = self.clip_rect(bounds) {
            safe_set_string(self.buffer, bounds, x, y, text, style);
        }
    }

    /// Copy `src` (anchored at its own origin) so that its top-left lands at
    /// `dest`'s signed origin. Cells outside this frame are dropped.
    pub fn blit_from_signed(&mut self, src: &Buffer, dest: Bounds) {
        let frame_x0 = i32::from(self.area.x);
        let frame_y0 = i32::from(self.area.y);
        let frame_x1 = frame_x0 + i32::from(self.area.width);
        let frame_y1 = frame_y0 + i32::from(self.area.height);
        let src_x0 = i32::from(src.area.x);
        let src_y0 = i32::from(src.area.y);
        for sy in 0..dest.height.min(i32::from(src.area.height)) {
            let dy = dest.y + sy;
            if dy < frame_y0 || dy >= frame_y1 {
                continue;
            }
            for sx in 0..dest.width.min(i32::from(src.area.width)) {
                let dx = dest.x + sx;
                if dx < frame_x0 || dx >= frame_x1 {
                    continue;
                }
                if let (Some(src_cell), Some(dst_cell)) = (
                    src.cell(((src_x0 + sx) as u16, (src_y0 + sy) as u16)),
                    self.buffer.cell_mut((dx as u16, dy as u16)),
                ) {
                    *dst_cell = src_cell.clone();
                }
            }
        }
    }
}

pub(crate) fn safe_set_string(
    buffer: &mut Buffer,
    bounds: Rect,
    x: u16,
    y: u16,
    text: &str,
    style: Style,
) {
    if bounds.width == 0 || bounds.height == 0 {
        return;
    }
    let max_x = bounds.x.saturating_add(bounds.width);
    let max_y = bounds.y.saturating_add(bounds.height);
    if x < bounds.x || x >= max_x || y < bounds.y || y >= max_y {
        return;
    }
    let available = max_x.saturating_sub(x);
    if available == 0 {
        return;
    }
    let text = truncate_to_width(text, available as usize);
    buffer.set_string(x, y, text, style);
}

pub(crate) fn truncate_to_width(value: &str, width: usize) -> String {
    if value.chars().count() <= width {
        return value.to_string();
    }
    value.chars().take(width).collect()
}

/// Viewport of a terminal area, with the bottom rows reserved for the
/// taskbar.
pub fn viewport_for(area: Rect, metrics: &Metrics) -> Viewport {
    Viewport::new(
        i32::from(area.width),
        i32::from(area.height),
        metrics.reserved_strip.min(i32::from(area.height)),
    )
}

/// Draw the whole desktop: background, windows back to front, the snap
/// preview of an active drag, then the taskbar.
pub fn render_desktop<H: WindowContent>(
    frame: &mut UiFrame<'_>,
    wm: &WindowManager<H>,
    controller: &InteractionController,
    taskbar: &mut Taskbar,
    catalog: &AppCatalog,
) {
    let area = frame.area();
    let metrics = wm.metrics();
    let viewport = viewport_for(area, metrics);
    let usable = u16::try_from(viewport.usable_height()).unwrap_or(area.height);
    let desktop = Rect {
        height: usable,
        ..area
    };
    let strip = Rect {
        y: area.y.saturating_add(usable),
        height: area.height.saturating_sub(usable),
        ..area
    };

    frame.render_widget(
        Block::default().style(Style::default().bg(theme::desktop_bg())),
        desktop,
    );
    for draw in wm.window_draw_plan(viewport) {
        render_window(frame, &draw, metrics);
    }
    if let Some(preview) = controller.snap_preview() {
        render_snap_preview(frame, preview);
    }
    taskbar.render(frame, strip, &wm.taskbar_entries(catalog));
}

fn offscreen_extent(len: i32) -> u16 {
    len.clamp(0, MAX_OFFSCREEN) as u16
}

fn render_window<H: WindowContent>(
    frame: &mut UiFrame<'_>,
    draw: &WindowDraw<'_, H>,
    metrics: &Metrics,
) {
    let bounds = draw.bounds;
    if bounds.visible_in(frame.area()).is_none() {
        return;
    }
    let local_area = Rect::new(0, 0, offscreen_extent(bounds.width), offscreen_extent(bounds.height));
    if local_area.is_empty() {
        return;
    }
    let mut buffer = Buffer::empty(local_area);
    paint_window(&mut UiFrame::from_parts(local_area, &mut buffer), draw, metrics);
    frame.blit_from_signed(
        &buffer,
        Bounds::new(
            bounds.x,
            bounds.y,
            i32::from(local_area.width),
            i32::from(local_area.height),
        ),
    );
}

/// Paint chrome and content at the origin of `frame`.
fn paint_window<H: WindowContent>(
    frame: &mut UiFrame<'_>,
    draw: &WindowDraw<'_, H>,
    metrics: &Metrics,
) {
    let area = frame.area();
    let window = draw.window;
    let local = Bounds::from(area);
    let body_style = Style::default().bg(theme::window_bg()).fg(theme::window_fg());
    frame.render_widget(Block::default().style(body_style), area);

    let title_bar = TitleBar {
        minimizable: window.minimizable,
        maximizable: window.maximizable,
    };
    let Some(bar) = TitleBar::title_rect(local, metrics).visible_in(area) else {
        return;
    };

    let body = Rect {
        y: bar.bottom(),
        height: area.height.saturating_sub(bar.height),
        ..area
    };
    let block = Block::default()
        .borders(Borders::LEFT | Borders::RIGHT | Borders::BOTTOM)
        .border_style(Style::default().fg(theme::window_border()))
        .style(body_style);
    let inner = block.inner(body);
    frame.render_widget(block, body);
    if let Some(handler) = draw.handler {
        handler.render(frame, inner, window);
    }

    let title_style = theme::title_style(draw.focused);
    frame.render_widget(Block::default().style(title_style), bar);
    let buttons = title_bar.buttons(local, metrics);
    let controls_x = buttons
        .last()
        .and_then(|(_, rect)| u16::try_from(rect.x).ok())
        .unwrap_or(bar.right());
    let title_area = Rect {
        width: controls_x.saturating_sub(bar.x),
        ..bar
    };
    frame.set_string(title_area, bar.x.saturating_add(1), bar.y, &window.title, title_style);

    for (action, rect) in buttons {
        let Some(rect) = rect.visible_in(area) else {
            continue;
        };
        let (label, style) = match action {
            HeaderAction::Minimize => ("_", title_style),
            HeaderAction::Maximize if window.layout.is_maximized => ("❐", title_style),
            HeaderAction::Maximize => ("□", title_style),
            HeaderAction::Close => (
                "×",
                title_style
                    .bg(theme::close_button_bg())
                    .remove_modifier(Modifier::BOLD),
            ),
            HeaderAction::Drag | HeaderAction::None => continue,
        };
        frame.render_widget(Block::default().style(style), rect);
        let x = rect.x.saturating_add(rect.width.saturating_sub(1) / 2);
        frame.set_string(rect, x, rect.y, label, style);
    }
}

fn render_snap_preview(frame: &mut UiFrame<'_>, preview: SnapPreview) {
    let Some(rect) = preview.bounds.visible_in(frame.area()) else {
        return;
    };
    let outline = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Double)
        .border_style(theme::snap_preview());
    frame.render_widget(outline, rect);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::TextContent;
    use crate::layout::{Position, Size};
    use crate::registry::ContentRegistry;
    use crate::storage::MemoryStore;
    use crate::window::{ContentType, LayoutStore, WindowLayout, WindowSpec};

    fn row(buffer: &Buffer, y: u16) -> String {
        (0..buffer.area.width)
            .map(|x| buffer.cell((x, y)).unwrap().symbol().to_string())
            .collect()
    }

    fn desktop() -> WindowManager<TextContent> {
        let registry = ContentRegistry::new()
            .with(ContentType::Resume, TextContent::new(vec!["resume body"]))
            .with(ContentType::Contact, TextContent::new(vec!["contact body"]));
        WindowManager::new(registry, LayoutStore::new(MemoryStore::new(), Metrics::terminal()))
    }

    #[test]
    fn blit_from_signed_clips_negative_offsets() {
        let frame_area = Rect::new(0, 0, 4, 2);
        let mut dest = Buffer::empty(frame_area);
        let mut frame = UiFrame::from_parts(frame_area, &mut dest);
        let src_area = Rect::new(0, 0, 3, 2);
        let mut src = Buffer::empty(src_area);
        for y in 0..src_area.height {
            for x in 0..src_area.width {
                if let Some(cell) = src.cell_mut((x, y)) {
                    cell.set_symbol("#");
                }
            }
        }
        frame.blit_from_signed(&src, Bounds::new(-1, 0, 3, 2));
        assert_eq!(dest.cell((0, 0)).unwrap().symbol(), "#");
        assert_eq!(dest.cell((1, 0)).unwrap().symbol(), "#");
        assert_eq!(dest.cell((2, 0)).unwrap().symbol(), " ");
    }

    #[test]
    fn safe_set_string_truncates_at_bounds() {
        let bounds = Rect::new(0, 0, 4, 1);
        let mut buf = Buffer::empty(bounds);
        safe_set_string(&mut buf, bounds, 1, 0, "hello", Style::default());
        assert_eq!(row(&buf, 0), " hel");
        safe_set_string(&mut buf, bounds, 100, 0, "x", Style::default());
    }

    #[test]
    fn viewport_reserves_taskbar_rows() {
        let vp = viewport_for(Rect::new(0, 0, 80, 24), &Metrics::terminal());
        assert_eq!(vp, Viewport::new(80, 24, 1));
        assert_eq!(vp.usable_height(), 23);
    }

    #[test]
    fn focused_window_is_drawn_on_top() {
        let mut wm = desktop();
        let layout = WindowLayout::new(Position::new(2, 1), Size::new(30, 8));
        let a = wm.open_window(WindowSpec::new(ContentType::Resume, "Resume").with_initial(layout));
        wm.open_window(WindowSpec::new(ContentType::Contact, "Contact").with_initial(layout));
        let catalog = AppCatalog::desktop_defaults();
        let mut taskbar = Taskbar::new();
        let controller = InteractionController::new();

        let area = Rect::new(0, 0, 80, 20);
        let mut buffer = Buffer::empty(area);
        render_desktop(
            &mut UiFrame::from_parts(area, &mut buffer),
            &wm,
            &controller,
            &mut taskbar,
            &catalog,
        );
        assert!(row(&buffer, 1).contains("Contact"));
        assert!(row(&buffer, 2).contains("contact body"));

        wm.focus_window(a);
        let mut buffer = Buffer::empty(area);
        render_desktop(
            &mut UiFrame::from_parts(area, &mut buffer),
            &wm,
            &controller,
            &mut taskbar,
            &catalog,
        );
        assert!(row(&buffer, 1).contains("Resume"));
        assert!(row(&buffer, 2).contains("resume body"));
        // Close control sits at the right edge of the title bar.
        assert_eq!(buffer.cell((30, 1)).unwrap().symbol(), "×");
        assert!(row(&buffer, 19).contains("Resume"));
    }

    #[test]
    fn partially_offscreen_window_keeps_its_content() {
        let mut wm = desktop();
        wm.open_window(
            WindowSpec::new(ContentType::Resume, "Resume")
                .with_initial(WindowLayout::new(Position::new(-3, 0), Size::new(30, 8))),
        );
        let area = Rect::new(0, 0, 40, 12);
        let mut buffer = Buffer::empty(area);
        render_desktop(
            &mut UiFrame::from_parts(area, &mut buffer),
            &wm,
            &InteractionController::new(),
            &mut Taskbar::new(),
            &AppCatalog::desktop_defaults(),
        );
        // Border column and the first two text cells are off screen.
        assert!(row(&buffer, 1).starts_with("sume body"));
    }

    #[test]
    fn maximized_window_fills_the_desktop() {
        let mut wm = desktop();
        let id = wm.open_window(WindowSpec::new(ContentType::Resume, "Resume"));
        wm.toggle_maximize(id);
        let area = Rect::new(0, 0, 40, 12);
        let mut buffer = Buffer::empty(area);
        render_desktop(
            &mut UiFrame::from_parts(area, &mut buffer),
            &wm,
            &InteractionController::new(),
            &mut Taskbar::new(),
            &AppCatalog::desktop_defaults(),
        );
        assert!(row(&buffer, 0).starts_with(" Resume"));
        assert_eq!(buffer.cell((38, 0)).unwrap().symbol(), "×");
        assert_eq!(buffer.cell((35, 0)).unwrap().symbol(), "❐");
    }
}
