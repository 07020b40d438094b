//! What the terminal host shows inside each kind of window.

use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::widgets::{Paragraph, Wrap};

use crate::registry::ContentRegistry;
use crate::theme;
use crate::ui::UiFrame;
use crate::window::{ContentType, WindowInstance};

/// Draws a window's body. `area` is the window's client area in the frame's
/// coordinates.
pub trait WindowContent {
    fn render(&self, frame: &mut UiFrame<'_>, area: Rect, window: &WindowInstance);
}

impl<T: WindowContent + ?Sized> WindowContent for Box<T> {
    fn render(&self, frame: &mut UiFrame<'_>, area: Rect, window: &WindowInstance) {
        (**self).render(frame, area, window);
    }
}

/// Static wrapped text. Window props are listed underneath as `key: value`.
#[derive(Debug, Clone)]
pub struct TextContent {
    lines: Vec<&'static str>,
}

impl TextContent {
    pub fn new(lines: Vec<&'static str>) -> Self {
        Self { lines }
    }
}

impl WindowContent for TextContent {
    fn render(&self, frame: &mut UiFrame<'_>, area: Rect, window: &WindowInstance) {
        let mut lines: Vec<Line<'_>> = self.lines.iter().map(|l| Line::raw(*l)).collect();
        if !window.props.is_empty() {
            lines.push(Line::raw(""));
            lines.extend(
                window
                    .props
                    .iter()
                    .map(|(key, value)| Line::raw(format!("{key}: {value}"))),
            );
        }
        let style = Style::default().bg(theme::window_bg()).fg(theme::window_fg());
        let paragraph = Paragraph::new(lines)
            .style(style)
            .wrap(Wrap { trim: false });
        frame.render_widget(paragraph, area);
    }
}

fn text_for(content_type: ContentType) -> Vec<&'static str> {
    match content_type {
        ContentType::FileExplorer => vec![
            "Local Disk (C:)",
            "  Documents",
            "  Projects",
            "  Pictures",
        ],
        ContentType::AboutMe => vec![
            "About Me",
            "",
            "Systems programmer. Likes small tools, fast feedback and",
            "windows that stay where they were put.",
        ],
        ContentType::MyProjects => vec![
            "My Projects",
            "",
            "* snap-desk: a snapping window manager for the terminal",
            "* layout persistence across sessions",
        ],
        ContentType::Resume => vec!["Resume", "", "Experience", "Education", "Skills"],
        ContentType::Contact => vec!["Contact", "", "Open an issue on the project tracker."],
        ContentType::Terminal => vec!["$ echo hello", "hello", "$ _"],
        ContentType::Browser => vec!["Pages open in your system browser."],
        ContentType::Settings => vec!["Settings", "", "Snap threshold and corner size", "are set on the command line."],
        ContentType::Notepad => vec![""],
        ContentType::Calculator => vec!["0"],
    }
}

/// A text pane for every content type.
pub fn default_registry() -> ContentRegistry<Box<dyn WindowContent>> {
    ContentType::ALL
        .into_iter()
        .fold(ContentRegistry::new(), |registry, content_type| {
            registry.with(
                content_type,
                Box::new(TextContent::new(text_for(content_type))) as Box<dyn WindowContent>,
            )
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{Position, Size};
    use crate::window::{WindowId, WindowLayout};
    use ratatui::buffer::Buffer;
    use std::collections::BTreeMap;

    fn window(props: BTreeMap<String, String>) -> WindowInstance {
        WindowInstance {
            id: WindowId(1),
            content_type: ContentType::FileExplorer,
            title: "This PC".into(),
            props,
            minimized: false,
            minimizable: true,
            maximizable: true,
            fallback_size: Size::new(40, 10),
            layout: WindowLayout::new(Position::new(0, 0), Size::new(40, 10)),
        }
    }

    #[test]
    fn every_content_type_has_a_handler() {
        let registry = default_registry();
        for ct in ContentType::ALL {
            assert!(registry.contains(ct), "{ct} missing");
        }
    }

    #[test]
    fn text_content_lists_props() {
        let area = Rect::new(0, 0, 30, 8);
        let mut buffer = Buffer::empty(area);
        let mut frame = UiFrame::from_parts(area, &mut buffer);
        let props = BTreeMap::from([("initialPath".to_string(), "This PC".to_string())]);
        TextContent::new(vec!["hello"]).render(&mut frame, area, &window(props));
        let row = |y: u16| -> String {
            (0..area.width)
                .map(|x| buffer.cell((x, y)).unwrap().symbol().to_string())
                .collect()
        };
        assert!(row(0).starts_with("hello"));
        assert!(row(2).starts_with("initialPath: This PC"));
    }
}
