use ratatui::style::{Color, Modifier, Style};

// Centralized desktop colors. Named terminal colors only, so the desktop
// reads the same on 16-color terminals.

pub fn desktop_bg() -> Color {
    Color::Cyan
}

// Windows
pub fn window_bg() -> Color {
    Color::Black
}
pub fn window_fg() -> Color {
    Color::White
}
pub fn window_border() -> Color {
    Color::DarkGray
}
pub fn title_focused_bg() -> Color {
    Color::Blue
}
pub fn title_unfocused_bg() -> Color {
    Color::DarkGray
}
pub fn title_fg() -> Color {
    Color::White
}
pub fn close_button_bg() -> Color {
    Color::Red
}

// Snap preview outline
pub fn snap_preview() -> Style {
    Style::default()
        .fg(Color::White)
        .add_modifier(Modifier::BOLD)
}

// Taskbar
pub fn taskbar_bg() -> Color {
    Color::Gray
}
pub fn taskbar_fg() -> Color {
    Color::Black
}
pub fn taskbar_open_fg() -> Color {
    Color::Blue
}
pub fn taskbar_visible_bg() -> Color {
    Color::White
}

pub fn title_style(focused: bool) -> Style {
    let bg = if focused {
        title_focused_bg()
    } else {
        title_unfocused_bg()
    };
    let style = Style::default().bg(bg).fg(title_fg());
    if focused {
        style.add_modifier(Modifier::BOLD)
    } else {
        style
    }
}
