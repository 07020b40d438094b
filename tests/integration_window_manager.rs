use crossterm::event::{KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use std::time::Instant;

use snap_desk::config::Metrics;
use snap_desk::interaction::InteractionController;
use snap_desk::layout::{Bounds, Position, Size, SnapZone, Viewport, bounds_for_zone};
use snap_desk::registry::ContentRegistry;
use snap_desk::storage::MemoryStore;
use snap_desk::window::{ContentType, LayoutStore, WindowLayout, WindowManager, WindowSpec, ZBand};

fn hd() -> Viewport {
    Viewport::new(1920, 1080, 48)
}

fn manager() -> WindowManager<()> {
    WindowManager::new(
        ContentRegistry::new(),
        LayoutStore::new(MemoryStore::new(), Metrics::default()),
    )
}

fn floating(x: i32, y: i32) -> WindowLayout {
    WindowLayout::new(Position::new(x, y), Size::new(480, 300))
}

#[test]
fn closing_the_focused_window_leaves_nothing_focused() {
    let mut wm = manager();
    let a = wm.open_window(WindowSpec::new(ContentType::Resume, "Resume"));
    assert_eq!(wm.focused(), Some(a));
    let b = wm.open_window(WindowSpec::new(ContentType::Resume, "Resume"));
    assert_eq!(wm.focused(), Some(b));
    assert_eq!(wm.z_band(a), Some(ZBand::Unfocused));
    wm.close_window(b);
    assert_eq!(wm.focused(), None);
    assert_eq!(wm.z_band(a), Some(ZBand::Unfocused));
}

#[test]
fn focus_stays_exclusive_and_never_on_a_minimized_window() {
    let mut wm = manager();
    let a = wm.open_window(WindowSpec::new(ContentType::Resume, "Resume"));
    let b = wm.open_window(WindowSpec::new(ContentType::Contact, "Contact"));
    let c = wm.open_window(WindowSpec::new(ContentType::Notepad, "Notes"));

    let check = |wm: &WindowManager<()>| {
        let focused: Vec<_> = wm
            .windows()
            .iter()
            .filter(|w| wm.z_band(w.id) == Some(ZBand::Focused))
            .collect();
        assert!(focused.len() <= 1);
        if let Some(id) = wm.focused() {
            assert!(!wm.window(id).unwrap().minimized);
        }
    };

    wm.focus_window(a);
    check(&wm);
    wm.minimize_window(a);
    check(&wm);
    wm.minimize_window(b);
    check(&wm);
    wm.focus_window(b);
    check(&wm);
    wm.close_window(c);
    check(&wm);
    wm.minimize_window(b);
    check(&wm);
    assert_eq!(wm.focused(), None);
    wm.restore_window(a);
    check(&wm);
    assert_eq!(wm.focused(), Some(a));
}

#[test]
fn double_maximize_toggle_restores_the_layout() {
    let mut wm = manager();
    let id = wm.open_window(WindowSpec::new(ContentType::Resume, "Resume").with_initial(floating(100, 50)));
    let initial = wm.window(id).unwrap().layout;
    wm.toggle_maximize(id);
    assert_eq!(
        wm.effective_bounds(id, hd()),
        Some(Bounds::new(0, 0, 1920, 1032))
    );
    wm.toggle_maximize(id);
    assert_eq!(wm.window(id).unwrap().layout, initial);
}

#[test]
fn applying_the_same_snap_twice_is_a_no_op() {
    let mut wm = manager();
    let id = wm.open_window(WindowSpec::new(ContentType::Resume, "Resume"));
    let bounds = bounds_for_zone(SnapZone::BottomRight, hd()).unwrap();
    wm.apply_snap(id, SnapZone::BottomRight, bounds);
    let once = wm.window(id).unwrap().layout;
    wm.apply_snap(id, SnapZone::BottomRight, bounds);
    assert_eq!(wm.window(id).unwrap().layout, once);
    assert_eq!(once.position, Position::new(960, 516));
    assert_eq!(once.size, Size::new(960, 516));
}

#[test]
fn moving_above_the_top_edge_clamps_to_zero() {
    let mut wm = manager();
    let id = wm.open_window(WindowSpec::new(ContentType::Resume, "Resume"));
    for y in [-1, -50, i32::MIN / 2] {
        wm.move_window(id, 30, y);
        assert_eq!(wm.window(id).unwrap().layout.position, Position::new(30, 0));
    }
}

#[test]
fn two_managers_are_independent() {
    let mut first = manager();
    let mut second = manager();
    let a = first.open_window(WindowSpec::new(ContentType::Resume, "Resume"));
    let b = second.open_window(WindowSpec::new(ContentType::Resume, "Resume"));
    first.move_window(a, 700, 300);
    assert_eq!(second.window(b).unwrap().layout.position, Position::new(100, 50));
    second.close_window(b);
    assert!(first.window(a).is_some());
}

fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
    MouseEvent {
        kind,
        column,
        row,
        modifiers: KeyModifiers::NONE,
    }
}

#[test]
fn dragging_into_the_top_right_corner_on_a_terminal() {
    let metrics = Metrics::terminal();
    let mut wm: WindowManager<()> = WindowManager::new(
        ContentRegistry::new(),
        LayoutStore::new(MemoryStore::new(), metrics),
    );
    let vp = Viewport::new(80, 24, 1);
    let id = wm.open_window(
        WindowSpec::new(ContentType::Terminal, "Terminal")
            .with_initial(WindowLayout::new(Position::new(10, 5), Size::new(30, 10))),
    );
    let mut ctl = InteractionController::new();
    let now = Instant::now();

    ctl.handle_mouse(&mut wm, &mouse(MouseEventKind::Down(MouseButton::Left), 15, 5), now, vp);
    assert_eq!(ctl.dragging(), Some(id));
    ctl.handle_mouse(&mut wm, &mouse(MouseEventKind::Drag(MouseButton::Left), 40, 9), now, vp);
    assert_eq!(wm.window(id).unwrap().layout.position, Position::new(35, 9));
    assert!(ctl.snap_preview().is_none());
    ctl.handle_mouse(&mut wm, &mouse(MouseEventKind::Drag(MouseButton::Left), 79, 0), now, vp);
    assert_eq!(ctl.snap_preview().map(|p| p.zone), Some(SnapZone::TopRight));
    ctl.handle_mouse(&mut wm, &mouse(MouseEventKind::Up(MouseButton::Left), 79, 0), now, vp);

    let layout = wm.window(id).unwrap().layout;
    assert_eq!(layout.snap_zone, Some(SnapZone::TopRight));
    assert_eq!(layout.position, Position::new(40, 0));
    assert_eq!(layout.size, Size::new(40, 11));
    assert_eq!(ctl.dragging(), None);
}
