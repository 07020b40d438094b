use std::time::{Duration, Instant};

use clap::Parser;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEventKind};
use ratatui::layout::Rect;

use snap_desk::config::Args;
use snap_desk::content::{WindowContent, default_registry};
use snap_desk::drivers::OutputDriver;
use snap_desk::drivers::console::{ConsoleInputDriver, ConsoleOutputDriver};
use snap_desk::error::Result;
use snap_desk::event_loop::{ControlFlow, EventLoop};
use snap_desk::interaction::InteractionController;
use snap_desk::layout::{SnapZone, bounds_for_zone};
use snap_desk::registry::AppCatalog;
use snap_desk::storage::{FileStore, KeyValueStore, MemoryStore};
use snap_desk::taskbar::Taskbar;
use snap_desk::tracing_sub;
use snap_desk::ui::{self, UiFrame};
use snap_desk::window::{LaunchOutcome, LayoutStore, WindowManager};

fn main() -> Result<()> {
    let args = Args::parse();
    tracing_sub::init(args.log_file.as_deref(), args.debug)?;

    let store: Box<dyn KeyValueStore> = match args.store_path() {
        Some(path) => {
            tracing::info!(path = %path.display(), "persisting window layouts");
            Box::new(FileStore::open_or_reset(path)?)
        }
        None => Box::new(MemoryStore::new()),
    };
    let wm = WindowManager::new(default_registry(), LayoutStore::new(store, args.metrics()));
    let mut desktop = Desktop::new(wm);

    let mut output = ConsoleOutputDriver::new()?;
    output.enter()?;
    desktop.area = output.size()?;
    let mut event_loop = EventLoop::new(ConsoleInputDriver::new(), Duration::from_millis(16));
    let result = event_loop.run(|_, event| match event {
        None => {
            output.draw(|mut frame| desktop.render(&mut frame))?;
            Ok(ControlFlow::Continue)
        }
        Some(event) => Ok(desktop.handle_event(&event)),
    });
    output.exit()?;
    result?;
    Ok(())
}

struct Desktop {
    wm: WindowManager<Box<dyn WindowContent>>,
    controller: InteractionController,
    taskbar: Taskbar,
    catalog: AppCatalog,
    area: Rect,
}

impl Desktop {
    fn new(wm: WindowManager<Box<dyn WindowContent>>) -> Self {
        Self {
            wm,
            controller: InteractionController::new(),
            taskbar: Taskbar::new(),
            catalog: AppCatalog::desktop_defaults(),
            area: Rect::default(),
        }
    }

    fn render(&mut self, frame: &mut UiFrame<'_>) {
        self.area = frame.area();
        ui::render_desktop(
            frame,
            &self.wm,
            &self.controller,
            &mut self.taskbar,
            &self.catalog,
        );
    }

    fn handle_event(&mut self, event: &Event) -> ControlFlow {
        let viewport = ui::viewport_for(self.area, self.wm.metrics());
        match event {
            Event::Key(key) => return self.handle_key(key),
            Event::Mouse(mouse) => {
                if let MouseEventKind::Down(MouseButton::Left) = mouse.kind
                    && self.taskbar.contains(mouse.column, mouse.row)
                {
                    if let Some(app_id) = self.taskbar.hit_test(mouse.column, mouse.row) {
                        self.launch(app_id);
                    }
                } else {
                    self.controller
                        .handle_mouse(&mut self.wm, mouse, Instant::now(), viewport);
                }
            }
            Event::Resize(width, height) => {
                self.area = Rect::new(0, 0, *width, *height);
            }
            _ => {}
        }
        ControlFlow::Continue
    }

    fn handle_key(&mut self, key: &KeyEvent) -> ControlFlow {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        let viewport = ui::viewport_for(self.area, self.wm.metrics());
        let focused = self.wm.focused();
        match key.code {
            KeyCode::Char('q') => return ControlFlow::Quit,
            KeyCode::Char(c @ '1'..='9') => {
                let index = (c as usize) - ('1' as usize);
                let app_id = self.catalog.pinned().nth(index).map(|app| app.id);
                if let Some(app_id) = app_id {
                    self.launch(app_id);
                }
            }
            KeyCode::Char('p') => self.launch("this-pc"),
            KeyCode::Char('b') => self.launch("chrome"),
            KeyCode::Tab => self.cycle_focus(),
            KeyCode::Char(c @ ('m' | 'x' | 'w')) => {
                let Some(id) = focused else {
                    return ControlFlow::Continue;
                };
                match c {
                    'm' => self.wm.minimize_window(id),
                    'x' => self.wm.toggle_maximize(id),
                    _ => self.wm.close_window(id),
                }
            }
            KeyCode::Left | KeyCode::Right | KeyCode::Up if ctrl => {
                let zone = match key.code {
                    KeyCode::Left => SnapZone::Left,
                    KeyCode::Right => SnapZone::Right,
                    _ => SnapZone::Maximize,
                };
                if let (Some(id), Some(bounds)) = (focused, bounds_for_zone(zone, viewport)) {
                    self.wm.apply_snap(id, zone, bounds);
                }
            }
            _ => {}
        }
        ControlFlow::Continue
    }

    fn launch(&mut self, app_id: &str) {
        if let LaunchOutcome::External(href) = self.wm.launch_app(&self.catalog, app_id)
            && let Err(err) = webbrowser::open(href)
        {
            tracing::warn!(href = %href, error = %err, "failed to open browser");
        }
    }

    /// Focus the next open window after the focused one, restoring it if it
    /// was minimized.
    fn cycle_focus(&mut self) {
        let windows = self.wm.windows();
        if windows.is_empty() {
            return;
        }
        let next = match self.wm.focused() {
            Some(id) => windows
                .iter()
                .position(|w| w.id == id)
                .map_or(0, |i| (i + 1) % windows.len()),
            None => 0,
        };
        let id = windows[next].id;
        self.wm.focus_window(id);
    }
}
