use std::io;
use std::time::Duration;

use crossterm::event::Event;

use crate::drivers::InputDriver;

pub enum ControlFlow {
    Continue,
    Quit,
}

/// Message pump for the desktop.
///
/// The loop is the only caller of `poll`/`read` on the driver. The handler is
/// called with `None` once per iteration (the host redraws then) and with
/// `Some(event)` for each input event. Queued events are drained before the
/// next redraw so a burst of drag motion does not lag behind the pointer.
pub struct EventLoop<D> {
    driver: D,
    poll_interval: Duration,
}

impl<D: InputDriver> EventLoop<D> {
    pub fn new(driver: D, poll_interval: Duration) -> Self {
        Self {
            driver,
            poll_interval,
        }
    }

    pub fn driver(&mut self) -> &mut D {
        &mut self.driver
    }

    pub fn run<F>(&mut self, mut handler: F) -> io::Result<()>
    where
        F: FnMut(&mut D, Option<Event>) -> io::Result<ControlFlow>,
    {
        loop {
            if let ControlFlow::Quit = handler(&mut self.driver, None)? {
                break;
            }

            if self.driver.poll(self.poll_interval)? {
                loop {
                    let event = self.driver.read()?;
                    if let ControlFlow::Quit = handler(&mut self.driver, Some(event))? {
                        return Ok(());
                    }
                    if !self.driver.poll(Duration::from_millis(0))? {
                        break;
                    }
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use std::collections::VecDeque;

    struct Scripted {
        events: VecDeque<Event>,
    }

    impl InputDriver for Scripted {
        fn poll(&mut self, _timeout: Duration) -> io::Result<bool> {
            Ok(!self.events.is_empty())
        }

        fn read(&mut self) -> io::Result<Event> {
            self.events
                .pop_front()
                .ok_or_else(|| io::Error::other("no more events"))
        }
    }

    fn key(c: char) -> Event {
        Event::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE))
    }

    #[test]
    fn burst_is_drained_before_next_tick() {
        let driver = Scripted {
            events: VecDeque::from([key('a'), key('b'), key('q')]),
        };
        let mut event_loop = EventLoop::new(driver, Duration::from_millis(0));
        let mut seen = Vec::new();
        event_loop
            .run(|_, event| {
                seen.push(event.clone());
                Ok(match event {
                    Some(Event::Key(k)) if k.code == KeyCode::Char('q') => ControlFlow::Quit,
                    _ => ControlFlow::Continue,
                })
            })
            .unwrap();
        assert_eq!(seen, vec![None, Some(key('a')), Some(key('b')), Some(key('q'))]);
    }

    #[test]
    fn tick_can_quit() {
        let driver = Scripted {
            events: VecDeque::from([key('a')]),
        };
        let mut event_loop = EventLoop::new(driver, Duration::from_millis(0));
        let mut ticks = 0;
        event_loop
            .run(|_, _| {
                ticks += 1;
                Ok(ControlFlow::Quit)
            })
            .unwrap();
        assert_eq!(ticks, 1);
        assert_eq!(event_loop.driver().events.len(), 1);
    }
}
