use std::io;
use std::time::Duration;

use crossterm::event::Event;

use crate::drivers::InputDriver;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlFlow {
    Continue,
    Quit,
}

/// Single-threaded loop driving the host.
///
/// Each iteration first runs `frame` (commit pending state, draw), then waits
/// up to `poll_interval` for input and hands every queued event to `handle`.
/// An event is processed to completion, including any focus movement it
/// causes, before the next one is read.
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

    pub fn run<FFrame, FEvent>(&mut self, mut frame: FFrame, mut handle: FEvent) -> io::Result<()>
    where
        FFrame: FnMut() -> io::Result<()>,
        FEvent: FnMut(Event) -> io::Result<ControlFlow>,
    {
        loop {
            frame()?;
            if !self.driver.poll(self.poll_interval)? {
                continue;
            }
            // Drain what is already queued so a burst of keys does not wait a
            // redraw per key.
            loop {
                let event = self.driver.read()?;
                if handle(event)? == ControlFlow::Quit {
                    return Ok(());
                }
                if !self.driver.poll(Duration::ZERO)? {
                    break;
                }
            }
        }
    }
}
