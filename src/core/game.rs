//! Core interface for terminal games driven by the event loop
use crossterm::event::KeyEvent;
use std::time::Duration;

/// What the loop should do after a key press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Main game trait that all terminal games implement
pub trait Game {
    /// Heartbeat interval; `None` for games that only react to input
    fn tick_rate(&self) -> Option<Duration> {
        None
    }

    /// Called once per tick when `tick_rate` is set
    fn on_tick(&mut self) {}

    /// Update state from a key press
    fn handle_input(&mut self, key: KeyEvent) -> Flow;

    /// Draw the current state into the Ratatui frame
    fn render(&self, frame: &mut ratatui::Frame);
}
