use crate::core::game::{Flow, Game};
use anyhow::Result;
use crossterm::event::{Event, EventStream, KeyEventKind};
use futures_util::StreamExt;
use ratatui::DefaultTerminal;
use std::time::Duration;
use tracing::debug;

/// Idle redraw interval for games without ticks
const IDLE_REDRAW: Duration = Duration::from_millis(250);

pub struct Engine<G: Game> {
    game: G,
}

impl<G: Game> Engine<G> {
    pub fn new(game: G) -> Self {
        Self { game }
    }

    /// Runs until the game asks to quit or the input stream ends.
    /// The terminal is restored by the caller.
    pub async fn run(mut self, mut terminal: DefaultTerminal) -> Result<G> {
        let mut events = EventStream::new();
        let mut ticker = tokio::time::interval(self.game.tick_rate().unwrap_or(IDLE_REDRAW));

        loop {
            terminal.draw(|f| self.game.render(f))?;

            tokio::select! {
                maybe_event = events.next() => {
                    match maybe_event {
                        Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                            if self.game.handle_input(key) == Flow::Quit {
                                debug!("game requested quit");
                                break;
                            }
                        }
                        Some(Ok(_)) => {}
                        Some(Err(e)) => return Err(e.into()),
                        None => break,
                    }
                }

                _ = ticker.tick() => {
                    if self.game.tick_rate().is_some() {
                        self.game.on_tick();
                    }
                }
            }
        }

        Ok(self.game)
    }
}
