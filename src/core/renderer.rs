//! Renderer trait, keeps drawing code out of game logic
use ratatui::Frame;

pub trait GameRenderer<State> {
    /// Draw `state` over the whole frame
    fn render(frame: &mut Frame, state: &State);
}
