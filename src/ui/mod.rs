pub mod flappy_scene;
pub mod game_common;

use flappy::game::Game;
use ratatui::Frame;

/// Draw one frame of the game. Reads the state, never changes it.
pub fn draw(frame: &mut Frame, game: &Game) {
    let area = frame.size();
    flappy_scene::render_flappy(frame, area, game);
}
