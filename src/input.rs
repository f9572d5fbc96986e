//! Maps terminal events to game input.
//!
//! Terminals report key presses (and on some platforms repeats and
//! releases). Only the initial press counts, so holding Space produces one
//! flap rather than a stream of them.

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

/// UI-agnostic input actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameInput {
    /// Space, Up, Enter, W, K or a left click.
    Flap,
    /// Q, Esc or Ctrl-C.
    Quit,
    /// Anything else.
    Other,
}

pub fn map_key(key: KeyEvent) -> GameInput {
    if key.kind != KeyEventKind::Press {
        return GameInput::Other;
    }
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => GameInput::Quit,
        KeyCode::Char(' ') | KeyCode::Up | KeyCode::Enter => GameInput::Flap,
        KeyCode::Char('w') | KeyCode::Char('W') | KeyCode::Char('k') | KeyCode::Char('K') => {
            GameInput::Flap
        }
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => GameInput::Quit,
        _ => GameInput::Other,
    }
}

pub fn map_mouse(mouse: MouseEvent) -> GameInput {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => GameInput::Flap,
        _ => GameInput::Other,
    }
}

pub fn map_event(event: Event) -> GameInput {
    match event {
        Event::Key(key) => map_key(key),
        Event::Mouse(mouse) => map_mouse(mouse),
        _ => GameInput::Other,
    }
}
