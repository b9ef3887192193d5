use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Canonical movement headings for the snake.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Returns the opposite heading.
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }
}

/// High-level input events consumed by the game loop.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameInput {
    Direction(Direction),
    Restart,
    Quit,
}

/// Translates terminal key events into game inputs.
///
/// Holds no game data; the reversal rule lives in the state machine, which
/// is free to ignore any direction request this mapper produces.
#[derive(Debug, Default)]
pub struct InputMapper;

impl InputMapper {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Waits up to `timeout` for one key event and maps it.
    ///
    /// Returns `Ok(None)` when no key arrived or the key is not bound.
    pub fn poll(&self, timeout: Duration) -> io::Result<Option<GameInput>> {
        if !event::poll(timeout)? {
            return Ok(None);
        }

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => Ok(map_key(key)),
            _ => Ok(None),
        }
    }
}

/// Maps one key press to a game input; unbound keys yield `None`.
#[must_use]
pub fn map_key(key: KeyEvent) -> Option<GameInput> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(GameInput::Quit);
    }

    match key.code {
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => {
            Some(GameInput::Direction(Direction::Up))
        }
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => {
            Some(GameInput::Direction(Direction::Down))
        }
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => {
            Some(GameInput::Direction(Direction::Left))
        }
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => {
            Some(GameInput::Direction(Direction::Right))
        }
        KeyCode::Enter | KeyCode::Char('r') | KeyCode::Char('R') => Some(GameInput::Restart),
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => Some(GameInput::Quit),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    use super::{map_key, Direction, GameInput};

    #[test]
    fn opposite_heading_is_symmetric() {
        assert_eq!(Direction::Up.opposite(), Direction::Down);
        assert_eq!(Direction::Down.opposite(), Direction::Up);
        assert_eq!(Direction::Left.opposite(), Direction::Right);
        assert_eq!(Direction::Right.opposite(), Direction::Left);
    }

    #[test]
    fn arrow_keys_map_to_directions() {
        for (code, direction) in [
            (KeyCode::Up, Direction::Up),
            (KeyCode::Down, Direction::Down),
            (KeyCode::Left, Direction::Left),
            (KeyCode::Right, Direction::Right),
        ] {
            let key = KeyEvent::new(code, KeyModifiers::NONE);
            assert_eq!(map_key(key), Some(GameInput::Direction(direction)));
        }
    }

    #[test]
    fn wasd_keys_map_to_directions() {
        for (ch, direction) in [
            ('w', Direction::Up),
            ('s', Direction::Down),
            ('a', Direction::Left),
            ('d', Direction::Right),
        ] {
            let key = KeyEvent::new(KeyCode::Char(ch), KeyModifiers::NONE);
            assert_eq!(map_key(key), Some(GameInput::Direction(direction)));
        }
    }

    #[test]
    fn restart_and_quit_bindings() {
        let r = KeyEvent::new(KeyCode::Char('r'), KeyModifiers::NONE);
        assert_eq!(map_key(r), Some(GameInput::Restart));

        let enter = KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE);
        assert_eq!(map_key(enter), Some(GameInput::Restart));

        let q = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
        assert_eq!(map_key(q), Some(GameInput::Quit));

        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(map_key(ctrl_c), Some(GameInput::Quit));
    }

    #[test]
    fn unbound_keys_are_ignored() {
        let x = KeyEvent::new(KeyCode::Char('x'), KeyModifiers::NONE);
        assert_eq!(map_key(x), None);

        let tab = KeyEvent::new(KeyCode::Tab, KeyModifiers::NONE);
        assert_eq!(map_key(tab), None);
    }
}
