use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::direction::Direction;

/// High-level input events consumed by the game loop.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameInput {
    Direction(Direction),
    Quit,
}

/// Waits up to `timeout` for a key event and maps it to a [`GameInput`].
///
/// The timeout doubles as the inter-tick wait, so a quit key ends the
/// session without sleeping out the rest of the tick. Returns `Ok(None)`
/// when the timeout elapses or the event is not a key we care about.
pub fn poll_input(timeout: Duration) -> io::Result<Option<GameInput>> {
    if !event::poll(timeout)? {
        return Ok(None);
    }

    match event::read()? {
        Event::Key(key) if key.kind != KeyEventKind::Release => Ok(map_key(key)),
        _ => Ok(None),
    }
}

/// Maps W/A/S/D and the arrow keys to directions, q/Esc/Ctrl-C to quit.
#[must_use]
pub fn map_key(key: KeyEvent) -> Option<GameInput> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(GameInput::Quit);
    }

    match key.code {
        KeyCode::Char('w') | KeyCode::Up => Some(GameInput::Direction(Direction::Up)),
        KeyCode::Char('s') | KeyCode::Down => Some(GameInput::Direction(Direction::Down)),
        KeyCode::Char('a') | KeyCode::Left => Some(GameInput::Direction(Direction::Left)),
        KeyCode::Char('d') | KeyCode::Right => Some(GameInput::Direction(Direction::Right)),
        KeyCode::Char('q') | KeyCode::Esc => Some(GameInput::Quit),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    use crate::direction::Direction;

    use super::{map_key, GameInput};

    fn plain(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn wasd_and_arrows_map_to_directions() {
        assert_eq!(
            map_key(plain(KeyCode::Char('w'))),
            Some(GameInput::Direction(Direction::Up))
        );
        assert_eq!(
            map_key(plain(KeyCode::Left)),
            Some(GameInput::Direction(Direction::Left))
        );
        assert_eq!(
            map_key(plain(KeyCode::Char('s'))),
            Some(GameInput::Direction(Direction::Down))
        );
        assert_eq!(
            map_key(plain(KeyCode::Right)),
            Some(GameInput::Direction(Direction::Right))
        );
    }

    #[test]
    fn quit_keys_map_to_quit() {
        assert_eq!(map_key(plain(KeyCode::Char('q'))), Some(GameInput::Quit));
        assert_eq!(map_key(plain(KeyCode::Esc)), Some(GameInput::Quit));
        assert_eq!(
            map_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(GameInput::Quit)
        );
    }

    #[test]
    fn unrelated_keys_are_ignored() {
        assert_eq!(map_key(plain(KeyCode::Char('x'))), None);
        assert_eq!(map_key(plain(KeyCode::Enter)), None);
    }
}
