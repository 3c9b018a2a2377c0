use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Canonical movement directions for snake input.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    #[must_use]
    pub fn is_horizontal(self) -> bool {
        matches!(self, Self::Left | Self::Right)
    }

    /// Unit step on each axis; screen space, so `Up` is negative y.
    #[must_use]
    pub fn unit(self) -> (i32, i32) {
        match self {
            Self::Up => (0, -1),
            Self::Down => (0, 1),
            Self::Left => (-1, 0),
            Self::Right => (1, 0),
        }
    }
}

/// High-level input events consumed by the game loop.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameInput {
    Direction(Direction),
    Pause,
    Quit,
    Confirm,
}

/// Returns whether `next` may replace `current`.
///
/// A moving snake may only turn onto the other axis, so both reversals and
/// repeats of the current axis are refused. A snake that has not started
/// moving accepts any direction.
#[must_use]
pub fn accepts_turn(current: Option<Direction>, next: Direction) -> bool {
    match current {
        None => true,
        Some(current) => current.is_horizontal() != next.is_horizontal(),
    }
}

/// Maps a terminal key event to a game input.
#[must_use]
pub fn map_key_event(key: KeyEvent) -> Option<GameInput> {
    if key.kind == KeyEventKind::Release {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(GameInput::Quit);
    }

    let input = match key.code {
        KeyCode::Up | KeyCode::Char('w' | 'W' | 'k') => GameInput::Direction(Direction::Up),
        KeyCode::Down | KeyCode::Char('s' | 'S' | 'j') => GameInput::Direction(Direction::Down),
        KeyCode::Left | KeyCode::Char('a' | 'A' | 'h') => GameInput::Direction(Direction::Left),
        KeyCode::Right | KeyCode::Char('d' | 'D' | 'l') => GameInput::Direction(Direction::Right),
        KeyCode::Char('p' | 'P') => GameInput::Pause,
        KeyCode::Enter | KeyCode::Char(' ') => GameInput::Confirm,
        KeyCode::Esc | KeyCode::Char('q' | 'Q') => GameInput::Quit,
        _ => return None,
    };

    Some(input)
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    use super::{accepts_turn, map_key_event, Direction, GameInput};

    #[test]
    fn turns_must_switch_axis() {
        assert!(!accepts_turn(Some(Direction::Up), Direction::Down));
        assert!(!accepts_turn(Some(Direction::Up), Direction::Up));
        assert!(!accepts_turn(Some(Direction::Left), Direction::Right));
        assert!(!accepts_turn(Some(Direction::Right), Direction::Right));

        assert!(accepts_turn(Some(Direction::Up), Direction::Left));
        assert!(accepts_turn(Some(Direction::Right), Direction::Down));
    }

    #[test]
    fn stationary_snake_accepts_any_direction() {
        for direction in [
            Direction::Up,
            Direction::Down,
            Direction::Left,
            Direction::Right,
        ] {
            assert!(accepts_turn(None, direction));
        }
    }

    #[test]
    fn keys_map_to_inputs() {
        let press = |code| KeyEvent::new(code, KeyModifiers::NONE);

        assert_eq!(
            map_key_event(press(KeyCode::Left)),
            Some(GameInput::Direction(Direction::Left))
        );
        assert_eq!(
            map_key_event(press(KeyCode::Char('w'))),
            Some(GameInput::Direction(Direction::Up))
        );
        assert_eq!(map_key_event(press(KeyCode::Char('p'))), Some(GameInput::Pause));
        assert_eq!(map_key_event(press(KeyCode::Enter)), Some(GameInput::Confirm));
        assert_eq!(map_key_event(press(KeyCode::Esc)), Some(GameInput::Quit));
        assert_eq!(map_key_event(press(KeyCode::Char('x'))), None);
        assert_eq!(
            map_key_event(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(GameInput::Quit)
        );
    }
}
