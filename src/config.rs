use ratatui::style::Color;

/// Side length of one grid cell in logical pixels.
pub const CELL_SIZE: i32 = 10;

/// Side length of the square playfield in logical pixels.
pub const PLAYFIELD_SIZE: i32 = 400;

/// Segments the snake starts with.
pub const INITIAL_SNAKE_LENGTH: usize = 5;

/// Head position at startup, the center of the playfield.
pub const START_X: i32 = 200;
pub const START_Y: i32 = 200;

/// Fixed simulation tick interval in milliseconds.
pub const TICK_INTERVAL_MS: u64 = 100;

/// Seed used when no valid seed argument is given.
pub const DEFAULT_SEED: u64 = 5;

/// Title shown on the playfield border.
pub const WINDOW_TITLE: &str = "Snake Game";

/// Square playfield bounds in logical pixels.
///
/// Coordinates live in `[lower, upper)` on both axes; `wrap_axis` folds
/// any candidate coordinate back into that range. Replaces the bare `400`
/// literals that were scattered through the original boundary checks.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Playfield {
    pub lower: i32,
    pub upper: i32,
}

impl Playfield {
    /// Returns the standard 400×400 playfield.
    #[must_use]
    pub fn standard() -> Self {
        Self {
            lower: 0,
            upper: PLAYFIELD_SIZE,
        }
    }

    /// Wraps a single coordinate into `[lower, upper)`.
    ///
    /// Stepping off either edge lands on the opposite edge: the cell at
    /// `upper` maps to `lower`, one cell below `lower` maps to the last
    /// cell before `upper`.
    #[must_use]
    pub fn wrap_axis(self, value: i32) -> i32 {
        let span = self.upper - self.lower;
        self.lower + (value - self.lower).rem_euclid(span)
    }
}

/// Fixed color assignments for all drawn entities.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub food: Color,
    pub border_fg: Color,
    pub play_bg: Color,
    pub score_fg: Color,
}

/// The single built-in theme.
pub const THEME: Theme = Theme {
    food: Color::Red,
    border_fg: Color::White,
    play_bg: Color::Black,
    score_fg: Color::White,
};

#[cfg(test)]
mod tests {
    use super::{Playfield, CELL_SIZE, PLAYFIELD_SIZE};

    #[test]
    fn wrap_folds_overshoot_to_lower_bound() {
        let field = Playfield::standard();
        assert_eq!(field.wrap_axis(PLAYFIELD_SIZE), 0);
        assert_eq!(field.wrap_axis(PLAYFIELD_SIZE + CELL_SIZE), CELL_SIZE);
    }

    #[test]
    fn wrap_folds_undershoot_to_last_cell() {
        let field = Playfield::standard();
        assert_eq!(field.wrap_axis(-CELL_SIZE), PLAYFIELD_SIZE - CELL_SIZE);
    }

    #[test]
    fn wrap_leaves_in_range_coordinates_alone() {
        let field = Playfield::standard();
        for value in (0..PLAYFIELD_SIZE).step_by(CELL_SIZE as usize) {
            assert_eq!(field.wrap_axis(value), value);
        }
    }
}
