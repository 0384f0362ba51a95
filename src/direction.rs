/// Canonical movement directions for the snake.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Returns the opposite direction.
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// Returns the per-tick pixel offset for this direction.
    ///
    /// Screen coordinates: y grows downward, so `Up` is negative y.
    #[must_use]
    pub fn offset(self, cell_size: i32) -> (i32, i32) {
        match self {
            Self::Up => (0, -cell_size),
            Self::Down => (0, cell_size),
            Self::Left => (-cell_size, 0),
            Self::Right => (cell_size, 0),
        }
    }
}

/// Owns the current heading and validates transitions.
///
/// The original program kept the heading in a process-wide global written
/// from the keyboard handler; here it is explicit state the game loop
/// queries each tick.
#[derive(Debug, Clone, Copy)]
pub struct DirectionController {
    heading: Direction,
}

impl DirectionController {
    /// Creates a controller heading `Right`, the default before any key
    /// press.
    #[must_use]
    pub fn new() -> Self {
        Self {
            heading: Direction::Right,
        }
    }

    /// Returns the current heading.
    #[must_use]
    pub fn heading(self) -> Direction {
        self.heading
    }

    /// Applies a requested heading change.
    ///
    /// An exact reversal (UP↔DOWN, LEFT↔RIGHT) is ignored so the head
    /// cannot turn straight into the second segment. Same-direction and
    /// perpendicular requests always apply.
    pub fn request(&mut self, requested: Direction) {
        if requested != self.heading.opposite() {
            self.heading = requested;
        }
    }
}

impl Default for DirectionController {
    fn default() -> Self {
        Self::new()
    }
}
