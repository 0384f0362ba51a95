use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::snake::Position;

/// Food pellet with its own seeded random generator.
///
/// Randomness enters the game only here: given the same seed, the
/// sequence of spawn positions is identical across runs, which keeps the
/// rest of the simulation deterministic for a fixed input sequence.
///
/// Spawning does not avoid the snake's body. The original game allowed
/// food under a segment and this keeps that observable behavior.
#[derive(Debug, Clone)]
pub struct Food {
    position: Position,
    rng: StdRng,
    cell_size: i32,
    lower_cell: i32,
    upper_cell: i32,
}

impl Food {
    /// Creates food over the inclusive cell range
    /// `[lower_bound / cell_size, upper_bound / cell_size]` and places it
    /// with a first draw from `seed`.
    #[must_use]
    pub fn new(cell_size: i32, seed: u64, lower_bound: i32, upper_bound: i32) -> Self {
        let mut food = Self {
            position: Position { x: 0, y: 0 },
            rng: StdRng::seed_from_u64(seed),
            cell_size,
            lower_cell: lower_bound / cell_size,
            upper_cell: upper_bound / cell_size,
        };

        food.respawn();
        food
    }

    /// Moves the food to a fresh uniformly random cell.
    ///
    /// Two independent draws over the inclusive cell range, each scaled
    /// back to pixel coordinates, so the result is always cell-aligned
    /// and inside the playfield.
    pub fn respawn(&mut self) {
        let x = self.rng.gen_range(self.lower_cell..=self.upper_cell) * self.cell_size;
        let y = self.rng.gen_range(self.lower_cell..=self.upper_cell) * self.cell_size;
        self.position = Position { x, y };
    }

    /// Returns the current food position.
    #[must_use]
    pub fn position(&self) -> Position {
        self.position
    }
}
