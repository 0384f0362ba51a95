use thiserror::Error;

use crate::config::{
    Playfield, CELL_SIZE, INITIAL_SNAKE_LENGTH, PLAYFIELD_SIZE, START_X, START_Y,
};
use crate::direction::{Direction, DirectionController};
use crate::food::Food;
use crate::snake::{Position, Snake, SnakeError};

/// Errors raised while setting up a game.
#[derive(Debug, Error)]
pub enum GameError {
    #[error("invalid snake configuration: {0}")]
    Snake(#[from] SnakeError),
}

/// Complete mutable simulation state for one session.
///
/// Owned and mutated by the single loop thread; every tick is a pure
/// in-memory state transition with no I/O.
#[derive(Debug, Clone)]
pub struct GameState {
    pub snake: Snake,
    pub food: Food,
    controller: DirectionController,
    playfield: Playfield,
    tick_count: u64,
}

impl GameState {
    /// Creates the standard session: a five-segment snake headed right
    /// from the playfield center, food seeded from `seed`.
    pub fn new(seed: u64) -> Result<Self, GameError> {
        Self::with_config(
            Position {
                x: START_X,
                y: START_Y,
            },
            INITIAL_SNAKE_LENGTH,
            seed,
        )
    }

    /// Creates a session with an explicit start position and length, used
    /// by tests to script exact scenarios.
    pub fn with_config(head: Position, initial_length: usize, seed: u64) -> Result<Self, GameError> {
        let snake = Snake::new(head, CELL_SIZE, initial_length)?;
        let food = Food::new(CELL_SIZE, seed, 0, PLAYFIELD_SIZE - 1);

        Ok(Self {
            snake,
            food,
            controller: DirectionController::new(),
            playfield: Playfield::standard(),
            tick_count: 0,
        })
    }

    /// Feeds one directional key press into the heading controller.
    pub fn request_direction(&mut self, direction: Direction) {
        self.controller.request(direction);
    }

    /// Returns the heading the next tick will move along.
    #[must_use]
    pub fn heading(&self) -> Direction {
        self.controller.heading()
    }

    /// Advances the simulation by one tick.
    ///
    /// Computes the candidate head one cell along the current heading,
    /// wraps it into the playfield, shifts the snake, and on an exact
    /// head/food position match respawns the food and grows the snake.
    pub fn tick(&mut self) {
        self.tick_count += 1;

        let travel = self.controller.heading().offset(CELL_SIZE);
        let head = self.snake.head_position();
        let candidate = Position {
            x: self.playfield.wrap_axis(head.x + travel.0),
            y: self.playfield.wrap_axis(head.y + travel.1),
        };

        self.snake.advance(candidate);

        if self.snake.head_position() == self.food.position() {
            self.food.respawn();
            self.snake.grow(travel);
        }
    }

    /// Returns the derived score: segments eaten so far.
    #[must_use]
    pub fn score(&self) -> usize {
        self.snake.score()
    }

    /// Returns how many ticks have run.
    #[must_use]
    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }
}

#[cfg(test)]
mod tests {
    use crate::direction::Direction;
    use crate::snake::Position;

    use super::GameState;

    #[test]
    fn tick_moves_the_head_one_cell_along_the_heading() {
        let mut state = GameState::new(1).unwrap();
        assert_eq!(state.snake.head_position(), Position { x: 200, y: 200 });

        state.tick();
        assert_eq!(state.snake.head_position(), Position { x: 210, y: 200 });

        state.request_direction(Direction::Down);
        state.tick();
        assert_eq!(state.snake.head_position(), Position { x: 210, y: 210 });
    }

    #[test]
    fn head_wraps_across_the_right_edge() {
        let mut state = GameState::with_config(Position { x: 390, y: 200 }, 5, 1).unwrap();

        state.tick();

        assert_eq!(state.snake.head_position(), Position { x: 0, y: 200 });
    }

    #[test]
    fn head_wraps_across_the_left_edge() {
        let mut state = GameState::with_config(Position { x: 0, y: 200 }, 5, 1).unwrap();

        // Left is the exact reversal of the default Right heading, so
        // turn through Down first.
        state.request_direction(Direction::Down);
        state.request_direction(Direction::Left);
        state.tick();

        assert_eq!(state.snake.head_position(), Position { x: 390, y: 200 });
    }

    #[test]
    fn eating_food_respawns_it_and_grows_the_snake() {
        let mut state = GameState::new(7).unwrap();
        let start_len = state.snake.len();

        // Walk the head onto the food with the greedy pilot below.
        let mut grew = false;
        for _ in 0..10_000 {
            let before = state.snake.len();
            state.tick();
            if state.snake.len() > before {
                grew = true;
                break;
            }
            steer_toward_food(&mut state);
        }

        assert!(grew, "snake never reached the food");
        assert_eq!(state.snake.len(), start_len + 1);
        assert_eq!(state.score(), 1);
    }

    #[test]
    fn length_never_decreases() {
        let mut state = GameState::new(42).unwrap();
        let mut previous = state.snake.len();

        for tick in 0..500 {
            state.tick();
            assert!(state.snake.len() >= previous, "shrank at tick {tick}");
            previous = state.snake.len();
            steer_toward_food(&mut state);
        }
    }

    #[test]
    fn score_tracks_growth_events() {
        let mut state = GameState::new(9).unwrap();
        let initial_len = state.snake.len();

        for _ in 0..2_000 {
            state.tick();
            steer_toward_food(&mut state);
            assert_eq!(state.score(), state.snake.len() - initial_len);
        }
    }

    // Greedy pilot for tests: one axis at a time, never reversing.
    fn steer_toward_food(state: &mut GameState) {
        let head = state.snake.head_position();
        let food = state.food.position();

        let request = if head.x < food.x {
            Direction::Right
        } else if head.x > food.x {
            Direction::Left
        } else if head.y < food.y {
            Direction::Down
        } else {
            Direction::Up
        };

        state.request_direction(request);
    }
}
