use ratatui::style::Color;
use thiserror::Error;

/// Position in logical pixels.
///
/// Both coordinates are always exact multiples of the cell size; every
/// movement adds or subtracts one whole cell on a single axis.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

/// One body segment: a cell-aligned position plus a cosmetic color.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Segment {
    pub position: Position,
    pub color: Color,
}

/// Errors raised while constructing a snake.
#[derive(Debug, Error, Eq, PartialEq)]
pub enum SnakeError {
    /// A snake needs at least a head segment to be controllable.
    #[error("initial snake length must be at least 1")]
    ZeroInitialLength,
}

/// Ordered segment chain: index 0 is the head, the last index the tail.
///
/// The chain only ever grows. Segments are not required to stay
/// grid-adjacent to their neighbors; the only movement guarantee is the
/// synchronized shift performed by [`Snake::advance`].
#[derive(Debug, Clone)]
pub struct Snake {
    segments: Vec<Segment>,
    initial_length: usize,
}

impl Snake {
    /// Builds a snake of `initial_length` segments with its head at `head`.
    ///
    /// Each segment after the head sits one cell further along the
    /// negative X axis. A zero length is rejected: an empty chain has no
    /// head to steer.
    pub fn new(head: Position, cell_size: i32, initial_length: usize) -> Result<Self, SnakeError> {
        if initial_length == 0 {
            return Err(SnakeError::ZeroInitialLength);
        }

        let segments = (0..initial_length)
            .map(|index| Segment {
                position: Position {
                    x: head.x - cell_size * index as i32,
                    y: head.y,
                },
                color: segment_color(index),
            })
            .collect();

        Ok(Self {
            segments,
            initial_length,
        })
    }

    /// Moves the whole chain one step: every segment takes the position
    /// its predecessor held before this call, and the head takes
    /// `new_head`.
    ///
    /// Iterating from the tail toward the head reads each predecessor
    /// before it is overwritten, so the shift sees only pre-call
    /// positions.
    pub fn advance(&mut self, new_head: Position) {
        for index in (1..self.segments.len()).rev() {
            self.segments[index].position = self.segments[index - 1].position;
        }

        self.segments[0].position = new_head;
    }

    /// Appends a tail segment one cell behind the current tail, opposite
    /// the travel offset `(dx, dy)`.
    ///
    /// The color comes from the deterministic gradient over the segment
    /// index; it carries no gameplay meaning.
    pub fn grow(&mut self, travel: (i32, i32)) {
        let tail = self.segments[self.segments.len() - 1].position;
        let index = self.segments.len();

        self.segments.push(Segment {
            position: Position {
                x: tail.x - travel.0,
                y: tail.y - travel.1,
            },
            color: segment_color(index),
        });
    }

    /// Returns the head position, used for food collision tests.
    #[must_use]
    pub fn head_position(&self) -> Position {
        self.segments[0].position
    }

    /// Returns the current segment count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Always false: construction guarantees at least one segment.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Returns segments eaten so far: current length minus the starting
    /// length. Derived on demand, never stored.
    #[must_use]
    pub fn score(&self) -> usize {
        self.segments.len() - self.initial_length
    }

    /// Iterates over segments from head to tail.
    pub fn segments(&self) -> impl Iterator<Item = &Segment> {
        self.segments.iter()
    }
}

/// Deterministic per-index segment color, a green gradient that cycles
/// as the snake lengthens.
#[must_use]
pub fn segment_color(index: usize) -> Color {
    let shade = (index % 10) as u8 * 14;
    Color::Rgb(0, 220 - shade, 60)
}
