use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::Style;
use ratatui::widgets::{Block, Paragraph};
use ratatui::Frame;

use crate::config::{Theme, CELL_SIZE, PLAYFIELD_SIZE, WINDOW_TITLE};
use crate::game::GameState;
use crate::snake::Position;

const GLYPH_SEGMENT: &str = "█";
const GLYPH_FOOD: &str = "●";

/// Renders one full frame: bordered playfield, food, snake, score line.
pub fn render(frame: &mut Frame<'_>, state: &GameState, theme: &Theme) {
    let [play_area, score_area] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(frame.area());

    let block = Block::bordered()
        .title(WINDOW_TITLE)
        .border_style(Style::new().fg(theme.border_fg))
        .style(Style::new().bg(theme.play_bg));

    let inner = block.inner(play_area);
    frame.render_widget(block, play_area);

    render_food(frame, inner, state, theme);
    render_snake(frame, inner, state);
    render_score(frame, score_area, state, theme);
}

fn render_food(frame: &mut Frame<'_>, inner: Rect, state: &GameState, theme: &Theme) {
    let Some((x, y)) = pixel_to_terminal(inner, state.food.position()) else {
        return;
    };

    frame
        .buffer_mut()
        .set_string(x, y, GLYPH_FOOD, Style::new().fg(theme.food));
}

fn render_snake(frame: &mut Frame<'_>, inner: Rect, state: &GameState) {
    let buffer = frame.buffer_mut();
    let segments: Vec<_> = state.snake.segments().collect();

    // Tail first so the head wins when segments overlap a cell.
    for segment in segments.into_iter().rev() {
        let Some((x, y)) = pixel_to_terminal(inner, segment.position) else {
            continue;
        };

        buffer.set_string(x, y, GLYPH_SEGMENT, Style::new().fg(segment.color));
    }
}

/// Right-aligned fixed-width score readout, redrawn in place each frame.
fn render_score(frame: &mut Frame<'_>, area: Rect, state: &GameState, theme: &Theme) {
    frame.render_widget(
        Paragraph::new(format!("Score: {:>4}", state.score()))
            .alignment(Alignment::Right)
            .style(Style::new().fg(theme.score_fg)),
        area,
    );
}

/// Projects a pixel position onto a terminal cell inside `inner`.
///
/// One grid cell maps to one terminal cell. Positions outside the visible
/// area (terminal smaller than the 40×40 grid) are skipped.
fn pixel_to_terminal(inner: Rect, position: Position) -> Option<(u16, u16)> {
    if !(0..PLAYFIELD_SIZE).contains(&position.x) || !(0..PLAYFIELD_SIZE).contains(&position.y) {
        return None;
    }

    let cell_x = u16::try_from(position.x / CELL_SIZE).ok()?;
    let cell_y = u16::try_from(position.y / CELL_SIZE).ok()?;

    let x = inner.x.saturating_add(cell_x);
    let y = inner.y.saturating_add(cell_y);
    if x >= inner.right() || y >= inner.bottom() {
        return None;
    }

    Some((x, y))
}

#[cfg(test)]
mod tests {
    use ratatui::layout::Rect;

    use crate::snake::Position;

    use super::pixel_to_terminal;

    #[test]
    fn projection_scales_pixels_down_to_cells() {
        let inner = Rect::new(1, 1, 40, 40);

        assert_eq!(
            pixel_to_terminal(inner, Position { x: 0, y: 0 }),
            Some((1, 1))
        );
        assert_eq!(
            pixel_to_terminal(inner, Position { x: 200, y: 390 }),
            Some((21, 40))
        );
    }

    #[test]
    fn projection_skips_positions_outside_the_playfield() {
        let inner = Rect::new(0, 0, 40, 40);

        assert_eq!(pixel_to_terminal(inner, Position { x: -10, y: 0 }), None);
        assert_eq!(pixel_to_terminal(inner, Position { x: 400, y: 0 }), None);
    }

    #[test]
    fn projection_skips_cells_clipped_by_a_small_terminal() {
        let inner = Rect::new(0, 0, 10, 10);

        assert_eq!(pixel_to_terminal(inner, Position { x: 390, y: 0 }), None);
        assert_eq!(
            pixel_to_terminal(inner, Position { x: 90, y: 90 }),
            Some((9, 9))
        );
    }
}
