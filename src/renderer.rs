use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Clear, Paragraph};
use ratatui::Frame;

use crate::config::{Grid, Theme};
use crate::game::{EndReason, GameStatus, Snapshot};
use crate::input::Direction;
use crate::snake::Cell;

const GLYPH_FOOD: &str = "●";
const GLYPH_BODY: &str = "█";
const GLYPH_HEAD_UP: &str = "▲";
const GLYPH_HEAD_DOWN: &str = "▼";
const GLYPH_HEAD_LEFT: &str = "◀";
const GLYPH_HEAD_RIGHT: &str = "▶";

/// Renders one full frame from an immutable snapshot.
///
/// This is the only way the terminal learns about game state; nothing here
/// mutates or reaches back into the state machine.
pub fn render(frame: &mut Frame<'_>, snapshot: &Snapshot, theme: &Theme) {
    let [score_row, play_row] =
        Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(frame.area());

    render_score(frame, score_row, snapshot, theme);

    let block = Block::bordered().border_style(Style::new().fg(theme.border_fg));
    let inner = block.inner(play_row);
    frame.render_widget(block, play_row);

    render_food(frame, inner, snapshot, theme);
    render_snake(frame, inner, snapshot, theme);

    if snapshot.status == GameStatus::Over {
        render_game_over(frame, play_row, snapshot, theme);
    }
}

fn render_score(frame: &mut Frame<'_>, area: Rect, snapshot: &Snapshot, theme: &Theme) {
    frame.render_widget(
        Paragraph::new(format!("Score: {}", snapshot.score))
            .alignment(Alignment::Center)
            .style(
                Style::new()
                    .fg(theme.score_fg)
                    .add_modifier(Modifier::BOLD),
            ),
        area,
    );
}

fn render_food(frame: &mut Frame<'_>, inner: Rect, snapshot: &Snapshot, theme: &Theme) {
    let Some(food) = snapshot.food else {
        return;
    };
    let Some((x, y)) = cell_to_terminal(inner, snapshot.grid, food) else {
        return;
    };

    frame
        .buffer_mut()
        .set_string(x, y, GLYPH_FOOD, Style::new().fg(theme.food));
}

fn render_snake(frame: &mut Frame<'_>, inner: Rect, snapshot: &Snapshot, theme: &Theme) {
    let head = snapshot.cells.first().copied();

    let buffer = frame.buffer_mut();
    for cell in &snapshot.cells {
        let Some((x, y)) = cell_to_terminal(inner, snapshot.grid, *cell) else {
            continue;
        };

        if Some(*cell) == head {
            buffer.set_string(
                x,
                y,
                head_glyph(snapshot.heading),
                Style::new()
                    .fg(theme.snake_head)
                    .add_modifier(Modifier::BOLD),
            );
        } else {
            buffer.set_string(x, y, GLYPH_BODY, Style::new().fg(theme.snake_body));
        }
    }
}

fn render_game_over(frame: &mut Frame<'_>, area: Rect, snapshot: &Snapshot, theme: &Theme) {
    let popup = centered_popup(area, 60, 40);
    frame.render_widget(Clear, popup);

    let title = match snapshot.end_reason {
        Some(EndReason::BoardFull) => "YOU WIN",
        _ => "GAME OVER",
    };

    let lines = vec![
        Line::styled(
            title,
            Style::new()
                .fg(theme.menu_title)
                .add_modifier(Modifier::BOLD),
        ),
        Line::from(""),
        Line::from(format!("Final score: {}", snapshot.score)),
        Line::from(""),
        Line::from("[R]/[Enter] Retry"),
        Line::styled("[Q]/[Esc] Quit", Style::new().fg(theme.menu_footer)),
    ];

    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(Block::bordered()),
        popup,
    );
}

fn head_glyph(heading: Direction) -> &'static str {
    match heading {
        Direction::Up => GLYPH_HEAD_UP,
        Direction::Down => GLYPH_HEAD_DOWN,
        Direction::Left => GLYPH_HEAD_LEFT,
        Direction::Right => GLYPH_HEAD_RIGHT,
    }
}

/// Maps a logical cell to a terminal coordinate inside `inner`, or `None`
/// when the cell is off the board or the terminal is too small to show it.
fn cell_to_terminal(inner: Rect, grid: Grid, cell: Cell) -> Option<(u16, u16)> {
    if !grid.in_bounds(cell) {
        return None;
    }

    let x = inner.x.saturating_add(u16::try_from(cell.col).ok()?);
    let y = inner.y.saturating_add(u16::try_from(cell.row).ok()?);
    if x >= inner.right() || y >= inner.bottom() {
        return None;
    }

    Some((x, y))
}

fn centered_popup(area: Rect, width_percent: u16, height_percent: u16) -> Rect {
    let [_, mid, _] = Layout::vertical([
        Constraint::Percentage((100 - height_percent) / 2),
        Constraint::Percentage(height_percent),
        Constraint::Percentage((100 - height_percent) / 2),
    ])
    .areas(area);

    let [_, center, _] = Layout::horizontal([
        Constraint::Percentage((100 - width_percent) / 2),
        Constraint::Percentage(width_percent),
        Constraint::Percentage((100 - width_percent) / 2),
    ])
    .areas(mid);

    center
}

#[cfg(test)]
mod tests {
    use ratatui::backend::TestBackend;
    use ratatui::layout::Rect;
    use ratatui::Terminal;

    use crate::config::{Grid, THEME_CLASSIC};
    use crate::game::GameState;
    use crate::snake::Cell;

    use super::{cell_to_terminal, render};

    #[test]
    fn cell_mapping_offsets_into_the_inner_area() {
        let inner = Rect::new(1, 2, 10, 10);
        let grid = Grid::from_cells(10, 10);

        assert_eq!(
            cell_to_terminal(inner, grid, Cell { col: 0, row: 0 }),
            Some((1, 2))
        );
        assert_eq!(
            cell_to_terminal(inner, grid, Cell { col: 3, row: 4 }),
            Some((4, 6))
        );
        assert_eq!(cell_to_terminal(inner, grid, Cell { col: -1, row: 0 }), None);
        assert_eq!(cell_to_terminal(inner, grid, Cell { col: 10, row: 0 }), None);
    }

    #[test]
    fn cell_mapping_clips_to_a_small_terminal() {
        let inner = Rect::new(0, 0, 4, 4);
        let grid = Grid::from_cells(10, 10);

        // In bounds on the grid but outside the visible inner area.
        assert_eq!(cell_to_terminal(inner, grid, Cell { col: 6, row: 1 }), None);
    }

    #[test]
    fn running_frame_shows_the_score() {
        let state = GameState::new_with_seed(Grid::from_cells(10, 10), 5);
        let snapshot = state.snapshot();

        let backend = TestBackend::new(20, 14);
        let mut terminal = Terminal::new(backend).expect("test backend");
        terminal
            .draw(|frame| render(frame, &snapshot, &THEME_CLASSIC))
            .expect("draw succeeds");

        let rendered = format!("{:?}", terminal.backend().buffer());
        assert!(rendered.contains("Score: 0"));
    }
}
