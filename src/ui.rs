//! User interface rendering functions for the terminal frontend.

use color_eyre::eyre::{OptionExt as _, Result};
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Clear, Paragraph},
    Frame,
};

use crate::{
    app::App,
    board::{Board, Cell, ROWS},
    game::TREASURE_GOAL,
    types::GameState,
};

/// Width of the game panel in terminal cells, borders included.
const PANEL_WIDTH: u16 = 40;

/// Lines shown under the board: a blank spacer, the score and the feedback message.
const STATUS_LINES: usize = 3;

/// Updates the terminal with the current application state.
///
/// # Errors
///
/// This function may return errors from size conversions or layout lookups.
pub(crate) fn draw(app: &App, frame: &mut Frame) -> Result<()> {
    clear(frame);

    let area = centered(frame.area(), u16::try_from(ROWS + STATUS_LINES)? + 2)?;

    let help = if app.game.state() == GameState::Playing {
        "(w/a/s/d) move / (q) quit"
    } else {
        "(any key) exit"
    };
    let block = Block::bordered()
        .title("Treasure Game")
        .title_bottom(help)
        .title_alignment(Alignment::Center)
        .style(Color::Green)
        .border_type(BorderType::Rounded);

    let mut lines = board_lines(app.game.board());
    lines.push(Line::default());
    lines.push(Line::raw(format!("Treasures: {}/{TREASURE_GOAL}", app.game.score())).centered());
    lines.push(
        Line::styled(
            app.message.unwrap_or_default(),
            Style::default().fg(Color::Yellow),
        )
        .centered(),
    );

    frame.render_widget(Paragraph::new(lines).block(block), area);

    Ok(())
}

/// Clears the terminal screen by rendering a [`Clear`] widget.
pub(crate) fn clear(frame: &mut Frame) {
    frame.render_widget(Clear, frame.area());
}

/// Carves a panel of [`PANEL_WIDTH`] by `height` cells out of the middle of an area.
fn centered(area: Rect, height: u16) -> Result<Rect> {
    let row = Layout::vertical([
        Constraint::Min(0),
        Constraint::Length(height),
        Constraint::Min(0),
    ])
    .split(area)
    .get(1)
    .copied()
    .ok_or_eyre("failed to get panel row from vertical layout")?;

    Layout::horizontal([
        Constraint::Min(0),
        Constraint::Length(PANEL_WIDTH),
        Constraint::Min(0),
    ])
    .split(row)
    .get(1)
    .copied()
    .ok_or_eyre("failed to get panel from horizontal layout")
}

/// Turns every board row into a centered line of styled, space-separated markers.
fn board_lines(board: &Board) -> Vec<Line<'static>> {
    board
        .rows()
        .map(|row| {
            let mut spans = Vec::new();
            for (idx, cell) in row.iter().enumerate() {
                if idx > 0 {
                    spans.push(Span::raw(" "));
                }
                spans.push(Span::styled(cell.marker().to_string(), cell_style(*cell)));
            }
            Line::from(spans).centered()
        })
        .collect()
}

/// Picks the display style of a cell marker.
fn cell_style(cell: Cell) -> Style {
    match cell {
        Cell::Player => Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
        Cell::Empty => Style::default().fg(Color::DarkGray),
        Cell::Obstacle => Style::default().fg(Color::Red),
        Cell::Treasure => Style::default().fg(Color::Yellow),
    }
}

#[cfg(test)]
mod tests {
    use ratatui::{backend::TestBackend, Terminal};

    use super::*;

    /// Creates a test terminal with known dimensions for UI testing.
    fn create_test_terminal() -> Terminal<TestBackend> {
        let backend = TestBackend::new(80, 24);
        Terminal::new(backend).expect("failed to create test terminal")
    }

    /// Flattens the rendered buffer into a single string of symbols.
    fn rendered(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(ratatui::buffer::Cell::symbol)
            .collect()
    }

    #[test]
    fn test_draw_new_game() {
        let app = App::new();
        let mut terminal = create_test_terminal();

        let result = terminal.draw(|frame| {
            draw(&app, frame).expect("drawing should succeed in test");
        });
        assert!(result.is_ok(), "drawing a new game should succeed");

        let screen = rendered(&terminal);
        assert!(screen.contains("P . T . ."));
        assert!(screen.contains("# . # . ."));
        assert!(screen.contains("Treasures: 0/3"));
        assert!(screen.contains("(q) quit"));
    }

    #[test]
    fn test_draw_message_and_score() {
        let mut app = App::new();
        let _ = app.game.handle_token('d');
        let _ = app.game.handle_token('d');
        app.message = Some(crate::game::PICKUP_MESSAGE);
        let mut terminal = create_test_terminal();

        let result = terminal.draw(|frame| {
            draw(&app, frame).expect("drawing should succeed in test");
        });
        assert!(result.is_ok(), "drawing after a pickup should succeed");

        let screen = rendered(&terminal);
        assert!(screen.contains(". . P . ."));
        assert!(screen.contains("Treasures: 1/3"));
        assert!(screen.contains("You collected a treasure!"));
    }

    #[test]
    fn test_draw_finished_game() {
        let mut app = App::new();
        app.game.quit();
        let mut terminal = create_test_terminal();

        let result = terminal.draw(|frame| {
            draw(&app, frame).expect("drawing should succeed in test");
        });
        assert!(result.is_ok(), "drawing a finished game should succeed");
        assert!(rendered(&terminal).contains("(any key) exit"));
    }

    #[test]
    fn test_draw_small_terminal() {
        let app = App::new();
        let mut terminal =
            Terminal::new(TestBackend::new(10, 4)).expect("failed to create test terminal");

        let result = terminal.draw(|frame| {
            draw(&app, frame).expect("drawing should succeed in test");
        });
        assert!(result.is_ok(), "drawing into a tiny terminal should succeed");
    }

    #[test]
    fn test_clear_function() {
        let mut terminal = create_test_terminal();

        let result = terminal.draw(|frame| {
            clear(frame);
        });

        assert!(result.is_ok(), "clearing screen should succeed");
    }

    #[test]
    fn test_board_lines() {
        let lines = board_lines(&Board::default());

        assert_eq!(lines.len(), ROWS);
        assert_eq!(
            lines.first().map(ToString::to_string),
            Some("P . T . .".to_owned())
        );
    }

    #[test]
    fn test_cell_style_distinguishes_markers() {
        assert_ne!(cell_style(Cell::Obstacle), cell_style(Cell::Treasure));
        assert_ne!(cell_style(Cell::Player), cell_style(Cell::Empty));
    }
}
