//! Stateless UI rendering.

use backtrack_tictactoe::{Mark, MoveDescriptor, Position, Square, Status, View};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};

use super::app::{App, Focus};

const CELL_WIDTH: u16 = 11;
const GRID_WIDTH: u16 = CELL_WIDTH * 3 + 2;
const GRID_HEIGHT: u16 = 11;

/// Renders the whole screen for the current application state.
pub fn draw(frame: &mut Frame, app: &App) {
    let view = app.view();
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title
            Constraint::Min(GRID_HEIGHT + 3),
            Constraint::Length(3), // Help
        ])
        .split(area);

    let title = Paragraph::new("Backtrack - Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(GRID_WIDTH + 4), Constraint::Min(24)])
        .split(chunks[1]);

    draw_game(frame, body[0], app, &view);
    draw_moves(frame, body[1], app, &view.moves);
    draw_help(frame, chunks[2], app);
}

fn draw_game(frame: &mut Frame, area: Rect, app: &App, view: &View) {
    let status = view.status(app.draw_policy());
    let border = focus_style(app.focus() == Focus::Board);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border)
        .title("Board");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(GRID_HEIGHT),
        ])
        .split(inner);

    let status_style = match status {
        Status::Winner(_) => Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        Status::Draw => Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD),
        Status::NextPlayer(_) => Style::default().fg(Color::Yellow),
    };
    frame.render_widget(
        Paragraph::new(status.to_string())
            .style(status_style)
            .alignment(Alignment::Center),
        rows[0],
    );
    if let Some(message) = app.message() {
        frame.render_widget(
            Paragraph::new(message)
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center),
            rows[1],
        );
    }

    let cursor = (app.focus() == Focus::Board).then_some(app.cursor());
    draw_board(frame, center_rect(rows[2], GRID_WIDTH, GRID_HEIGHT), view, cursor);
}

fn draw_board(frame: &mut Frame, area: Rect, view: &View, cursor: Option<Position>) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(area);

    for row in 0..3 {
        draw_row(frame, rows[row * 2], view, cursor, row);
        if row < 2 {
            draw_separator(frame, rows[row * 2 + 1]);
        }
    }
}

fn draw_row(frame: &mut Frame, area: Rect, view: &View, cursor: Option<Position>, row: usize) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(CELL_WIDTH),
            Constraint::Length(1),
            Constraint::Length(CELL_WIDTH),
            Constraint::Length(1),
            Constraint::Length(CELL_WIDTH),
        ])
        .split(area);

    for col in 0..3 {
        if let Some(pos) = Position::from_row_col(row, col) {
            draw_cell(frame, cols[col * 2], view, cursor, pos);
        }
        if col < 2 {
            draw_separator_vertical(frame, cols[col * 2 + 1]);
        }
    }
}

fn draw_cell(frame: &mut Frame, area: Rect, view: &View, cursor: Option<Position>, pos: Position) {
    let (symbol, mut style) = match view.board.get(pos) {
        Square::Empty => ("   ", Style::default().fg(Color::DarkGray)),
        Square::Occupied(Mark::Cross) => (
            " X ",
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Square::Occupied(Mark::Nought) => (
            " O ",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };

    if view.winning_line.is_some_and(|line| line.contains(&pos)) {
        style = style.bg(Color::Green).fg(Color::Black);
    }
    if cursor == Some(pos) {
        style = style.bg(Color::White).fg(Color::Black);
    }

    let paragraph = Paragraph::new(vec![
        Line::raw(""),
        Line::from(Span::styled(symbol, style)),
    ])
    .alignment(Alignment::Center);

    frame.render_widget(paragraph, area);
}

fn draw_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("─".repeat(GRID_WIDTH as usize))
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn draw_separator_vertical(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new(vec![Line::raw("│"); area.height as usize])
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn draw_moves(frame: &mut Frame, area: Rect, app: &App, moves: &[MoveDescriptor]) {
    let items: Vec<ListItem> = moves
        .iter()
        .map(|entry| {
            let mut spans = vec![Span::raw(format!("{:>2}. {}", entry.step, entry.label))];
            if let Some(placed) = entry.placed {
                spans.push(Span::styled(
                    format!("  {} {}", placed.mark, placed.position.label()),
                    Style::default().fg(Color::DarkGray),
                ));
            }
            let style = if entry.current {
                Style::default().add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            ListItem::new(Line::from(spans)).style(style)
        })
        .collect();

    let focused = app.focus() == Focus::Moves;
    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(focus_style(focused))
                .title("Moves"),
        )
        .highlight_symbol("> ")
        .highlight_style(if focused {
            Style::default().bg(Color::White).fg(Color::Black)
        } else {
            Style::default()
        });

    let mut state = ListState::default().with_selected(Some(app.selected()));
    frame.render_stateful_widget(list, area, &mut state);
}

fn draw_help(frame: &mut Frame, area: Rect, app: &App) {
    let keys = match app.focus() {
        Focus::Board => "arrows move  enter/1-9 place",
        Focus::Moves => "up/down select  enter jump",
    };
    let help = Paragraph::new(format!("{}  u/r back/forward  tab switch  q quit", keys))
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(help, area);
}

fn focus_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(area.height.saturating_sub(height) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(area.width.saturating_sub(width) / 2),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(vert[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use backtrack_tictactoe::DrawPolicy;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use ratatui::{Terminal, backend::TestBackend};

    fn render(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal.draw(|f| draw(f, app)).unwrap();
        let buffer = terminal.backend().buffer();
        let width = buffer.area.width as usize;
        buffer
            .content()
            .chunks(width)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn type_digits(app: &mut App, digits: &str) {
        for c in digits.chars() {
            app.handle_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE));
        }
    }

    #[test]
    fn test_initial_screen() {
        let screen = render(&App::new(DrawPolicy::Ignore));
        assert!(screen.contains("Next player: X"));
        assert!(screen.contains("Go to game start"));
        assert!(!screen.contains("Go to move #1"));
    }

    #[test]
    fn test_winner_and_move_list() {
        let mut app = App::new(DrawPolicy::Ignore);
        type_digits(&mut app, "15283");
        let screen = render(&app);
        assert!(screen.contains("Winner: X"));
        assert!(screen.contains("Go to move #5"));
        assert!(screen.contains("O Bottom-center"));
    }

    #[test]
    fn test_draw_announced() {
        let mut app = App::new(DrawPolicy::Announce);
        type_digits(&mut app, "123546879");
        let screen = render(&app);
        assert!(screen.contains("Draw"));
        assert!(!screen.contains("Next player"));
    }
}
