//! Stateless UI rendering for the terminal.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};
use timetravel_tictactoe::{BoardView, GameView, MoveView, Player, Position, SquareView};

use crate::{App, Focus};

/// Draws the whole screen.
pub fn draw(frame: &mut Frame, app: &App) {
    let view = app.view();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(11),
            Constraint::Length(3),
        ])
        .split(frame.area());

    let title = Paragraph::new("Tic-Tac-Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, chunks[0]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(25), Constraint::Min(20)])
        .split(chunks[1]);

    let cursor = (app.focus() == Focus::Board).then(|| app.cursor());
    draw_board(frame, body[0], view.board(), cursor);
    draw_info(frame, body[1], &view, app);

    let help = Paragraph::new(
        "Arrows: move | Enter: play/jump | 1-9: play | Tab: board/moves | s: sort | q: quit",
    )
    .style(Style::default().fg(Color::DarkGray))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL));
    frame.render_widget(help, chunks[2]);
}

fn draw_board(frame: &mut Frame, area: Rect, board: &BoardView, cursor: Option<Position>) {
    let block = Block::default().borders(Borders::ALL).title("Board");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3); 3])
        .split(inner);

    for (row_area, row) in rows.iter().zip(board.rows()) {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(7); 3])
            .split(*row_area);
        for (cell_area, square) in cols.iter().zip(row) {
            draw_square(frame, *cell_area, square, cursor == Some(square.position()));
        }
    }
}

fn draw_square(frame: &mut Frame, area: Rect, square: &SquareView, under_cursor: bool) {
    let mut style = match square.mark() {
        Some(Player::X) => Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        Some(Player::O) => Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        None => Style::default().fg(Color::DarkGray),
    };
    if square.is_winner() {
        style = style.bg(Color::Yellow);
    }
    if under_cursor {
        style = style.add_modifier(Modifier::REVERSED);
    }

    let cell = Paragraph::new(Line::from(Span::styled(format!(" {} ", square.text()), style)))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).border_style(style));
    frame.render_widget(cell, area);
}

fn draw_info(frame: &mut Frame, area: Rect, view: &GameView, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Min(3),
        ])
        .split(area);

    let status = Paragraph::new(view.status().to_string())
        .style(Style::default().fg(Color::Yellow))
        .block(Block::default().borders(Borders::ALL).title("Status"));
    frame.render_widget(status, chunks[0]);

    let toggle = Paragraph::new(format!("[s] {}", view.sort_toggle().label()))
        .style(Style::default().fg(Color::Gray));
    frame.render_widget(toggle, chunks[1]);

    let items: Vec<ListItem> = view.moves().iter().map(move_item).collect();
    let focused = app.focus() == Focus::History;
    let border_style = if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };
    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Moves")
                .border_style(border_style),
        )
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol("> ");

    let mut list_state = ListState::default();
    if focused {
        list_state.select(Some(app.list_cursor()));
    }
    frame.render_stateful_widget(list, chunks[2], &mut list_state);
}

fn move_item(entry: &MoveView) -> ListItem<'static> {
    let mut text = entry.label();
    if let Some(coordinates) = entry.coordinates() {
        text.push(' ');
        text.push_str(&coordinates);
    }
    // Terminal counterpart of the `moveSelected` class.
    let style = if entry.is_current() {
        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };
    ListItem::new(Line::from(Span::styled(text, style)))
}
