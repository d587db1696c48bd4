use crate::game::{Board, GamePhase, GameSession, GameState, PieceColor, PlayerId, COLS};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render(frame: &mut Frame, session: &GameSession, selected_column: usize) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Board
            Constraint::Length(3), // Message
            Constraint::Length(4), // Controls
        ])
        .split(frame.area());

    let state = session.state();
    render_header(frame, state, session.starter(), chunks[0]);
    render_board(frame, state, selected_column, chunks[1]);
    render_message(frame, state, chunks[2]);
    render_controls(frame, chunks[3]);
}

fn color_style(color: PieceColor) -> Color {
    match color {
        PieceColor::Red => Color::Red,
        PieceColor::Yellow => Color::Yellow,
    }
}

fn render_header(frame: &mut Frame, state: &GameState, starter: PieceColor, area: Rect) {
    let player = state.current_player();
    let color = state.color_of(player);

    let status = match state.phase() {
        GamePhase::AwaitingStart => format!("Press N to start  |  Starter: {starter}"),
        GamePhase::InProgress => format!(
            "Current Player: {} ({})  |  Starter: {starter}",
            player.name(),
            color
        ),
        GamePhase::Over => format!("Round Over  |  Starter: {starter}"),
    };

    let header = Paragraph::new(status)
        .style(
            Style::default()
                .fg(color_style(color))
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Connect Four"));

    frame.render_widget(header, area);
}

fn render_board(frame: &mut Frame, state: &GameState, selected_column: usize, area: Rect) {
    let board: &Board = state.board();
    let mut lines = Vec::new();

    // Column numbers with selection indicator
    let mut col_line = vec![Span::raw("   ")];
    for col in 0..COLS {
        if col == selected_column {
            col_line.push(Span::styled(
                format!(" {} ", col + 1),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            ));
        } else {
            col_line.push(Span::raw(format!(" {} ", col + 1)));
        }
    }
    col_line.push(Span::raw("  "));
    lines.push(Line::from(col_line));

    lines.push(Line::from("  ╔══════════════════════╗"));

    for row in board.rows() {
        let mut row_spans = vec![Span::raw("  ║")];
        for &cell in row {
            let span = match PlayerId::from_cell(cell) {
                Some(owner) => Span::styled(
                    " ● ",
                    Style::default().fg(color_style(state.color_of(owner))),
                ),
                None => Span::styled(" . ", Style::default().fg(Color::DarkGray)),
            };
            row_spans.push(span);
        }
        row_spans.push(Span::raw(" ║"));
        lines.push(Line::from(row_spans));
    }

    lines.push(Line::from("  ╚══════════════════════╝"));

    let widget = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(widget, area);
}

fn render_message(frame: &mut Frame, state: &GameState, area: Rect) {
    let text = match state.phase() {
        GamePhase::Over => format!("{}  (Enter for next round)", state.message()),
        _ => state.message().to_string(),
    };
    let msg_widget = Paragraph::new(text)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(msg_widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let line1 = Line::from("←/→: Move  |  Enter: Drop  |  Q: Quit");
    let line2 = Line::from("N: New Game  |  R: Next Round  |  S: Switch Starter");

    let controls = Paragraph::new(vec![line1, line2])
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Controls"));

    frame.render_widget(controls, area);
}
