//! TUI rendering with ratatui
//!
//! Board, path highlighting and round progress for the word grid game.

use super::app::{App, MessageStyle};
use crate::core::Position;
use crate::game::{Mode, PathStatus, RoundState};
use crate::output::formatters::{format_score, word_placeholder};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(12),   // Main content
            Constraint::Length(3), // Current word
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(55), // Board and messages
            Constraint::Percentage(45), // Progress and words
        ])
        .split(chunks[1]);

    render_main_panel(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_current_word(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let title = match app.mode {
        Mode::Timed => "🔤 WORD GRID - Timed",
        Mode::Endless => "🔤 WORD GRID - Endless",
    };
    let header = Paragraph::new(title)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_main_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(10),   // Board
            Constraint::Length(7), // Messages
        ])
        .split(area);

    render_board(f, app, chunks[0]);
    render_messages(f, app, chunks[1]);
}

// Grid layout inside the board block, shared by drawing and mouse hit tests
const TOP_PAD: u16 = 1;
const ROW_STRIDE: u16 = 2;
const LEFT_PAD: u16 = 2;
const CELL_WIDTH: u16 = 3;
const CELL_STRIDE: u16 = CELL_WIDTH + 1;

/// The board cell drawn at screen position `(column, row)`, if any
///
/// `area` is the inside of the board block; gaps between cells hit nothing.
pub(super) fn cell_at(area: Rect, size: usize, column: u16, row: u16) -> Option<Position> {
    let dx = column.checked_sub(area.x)?.checked_sub(LEFT_PAD)?;
    let dy = row.checked_sub(area.y)?.checked_sub(TOP_PAD)?;
    if dx % CELL_STRIDE >= CELL_WIDTH || dy % ROW_STRIDE != 0 {
        return None;
    }

    let pos = Position::new(usize::from(dy / ROW_STRIDE), usize::from(dx / CELL_STRIDE));
    (pos.row < size && pos.col < size).then_some(pos)
}

const fn status_color(status: PathStatus) -> Color {
    match status {
        PathStatus::Valid => Color::Green,
        PathStatus::Potential => Color::Yellow,
        PathStatus::Dead => Color::Red,
    }
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(" Board ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded);

    app.board_area.set(block.inner(area));

    let Some(board) = app.game.session().board() else {
        f.render_widget(Paragraph::new("No board yet").block(block), area);
        return;
    };

    let path = app.tracker.path();
    let path_color = app.path_status().map_or(Color::White, status_color);
    let ended = app.game.session().state() == RoundState::Ended;

    let pad = |width: u16| " ".repeat(usize::from(width));
    let mut lines = vec![Line::from(""); usize::from(TOP_PAD)];
    for (row, letters) in board.rows().enumerate() {
        let mut spans = vec![Span::raw(pad(LEFT_PAD))];
        for (col, letter) in letters.iter().enumerate() {
            let pos = Position::new(row, col);
            let mut style = if path.contains(pos) {
                Style::default()
                    .fg(Color::Black)
                    .bg(path_color)
                    .add_modifier(Modifier::BOLD)
            } else if ended {
                Style::default().fg(Color::DarkGray)
            } else {
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
            };
            if pos == app.cursor && !ended {
                style = style.add_modifier(Modifier::REVERSED);
            }
            if path.last() == Some(pos) {
                style = style.add_modifier(Modifier::UNDERLINED);
            }
            spans.push(Span::styled(format!(" {letter} "), style));
            spans.push(Span::raw(pad(CELL_STRIDE - CELL_WIDTH)));
        }
        lines.push(Line::from(spans));
        for _ in 1..ROW_STRIDE {
            lines.push(Line::from(""));
        }
    }

    let paragraph = Paragraph::new(lines).block(block);
    f.render_widget(paragraph, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Found gauge
            Constraint::Min(5),    // Word list
        ])
        .split(area);

    render_progress(f, app, chunks[0]);
    render_words(f, app, chunks[1]);
}

fn render_progress(f: &mut Frame, app: &App, area: Rect) {
    let session = app.game.session();
    let found = session.found_count();
    let total = session.solutions().len();
    let ratio = if total > 0 {
        found as f64 / total as f64
    } else {
        0.0
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Words Found ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(Color::Cyan))
        .ratio(ratio.clamp(0.0, 1.0))
        .label(format!("{found}/{total} words"));

    f.render_widget(gauge, area);
}

fn render_words(f: &mut Frame, app: &App, area: Rect) {
    let session = app.game.session();
    // Endless mode shows blanks for the words still hidden.
    let show_hidden = session.mode() == Mode::Endless || session.state() == RoundState::Ended;

    let items: Vec<ListItem> = session
        .solutions()
        .by_length_desc()
        .into_iter()
        .filter_map(|word| {
            if session.is_found(word) {
                Some(ListItem::new(word.to_string()).style(Style::default().fg(Color::Green)))
            } else if show_hidden {
                let text = if session.state() == RoundState::Ended {
                    word.to_string()
                } else {
                    word_placeholder(word)
                };
                Some(ListItem::new(text).style(Style::default().fg(Color::DarkGray)))
            } else {
                None
            }
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .title(" Words ")
            .borders(Borders::ALL)
            .style(Style::default().fg(Color::Green)),
    );

    f.render_widget(list, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_current_word(f: &mut Frame, app: &App, area: Rect) {
    let spelled = app.tracker.spelled(app.game.session());
    let color = app.path_status().map_or(Color::Yellow, status_color);

    let input = Paragraph::new(spelled)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .title(" Current Word | Space: add letter  Enter: submit ")
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let session = app.game.session();
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(20),
            Constraint::Percentage(20),
            Constraint::Percentage(60),
        ])
        .split(area);

    let score = Paragraph::new(format!("Score: {}", format_score(session.score())))
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Yellow));
    f.render_widget(score, chunks[0]);

    let clock = match (session.state(), session.time_remaining()) {
        (RoundState::Ended, _) => "Time: over".to_string(),
        (_, Some(seconds)) => format!("Time: {seconds}s"),
        (_, None) => "Time: ∞".to_string(),
    };
    let clock_style = match session.time_remaining() {
        Some(seconds) if seconds <= 10 => Style::default().fg(Color::Red),
        _ => Style::default().fg(Color::Cyan),
    };
    f.render_widget(
        Paragraph::new(clock)
            .alignment(Alignment::Center)
            .style(clock_style),
        chunks[1],
    );

    let help_text = match session.mode() {
        Mode::Endless => "←↑↓→ move | Bksp: undo | Esc: clear | n: new | r: reveal | q: quit",
        Mode::Timed if session.state() == RoundState::Ended => {
            "n: new board | q: quit"
        }
        Mode::Timed => "←↑↓→ move | Bksp: undo | Esc: clear | e: end round | q: quit",
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cell_hits_follow_grid_layout() {
        let area = Rect::new(10, 5, 30, 12);

        assert_eq!(cell_at(area, 4, 12, 6), Some(Position::new(0, 0)));
        assert_eq!(cell_at(area, 4, 14, 6), Some(Position::new(0, 0)));
        assert_eq!(cell_at(area, 4, 16, 8), Some(Position::new(1, 1)));
        assert_eq!(cell_at(area, 4, 24, 12), Some(Position::new(3, 3)));
    }

    #[test]
    fn gaps_and_margins_hit_nothing() {
        let area = Rect::new(10, 5, 30, 12);

        assert_eq!(cell_at(area, 4, 11, 6), None); // left pad
        assert_eq!(cell_at(area, 4, 15, 6), None); // between columns
        assert_eq!(cell_at(area, 4, 12, 5), None); // top pad
        assert_eq!(cell_at(area, 4, 12, 7), None); // between rows
        assert_eq!(cell_at(area, 4, 28, 6), None); // past the last column
        assert_eq!(cell_at(area, 4, 12, 14), None); // past the last row
        assert_eq!(cell_at(area, 4, 3, 2), None); // outside the block
    }
}
