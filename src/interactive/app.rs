//! TUI application state and logic

use crate::core::{GameError, PathError, Position};
use crate::game::{Game, Mode, Outcome, PathStatus, PathTracker, RoundState, Tick};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
        MouseButton, MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend, layout::Rect};
use std::cell::Cell;
use std::io;
use std::time::{Duration, Instant};

const POLL_INTERVAL: Duration = Duration::from_millis(250);
const TICK_INTERVAL: Duration = Duration::from_secs(1);

/// Application state
pub struct App {
    pub game: Game<StdRng>,
    pub mode: Mode,
    pub cursor: Position,
    pub tracker: PathTracker,
    pub messages: Vec<Message>,
    pub should_quit: bool,
    /// True between a mouse press on the board and its release
    pub dragging: bool,
    /// Screen area of the letter grid from the last frame, for mouse hit tests
    pub board_area: Cell<Rect>,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl App {
    #[must_use]
    pub fn new(game: Game<StdRng>, mode: Mode) -> Self {
        Self {
            game,
            mode,
            cursor: Position::new(0, 0),
            tracker: PathTracker::new(),
            messages: vec![Message {
                text: "Trace words through touching letters. Diagonals count.".to_string(),
                style: MessageStyle::Info,
            }],
            should_quit: false,
            dragging: false,
            board_area: Cell::new(Rect::default()),
        }
    }

    /// Deal the first board
    ///
    /// # Errors
    ///
    /// Returns an error if the configured dice cannot produce a board.
    pub fn start(&mut self) -> Result<(), GameError> {
        self.game.start(self.mode)?;
        self.announce_board();
        Ok(())
    }

    /// Move the cursor, clamped to the board
    pub fn move_cursor(&mut self, d_row: isize, d_col: isize) {
        let Some(board) = self.game.session().board() else {
            return;
        };
        let last = board.size().saturating_sub(1);
        self.cursor = Position::new(
            self.cursor.row.saturating_add_signed(d_row).min(last),
            self.cursor.col.saturating_add_signed(d_col).min(last),
        );
    }

    /// Add the cell under the cursor to the traced path
    ///
    /// Selecting the second-to-last cell again steps the path back.
    pub fn select_cursor(&mut self) {
        if self.game.session().state() != RoundState::InRound {
            return;
        }

        let session = self.game.session();
        let result = if self.tracker.path().is_empty() {
            self.tracker.begin(session, self.cursor)
        } else {
            self.tracker.extend(session, self.cursor)
        };

        if let Err(err) = result {
            self.report_path_error(err);
        }
    }

    /// Start a drag-traced word at `pos`
    pub fn press(&mut self, pos: Position) {
        if self.game.session().state() != RoundState::InRound {
            return;
        }

        self.cursor = pos;
        match self.tracker.begin(self.game.session(), pos) {
            Ok(_) => self.dragging = true,
            Err(err) => self.report_path_error(err),
        }
    }

    /// Extend the dragged path onto `pos`
    ///
    /// Passing over cells that don't touch the end of the path or are
    /// already on it is ignored, as is dragging back onto the same cell.
    pub fn drag(&mut self, pos: Position) {
        if !self.dragging || self.tracker.path().last() == Some(pos) {
            return;
        }

        self.cursor = pos;
        self.tracker.extend(self.game.session(), pos).ok();
    }

    /// Finish a drag and submit what was traced
    pub fn release(&mut self) {
        if self.dragging {
            self.dragging = false;
            self.submit();
        }
    }

    /// Submit the traced word
    pub fn submit(&mut self) {
        if self.tracker.path().is_empty() {
            return;
        }

        let word = self.tracker.spelled(self.game.session());
        match self.tracker.commit(self.game.session_mut()) {
            Outcome::NewlyFound(points) => {
                self.add_message(&format!("{word} +{points}"), MessageStyle::Success);
                if self.game.session().is_complete() {
                    self.game.session_mut().end_round();
                    self.add_message(
                        "Every word found! Press 'n' for a new board.",
                        MessageStyle::Success,
                    );
                }
            }
            Outcome::AlreadyFound => {
                self.add_message(&format!("{word} already found"), MessageStyle::Info);
            }
            Outcome::NotAWord => {
                self.add_message(&format!("{word} is not on this board"), MessageStyle::Error);
            }
        }
    }

    pub fn backtrack(&mut self) {
        self.tracker.backtrack(self.game.session()).ok();
    }

    pub fn clear_path(&mut self) {
        self.tracker.clear();
        self.dragging = false;
    }

    pub fn new_board(&mut self) {
        match self.game.new_board() {
            Ok(true) => {
                self.tracker.clear();
                self.cursor = Position::new(0, 0);
                self.announce_board();
            }
            Ok(false) => self.add_message(
                "The board is fixed until the timer runs out",
                MessageStyle::Error,
            ),
            Err(err) => self.add_message(&err.to_string(), MessageStyle::Error),
        }
    }

    /// Award every remaining word (endless mode only)
    pub fn reveal(&mut self) {
        if self.game.session().mode() != Mode::Endless {
            self.add_message("Reveal is only available in endless mode", MessageStyle::Error);
            return;
        }

        let revealed = self.game.session_mut().reveal_all();
        if revealed.is_empty() {
            self.add_message("Nothing left to reveal", MessageStyle::Info);
        } else {
            let points: u32 = revealed.iter().map(|(_, p)| p).sum();
            self.add_message(
                &format!("Revealed {} words for {points} points", revealed.len()),
                MessageStyle::Info,
            );
        }
        if self.game.session().is_complete() {
            self.game.session_mut().end_round();
        }
        self.tracker.clear();
    }

    pub fn end_round(&mut self) {
        if self.game.session().state() == RoundState::InRound {
            self.game.session_mut().end_round();
            self.tracker.clear();
            self.add_message(
                &format!("Round over. Final score {}", self.game.session().score()),
                MessageStyle::Info,
            );
        }
    }

    /// Advance the round clock by one second
    pub fn tick(&mut self) {
        let was_running = self.game.session().state() == RoundState::InRound;
        if self.game.session_mut().tick() == Tick::TimedOut && was_running {
            self.tracker.clear();
            self.add_message(
                &format!(
                    "Time's up! Final score {}. Press 'n' to play again.",
                    self.game.session().score()
                ),
                MessageStyle::Success,
            );
        }
    }

    /// How the traced path should be drawn, if anything is traced
    #[must_use]
    pub fn path_status(&self) -> Option<PathStatus> {
        let path = self.tracker.path();
        (!path.is_empty()).then(|| self.game.session().classify_path(path))
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }

    fn report_path_error(&mut self, err: PathError) {
        let text = match err {
            PathError::NotAdjacent => "That letter doesn't touch the last one".to_string(),
            PathError::AlreadyVisited => "Each letter can be used once per word".to_string(),
            other => other.to_string(),
        };
        self.add_message(&text, MessageStyle::Error);
    }

    fn announce_board(&mut self) {
        let session = self.game.session();
        let text = match session.time_remaining() {
            Some(seconds) => format!(
                "New board: {} words to find in {seconds}s",
                session.solutions().len()
            ),
            None => format!("New board: {} words to find", session.solutions().len()),
        };
        self.add_message(&text, MessageStyle::Info);
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(mut app: App) -> Result<()> {
    app.start()?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    let mut last_tick = Instant::now();

    loop {
        terminal.draw(|f| super::rendering::ui(f, app))?;

        if event::poll(POLL_INTERVAL)? {
            match event::read()? {
                // Only process key press events (fixes Windows double-input bug)
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    handle_key(app, key.code, key.modifiers);
                }
                Event::Mouse(mouse) => handle_mouse(app, mouse),
                _ => {}
            }
        }

        while last_tick.elapsed() >= TICK_INTERVAL {
            last_tick += TICK_INTERVAL;
            app.tick();
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

fn handle_key(app: &mut App, code: KeyCode, modifiers: KeyModifiers) {
    match code {
        KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
            app.should_quit = true;
        }
        KeyCode::Char('q') => app.should_quit = true,
        KeyCode::Up => app.move_cursor(-1, 0),
        KeyCode::Down => app.move_cursor(1, 0),
        KeyCode::Left => app.move_cursor(0, -1),
        KeyCode::Right => app.move_cursor(0, 1),
        KeyCode::Char(' ') => app.select_cursor(),
        KeyCode::Enter => app.submit(),
        KeyCode::Backspace => app.backtrack(),
        KeyCode::Esc => app.clear_path(),
        KeyCode::Char('n') => app.new_board(),
        KeyCode::Char('r') => app.reveal(),
        KeyCode::Char('e') => app.end_round(),
        _ => {}
    }
}

fn handle_mouse(app: &mut App, mouse: MouseEvent) {
    let cell = app.game.session().board().and_then(|board| {
        super::rendering::cell_at(app.board_area.get(), board.size(), mouse.column, mouse.row)
    });

    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            if let Some(pos) = cell {
                app.press(pos);
            }
        }
        MouseEventKind::Drag(MouseButton::Left) => {
            if let Some(pos) = cell {
                app.drag(pos);
            }
        }
        MouseEventKind::Up(MouseButton::Left) => app.release(),
        _ => {}
    }
}
