use crate::config::AppConfig;
use crate::game::{GameSession, COLS};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use log::warn;
use ratatui::{backend::Backend, Terminal};
use std::io;
use std::time::Duration;

pub struct App {
    session: GameSession,
    selected_column: usize,
    poll_interval: Duration,
    should_quit: bool,
}

impl App {
    pub fn new(config: &AppConfig) -> Self {
        let mut session = GameSession::new(config.game.starter);
        session.new_game();
        App {
            session,
            selected_column: config.ui.initial_column.min(COLS - 1),
            poll_interval: Duration::from_millis(config.ui.poll_interval_ms),
            should_quit: false,
        }
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()>
    where
        B::Error: Into<io::Error>,
    {
        loop {
            terminal
                .draw(|f| self.render(f))
                .map_err(Into::<io::Error>::into)?;

            if self.should_quit {
                break;
            }

            self.handle_events()?;
        }
        Ok(())
    }

    /// Handle keyboard events
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(self.poll_interval)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key(key);
                }
            }
        }
        Ok(())
    }

    /// Handle key press
    fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Left => {
                self.selected_column = self.selected_column.saturating_sub(1);
            }
            KeyCode::Right => {
                if self.selected_column + 1 < COLS {
                    self.selected_column += 1;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.click_column();
            }
            KeyCode::Char('n') => {
                self.session.new_game();
            }
            KeyCode::Char('r') => {
                self.session.advance_round();
            }
            KeyCode::Char('s') => {
                let starter = self.session.starter().other();
                self.session.choose_starter(starter);
            }
            _ => {}
        }
    }

    /// Same gesture as clicking a board cell
    fn click_column(&mut self) {
        if let Err(err) = self.session.select_column(self.selected_column) {
            warn!("column {} not played: {err}", self.selected_column);
        }
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        super::game_view::render(frame, &self.session, self.selected_column);
    }
}
