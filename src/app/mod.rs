//! Application loop and event handling

pub mod state;

use std::io::{self, Stdout};

use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use crate::bank::bank;
use crate::clipboard::{self, COPY_FALLBACK_MESSAGE, COPY_SUCCESS_MESSAGE};
use crate::config::Config;
use crate::form::{DrillRequest, FormError};
use crate::render;
use crate::ui;
use state::{AppState, Field, Screen};

/// The main application
pub struct App {
    /// Application configuration
    config: Config,

    /// Current application state
    state: AppState,

    /// Terminal backend
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl App {
    /// Create a new application instance
    pub fn new(config: Config) -> Result<Self> {
        let terminal = Self::setup_terminal()?;
        let state = AppState::from_config(&config);

        Ok(Self { config, state, terminal })
    }

    /// Set up the terminal for TUI rendering
    fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        Ok(terminal)
    }

    /// Restore the terminal to its original state
    fn restore_terminal(&mut self) -> Result<()> {
        disable_raw_mode()?;
        execute!(self.terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
        self.terminal.show_cursor()?;
        Ok(())
    }

    /// Run the application main loop
    pub fn run(&mut self) -> Result<()> {
        // Set up panic hook to restore terminal
        let original_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |panic_info| {
            let _ = disable_raw_mode();
            let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
            original_hook(panic_info);
        }));

        loop {
            self.terminal.draw(|frame| {
                ui::draw(frame, &mut self.state);
            })?;

            if event::poll(std::time::Duration::from_millis(16))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        match self.handle_key(key.code) {
                            Ok(true) => break, // Exit requested
                            Ok(false) => {}    // Continue
                            Err(e) => {
                                tracing::error!("Error handling key: {}", e);
                                self.state.status.set_error(e.to_string());
                            }
                        }
                    }
                }
            }
        }

        self.restore_terminal()?;
        Ok(())
    }

    /// Handle a key press, returns true if should exit
    fn handle_key(&mut self, key: KeyCode) -> Result<bool> {
        match self.state.screen {
            Screen::Form => self.handle_form_key(key),
            Screen::Results => self.handle_results_key(key),
        }
    }

    /// Keys on the form screen
    fn handle_form_key(&mut self, key: KeyCode) -> Result<bool> {
        match key {
            KeyCode::Esc => return Ok(true),
            KeyCode::Tab | KeyCode::Down => {
                self.state.focused = self.state.focused.next();
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.state.focused = self.state.focused.prev();
            }
            KeyCode::Enter => self.submit(),
            _ => match self.state.focused {
                Field::Level => match key {
                    KeyCode::Left | KeyCode::Char('h') => self.state.prev_level(),
                    KeyCode::Right | KeyCode::Char('l') | KeyCode::Char(' ') => {
                        self.state.next_level()
                    }
                    _ => {}
                },
                Field::Concepts => Self::edit(&mut self.state.concepts, key),
                Field::Count => Self::edit(&mut self.state.count, key),
            },
        }
        Ok(false)
    }

    /// Keys on the results screen
    fn handle_results_key(&mut self, key: KeyCode) -> Result<bool> {
        let vim = self.config.vim_mode;
        match key {
            KeyCode::Char('q') => return Ok(true),
            KeyCode::Esc => {
                // Back to the form with inputs intact
                self.state.screen = Screen::Form;
                self.state.status.clear();
            }
            KeyCode::Char('y') | KeyCode::Char('c') => self.copy_results(),
            KeyCode::Down => self.scroll_by(1),
            KeyCode::Up => self.scroll_by(-1),
            KeyCode::Char('j') if vim => self.scroll_by(1),
            KeyCode::Char('k') if vim => self.scroll_by(-1),
            KeyCode::PageDown => self.scroll_by(10),
            KeyCode::PageUp => self.scroll_by(-10),
            KeyCode::Char('g') | KeyCode::Home => self.state.results.scroll_offset = 0,
            KeyCode::Char('G') | KeyCode::End => {
                self.state.results.scroll_offset = self.state.results.max_scroll()
            }
            _ => {}
        }
        Ok(false)
    }

    /// Apply an editing key to a text field
    fn edit(field: &mut state::TextField, key: KeyCode) {
        match key {
            KeyCode::Char(c) => field.insert_char(c),
            KeyCode::Backspace => field.delete_char(),
            KeyCode::Left => field.move_left(),
            KeyCode::Right => field.move_right(),
            KeyCode::Home => field.move_start(),
            KeyCode::End => field.move_end(),
            _ => {}
        }
    }

    /// Validate the form and generate a drill set
    fn submit(&mut self) {
        self.state.status.clear();

        let request = DrillRequest::from_fields(
            &self.state.concepts.input,
            self.state.selected_level(),
            &self.state.count.input,
        );

        match request {
            Ok(request) => {
                let records = bank().generate(
                    &request.concepts,
                    request.level.name(),
                    request.count,
                );
                tracing::info!(
                    level = %request.level,
                    count = records.len(),
                    "generated drill set"
                );
                self.state.results.records = records;
                self.state.results.level = Some(request.level);
                self.state.results.scroll_offset = 0;
                self.state.screen = Screen::Results;
            }
            Err(err @ (FormError::NoConcepts | FormError::InvalidCount)) => {
                self.state.status.set_error(err.to_string());
            }
            Err(err) => {
                // Unreachable through the selector, but surface it anyway
                self.state.status.set_error(err.to_string());
            }
        }
    }

    /// Copy the current set to the system clipboard
    fn copy_results(&mut self) {
        let text = render::clipboard_text(&self.state.results.records);
        match clipboard::copy_text(&text) {
            Ok(()) => self.state.status.set_message(COPY_SUCCESS_MESSAGE),
            Err(e) => {
                tracing::warn!("clipboard copy failed: {}", e);
                self.state.status.set_error(COPY_FALLBACK_MESSAGE);
            }
        }
    }

    /// Scroll the results view, clamped to the rendered content
    fn scroll_by(&mut self, delta: i32) {
        let results = &mut self.state.results;
        results.scroll_offset = results.scroll_offset.saturating_add_signed(delta as isize);
        results.clamp_scroll();
    }
}

impl Drop for App {
    fn drop(&mut self) {
        let _ = self.restore_terminal();
    }
}
