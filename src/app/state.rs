//! Application state definitions

use crate::bank::Level;
use crate::config::Config;
use crate::generate::GeneratedQa;

/// Which screen is currently displayed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Screen {
    #[default]
    Form,
    Results,
}

/// Which form field is currently focused
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Field {
    #[default]
    Concepts,
    Level,
    Count,
}

impl Field {
    /// Next field in tab order
    pub fn next(self) -> Field {
        match self {
            Field::Concepts => Field::Level,
            Field::Level => Field::Count,
            Field::Count => Field::Concepts,
        }
    }

    /// Previous field in tab order
    pub fn prev(self) -> Field {
        match self {
            Field::Concepts => Field::Count,
            Field::Level => Field::Concepts,
            Field::Count => Field::Level,
        }
    }
}

/// A single-line text input with character-indexed cursor handling
#[derive(Debug, Clone, Default)]
pub struct TextField {
    /// Input buffer
    pub input: String,
    /// Cursor position as a character index
    pub cursor: usize,
}

impl TextField {
    /// Create a field pre-filled with `text`, cursor at the end
    pub fn with_text(text: impl Into<String>) -> Self {
        let input = text.into();
        let cursor = input.chars().count();
        Self { input, cursor }
    }

    /// Convert character index to byte index
    fn char_to_byte_index(&self, char_idx: usize) -> usize {
        self.input.char_indices().nth(char_idx).map(|(i, _)| i).unwrap_or(self.input.len())
    }

    /// Get the number of characters in input
    fn char_count(&self) -> usize {
        self.input.chars().count()
    }

    /// Insert a character at cursor
    pub fn insert_char(&mut self, c: char) {
        let byte_idx = self.char_to_byte_index(self.cursor);
        self.input.insert(byte_idx, c);
        self.cursor += 1;
    }

    /// Delete character before cursor
    pub fn delete_char(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            let byte_idx = self.char_to_byte_index(self.cursor);
            self.input.remove(byte_idx);
        }
    }

    /// Move cursor left
    pub fn move_left(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
        }
    }

    /// Move cursor right
    pub fn move_right(&mut self) {
        if self.cursor < self.char_count() {
            self.cursor += 1;
        }
    }

    /// Move cursor to start
    pub fn move_start(&mut self) {
        self.cursor = 0;
    }

    /// Move cursor to end
    pub fn move_end(&mut self) {
        self.cursor = self.char_count();
    }
}

/// Status line shown under the form and results
#[derive(Debug, Clone, Default)]
pub struct StatusLine {
    /// Message to display, if any
    pub message: Option<String>,
    /// Whether the message is an error
    pub is_error: bool,
}

impl StatusLine {
    /// Set an informational message
    pub fn set_message(&mut self, msg: impl Into<String>) {
        self.message = Some(msg.into());
        self.is_error = false;
    }

    /// Set an error message
    pub fn set_error(&mut self, msg: impl Into<String>) {
        self.message = Some(msg.into());
        self.is_error = true;
    }

    /// Clear the message
    pub fn clear(&mut self) {
        self.message = None;
        self.is_error = false;
    }
}

/// State for the results view
#[derive(Debug, Clone, Default)]
pub struct ResultsState {
    /// The generated set currently on screen (source of truth for copying)
    pub records: Vec<GeneratedQa>,
    /// Level the set was generated at (for the title)
    pub level: Option<Level>,
    /// Current scroll position (lines from top)
    pub scroll_offset: usize,
    /// Total rendered lines (updated on render)
    pub total_lines: usize,
    /// Visible height in lines (updated on render)
    pub visible_height: usize,
}

impl ResultsState {
    /// Get the maximum allowed scroll offset
    pub fn max_scroll(&self) -> usize {
        self.total_lines.saturating_sub(self.visible_height)
    }

    /// Clamp scroll offset to valid range
    pub fn clamp_scroll(&mut self) {
        let max = self.max_scroll();
        if self.scroll_offset > max {
            self.scroll_offset = max;
        }
    }
}

/// Full application state
#[derive(Debug)]
pub struct AppState {
    /// Current screen
    pub screen: Screen,

    /// Concepts input field
    pub concepts: TextField,

    /// Index into [`Level::ALL`] for the selector
    pub level_index: usize,

    /// Count input field
    pub count: TextField,

    /// Currently focused form field
    pub focused: Field,

    /// Results view state
    pub results: ResultsState,

    /// Status line
    pub status: StatusLine,
}

impl AppState {
    /// Build initial state from user configuration
    pub fn from_config(config: &Config) -> Self {
        let level_index = Level::ALL
            .iter()
            .position(|level| *level == config.default_level)
            .unwrap_or_default();

        Self {
            screen: Screen::default(),
            concepts: TextField::default(),
            level_index,
            count: TextField::with_text(config.default_count.to_string()),
            focused: Field::default(),
            results: ResultsState::default(),
            status: StatusLine::default(),
        }
    }

    /// The level currently shown by the selector
    pub fn selected_level(&self) -> Level {
        Level::ALL[self.level_index]
    }

    /// Cycle the level selector forward
    pub fn next_level(&mut self) {
        self.level_index = (self.level_index + 1) % Level::ALL.len();
    }

    /// Cycle the level selector backward
    pub fn prev_level(&mut self) {
        self.level_index = (self.level_index + Level::ALL.len() - 1) % Level::ALL.len();
    }
}
