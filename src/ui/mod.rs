//! UI rendering components

pub mod form;
pub mod results;

use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    text::Line,
    widgets::Paragraph,
    Frame,
};

use crate::app::state::{AppState, Screen};
use crate::theme::Theme;

/// Main draw function
pub fn draw(frame: &mut Frame, state: &mut AppState) {
    let theme = Theme::default();

    match state.screen {
        Screen::Form => form::draw(frame, state, &theme),
        Screen::Results => results::draw(frame, state, &theme),
    }
}

/// Draw the status line into `area`
pub fn draw_status(frame: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
    let Some(ref message) = state.status.message else {
        return;
    };

    let style = if state.status.is_error {
        Style::default().fg(theme.error)
    } else {
        Style::default().fg(theme.success)
    };

    let para = Paragraph::new(Line::styled(message.as_str(), style)).alignment(Alignment::Left);
    frame.render_widget(para, area);
}

/// Draw a muted key-hint footer into `area`
pub fn draw_hints(frame: &mut Frame, area: Rect, hints: &str, theme: &Theme) {
    let para = Paragraph::new(Line::styled(hints, Style::default().fg(theme.fg_muted)))
        .alignment(Alignment::Center);
    frame.render_widget(para, area);
}
