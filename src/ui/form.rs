//! The generation form screen

use ratatui::{
    layout::{Constraint, Layout, Position, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::state::{AppState, Field, TextField};
use crate::theme::Theme;

/// Draw the form screen
pub fn draw(frame: &mut Frame, state: &AppState, theme: &Theme) {
    let area = frame.area();
    frame.render_widget(
        Block::default().style(Style::default().bg(theme.bg_primary)),
        area,
    );

    let [title_area, concepts_area, level_area, count_area, status_area, _, hints_area] =
        Layout::vertical([
            Constraint::Length(2),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .areas(area);

    let title = Paragraph::new(Line::from(Span::styled(
        " quizforge - drill set generator",
        Style::default().fg(theme.accent).add_modifier(Modifier::BOLD),
    )));
    frame.render_widget(title, title_area);

    draw_text_field(
        frame,
        concepts_area,
        " Concepts (comma-separated) ",
        &state.concepts,
        state.focused == Field::Concepts,
        theme,
    );

    draw_level_selector(frame, level_area, state, theme);

    draw_text_field(
        frame,
        count_area,
        " Number of questions ",
        &state.count,
        state.focused == Field::Count,
        theme,
    );

    super::draw_status(frame, status_area, state, theme);
    super::draw_hints(
        frame,
        hints_area,
        "[Tab] Next Field    [\u{2190}/\u{2192}] Change Level    [Enter] Generate    [Esc] Quit",
        theme,
    );
}

/// Draw a bordered single-line text input
fn draw_text_field(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    field: &TextField,
    focused: bool,
    theme: &Theme,
) {
    let border_style = if focused {
        Style::default().fg(theme.border_focused)
    } else {
        Style::default().fg(theme.border)
    };

    let block = Block::default().title(title).borders(Borders::ALL).border_style(border_style);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let para = Paragraph::new(field.input.as_str()).style(Style::default().fg(theme.fg_primary));
    frame.render_widget(para, inner);

    if focused {
        frame.set_cursor_position(Position::new(inner.x + field.cursor as u16, inner.y));
    }
}

/// Draw the level selector, labeled `"<level> - <description>"`
fn draw_level_selector(frame: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
    let focused = state.focused == Field::Level;
    let border_style = if focused {
        Style::default().fg(theme.border_focused)
    } else {
        Style::default().fg(theme.border)
    };

    let block = Block::default().title(" Level ").borders(Borders::ALL).border_style(border_style);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let label_style = if focused {
        Style::default().fg(theme.accent).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.fg_secondary)
    };

    let line = Line::from(vec![
        Span::styled("\u{25C2} ", Style::default().fg(theme.fg_muted)),
        Span::styled(state.selected_level().label(), label_style),
        Span::styled(" \u{25B8}", Style::default().fg(theme.fg_muted)),
    ]);
    frame.render_widget(Paragraph::new(line), inner);
}
