//! The generated-set results screen

use ratatui::{
    layout::{Constraint, Layout},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use textwrap::wrap;

use crate::app::state::AppState;
use crate::render;
use crate::theme::Theme;

/// Draw the results screen
pub fn draw(frame: &mut Frame, state: &mut AppState, theme: &Theme) {
    let area = frame.area();
    frame.render_widget(
        Block::default().style(Style::default().bg(theme.bg_primary)),
        area,
    );

    let [list_area, status_area, hints_area] = Layout::vertical([
        Constraint::Min(0),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(area);

    let title = match state.results.level {
        Some(level) => format!(" Generated Q&A Set ({}) ", level),
        None => " Generated Q&A Set ".to_string(),
    };

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border_focused));
    let inner = block.inner(list_area);
    frame.render_widget(block, list_area);

    let wrap_width = inner.width.saturating_sub(2).max(20) as usize;
    let mut lines: Vec<Line> = Vec::new();

    if state.results.records.is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "No questions generated.",
            Style::default().fg(theme.fg_muted),
        )));
    }

    for qa in render::render(&state.results.records) {
        let question_label = format!("Question {}: ", qa.ordinal);
        for (i, piece) in wrap(&qa.question, wrap_width).iter().enumerate() {
            if i == 0 {
                lines.push(Line::from(vec![
                    Span::styled(
                        question_label.clone(),
                        Style::default().fg(theme.accent).add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(piece.to_string(), Style::default().fg(theme.fg_primary)),
                ]));
            } else {
                lines.push(Line::from(Span::styled(
                    piece.to_string(),
                    Style::default().fg(theme.fg_primary),
                )));
            }
        }
        for (i, piece) in wrap(&qa.answer_hint, wrap_width).iter().enumerate() {
            let label = if i == 0 { "Answer Hint: " } else { "" };
            lines.push(Line::from(vec![
                Span::styled(label, Style::default().fg(theme.success)),
                Span::styled(piece.to_string(), Style::default().fg(theme.fg_secondary)),
            ]));
        }
        lines.push(Line::from(""));
    }

    // Scroll bookkeeping for clamping in the key handler
    state.results.total_lines = lines.len();
    state.results.visible_height = inner.height as usize;
    state.results.clamp_scroll();

    let para = Paragraph::new(lines).scroll((state.results.scroll_offset as u16, 0));
    frame.render_widget(para, inner);

    super::draw_status(frame, status_area, state, theme);
    super::draw_hints(
        frame,
        hints_area,
        "[y] Copy All Q&A    [j/k] Scroll    [Esc] Back    [q] Quit",
        theme,
    );
}
