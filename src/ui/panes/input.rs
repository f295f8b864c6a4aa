//! Command prompt rendering

use crate::command::StructureKind;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the command prompt. An empty prompt shows the usage for `kind`.
pub fn render_input_pane(frame: &mut Frame, area: Rect, kind: StructureKind, input: &str) {
    let block = Block::default()
        .title(format!(" {} ", kind))
        .borders(Borders::ALL)
        .border_style(
            Style::default()
                .fg(DEFAULT_THEME.border_focused)
                .add_modifier(Modifier::BOLD),
        );

    let prompt = Span::styled("› ", Style::default().fg(DEFAULT_THEME.primary));
    let line = if input.is_empty() {
        Line::from(vec![
            prompt,
            Span::styled(kind.usage(), Style::default().fg(DEFAULT_THEME.comment)),
        ])
    } else {
        Line::from(vec![
            prompt,
            Span::styled(input.to_string(), Style::default().fg(DEFAULT_THEME.fg)),
            Span::styled("█", Style::default().fg(DEFAULT_THEME.comment)),
        ])
    };

    frame.render_widget(Paragraph::new(line).block(block), area);
}
