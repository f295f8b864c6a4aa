//! Trace pane rendering

use crate::trace::{Playback, StepKind};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Padding, Paragraph},
    Frame,
};

/// Short label and color for a step kind
fn step_label(kind: StepKind) -> (&'static str, Color) {
    match kind {
        StepKind::Start => ("start", DEFAULT_THEME.primary),
        StepKind::HashComputed => ("hash", DEFAULT_THEME.key),
        StepKind::BucketLocated => ("bucket", DEFAULT_THEME.key),
        StepKind::Visit => ("visit", DEFAULT_THEME.fg),
        StepKind::Compare => ("compare", DEFAULT_THEME.fg),
        StepKind::Found => ("found", DEFAULT_THEME.success),
        StepKind::NotFound => ("missing", DEFAULT_THEME.error),
        StepKind::Insert => ("insert", DEFAULT_THEME.success),
        StepKind::Update => ("update", DEFAULT_THEME.secondary),
        StepKind::Delete => ("delete", DEFAULT_THEME.secondary),
        StepKind::Rejected => ("rejected", DEFAULT_THEME.error),
        StepKind::Emit => ("emit", DEFAULT_THEME.node),
        StepKind::Done => ("done", DEFAULT_THEME.primary),
    }
}

/// Render the revealed steps of the in-flight trace.
///
/// `scroll_offset` is clamped to the content; setting it to `usize::MAX`
/// follows the newest step.
pub fn render_trace_pane(
    frame: &mut Frame,
    area: Rect,
    playback: Option<&Playback>,
    scroll_offset: &mut usize,
) {
    let title = match playback {
        Some(p) => format!(" {} ", p.trace().title()),
        None => " Trace ".to_string(),
    };
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border_normal));

    let steps = playback.map(|p| p.revealed()).unwrap_or_default();
    if steps.is_empty() {
        let hint = if playback.is_some() {
            "(press → to reveal the first step)"
        } else {
            "(run a command to see its steps)"
        };
        let paragraph = Paragraph::new(hint)
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    }

    let block = block.padding(Padding::new(1, 0, 0, 0));
    let current = steps.len() - 1;
    let failed = playback.is_some_and(|p| !p.trace().outcome().success);

    let all_items: Vec<ListItem> = steps
        .iter()
        .enumerate()
        .map(|(i, step)| {
            let (label, mut color) = step_label(step.kind);
            if step.kind == StepKind::Done && failed {
                color = DEFAULT_THEME.error;
            }
            let line = Line::from(vec![
                Span::styled(
                    format!("{:>3} ", i + 1),
                    Style::default().fg(DEFAULT_THEME.comment),
                ),
                Span::styled(
                    format!("{:<9}", label),
                    Style::default().fg(color).add_modifier(Modifier::BOLD),
                ),
                Span::styled(step.note.clone(), Style::default().fg(DEFAULT_THEME.fg)),
            ]);
            let item = ListItem::new(line);
            if i == current {
                item.style(Style::default().bg(DEFAULT_THEME.current_line_bg))
            } else {
                item
            }
        })
        .collect();

    // Calculate visible range for scrolling
    let total_items = all_items.len();
    let visible_height = area.height.saturating_sub(2).max(1) as usize;

    if total_items > visible_height {
        let max_scroll = total_items - visible_height;
        *scroll_offset = (*scroll_offset).min(max_scroll);
    } else {
        *scroll_offset = 0;
    }

    let visible_items: Vec<ListItem> = all_items
        .into_iter()
        .skip(*scroll_offset)
        .take(visible_height)
        .collect();

    frame.render_widget(List::new(visible_items).block(block), area);
}
