//! Structure pane rendering
//!
//! Draws whichever [`Snapshot`] is currently visible, with the element the
//! current step points at picked out in the highlight color.
//!
//! # Layouts
//!
//! - Linked list and queue: one row of boxed values joined by arrows
//! - Stack: a vertical column, top first
//! - Tree: nodes on a character grid placed by [`tree_layout`]
//! - Hash table: one row per bucket with its chain
//! - Graph: one row per vertex with its neighbors

use crate::command::StructureKind;
use crate::structures::Number;
use crate::trace::{BucketView, Locator, Snapshot, TreeView};
use crate::ui::layout::tree_layout;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Render the structure pane
pub fn render_structure_pane(
    frame: &mut Frame,
    area: Rect,
    kind: StructureKind,
    snapshot: &Snapshot,
    highlight: Option<&Locator>,
) {
    let block = Block::default()
        .title(format!(" {} ({} items) ", kind, snapshot.item_count()))
        .borders(Borders::ALL)
        .border_style(
            Style::default()
                .fg(DEFAULT_THEME.border_focused)
                .add_modifier(Modifier::BOLD),
        );

    let lines = match snapshot {
        Snapshot::LinkedList { values } => list_lines(values, highlight),
        Snapshot::Stack { values } => stack_lines(values, highlight),
        Snapshot::Queue { values } => queue_lines(values, highlight),
        Snapshot::Tree(tree) => tree_lines(tree, highlight),
        Snapshot::HashTable { buckets } => table_lines(buckets, highlight),
        Snapshot::Graph { vertices, edges } => graph_lines(vertices, edges, highlight),
    };

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

fn value_style(lit: bool) -> Style {
    if lit {
        Style::default()
            .bg(DEFAULT_THEME.highlight)
            .fg(Color::Black)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.node)
    }
}

fn link_style() -> Style {
    Style::default().fg(DEFAULT_THEME.link)
}

fn empty_line(text: &'static str) -> Vec<Line<'static>> {
    vec![Line::from(Span::styled(
        text,
        Style::default().fg(DEFAULT_THEME.comment),
    ))]
}

fn lit_position(highlight: Option<&Locator>) -> Option<usize> {
    match highlight {
        Some(Locator::Position(i)) => Some(*i),
        _ => None,
    }
}

fn list_lines(values: &[Number], highlight: Option<&Locator>) -> Vec<Line<'static>> {
    if values.is_empty() {
        return empty_line("(empty list)");
    }
    let lit = lit_position(highlight);
    let mut spans = vec![Span::styled("head ", link_style())];
    for (i, value) in values.iter().enumerate() {
        spans.push(Span::styled(format!("[{}]", value), value_style(lit == Some(i))));
        spans.push(Span::styled(" → ", link_style()));
    }
    spans.push(Span::styled("null", link_style()));
    vec![Line::from(spans)]
}

fn stack_lines(values: &[Number], highlight: Option<&Locator>) -> Vec<Line<'static>> {
    if values.is_empty() {
        return empty_line("(empty stack)");
    }
    let lit = lit_position(highlight);
    let width = values
        .iter()
        .map(|v| v.to_string().len())
        .max()
        .unwrap_or(1)
        + 2;

    let mut lines = Vec::with_capacity(values.len() + 1);
    for (i, value) in values.iter().enumerate().rev() {
        let mut spans = vec![
            Span::styled("│", link_style()),
            Span::styled(
                format!("{:^width$}", value, width = width),
                value_style(lit == Some(i)),
            ),
            Span::styled("│", link_style()),
        ];
        if i + 1 == values.len() {
            spans.push(Span::styled(" ← top", Style::default().fg(DEFAULT_THEME.primary)));
        }
        lines.push(Line::from(spans));
    }
    lines.push(Line::from(Span::styled(
        format!("└{}┘", "─".repeat(width)),
        link_style(),
    )));
    lines
}

fn queue_lines(values: &[Number], highlight: Option<&Locator>) -> Vec<Line<'static>> {
    if values.is_empty() {
        return empty_line("(empty queue)");
    }
    let lit = lit_position(highlight);
    let mut spans = vec![Span::styled(
        "front → ",
        Style::default().fg(DEFAULT_THEME.primary),
    )];
    for (i, value) in values.iter().enumerate() {
        spans.push(Span::styled(format!("[{}]", value), value_style(lit == Some(i))));
        spans.push(Span::raw(" "));
    }
    spans.push(Span::styled("← rear", Style::default().fg(DEFAULT_THEME.primary)));
    vec![Line::from(spans)]
}

/// Character grid with a style per cell
struct Grid {
    cells: Vec<Vec<(char, Style)>>,
}

impl Grid {
    fn new(width: usize, height: usize) -> Self {
        Grid {
            cells: vec![vec![(' ', Style::default()); width]; height],
        }
    }

    fn put(&mut self, row: usize, column: usize, text: &str, style: Style) {
        let Some(cells) = self.cells.get_mut(row) else {
            return;
        };
        for (offset, c) in text.chars().enumerate() {
            if let Some(cell) = cells.get_mut(column + offset) {
                *cell = (c, style);
            }
        }
    }

    /// Merge runs of equally styled cells into spans
    fn into_lines(self) -> Vec<Line<'static>> {
        self.cells
            .into_iter()
            .map(|row| {
                let mut spans = Vec::new();
                let mut text = String::new();
                let mut style = Style::default();
                for (c, cell_style) in row {
                    if cell_style != style && !text.is_empty() {
                        spans.push(Span::styled(std::mem::take(&mut text), style));
                    }
                    style = cell_style;
                    text.push(c);
                }
                if !text.is_empty() {
                    spans.push(Span::styled(text, style));
                }
                Line::from(spans)
            })
            .collect()
    }
}

fn tree_lines(tree: &TreeView, highlight: Option<&Locator>) -> Vec<Line<'static>> {
    if tree.nodes.is_empty() {
        return empty_line("(empty tree)");
    }
    let lit = match highlight {
        Some(Locator::Node(value)) => tree.index_of(*value),
        _ => None,
    };

    let positions = tree_layout(tree);
    let cell = tree
        .nodes
        .iter()
        .map(|n| n.value.to_string().len())
        .max()
        .unwrap_or(1)
        + 2;
    let depth = positions.iter().map(|p| p.row).max().unwrap_or(0);
    let center = |i: usize| positions[i].column * cell + cell / 2;

    let mut grid = Grid::new(tree.nodes.len() * cell, depth * 2 + 1);
    for (i, node) in tree.nodes.iter().enumerate() {
        let text = node.value.to_string();
        let row = positions[i].row * 2;
        let start = center(i).saturating_sub(text.len() / 2);
        let end = start + text.len();

        if let Some(left) = node.left {
            let child = center(left);
            let run = start.saturating_sub(child + 1);
            grid.put(row, child + 1, &"_".repeat(run), link_style());
            grid.put(row + 1, child, "/", link_style());
        }
        if let Some(right) = node.right {
            let child = center(right);
            let run = child.saturating_sub(end);
            grid.put(row, end, &"_".repeat(run), link_style());
            grid.put(row + 1, child, "\\", link_style());
        }
        grid.put(row, start, &text, value_style(lit == Some(i)));
    }

    let mut lines = grid.into_lines();
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        format!("{} / {} nodes", tree.nodes.len(), tree.capacity),
        Style::default().fg(DEFAULT_THEME.comment),
    )));
    lines
}

fn table_lines(buckets: &[BucketView], highlight: Option<&Locator>) -> Vec<Line<'static>> {
    let (lit_bucket, lit_slot) = match highlight {
        Some(Locator::Bucket { index, slot }) => (Some(*index), *slot),
        _ => (None, None),
    };

    buckets
        .iter()
        .map(|bucket| {
            let bucket_lit = lit_bucket == Some(bucket.index);
            let index_style = if bucket_lit && lit_slot.is_none() {
                value_style(true)
            } else {
                Style::default().fg(DEFAULT_THEME.primary)
            };
            let mut spans = vec![
                Span::styled(format!("{:>3}", bucket.index), index_style),
                Span::styled(" │ ", link_style()),
            ];
            if bucket.entries.is_empty() {
                spans.push(Span::styled("·", Style::default().fg(DEFAULT_THEME.comment)));
            }
            for (slot, (key, value)) in bucket.entries.iter().enumerate() {
                if slot > 0 {
                    spans.push(Span::styled(" → ", link_style()));
                }
                let lit = bucket_lit && lit_slot == Some(slot);
                let key_style = if lit {
                    value_style(true)
                } else {
                    Style::default().fg(DEFAULT_THEME.key)
                };
                spans.push(Span::styled(key.clone(), key_style));
                spans.push(Span::styled(": ", link_style()));
                spans.push(Span::styled(value.clone(), value_style(lit)));
            }
            Line::from(spans)
        })
        .collect()
}

fn graph_lines(
    vertices: &[String],
    edges: &[(String, String)],
    highlight: Option<&Locator>,
) -> Vec<Line<'static>> {
    if vertices.is_empty() {
        return empty_line("(empty graph)");
    }

    let is_lit_vertex = |v: &str| matches!(highlight, Some(Locator::Vertex(h)) if h == v);
    let is_lit_edge = |a: &str, b: &str| {
        matches!(highlight, Some(Locator::Edge(x, y))
            if (x == a && y == b) || (x == b && y == a))
    };

    let width = vertices.iter().map(|v| v.chars().count()).max().unwrap_or(1);
    let mut lines: Vec<Line<'static>> = vertices
        .iter()
        .map(|vertex| {
            let neighbors: Vec<&String> = edges
                .iter()
                .filter_map(|(a, b)| {
                    if a == vertex {
                        Some(b)
                    } else if b == vertex {
                        Some(a)
                    } else {
                        None
                    }
                })
                .collect();

            let vertex_style = if is_lit_vertex(vertex.as_str()) {
                value_style(true)
            } else {
                Style::default().fg(DEFAULT_THEME.key)
            };
            let mut spans = vec![
                Span::styled(format!("{:>width$}", vertex, width = width), vertex_style),
                Span::styled(" ─ ", link_style()),
            ];
            if neighbors.is_empty() {
                spans.push(Span::styled("·", Style::default().fg(DEFAULT_THEME.comment)));
            }
            for (i, neighbor) in neighbors.iter().enumerate() {
                if i > 0 {
                    spans.push(Span::styled(", ", link_style()));
                }
                spans.push(Span::styled(
                    (*neighbor).clone(),
                    value_style(is_lit_edge(vertex.as_str(), neighbor.as_str())),
                ));
            }
            Line::from(spans)
        })
        .collect();

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        format!("{} vertices, {} edges", vertices.len(), edges.len()),
        Style::default().fg(DEFAULT_THEME.comment),
    )));
    lines
}
