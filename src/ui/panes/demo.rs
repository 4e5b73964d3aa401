//! Live sequence pane for the stack and queue demos
//!
//! Items are drawn left to right in insertion order. The element the next
//! remove would take is marked, so the LIFO/FIFO difference is visible:
//! the right end for a stack, the left end for a queue. A freshly appended
//! item is highlighted until its flash expires.
//!
//! When the row is wider than the pane, items are dropped from the end that
//! is removed last and replaced by a `… +k` marker.

use super::utils::pane_block;
use crate::demo::{BoundedSequence, Removal, SequenceKind};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use std::ops::Range;

/// Columns kept free for the `… +k` marker when the row is windowed
const HIDDEN_MARKER_WIDTH: usize = 8;

/// Data needed to render the demo pane
pub struct DemoRenderData<'a> {
    pub sequence: &'a BoundedSequence,
    /// Whether the remove control is enabled
    pub can_remove: bool,
    /// Index of the item currently flashing, if any
    pub flash_index: Option<usize>,
}

/// Render the demo pane
pub fn render_demo_pane(frame: &mut Frame, area: Rect, data: DemoRenderData) {
    let sequence = data.sequence;
    let kind = sequence.kind();
    let title = match kind {
        SequenceKind::Stack => " Live Stack (LIFO) ",
        SequenceKind::Queue => " Live Queue (FIFO) ",
    };
    let block = pane_block(title, false);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(inner);

    frame.render_widget(
        Paragraph::new(item_row(&data, inner.width as usize)),
        rows[0],
    );

    let summary = match sequence.peek_next_removal() {
        Some(label) => format!(
            "length {} · next {}: {}",
            sequence.len(),
            kind.remove_verb(),
            label
        ),
        None => format!("length {}", sequence.len()),
    };
    frame.render_widget(
        Paragraph::new(Span::styled(summary, Style::default().fg(DEFAULT_THEME.comment))),
        rows[1],
    );

    let key_style = Style::default().bg(DEFAULT_THEME.comment).fg(Color::Black);
    let desc_style = Style::default().fg(DEFAULT_THEME.fg);
    let remove_style = if data.can_remove {
        desc_style
    } else {
        Style::default()
            .fg(DEFAULT_THEME.comment)
            .add_modifier(Modifier::DIM | Modifier::CROSSED_OUT)
    };

    let controls = Line::from(vec![
        Span::styled(" a ", key_style),
        Span::styled(format!(" {}  ", kind.append_verb()), desc_style),
        Span::styled(" x ", key_style),
        Span::styled(format!(" {}  ", kind.remove_verb()), remove_style),
        Span::styled(" r ", key_style),
        Span::styled(" reset", desc_style),
    ]);
    frame.render_widget(Paragraph::new(controls), rows[2]);
}

/// The sequence as one line, windowed to `width` columns
fn item_row(data: &DemoRenderData, width: usize) -> Line<'static> {
    let sequence = data.sequence;
    let removal = sequence.kind().removal();
    let end_style = Style::default().fg(DEFAULT_THEME.comment);
    let (left_end, right_end) = match removal {
        Removal::Lifo => (
            Span::styled("bottom ", end_style),
            Span::styled(" ← top (in/out)", end_style),
        ),
        Removal::Fifo => (
            Span::styled("out ← front ", end_style),
            Span::styled(" back ← in", end_style),
        ),
    };

    if sequence.is_empty() {
        let empty = Span::styled(
            "(empty)",
            Style::default()
                .fg(DEFAULT_THEME.comment)
                .add_modifier(Modifier::ITALIC),
        );
        return Line::from(vec![left_end, empty, right_end]);
    }

    let next_out = sequence.next_removal_index();
    let items: Vec<Span<'static>> = sequence
        .items()
        .enumerate()
        .map(|(idx, label)| {
            let style = if data.flash_index == Some(idx) {
                Style::default()
                    .bg(DEFAULT_THEME.flash)
                    .fg(Color::Black)
                    .add_modifier(Modifier::BOLD)
            } else if next_out == Some(idx) {
                Style::default()
                    .bg(DEFAULT_THEME.secondary)
                    .fg(Color::Black)
            } else {
                Style::default()
                    .bg(DEFAULT_THEME.current_line_bg)
                    .fg(DEFAULT_THEME.fg)
            };
            Span::styled(format!("[{}]", label), style)
        })
        .collect();

    let widths: Vec<usize> = items.iter().map(Span::width).collect();
    let budget = width.saturating_sub(left_end.width() + right_end.width());
    let shown = visible_range(&widths, budget, removal);
    let hidden = items.len() - shown.len();
    let marker = Span::styled(format!("… +{}", hidden), end_style);

    let mut row = vec![left_end];
    if hidden > 0 && removal == Removal::Lifo {
        row.push(marker.clone());
        row.push(Span::raw(" "));
    }
    for (pos, span) in items[shown.clone()].iter().enumerate() {
        if pos > 0 {
            row.push(Span::raw(" "));
        }
        row.push(span.clone());
    }
    if hidden > 0 && removal == Removal::Fifo {
        row.push(Span::raw(" "));
        row.push(marker);
    }
    row.push(right_end);
    Line::from(row)
}

/// Items that fit in `budget` columns, anchored at the end removed next.
///
/// The next item out is always included, even if it alone overflows.
fn visible_range(widths: &[usize], budget: usize, removal: Removal) -> Range<usize> {
    let full: usize = widths.iter().sum::<usize>() + widths.len().saturating_sub(1);
    if full <= budget {
        return 0..widths.len();
    }

    let budget = budget.saturating_sub(HIDDEN_MARKER_WIDTH);
    let mut used = 0;
    let mut count = 0;
    let ordered: Box<dyn Iterator<Item = &usize>> = match removal {
        Removal::Lifo => Box::new(widths.iter().rev()),
        Removal::Fifo => Box::new(widths.iter()),
    };
    for &w in ordered {
        let needed = if count == 0 { w } else { w + 1 };
        if count > 0 && used + needed > budget {
            break;
        }
        used += needed;
        count += 1;
    }

    match removal {
        Removal::Lifo => widths.len() - count..widths.len(),
        Removal::Fifo => 0..count,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_everything_fits() {
        assert_eq!(visible_range(&[5, 5, 5], 17, Removal::Lifo), 0..3);
        assert_eq!(visible_range(&[], 0, Removal::Fifo), 0..0);
    }

    #[test]
    fn test_stack_keeps_the_top() {
        // 10 items of width 7 need 79 columns
        let widths = [7; 10];
        let shown = visible_range(&widths, 40, Removal::Lifo);
        assert_eq!(shown.end, 10);
        assert_eq!(shown, 6..10);
    }

    #[test]
    fn test_queue_keeps_the_front() {
        let widths = [7; 10];
        assert_eq!(visible_range(&widths, 40, Removal::Fifo), 0..4);
    }

    #[test]
    fn test_next_out_always_shown() {
        assert_eq!(visible_range(&[30, 30], 10, Removal::Lifo), 1..2);
        assert_eq!(visible_range(&[30, 30], 10, Removal::Fifo), 0..1);
    }
}
