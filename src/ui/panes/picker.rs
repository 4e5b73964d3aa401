//! Choice pickers for interests and concepts

use super::utils::pane_block;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem},
    Frame,
};

/// Data needed to render a picker
pub struct PickerRenderData<'a> {
    pub title: &'a str,
    pub options: &'a [&'static str],
    /// Index of the chosen option
    pub selected: Option<usize>,
    /// Index under the cursor
    pub cursor: usize,
    /// Disabled pickers are greyed out and show `disabled_hint` instead of a cursor
    pub enabled: bool,
    pub disabled_hint: &'a str,
}

/// Render a picker pane
pub fn render_picker_pane(
    frame: &mut Frame,
    area: Rect,
    data: PickerRenderData,
    is_focused: bool,
) {
    let block = pane_block(data.title, is_focused);

    let mut items: Vec<ListItem> = data
        .options
        .iter()
        .enumerate()
        .map(|(idx, label)| {
            let is_selected = data.selected == Some(idx);
            let is_cursor = data.enabled && is_focused && data.cursor == idx;

            let marker = if is_selected { "● " } else { "○ " };
            let number = format!("{} ", idx + 1);

            let (marker_style, label_style) = if !data.enabled {
                (
                    Style::default().fg(DEFAULT_THEME.comment),
                    Style::default()
                        .fg(DEFAULT_THEME.comment)
                        .add_modifier(Modifier::DIM),
                )
            } else if is_selected {
                (
                    Style::default().fg(DEFAULT_THEME.success),
                    Style::default()
                        .fg(DEFAULT_THEME.success)
                        .add_modifier(Modifier::BOLD),
                )
            } else {
                (
                    Style::default().fg(DEFAULT_THEME.comment),
                    Style::default().fg(DEFAULT_THEME.fg),
                )
            };

            let mut line = Line::from(vec![
                Span::styled(number, Style::default().fg(DEFAULT_THEME.comment)),
                Span::styled(marker, marker_style),
                Span::styled(*label, label_style),
            ]);

            if is_cursor {
                for span in &mut line.spans {
                    span.style = span.style.bg(DEFAULT_THEME.current_line_bg);
                }
                line.spans.insert(
                    0,
                    Span::styled("▸", Style::default().fg(DEFAULT_THEME.secondary)),
                );
            } else {
                line.spans.insert(0, Span::raw(" "));
            }

            ListItem::new(line)
        })
        .collect();

    if !data.enabled && !data.disabled_hint.is_empty() {
        items.push(ListItem::new(""));
        items.push(
            ListItem::new(data.disabled_hint)
                .style(Style::default().fg(DEFAULT_THEME.comment).add_modifier(Modifier::ITALIC)),
        );
    }

    frame.render_widget(List::new(items).block(block), area);
}
