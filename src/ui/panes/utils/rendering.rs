//! Helpers shared by every pane

use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    style::{Modifier, Style},
    widgets::{Block, Borders},
};

/// Bordered block with the focus-dependent border color
pub(crate) fn pane_block(title: &str, is_focused: bool) -> Block<'_> {
    let border_style = if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    };

    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(border_style)
}

/// Clamp a scroll offset so the last page stays filled
pub(crate) fn clamp_scroll(offset: &mut usize, total_items: usize, visible_height: usize) {
    if total_items > visible_height {
        let max_scroll = total_items - visible_height;
        *offset = (*offset).min(max_scroll);
    } else {
        *offset = 0;
    }
}
