//! Status bar rendering with keybindings and the current selection

use crate::catalog::{Concept, Interest};
use crate::demo::SequenceKind;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Data needed to render the status bar
pub struct StatusRenderData<'a> {
    pub message: &'a str,
    pub interest: Option<Interest>,
    pub concept: Option<Concept>,
    /// Demo controls on offer, if the concept animates
    pub controls: Option<SequenceKind>,
}

/// Render the status bar at the bottom
pub fn render_status_bar(frame: &mut Frame, area: Rect, data: StatusRenderData) {
    let layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    // Left side: selection badge and last message
    let selection = match (data.interest, data.concept) {
        (Some(interest), Some(concept)) => format!(" {} · {} ", interest, concept),
        (Some(interest), None) => format!(" {} · ? ", interest),
        _ => String::from(" ? · ? "),
    };
    let badge_bg = if data.concept.is_some() {
        DEFAULT_THEME.primary
    } else {
        DEFAULT_THEME.secondary
    };

    let left_spans = vec![
        Span::styled(
            selection,
            Style::default()
                .bg(badge_bg)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            " | ",
            Style::default()
                .bg(DEFAULT_THEME.current_line_bg)
                .fg(DEFAULT_THEME.comment),
        ),
        Span::styled(
            format!(" {} ", data.message),
            Style::default()
                .bg(DEFAULT_THEME.current_line_bg)
                .fg(DEFAULT_THEME.fg),
        ),
    ];

    let left_paragraph = Paragraph::new(Line::from(left_spans))
        .style(Style::default().bg(DEFAULT_THEME.current_line_bg))
        .alignment(Alignment::Left);
    frame.render_widget(left_paragraph, layout[0]);

    // Right side: keybinds with visual grouping
    let key_style = Style::default().bg(DEFAULT_THEME.comment).fg(Color::Black);
    let desc_style = Style::default()
        .bg(DEFAULT_THEME.current_line_bg)
        .fg(DEFAULT_THEME.fg);
    let sep_style = Style::default()
        .bg(DEFAULT_THEME.current_line_bg)
        .fg(DEFAULT_THEME.comment);

    let mut right_spans = vec![
        Span::styled(" ⇥ ", key_style),
        Span::styled(" pane ", desc_style),
        Span::styled("│", sep_style),
        Span::styled(" ", desc_style),
        Span::styled(" ↑/↓ ", key_style),
        Span::styled(" move ", desc_style),
        Span::styled("│", sep_style),
        Span::styled(" ", desc_style),
        Span::styled(" ↵ ", key_style),
        Span::styled(" select ", desc_style),
    ];

    if let Some(kind) = data.controls {
        right_spans.extend([
            Span::styled("│", sep_style),
            Span::styled(" ", desc_style),
            Span::styled(" a/x ", key_style),
            Span::styled(
                format!(" {}/{} ", kind.append_verb(), kind.remove_verb()),
                desc_style,
            ),
        ]);
    }

    right_spans.extend([
        Span::styled("│", sep_style),
        Span::styled(" ", desc_style),
        Span::styled("q", key_style),
        Span::styled(" quit ", desc_style),
    ]);

    let right_paragraph = Paragraph::new(Line::from(right_spans))
        .style(Style::default().bg(DEFAULT_THEME.current_line_bg))
        .alignment(Alignment::Right);
    frame.render_widget(right_paragraph, layout[1]);
}
