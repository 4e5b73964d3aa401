//! Explanation pane: analogy, numbered steps and a highlighted code snippet

use super::utils::{clamp_scroll, pane_block};
use crate::explain::Explanation;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

/// Simple syntax highlighting for the Rust snippets
fn highlight_code(line: &str) -> Line<'static> {
    let mut spans = Vec::new();
    let mut current_word = String::new();

    let chars: Vec<char> = line.chars().collect();
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];

        // Comments run to end of line
        if c == '/' && i + 1 < chars.len() && chars[i + 1] == '/' {
            if !current_word.is_empty() {
                spans.push(Span::raw(current_word.clone()));
                current_word.clear();
            }
            spans.push(Span::styled(
                chars[i..].iter().collect::<String>(),
                Style::default().fg(DEFAULT_THEME.comment),
            ));
            return Line::from(spans);
        }

        if c == '"' {
            if !current_word.is_empty() {
                let style = word_style(&current_word, false);
                spans.push(Span::styled(current_word.clone(), style));
                current_word.clear();
            }
            let mut end = i + 1;
            while end < chars.len() && chars[end] != '"' {
                if chars[end] == '\\' {
                    end += 2;
                } else {
                    end += 1;
                }
            }
            let end = (end + 1).min(chars.len());
            spans.push(Span::styled(
                chars[i..end].iter().collect::<String>(),
                Style::default().fg(DEFAULT_THEME.string),
            ));
            i = end;
            continue;
        }

        if !c.is_alphanumeric() && c != '_' {
            if !current_word.is_empty() {
                let is_call = c == '(' || c == '!';
                let style = word_style(&current_word, is_call);
                spans.push(Span::styled(current_word.clone(), style));
                current_word.clear();
            }

            let style = match c {
                '{' | '}' | '(' | ')' | '[' | ']' => Style::default().fg(DEFAULT_THEME.primary),
                _ => Style::default().fg(DEFAULT_THEME.fg),
            };
            spans.push(Span::styled(c.to_string(), style));
            i += 1;
            continue;
        }

        current_word.push(c);
        i += 1;
    }

    if !current_word.is_empty() {
        let style = word_style(&current_word, false);
        spans.push(Span::styled(current_word, style));
    }

    Line::from(spans)
}

fn word_style(word: &str, is_call: bool) -> Style {
    match word {
        "let" | "mut" | "fn" | "struct" | "use" | "match" | "if" | "else" | "for" | "in"
        | "while" | "return" | "impl" | "pub" => Style::default()
            .fg(DEFAULT_THEME.keyword)
            .add_modifier(Modifier::BOLD),
        "None" | "Some" => Style::default().fg(DEFAULT_THEME.number),
        _ if word.chars().all(|c| c.is_ascii_digit()) => {
            Style::default().fg(DEFAULT_THEME.number)
        }
        _ if word.starts_with(|c: char| c.is_ascii_uppercase()) => {
            Style::default().fg(DEFAULT_THEME.type_name)
        }
        _ if is_call => Style::default().fg(DEFAULT_THEME.function),
        _ => Style::default().fg(DEFAULT_THEME.fg),
    }
}

/// Build every line of the pane body
fn explanation_lines(explanation: &Explanation) -> Vec<Line<'static>> {
    let heading = Style::default()
        .fg(DEFAULT_THEME.secondary)
        .add_modifier(Modifier::BOLD);

    let mut lines = vec![
        Line::from(Span::styled(explanation.title.clone(), heading)),
        Line::from(""),
        Line::from(Span::styled(
            explanation.analogy.clone(),
            Style::default().fg(DEFAULT_THEME.fg),
        )),
        Line::from(""),
        Line::from(Span::styled("How it works", heading)),
    ];

    for (n, step) in explanation.steps.iter().enumerate() {
        lines.push(Line::from(vec![
            Span::styled(format!(" {}. ", n + 1), Style::default().fg(DEFAULT_THEME.primary)),
            Span::styled(*step, Style::default().fg(DEFAULT_THEME.fg)),
        ]));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled("In code", heading)));
    for code_line in explanation.code.lines() {
        let mut line = highlight_code(code_line);
        line.spans.insert(0, Span::raw("  "));
        lines.push(line);
    }

    lines
}

/// Render the explanation pane
pub fn render_explanation_pane(
    frame: &mut Frame,
    area: Rect,
    explanation: Option<&Explanation>,
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let block = pane_block(" Explanation ", is_focused);

    let Some(explanation) = explanation else {
        *scroll_offset = 0;
        let paragraph = Paragraph::new(vec![
            Line::from(""),
            Line::from("Pick an interest, then a concept."),
            Line::from(""),
            Line::from("Tab switches panes, ↑/↓ move, Enter selects."),
        ])
        .block(block)
        .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    };

    let lines = explanation_lines(explanation);
    let visible_height = area.height.saturating_sub(2).max(1) as usize;
    let content_width = area.width.saturating_sub(2).max(1);

    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: false });
    // Counted before the block is attached, so this is rows of wrapped body text
    let total_rows = paragraph.line_count(content_width);
    clamp_scroll(scroll_offset, total_rows, visible_height);

    let paragraph = paragraph
        .block(block)
        .scroll((*scroll_offset as u16, 0));
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_highlight_keeps_text() {
        let source = "let mut song = Vec::new(); // start empty";
        assert_eq!(text(&highlight_code(source)), source);
    }

    #[test]
    fn test_highlight_styles_keywords_and_strings() {
        let line = highlight_code("let top = song.push(\"Bar A\");");
        let keyword = line.spans.iter().find(|s| s.content == "let").unwrap();
        assert_eq!(keyword.style.fg, Some(DEFAULT_THEME.keyword));
        let string = line.spans.iter().find(|s| s.content == "\"Bar A\"").unwrap();
        assert_eq!(string.style.fg, Some(DEFAULT_THEME.string));
        let call = line.spans.iter().find(|s| s.content == "push").unwrap();
        assert_eq!(call.style.fg, Some(DEFAULT_THEME.function));
    }

    #[test]
    fn test_lines_include_every_step() {
        let explanation = crate::explain::resolve(
            crate::catalog::Interest::Music,
            crate::catalog::Concept::Recursion,
        );
        let rendered: Vec<String> = explanation_lines(&explanation).iter().map(text).collect();
        for step in explanation.steps {
            assert!(rendered.iter().any(|l| l.contains(*step)));
        }
        assert_eq!(rendered[0], "Recursion as Music");
    }
}
