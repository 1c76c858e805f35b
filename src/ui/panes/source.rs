//! Source code pane rendering with syntax highlighting
//!
//! Displays the C++ input with line numbers. When translation failed, the
//! line holding the error is painted in the error colour.

use super::highlight::{highlight_line, Language};
use super::utils::{clamp_scroll, pane_block, visible_height};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Build the numbered, highlighted lines for the visible window.
pub fn source_lines(
    source_code: &str,
    error_line: Option<usize>,
    offset: usize,
    height: usize,
) -> Vec<Line<'static>> {
    source_code
        .lines()
        .enumerate()
        .skip(offset)
        .take(height)
        .map(|(idx, line)| {
            let line_num = idx + 1;
            let is_error = error_line == Some(line_num);

            let num_style = if is_error {
                Style::default()
                    .fg(DEFAULT_THEME.error)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(DEFAULT_THEME.comment)
            };

            let mut content = highlight_line(line, Language::Cpp);
            if is_error {
                let error_style = Style::default()
                    .bg(DEFAULT_THEME.error)
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD);
                for span in &mut content.spans {
                    span.style = error_style;
                }
            }

            let mut spans = vec![Span::styled(format!("{:4} ", line_num), num_style)];
            spans.extend(content.spans);
            Line::from(spans)
        })
        .collect()
}

/// Render the source code pane
pub fn render_source_pane(
    frame: &mut Frame,
    area: Rect,
    source_code: &str,
    error_line: Option<usize>,
    is_focused: bool,
    scroll: &mut usize,
) {
    let height = visible_height(area);
    clamp_scroll(scroll, source_code.lines().count(), height);

    let lines = source_lines(source_code, error_line, *scroll, height);
    let paragraph = Paragraph::new(lines).block(pane_block(" C++ Source ".to_string(), is_focused));
    frame.render_widget(paragraph, area);
}
