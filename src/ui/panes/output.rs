//! Output pane: the generated Python, or the diagnostic when translation failed

use super::highlight::{highlight_line, Language};
use super::utils::{clamp_scroll, pane_block, visible_height};
use crate::driver::Translation;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

/// Number of scrollable lines the pane will show for `translation`.
pub fn output_line_count(translation: &Translation) -> usize {
    match &translation.result {
        Ok(python) => python.lines().count(),
        Err(_) => 1,
    }
}

/// Render the output pane
pub fn render_output_pane(
    frame: &mut Frame,
    area: Rect,
    translation: &Translation,
    is_focused: bool,
    scroll: &mut usize,
) {
    let height = visible_height(area);
    clamp_scroll(scroll, output_line_count(translation), height);

    let paragraph = match &translation.result {
        Ok(python) => {
            let lines: Vec<Line> = python
                .lines()
                .skip(*scroll)
                .take(height)
                .map(|line| highlight_line(line, Language::Python))
                .collect();
            Paragraph::new(lines).block(pane_block(" Python ".to_string(), is_focused))
        }
        Err(err) => {
            let line = Line::from(Span::styled(
                err.to_string(),
                Style::default()
                    .fg(DEFAULT_THEME.error)
                    .add_modifier(Modifier::BOLD),
            ));
            Paragraph::new(line)
                .wrap(Wrap { trim: false })
                .block(pane_block(" Diagnostic ".to_string(), is_focused))
        }
    };

    frame.render_widget(paragraph, area);
}
