//! Helpers shared by the scrolling panes

use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, Borders},
};

/// Rows available for content inside a bordered pane (min 1).
pub fn visible_height(area: Rect) -> usize {
    area.height.saturating_sub(2).max(1) as usize
}

/// Clamp `scroll` so the last page is never scrolled past.
pub fn clamp_scroll(scroll: &mut usize, total_lines: usize, visible: usize) {
    let max_scroll = total_lines.saturating_sub(visible);
    *scroll = (*scroll).min(max_scroll);
}

/// Bordered block with focus-dependent styling.
pub fn pane_block(title: String, is_focused: bool) -> Block<'static> {
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_scroll() {
        let mut scroll = 50;
        clamp_scroll(&mut scroll, 30, 10);
        assert_eq!(scroll, 20);

        let mut scroll = usize::MAX;
        clamp_scroll(&mut scroll, 5, 10);
        assert_eq!(scroll, 0);

        let mut scroll = 3;
        clamp_scroll(&mut scroll, 30, 10);
        assert_eq!(scroll, 3);
    }

    #[test]
    fn test_visible_height_excludes_borders() {
        assert_eq!(visible_height(Rect::new(0, 0, 20, 12)), 10);
        assert_eq!(visible_height(Rect::new(0, 0, 20, 1)), 1);
    }
}
