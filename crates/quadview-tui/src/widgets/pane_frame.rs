use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Padding, Paragraph};

use crate::theme::Theme;

/// Rounded box with one column of horizontal padding and a title line at the top of the interior.
pub struct PaneFrame<'a> {
    pub title: &'a str,
    pub focused: bool,
    pub theme: &'a Theme,
}

impl<'a> PaneFrame<'a> {
    /// Draws the frame over all of `area` and returns the content area beneath the title line.
    pub fn render(&self, frame: &mut Frame, area: Rect) -> Rect {
        let border_style = if self.focused { self.theme.border_active } else { self.theme.border };
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(border_style)
            .padding(Padding::horizontal(1));

        let inner = block.inner(area);
        frame.render_widget(block, area);

        let [title_area, content_area] = Layout::vertical([Constraint::Length(1), Constraint::Fill(1)]).areas(inner);
        frame.render_widget(Paragraph::new(Line::styled(self.title, self.theme.title)), title_area);

        content_area
    }
}
