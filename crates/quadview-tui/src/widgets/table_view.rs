use ratatui::layout::Flex;
use ratatui::prelude::*;
use ratatui::widgets::{Cell, Paragraph, Row, Table, TableState};

use crate::table::Column;
use crate::theme::Theme;

/// Header row, a rule beneath it, then the visible window of body rows.
pub struct TableViewWidget<'a> {
    pub columns: &'a [Column],
    pub rows: &'a [Vec<String>],
    pub offset: usize,
    pub visible_rows: usize,
    pub cursor: usize,
    pub theme: &'a Theme,
}

impl<'a> TableViewWidget<'a> {
    pub fn render(self, frame: &mut Frame, area: Rect) {
        if area.is_empty() {
            return;
        }

        let header_cells: Vec<Cell> =
            self.columns.iter().map(|c| Cell::from(c.title.as_str()).style(self.theme.header)).collect();
        let header = Row::new(header_cells).height(1).bottom_margin(1);
        let widths: Vec<Constraint> = self.columns.iter().map(|c| Constraint::Length(c.width)).collect();

        if self.rows.is_empty() {
            let table = Table::new(Vec::<Row>::new(), &widths).header(header).column_spacing(1).flex(Flex::Start);
            frame.render_widget(table, area);
            self.render_rule(frame, area);
            if area.height > 2 {
                let msg_area = Rect { y: area.y + 2, height: 1, ..area };
                frame.render_widget(Paragraph::new("No rows").style(self.theme.text_dim), msg_area);
            }
            return;
        }

        let end = (self.offset + self.visible_rows).min(self.rows.len());
        let start = self.offset.min(end);
        let body: Vec<Row> = self.rows[start..end]
            .iter()
            .map(|row| Row::new(row.iter().map(|v| Cell::from(v.as_str()))).style(self.theme.text))
            .collect();

        let table = Table::new(body, &widths)
            .header(header)
            .column_spacing(1)
            .flex(Flex::Start)
            .row_highlight_style(self.theme.selection);

        let selected = self.cursor.checked_sub(start).filter(|&i| i < end - start);
        let mut state = TableState::default().with_selected(selected);
        frame.render_stateful_widget(table, area, &mut state);
        self.render_rule(frame, area);
    }

    fn render_rule(&self, frame: &mut Frame, area: Rect) {
        if area.height < 2 {
            return;
        }
        let rule_area = Rect { y: area.y + 1, height: 1, ..area };
        let rule = "─".repeat(usize::from(rule_area.width));
        frame.render_widget(Paragraph::new(rule).style(self.theme.header_rule), rule_area);
    }
}
