use std::rc::Rc;

use crossterm::event::KeyEvent;
use ratatui::prelude::{Frame, Rect};

use crate::keys::PaneKeymap;
use crate::pane::{PaneCommand, PaneWidget};
use crate::theme::Theme;
use crate::widgets::table_view::TableViewWidget;

/// Rows taken by the header line and the rule under it.
const HEADER_ROWS: u16 = 2;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    pub title: String,
    pub width: u16,
}

impl Column {
    pub fn new(title: impl Into<String>, width: u16) -> Self {
        Self { title: title.into(), width }
    }
}

/// Scrollable table with a fixed column schema and a row cursor.
///
/// The pane only reacts to keys while focused. Its height and width come from the dashboard's layout
/// and bound what `render` draws.
pub struct TablePane {
    title: String,
    columns: Vec<Column>,
    rows: Vec<Vec<String>>,
    keymap: Rc<PaneKeymap>,
    cursor: usize,
    offset: usize,
    height: u16,
    width: u16,
    focused: bool,
}

impl TablePane {
    pub fn new(title: impl Into<String>, columns: Vec<Column>, rows: Vec<Vec<String>>, keymap: Rc<PaneKeymap>) -> Self {
        Self {
            title: title.into(),
            columns,
            rows,
            keymap,
            cursor: 0,
            offset: 0,
            height: 0,
            width: 0,
            focused: false,
        }
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    /// Body rows that fit under the header at the current height.
    pub fn visible_rows(&self) -> usize {
        usize::from(self.height.saturating_sub(HEADER_ROWS)).max(1)
    }

    pub fn handle_command(&mut self, cmd: PaneCommand) {
        let page = self.visible_rows();
        let half_page = (page / 2).max(1);
        match cmd {
            PaneCommand::LineUp => self.move_up(1),
            PaneCommand::LineDown => self.move_down(1),
            PaneCommand::PageUp => self.move_up(page),
            PaneCommand::PageDown => self.move_down(page),
            PaneCommand::HalfPageUp => self.move_up(half_page),
            PaneCommand::HalfPageDown => self.move_down(half_page),
            PaneCommand::GotoTop => self.cursor = 0,
            PaneCommand::GotoBottom => self.cursor = self.rows.len().saturating_sub(1),
        }
        self.scroll_to_cursor();
    }

    fn move_up(&mut self, n: usize) {
        self.cursor = self.cursor.saturating_sub(n);
    }

    fn move_down(&mut self, n: usize) {
        self.cursor = self.cursor.saturating_add(n).min(self.rows.len().saturating_sub(1));
    }

    fn scroll_to_cursor(&mut self) {
        let visible = self.visible_rows();
        if self.cursor < self.offset {
            self.offset = self.cursor;
        } else if self.cursor >= self.offset + visible {
            self.offset = self.cursor + 1 - visible;
        }
        // no blank rows at the bottom once the pane grows
        self.offset = self.offset.min(self.rows.len().saturating_sub(visible));
    }
}

impl PaneWidget for TablePane {
    fn title(&self) -> &str {
        &self.title
    }

    fn set_height(&mut self, rows: u16) {
        self.height = rows;
        self.scroll_to_cursor();
    }

    fn set_width(&mut self, cols: u16) {
        self.width = cols;
    }

    fn focus(&mut self) {
        self.focused = true;
    }

    fn blur(&mut self) {
        self.focused = false;
    }

    fn is_focused(&self) -> bool {
        self.focused
    }

    fn handle_key(&mut self, key: KeyEvent) {
        if !self.focused {
            return;
        }
        if let Some(cmd) = self.keymap.lookup(key) {
            self.handle_command(cmd);
        }
    }

    fn render(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let area = Rect { width: area.width.min(self.width), height: area.height.min(self.height), ..area };
        let widget = TableViewWidget {
            columns: &self.columns,
            rows: &self.rows,
            offset: self.offset,
            visible_rows: self.visible_rows(),
            cursor: self.cursor,
            theme,
        };
        widget.render(frame, area);
    }
}

#[cfg(test)]
mod tests;
