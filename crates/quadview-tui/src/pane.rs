use crossterm::event::KeyEvent;
use ratatui::prelude::{Frame, Rect};

use crate::theme::Theme;

pub const PANE_COUNT: usize = 4;

/// Position of a pane in the grid: 0 top-left, 1 top-right, 2 bottom-left, 3 bottom-right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PaneIndex(usize);

impl PaneIndex {
    pub const TOP_LEFT: Self = Self(0);
    pub const TOP_RIGHT: Self = Self(1);
    pub const BOTTOM_LEFT: Self = Self(2);
    pub const BOTTOM_RIGHT: Self = Self(3);

    pub fn new(index: usize) -> Option<Self> {
        (index < PANE_COUNT).then_some(Self(index))
    }

    pub fn get(self) -> usize {
        self.0
    }

    pub fn next(self) -> Self {
        Self((self.0 + 1) % PANE_COUNT)
    }

    pub fn previous(self) -> Self {
        Self((self.0 + PANE_COUNT - 1) % PANE_COUNT)
    }

    pub fn column(self) -> u16 {
        (self.0 % 2) as u16
    }

    pub fn row(self) -> u16 {
        (self.0 / 2) as u16
    }

    pub fn name(self) -> &'static str {
        match self.0 {
            0 => "top-left",
            1 => "top-right",
            2 => "bottom-left",
            _ => "bottom-right",
        }
    }

    pub fn all() -> impl Iterator<Item = Self> {
        (0..PANE_COUNT).map(Self)
    }
}

/// Table navigation actions a pane understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaneCommand {
    LineUp,
    LineDown,
    PageUp,
    PageDown,
    HalfPageUp,
    HalfPageDown,
    GotoTop,
    GotoBottom,
}

impl PaneCommand {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "line_up" => Some(Self::LineUp),
            "line_down" => Some(Self::LineDown),
            "page_up" => Some(Self::PageUp),
            "page_down" => Some(Self::PageDown),
            "half_page_up" => Some(Self::HalfPageUp),
            "half_page_down" => Some(Self::HalfPageDown),
            "goto_top" => Some(Self::GotoTop),
            "goto_bottom" => Some(Self::GotoBottom),
            _ => None,
        }
    }
}

/// Every pane hosted by the dashboard must satisfy this contract:
/// - Size is pushed in from outside through `set_height`/`set_width`; the pane never picks its own size
/// - Focus is pushed in through `focus`/`blur`; only the dashboard's focus controller calls them
/// - `handle_key` receives only keys the dashboard routed to this pane
/// - `render` draws within the given Rect and never mutates the pane
pub trait PaneWidget {
    fn title(&self) -> &str;
    fn set_height(&mut self, rows: u16);
    fn set_width(&mut self, cols: u16);
    fn focus(&mut self);
    fn blur(&mut self);
    fn is_focused(&self) -> bool;
    fn handle_key(&mut self, key: KeyEvent);
    fn render(&self, frame: &mut Frame, area: Rect, theme: &Theme);
}
