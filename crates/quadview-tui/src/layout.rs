//! Terminal-size to pane-geometry math for the 2×2 grid.
//!
//! Geometry is always recomputed from the terminal size, never adjusted incrementally. Terminals smaller
//! than the minimum produce no geometry at all; callers keep whatever they had before.

use ratatui::prelude::Rect;

use crate::pane::{PaneIndex, PANE_COUNT};

/// Cells between the two columns and between the two rows.
pub const GAP: u16 = 1;

pub const MIN_TERMINAL_WIDTH: u16 = 10;
pub const MIN_TERMINAL_HEIGHT: u16 = 10;

/// Border top and bottom, plus the title line.
const FRAME_ROWS: u16 = 3;
/// Border and one column of padding on each side.
const FRAME_COLS: u16 = 4;

/// Header plus at least one data row.
pub const MIN_CONTENT_HEIGHT: u16 = 3;
pub const MIN_CONTENT_WIDTH: u16 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TerminalSize {
    pub width: u16,
    pub height: u16,
}

impl TerminalSize {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    /// False until the first resize with non-zero dimensions.
    pub fn is_sized(&self) -> bool {
        self.width > 0 && self.height > 0
    }
}

/// Dimensions shared by all four panes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaneGeometry {
    pub outer_width: u16,
    pub outer_height: u16,
    pub content_width: u16,
    pub content_height: u16,
}

impl PaneGeometry {
    /// Box occupied by one pane, anchored at the terminal's top-left corner.
    pub fn pane_rect(&self, index: PaneIndex) -> Rect {
        Rect {
            x: index.column() * (self.outer_width + GAP),
            y: index.row() * (self.outer_height + GAP),
            width: self.outer_width,
            height: self.outer_height,
        }
    }

    pub fn pane_rects(&self) -> [Rect; PANE_COUNT] {
        let mut rects = [Rect::default(); PANE_COUNT];
        for index in PaneIndex::all() {
            rects[index.get()] = self.pane_rect(index);
        }
        rects
    }
}

/// Split `size` into the shared pane geometry.
///
/// Returns `None` when either dimension is below the minimum. Leftover cells from odd dimensions are not
/// handed to any pane, so an 82-column terminal yields the same 40-column panes as an 81-column one.
pub fn compute_geometry(size: TerminalSize) -> Option<PaneGeometry> {
    if size.width < MIN_TERMINAL_WIDTH || size.height < MIN_TERMINAL_HEIGHT {
        return None;
    }

    let outer_width = (size.width - GAP) / 2;
    let outer_height = (size.height - GAP) / 2;

    Some(PaneGeometry {
        outer_width,
        outer_height,
        content_width: outer_width.saturating_sub(FRAME_COLS).max(MIN_CONTENT_WIDTH),
        content_height: outer_height.saturating_sub(FRAME_ROWS).max(MIN_CONTENT_HEIGHT),
    })
}
