use ratatui::prelude::*;

use crate::layout::{PaneGeometry, TerminalSize};
use crate::pane::{PaneIndex, PaneWidget, PANE_COUNT};
use crate::theme::Theme;
use crate::widgets::pane_frame::PaneFrame;

/// Everything one frame needs, borrowed from the dashboard state.
pub struct DashboardView<'a, P> {
    pub size: TerminalSize,
    pub geometry: Option<PaneGeometry>,
    pub focused: PaneIndex,
    pub panes: &'a [P; PANE_COUNT],
}

pub struct DashboardRenderer {
    theme: Theme,
}

impl DashboardRenderer {
    pub fn new(theme: Theme) -> Self {
        Self { theme }
    }

    /// Draws the four framed panes in a 2×2 grid anchored at the top-left of the frame.
    ///
    /// Nothing is drawn before the terminal has been sized or while no geometry has been computed yet.
    /// Pane boxes that extend past the frame (the terminal shrank below the minimum) are clipped.
    pub fn render<P: PaneWidget>(&self, frame: &mut Frame, view: &DashboardView<'_, P>) {
        if !view.size.is_sized() {
            return;
        }
        let Some(geometry) = view.geometry else {
            return;
        };

        let bounds = frame.area();
        for index in PaneIndex::all() {
            let area = geometry.pane_rect(index).intersection(bounds);
            if area.is_empty() {
                continue;
            }
            let pane = &view.panes[index.get()];
            let pane_frame = PaneFrame { title: pane.title(), focused: index == view.focused, theme: &self.theme };
            let content = pane_frame.render(frame, area);
            pane.render(frame, content, &self.theme);
        }
    }
}
