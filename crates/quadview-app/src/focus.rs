use quadview_tui::pane::{PaneIndex, PaneWidget, PANE_COUNT};

/// Owns which pane has keyboard focus.
///
/// Every transition takes the panes along and focuses the new one while blurring the other three, so
/// the index and the panes' own focus flags cannot drift apart.
#[derive(Debug)]
pub struct FocusController {
    index: PaneIndex,
}

impl FocusController {
    /// Starts on the top-left pane.
    pub fn new<P: PaneWidget>(panes: &mut [P; PANE_COUNT]) -> Self {
        let controller = Self { index: PaneIndex::TOP_LEFT };
        controller.apply(panes);
        controller
    }

    pub fn index(&self) -> PaneIndex {
        self.index
    }

    pub fn next<P: PaneWidget>(&mut self, panes: &mut [P; PANE_COUNT]) {
        self.transition(self.index.next(), panes);
    }

    pub fn previous<P: PaneWidget>(&mut self, panes: &mut [P; PANE_COUNT]) {
        self.transition(self.index.previous(), panes);
    }

    /// Out-of-range indices are ignored.
    pub fn set<P: PaneWidget>(&mut self, index: usize, panes: &mut [P; PANE_COUNT]) {
        match PaneIndex::new(index) {
            Some(index) => self.transition(index, panes),
            None => tracing::debug!(index, "ignoring focus request outside the grid"),
        }
    }

    fn transition<P: PaneWidget>(&mut self, index: PaneIndex, panes: &mut [P; PANE_COUNT]) {
        tracing::debug!(from = self.index.name(), to = index.name(), "focus change");
        self.index = index;
        self.apply(panes);
    }

    fn apply<P: PaneWidget>(&self, panes: &mut [P; PANE_COUNT]) {
        for (i, pane) in panes.iter_mut().enumerate() {
            if i == self.index.get() {
                pane.focus();
            } else {
                pane.blur();
            }
        }
    }
}
