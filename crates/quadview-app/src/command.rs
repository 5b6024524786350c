use quadview_tui::pane::PaneIndex;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Quit,
    FocusNext,
    FocusPrev,
    FocusPane(PaneIndex),
}
