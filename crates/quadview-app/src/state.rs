use std::ops::ControlFlow;

use crossterm::event::{KeyEvent, KeyEventKind};

use quadview_tui::layout::{self, PaneGeometry, TerminalSize};
use quadview_tui::pane::{PaneIndex, PaneWidget, PANE_COUNT};
use quadview_tui::renderer::DashboardView;

use crate::command::Command;
use crate::event::AppEvent;
use crate::focus::FocusController;
use crate::keybindings::KeybindingDispatcher;

/// The four panes plus everything the dashboard decides for them: size, geometry and focus.
pub struct DashboardState<P: PaneWidget> {
    size: TerminalSize,
    geometry: Option<PaneGeometry>,
    panes: [P; PANE_COUNT],
    focus: FocusController,
    dispatcher: KeybindingDispatcher,
}

impl<P: PaneWidget> DashboardState<P> {
    pub fn new(mut panes: [P; PANE_COUNT], dispatcher: KeybindingDispatcher) -> Self {
        let focus = FocusController::new(&mut panes);
        Self { size: TerminalSize::default(), geometry: None, panes, focus, dispatcher }
    }

    /// Apply one event. `Break` means the user asked to quit.
    pub fn update(&mut self, event: AppEvent) -> ControlFlow<()> {
        match event {
            AppEvent::Resize(width, height) => {
                self.resize(TerminalSize::new(width, height));
                ControlFlow::Continue(())
            }
            AppEvent::Key(key) => self.handle_key(key),
            AppEvent::Tick | AppEvent::Other => ControlFlow::Continue(()),
        }
    }

    fn resize(&mut self, size: TerminalSize) {
        self.size = size;
        let Some(geometry) = layout::compute_geometry(size) else {
            tracing::debug!(width = size.width, height = size.height, "terminal below minimum; keeping layout");
            return;
        };

        tracing::debug!(
            width = size.width,
            height = size.height,
            pane_width = geometry.outer_width,
            pane_height = geometry.outer_height,
            "recomputed pane geometry"
        );
        self.geometry = Some(geometry);
        for pane in &mut self.panes {
            pane.set_height(geometry.content_height);
            pane.set_width(geometry.content_width);
        }
    }

    fn handle_key(&mut self, key: KeyEvent) -> ControlFlow<()> {
        if key.kind != KeyEventKind::Press {
            return ControlFlow::Continue(());
        }

        match self.dispatcher.dispatch(key) {
            Some(Command::Quit) => return ControlFlow::Break(()),
            Some(Command::FocusNext) => self.focus.next(&mut self.panes),
            Some(Command::FocusPrev) => self.focus.previous(&mut self.panes),
            Some(Command::FocusPane(index)) => self.focus.set(index.get(), &mut self.panes),
            None => self.panes[self.focus.index().get()].handle_key(key),
        }
        ControlFlow::Continue(())
    }

    pub fn size(&self) -> TerminalSize {
        self.size
    }

    pub fn geometry(&self) -> Option<PaneGeometry> {
        self.geometry
    }

    pub fn focused(&self) -> PaneIndex {
        self.focus.index()
    }

    pub fn panes(&self) -> &[P; PANE_COUNT] {
        &self.panes
    }

    pub fn view(&self) -> DashboardView<'_, P> {
        DashboardView { size: self.size(), geometry: self.geometry(), focused: self.focused(), panes: self.panes() }
    }
}
