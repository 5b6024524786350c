use std::rc::Rc;
use std::time::Duration;

use ratatui::backend::Backend;
use ratatui::Terminal;

use quadview_config::AppConfig;
use quadview_tui::keys::PaneKeymap;
use quadview_tui::renderer::DashboardRenderer;
use quadview_tui::table::TablePane;
use quadview_tui::theme::Theme;

use crate::event::{AppEvent, EventHandler};
use crate::keybindings::KeybindingDispatcher;
use crate::sample::sample_panes;
use crate::state::DashboardState;

pub struct App {
    running: bool,
    tick_rate: Duration,
    state: DashboardState<TablePane>,
    renderer: DashboardRenderer,
}

impl App {
    pub fn new(config: &AppConfig) -> Self {
        let keymap = Rc::new(PaneKeymap::from_config(&config.keybindings.pane));
        let dispatcher = KeybindingDispatcher::from_config(&config.keybindings);
        let state = DashboardState::new(sample_panes(keymap), dispatcher);

        Self {
            running: true,
            tick_rate: Duration::from_millis(config.tick_rate_ms()),
            state,
            renderer: DashboardRenderer::new(Theme::from_config(&config.theme)),
        }
    }

    pub async fn run(&mut self, terminal: &mut Terminal<impl Backend>) -> anyhow::Result<()> {
        let mut events = EventHandler::new(self.tick_rate);

        // crossterm only reports later resizes; seed the layout with the starting size
        let size = terminal.size()?;
        self.handle_event(AppEvent::Resize(size.width, size.height));

        while self.running {
            terminal.draw(|frame| self.renderer.render(frame, &self.state.view()))?;
            let event = events.next().await?;
            self.handle_event(event);
        }

        Ok(())
    }

    fn handle_event(&mut self, event: AppEvent) {
        if self.state.update(event).is_break() {
            tracing::info!("Quit requested");
            self.running = false;
        }
    }
}
