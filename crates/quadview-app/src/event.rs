use std::time::Duration;

use crossterm::event::{self, Event, KeyEvent};
use tokio::sync::mpsc;

/// How long one blocking poll waits before yielding back to the select loop.
const INPUT_POLL: Duration = Duration::from_millis(50);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    Key(KeyEvent),
    Resize(u16, u16),
    Tick,
    /// Mouse, focus-change and paste events; delivered but never acted on.
    Other,
}

impl From<Event> for AppEvent {
    fn from(event: Event) -> Self {
        match event {
            Event::Key(key) => Self::Key(key),
            Event::Resize(width, height) => Self::Resize(width, height),
            _ => Self::Other,
        }
    }
}

/// Merges terminal input and a periodic tick into one stream the run loop awaits.
pub struct EventHandler {
    rx: mpsc::UnboundedReceiver<AppEvent>,
}

impl EventHandler {
    pub fn new(tick_rate: Duration) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        tokio::spawn(pump_events(tx, tick_rate));
        Self { rx }
    }

    pub async fn next(&mut self) -> anyhow::Result<AppEvent> {
        self.rx.recv().await.ok_or_else(|| anyhow::anyhow!("Event channel closed"))
    }
}

async fn pump_events(tx: mpsc::UnboundedSender<AppEvent>, tick_rate: Duration) {
    let mut ticks = tokio::time::interval(tick_rate);
    loop {
        let event = tokio::select! {
            _ = ticks.tick() => AppEvent::Tick,
            input = read_input() => match input {
                Some(event) => AppEvent::from(event),
                None => continue,
            },
        };
        // receiver gone: the app has exited
        if tx.send(event).is_err() {
            break;
        }
    }
}

async fn read_input() -> Option<Event> {
    tokio::task::spawn_blocking(|| match event::poll(INPUT_POLL) {
        Ok(true) => event::read().ok(),
        _ => None,
    })
    .await
    .ok()
    .flatten()
}
