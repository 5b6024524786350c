use std::collections::HashMap;

use crossterm::event::KeyEvent;

use quadview_config::KeybindingsConfig;
use quadview_tui::keys::{normalize_key, parse_key_string};
use quadview_tui::pane::PaneIndex;

use crate::command::Command;

/// Resolves dashboard-level keys. Anything it does not claim belongs to the focused pane.
pub struct KeybindingDispatcher {
    global_bindings: HashMap<KeyEvent, Command>,
}

impl KeybindingDispatcher {
    pub fn from_config(config: &KeybindingsConfig) -> Self {
        let mut global_bindings = HashMap::new();

        for (name, binding) in &config.global {
            let Some(cmd) = command_from_name(name) else {
                tracing::warn!("Unknown global keybinding action: {name}");
                continue;
            };
            for key_str in binding.keys() {
                match parse_key_string(key_str) {
                    Some(key) => {
                        global_bindings.insert(key, cmd);
                    }
                    None => tracing::warn!("Skipping invalid key \"{key_str}\" for {name}"),
                }
            }
        }

        Self { global_bindings }
    }

    pub fn dispatch(&self, key: KeyEvent) -> Option<Command> {
        self.global_bindings.get(&normalize_key(key)).copied()
    }
}

fn command_from_name(name: &str) -> Option<Command> {
    match name {
        "quit" | "interrupt" | "escape" => Some(Command::Quit),
        "focus_next" => Some(Command::FocusNext),
        "focus_prev" => Some(Command::FocusPrev),
        s if s.starts_with("focus_pane_") => s["focus_pane_".len()..]
            .parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(PaneIndex::new)
            .map(Command::FocusPane),
        _ => None,
    }
}
