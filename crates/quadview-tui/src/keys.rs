use std::collections::HashMap;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use indexmap::IndexMap;

use quadview_config::KeyBinding;

use crate::pane::PaneCommand;

/// Parse a key string such as `"j"`, `"ctrl+d"`, `"shift+tab"` or `"pagedown"`.
///
/// Modifier and named-key parts are case-insensitive. A single letter keeps its case, so `"G"` and
/// `"shift+g"` both bind the shifted key.
pub fn parse_key_string(s: &str) -> Option<KeyEvent> {
    let s = s.trim();
    let parts: Vec<&str> = s.split('+').collect();

    let mut modifiers = KeyModifiers::NONE;

    let key_part = if parts.len() == 1 {
        parts[0]
    } else {
        for &modifier in &parts[..parts.len() - 1] {
            match modifier.to_ascii_lowercase().as_str() {
                "alt" => modifiers |= KeyModifiers::ALT,
                "ctrl" => modifiers |= KeyModifiers::CONTROL,
                "shift" => modifiers |= KeyModifiers::SHIFT,
                _ => return None,
            }
        }
        parts[parts.len() - 1]
    };

    let mut chars = key_part.chars();
    let code = if let (Some(c), None) = (chars.next(), chars.next()) {
        KeyCode::Char(c)
    } else {
        match key_part.to_ascii_lowercase().as_str() {
            "tab" => KeyCode::Tab,
            "enter" => KeyCode::Enter,
            "esc" => KeyCode::Esc,
            "backspace" => KeyCode::Backspace,
            "delete" => KeyCode::Delete,
            "up" => KeyCode::Up,
            "down" => KeyCode::Down,
            "left" => KeyCode::Left,
            "right" => KeyCode::Right,
            "home" => KeyCode::Home,
            "end" => KeyCode::End,
            "pageup" => KeyCode::PageUp,
            "pagedown" => KeyCode::PageDown,
            "space" => KeyCode::Char(' '),
            f if f.starts_with('f') => KeyCode::F(f[1..].parse().ok()?),
            _ => return None,
        }
    };

    Some(normalize_key(KeyEvent::new(code, modifiers)))
}

/// Reduce a key event to the form bindings are stored in.
///
/// Kind and state are dropped. Shift+Tab becomes `BackTab` without SHIFT. A shifted letter is an
/// uppercase char with SHIFT, however the terminal reported it. Ctrl+letter is lowercase without SHIFT,
/// since most terminals cannot tell Ctrl+Shift+letter apart from Ctrl+letter.
pub fn normalize_key(key: KeyEvent) -> KeyEvent {
    let mut code = key.code;
    let mut modifiers = key.modifiers;
    match code {
        KeyCode::Tab if modifiers.contains(KeyModifiers::SHIFT) => {
            code = KeyCode::BackTab;
            modifiers.remove(KeyModifiers::SHIFT);
        }
        KeyCode::BackTab => modifiers.remove(KeyModifiers::SHIFT),
        KeyCode::Char(c) if c.is_ascii_alphabetic() => {
            if modifiers.contains(KeyModifiers::CONTROL) {
                code = KeyCode::Char(c.to_ascii_lowercase());
                modifiers.remove(KeyModifiers::SHIFT);
            } else if c.is_ascii_uppercase() || modifiers.contains(KeyModifiers::SHIFT) {
                code = KeyCode::Char(c.to_ascii_uppercase());
                modifiers.insert(KeyModifiers::SHIFT);
            }
        }
        _ => {}
    }
    KeyEvent::new(code, modifiers)
}

/// Key to table-navigation lookup, built once from the `[keybindings.pane]` section.
#[derive(Debug, Clone, Default)]
pub struct PaneKeymap {
    bindings: HashMap<KeyEvent, PaneCommand>,
}

impl PaneKeymap {
    pub fn from_config(config: &IndexMap<String, KeyBinding>) -> Self {
        let mut bindings = HashMap::new();
        for (name, binding) in config {
            let Some(cmd) = PaneCommand::from_name(name) else {
                continue;
            };
            for key in binding.keys().filter_map(parse_key_string) {
                bindings.insert(key, cmd);
            }
        }
        Self { bindings }
    }

    pub fn lookup(&self, key: KeyEvent) -> Option<PaneCommand> {
        self.bindings.get(&normalize_key(key)).copied()
    }
}
