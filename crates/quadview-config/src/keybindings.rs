use std::collections::HashMap;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Keys bound to one action: either `"q"` or `["up", "k"]` in TOML.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum KeyBinding {
    Single(String),
    Multiple(Vec<String>),
}

impl KeyBinding {
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        let keys: &[String] = match self {
            Self::Single(key) => std::slice::from_ref(key),
            Self::Multiple(keys) => keys,
        };
        keys.iter().map(String::as_str)
    }
}

impl From<&str> for KeyBinding {
    fn from(key: &str) -> Self {
        Self::Single(key.to_string())
    }
}

#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct KeybindingsConfig {
    #[serde(default)]
    pub global: IndexMap<String, KeyBinding>,
    #[serde(default)]
    pub pane: IndexMap<String, KeyBinding>,
}

impl KeybindingsConfig {
    fn group_entries(&self) -> [(&str, &IndexMap<String, KeyBinding>); 2] {
        [("global", &self.global), ("pane", &self.pane)]
    }
}

/// Returns `(group, action, error)` for every key string that cannot be parsed.
pub fn validate_keybindings(config: &KeybindingsConfig) -> Vec<(String, String, String)> {
    let mut errors = Vec::new();
    for (group, map) in config.group_entries() {
        for (name, binding) in map {
            for key_str in binding.keys() {
                if let Err(e) = validate_key_string(key_str) {
                    errors.push((group.to_string(), name.clone(), e));
                }
            }
        }
    }
    errors
}

/// Returns `(key, first_group, second_group)` for every key bound more than once.
pub fn check_collisions(config: &KeybindingsConfig) -> Vec<(String, String, String)> {
    let mut seen: HashMap<String, String> = HashMap::new();
    let mut collisions = Vec::new();
    for (group, map) in config.group_entries() {
        for binding in map.values() {
            for key_str in binding.keys() {
                let normalized = normalize_key_string(key_str);
                if let Some(prev_group) = seen.get(&normalized) {
                    collisions.push((key_str.to_string(), prev_group.clone(), group.to_string()));
                } else {
                    seen.insert(normalized, group.to_string());
                }
            }
        }
    }
    collisions
}

// Letters keep their case: "g" and "G" are different keys, but "G" and "shift+g" are the same one.
// Ctrl+letter ignores case and shift.
fn normalize_key_string(s: &str) -> String {
    let parts: Vec<&str> = s.trim().split('+').collect();
    let (modifier_parts, key_part) = parts.split_at(parts.len() - 1);
    let mut modifiers: Vec<String> = modifier_parts.iter().map(|m| m.to_ascii_lowercase()).collect();
    let key_part = key_part[0];

    let mut chars = key_part.chars();
    let key = match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii_alphabetic() => {
            if modifiers.iter().any(|m| m == "ctrl") {
                modifiers.retain(|m| m != "shift");
                c.to_ascii_lowercase().to_string()
            } else if c.is_ascii_uppercase() || modifiers.iter().any(|m| m == "shift") {
                modifiers.push("shift".to_string());
                c.to_ascii_uppercase().to_string()
            } else {
                c.to_string()
            }
        }
        (Some(_), None) => key_part.to_string(),
        _ => key_part.to_ascii_lowercase(),
    };

    modifiers.sort();
    modifiers.dedup();
    modifiers.push(key);
    modifiers.join("+")
}

fn validate_key_string(s: &str) -> Result<(), String> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return Err("empty key string".to_string());
    }
    let parts: Vec<&str> = trimmed.split('+').collect();
    if parts.len() == 1 {
        validate_key_part(parts[0])?;
        return Ok(());
    }
    for &modifier in &parts[..parts.len() - 1] {
        match modifier.to_ascii_lowercase().as_str() {
            "alt" | "ctrl" | "shift" => {}
            other => return Err(format!("unknown modifier: {other}")),
        }
    }
    validate_key_part(parts[parts.len() - 1])
}

fn validate_key_part(s: &str) -> Result<(), String> {
    let lower = s.to_ascii_lowercase();
    match lower.as_str() {
        "tab" | "enter" | "esc" | "backspace" | "delete" | "up" | "down" | "left" | "right" | "home" | "end"
        | "pageup" | "pagedown" | "space" => Ok(()),
        _ if s.chars().count() == 1 => Ok(()),
        f if f.starts_with('f') => f[1..].parse::<u8>().map(|_| ()).map_err(|_| format!("invalid function key: {s}")),
        _ => Err(format!("unrecognized key: {s}")),
    }
}
