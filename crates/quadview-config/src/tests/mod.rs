use std::io::Write;

use super::*;

#[test]
fn default_config_has_expected_tick_rate() {
    let config = AppConfig::default();
    assert_eq!(config.tick_rate_ms(), 250);
}

#[test]
fn default_keybindings_cover_quit_and_focus() {
    let config = AppConfig::default();
    let global = &config.keybindings.global;
    assert_eq!(global.get("quit"), Some(&KeyBinding::from("q")));
    assert_eq!(global.get("interrupt"), Some(&KeyBinding::from("ctrl+c")));
    assert_eq!(global.get("escape"), Some(&KeyBinding::from("esc")));
    assert_eq!(global.get("focus_next"), Some(&KeyBinding::from("tab")));
    assert_eq!(global.get("focus_prev"), Some(&KeyBinding::from("shift+tab")));
    for n in 1..=4 {
        assert!(global.contains_key(&format!("focus_pane_{n}")));
    }
}

#[test]
fn default_pane_bindings_accept_lists() {
    let config = AppConfig::default();
    let line_down = config.keybindings.pane.get("line_down").unwrap();
    assert_eq!(line_down.keys().collect::<Vec<_>>(), vec!["down", "j"]);
    let page_down = config.keybindings.pane.get("page_down").unwrap();
    assert_eq!(page_down.keys().count(), 3);
}

#[test]
fn default_keybindings_are_valid_and_unique() {
    let config = AppConfig::default();
    assert!(validate_keybindings(&config.keybindings).is_empty());
    assert!(check_collisions(&config.keybindings).is_empty());
}

fn embedded_section(name: &str) -> toml::Value {
    let defaults: toml::Table = toml::from_str(DEFAULT_CONFIG).unwrap();
    defaults[name].clone()
}

#[test]
fn theme_fallback_matches_embedded_defaults() {
    let fallback = toml::Value::try_from(ThemeConfig::default()).unwrap();
    assert_eq!(fallback, embedded_section("theme"));
}

#[test]
fn general_fallback_matches_embedded_defaults() {
    let fallback = toml::Value::try_from(GeneralConfig::default()).unwrap();
    assert_eq!(fallback, embedded_section("general"));
}

#[test]
fn parse_general_from_toml() {
    let raw = r#"
[general]
tick-rate-ms = 100
"#;
    let config: AppConfig = toml::from_str(raw).unwrap();
    assert_eq!(config.general.tick_rate_ms, 100);
    assert!(config.keybindings.global.is_empty());
}

#[test]
fn partial_toml_only_general_merges_with_defaults() {
    let mut base = AppConfig::default();
    let user: AppConfig = toml::from_str("[general]\ntick_rate_ms = 500\n").unwrap();
    base.merge(user);

    assert_eq!(base.general.tick_rate_ms, 500);
    assert_eq!(base.keybindings.global.get("quit"), Some(&KeyBinding::from("q")));
    assert!(!base.keybindings.pane.is_empty());
}

#[test]
fn user_keybinding_overrides_single_action() {
    let mut base = AppConfig::default();
    let user: AppConfig = toml::from_str(
        r#"
[keybindings.global]
quit = "x"

[keybindings.pane]
line_down = ["down", "n"]
"#,
    )
    .unwrap();
    base.merge(user);

    assert_eq!(base.keybindings.global.get("quit"), Some(&KeyBinding::from("x")));
    assert_eq!(base.keybindings.global.get("focus_next"), Some(&KeyBinding::from("tab")));
    let line_down = base.keybindings.pane.get("line_down").unwrap();
    assert_eq!(line_down.keys().collect::<Vec<_>>(), vec!["down", "n"]);
    assert!(base.keybindings.pane.contains_key("goto_top"));
}

#[test]
fn partial_theme_keeps_unset_colors() {
    let config: AppConfig = toml::from_str("[theme]\nborder-active = \"red\"\n").unwrap();
    assert_eq!(config.theme.border_active, "red");
    assert_eq!(config.theme.border, ThemeConfig::default().border);
}

#[test]
fn load_from_file_merges_over_defaults() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[general]\ntick_rate_ms = 40\n\n[keybindings.global]\nfocus_next = \"n\"").unwrap();

    let config = AppConfig::load_from(file.path()).unwrap();
    assert_eq!(config.tick_rate_ms(), 40);
    assert_eq!(config.keybindings.global.get("focus_next"), Some(&KeyBinding::from("n")));
    assert_eq!(config.keybindings.global.get("quit"), Some(&KeyBinding::from("q")));
}

#[test]
fn load_from_rejects_invalid_toml() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[general\ntick_rate_ms = ").unwrap();

    assert!(AppConfig::load_from(file.path()).is_err());
}

#[test]
fn load_from_missing_file_errors() {
    let dir = tempfile::tempdir().unwrap();
    assert!(AppConfig::load_from(&dir.path().join("absent.toml")).is_err());
}

#[test]
fn default_path_ends_with_app_dir() {
    let path = AppConfig::default_path();
    assert!(path.ends_with("quadview/config.toml"));
}
