use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ThemeConfig {
    pub border: String,
    #[serde(alias = "border-active")]
    pub border_active: String,
    pub title: String,
    #[serde(alias = "header-fg")]
    pub header_fg: String,
    #[serde(alias = "header-rule")]
    pub header_rule: String,
    #[serde(alias = "selection-fg")]
    pub selection_fg: String,
    #[serde(alias = "selection-bg")]
    pub selection_bg: String,
    pub text: String,
    #[serde(alias = "text-dim")]
    pub text_dim: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            border: "#6b7280".into(),
            border_active: "#7d56f4".into(),
            title: "default".into(),
            header_fg: "default".into(),
            header_rule: "240".into(),
            selection_fg: "212".into(),
            selection_bg: "default".into(),
            text: "default".into(),
            text_dim: "#6c7086".into(),
        }
    }
}
