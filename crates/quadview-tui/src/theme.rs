use quadview_config::ThemeConfig;
use ratatui::style::{Color, Modifier, Style};

/// Read-only styles for the whole dashboard, built once at startup and lent to every render call.
#[derive(Debug, Clone)]
pub struct Theme {
    pub border: Style,
    pub border_active: Style,
    pub title: Style,
    pub header: Style,
    pub header_rule: Style,
    pub selection: Style,
    pub text: Style,
    pub text_dim: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_config(&ThemeConfig::default())
    }
}

impl Theme {
    pub fn from_config(config: &ThemeConfig) -> Self {
        let border = parse_color_or_default(&config.border);
        let border_active = parse_color_or_default(&config.border_active);
        let title = parse_color_or_default(&config.title);
        let header_fg = parse_color_or_default(&config.header_fg);
        let header_rule = parse_color_or_default(&config.header_rule);
        let selection_fg = parse_color_or_default(&config.selection_fg);
        let selection_bg = parse_color_or_default(&config.selection_bg);
        let text = parse_color_or_default(&config.text);
        let text_dim = parse_color_or_default(&config.text_dim);

        Self {
            border: Style::default().fg(border),
            border_active: Style::default().fg(border_active).add_modifier(Modifier::BOLD),
            title: Style::default().fg(title).add_modifier(Modifier::BOLD),
            header: Style::default().fg(header_fg).add_modifier(Modifier::BOLD),
            header_rule: Style::default().fg(header_rule),
            selection: Style::default().fg(selection_fg).bg(selection_bg).add_modifier(Modifier::BOLD),
            text: Style::default().fg(text),
            text_dim: Style::default().fg(text_dim),
        }
    }
}

fn parse_color_or_default(s: &str) -> Color {
    parse_color(s).unwrap_or(Color::Reset)
}

/// Parse a color string into a ratatui `Color`.
///
/// Supported formats:
/// - `"#7d56f4"`: hex RGB
/// - `"rgb(125,86,244)"`: functional RGB
/// - `"212"`: 256-color palette index
/// - `"red"`, `"blue"`, etc.: named colors
/// - `"default"`: terminal default (`Color::Reset`)
pub fn parse_color(s: &str) -> anyhow::Result<Color> {
    let s = s.trim();

    if s.eq_ignore_ascii_case("default") {
        return Ok(Color::Reset);
    }

    if let Some(hex) = s.strip_prefix('#') {
        if hex.len() != 6 {
            anyhow::bail!("invalid hex color \"{s}\": expected 6 hex digits after '#'");
        }
        let r = u8::from_str_radix(&hex[0..2], 16)
            .map_err(|_| anyhow::anyhow!("invalid hex color \"{s}\": bad red component"))?;
        let g = u8::from_str_radix(&hex[2..4], 16)
            .map_err(|_| anyhow::anyhow!("invalid hex color \"{s}\": bad green component"))?;
        let b = u8::from_str_radix(&hex[4..6], 16)
            .map_err(|_| anyhow::anyhow!("invalid hex color \"{s}\": bad blue component"))?;
        return Ok(Color::Rgb(r, g, b));
    }

    if let Some(inner) = s.strip_prefix("rgb(").and_then(|s| s.strip_suffix(')')) {
        let parts: Vec<&str> = inner.split(',').collect();
        if parts.len() != 3 {
            anyhow::bail!("invalid rgb color \"{s}\": expected rgb(r,g,b)");
        }
        let r: u8 = parts[0].trim().parse().map_err(|_| anyhow::anyhow!("invalid rgb color \"{s}\": bad red value"))?;
        let g: u8 =
            parts[1].trim().parse().map_err(|_| anyhow::anyhow!("invalid rgb color \"{s}\": bad green value"))?;
        let b: u8 =
            parts[2].trim().parse().map_err(|_| anyhow::anyhow!("invalid rgb color \"{s}\": bad blue value"))?;
        return Ok(Color::Rgb(r, g, b));
    }

    if !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit()) {
        let index: u8 = s.parse().map_err(|_| anyhow::anyhow!("invalid palette color \"{s}\": expected 0-255"))?;
        return Ok(Color::Indexed(index));
    }

    match s.to_lowercase().as_str() {
        "black" => Ok(Color::Black),
        "red" => Ok(Color::Red),
        "green" => Ok(Color::Green),
        "yellow" => Ok(Color::Yellow),
        "blue" => Ok(Color::Blue),
        "magenta" => Ok(Color::Magenta),
        "cyan" => Ok(Color::Cyan),
        "gray" | "grey" => Ok(Color::Gray),
        "darkgray" | "darkgrey" | "dark_gray" | "dark_grey" => Ok(Color::DarkGray),
        "lightred" | "light_red" => Ok(Color::LightRed),
        "lightgreen" | "light_green" => Ok(Color::LightGreen),
        "lightyellow" | "light_yellow" => Ok(Color::LightYellow),
        "lightblue" | "light_blue" => Ok(Color::LightBlue),
        "lightmagenta" | "light_magenta" => Ok(Color::LightMagenta),
        "lightcyan" | "light_cyan" => Ok(Color::LightCyan),
        "white" => Ok(Color::White),
        _ => anyhow::bail!(
            "unknown color \"{s}\": expected hex (#rrggbb), rgb(r,g,b), a palette index, a named color, or \"default\""
        ),
    }
}
