mod app;
mod command;
mod event;
mod focus;
mod keybindings;
mod sample;
mod state;

use std::io;

use clap::Parser;
use crossterm::execute;
use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use quadview_config::{check_collisions, validate_keybindings, AppConfig};

use crate::app::App;

/// Four scrollable tables in a 2x2 grid that reflows with the terminal.
///
/// Tab / Shift+Tab move focus, Alt+1..4 jump to a pane, q / Esc / Ctrl+C quit.
#[derive(Parser, Debug)]
#[command(name = "quadview", version, about)]
struct Cli {}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let config = AppConfig::load();
    tracing::info!("Starting quadview (config: {})", AppConfig::default_path().display());
    report_keybinding_problems(&config);

    install_panic_hook();

    terminal::enable_raw_mode()?;
    execute!(io::stdout(), EnterAlternateScreen)?;

    let result = run(&config).await;

    terminal::disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;

    tracing::info!("Exiting quadview");
    result
}

async fn run(config: &AppConfig) -> anyhow::Result<()> {
    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)?;
    let mut app = App::new(config);
    app.run(&mut terminal).await
}

fn report_keybinding_problems(config: &AppConfig) {
    for (group, action, error) in validate_keybindings(&config.keybindings) {
        tracing::warn!("Invalid keybinding {group}.{action}: {error}");
    }
    for (key, first, second) in check_collisions(&config.keybindings) {
        tracing::warn!("Key \"{key}\" is bound more than once ([{first}] and [{second}])");
    }
}

fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = terminal::disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));
}
