use std::path::PathBuf;

use clap::Parser;
use uikata::config::Config;
use uikata::{trace, ui};

/// Small terminal UI exercises: a bounded counter, a background-color
/// switcher, and a props-driven card gallery.
#[derive(Debug, Parser)]
#[command(name = "uikata", version, about)]
struct Cli {
    /// Path to the config file (defaults to the platform config dir).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Screen to open at startup: counter, colors, or cards.
    #[arg(long)]
    screen: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    trace::init_tracing();

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    if let Some(screen) = cli.screen {
        config.defaults.screen = screen;
    }

    ui::runtime::run(&config)
}
