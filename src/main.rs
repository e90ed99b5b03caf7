// numshow - a clickable number display for the terminal
//
// Hosts one presentational component: a bordered container showing an
// integer, which invokes a callback when clicked. Everything around it is
// plumbing:
// - TUI (ratatui): renders the component and routes mouse/key input
// - Config: file + environment + CLI flag precedence
// - Logging: tracing events captured in memory for the status bar

mod cli;
mod config;
mod logging;
mod theme;
mod tui;

use anyhow::Result;
use clap::Parser;
use config::Config;
use logging::{LogBuffer, TuiLogLayer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    let args = cli::Cli::parse();

    // Subcommands (config --show etc.) run and exit before the TUI starts
    if cli::handle_cli(&args) {
        return Ok(());
    }

    let mut config = Config::from_env();
    args.apply_to(&mut config);

    // Logs go to an in-memory buffer shown in the status bar, never to
    // stdout - raw output would garble the alternate screen
    let log_buffer = LogBuffer::new();
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(TuiLogLayer::new(log_buffer.clone()))
        .init();

    tracing::info!(
        "numshow v{} starting (number={}, theme={})",
        config::VERSION,
        config.num_to_show,
        config.theme
    );

    tui::run_tui(config, log_buffer).await
}
