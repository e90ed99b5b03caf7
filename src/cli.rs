// CLI module - command-line argument parsing and handlers
//
// Provides flags to override the displayed number and theme, plus a
// configuration subcommand:
// - config --show: Display effective configuration
// - config --reset: Regenerate config file with defaults
// - config --path: Show config file path

use crate::config::{Config, VERSION};
use clap::{Parser, Subcommand};

/// numshow - a clickable number display for the terminal
#[derive(Parser)]
#[command(name = "numshow")]
#[command(version = VERSION)]
#[command(about = "Displays a number and reacts to clicks", long_about = None)]
pub struct Cli {
    /// Number to display (overrides config file and environment)
    #[arg(short, long)]
    pub number: Option<i64>,

    /// Theme name: auto, dracula, nord, gruvbox
    #[arg(short, long)]
    pub theme: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Manage configuration
    Config {
        /// Show effective configuration
        #[arg(long)]
        show: bool,

        /// Reset config file to defaults
        #[arg(long)]
        reset: bool,

        /// Show config file path
        #[arg(long)]
        path: bool,
    },
}

impl Cli {
    /// Apply CLI overrides on top of the loaded configuration
    pub fn apply_to(&self, config: &mut Config) {
        if let Some(number) = self.number {
            config.num_to_show = number;
        }
        if let Some(theme) = &self.theme {
            config.theme = theme.clone();
        }
    }
}

/// Handle CLI subcommands. Returns true if a command was handled (exit after).
pub fn handle_cli(cli: &Cli) -> bool {
    match &cli.command {
        Some(Commands::Config { show, reset, path }) => {
            if *path {
                handle_config_path();
            } else if *show {
                handle_config_show();
            } else if *reset {
                handle_config_reset();
            } else {
                // No flag provided, show usage
                println!("Usage: numshow config [--show|--reset|--path]");
                println!();
                println!("Options:");
                println!("  --show    Display effective configuration");
                println!("  --reset   Reset config file to defaults");
                println!("  --path    Show config file path");
            }
            true
        }
        None => false, // No subcommand, run the TUI
    }
}

fn handle_config_path() {
    match Config::config_path() {
        Some(path) => println!("{}", path.display()),
        None => {
            eprintln!("Error: Could not determine config path");
            std::process::exit(1);
        }
    }
}

fn handle_config_show() {
    let config = Config::from_env();
    print!("{}", config.to_toml());
}

fn handle_config_reset() {
    match Config::write_default() {
        Ok(path) => println!("Wrote default config to {}", path.display()),
        Err(e) => {
            eprintln!("Error: Failed to write config: {e}");
            std::process::exit(1);
        }
    }
}
