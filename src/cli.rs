use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "overtap", about = "Overlay automation test harness (TUI + replay)")]
pub struct Cli {
    /// Path to config file (default: ./config.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Start the interactive TUI shell
    Run,
    /// Run the scenario engine over a recorded frame sequence and print events
    Replay {
        /// Path to a JSON file with the scenario list
        #[arg(long)]
        scenarios: PathBuf,
        /// Path to a JSON file with the frame sequence
        #[arg(long)]
        frames: PathBuf,
    },
}

impl Cli {
    pub fn command_or_default(&self) -> Command {
        self.command.clone().unwrap_or(Command::Run)
    }
}
