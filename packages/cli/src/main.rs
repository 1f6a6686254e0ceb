mod commands;
mod config;

use clap::{Parser, Subcommand};
use colored::Colorize;
use commands::{init, inspect, replay, InitArgs, InspectArgs, ReplayArgs};
use tracing::Level;

/// Funnel CLI - Drive the page builder editor from the command line
#[derive(Parser, Debug)]
#[command(name = "funnel")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Log every dispatched action
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write a default funnel.config.json
    Init(InitArgs),

    /// Replay an action script against a fresh or loaded page
    Replay(ReplayArgs),

    /// Validate a saved page and print its outline
    Inspect(InspectArgs),
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(if cli.verbose { Level::DEBUG } else { Level::WARN })
        .with_writer(std::io::stderr)
        .init();

    let cwd = match std::env::current_dir() {
        Ok(dir) => dir.display().to_string(),
        Err(err) => {
            eprintln!("{} Cannot get current directory: {}", "Error:".red().bold(), err);
            std::process::exit(1);
        }
    };

    let result = match cli.command {
        Command::Init(args) => init(args, &cwd),
        Command::Replay(args) => replay(args, &cwd),
        Command::Inspect(args) => inspect(args, &cwd),
    };

    if let Err(err) = result {
        eprintln!();
        eprintln!("{} {:#}", "Error:".red().bold(), err);
        eprintln!();
        std::process::exit(1);
    }
}
