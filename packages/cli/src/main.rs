mod commands;

use clap::{Parser, Subcommand};
use colored::Colorize;
use commands::{export, nav, show, ExportArgs, NavArgs, ShowArgs};

/// Lectern CLI - single-screen presentation decks from the terminal
#[derive(Parser, Debug)]
#[command(name = "lectern")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render one page of the deck as HTML
    Show(ShowArgs),

    /// Print the navigation list
    Nav(NavArgs),

    /// Export the deck as default-meeting.json
    Export(ExportArgs),
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let cwd = std::env::current_dir()
        .expect("Cannot get current directory")
        .display()
        .to_string();

    let result = match cli.command {
        Command::Show(args) => show(args, &cwd),
        Command::Nav(args) => nav(args, &cwd),
        Command::Export(args) => export(args, &cwd),
    };

    if let Err(err) = result {
        eprintln!();
        eprintln!("{} {}", "Error:".red().bold(), err);
        eprintln!();
        std::process::exit(1);
    }
}
