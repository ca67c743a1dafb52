//! stategraph CLI - generate, serialize and inspect state graphs
//!
//! - `game`: the complete Tic-Tac-Toe state graph, or its tree projection
//! - `graph` / `tree`: seeded synthetic datasets
//! - `inspect`: summarize a file written by any of the above

use anyhow::Result;
use clap::{Parser, Subcommand};
use stategraph::cli::{commands, logging};

#[derive(Parser)]
#[command(name = "stategraph")]
#[command(version, about = "Game state graphs and synthetic datasets", long_about = None)]
struct Cli {
    /// Show debug logging
    #[arg(long, short = 'v', global = true, conflicts_with = "quiet")]
    verbose: bool,

    /// Only show warnings and errors
    #[arg(long, short = 'q', global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Enumerate the Tic-Tac-Toe state graph
    Game(commands::game::GameArgs),

    /// Generate a synthetic graph
    Graph(commands::graph::GraphArgs),

    /// Generate a synthetic tree
    Tree(commands::tree::TreeArgs),

    /// Summarize a written graph or tree
    Inspect(commands::inspect::InspectArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.quiet)?;

    match cli.command {
        Commands::Game(args) => commands::game::execute(args),
        Commands::Graph(args) => commands::graph::execute(args),
        Commands::Tree(args) => commands::tree::execute(args),
        Commands::Inspect(args) => commands::inspect::execute(args),
    }
}
