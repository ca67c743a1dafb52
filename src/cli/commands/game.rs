//! Game command - enumerate the full Tic-Tac-Toe state graph

use anyhow::Result;
use clap::{Parser, ValueEnum};

use super::write_document;
use crate::{
    cli::{
        config::{OutputArgs, OutputConfig},
        output::{create_spinner, format_number, print_kv, print_section, print_subsection},
    },
    graph::project,
    tictactoe::{
        StateGraphSummary, Traversal, enumerate_states, summarize, validate_game_graph,
        verify_standard_counts,
    },
};

#[derive(Parser, Debug)]
#[command(about = "Enumerate every reachable Tic-Tac-Toe board and legal move")]
pub struct GameArgs {
    /// Write the tree projection instead of the graph
    #[arg(long)]
    pub tree: bool,

    /// Frontier expansion order
    #[arg(long, value_enum, default_value_t = TraversalArg::Bfs)]
    pub traversal: TraversalArg,

    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TraversalArg {
    /// Breadth-first
    Bfs,
    /// Depth-first
    Dfs,
}

impl From<TraversalArg> for Traversal {
    fn from(arg: TraversalArg) -> Self {
        match arg {
            TraversalArg::Bfs => Traversal::BreadthFirst,
            TraversalArg::Dfs => Traversal::DepthFirst,
        }
    }
}

pub fn execute(args: GameArgs) -> Result<()> {
    let output = OutputConfig::from(args.output);
    output.encoding()?;

    let spinner = create_spinner("Enumerating reachable boards...");
    let graph = enumerate_states(args.traversal.into())?;
    spinner.finish_and_clear();

    verify_standard_counts(&graph)?;
    validate_game_graph(&graph)?;
    log::info!("state graph passed count and invariant checks");

    print_section("Tic-Tac-Toe State Graph");
    print_summary(&summarize(&graph)?);

    if args.tree {
        let tree = project(&graph)?;
        print_subsection("Tree projection");
        print_kv("Tree edges", &format_number(tree.tree_edge_count()));
        print_kv("Cross references", &format_number(tree.cross_ref_count()));
        print_kv("Max depth", &tree.max_depth().to_string());
        write_document(&tree, &output)?;
    } else {
        write_document(&graph, &output)?;
    }

    Ok(())
}

pub(crate) fn print_summary(summary: &StateGraphSummary) {
    print_kv("States", &format_number(summary.states));
    print_kv("Moves", &format_number(summary.moves));
    print_kv("X wins", &format_number(summary.x_wins));
    print_kv("O wins", &format_number(summary.o_wins));
    print_kv("Draws", &format_number(summary.draws));

    print_subsection("States by marks placed");
    for (depth, count) in summary.states_by_depth.iter().enumerate() {
        print_kv(&format!("Depth {depth}"), &format_number(*count));
    }
}
