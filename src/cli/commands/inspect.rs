//! Inspect command - summarize a previously written document

use std::{fmt::Debug, path::PathBuf};

use anyhow::Result;
use clap::Parser;

use super::game::print_summary;
use crate::{
    adapters::FileStore,
    cli::output::{format_number, print_kv, print_section},
    codec::DocumentKind,
    graph::{Graph, NodeKey, Tree},
    ports::DocumentStore,
    synthetic::{SyntheticGraph, SyntheticTree},
    tictactoe::{GameGraph, GameTree, format_board, summarize, validate_game_graph},
};

#[derive(Parser, Debug)]
#[command(about = "Print the envelope and shape of a written graph or tree")]
pub struct InspectArgs {
    /// File written by `game`, `graph` or `tree`
    pub path: PathBuf,
}

pub fn execute(args: InspectArgs) -> Result<()> {
    let store = FileStore::new();
    let info = store.peek(&args.path)?;

    print_section(&format!("{}", args.path.display()));
    print_kv("Kind", &format!("{:?}", info.kind));
    print_kv("Encoding", &format!("{:?}", info.encoding));
    print_kv("Format version", &info.version.to_string());

    match info.kind {
        DocumentKind::GameGraph => {
            let graph: GameGraph = store.load(&args.path)?;
            print_root_board(graph.root.as_str());
            print_summary(&summarize(&graph)?);
            match validate_game_graph(&graph) {
                Ok(()) => print_kv("Invariants", "ok"),
                Err(e) => print_kv("Invariants", &e.to_string()),
            }
        }
        DocumentKind::GameTree => {
            let tree: GameTree = store.load(&args.path)?;
            print_root_board(tree.root.as_str());
            print_tree(&tree);
        }
        DocumentKind::SyntheticGraph => {
            let graph: SyntheticGraph = store.load(&args.path)?;
            print_graph(&graph);
        }
        DocumentKind::SyntheticTree => {
            let tree: SyntheticTree = store.load(&args.path)?;
            print_tree(&tree);
        }
    }

    Ok(())
}

fn print_graph<K: NodeKey, P: Debug, M>(graph: &Graph<K, P, M>) {
    let sinks = graph.out_degrees().values().filter(|&&d| d == 0).count();
    print_kv("Root", &format!("{:?}", graph.root));
    if let Some(root) = graph.node(&graph.root) {
        print_kv("Root payload", &format!("{:?}", root.payload));
    }
    print_kv("Nodes", &format_number(graph.node_count()));
    print_kv("Edges", &format_number(graph.edge_count()));
    print_kv("Sinks", &format_number(sinks));
}

fn print_tree<K: NodeKey, P: Clone, M: Clone>(tree: &Tree<K, P, M>) {
    print_kv("Root", &format!("{:?}", tree.root));
    print_kv("Nodes", &format_number(tree.node_count()));
    print_kv("Tree edges", &format_number(tree.tree_edge_count()));
    print_kv("Cross references", &format_number(tree.cross_ref_count()));
    print_kv("Max depth", &tree.max_depth().to_string());
}

fn print_root_board(label: &str) {
    if let Some(board) = format_board(label) {
        print_kv("Root board", &board);
    }
}
