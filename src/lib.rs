//! Game state graphs and synthetic graph/tree datasets
//!
//! This crate provides:
//! - A Tic-Tac-Toe board model and an exhaustive enumerator of its reachable
//!   state graph (5,478 boards, 16,167 moves)
//! - A generic graph model with a lossless tree projection
//! - Seeded generators for synthetic graphs and trees
//! - JSON and MessagePack (optionally gzip-compressed) serialization
//! - A small CLI for producing and inspecting datasets

pub mod adapters;
pub mod cli;
pub mod codec;
pub mod error;
pub mod graph;
pub mod identifiers;
pub mod ports;
pub mod synthetic;
pub mod tictactoe;

pub use error::{Error, Result};
pub use identifiers::StateId;
