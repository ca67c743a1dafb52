//! Command-line interface for generating and inspecting state graphs
//!
//! Each subcommand lives in [`commands`] as an `Args` struct plus an
//! `execute` function, so the binary only dispatches.

pub mod commands;
pub mod config;
pub mod logging;
pub mod output;
