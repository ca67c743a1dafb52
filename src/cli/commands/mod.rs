//! Subcommand implementations

use anyhow::Result;

use crate::{
    adapters::FileStore,
    cli::{config::OutputConfig, output::print_kv},
    codec::Document,
    ports::DocumentStore,
};

pub mod game;
pub mod graph;
pub mod inspect;
pub mod tree;

/// Use the requested seed, or draw one and log it so the run can be repeated.
pub(crate) fn resolve_seed(seed: Option<u64>) -> u64 {
    seed.unwrap_or_else(|| {
        let seed = rand::random();
        log::info!("no --seed given, using {seed}");
        seed
    })
}

/// Encode `doc` as configured and write it to disk.
pub(crate) fn write_document<D: Document>(doc: &D, output: &OutputConfig) -> Result<()> {
    let encoding = output.encoding()?;
    FileStore::new().save(doc, &output.path, encoding)?;
    print_kv("Written to", &output.path.display().to_string());
    print_kv("Encoding", &format!("{encoding:?}"));
    Ok(())
}
