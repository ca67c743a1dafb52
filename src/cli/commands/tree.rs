//! Tree command - generate a seeded synthetic tree

use anyhow::Result;
use clap::Parser;

use super::{resolve_seed, write_document};
use crate::{
    cli::{
        config::{OutputArgs, OutputConfig},
        output::{create_spinner, format_number, print_kv, print_section},
    },
    synthetic::{SyntheticSpec, generate_tree},
};

#[derive(Parser, Debug)]
#[command(about = "Generate a synthetic rooted tree with valued leaves")]
pub struct TreeArgs {
    /// Number of nodes
    #[arg(long, short = 'n', default_value_t = SyntheticSpec::DEFAULT_NODES, allow_negative_numbers = true)]
    pub nodes: i64,

    /// Maximum children per node
    #[arg(long, default_value_t = SyntheticSpec::DEFAULT_MAX_DEGREE, allow_negative_numbers = true)]
    pub max_children: i64,

    /// Random seed for reproducibility
    #[arg(long)]
    pub seed: Option<u64>,

    /// Smallest leaf value
    #[arg(long, default_value_t = SyntheticSpec::DEFAULT_LEAF_RANGE.0, allow_negative_numbers = true)]
    pub leaf_min: i64,

    /// Largest leaf value
    #[arg(long, default_value_t = SyntheticSpec::DEFAULT_LEAF_RANGE.1, allow_negative_numbers = true)]
    pub leaf_max: i64,

    #[command(flatten)]
    pub output: OutputArgs,
}

pub fn execute(args: TreeArgs) -> Result<()> {
    let output = OutputConfig::from(args.output);
    output.encoding()?;

    let spec = SyntheticSpec::tree(args.nodes, args.max_children)
        .with_seed(resolve_seed(args.seed))
        .with_leaf_range(args.leaf_min, args.leaf_max);
    spec.validate()?;

    let spinner = create_spinner("Generating synthetic tree...");
    let tree = generate_tree(&spec)?;
    spinner.finish_and_clear();

    let leaves = tree.nodes.iter().filter(|n| n.children.is_empty()).count();
    print_section("Synthetic Tree");
    print_kv("Seed", &spec.seed.to_string());
    print_kv("Nodes", &format_number(tree.node_count()));
    print_kv("Leaves", &format_number(leaves));
    print_kv("Max depth", &tree.max_depth().to_string());

    write_document(&tree, &output)
}
