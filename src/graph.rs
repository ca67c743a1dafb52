//! Generic directed graph model and its tree projection

pub mod model;
pub mod tree;

pub use model::{Edge, Graph, Node, NodeKey};
pub use tree::{ParentLink, Tree, TreeNode, project};
