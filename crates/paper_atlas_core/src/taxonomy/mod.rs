//! Taxonomy tree builder.
//!
//! # Responsibility
//! - Assemble flat taxonomy nodes into an ordered forest for display.
//! - Report nodes that cannot be placed (dangling parents, cycles,
//!   duplicate ids) without failing.
//!
//! # Invariants
//! - Every node appears at most once in the output.
//! - With acyclic input whose parent ids all exist, every node appears
//!   exactly once.

mod tree;
mod validate;

pub use tree::{build_tree, flatten, TreeNode};
pub use validate::{build_tree_checked, validate, TaxonomyReport};
