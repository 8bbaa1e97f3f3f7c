//! Relational checks for taxonomy input.
//!
//! # Responsibility
//! - Name the nodes that `build_tree` silently leaves out, and why.
//!
//! # Invariants
//! - Validation never changes what `build_tree` returns.
//! - Id lists keep input order and contain each id at most once.

use super::tree::{assemble, place, Placement, TreeNode};
use crate::model::taxonomy::TaxonomyNode;
use log::warn;
use serde::Serialize;
use std::collections::{HashMap, HashSet};

/// Findings from one validation pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TaxonomyReport {
    /// Nodes whose parent id does not exist in the input.
    pub orphaned: Vec<String>,
    /// Nodes whose ancestor chain loops back on itself.
    pub cyclic: Vec<String>,
    /// Ids declared by more than one node.
    pub duplicate_ids: Vec<String>,
    /// Nodes the tree builder did not place.
    pub unreachable: Vec<String>,
}

impl TaxonomyReport {
    pub fn is_clean(&self) -> bool {
        self.orphaned.is_empty()
            && self.cyclic.is_empty()
            && self.duplicate_ids.is_empty()
            && self.unreachable.is_empty()
    }
}

/// Checks `nodes` for dangling parents, cycles and duplicate ids.
pub fn validate(nodes: &[TaxonomyNode]) -> TaxonomyReport {
    report_for(nodes, &place(nodes))
}

/// Builds the tree and its validation report in one traversal.
///
/// # Side effects
/// - Emits a `taxonomy_validate` warning when the report is not clean.
pub fn build_tree_checked(nodes: &[TaxonomyNode]) -> (Vec<TreeNode>, TaxonomyReport) {
    let placements = place(nodes);
    let report = report_for(nodes, &placements);
    if !report.is_clean() {
        warn!(
            "event=taxonomy_validate module=taxonomy status=warn nodes={} orphaned={} cyclic={} duplicate_ids={} unreachable={}",
            nodes.len(),
            report.orphaned.len(),
            report.cyclic.len(),
            report.duplicate_ids.len(),
            report.unreachable.len()
        );
    }
    (assemble(nodes, &placements), report)
}

fn report_for(nodes: &[TaxonomyNode], placements: &[Placement]) -> TaxonomyReport {
    let mut first_index: HashMap<&str, usize> = HashMap::with_capacity(nodes.len());
    let mut duplicate_ids = Vec::new();
    let mut reported = HashSet::new();
    for (index, node) in nodes.iter().enumerate() {
        let id = node.id.as_str();
        if first_index.contains_key(id) {
            if reported.insert(id) {
                duplicate_ids.push(id.to_string());
            }
        } else {
            first_index.insert(id, index);
        }
    }

    let orphaned = nodes
        .iter()
        .filter(|node| {
            node.parent
                .as_deref()
                .is_some_and(|parent| !first_index.contains_key(parent))
        })
        .map(|node| node.id.clone())
        .collect();

    let cyclic = nodes
        .iter()
        .filter(|node| has_cyclic_ancestry(node, nodes, &first_index))
        .map(|node| node.id.clone())
        .collect();

    let placed: HashSet<usize> = placements.iter().map(|placement| placement.index).collect();
    let unreachable = nodes
        .iter()
        .enumerate()
        .filter(|(index, _)| !placed.contains(index))
        .map(|(_, node)| node.id.clone())
        .collect();

    TaxonomyReport {
        orphaned,
        cyclic,
        duplicate_ids,
        unreachable,
    }
}

fn has_cyclic_ancestry(
    node: &TaxonomyNode,
    nodes: &[TaxonomyNode],
    first_index: &HashMap<&str, usize>,
) -> bool {
    let mut seen = HashSet::new();
    seen.insert(node.id.as_str());
    let mut cursor = node.parent.as_deref();
    while let Some(parent_id) = cursor {
        if !seen.insert(parent_id) {
            return true;
        }
        let Some(&index) = first_index.get(parent_id) else {
            return false;
        };
        cursor = nodes[index].parent.as_deref();
    }
    false
}
