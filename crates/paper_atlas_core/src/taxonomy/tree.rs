//! Flat node list to ordered hierarchy.
//!
//! # Invariants
//! - Siblings are ordered by `order` ascending; ties keep input order.
//! - Each node id is expanded at most once, so traversal is bounded by the
//!   input size even for cyclic or duplicate-id input.
//! - Placement and assembly use explicit stacks, not recursion.

use crate::model::taxonomy::TaxonomyNode;
use log::debug;
use serde::Serialize;
use std::collections::{HashMap, HashSet};

/// One assembled node with its ordered children.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TreeNode {
    pub node: TaxonomyNode,
    /// Presentation hint: top-level nodes start expanded.
    pub expanded_by_default: bool,
    pub children: Vec<TreeNode>,
}

impl TreeNode {
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Number of nodes in this subtree, including `self`.
    pub fn node_count(&self) -> usize {
        flatten(std::slice::from_ref(self)).len()
    }
}

/// Position of one input node in the pre-order traversal.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Placement {
    /// Index into the input slice.
    pub index: usize,
    /// Placement position of the parent, `None` for top-level nodes.
    pub parent: Option<usize>,
}

/// Builds the ordered forest of top-level nodes.
///
/// Nodes whose parent id is missing from the input, or that only hang off a
/// cycle, are not reachable from the root and are left out.
pub fn build_tree(nodes: &[TaxonomyNode]) -> Vec<TreeNode> {
    let placements = place(nodes);
    debug!(
        "event=taxonomy_build module=taxonomy status=ok nodes={} placed={}",
        nodes.len(),
        placements.len()
    );
    assemble(nodes, &placements)
}

/// Pre-order `(depth, node)` pairs over a forest.
pub fn flatten(forest: &[TreeNode]) -> Vec<(usize, &TreeNode)> {
    let mut ordered = Vec::new();
    let mut stack: Vec<(usize, &TreeNode)> = forest.iter().rev().map(|node| (0, node)).collect();
    while let Some((depth, node)) = stack.pop() {
        ordered.push((depth, node));
        stack.extend(node.children.iter().rev().map(|child| (depth + 1, child)));
    }
    ordered
}

/// Groups input indices by parent id, each group sorted by `order`.
fn group_children(nodes: &[TaxonomyNode]) -> HashMap<Option<&str>, Vec<usize>> {
    let mut groups: HashMap<Option<&str>, Vec<usize>> = HashMap::new();
    for (index, node) in nodes.iter().enumerate() {
        groups.entry(node.parent.as_deref()).or_default().push(index);
    }
    for members in groups.values_mut() {
        members.sort_by_key(|&index| nodes[index].order);
    }
    groups
}

/// Walks the hierarchy from the implicit root in pre-order.
pub(crate) fn place(nodes: &[TaxonomyNode]) -> Vec<Placement> {
    let groups = group_children(nodes);
    let mut visited: HashSet<&str> = HashSet::with_capacity(nodes.len());
    let mut placements = Vec::with_capacity(nodes.len());

    let mut stack: Vec<(usize, Option<usize>)> = groups
        .get(&None)
        .map(|roots| roots.iter().rev().map(|&index| (index, None)).collect())
        .unwrap_or_default();

    while let Some((index, parent)) = stack.pop() {
        let id = nodes[index].id.as_str();
        if !visited.insert(id) {
            continue;
        }
        let position = placements.len();
        placements.push(Placement { index, parent });
        if let Some(children) = groups.get(&Some(id)) {
            stack.extend(children.iter().rev().map(|&child| (child, Some(position))));
        }
    }
    placements
}

/// Turns pre-order placements into nested nodes, bottom-up.
pub(crate) fn assemble(nodes: &[TaxonomyNode], placements: &[Placement]) -> Vec<TreeNode> {
    let mut built: Vec<TreeNode> = placements
        .iter()
        .map(|placement| TreeNode {
            node: nodes[placement.index].clone(),
            expanded_by_default: placement.parent.is_none(),
            children: Vec::new(),
        })
        .collect();

    let mut roots = Vec::new();
    for placement in placements.iter().rev() {
        let Some(mut item) = built.pop() else {
            break;
        };
        // Children were pushed last-sibling first.
        item.children.reverse();
        match placement.parent {
            Some(parent) => built[parent].children.push(item),
            None => roots.push(item),
        }
    }
    roots.reverse();
    roots
}
