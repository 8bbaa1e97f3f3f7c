//! Taxonomy node record.
//!
//! # Responsibility
//! - Define the wire shape of one `taxonomy.json` entry.
//! - Normalize parent references so "top-level" has exactly one encoding.
//!
//! # Invariants
//! - `parent == None` is the only top-level marker after normalization.
//! - `order` defaults to `0`, `kind` defaults to [`DEFAULT_NODE_KIND`].

use super::{lenient_int, non_blank};
use serde::{Deserialize, Serialize};

/// Parent value treated the same as an absent parent.
pub const ROOT_PARENT_SENTINEL: &str = "__root__";
/// Kind label used when a node does not declare one.
pub const DEFAULT_NODE_KIND: &str = "node";

/// Raw `taxonomy.json` entry.
#[derive(Debug, Clone, Deserialize)]
pub struct TaxonomyNodeRecord {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub parent: Option<String>,
    #[serde(default, deserialize_with = "lenient_int")]
    pub order: Option<i64>,
    #[serde(default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub desc: Option<String>,
}

/// One normalized node of the method/problem-type hierarchy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "TaxonomyNodeRecord")]
pub struct TaxonomyNode {
    pub id: String,
    pub name: String,
    /// `None` for top-level nodes.
    pub parent: Option<String>,
    /// Sibling sort key, ascending.
    pub order: i64,
    pub kind: String,
    pub desc: Option<String>,
}

impl TaxonomyNode {
    /// Creates a top-level node with default order and kind.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            parent: None,
            order: 0,
            kind: DEFAULT_NODE_KIND.to_string(),
            desc: None,
        }
    }

    /// Sets the parent id. Blank values and the root sentinel mean top-level.
    pub fn with_parent(mut self, parent: impl Into<String>) -> Self {
        self.parent = normalize_parent(Some(parent.into()));
        self
    }

    pub fn with_order(mut self, order: i64) -> Self {
        self.order = order;
        self
    }

    pub fn is_top_level(&self) -> bool {
        self.parent.is_none()
    }

    /// Summary line shown for the node, e.g. `Planning  (planning)`.
    pub fn summary_label(&self) -> String {
        format!("{}  ({})", self.name, self.id)
    }
}

impl From<TaxonomyNodeRecord> for TaxonomyNode {
    fn from(record: TaxonomyNodeRecord) -> Self {
        Self {
            id: record.id,
            name: record.name.unwrap_or_default(),
            parent: normalize_parent(record.parent),
            order: record.order.unwrap_or(0),
            kind: non_blank(record.kind).unwrap_or_else(|| DEFAULT_NODE_KIND.to_string()),
            desc: non_blank(record.desc),
        }
    }
}

fn normalize_parent(parent: Option<String>) -> Option<String> {
    non_blank(parent).filter(|value| value != ROOT_PARENT_SENTINEL)
}
