//! Paper catalog filter engine.
//!
//! # Responsibility
//! - Derive the visible, ordered subset of papers for a filter state.
//! - Expose facet value sets used to populate selection controls.
//! - Project papers into render-ready rows.
//!
//! # Invariants
//! - Filtering is the conjunction of the text, tier, family and problem
//!   type predicates.
//! - Results are ordered by year descending; ties keep input order.
//! - No operation here fails or touches presentation state.

pub mod facets;
pub mod index;
pub mod matching;
pub mod query;
pub mod row;

pub use facets::{distinct_values, Facet};
pub use index::Catalog;
pub use matching::{matches, search_surface};
pub use query::{query, FilterState};
pub use row::{result_count_label, PaperRow};
