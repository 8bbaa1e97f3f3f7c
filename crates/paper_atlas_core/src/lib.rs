//! Core data logic for the Paper Atlas site.
//! This crate derives every view the pages show (filtered paper tables,
//! facet options, taxonomy trees, landing stats) from static data files.

pub mod catalog;
pub mod config;
pub mod loader;
pub mod logging;
pub mod model;
pub mod taxonomy;

pub use catalog::{
    distinct_values, matches, query, result_count_label, search_surface, Catalog, Facet,
    FilterState, PaperRow,
};
pub use config::{ConfigError, ConfigResult, SiteConfig};
pub use loader::{load_array, try_load_array, DataSet, LoadError, LoadResult, SiteSummary};
pub use logging::{default_log_level, init_logging, logging_status, LoggingConfig, LoggingError};
pub use model::method::Method;
pub use model::paper::{Paper, PaperRecord, Tier};
pub use model::taxonomy::{TaxonomyNode, TaxonomyNodeRecord};
pub use taxonomy::{build_tree, build_tree_checked, flatten, validate, TaxonomyReport, TreeNode};
