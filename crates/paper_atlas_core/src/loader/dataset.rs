//! Page data bundle and home-page summary.

use super::load_array;
use crate::config::SiteConfig;
use crate::model::method::Method;
use crate::model::paper::Paper;
use crate::model::taxonomy::TaxonomyNode;
use serde::Serialize;

/// All three data arrays, loaded fail-soft.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DataSet {
    pub papers: Vec<Paper>,
    pub taxonomy: Vec<TaxonomyNode>,
    pub methods: Vec<Method>,
}

/// Counts and method pills for the landing page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SiteSummary {
    pub paper_count: usize,
    pub method_count: usize,
    pub taxonomy_count: usize,
    /// Names of the leading methods, capped by `method_pill_limit`.
    pub method_pills: Vec<String>,
}

impl DataSet {
    /// Loads papers, taxonomy and methods from the configured directory.
    ///
    /// A missing or broken file contributes an empty array.
    pub fn load(config: &SiteConfig) -> Self {
        Self {
            papers: load_array(config.papers_path()),
            taxonomy: load_array(config.taxonomy_path()),
            methods: load_array(config.methods_path()),
        }
    }

    /// Home-page counts, with pills capped by `config.method_pill_limit`.
    pub fn summary(&self, config: &SiteConfig) -> SiteSummary {
        SiteSummary {
            paper_count: self.papers.len(),
            method_count: self.methods.len(),
            taxonomy_count: self.taxonomy.len(),
            method_pills: self
                .methods
                .iter()
                .take(config.method_pill_limit)
                .map(|method| method.name.clone())
                .collect(),
        }
    }
}
