//! Catalog handle with pre-built facet indices.
//!
//! # Responsibility
//! - Own the normalized paper list for one page view.
//! - Compute selectable facet values once at initialization.
//! - Answer filter states through per-facet position indices.
//!
//! # Invariants
//! - `Catalog::query(state)` returns exactly what `query(papers, state)`
//!   returns, in the same order.
//! - Index position lists are strictly ascending.
//! - Index keys are the exact field values `FilterState` compares against,
//!   with no trimming or label folding.

use super::facets::{distinct_values, Facet};
use super::matching::{fold, matches_folded};
use super::query::{sort_newest_first, FilterState};
use super::row::PaperRow;
use crate::config::SiteConfig;
use crate::model::paper::{Paper, Tier};
use log::{debug, info};
use std::borrow::Borrow;
use std::collections::HashMap;
use std::hash::Hash;

/// Facet value to ascending paper positions.
type FacetIndex<K = String> = HashMap<K, Vec<usize>>;

/// Loaded paper catalog ready for repeated filtering.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    papers: Vec<Paper>,
    families: Vec<String>,
    problem_types: Vec<String>,
    by_tier: FacetIndex<Tier>,
    by_family: FacetIndex,
    by_ptype: FacetIndex,
}

impl Catalog {
    pub fn new(papers: Vec<Paper>) -> Self {
        let catalog = Self {
            families: distinct_values(&papers, Facet::MethodFamily),
            problem_types: distinct_values(&papers, Facet::ProblemType),
            by_tier: build_index(&papers, |paper| Some(paper.tier.clone())),
            by_family: build_index(&papers, |paper| paper.method_family.clone()),
            by_ptype: build_index(&papers, |paper| paper.problem_type.clone()),
            papers,
        };
        info!(
            "event=catalog_init module=catalog status=ok papers={} families={} problem_types={}",
            catalog.papers.len(),
            catalog.families.len(),
            catalog.problem_types.len()
        );
        catalog
    }

    pub fn papers(&self) -> &[Paper] {
        &self.papers
    }

    pub fn len(&self) -> usize {
        self.papers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.papers.is_empty()
    }

    /// Method family options, sorted ascending.
    pub fn family_options(&self) -> &[String] {
        &self.families
    }

    /// Problem type options, sorted ascending.
    pub fn problem_type_options(&self) -> &[String] {
        &self.problem_types
    }

    /// Filters and sorts the catalog for `state`.
    pub fn query(&self, state: &FilterState) -> Vec<&Paper> {
        let needle = fold(&state.query);
        let mut rows: Vec<&Paper> = match self.candidate_positions(state) {
            Some(positions) => positions
                .into_iter()
                .map(|position| &self.papers[position])
                .filter(|paper| state.accepts_facets(paper))
                .filter(|paper| matches_folded(paper, &needle))
                .collect(),
            None => self
                .papers
                .iter()
                .filter(|paper| matches_folded(paper, &needle))
                .collect(),
        };
        sort_newest_first(&mut rows);
        debug!(
            "event=catalog_query module=catalog status=ok total={} results={}",
            self.papers.len(),
            rows.len()
        );
        rows
    }

    /// Render-ready rows for `state`, keeping at most `config.row_tag_limit`
    /// tags each.
    pub fn rows(&self, state: &FilterState, config: &SiteConfig) -> Vec<PaperRow> {
        self.query(state)
            .into_iter()
            .map(|paper| PaperRow::project(paper, config.row_tag_limit))
            .collect()
    }

    /// Intersects the index lists of every selected facet.
    ///
    /// Returns `None` when no facet is selected.
    fn candidate_positions(&self, state: &FilterState) -> Option<Vec<usize>> {
        let mut lists: Vec<&[usize]> = [
            state.tier.as_ref().map(|tier| lookup(&self.by_tier, tier)),
            state.family.as_deref().map(|family| lookup(&self.by_family, family)),
            state.ptype.as_deref().map(|ptype| lookup(&self.by_ptype, ptype)),
        ]
        .into_iter()
        .flatten()
        .collect();
        if lists.is_empty() {
            return None;
        }

        lists.sort_by_key(|list| list.len());
        let (smallest, rest) = lists.split_first()?;
        Some(
            smallest
                .iter()
                .copied()
                .filter(|position| rest.iter().all(|list| list.binary_search(position).is_ok()))
                .collect(),
        )
    }
}

impl From<Vec<Paper>> for Catalog {
    fn from(papers: Vec<Paper>) -> Self {
        Self::new(papers)
    }
}

fn build_index<K, F>(papers: &[Paper], key_of: F) -> FacetIndex<K>
where
    K: Hash + Eq,
    F: Fn(&Paper) -> Option<K>,
{
    let mut index = FacetIndex::new();
    for (position, paper) in papers.iter().enumerate() {
        if let Some(key) = key_of(paper) {
            index.entry(key).or_default().push(position);
        }
    }
    index
}

fn lookup<'i, K, Q>(index: &'i FacetIndex<K>, key: &Q) -> &'i [usize]
where
    K: Hash + Eq + Borrow<Q>,
    Q: Hash + Eq + ?Sized,
{
    index.get(key).map(Vec::as_slice).unwrap_or(&[])
}

#[cfg(test)]
mod tests {
    use super::Catalog;
    use crate::catalog::query::{query, FilterState};
    use crate::config::SiteConfig;
use crate::model::paper::{Paper, Tier};

    fn fixture() -> Vec<Paper> {
        let specs = [
            ("Dreamer", Some(2020), Tier::A, Some("world-models"), Some("control")),
            ("MuZero", Some(2020), Tier::A, Some("planning"), Some("games")),
            ("PlaNet", Some(2019), Tier::B, Some("world-models"), Some("control")),
            ("Notes", None, Tier::C, None, None),
            ("DreamerV3", Some(2023), Tier::A, Some("world-models"), Some("games")),
        ];
        specs
            .into_iter()
            .map(|(title, year, tier, family, ptype)| {
                let mut paper = Paper::new(title);
                paper.year = year;
                paper.tier = tier;
                paper.method_family = family.map(str::to_string);
                paper.problem_type = ptype.map(str::to_string);
                paper
            })
            .collect()
    }

    #[test]
    fn options_are_computed_once_and_sorted() {
        let catalog = Catalog::new(fixture());
        assert_eq!(catalog.family_options(), ["planning", "world-models"]);
        assert_eq!(catalog.problem_type_options(), ["control", "games"]);
    }

    #[test]
    fn indexed_query_agrees_with_linear_query() {
        let papers = fixture();
        let catalog = Catalog::new(papers.clone());
        let states = [
            FilterState::default(),
            FilterState::default().with_tier(Tier::A),
            FilterState::default().with_family("world-models"),
            FilterState::default()
                .with_tier(Tier::A)
                .with_ptype("games"),
            FilterState::default()
                .with_family("world-models")
                .with_query("dreamer"),
            FilterState::default().with_family("unknown"),
            FilterState::default().with_tier(Tier::C),
        ];
        for state in &states {
            assert_eq!(catalog.query(state), query(&papers, state), "state {state:?}");
        }
    }

    #[test]
    fn hand_built_values_agree_with_linear_query() {
        let mut other_a = Paper::new("labelled A but unknown");
        other_a.tier = Tier::Other("A".to_string());
        let mut blank_family = Paper::new("blank family");
        blank_family.method_family = Some("  ".to_string());
        let mut real_a = Paper::new("real A");
        real_a.tier = Tier::A;
        let papers = vec![other_a, blank_family, real_a];
        let catalog = Catalog::new(papers.clone());

        let blank_selection = FilterState {
            family: Some("  ".to_string()),
            ..FilterState::default()
        };
        let states = [
            FilterState::default().with_tier(Tier::A),
            FilterState::default().with_tier(Tier::Other("A".to_string())),
            blank_selection,
        ];
        for state in &states {
            assert_eq!(catalog.query(state), query(&papers, state), "state {state:?}");
        }
        let titles: Vec<&str> = catalog
            .query(&FilterState::default().with_tier(Tier::A))
            .iter()
            .map(|paper| paper.title.as_str())
            .collect();
        assert_eq!(titles, vec!["real A"]);
    }
}
