//! Filter state and the filter-and-sort operation.

use super::matching::{fold, matches_folded};
use crate::model::paper::{Paper, Tier};
use std::cmp::Reverse;

/// Current user filter selection. Empty fields impose no constraint.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    /// Free-text query.
    pub query: String,
    pub tier: Option<Tier>,
    /// Method family selection.
    pub family: Option<String>,
    /// Problem type selection.
    pub ptype: Option<String>,
}

impl FilterState {
    /// Builds a state from raw control values, where `""` means "any".
    pub fn from_inputs(query: &str, tier: &str, family: &str, ptype: &str) -> Self {
        Self {
            query: query.to_string(),
            tier: Tier::parse(tier),
            family: selection(family),
            ptype: selection(ptype),
        }
    }

    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    pub fn with_tier(mut self, tier: Tier) -> Self {
        self.tier = Some(tier);
        self
    }

    pub fn with_family(mut self, family: impl Into<String>) -> Self {
        self.family = selection(&family.into());
        self
    }

    pub fn with_ptype(mut self, ptype: impl Into<String>) -> Self {
        self.ptype = selection(&ptype.into());
        self
    }

    /// Returns `true` when no field constrains the result.
    pub fn is_unconstrained(&self) -> bool {
        self.query.trim().is_empty()
            && self.tier.is_none()
            && self.family.is_none()
            && self.ptype.is_none()
    }

    /// Applies the tier, family and problem type predicates.
    pub(crate) fn accepts_facets(&self, paper: &Paper) -> bool {
        self.tier.as_ref().map_or(true, |tier| *tier == paper.tier)
            && selected(&self.family, &paper.method_family)
            && selected(&self.ptype, &paper.problem_type)
    }
}

/// Returns the papers matching `state`, newest first.
///
/// Papers without a year sort as year `0`. The sort is stable, so papers
/// from the same year keep their input order.
pub fn query<'p>(papers: &'p [Paper], state: &FilterState) -> Vec<&'p Paper> {
    let needle = fold(&state.query);
    let mut rows: Vec<&Paper> = papers
        .iter()
        .filter(|paper| matches_folded(paper, &needle))
        .filter(|paper| state.accepts_facets(paper))
        .collect();
    sort_newest_first(&mut rows);
    rows
}

pub(crate) fn sort_newest_first(rows: &mut [&Paper]) {
    rows.sort_by_key(|paper| Reverse(paper.sort_year()));
}

fn selection(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn selected(wanted: &Option<String>, actual: &Option<String>) -> bool {
    match wanted {
        None => true,
        Some(wanted) => actual.as_deref() == Some(wanted.as_str()),
    }
}
