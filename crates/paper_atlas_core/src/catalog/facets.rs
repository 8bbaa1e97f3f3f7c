//! Facet value extraction.

use crate::model::paper::Paper;
use std::collections::BTreeSet;

/// Categorical paper field usable as a filter dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Facet {
    Tier,
    MethodFamily,
    ProblemType,
    Venue,
}

impl Facet {
    /// Returns this facet's value on `paper`, or `None` when blank/absent.
    pub fn value_of<'p>(&self, paper: &'p Paper) -> Option<&'p str> {
        let value = match self {
            Self::Tier => Some(paper.tier.as_str()),
            Self::MethodFamily => paper.method_family.as_deref(),
            Self::ProblemType => paper.problem_type.as_deref(),
            Self::Venue => Some(paper.venue.as_str()),
        };
        value.filter(|text| !text.trim().is_empty())
    }
}

/// Distinct non-empty values of `facet`, sorted ascending.
pub fn distinct_values(papers: &[Paper], facet: Facet) -> Vec<String> {
    papers
        .iter()
        .filter_map(|paper| facet.value_of(paper))
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}
