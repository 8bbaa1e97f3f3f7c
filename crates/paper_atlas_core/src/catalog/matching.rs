//! Free-text matching over heterogeneous paper fields.
//!
//! Matching is one case-insensitive substring test against a single
//! surface string; there is no tokenization or scoring.

use crate::model::paper::Paper;

/// Builds the text that free-text queries are matched against.
///
/// Field order: title, authors (`", "`-joined), venue, year, tags
/// (space-joined), method family, problem type. Absent values contribute
/// empty segments.
pub fn search_surface(paper: &Paper) -> String {
    let authors = paper.authors.join(", ");
    let year = paper.year.map(|year| year.to_string()).unwrap_or_default();
    let tags = paper.tags.join(" ");
    [
        paper.title.as_str(),
        authors.as_str(),
        paper.venue.as_str(),
        year.as_str(),
        tags.as_str(),
        paper.method_family.as_deref().unwrap_or_default(),
        paper.problem_type.as_deref().unwrap_or_default(),
    ]
    .join(" ")
}

/// Lower-cases and trims text for comparison.
pub(crate) fn fold(text: &str) -> String {
    text.to_lowercase().trim().to_string()
}

/// Returns whether `paper` matches the free-text `query`.
///
/// Blank queries match every paper.
pub fn matches(paper: &Paper, query: &str) -> bool {
    let needle = fold(query);
    matches_folded(paper, &needle)
}

/// Same as [`matches`] with a query that was already folded.
pub(crate) fn matches_folded(paper: &Paper, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    fold(&search_surface(paper)).contains(needle)
}
