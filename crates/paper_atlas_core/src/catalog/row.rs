//! Render-ready projection of one paper row.

use crate::config::DEFAULT_ROW_TAG_LIMIT;
use crate::model::paper::Paper;
use serde::Serialize;

/// Display values for one catalog table row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaperRow {
    /// Year as text, empty when unknown.
    pub year: String,
    pub title: String,
    pub link: Option<String>,
    pub note: Option<String>,
    pub authors: String,
    pub venue: String,
    /// Leading tags, capped by the row tag limit.
    pub tags: Vec<String>,
    pub tier: String,
    /// Badge text, e.g. `Tier A`.
    pub tier_badge: String,
}

impl PaperRow {
    /// Projects `paper`, keeping at most `tag_limit` tags.
    pub fn project(paper: &Paper, tag_limit: usize) -> Self {
        let tier = paper.tier.as_str().to_string();
        Self {
            year: paper.year.map(|year| year.to_string()).unwrap_or_default(),
            title: paper.display_title().to_string(),
            link: paper.url.clone(),
            note: paper.note.clone(),
            authors: paper.authors.join(", "),
            venue: paper.venue.clone(),
            tags: paper.tags.iter().take(tag_limit).cloned().collect(),
            tier_badge: format!("Tier {tier}"),
            tier,
        }
    }
}

impl From<&Paper> for PaperRow {
    fn from(paper: &Paper) -> Self {
        Self::project(paper, DEFAULT_ROW_TAG_LIMIT)
    }
}

/// Result counter text shown above the table.
pub fn result_count_label(count: usize) -> String {
    format!("{count} result(s)")
}

#[cfg(test)]
mod tests {
    use super::{result_count_label, PaperRow};
    use crate::model::paper::{Paper, Tier};

    #[test]
    fn row_defaults_for_sparse_paper() {
        let row = PaperRow::from(&Paper::new(""));
        assert_eq!(row.year, "");
        assert_eq!(row.title, "Untitled");
        assert_eq!(row.authors, "");
        assert_eq!(row.tier_badge, "Tier C");
        assert!(row.link.is_none());
    }

    #[test]
    fn row_caps_tags_and_joins_authors() {
        let mut paper = Paper::new("Big");
        paper.authors = vec!["A. One".to_string(), "B. Two".to_string()];
        paper.tags = (0..12).map(|index| format!("t{index}")).collect();
        paper.tier = Tier::A;
        paper.year = Some(2024);

        let row = PaperRow::from(&paper);
        assert_eq!(row.authors, "A. One, B. Two");
        assert_eq!(row.tags.len(), 8);
        assert_eq!(row.tags[7], "t7");
        assert_eq!(row.year, "2024");
        assert_eq!(row.tier_badge, "Tier A");
    }

    #[test]
    fn count_label_matches_table_header() {
        assert_eq!(result_count_label(0), "0 result(s)");
        assert_eq!(result_count_label(3), "3 result(s)");
    }
}
