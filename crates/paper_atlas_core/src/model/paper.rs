//! Paper catalog record.
//!
//! # Responsibility
//! - Define the wire shape of one `papers.json` entry.
//! - Normalize it into the `Paper` value used by the filter engine.
//!
//! # Invariants
//! - Only `title` is expected to be present; everything else has a default.
//! - Absent tier is `Tier::C`.
//! - Absent year sorts as year `0`.

use super::{lenient_int, non_blank};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Title shown when a record carries no title at all.
pub const UNTITLED: &str = "Untitled";

/// Coarse quality/confidence classification of a paper.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Tier {
    A,
    B,
    /// Default for records without a tier.
    #[default]
    C,
    /// Label outside the known set, kept verbatim.
    Other(String),
}

impl Tier {
    /// Parses a tier label. Blank input means "absent" and returns `None`.
    ///
    /// Known labels are matched case-insensitively.
    pub fn parse(label: &str) -> Option<Self> {
        let trimmed = label.trim();
        if trimmed.is_empty() {
            return None;
        }
        let tier = match trimmed.to_ascii_uppercase().as_str() {
            "A" => Self::A,
            "B" => Self::B,
            "C" => Self::C,
            _ => Self::Other(trimmed.to_string()),
        };
        Some(tier)
    }

    /// Returns the display label (`A`, `B`, `C` or the verbatim label).
    pub fn as_str(&self) -> &str {
        match self {
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
            Self::Other(label) => label.as_str(),
        }
    }
}

impl Display for Tier {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for Tier {
    fn from(value: String) -> Self {
        Self::parse(&value).unwrap_or_default()
    }
}

impl From<Tier> for String {
    fn from(value: Tier) -> Self {
        match value {
            Tier::Other(label) => label,
            known => known.as_str().to_string(),
        }
    }
}

/// Raw `papers.json` entry. Every field is optional on the wire.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PaperRecord {
    pub title: Option<String>,
    pub authors: Option<Vec<String>>,
    pub venue: Option<String>,
    #[serde(deserialize_with = "lenient_int")]
    pub year: Option<i32>,
    pub tags: Option<Vec<String>>,
    pub method_family: Option<String>,
    pub problem_type: Option<String>,
    pub tier: Option<String>,
    pub url: Option<String>,
    pub note: Option<String>,
}

/// Fully-defaulted paper used by every catalog operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "PaperRecord")]
pub struct Paper {
    pub title: String,
    pub authors: Vec<String>,
    pub venue: String,
    pub year: Option<i32>,
    pub tags: Vec<String>,
    pub method_family: Option<String>,
    pub problem_type: Option<String>,
    pub tier: Tier,
    pub url: Option<String>,
    pub note: Option<String>,
}

impl Paper {
    /// Creates a paper with only a title; all other fields take defaults.
    pub fn new(title: impl Into<String>) -> Self {
        Self::from(PaperRecord {
            title: Some(title.into()),
            ..PaperRecord::default()
        })
    }

    /// Year used for ordering. Absent years sort as `0`.
    pub fn sort_year(&self) -> i32 {
        self.year.unwrap_or(0)
    }

    /// Title for display, falling back to [`UNTITLED`].
    pub fn display_title(&self) -> &str {
        if self.title.trim().is_empty() {
            UNTITLED
        } else {
            self.title.as_str()
        }
    }
}

impl From<PaperRecord> for Paper {
    fn from(record: PaperRecord) -> Self {
        Self {
            title: record.title.unwrap_or_default(),
            authors: record.authors.unwrap_or_default(),
            venue: record.venue.unwrap_or_default(),
            year: record.year,
            tags: record.tags.unwrap_or_default(),
            method_family: non_blank(record.method_family),
            problem_type: non_blank(record.problem_type),
            tier: record
                .tier
                .as_deref()
                .and_then(Tier::parse)
                .unwrap_or_default(),
            url: non_blank(record.url),
            note: non_blank(record.note),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Paper, Tier};

    #[test]
    fn tier_parse_is_case_insensitive_and_keeps_unknown_labels() {
        assert_eq!(Tier::parse("a"), Some(Tier::A));
        assert_eq!(Tier::parse(" B "), Some(Tier::B));
        assert_eq!(Tier::parse("S"), Some(Tier::Other("S".to_string())));
        assert_eq!(Tier::parse("  "), None);
    }

    #[test]
    fn new_paper_takes_neutral_defaults() {
        let paper = Paper::new("Attention");
        assert_eq!(paper.tier, Tier::C);
        assert_eq!(paper.year, None);
        assert_eq!(paper.sort_year(), 0);
        assert!(paper.authors.is_empty());
        assert!(paper.tags.is_empty());
        assert_eq!(paper.venue, "");
    }

    #[test]
    fn display_title_falls_back_for_blank_titles() {
        assert_eq!(Paper::new("  ").display_title(), "Untitled");
        assert_eq!(Paper::new("Dreamer").display_title(), "Dreamer");
    }
}
