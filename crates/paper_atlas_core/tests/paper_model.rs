use paper_atlas_core::{result_count_label, Paper, PaperRow, Tier};
use serde_json::json;

#[test]
fn sparse_record_normalizes_to_neutral_defaults() {
    let paper: Paper = serde_json::from_value(json!({ "title": "Only a title" })).unwrap();

    assert_eq!(paper.title, "Only a title");
    assert!(paper.authors.is_empty());
    assert_eq!(paper.venue, "");
    assert_eq!(paper.year, None);
    assert!(paper.tags.is_empty());
    assert_eq!(paper.method_family, None);
    assert_eq!(paper.problem_type, None);
    assert_eq!(paper.tier, Tier::C);
    assert_eq!(paper.url, None);
    assert_eq!(paper.note, None);
}

#[test]
fn nulls_and_blank_strings_are_treated_as_absent() {
    let paper: Paper = serde_json::from_value(json!({
        "title": "Nulls",
        "authors": null,
        "year": null,
        "method_family": "",
        "problem_type": "   ",
        "tier": "",
        "url": null,
        "note": ""
    }))
    .unwrap();

    assert!(paper.authors.is_empty());
    assert_eq!(paper.year, None);
    assert_eq!(paper.method_family, None);
    assert_eq!(paper.problem_type, None);
    assert_eq!(paper.tier, Tier::C);
    assert_eq!(paper.note, None);
}

#[test]
fn year_accepts_numeric_strings_and_drops_garbage() {
    let papers: Vec<Paper> = serde_json::from_value(json!([
        { "title": "numeric", "year": 2022 },
        { "title": "string", "year": "2019" },
        { "title": "garbage", "year": "circa 2010" },
        { "title": "fractional", "year": 2020.5 },
        { "title": "integral float", "year": 2020.0 }
    ]))
    .unwrap();

    let years: Vec<Option<i32>> = papers.iter().map(|paper| paper.year).collect();
    assert_eq!(years, vec![Some(2022), Some(2019), None, None, Some(2020)]);
}

#[test]
fn tier_labels_round_trip_through_json() {
    let papers: Vec<Paper> = serde_json::from_value(json!([
        { "title": "a", "tier": "a" },
        { "title": "s", "tier": "S" }
    ]))
    .unwrap();
    assert_eq!(papers[0].tier, Tier::A);
    assert_eq!(papers[1].tier, Tier::Other("S".to_string()));

    let encoded = serde_json::to_value(&papers[1]).unwrap();
    assert_eq!(encoded["tier"], "S");
    let decoded: Paper = serde_json::from_value(encoded).unwrap();
    assert_eq!(decoded, papers[1]);
}

#[test]
fn row_projection_for_full_record() {
    let paper: Paper = serde_json::from_value(json!({
        "title": "Full",
        "authors": ["Ada", "Grace"],
        "venue": "ICML",
        "year": 2023,
        "tags": ["a", "b", "c", "d", "e", "f", "g", "h", "i"],
        "tier": "B",
        "url": "https://example.org/full.pdf",
        "note": "Key reference"
    }))
    .unwrap();

    let row = PaperRow::from(&paper);
    assert_eq!(row.year, "2023");
    assert_eq!(row.title, "Full");
    assert_eq!(row.authors, "Ada, Grace");
    assert_eq!(row.venue, "ICML");
    assert_eq!(row.tags, vec!["a", "b", "c", "d", "e", "f", "g", "h"]);
    assert_eq!(row.tier, "B");
    assert_eq!(row.tier_badge, "Tier B");
    assert_eq!(row.link.as_deref(), Some("https://example.org/full.pdf"));
    assert_eq!(row.note.as_deref(), Some("Key reference"));

    assert_eq!(PaperRow::project(&paper, 2).tags, vec!["a", "b"]);
    assert_eq!(result_count_label(1), "1 result(s)");
}
