mod common;

use common::fixtures::*;
use common::init_logging;
use offset::{filter_credits, paginate, total_pages, visible_page_numbers, Dataset, FilterCriteria, PageWindow};

fn ids(records: &[&offset::CarbonCredit]) -> Vec<String> {
    records.iter().map(|c| c.id.clone()).collect()
}

#[test]
fn test_search_scenario() {
    init_logging();
    let dataset = solar_and_wind();
    let result = filter_credits(dataset.records(), &FilterCriteria::new("solar", None));
    assert_eq!(ids(&result), vec!["A1"]);
}

#[test]
fn test_vintage_scenario() {
    let dataset = solar_and_wind();
    let result = filter_credits(dataset.records(), &FilterCriteria::new("", Some(2020)));
    assert_eq!(ids(&result), vec!["A2"]);
}

#[test]
fn test_paginate_scenario() {
    let dataset = solar_and_wind();
    let page = paginate(dataset.records(), 1, 1);
    assert_eq!(page.len(), 1);
    assert_eq!(page[0].id, "A1");
    assert_eq!(total_pages(dataset.len(), 1), 2);
}

#[test]
fn test_empty_dataset_scenario() {
    let dataset = Dataset::default();
    let filtered = filter_credits(dataset.records(), &FilterCriteria::default());
    assert!(filtered.is_empty());
    assert!(paginate(&filtered, 1, 25).is_empty());

    let window = PageWindow::compute(filtered.len(), 1, 25);
    assert_eq!(window.total_pages, 0);
    assert!(!window.shows_controls());
    assert!(window.visible_pages.is_empty());
    assert_eq!(window.item_range, None);
}

#[test]
fn test_empty_search_returns_whole_catalog_in_order() {
    let dataset = catalog(40);
    let filtered = filter_credits(dataset.records(), &FilterCriteria::default());
    let expected: Vec<&offset::CarbonCredit> = dataset.records().iter().collect();
    assert_eq!(filtered, expected);
}

#[test]
fn test_search_matches_exactly_the_substring_hits() {
    let dataset = catalog(120);
    for needle in ["wind", "PARK 1", "restoration 4", "zzz", " "] {
        let filtered = filter_credits(dataset.records(), &FilterCriteria::new(needle, None));
        let expected: Vec<&offset::CarbonCredit> = dataset
            .records()
            .iter()
            .filter(|c| c.project_name.to_lowercase().contains(&needle.to_lowercase()))
            .collect();
        assert_eq!(filtered, expected, "needle {:?}", needle);
    }
}

#[test]
fn test_vintage_filter_matches_exactly_that_year() {
    let dataset = catalog(60);
    for vintage in 2017..=2024 {
        let filtered = filter_credits(dataset.records(), &FilterCriteria::new("", Some(vintage)));
        assert!(filtered.iter().all(|c| c.vintage_year == vintage));
        let expected = dataset.records().iter().filter(|c| c.vintage_year == vintage).count();
        assert_eq!(filtered.len(), expected);
    }
}

#[test]
fn test_pages_are_an_ordered_partition() {
    let dataset = catalog(137);
    let filtered = filter_credits(dataset.records(), &FilterCriteria::new("farm", None));
    for page_size in [10, 25, 50, 100] {
        let pages = total_pages(filtered.len(), page_size);
        let mut rejoined = Vec::new();
        for page in 1..=pages {
            let slice = paginate(&filtered, page, page_size);
            assert!(!slice.is_empty());
            rejoined.extend_from_slice(slice);
        }
        assert_eq!(rejoined, filtered);
        assert!(paginate(&filtered, pages + 1, page_size).is_empty());
    }
}

#[test]
fn test_window_width_for_every_page() {
    for total in [1usize, 2, 4, 5, 6, 20] {
        for current in 1..=total {
            assert_eq!(visible_page_numbers(current, total).len(), total.min(5));
        }
    }
}
