// src/filter.rs
//! Search-text and vintage filtering over the catalog.

use offset_types::CarbonCredit;
use serde::Serialize;

/// The user's current search criteria.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    pub search_text: String,
    pub vintage: Option<i32>,
}

impl FilterCriteria {
    pub fn new(search_text: impl Into<String>, vintage: Option<i32>) -> Self {
        Self {
            search_text: search_text.into(),
            vintage,
        }
    }

    /// Case-insensitive substring match on the project name, plus an exact
    /// vintage match when a vintage is selected.
    pub fn matches(&self, credit: &CarbonCredit) -> bool {
        self.matcher().matches(credit)
    }

    fn matcher(&self) -> Matcher {
        Matcher {
            needle: self.search_text.to_lowercase(),
            vintage: self.vintage,
        }
    }
}

struct Matcher {
    needle: String,
    vintage: Option<i32>,
}

impl Matcher {
    fn matches(&self, credit: &CarbonCredit) -> bool {
        let matches_search =
            self.needle.is_empty() || credit.project_name.to_lowercase().contains(&self.needle);
        let matches_vintage = self.vintage.is_none_or(|v| credit.vintage_year == v);
        matches_search && matches_vintage
    }
}

/// Returns the records matching `criteria`, in their original order.
pub fn filter_credits<'a>(records: &'a [CarbonCredit], criteria: &FilterCriteria) -> Vec<&'a CarbonCredit> {
    let matcher = criteria.matcher();
    let filtered: Vec<&CarbonCredit> = records.iter().filter(|credit| matcher.matches(credit)).collect();
    log::debug!(
        "Filter {:?} / {:?} matched {} of {} credits",
        criteria.search_text,
        criteria.vintage,
        filtered.len(),
        records.len()
    );
    filtered
}

/// Headline counts for a set of credits.
#[derive(Serialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CreditSummary {
    pub active: usize,
    pub retired: usize,
    pub total: usize,
}

impl CreditSummary {
    pub fn from_records(records: &[&CarbonCredit]) -> Self {
        records.iter().fold(Self::default(), |mut summary, credit| {
            if credit.is_active() {
                summary.active += 1;
            } else {
                summary.retired += 1;
            }
            summary.total += 1;
            summary
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use offset_types::CreditStatus;

    fn sample() -> Vec<CarbonCredit> {
        vec![
            CarbonCredit::new("A1", "Solar Farm", 2021, CreditStatus::Active),
            CarbonCredit::new("A2", "Wind Park", 2020, CreditStatus::Retired),
            CarbonCredit::new("A3", "SOLAR Rooftops", 2020, CreditStatus::Active),
        ]
    }

    fn ids(records: &[&CarbonCredit]) -> Vec<String> {
        records.iter().map(|c| c.id.clone()).collect()
    }

    #[test]
    fn test_search_is_case_insensitive_and_order_preserving() {
        let data = sample();
        let result = filter_credits(&data, &FilterCriteria::new("solar", None));
        assert_eq!(ids(&result), vec!["A1", "A3"]);
    }

    #[test]
    fn test_empty_search_matches_everything() {
        let data = sample();
        let result = filter_credits(&data, &FilterCriteria::default());
        assert_eq!(result.len(), data.len());
    }

    #[test]
    fn test_vintage_filter_is_exact() {
        let data = sample();
        let result = filter_credits(&data, &FilterCriteria::new("", Some(2020)));
        assert_eq!(ids(&result), vec!["A2", "A3"]);
    }

    #[test]
    fn test_search_and_vintage_combine() {
        let data = sample();
        let result = filter_credits(&data, &FilterCriteria::new("solar", Some(2020)));
        assert_eq!(ids(&result), vec!["A3"]);
    }

    #[test]
    fn test_no_match_and_empty_input() {
        let data = sample();
        assert!(filter_credits(&data, &FilterCriteria::new("geothermal", None)).is_empty());
        assert!(filter_credits(&[], &FilterCriteria::new("solar", Some(2020))).is_empty());
    }

    #[test]
    fn test_summary_counts() {
        let data = sample();
        let all = filter_credits(&data, &FilterCriteria::default());
        let summary = CreditSummary::from_records(&all);
        assert_eq!(summary, CreditSummary { active: 2, retired: 1, total: 3 });
    }
}
