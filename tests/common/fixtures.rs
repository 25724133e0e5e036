use offset::{CarbonCredit, CreditStatus, Dataset, FixedClock};

/// The two-record catalog used throughout the scenarios.
pub fn solar_and_wind() -> Dataset {
    Dataset::new(vec![
        CarbonCredit::new("A1", "Solar Farm", 2021, CreditStatus::Active),
        CarbonCredit::new("A2", "Wind Park", 2020, CreditStatus::Retired),
    ])
    .expect("fixture ids are unique")
}

/// `count` credits cycling through a handful of project names and vintages.
pub fn catalog(count: usize) -> Dataset {
    const NAMES: [&str; 4] = ["Solar Farm", "Wind Park", "Mangrove Restoration", "Biogas Digesters"];
    let records = (0..count)
        .map(|i| {
            let status = if i % 4 == 0 { CreditStatus::Retired } else { CreditStatus::Active };
            CarbonCredit::new(
                format!("UNIC-{:06}", i),
                format!("{} {}", NAMES[i % NAMES.len()], i),
                2018 + (i % 6) as i32,
                status,
            )
        })
        .collect();
    Dataset::new(records).expect("fixture ids are unique")
}

pub fn new_year_clock() -> FixedClock {
    FixedClock::parse("2024-01-01T00:00:00Z").expect("valid timestamp")
}
