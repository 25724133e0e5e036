use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle state of a credit as recorded in the dataset.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CreditStatus {
    Active,
    Retired,
}

impl CreditStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            CreditStatus::Active => "Active",
            CreditStatus::Retired => "Retired",
        }
    }
}

impl fmt::Display for CreditStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// A single carbon-credit record.
///
/// Field names follow the bundled dataset (`unic_id`, `project_name`, `vintage`,
/// `status`) on the wire.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct CarbonCredit {
    #[serde(rename = "unic_id")]
    pub id: String,
    pub project_name: String,
    #[serde(rename = "vintage")]
    pub vintage_year: i32,
    pub status: CreditStatus,
}

impl CarbonCredit {
    pub fn new(
        id: impl Into<String>,
        project_name: impl Into<String>,
        vintage_year: i32,
        status: CreditStatus,
    ) -> Self {
        Self {
            id: id.into(),
            project_name: project_name.into(),
            vintage_year,
            status,
        }
    }

    pub fn is_active(&self) -> bool {
        self.status == CreditStatus::Active
    }
}
