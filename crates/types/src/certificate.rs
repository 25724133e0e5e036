use crate::credit::{CarbonCredit, CreditStatus};
use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;

/// A retirement certificate for one credit, captured at `issued_at`.
///
/// Certificates are ephemeral: one is built per export and dropped once the
/// document has been produced. Nothing here mutates the source record.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct RetirementCertificate {
    #[serde(rename = "unic_id")]
    pub id: String,
    pub project_name: String,
    #[serde(rename = "vintage")]
    pub vintage_year: i32,
    pub status: CreditStatus,
    pub issued_at: DateTime<Utc>,
}

impl RetirementCertificate {
    pub fn from_credit(credit: &CarbonCredit, issued_at: DateTime<Utc>) -> Self {
        Self {
            id: credit.id.clone(),
            project_name: credit.project_name.clone(),
            vintage_year: credit.vintage_year,
            status: credit.status,
            issued_at,
        }
    }

    /// ISO-8601 form of `issued_at`, e.g. `2024-01-01T00:00:00Z`.
    pub fn issued_at_iso(&self) -> String {
        self.issued_at.to_rfc3339_opts(SecondsFormat::AutoSi, true)
    }
}
