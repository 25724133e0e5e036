// src/certificate.rs
use chrono::{DateTime, Utc};
use offset_types::{CarbonCredit, RetirementCertificate};

/// A source of "now" for certificate timestamps.
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

/// The system wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock frozen at one instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub DateTime<Utc>);

impl FixedClock {
    pub fn parse(rfc3339: &str) -> Result<Self, chrono::ParseError> {
        Ok(Self(DateTime::parse_from_rfc3339(rfc3339)?.with_timezone(&Utc)))
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> DateTime<Utc> {
        (**self).now()
    }
}

/// Turns credit records into retirement certificates stamped by `clock`.
#[derive(Debug, Clone, Default)]
pub struct CertificateBuilder<C: Clock = SystemClock> {
    clock: C,
}

impl<C: Clock> CertificateBuilder<C> {
    pub fn new(clock: C) -> Self {
        Self { clock }
    }

    /// Copies the record's fields and stamps the certificate with the current
    /// time. The record itself is left untouched.
    pub fn build(&self, credit: &CarbonCredit) -> RetirementCertificate {
        let certificate = RetirementCertificate::from_credit(credit, self.clock.now());
        log::debug!("Built certificate for {} at {}", certificate.id, certificate.issued_at_iso());
        certificate
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use offset_types::CreditStatus;

    #[test]
    fn test_build_copies_fields_and_stamps_time() {
        let credit = CarbonCredit::new("UNIC-9999ZZZZ", "Test", 2019, CreditStatus::Active);
        let clock = FixedClock::parse("2024-01-01T00:00:00Z").unwrap();
        let cert = CertificateBuilder::new(clock).build(&credit);

        assert_eq!(cert.id, credit.id);
        assert_eq!(cert.project_name, credit.project_name);
        assert_eq!(cert.vintage_year, credit.vintage_year);
        assert_eq!(cert.status, credit.status);
        assert_eq!(cert.issued_at_iso(), "2024-01-01T00:00:00Z");
    }

    #[test]
    fn test_system_clock_timestamp_round_trips() {
        let credit = CarbonCredit::new("A1", "Solar Farm", 2021, CreditStatus::Retired);
        let cert = CertificateBuilder::new(SystemClock).build(&credit);
        let parsed = DateTime::parse_from_rfc3339(&cert.issued_at_iso()).unwrap();
        assert_eq!(parsed.with_timezone(&Utc), cert.issued_at);
    }
}
