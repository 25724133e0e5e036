use serde::Serialize;

/// The row set a backend expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentProfile {
    /// The six certificate fields.
    Markup,
    /// The six certificate fields plus retirement time, certificate id and attribution.
    Printable,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct CertificateHeader {
    /// Issuer branding shown above the title, if the backend has room for it.
    pub brand: Option<String>,
    pub title: String,
    pub subtitle: Option<String>,
    /// Heading placed above the detail rows.
    pub section: Option<String>,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct DetailRow {
    pub label: String,
    pub value: String,
}

impl DetailRow {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct CertificateFooter {
    pub disclaimer: String,
    pub generated_on: String,
}

/// A finished document held in memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedDocument {
    pub bytes: Vec<u8>,
    pub content_type: &'static str,
}
