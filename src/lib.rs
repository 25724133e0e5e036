//! Carbon-credit dashboard core.
//!
//! A read-only catalog of credits is filtered by project name and vintage,
//! sliced into pages, and any single credit can be exported as a retirement
//! certificate in HTML or PDF.
//!
//! ```no_run
//! use offset::{Dashboard, Dataset, DirectorySink, ExportFormat, PipelineError};
//!
//! fn main() -> Result<(), PipelineError> {
//!     let mut dashboard = Dashboard::new(Dataset::embedded()?);
//!     dashboard.set_search_text("solar");
//!     let first = dashboard.view().records.first().map(|credit| credit.id.clone());
//!     if let Some(id) = first {
//!         dashboard.export(&id, ExportFormat::Pdf, &mut DirectorySink::new("certificates"))?;
//!     }
//!     Ok(())
//! }
//! ```

pub mod certificate;
pub mod config;
pub mod dataset;
pub mod error;
pub mod export;
pub mod filter;
pub mod paginate;
pub mod view;

pub use certificate::{CertificateBuilder, Clock, FixedClock, SystemClock};
pub use config::Config;
pub use dataset::{Dataset, DatasetError};
pub use error::PipelineError;
pub use export::{
    CertificateExporter, CertificateLayout, DirectorySink, DownloadSink, ExportError, ExportFormat, ExportedFile,
    MemorySink, UnsupportedFormat,
};
pub use filter::{filter_credits, CreditSummary, FilterCriteria};
pub use paginate::{paginate, total_pages, visible_page_numbers, PageSize, PageWindow, PaginationError};
pub use view::{Dashboard, DashboardView, ViewState};

pub use offset_types::{CarbonCredit, CreditStatus, RetirementCertificate};
