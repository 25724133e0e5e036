// src/view.rs
//! Dashboard state and the views derived from it.

use crate::certificate::{CertificateBuilder, Clock, SystemClock};
use crate::dataset::Dataset;
use crate::export::{CertificateExporter, DownloadSink, ExportError, ExportFormat};
use crate::filter::{filter_credits, CreditSummary, FilterCriteria};
use crate::paginate::{paginate, total_pages, PageSize, PageWindow};
use offset_types::CarbonCredit;
use serde::Serialize;

/// Search, vintage and paging state.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    pub search_text: String,
    pub vintage_filter: Option<i32>,
    pub current_page: usize,
    pub page_size: PageSize,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            search_text: String::new(),
            vintage_filter: None,
            current_page: 1,
            page_size: PageSize::default(),
        }
    }
}

impl ViewState {
    pub fn criteria(&self) -> FilterCriteria {
        FilterCriteria::new(self.search_text.clone(), self.vintage_filter)
    }
}

/// Everything needed to draw the dashboard for the current state.
#[derive(Serialize, Debug, Clone)]
pub struct DashboardView<'a> {
    /// Records on the current page.
    pub records: Vec<&'a CarbonCredit>,
    pub window: PageWindow,
    /// Counts over the whole filtered set, not just this page.
    pub summary: CreditSummary,
    pub vintage_options: Vec<i32>,
}

impl DashboardView<'_> {
    /// True when nothing matches the filters; the UI shows an explicit empty state.
    pub fn is_empty(&self) -> bool {
        self.summary.total == 0
    }
}

type Listener = Box<dyn FnMut(&ViewState)>;

/// Owns the view state and wires it to filtering, pagination and export.
///
/// Every mutator that changes the state notifies subscribers synchronously.
/// Changing the search text, the vintage filter or the page size sends the
/// user back to page 1.
pub struct Dashboard<C: Clock = SystemClock> {
    dataset: Dataset,
    state: ViewState,
    certificates: CertificateBuilder<C>,
    exporter: CertificateExporter,
    listeners: Vec<Listener>,
}

impl Dashboard<SystemClock> {
    pub fn new(dataset: Dataset) -> Self {
        Self::with_clock(dataset, SystemClock)
    }
}

impl<C: Clock> Dashboard<C> {
    pub fn with_clock(dataset: Dataset, clock: C) -> Self {
        Self {
            dataset,
            state: ViewState::default(),
            certificates: CertificateBuilder::new(clock),
            exporter: CertificateExporter::new(),
            listeners: Vec::new(),
        }
    }

    pub fn with_page_size(mut self, page_size: PageSize) -> Self {
        self.state.page_size = page_size;
        self
    }

    pub fn with_exporter(mut self, exporter: CertificateExporter) -> Self {
        self.exporter = exporter;
        self
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    /// Registers a callback run after every effective state change.
    pub fn subscribe<F>(&mut self, listener: F)
    where
        F: FnMut(&ViewState) + 'static,
    {
        self.listeners.push(Box::new(listener));
    }

    fn notify(&mut self) {
        for listener in &mut self.listeners {
            listener(&self.state);
        }
    }

    pub fn set_search_text(&mut self, search_text: impl Into<String>) {
        let search_text = search_text.into();
        if self.state.search_text == search_text {
            return;
        }
        self.state.search_text = search_text;
        self.state.current_page = 1;
        self.notify();
    }

    pub fn set_vintage_filter(&mut self, vintage: Option<i32>) {
        if self.state.vintage_filter == vintage {
            return;
        }
        self.state.vintage_filter = vintage;
        self.state.current_page = 1;
        self.notify();
    }

    pub fn set_page_size(&mut self, page_size: PageSize) {
        if self.state.page_size == page_size {
            return;
        }
        self.state.page_size = page_size;
        self.state.current_page = 1;
        self.notify();
    }

    fn filtered(&self) -> Vec<&CarbonCredit> {
        filter_credits(self.dataset.records(), &self.state.criteria())
    }

    /// Moves to `page`, clamped to the pages that exist.
    pub fn go_to_page(&mut self, page: usize) {
        let pages = total_pages(self.filtered().len(), self.state.page_size.get());
        let page = page.clamp(1, pages.max(1));
        if self.state.current_page == page {
            return;
        }
        self.state.current_page = page;
        self.notify();
    }

    pub fn next_page(&mut self) {
        self.go_to_page(self.state.current_page.saturating_add(1));
    }

    pub fn previous_page(&mut self) {
        self.go_to_page(self.state.current_page.saturating_sub(1));
    }

    /// Derives the current page, its navigation window and the headline counts.
    pub fn view(&self) -> DashboardView<'_> {
        let filtered = self.filtered();
        let page_size = self.state.page_size.get();
        let window = PageWindow::compute(filtered.len(), self.state.current_page, page_size);
        let records = paginate(&filtered, self.state.current_page, page_size).to_vec();

        DashboardView {
            records,
            window,
            summary: CreditSummary::from_records(&filtered),
            vintage_options: self.dataset.vintages(),
        }
    }

    /// Builds a fresh certificate for credit `id` and saves it through `sink`.
    pub fn export<S: DownloadSink + ?Sized>(
        &self,
        id: &str,
        format: ExportFormat,
        sink: &mut S,
    ) -> Result<(), ExportError> {
        let credit = self
            .dataset
            .get(id)
            .ok_or_else(|| ExportError::UnknownCredit(id.to_string()))?;
        let certificate = self.certificates.build(credit);
        self.exporter.export_to(&certificate, format, sink)
    }
}
