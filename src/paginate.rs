// src/paginate.rs
//! Page slicing and page-window metadata.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Width of the numbered page-button window.
pub const MAX_VISIBLE_PAGES: usize = 5;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PaginationError {
    #[error("Unsupported page size {0}; expected one of 10, 25, 50, 100")]
    UnsupportedPageSize(u32),
    #[error("Page size is not a number: {0}")]
    InvalidPageSize(String),
}

/// The selectable page sizes.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[serde(try_from = "u32", into = "u32")]
pub enum PageSize {
    Ten,
    #[default]
    TwentyFive,
    Fifty,
    Hundred,
}

impl PageSize {
    pub const ALL: [PageSize; 4] = [PageSize::Ten, PageSize::TwentyFive, PageSize::Fifty, PageSize::Hundred];

    pub fn get(&self) -> usize {
        match self {
            PageSize::Ten => 10,
            PageSize::TwentyFive => 25,
            PageSize::Fifty => 50,
            PageSize::Hundred => 100,
        }
    }
}

impl TryFrom<u32> for PageSize {
    type Error = PaginationError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        match value {
            10 => Ok(PageSize::Ten),
            25 => Ok(PageSize::TwentyFive),
            50 => Ok(PageSize::Fifty),
            100 => Ok(PageSize::Hundred),
            other => Err(PaginationError::UnsupportedPageSize(other)),
        }
    }
}

impl From<PageSize> for u32 {
    fn from(size: PageSize) -> Self {
        size.get() as u32
    }
}

impl FromStr for PageSize {
    type Err = PaginationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: u32 = s
            .trim()
            .parse()
            .map_err(|_| PaginationError::InvalidPageSize(s.to_string()))?;
        PageSize::try_from(value)
    }
}

impl fmt::Display for PageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.get())
    }
}

/// Returns the items on 1-based `page`.
///
/// Never panics: page 0, a zero page size, or a page past the end yields an
/// empty slice.
pub fn paginate<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
    if page == 0 || page_size == 0 {
        return &[];
    }
    let start = (page - 1).saturating_mul(page_size);
    if start >= items.len() {
        return &[];
    }
    let end = start.saturating_add(page_size).min(items.len());
    &items[start..end]
}

/// `ceil(total_items / page_size)`, zero for an empty set.
pub fn total_pages(total_items: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    total_items.div_ceil(page_size)
}

/// Navigation metadata for one page of a result set.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct PageWindow {
    pub current_page: usize,
    pub page_size: usize,
    pub total_items: usize,
    pub total_pages: usize,
    /// Numbered buttons to show, at most `MAX_VISIBLE_PAGES` wide.
    pub visible_pages: Vec<usize>,
    /// 1-based inclusive item range on this page; `None` when the page is empty.
    pub item_range: Option<(usize, usize)>,
}

impl PageWindow {
    pub fn compute(total_items: usize, current_page: usize, page_size: usize) -> Self {
        let total_pages = total_pages(total_items, page_size);
        let item_range = if current_page == 0 {
            None
        } else {
            let start_item = (current_page - 1).saturating_mul(page_size).saturating_add(1);
            let end_item = current_page.saturating_mul(page_size).min(total_items);
            (start_item <= end_item).then_some((start_item, end_item))
        };

        Self {
            current_page,
            page_size,
            total_items,
            total_pages,
            visible_pages: visible_page_numbers(current_page, total_pages),
            item_range,
        }
    }

    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }

    /// Controls are hidden when everything fits on one page.
    pub fn shows_controls(&self) -> bool {
        self.total_pages > 1
    }
}

/// A window of up to `MAX_VISIBLE_PAGES` page numbers centered on `current`,
/// shifted to stay inside `1..=total_pages`. Out-of-range pages are clamped
/// to the nearest existing one first.
pub fn visible_page_numbers(current: usize, total_pages: usize) -> Vec<usize> {
    if total_pages == 0 {
        return Vec::new();
    }
    let current = current.clamp(1, total_pages);
    let mut start = current.saturating_sub(MAX_VISIBLE_PAGES / 2).max(1);
    let end = total_pages.min(start.saturating_add(MAX_VISIBLE_PAGES - 1));
    if end + 1 - start < MAX_VISIBLE_PAGES {
        start = (end + 1).saturating_sub(MAX_VISIBLE_PAGES).max(1);
    }
    (start..=end).collect()
}
