use crate::error::{CatalogError, Result};
use serde::{Deserialize, Serialize};

/// Page size of the observed catalog browser.
pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// `[offset, offset + limit)` slice of the remote catalog for one page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FetchWindow {
    pub offset: u64,
    pub limit: u32,
}

impl FetchWindow {
    pub fn end(&self) -> u64 {
        self.offset + u64::from(self.limit)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PageDirection {
    Previous,
    Next,
}

/// Maps 1-based page indices onto fetch windows for a fixed page size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationController {
    page_size: u32,
}

impl PaginationController {
    pub fn new(page_size: u32) -> Result<Self> {
        if page_size == 0 {
            return Err(CatalogError::InvalidPageSize);
        }
        Ok(Self { page_size })
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    pub fn request_window(&self, page_index: u32) -> Result<FetchWindow> {
        if page_index < 1 {
            return Err(CatalogError::InvalidPage(page_index));
        }
        Ok(FetchWindow {
            offset: u64::from(page_index - 1) * u64::from(self.page_size),
            limit: self.page_size,
        })
    }

    /// Number of pages needed for `total_count` items; 0 for an empty catalog.
    pub fn derive_totals(&self, total_count: u64) -> u32 {
        let pages = total_count.div_ceil(u64::from(self.page_size));
        u32::try_from(pages).unwrap_or(u32::MAX)
    }
}

impl Default for PaginationController {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

pub fn can_go_previous(page_index: u32) -> bool {
    page_index > 1
}

pub fn can_go_next(page_index: u32, total_pages: u32) -> bool {
    page_index < total_pages
}

/// Move one page in `direction`. Stepping past either end leaves the index unchanged.
pub fn step(page_index: u32, total_pages: u32, direction: PageDirection) -> u32 {
    match direction {
        PageDirection::Previous if can_go_previous(page_index) => page_index - 1,
        PageDirection::Next if can_go_next(page_index, total_pages) => page_index + 1,
        _ => page_index,
    }
}
