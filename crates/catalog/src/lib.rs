//! # Dex Catalog
//!
//! Page arithmetic for browsing the remote species catalog.
//!
//! ```text
//! page_index ──> PaginationController ──> FetchWindow { offset, limit }
//!                                              │
//!                                      (remote listing)
//!                                              │
//!                       CatalogPage::from_listing ──> items + boundary flags
//! ```

mod error;
mod page;
mod pagination;

pub use error::{CatalogError, Result};
pub use page::{CatalogPage, CatalogSummary};
pub use pagination::{
    can_go_next, can_go_previous, step, FetchWindow, PageDirection, PaginationController,
    DEFAULT_PAGE_SIZE,
};
