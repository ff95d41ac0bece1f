use thiserror::Error;

pub type Result<T> = std::result::Result<T, CatalogError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Invalid page index {0}: pages are numbered from 1")]
    InvalidPage(u32),

    #[error("Invalid page size: must be at least 1")]
    InvalidPageSize,

    #[error("Page {page_index} is out of range (total pages: {total_pages})")]
    PageOutOfRange { page_index: u32, total_pages: u32 },
}
