use thiserror::Error;

pub type Result<T> = std::result::Result<T, SessionError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    #[error("Catalog error: {0}")]
    Catalog(#[from] dex_catalog::CatalogError),

    #[error("Lineage error: {0}")]
    Lineage(#[from] dex_lineage::LineageError),

    #[error("No description entries available")]
    NoDescription,

    #[error("Unknown locale: {0}")]
    UnknownLocale(String),
}
