use thiserror::Error;

pub type Result<T> = std::result::Result<T, ClientError>;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Species #{0} links an evolution chain without a numeric id")]
    MalformedChainReference(u32),

    #[error("Not found: {0}")]
    NotFound(String),
}
