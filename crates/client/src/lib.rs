//! # Dex Client
//!
//! Async access to the remote species catalog and the driver that executes a
//! browsing session's fetches.
//!
//! ## Example
//!
//! ```no_run
//! use dex_client::{ClientConfig, HttpCatalogSource, SessionDriver};
//! use dex_session::Event;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ClientConfig::default().with_env()?;
//!     let source = Arc::new(HttpCatalogSource::new(&config.base_url)?);
//!     let mut driver = SessionDriver::new(source, config.session()?);
//!
//!     driver.dispatch(Event::PageRequested(1))?;
//!     driver.settle().await?;
//!
//!     if let Some(page) = driver.state().page() {
//!         for item in &page.items {
//!             println!("{:?} {}", item.reference_id, item.title());
//!         }
//!     }
//!     Ok(())
//! }
//! ```

mod config;
mod driver;
mod error;
mod http;
mod source;

pub use config::{
    ClientConfig, ENV_API_BASE_URL, ENV_LOCALE, ENV_PAGE_SIZE, ENV_PRIMARY_LANGUAGE,
    ENV_SECONDARY_LANGUAGE, ENV_SPRITE_BASE_URL,
};
pub use driver::{execute, load_detail, SessionDriver};
pub use error::{ClientError, Result};
pub use http::HttpCatalogSource;
pub use source::CatalogSource;
