use crate::error::{ClientError, Result};
use crate::source::CatalogSource;
use async_trait::async_trait;
use dex_catalog::FetchWindow;
use dex_protocol::{CatalogListing, EvolutionChainRecord, SpeciesRecord};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;

/// [`CatalogSource`] backed by the public REST API.
#[derive(Debug, Clone)]
pub struct HttpCatalogSource {
    client: Client,
    base_url: String,
}

impl HttpCatalogSource {
    pub fn new(base_url: &str) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("dex/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self::with_client(client, base_url))
    }

    pub fn with_client(client: Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = self.endpoint(path);
        log::debug!("GET {url}");
        let response = self.client.get(&url).send().await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Err(ClientError::NotFound(path.trim_start_matches('/').to_string()));
        }
        let value = response.error_for_status()?.json::<T>().await?;
        Ok(value)
    }
}

#[async_trait]
impl CatalogSource for HttpCatalogSource {
    async fn fetch_listing(&self, window: FetchWindow) -> Result<CatalogListing> {
        self.get_json(&format!(
            "pokemon-species?offset={}&limit={}",
            window.offset, window.limit
        ))
        .await
    }

    async fn fetch_species(&self, id: u32) -> Result<SpeciesRecord> {
        self.get_json(&format!("pokemon-species/{id}/")).await
    }

    async fn fetch_evolution_chain(&self, chain_id: u32) -> Result<EvolutionChainRecord> {
        self.get_json(&format!("evolution-chain/{chain_id}/")).await
    }
}
