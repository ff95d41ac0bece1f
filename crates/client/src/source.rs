use crate::error::Result;
use async_trait::async_trait;
use dex_catalog::FetchWindow;
use dex_protocol::{CatalogListing, EvolutionChainRecord, SpeciesRecord};

/// Remote catalog the session reads from.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// `GET pokemon-species?offset=&limit=`
    async fn fetch_listing(&self, window: FetchWindow) -> Result<CatalogListing>;

    /// `GET pokemon-species/{id}`
    async fn fetch_species(&self, id: u32) -> Result<SpeciesRecord>;

    /// `GET evolution-chain/{id}`
    async fn fetch_evolution_chain(&self, chain_id: u32) -> Result<EvolutionChainRecord>;
}
