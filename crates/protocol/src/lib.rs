use serde::{Deserialize, Serialize};

pub mod reference;
pub mod text;

pub use reference::{parse_reference_id, sprite_url};

pub const DEFAULT_API_BASE_URL: &str = "https://pokeapi.co/api/v2";
pub const DEFAULT_SPRITE_BASE_URL: &str =
    "https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/pokemon";

/// `{ name, url }` pair used throughout the remote API for links to other resources.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct NamedResource {
    pub name: String,
    pub url: String,
}

impl NamedResource {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
        }
    }

    /// Numeric id encoded in the trailing path segment of `url`.
    pub fn reference_id(&self) -> Option<u32> {
        parse_reference_id(&self.url)
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct ApiResource {
    pub url: String,
}

/// Response of `GET pokemon-species?offset=&limit=`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct CatalogListing {
    pub count: u64,
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub previous: Option<String>,
    pub results: Vec<NamedResource>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct FlavorTextEntry {
    pub flavor_text: String,
    pub language: NamedResource,
    #[serde(default)]
    pub version: Option<NamedResource>,
}

impl FlavorTextEntry {
    pub fn language_code(&self) -> &str {
        &self.language.name
    }
}

/// Response of `GET pokemon-species/{id}`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct SpeciesRecord {
    pub id: u32,
    pub name: String,
    pub color: NamedResource,
    #[serde(default)]
    pub habitat: Option<NamedResource>,
    pub capture_rate: u32,
    #[serde(default)]
    pub base_happiness: Option<u32>,
    pub growth_rate: NamedResource,
    #[serde(default)]
    pub is_legendary: bool,
    #[serde(default)]
    pub is_mythical: bool,
    #[serde(default)]
    pub flavor_text_entries: Vec<FlavorTextEntry>,
    pub generation: NamedResource,
    #[serde(default)]
    pub evolution_chain: Option<ApiResource>,
}

impl SpeciesRecord {
    /// Id of the evolution chain this species belongs to, if the record links one.
    pub fn evolution_chain_id(&self) -> Option<u32> {
        self.evolution_chain
            .as_ref()
            .and_then(|chain| parse_reference_id(&chain.url))
    }
}

/// Response of `GET evolution-chain/{id}`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct EvolutionChainRecord {
    pub id: u32,
    pub chain: ChainLink,
}

/// One node of the nested lineage graph. `evolves_to` lists the branches in the
/// order the remote service returns them.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ChainLink {
    pub species: NamedResource,
    #[serde(default)]
    pub is_baby: bool,
    #[serde(default)]
    pub evolution_details: Vec<EvolutionDetail>,
    #[serde(default)]
    pub evolves_to: Vec<ChainLink>,
}

/// How a species is reached from its predecessor. Only the fields the detail
/// view summarizes are modelled; unknown keys are ignored.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct EvolutionDetail {
    #[serde(default)]
    pub min_level: Option<u32>,
    #[serde(default)]
    pub min_happiness: Option<u32>,
    #[serde(default)]
    pub min_affection: Option<u32>,
    #[serde(default)]
    pub item: Option<NamedResource>,
    #[serde(default)]
    pub trigger: Option<NamedResource>,
    #[serde(default)]
    pub time_of_day: Option<String>,
    #[serde(default)]
    pub known_move_type: Option<NamedResource>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn listing_ignores_unknown_fields() {
        let raw = r#"{
            "count": 1025,
            "next": "https://pokeapi.co/api/v2/pokemon-species?offset=20&limit=20",
            "previous": null,
            "results": [
                {"name": "bulbasaur", "url": "https://pokeapi.co/api/v2/pokemon-species/1/"}
            ],
            "extra": true
        }"#;
        let listing: CatalogListing = serde_json::from_str(raw).unwrap();
        assert_eq!(listing.count, 1025);
        assert_eq!(listing.results[0].reference_id(), Some(1));
        assert!(listing.previous.is_none());
    }

    #[test]
    fn chain_link_defaults_missing_collections() {
        let raw = r#"{"species": {"name": "ditto", "url": "https://pokeapi.co/api/v2/pokemon-species/132/"}}"#;
        let link: ChainLink = serde_json::from_str(raw).unwrap();
        assert!(link.evolution_details.is_empty());
        assert!(link.evolves_to.is_empty());
        assert!(!link.is_baby);
    }

    #[test]
    fn evolution_detail_accepts_empty_time_of_day() {
        let raw = r#"{
            "min_level": null,
            "min_happiness": 220,
            "item": null,
            "trigger": {"name": "level-up", "url": "https://pokeapi.co/api/v2/evolution-trigger/1/"},
            "time_of_day": "night",
            "known_move_type": null,
            "gender": null
        }"#;
        let detail: EvolutionDetail = serde_json::from_str(raw).unwrap();
        assert_eq!(detail.min_happiness, Some(220));
        assert_eq!(detail.time_of_day.as_deref(), Some("night"));
        assert!(detail.min_level.is_none());
    }

    #[test]
    fn species_record_exposes_chain_id() {
        let raw = r#"{
            "id": 133,
            "name": "eevee",
            "color": {"name": "brown", "url": "https://pokeapi.co/api/v2/pokemon-color/3/"},
            "habitat": {"name": "urban", "url": "https://pokeapi.co/api/v2/pokemon-habitat/8/"},
            "capture_rate": 45,
            "base_happiness": 50,
            "growth_rate": {"name": "medium", "url": "https://pokeapi.co/api/v2/growth-rate/2/"},
            "is_legendary": false,
            "is_mythical": false,
            "flavor_text_entries": [],
            "generation": {"name": "generation-i", "url": "https://pokeapi.co/api/v2/generation/1/"},
            "evolution_chain": {"url": "https://pokeapi.co/api/v2/evolution-chain/67/"}
        }"#;
        let record: SpeciesRecord = serde_json::from_str(raw).unwrap();
        assert_eq!(record.evolution_chain_id(), Some(67));
    }
}
