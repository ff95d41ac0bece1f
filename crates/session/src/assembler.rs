use crate::error::{Result, SessionError};
use crate::labels::{color_label, ConditionFragment, Locale};
use dex_lineage::{Condition, NavigationState};
use dex_protocol::text::{normalize_flavor_text, title_case, upper_words};
use dex_protocol::{sprite_url, FlavorTextEntry, SpeciesRecord, DEFAULT_SPRITE_BASE_URL};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssemblerConfig {
    pub locale: Locale,

    /// Description language tried first (e.g., "es")
    pub primary_language: String,

    /// Description language tried when the primary one is missing
    pub secondary_language: String,

    pub sprite_base_url: String,
}

impl Default for AssemblerConfig {
    fn default() -> Self {
        Self {
            locale: Locale::Es,
            primary_language: "es".to_string(),
            secondary_language: "en".to_string(),
            sprite_base_url: DEFAULT_SPRITE_BASE_URL.to_string(),
        }
    }
}

/// One stage of the lineage as shown in the detail view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StageView {
    pub id: u32,
    pub name: String,
    pub title: String,
    pub sprite_url: String,

    /// How this stage is reached; `None` for the root stage
    pub condition: Option<String>,
    pub is_current: bool,
}

/// Display-ready view of one species and its place in the lineage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayEntity {
    pub id: u32,
    pub name: String,
    pub title: String,
    pub sprite_url: String,
    pub color_code: String,
    pub color_label: String,
    pub habitat: String,
    pub capture_rate: u32,
    pub capture_rate_label: String,
    pub base_happiness: Option<u32>,
    pub growth_rate: String,
    pub is_legendary: bool,
    pub is_mythical: bool,
    pub description: Option<String>,
    pub description_language: Option<String>,
    pub generation: String,
    pub stages: Vec<StageView>,

    /// "2 de 3" style position; `None` when the species is not in its chain
    pub position: Option<String>,
    pub can_step_previous: bool,
    pub can_step_next: bool,
}

/// Merges a species record with its navigation state. Pure; no I/O.
#[derive(Debug, Clone, Default)]
pub struct DetailAssembler {
    config: AssemblerConfig,
}

impl DetailAssembler {
    pub fn new(config: AssemblerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AssemblerConfig {
        &self.config
    }

    pub fn locale(&self) -> Locale {
        self.config.locale
    }

    pub fn assemble(&self, record: &SpeciesRecord, navigation: &NavigationState) -> DisplayEntity {
        let locale = self.config.locale;

        let description = match select_description(
            &record.flavor_text_entries,
            &self.config.primary_language,
            &self.config.secondary_language,
        ) {
            Ok(entry) => Some(entry),
            Err(err) => {
                log::debug!("Species #{} has no description: {err}", record.id);
                None
            }
        };

        let stages = navigation
            .chain
            .iter()
            .enumerate()
            .map(|(index, node)| StageView {
                id: node.id,
                name: node.name.clone(),
                title: title_case(&node.name),
                sprite_url: sprite_url(&self.config.sprite_base_url, node.id),
                condition: (index > 0).then(|| summarize_conditions(&node.conditions, locale)),
                is_current: navigation.current_index == Some(index),
            })
            .collect();

        DisplayEntity {
            id: record.id,
            name: record.name.clone(),
            title: title_case(&record.name),
            sprite_url: sprite_url(&self.config.sprite_base_url, record.id),
            color_code: record.color.name.clone(),
            color_label: color_label(&record.color.name, locale),
            habitat: record
                .habitat
                .as_ref()
                .map(|habitat| title_case(&habitat.name))
                .unwrap_or_else(|| locale.unknown_habitat().to_string()),
            capture_rate: record.capture_rate,
            capture_rate_label: format!("{}/255", record.capture_rate),
            base_happiness: record.base_happiness,
            growth_rate: title_case(&record.growth_rate.name),
            is_legendary: record.is_legendary,
            is_mythical: record.is_mythical,
            description: description.map(|entry| normalize_flavor_text(&entry.flavor_text)),
            description_language: description.map(|entry| entry.language_code().to_string()),
            generation: upper_words(&record.generation.name),
            stages,
            position: navigation
                .position()
                .map(|(index, len)| locale.position(index as u64, len as u64)),
            can_step_previous: navigation.can_step_previous(),
            can_step_next: navigation.can_step_next(),
        }
    }
}

/// Pick the description entry: primary language, then secondary, then the first entry.
pub fn select_description<'a>(
    entries: &'a [FlavorTextEntry],
    primary: &str,
    secondary: &str,
) -> Result<&'a FlavorTextEntry> {
    entries
        .iter()
        .find(|entry| entry.language_code() == primary)
        .or_else(|| entries.iter().find(|entry| entry.language_code() == secondary))
        .or_else(|| entries.first())
        .ok_or(SessionError::NoDescription)
}

/// Summarize how a stage is reached, from its first condition record.
pub fn summarize_conditions(conditions: &[Condition], locale: Locale) -> String {
    let Some(condition) = conditions.first() else {
        return locale.base_stage().to_string();
    };

    let mut fragments = Vec::new();
    if let Some(level) = condition.min_level.filter(|v| *v > 0) {
        fragments.push(ConditionFragment::Level(level));
    }
    if let Some(value) = condition.min_happiness.filter(|v| *v > 0) {
        fragments.push(ConditionFragment::Happiness(value));
    }
    if let Some(value) = condition.min_affection.filter(|v| *v > 0) {
        fragments.push(ConditionFragment::Affection(value));
    }
    if let Some(item) = condition.item.as_deref() {
        fragments.push(ConditionFragment::Item(item));
    }
    if condition.is_trade() {
        fragments.push(ConditionFragment::Trade);
    }
    if let Some(time) = condition.time_of_day.as_deref() {
        fragments.push(ConditionFragment::TimeOfDay(time));
    }
    if let Some(kind) = condition.known_move_type.as_deref() {
        fragments.push(ConditionFragment::KnownMoveType(kind));
    }

    if fragments.is_empty() {
        return locale.special_conditions().to_string();
    }
    fragments
        .into_iter()
        .map(|fragment| locale.condition(fragment))
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use dex_lineage::{EvolutionChain, EvolutionNode};
    use dex_protocol::NamedResource;
    use pretty_assertions::assert_eq;

    fn entry(lang: &str, text: &str) -> FlavorTextEntry {
        FlavorTextEntry {
            flavor_text: text.to_string(),
            language: NamedResource::new(
                lang,
                format!("https://pokeapi.co/api/v2/language/{lang}/"),
            ),
            version: None,
        }
    }

    fn record(id: u32, name: &str, entries: Vec<FlavorTextEntry>) -> SpeciesRecord {
        SpeciesRecord {
            id,
            name: name.to_string(),
            color: NamedResource::new("green", "https://pokeapi.co/api/v2/pokemon-color/5/"),
            habitat: Some(NamedResource::new(
                "rough-terrain",
                "https://pokeapi.co/api/v2/pokemon-habitat/6/",
            )),
            capture_rate: 45,
            base_happiness: Some(50),
            growth_rate: NamedResource::new(
                "medium-slow",
                "https://pokeapi.co/api/v2/growth-rate/4/",
            ),
            is_legendary: false,
            is_mythical: false,
            flavor_text_entries: entries,
            generation: NamedResource::new(
                "generation-i",
                "https://pokeapi.co/api/v2/generation/1/",
            ),
            evolution_chain: None,
        }
    }

    fn node(id: u32, name: &str, conditions: Vec<Condition>) -> EvolutionNode {
        EvolutionNode {
            id,
            name: name.to_string(),
            conditions,
        }
    }

    fn level(min_level: u32) -> Condition {
        Condition {
            min_level: Some(min_level),
            trigger: Some("level-up".into()),
            ..Default::default()
        }
    }

    #[test]
    fn primary_language_wins() {
        let entries = vec![entry("en", "X"), entry("es", "Y")];
        let chosen = select_description(&entries, "es", "en").unwrap();
        assert_eq!(chosen.flavor_text, "Y");
    }

    #[test]
    fn secondary_language_is_next() {
        let entries = vec![entry("ja", "J"), entry("en", "X")];
        let chosen = select_description(&entries, "es", "en").unwrap();
        assert_eq!(chosen.flavor_text, "X");
    }

    #[test]
    fn first_entry_is_last_resort() {
        let entries = vec![entry("fr", "Z")];
        let chosen = select_description(&entries, "es", "en").unwrap();
        assert_eq!(chosen.flavor_text, "Z");
    }

    #[test]
    fn empty_entries_have_no_description() {
        assert_eq!(
            select_description(&[], "es", "en").unwrap_err(),
            SessionError::NoDescription
        );
    }

    #[test]
    fn conditions_are_joined_in_fixed_order() {
        let condition = Condition {
            min_level: Some(20),
            min_happiness: Some(160),
            min_affection: None,
            item: Some("moon-stone".into()),
            trigger: Some("trade".into()),
            time_of_day: Some("night".into()),
            known_move_type: Some("fairy".into()),
        };
        assert_eq!(
            summarize_conditions(&[condition.clone()], Locale::Es),
            "Nivel 20, Felicidad 160, Objeto: moon-stone, Intercambio, Por la night, Movimiento tipo fairy"
        );
        assert_eq!(
            summarize_conditions(&[condition], Locale::En),
            "Level 20, Happiness 160, Item: moon-stone, Trade, During the night, Knows a fairy-type move"
        );
    }

    #[test]
    fn empty_and_unrecognised_conditions_use_sentinels() {
        assert_eq!(summarize_conditions(&[], Locale::En), "base stage");
        assert_eq!(summarize_conditions(&[], Locale::Es), "Evolución base");

        let shed = Condition {
            trigger: Some("shed".into()),
            min_level: Some(0),
            ..Default::default()
        };
        assert_eq!(summarize_conditions(&[shed], Locale::En), "special conditions");
    }

    #[test]
    fn only_the_first_condition_record_is_summarized() {
        let summary = summarize_conditions(&[level(16), level(99)], Locale::En);
        assert_eq!(summary, "Level 16");
    }

    #[test]
    fn assembles_full_view() {
        let chain = EvolutionChain::new(vec![
            node(1, "bulbasaur", vec![]),
            node(2, "ivysaur", vec![level(16)]),
            node(3, "venusaur", vec![level(32)]),
        ]);
        let navigation = NavigationState::new(chain, 2);
        let assembler = DetailAssembler::new(AssemblerConfig {
            sprite_base_url: "https://img.example/sprites".into(),
            ..Default::default()
        });

        let view = assembler.assemble(
            &record(2, "ivysaur", vec![entry("en", "When the bulb\non its back\u{c}grows large.")]),
            &navigation,
        );

        assert_eq!(view.title, "Ivysaur");
        assert_eq!(view.color_label, "Verde");
        assert_eq!(view.habitat, "Rough Terrain");
        assert_eq!(view.capture_rate_label, "45/255");
        assert_eq!(view.growth_rate, "Medium Slow");
        assert_eq!(view.generation, "GENERATION I");
        assert_eq!(
            view.description.as_deref(),
            Some("When the bulb on its back grows large.")
        );
        assert_eq!(view.description_language.as_deref(), Some("en"));
        assert_eq!(view.sprite_url, "https://img.example/sprites/2.png");
        assert_eq!(view.position.as_deref(), Some("2 de 3"));
        assert!(view.can_step_previous);
        assert!(view.can_step_next);

        assert_eq!(view.stages.len(), 3);
        assert_eq!(view.stages[0].condition, None);
        assert_eq!(view.stages[1].condition.as_deref(), Some("Nivel 16"));
        assert!(view.stages[1].is_current);
        assert!(!view.stages[2].is_current);
    }

    #[test]
    fn degenerate_record_still_assembles() {
        let mut species = record(132, "ditto", vec![]);
        species.habitat = None;
        species.color = NamedResource::new("teal", "https://pokeapi.co/api/v2/pokemon-color/99/");

        let view = DetailAssembler::default().assemble(&species, &NavigationState::standalone());

        assert_eq!(view.description, None);
        assert_eq!(view.habitat, "Desconocido");
        assert_eq!(view.color_label, "teal");
        assert!(view.stages.is_empty());
        assert_eq!(view.position, None);
        assert!(!view.can_step_previous);
        assert!(!view.can_step_next);
    }
}
