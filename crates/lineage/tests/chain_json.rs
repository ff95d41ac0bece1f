use dex_lineage::{locate, EvolutionChainBuilder, NavigationState, NextAction, StepDirection};
use dex_protocol::EvolutionChainRecord;
use pretty_assertions::assert_eq;

fn species(id: u32, name: &str) -> serde_json::Value {
    serde_json::json!({
        "name": name,
        "url": format!("https://pokeapi.co/api/v2/pokemon-species/{id}/")
    })
}

fn level_up(level: u32) -> serde_json::Value {
    serde_json::json!({
        "min_level": level,
        "trigger": {"name": "level-up", "url": "https://pokeapi.co/api/v2/evolution-trigger/1/"},
        "time_of_day": "",
        "item": null
    })
}

#[test]
fn three_stage_chain_from_json() {
    let raw = serde_json::json!({
        "id": 1,
        "baby_trigger_item": null,
        "chain": {
            "species": species(1, "a"),
            "evolution_details": [],
            "is_baby": false,
            "evolves_to": [{
                "species": species(2, "b"),
                "evolution_details": [level_up(16)],
                "evolves_to": [{
                    "species": species(3, "c"),
                    "evolution_details": [level_up(36)],
                    "evolves_to": []
                }]
            }]
        }
    });
    let record: EvolutionChainRecord = serde_json::from_value(raw).expect("chain record");
    let chain = EvolutionChainBuilder::new()
        .build(&record.chain)
        .expect("chain builds");

    assert_eq!(chain.ids(), vec![1, 2, 3]);
    assert_eq!(locate(&chain, 2), Some(1));
    assert_eq!(chain.get(1).unwrap().conditions[0].min_level, Some(16));
    assert_eq!(chain.get(1).unwrap().conditions[0].time_of_day, None);

    let state = NavigationState::new(chain, 2);
    assert_eq!(state.step(StepDirection::Previous), NextAction::NavigateTo(1));
    assert_eq!(state.step(StepDirection::Next), NextAction::NavigateTo(3));
}

#[test]
fn every_stage_is_located_at_its_depth() {
    // Branching factor 1 at every node: length equals depth.
    let depth = 6u32;
    let mut link = serde_json::json!({"species": species(depth, "last"), "evolves_to": []});
    for id in (1..depth).rev() {
        link = serde_json::json!({
            "species": species(id, "mid"),
            "evolution_details": [level_up(id * 5)],
            "evolves_to": [link]
        });
    }
    let root: dex_protocol::ChainLink = serde_json::from_value(link).unwrap();
    let chain = EvolutionChainBuilder::new().build(&root).unwrap();

    assert_eq!(chain.len(), depth as usize);
    for id in 1..=depth {
        assert_eq!(locate(&chain, id), Some((id - 1) as usize));
    }
}
