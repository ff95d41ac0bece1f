use dex_protocol::EvolutionDetail;
use serde::{Deserialize, Serialize};

/// Requirement for reaching a stage from its predecessor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Condition {
    /// Minimum level (e.g., 16)
    pub min_level: Option<u32>,

    /// Happiness / affection thresholds
    pub min_happiness: Option<u32>,
    pub min_affection: Option<u32>,

    /// Item slug (e.g., "water-stone")
    pub item: Option<String>,

    /// Trigger slug (e.g., "level-up", "trade")
    pub trigger: Option<String>,

    /// "day" / "night"; the remote API sends "" when unset
    pub time_of_day: Option<String>,

    /// Type slug of a move that must be known
    pub known_move_type: Option<String>,
}

impl Condition {
    pub fn is_trade(&self) -> bool {
        self.trigger.as_deref() == Some("trade")
    }
}

impl From<&EvolutionDetail> for Condition {
    fn from(detail: &EvolutionDetail) -> Self {
        Self {
            min_level: detail.min_level,
            min_happiness: detail.min_happiness,
            min_affection: detail.min_affection,
            item: detail.item.as_ref().map(|item| item.name.clone()),
            trigger: detail.trigger.as_ref().map(|trigger| trigger.name.clone()),
            time_of_day: detail
                .time_of_day
                .as_deref()
                .map(str::trim)
                .filter(|t| !t.is_empty())
                .map(str::to_string),
            known_move_type: detail
                .known_move_type
                .as_ref()
                .map(|move_type| move_type.name.clone()),
        }
    }
}

/// One stage of a flattened lineage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvolutionNode {
    pub id: u32,
    pub name: String,

    /// Empty for the root stage
    pub conditions: Vec<Condition>,
}

/// Single-path lineage, ancestor first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvolutionChain {
    nodes: Vec<EvolutionNode>,
}

impl EvolutionChain {
    pub fn new(nodes: Vec<EvolutionNode>) -> Self {
        Self { nodes }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&EvolutionNode> {
        self.nodes.get(index)
    }

    pub fn nodes(&self) -> &[EvolutionNode] {
        &self.nodes
    }

    pub fn iter(&self) -> impl Iterator<Item = &EvolutionNode> {
        self.nodes.iter()
    }

    pub fn ids(&self) -> Vec<u32> {
        self.nodes.iter().map(|node| node.id).collect()
    }
}
