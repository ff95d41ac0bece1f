use crate::types::{EvolutionChain, EvolutionNode};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepDirection {
    Previous,
    Next,
}

/// Outcome of a step request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NextAction {
    /// The step would leave the chain; nothing changes.
    Blocked,

    /// Load the entity with this id. The owner enters its loading state before fetching.
    NavigateTo(u32),
}

/// Index of the first stage with `target_id`.
pub fn locate(chain: &EvolutionChain, target_id: u32) -> Option<usize> {
    chain.iter().position(|node| node.id == target_id)
}

/// A chain plus the position of the displayed entity within it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationState {
    pub chain: EvolutionChain,

    /// `None` when the entity is not part of the chain (standalone species)
    pub current_index: Option<usize>,
}

impl NavigationState {
    pub fn new(chain: EvolutionChain, entity_id: u32) -> Self {
        let current_index = locate(&chain, entity_id);
        if current_index.is_none() && !chain.is_empty() {
            log::debug!(
                "Species #{entity_id} not found in chain {:?}",
                chain.ids()
            );
        }
        Self {
            chain,
            current_index,
        }
    }

    /// State for an entity without any lineage.
    pub fn standalone() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<&EvolutionNode> {
        self.current_index.and_then(|index| self.chain.get(index))
    }

    pub fn can_step_previous(&self) -> bool {
        matches!(self.current_index, Some(index) if index > 0)
    }

    pub fn can_step_next(&self) -> bool {
        matches!(self.current_index, Some(index) if index + 1 < self.chain.len())
    }

    /// 1-based `(position, length)` for "n of m" rendering.
    pub fn position(&self) -> Option<(usize, usize)> {
        self.current_index.map(|index| (index + 1, self.chain.len()))
    }

    pub fn step(&self, direction: StepDirection) -> NextAction {
        let Some(index) = self.current_index else {
            return NextAction::Blocked;
        };
        let target = match direction {
            StepDirection::Previous if self.can_step_previous() => index - 1,
            StepDirection::Next if self.can_step_next() => index + 1,
            _ => return NextAction::Blocked,
        };
        self.chain
            .get(target)
            .map(|node| NextAction::NavigateTo(node.id))
            .unwrap_or(NextAction::Blocked)
    }
}
