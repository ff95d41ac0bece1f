use crate::error::{LineageError, Result};
use crate::types::{Condition, EvolutionChain, EvolutionNode};
use dex_protocol::ChainLink;
use std::collections::HashSet;

/// Longest lineage accepted before the build is aborted.
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Flatten nested lineage graphs into single-path chains.
///
/// At every fork only the first listed branch is followed; the remaining
/// branches are dropped.
#[derive(Debug, Clone, Copy)]
pub struct EvolutionChainBuilder {
    max_depth: usize,
}

impl EvolutionChainBuilder {
    pub fn new() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    pub fn with_max_depth(max_depth: usize) -> Self {
        Self { max_depth }
    }

    pub fn build(&self, root: &ChainLink) -> Result<EvolutionChain> {
        let mut nodes = Vec::new();
        let mut seen = HashSet::new();
        let mut cursor = Some(root);

        while let Some(link) = cursor {
            if nodes.len() >= self.max_depth {
                return Err(LineageError::DepthExceeded {
                    max_depth: self.max_depth,
                });
            }

            let id = link
                .species
                .reference_id()
                .ok_or_else(|| LineageError::MalformedChain {
                    reference: link.species.url.clone(),
                })?;
            if !seen.insert(id) {
                return Err(LineageError::CycleDetected(id));
            }

            nodes.push(EvolutionNode {
                id,
                name: link.species.name.clone(),
                conditions: link.evolution_details.iter().map(Condition::from).collect(),
            });

            if link.evolves_to.len() > 1 {
                log::debug!(
                    "Lineage fork at {} (#{id}): following '{}', dropping {} other branch(es)",
                    link.species.name,
                    link.evolves_to[0].species.name,
                    link.evolves_to.len() - 1
                );
            }
            cursor = link.evolves_to.first();
        }

        log::debug!("Built evolution chain of {} stage(s)", nodes.len());
        Ok(EvolutionChain::new(nodes))
    }
}

impl Default for EvolutionChainBuilder {
    fn default() -> Self {
        Self::new()
    }
}
