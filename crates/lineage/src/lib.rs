//! # Dex Lineage
//!
//! Flattening and navigation of evolution lineages.
//!
//! ## Architecture
//!
//! ```text
//! ChainLink (nested, branching)
//!     │
//!     ├──> EvolutionChainBuilder
//!     │      ├─ Parse species ids from references
//!     │      ├─ Copy evolution details into conditions
//!     │      └─ Follow evolves_to[0] only (depth + cycle guarded)
//!     │
//!     └──> EvolutionChain (flat, ancestor first)
//!            │
//!            └──> NavigationState
//!                   ├─ locate(entity id) -> index
//!                   └─ step(previous | next) -> Blocked | NavigateTo(id)
//! ```

mod builder;
mod error;
mod navigator;
mod types;

pub use builder::{EvolutionChainBuilder, DEFAULT_MAX_DEPTH};
pub use error::{LineageError, Result};
pub use navigator::{locate, NavigationState, NextAction, StepDirection};
pub use types::{Condition, EvolutionChain, EvolutionNode};
