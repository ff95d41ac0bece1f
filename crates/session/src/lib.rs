//! # Dex Session
//!
//! Browsing-session state for the species catalog: one transition function that
//! owns paging, selection and lineage navigation, plus the pure assembler that turns
//! fetched records into display-ready views.
//!
//! ## Architecture
//!
//! ```text
//! Event ──> Session::reduce(&state, event) ──> Transition { state, command }
//!                │                                            │
//!                ├─ PaginationController (page windows)       └─> FetchPage / FetchDetail
//!                ├─ EvolutionChainBuilder (lineage -> chain)        (executed by the owner,
//!                └─ DetailAssembler (record + chain -> view)         answered with events)
//! ```
//!
//! Every fetch carries a [`RequestId`]; completions that do not match the request the
//! state is waiting for are dropped, so the latest selection always wins.

mod assembler;
mod error;
mod labels;
mod state;

pub use assembler::{
    select_description, summarize_conditions, AssemblerConfig, DetailAssembler, DisplayEntity,
    StageView,
};
pub use error::{Result, SessionError};
pub use labels::{color_label, ColorCode, ConditionFragment, Locale};
pub use state::{
    Command, DetailState, DetailView, Event, ListState, RequestId, Session, SessionState,
    Transition,
};

// Re-export the navigation vocabulary so owners only need this crate
pub use dex_catalog::{CatalogPage, CatalogSummary, PageDirection, PaginationController};
pub use dex_lineage::{NavigationState, StepDirection};
