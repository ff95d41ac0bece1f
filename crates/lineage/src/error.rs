use thiserror::Error;

pub type Result<T> = std::result::Result<T, LineageError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LineageError {
    #[error("Malformed chain: species reference {reference:?} has no numeric id")]
    MalformedChain { reference: String },

    #[error("Cycle detected: species {0} appears twice in the lineage")]
    CycleDetected(u32),

    #[error("Lineage deeper than {max_depth} stages")]
    DepthExceeded { max_depth: usize },
}
