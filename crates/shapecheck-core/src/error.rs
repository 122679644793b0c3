//! Errors raised while assembling structures. Queries never fail.

/// Rejected parent -> children mapping.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TreeError {
    #[error("tree mapping is cyclic: {value} appears below itself")]
    CyclicMapping { value: String },
    #[error("tree mapping lists {value} under more than one parent")]
    SharedChild { value: String },
}
