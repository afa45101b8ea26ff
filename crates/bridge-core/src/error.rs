//! Error types for bridge planning.

use thiserror::Error;

/// Errors raised by the planning pipeline.
///
/// Near-coincident base/user and zero-length segments are not errors: they
/// degrade to an empty target list or a zero projection.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BridgeError {
    /// Not enough drones to cover the base→user distance at the given spacing.
    #[error("insufficient drones to build the bridge: needed {needed}, available {available}")]
    InsufficientDrones { needed: usize, available: usize },

    #[error("invalid parameter `{name}`: {reason}")]
    InvalidParameter { name: &'static str, reason: String },

    #[error("non-finite value in `{field}`")]
    NonFiniteInput { field: String },

    #[error("duplicate drone label `{0}`")]
    DuplicateLabel(String),
}

impl BridgeError {
    /// True for the recoverable "ask for more drones" case.
    pub fn is_insufficient_drones(&self) -> bool {
        matches!(self, BridgeError::InsufficientDrones { .. })
    }
}
