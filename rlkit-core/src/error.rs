//! Errors in the library.
use thiserror::Error;

/// Errors in the library.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RlkitError {
    /// An attribute with the same name was already registered in the logger.
    #[error("Attribute {0} already exists")]
    DuplicateAttribute(String),

    /// The attribute was never registered in the logger.
    #[error("No such attribute: {0}")]
    UnknownAttribute(String),

    /// A transition field does not have the dimension the buffer was built with.
    #[error("Shape mismatch in {field}: expected {expected}, got {actual}")]
    ShapeMismatch {
        /// Name of the offending field, e.g. `obs`.
        field: &'static str,
        /// Dimension the buffer was built with.
        expected: usize,
        /// Length of the given slice.
        actual: usize,
    },

    /// Sampling was requested from a buffer holding no transitions.
    #[error("Cannot sample from an empty replay buffer")]
    EmptyBuffer,

    /// A replay buffer must be able to hold at least one transition.
    #[error("Replay buffer capacity must be positive")]
    ZeroCapacity,

    /// Network description needs at least two positive layer widths.
    #[error("Invalid layer sizes: got {0} widths, need at least 2 positive ones")]
    InvalidLayerSizes(usize),
}
