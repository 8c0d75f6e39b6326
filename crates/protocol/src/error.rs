//! Error types for the dragboard-protocol crate.
//!
//! Reconciliation itself never fails (invalid drags are no-ops); these errors
//! cover building boards from untrusted input and serialization.

use thiserror::Error;

use crate::item::Id;

/// Errors that can occur during protocol operations.
#[derive(Debug, Error)]
pub enum ProtocolError {
    /// An id is used by more than one column or item.
    #[error("duplicate id on board: {0}")]
    DuplicateId(Id),
}

/// A specialized Result type for protocol operations.
pub type Result<T> = std::result::Result<T, ProtocolError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_messages() {
        let err = ProtocolError::DuplicateId(Id::from("item-1"));
        assert_eq!(err.to_string(), "duplicate id on board: item-1");
    }
}
