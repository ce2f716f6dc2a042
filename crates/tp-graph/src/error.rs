//! Graph-specific error types.

use tp_core::{ProviderId, TpError};

/// Graph construction and validation errors.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    #[error("Network ID must not be empty")]
    EmptyNetworkId,

    #[error("Provider ID must not be empty")]
    EmptyProviderId,

    #[error("Provider {id} is declared more than once")]
    DuplicateProvider { id: ProviderId },

    /// An edge refers to a provider that doesn't exist.
    #[error("Trust edge {from} -> {to} refers to non-existent provider {missing}")]
    UnknownEndpoint {
        from: ProviderId,
        to: ProviderId,
        missing: ProviderId,
    },
}

impl From<GraphError> for TpError {
    fn from(err: GraphError) -> Self {
        match err {
            GraphError::UnknownEndpoint { missing, .. } => TpError::UnknownProvider {
                id: missing.to_string(),
            },
            other => TpError::InvalidArg {
                what: other.to_string(),
            },
        }
    }
}
