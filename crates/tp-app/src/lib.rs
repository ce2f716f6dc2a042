//! Shared application service layer for trustpath.
//!
//! This crate sits between network documents and the routing policies:
//! loading and summarizing networks, holding immutable graph snapshots, and
//! answering federation checks for the CLI or an embedding broker.

pub mod error;
pub mod federation;
pub mod network_service;
pub mod snapshots;

// Re-export key types for convenience
pub use error::{AppError, AppResult};
pub use federation::FederationGate;
pub use network_service::{
    NetworkSummary, ProviderSummary, list_providers, load_network, summarize, validate_network,
};
pub use snapshots::{GraphLookup, SnapshotSet};
