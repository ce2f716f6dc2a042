//! tp-core: stable foundation for trustpath.
//!
//! Contains:
//! - ids (provider identifiers shared by graph, policies and results)
//! - error (shared error types)

pub mod error;
pub mod ids;

// Re-exports: nice ergonomics for downstream crates
pub use error::{TpError, TpResult};
pub use ids::*;
