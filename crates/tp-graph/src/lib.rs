//! tp-graph: trust graph model for trustpath.
//!
//! Provides:
//! - Core graph data structures (ProviderNode, Role, TrustEdge, TrustGraph)
//! - Incremental graph builder with validation
//! - Index-based adjacency for traversal
//! - Structural analysis (cycle detection)
//!
//! # Example
//!
//! ```
//! use tp_graph::{GraphBuilder, Role, TrustLevel};
//!
//! let mut builder = GraphBuilder::new("acme");
//! builder.add_provider("hub-a", "https://hub-a.example", Role::Hub);
//! builder.add_provider("b", "https://b.example", Role::Spoke);
//! builder.add_trust("b", "hub-a", TrustLevel::Explicit);
//! let graph = builder.build().unwrap();
//!
//! assert_eq!(graph.node_count(), 2);
//! assert!(graph.has_edge("b", "hub-a"));
//! assert!(!graph.has_edge("hub-a", "b"));
//! ```

pub mod adjacency;
pub mod builder;
pub mod error;
pub mod graph;
pub mod validate;

// Re-exports for ergonomics
pub use adjacency::Adjacency;
pub use builder::GraphBuilder;
pub use error::GraphError;
pub use graph::{ProviderNode, Role, TopologyType, TrustEdge, TrustGraph, TrustLevel};
pub use validate::find_cycle;
