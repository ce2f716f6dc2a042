//! tp-topology: trust path policies for trustpath.
//!
//! A [`TopologyPolicy`] turns an immutable [`tp_graph::TrustGraph`] and two
//! provider IDs into a [`PathResult`]. Two policies are built in:
//!
//! - [`HubAndSpokePolicy`]: direct edges, or exactly one hub in between
//! - [`PeerToPeerPolicy`]: shortest chain of trust edges, depth-bounded
//!
//! Policies are pure: no state survives a call, so one graph can be queried
//! from many threads at once.
//!
//! # Example
//!
//! ```
//! use tp_graph::{GraphBuilder, Role, TrustLevel};
//! use tp_topology::{HubAndSpokePolicy, TopologyPolicy};
//!
//! let mut builder = GraphBuilder::new("acme");
//! builder.add_provider("hub-a", "https://hub-a.example", Role::Hub);
//! builder.add_provider("b", "https://b.example", Role::Spoke);
//! builder.add_provider("c", "https://c.example", Role::Spoke);
//! builder
//!     .add_trust("b", "hub-a", TrustLevel::Explicit)
//!     .add_trust("hub-a", "c", TrustLevel::Explicit);
//! let graph = builder.build().unwrap();
//!
//! let result = HubAndSpokePolicy.trust_path(&graph, "b", "c");
//! assert!(result.is_reachable());
//! assert_eq!(result.hop_count(), 2);
//! ```

pub mod hub_and_spoke;
pub mod path;
pub mod peer_to_peer;
pub mod policy;
pub mod registry;

pub use hub_and_spoke::HubAndSpokePolicy;
pub use path::{PathResult, PathResultBuilder};
pub use peer_to_peer::{MAX_PATH_DEPTH, PeerToPeerPolicy};
pub use policy::TopologyPolicy;
pub use registry::PolicyRegistry;
