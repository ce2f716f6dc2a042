//! Core trust graph data structures.

use std::collections::{BTreeMap, HashMap, HashSet};
use std::fmt;

use serde::{Deserialize, Serialize};
use tp_core::ProviderId;

/// Topology-significant tag carried by every provider.
///
/// Policies match on this exhaustively. Unrecognised role strings are kept
/// verbatim in `Other` so newer configurations still load.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Role {
    Hub,
    Spoke,
    Peer,
    Other(String),
}

impl Role {
    /// Parse a role tag. Only the exact lowercase tags map to known variants.
    pub fn parse(tag: &str) -> Self {
        match tag {
            "hub" => Role::Hub,
            "spoke" => Role::Spoke,
            "peer" => Role::Peer,
            _ => Role::Other(tag.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Role::Hub => "hub",
            Role::Spoke => "spoke",
            Role::Peer => "peer",
            Role::Other(tag) => tag,
        }
    }

    pub fn is_hub(&self) -> bool {
        matches!(self, Role::Hub)
    }
}

impl From<String> for Role {
    fn from(tag: String) -> Self {
        Role::parse(&tag)
    }
}

impl From<&str> for Role {
    fn from(tag: &str) -> Self {
        Role::parse(tag)
    }
}

impl From<Role> for String {
    fn from(role: Role) -> Self {
        match role {
            Role::Other(tag) => tag,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How a trust relationship was established.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrustLevel {
    /// Configured directly between the two providers.
    #[default]
    Explicit,
    /// Derived from a chain of other relationships.
    Transitive,
}

impl fmt::Display for TrustLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrustLevel::Explicit => f.write_str("explicit"),
            TrustLevel::Transitive => f.write_str("transitive"),
        }
    }
}

/// Identifier selecting which topology policy governs a graph.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TopologyType {
    #[default]
    HubAndSpoke,
    PeerToPeer,
    Custom(String),
}

impl TopologyType {
    pub const HUB_AND_SPOKE: &'static str = "hub-and-spoke";
    pub const PEER_TO_PEER: &'static str = "peer-to-peer";

    pub fn parse(tag: &str) -> Self {
        match tag.trim() {
            Self::HUB_AND_SPOKE => TopologyType::HubAndSpoke,
            Self::PEER_TO_PEER => TopologyType::PeerToPeer,
            other => TopologyType::Custom(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            TopologyType::HubAndSpoke => Self::HUB_AND_SPOKE,
            TopologyType::PeerToPeer => Self::PEER_TO_PEER,
            TopologyType::Custom(tag) => tag,
        }
    }
}

impl From<String> for TopologyType {
    fn from(tag: String) -> Self {
        TopologyType::parse(&tag)
    }
}

impl From<&str> for TopologyType {
    fn from(tag: &str) -> Self {
        TopologyType::parse(tag)
    }
}

impl From<TopologyType> for String {
    fn from(t: TopologyType) -> Self {
        t.as_str().to_string()
    }
}

impl fmt::Display for TopologyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An identity provider in the federation graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderNode {
    pub id: ProviderId,
    pub issuer: String,
    pub role: Role,
    /// Opaque key/value data, e.g. a key-discovery endpoint.
    pub metadata: BTreeMap<String, String>,
}

impl ProviderNode {
    pub fn new(id: impl Into<ProviderId>, issuer: impl Into<String>, role: Role) -> Self {
        Self {
            id: id.into(),
            issuer: issuer.into(),
            role,
            metadata: BTreeMap::new(),
        }
    }

    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }
}

/// A directed trust relationship: `from` relies on assertions of `to`.
///
/// An edge A->B never implies B->A.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TrustEdge {
    pub from: ProviderId,
    pub to: ProviderId,
    pub level: TrustLevel,
}

/// The graph: a validated, immutable snapshot of one federation network.
///
/// The graph stores:
/// - Providers keyed by ID (iterated in ascending ID order).
/// - Edges in declaration order, at most one per ordered pair.
/// - Successor lists and a membership index for O(1) edge lookup.
///
/// Share it behind an `Arc`; a reload builds a new graph instead of mutating this one.
#[derive(Debug, Clone)]
pub struct TrustGraph {
    pub(crate) network_id: String,
    pub(crate) topology_type: TopologyType,
    pub(crate) version: Option<String>,
    pub(crate) metadata: BTreeMap<String, String>,
    pub(crate) nodes: BTreeMap<ProviderId, ProviderNode>,
    pub(crate) edges: Vec<TrustEdge>,

    /// Successors of each provider, in edge declaration order.
    pub(crate) successors: HashMap<ProviderId, Vec<ProviderId>>,

    /// Membership index backing `has_edge`.
    pub(crate) trusts: HashMap<ProviderId, HashSet<ProviderId>>,
}

impl TrustGraph {
    pub fn network_id(&self) -> &str {
        &self.network_id
    }

    pub fn topology_type(&self) -> &TopologyType {
        &self.topology_type
    }

    /// Opaque provenance marker of the source registry, if any.
    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    pub fn metadata(&self) -> &BTreeMap<String, String> {
        &self.metadata
    }

    /// Return all providers, keyed by ID.
    pub fn nodes(&self) -> &BTreeMap<ProviderId, ProviderNode> {
        &self.nodes
    }

    /// Return all edges in declaration order.
    pub fn edges(&self) -> &[TrustEdge] {
        &self.edges
    }

    pub fn node(&self, id: &str) -> Option<&ProviderNode> {
        self.nodes.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.nodes.contains_key(id)
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Whether `from` directly trusts `to`.
    pub fn has_edge(&self, from: &str, to: &str) -> bool {
        self.trusts.get(from).is_some_and(|set| set.contains(to))
    }

    /// Iterate over the providers `from` directly trusts, in declaration order.
    pub fn outgoing(&self, from: &str) -> impl Iterator<Item = &ProviderId> + '_ {
        self.successors.get(from).into_iter().flatten()
    }

    /// Iterate over hub providers in ascending ID order.
    pub fn hubs(&self) -> impl Iterator<Item = &ProviderNode> + '_ {
        self.nodes.values().filter(|node| node.role.is_hub())
    }
}
