//! Hub-and-spoke routing.
//!
//! Any two providers may trust each other directly. For indirect routes only a
//! provider with the `Hub` role may sit in the middle, and trust direction is
//! checked at both hops: the source must trust the hub and the hub must trust
//! the target. Hub-to-hub chaining is not supported.

use tp_graph::{ProviderNode, Role, TopologyType, TrustGraph};
use tracing::{debug, trace};

use crate::path::PathResult;
use crate::policy::TopologyPolicy;

#[derive(Debug, Clone, Copy, Default)]
pub struct HubAndSpokePolicy;

impl HubAndSpokePolicy {
    pub fn new() -> Self {
        Self
    }

    /// First hub, in ascending ID order, with `source -> hub` and `hub -> target` edges.
    fn find_bridging_hub<'g>(
        graph: &'g TrustGraph,
        source: &ProviderNode,
        target: &ProviderNode,
    ) -> Option<&'g ProviderNode> {
        graph.hubs().find(|hub| {
            graph.has_edge(source.id.as_str(), hub.id.as_str())
                && graph.has_edge(hub.id.as_str(), target.id.as_str())
        })
    }
}

/// Whether a role may be routed through a hub.
fn routes_via_hub(role: &Role) -> bool {
    match role {
        Role::Hub => false,
        Role::Spoke | Role::Peer | Role::Other(_) => true,
    }
}

impl TopologyPolicy for HubAndSpokePolicy {
    fn topology_type(&self) -> &str {
        TopologyType::HUB_AND_SPOKE
    }

    fn validate_topology(&self, graph: Option<&TrustGraph>) -> bool {
        let Some(graph) = graph else {
            return false;
        };
        let valid = graph.hubs().next().is_some();
        if !valid {
            debug!(network = graph.network_id(), "hub-and-spoke network has no hub");
        }
        valid
    }

    fn route(
        &self,
        graph: &TrustGraph,
        source: &ProviderNode,
        target: &ProviderNode,
    ) -> PathResult {
        // A direct edge always wins, whatever the roles
        if graph.has_edge(source.id.as_str(), target.id.as_str()) {
            return PathResult::builder(source.id.clone(), target.id.clone())
                .path(vec![source.id.clone(), target.id.clone()])
                .reachable(true)
                .build();
        }

        // Hub endpoints have no fallback routing
        if !routes_via_hub(&source.role) || !routes_via_hub(&target.role) {
            trace!(source = %source.id, target = %target.id, "hub endpoint without direct edge");
            return PathResult::unreachable(source.id.clone(), target.id.clone());
        }

        match Self::find_bridging_hub(graph, source, target) {
            Some(hub) => PathResult::builder(source.id.clone(), target.id.clone())
                .path(vec![source.id.clone(), hub.id.clone(), target.id.clone()])
                .reachable(true)
                .build(),
            None => {
                trace!(source = %source.id, target = %target.id, "no bridging hub");
                PathResult::unreachable(source.id.clone(), target.id.clone())
            }
        }
    }
}
