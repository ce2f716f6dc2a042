//! Common contract for topology policies.

use tp_core::ProviderId;
use tp_graph::{ProviderNode, TrustGraph};
use tracing::trace;

use crate::path::PathResult;

/// A routing policy for one kind of federation topology.
///
/// Implementations never return errors across this boundary: malformed or
/// missing input is reported as an unreachable [`PathResult`], and structural
/// problems only through [`TopologyPolicy::validate_topology`].
pub trait TopologyPolicy: Send + Sync {
    /// Identifier matching the `topology_type` of graphs this policy serves.
    fn topology_type(&self) -> &str;

    /// Structural sanity check specific to the policy. False on absent input.
    fn validate_topology(&self, graph: Option<&TrustGraph>) -> bool;

    /// Policy-specific routing between two distinct providers present in `graph`.
    fn route(&self, graph: &TrustGraph, source: &ProviderNode, target: &ProviderNode)
    -> PathResult;

    /// Compute the trust path from `source` to `target`.
    ///
    /// Absent inputs yield an unreachable result with `"unknown"` standing in
    /// for a missing endpoint. A provider routed to itself is always reachable
    /// with a zero-hop path. Endpoints not in the graph are unreachable.
    /// Does not consult `validate_topology`.
    fn compute_trust_path(
        &self,
        graph: Option<&TrustGraph>,
        source: Option<&str>,
        target: Option<&str>,
    ) -> PathResult {
        let (Some(graph), Some(source), Some(target)) = (graph, source, target) else {
            trace!(
                policy = self.topology_type(),
                has_graph = graph.is_some(),
                "missing input, path unreachable"
            );
            return PathResult::unreachable(
                source.map_or_else(ProviderId::unknown, ProviderId::from),
                target.map_or_else(ProviderId::unknown, ProviderId::from),
            );
        };

        if source == target {
            return PathResult::trivial(source);
        }

        let (Some(source_node), Some(target_node)) = (graph.node(source), graph.node(target))
        else {
            trace!(
                policy = self.topology_type(),
                network = graph.network_id(),
                source,
                target,
                "endpoint not in graph, path unreachable"
            );
            return PathResult::unreachable(source, target);
        };

        self.route(graph, source_node, target_node)
    }

    /// Convenience for the common case where every input is present.
    fn trust_path(&self, graph: &TrustGraph, source: &str, target: &str) -> PathResult {
        self.compute_trust_path(Some(graph), Some(source), Some(target))
    }
}
