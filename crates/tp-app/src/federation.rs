//! Federation gate consulted by an authentication broker before a
//! cross-provider redirect.

use tp_topology::{PathResult, PolicyRegistry};
use tracing::{debug, warn};

use crate::snapshots::GraphLookup;

/// Decides whether a login at one provider may be routed to a user's home provider.
///
/// Stateless apart from the injected lookup and the policy registry; an
/// unreachable result always means "deny the federation attempt".
#[derive(Debug, Clone)]
pub struct FederationGate<L> {
    lookup: L,
    registry: PolicyRegistry,
}

impl<L: GraphLookup> FederationGate<L> {
    /// A gate using the built-in policies.
    pub fn new(lookup: L) -> Self {
        Self::with_registry(lookup, PolicyRegistry::default())
    }

    pub fn with_registry(lookup: L, registry: PolicyRegistry) -> Self {
        Self { lookup, registry }
    }

    pub fn lookup(&self) -> &L {
        &self.lookup
    }

    pub fn registry(&self) -> &PolicyRegistry {
        &self.registry
    }

    /// Compute the trust path from `current_provider` to `home_provider` in a network.
    ///
    /// An unknown network, or a network whose topology has no registered
    /// policy, yields an unreachable result.
    pub fn check(&self, network_id: &str, current_provider: &str, home_provider: &str) -> PathResult {
        let Some(graph) = self.lookup.graph(network_id) else {
            warn!(network = network_id, "federation check against unknown network");
            return PathResult::unreachable(current_provider, home_provider);
        };

        let Some(policy) = self.registry.for_graph(&graph) else {
            warn!(
                network = network_id,
                topology = %graph.topology_type(),
                "no policy registered for topology"
            );
            return PathResult::unreachable(current_provider, home_provider);
        };

        let result = policy.trust_path(&graph, current_provider, home_provider);
        debug!(
            network = network_id,
            source = current_provider,
            target = home_provider,
            reachable = result.is_reachable(),
            hops = result.hop_count(),
            "federation check"
        );
        result
    }

    /// Whether the redirect may proceed.
    pub fn is_permitted(&self, network_id: &str, current_provider: &str, home_provider: &str) -> bool {
        self.check(network_id, current_provider, home_provider)
            .is_reachable()
    }
}
