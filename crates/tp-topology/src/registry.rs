//! Lookup of policies by topology type.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use tp_graph::TrustGraph;

use crate::hub_and_spoke::HubAndSpokePolicy;
use crate::peer_to_peer::PeerToPeerPolicy;
use crate::policy::TopologyPolicy;

/// Maps topology-type identifiers to the policy serving them.
///
/// `PolicyRegistry::default()` knows both built-in topologies; custom policies
/// are added with [`PolicyRegistry::register`].
#[derive(Clone)]
pub struct PolicyRegistry {
    policies: HashMap<String, Arc<dyn TopologyPolicy>>,
}

impl PolicyRegistry {
    /// A registry with no policies at all.
    pub fn empty() -> Self {
        Self {
            policies: HashMap::new(),
        }
    }

    /// Register a policy under its own `topology_type`, replacing any previous one.
    pub fn register<P: TopologyPolicy + 'static>(&mut self, policy: P) -> &mut Self {
        self.policies
            .insert(policy.topology_type().to_string(), Arc::new(policy));
        self
    }

    pub fn get(&self, topology_type: &str) -> Option<Arc<dyn TopologyPolicy>> {
        self.policies.get(topology_type).cloned()
    }

    /// The policy matching a graph's declared topology.
    pub fn for_graph(&self, graph: &TrustGraph) -> Option<Arc<dyn TopologyPolicy>> {
        self.get(graph.topology_type().as_str())
    }

    /// Registered identifiers, sorted.
    pub fn topology_types(&self) -> Vec<&str> {
        let mut types: Vec<&str> = self.policies.keys().map(String::as_str).collect();
        types.sort_unstable();
        types
    }
}

impl Default for PolicyRegistry {
    fn default() -> Self {
        let mut registry = Self::empty();
        registry
            .register(HubAndSpokePolicy::new())
            .register(PeerToPeerPolicy::new());
        registry
    }
}

impl fmt::Debug for PolicyRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PolicyRegistry")
            .field("topology_types", &self.topology_types())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::PathResult;
    use tp_graph::{GraphBuilder, ProviderNode, Role, TopologyType};

    /// Only direct edges count.
    struct DirectOnly;

    impl TopologyPolicy for DirectOnly {
        fn topology_type(&self) -> &str {
            "direct-only"
        }

        fn validate_topology(&self, graph: Option<&TrustGraph>) -> bool {
            graph.is_some()
        }

        fn route(
            &self,
            graph: &TrustGraph,
            source: &ProviderNode,
            target: &ProviderNode,
        ) -> PathResult {
            if graph.has_edge(source.id.as_str(), target.id.as_str()) {
                PathResult::builder(source.id.clone(), target.id.clone())
                    .path(vec![source.id.clone(), target.id.clone()])
                    .reachable(true)
                    .build()
            } else {
                PathResult::unreachable(source.id.clone(), target.id.clone())
            }
        }
    }

    #[test]
    fn default_has_builtins() {
        let registry = PolicyRegistry::default();
        assert_eq!(registry.topology_types(), vec!["hub-and-spoke", "peer-to-peer"]);
        assert!(registry.get("hub-and-spoke").is_some());
        assert!(registry.get("mesh").is_none());
        assert!(PolicyRegistry::empty().topology_types().is_empty());
    }

    #[test]
    fn for_graph_uses_declared_topology() {
        let mut builder = GraphBuilder::new("net");
        builder.set_topology(TopologyType::PeerToPeer);
        builder.add_provider("a", "https://a", Role::Peer);
        let graph = builder.build().unwrap();

        let policy = PolicyRegistry::default().for_graph(&graph).unwrap();
        assert_eq!(policy.topology_type(), "peer-to-peer");
    }

    #[test]
    fn custom_policy_can_be_registered() {
        let mut builder = GraphBuilder::new("net");
        builder.set_topology("direct-only");
        builder.add_provider("a", "https://a", Role::Other("rp".into()));
        builder.add_provider("b", "https://b", Role::Other("rp".into()));
        builder.add_trust("a", "b", tp_graph::TrustLevel::Explicit);
        let graph = builder.build().unwrap();

        let mut registry = PolicyRegistry::default();
        registry.register(DirectOnly);
        let policy = registry.for_graph(&graph).unwrap();
        assert_eq!(policy.trust_path(&graph, "a", "b").hop_count(), 1);
        assert!(!policy.trust_path(&graph, "b", "a").is_reachable());
    }
}
