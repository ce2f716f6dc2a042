//! Incremental graph builder.

use std::collections::{BTreeMap, HashMap, HashSet};
use tp_core::{ProviderId, TpResult};
use tracing::debug;

use crate::graph::{ProviderNode, Role, TopologyType, TrustEdge, TrustGraph, TrustLevel};
use crate::validate;

/// Builder for constructing a trust graph incrementally.
///
/// Use `add_provider` and `add_trust` to build up the graph,
/// then call `build()` to validate and freeze it into an immutable `TrustGraph`.
#[derive(Debug, Default)]
pub struct GraphBuilder {
    network_id: String,
    topology_type: TopologyType,
    version: Option<String>,
    metadata: BTreeMap<String, String>,
    nodes: Vec<ProviderNode>,
    edges: Vec<TrustEdge>,
}

impl GraphBuilder {
    /// Create a new empty builder for the given network.
    pub fn new(network_id: impl Into<String>) -> Self {
        Self {
            network_id: network_id.into(),
            ..Self::default()
        }
    }

    pub fn set_topology(&mut self, topology_type: impl Into<TopologyType>) -> &mut Self {
        self.topology_type = topology_type.into();
        self
    }

    pub fn set_version(&mut self, version: impl Into<String>) -> &mut Self {
        self.version = Some(version.into());
        self
    }

    pub fn insert_metadata(
        &mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> &mut Self {
        self.metadata.insert(key.into(), value.into());
        self
    }

    /// Add a provider and return its ID.
    pub fn add_provider(
        &mut self,
        id: impl Into<ProviderId>,
        issuer: impl Into<String>,
        role: Role,
    ) -> ProviderId {
        self.add_provider_node(ProviderNode::new(id, issuer, role))
    }

    /// Add a fully described provider (e.g. with metadata) and return its ID.
    pub fn add_provider_node(&mut self, node: ProviderNode) -> ProviderId {
        let id = node.id.clone();
        self.nodes.push(node);
        id
    }

    /// Declare that `from` trusts `to`.
    pub fn add_trust(
        &mut self,
        from: impl Into<ProviderId>,
        to: impl Into<ProviderId>,
        level: TrustLevel,
    ) -> &mut Self {
        self.edges.push(TrustEdge {
            from: from.into(),
            to: to.into(),
            level,
        });
        self
    }

    /// Build and validate the graph, returning an immutable `TrustGraph`.
    ///
    /// This performs validation, collapses duplicate edges and constructs the
    /// successor lists used for routing.
    pub fn build(self) -> TpResult<TrustGraph> {
        validate::validate_structure(&self.network_id, &self.nodes, &self.edges)?;

        let nodes: BTreeMap<ProviderId, ProviderNode> = self
            .nodes
            .into_iter()
            .map(|node| (node.id.clone(), node))
            .collect();

        let (edges, successors, trusts) = Self::build_adjacency(self.edges);

        debug!(
            network = %self.network_id,
            topology = %self.topology_type,
            providers = nodes.len(),
            edges = edges.len(),
            "built trust graph"
        );

        Ok(TrustGraph {
            network_id: self.network_id,
            topology_type: self.topology_type,
            version: self.version,
            metadata: self.metadata,
            nodes,
            edges,
            successors,
            trusts,
        })
    }

    /// Collapse duplicate `(from, to)` pairs (first declaration wins) and
    /// group successors per provider in declaration order.
    #[allow(clippy::type_complexity)]
    fn build_adjacency(
        declared: Vec<TrustEdge>,
    ) -> (
        Vec<TrustEdge>,
        HashMap<ProviderId, Vec<ProviderId>>,
        HashMap<ProviderId, HashSet<ProviderId>>,
    ) {
        let mut edges = Vec::with_capacity(declared.len());
        let mut successors: HashMap<ProviderId, Vec<ProviderId>> = HashMap::new();
        let mut trusts: HashMap<ProviderId, HashSet<ProviderId>> = HashMap::new();

        for edge in declared {
            if !trusts
                .entry(edge.from.clone())
                .or_default()
                .insert(edge.to.clone())
            {
                debug!(from = %edge.from, to = %edge.to, "collapsing duplicate trust edge");
                continue;
            }
            successors
                .entry(edge.from.clone())
                .or_default()
                .push(edge.to.clone());
            edges.push(edge);
        }

        (edges, successors, trusts)
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::adjacency::Adjacency;
    use proptest::prelude::*;

    fn network() -> impl Strategy<Value = (usize, Vec<(usize, usize, bool)>)> {
        (1usize..8).prop_flat_map(|n| {
            (
                Just(n),
                prop::collection::vec((0..n, 0..n, any::<bool>()), 0..40),
            )
        })
    }

    fn build((n, edges): &(usize, Vec<(usize, usize, bool)>)) -> TrustGraph {
        let mut builder = GraphBuilder::new("net");
        for i in 0..*n {
            builder.add_provider(format!("p{i}"), format!("https://p{i}.example"), Role::Peer);
        }
        for (from, to, transitive) in edges {
            let level = if *transitive {
                TrustLevel::Transitive
            } else {
                TrustLevel::Explicit
            };
            builder.add_trust(format!("p{from}"), format!("p{to}"), level);
        }
        builder.build().unwrap()
    }

    proptest! {
        #[test]
        fn duplicate_edges_collapse_to_first_declaration(net in network()) {
            let graph = build(&net);

            let mut first: Vec<(String, String, TrustLevel)> = Vec::new();
            for (from, to, transitive) in &net.1 {
                let (from, to) = (format!("p{from}"), format!("p{to}"));
                if !first.iter().any(|(f, t, _)| *f == from && *t == to) {
                    let level = if *transitive { TrustLevel::Transitive } else { TrustLevel::Explicit };
                    first.push((from, to, level));
                }
            }

            prop_assert_eq!(graph.edge_count(), first.len());
            for (edge, (from, to, level)) in graph.edges().iter().zip(&first) {
                prop_assert_eq!(edge.from.as_str(), from.as_str());
                prop_assert_eq!(edge.to.as_str(), to.as_str());
                prop_assert_eq!(edge.level, *level);
                prop_assert!(graph.has_edge(from, to));
            }
        }

        #[test]
        fn adjacency_successors_match_outgoing(net in network()) {
            let graph = build(&net);
            let adj = Adjacency::from_graph(&graph);

            prop_assert_eq!(adj.len(), graph.node_count());
            for (i, id) in adj.ids().iter().enumerate() {
                let from_adj: Vec<&str> = adj
                    .successors(i)
                    .iter()
                    .map(|&j| adj.id(j).as_str())
                    .collect();
                let from_graph: Vec<&str> = graph.outgoing(id.as_str()).map(|t| t.as_str()).collect();
                prop_assert_eq!(from_adj, from_graph);
            }
        }
    }
}
