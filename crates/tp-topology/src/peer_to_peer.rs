//! Peer-to-peer routing: any provider may trust any other and trust composes
//! transitively, so the shortest chain of trust edges is searched breadth-first.

use std::collections::VecDeque;

use tp_core::ProviderId;
use tp_graph::{Adjacency, ProviderNode, TopologyType, TrustGraph, find_cycle};
use tracing::{debug, trace};

use crate::path::PathResult;
use crate::policy::TopologyPolicy;

/// Maximum number of hops a peer-to-peer path may span.
///
/// Providers dequeued at this depth are not expanded further, which bounds the
/// work done on adversarial or highly cyclic configurations.
pub const MAX_PATH_DEPTH: usize = 10;

#[derive(Debug, Clone, Copy)]
pub struct PeerToPeerPolicy {
    max_depth: usize,
}

impl Default for PeerToPeerPolicy {
    fn default() -> Self {
        Self {
            max_depth: MAX_PATH_DEPTH,
        }
    }
}

impl PeerToPeerPolicy {
    pub fn new() -> Self {
        Self::default()
    }

    /// A policy with a different depth bound (mainly for tests and tooling).
    pub fn with_max_depth(max_depth: usize) -> Self {
        Self { max_depth }
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Breadth-first search from `source` to `target` over contiguous indices.
    ///
    /// Returns the index path, or `None` if `target` is not reachable within
    /// the depth bound.
    fn search(&self, adj: &Adjacency, source: usize, target: usize) -> Option<Vec<usize>> {
        let n = adj.len();
        let mut visited = vec![false; n];
        let mut parent: Vec<Option<usize>> = vec![None; n];
        let mut depth = vec![0_usize; n];
        let mut queue = VecDeque::new();

        visited[source] = true;
        queue.push_back(source);

        while let Some(current) = queue.pop_front() {
            if current == target {
                return Some(Self::reconstruct(&parent, target));
            }

            if depth[current] >= self.max_depth {
                continue;
            }

            for &next in adj.successors(current) {
                // Mark on enqueue so each provider is expanded at most once
                if !visited[next] {
                    visited[next] = true;
                    parent[next] = Some(current);
                    depth[next] = depth[current] + 1;
                    queue.push_back(next);
                }
            }
        }

        None
    }

    /// Walk parent pointers back from `target` and reverse.
    fn reconstruct(parent: &[Option<usize>], target: usize) -> Vec<usize> {
        let mut path = vec![target];
        let mut cursor = target;
        while let Some(prev) = parent[cursor] {
            path.push(prev);
            cursor = prev;
        }
        path.reverse();
        path
    }
}

impl TopologyPolicy for PeerToPeerPolicy {
    fn topology_type(&self) -> &str {
        TopologyType::PEER_TO_PEER
    }

    /// Any present graph is a valid peer-to-peer network; cycles are only logged.
    fn validate_topology(&self, graph: Option<&TrustGraph>) -> bool {
        let Some(graph) = graph else {
            return false;
        };
        if let Some(cycle) = find_cycle(graph) {
            debug!(
                network = graph.network_id(),
                cycle = ?cycle,
                "peer-to-peer network contains a trust cycle"
            );
        }
        true
    }

    fn route(
        &self,
        graph: &TrustGraph,
        source: &ProviderNode,
        target: &ProviderNode,
    ) -> PathResult {
        let adj = Adjacency::from_graph(graph);
        let (Some(from), Some(to)) = (
            adj.index_of(source.id.as_str()),
            adj.index_of(target.id.as_str()),
        ) else {
            return PathResult::unreachable(source.id.clone(), target.id.clone());
        };

        match self.search(&adj, from, to) {
            Some(indices) => {
                let path: Vec<ProviderId> = indices.into_iter().map(|i| adj.id(i).clone()).collect();
                PathResult::builder(source.id.clone(), target.id.clone())
                    .path(path)
                    .reachable(true)
                    .build()
            }
            None => {
                trace!(
                    source = %source.id,
                    target = %target.id,
                    max_depth = self.max_depth,
                    "no peer path within depth bound"
                );
                PathResult::unreachable(source.id.clone(), target.id.clone())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tp_graph::{GraphBuilder, Role, TrustLevel};

    fn peers(ids: &[&str], edges: &[(&str, &str)]) -> TrustGraph {
        let mut builder = GraphBuilder::new("p2p");
        builder.set_topology(TopologyType::PeerToPeer);
        for id in ids {
            builder.add_provider(*id, format!("https://{id}.example"), Role::Peer);
        }
        for (from, to) in edges {
            builder.add_trust(*from, *to, TrustLevel::Explicit);
        }
        builder.build().unwrap()
    }

    fn chain(len: usize) -> (TrustGraph, Vec<String>) {
        let ids: Vec<String> = (0..len).map(|i| format!("n{i:02}")).collect();
        let mut builder = GraphBuilder::new("chain");
        for id in &ids {
            builder.add_provider(id, format!("https://{id}"), Role::Peer);
        }
        for pair in ids.windows(2) {
            builder.add_trust(&pair[0], &pair[1], TrustLevel::Transitive);
        }
        (builder.build().unwrap(), ids)
    }

    fn ids(result: &PathResult) -> Vec<&str> {
        result.path().iter().map(|id| id.as_str()).collect()
    }

    #[test]
    fn direct_edge_beats_longer_chain() {
        let g = peers(
            &["a", "b", "c", "d"],
            &[("a", "b"), ("b", "c"), ("c", "d"), ("a", "d")],
        );
        let result = PeerToPeerPolicy::new().trust_path(&g, "a", "d");
        assert_eq!(ids(&result), vec!["a", "d"]);
        assert_eq!(result.hop_count(), 1);
    }

    #[test]
    fn three_cycle_terminates() {
        let g = peers(&["a", "b", "c"], &[("a", "b"), ("b", "c"), ("c", "a")]);
        let result = PeerToPeerPolicy::new().trust_path(&g, "a", "c");
        assert_eq!(ids(&result), vec!["a", "b", "c"]);
        assert_eq!(result.hop_count(), 2);
    }

    #[test]
    fn direction_is_respected() {
        let g = peers(&["a", "b"], &[("a", "b")]);
        assert!(PeerToPeerPolicy::new().trust_path(&g, "a", "b").is_reachable());
        assert!(!PeerToPeerPolicy::new().trust_path(&g, "b", "a").is_reachable());
    }

    #[test]
    fn disconnected_is_unreachable() {
        let g = peers(&["a", "b", "c", "d"], &[("a", "b"), ("c", "d")]);
        let result = PeerToPeerPolicy::new().trust_path(&g, "a", "d");
        assert!(!result.is_reachable());
        assert!(result.path().is_empty());
    }

    #[test]
    fn first_discovered_among_equal_paths() {
        let g = peers(
            &["a", "b", "c", "d"],
            &[("a", "c"), ("a", "b"), ("b", "d"), ("c", "d")],
        );
        let result = PeerToPeerPolicy::new().trust_path(&g, "a", "d");
        assert_eq!(ids(&result), vec!["a", "c", "d"]);
    }

    #[test]
    fn target_at_max_depth_is_found() {
        let (g, ids) = chain(MAX_PATH_DEPTH + 1);
        let result = PeerToPeerPolicy::new().trust_path(&g, &ids[0], &ids[MAX_PATH_DEPTH]);
        assert!(result.is_reachable());
        assert_eq!(result.hop_count(), MAX_PATH_DEPTH as i64);
    }

    #[test]
    fn target_beyond_max_depth_is_unreachable() {
        let (g, ids) = chain(MAX_PATH_DEPTH + 2);
        let result = PeerToPeerPolicy::new().trust_path(&g, &ids[0], &ids[MAX_PATH_DEPTH + 1]);
        assert!(!result.is_reachable());
        assert_eq!(result.hop_count(), -1);
    }

    #[test]
    fn custom_depth_bound() {
        let (g, ids) = chain(4);
        assert!(!PeerToPeerPolicy::with_max_depth(2)
            .trust_path(&g, &ids[0], &ids[3])
            .is_reachable());
        assert_eq!(
            PeerToPeerPolicy::with_max_depth(3)
                .trust_path(&g, &ids[0], &ids[3])
                .hop_count(),
            3
        );
    }

    #[test]
    fn validate_is_permissive() {
        let cyclic = peers(&["a", "b"], &[("a", "b"), ("b", "a")]);
        let policy = PeerToPeerPolicy::new();
        assert!(policy.validate_topology(Some(&cyclic)));
        assert!(!policy.validate_topology(None));
        assert_eq!(policy.topology_type(), "peer-to-peer");
        assert_eq!(policy.max_depth(), MAX_PATH_DEPTH);
    }

    #[test]
    fn reconstruct_walks_parents() {
        let parent = vec![None, Some(0), Some(1), Some(1)];
        assert_eq!(PeerToPeerPolicy::reconstruct(&parent, 2), vec![0, 1, 2]);
        assert_eq!(PeerToPeerPolicy::reconstruct(&parent, 0), vec![0]);
    }
}
