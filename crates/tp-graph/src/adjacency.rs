//! Compact, index-based adjacency for traversal.
//!
//! Provides bidirectional mappings between provider IDs and contiguous
//! indices (0..N) plus a flat successor list, so searches can use plain
//! vectors for their visited/parent/depth bookkeeping.

use std::collections::HashMap;
use tp_core::ProviderId;

use crate::graph::TrustGraph;

/// Index map and successor lists for one graph.
///
/// Built in a single O(V+E) pass. Providers are indexed in ascending ID order;
/// each provider's successors keep edge declaration order.
#[derive(Debug, Clone)]
pub struct Adjacency {
    /// Contiguous list of provider IDs (index -> ProviderId).
    ids: Vec<ProviderId>,

    /// Reverse lookup: ProviderId -> index.
    index: HashMap<ProviderId, usize>,

    /// Provider i's successors are in `targets[offsets[i]..offsets[i + 1]]`.
    offsets: Vec<usize>,

    targets: Vec<usize>,
}

impl Adjacency {
    /// Build the adjacency for a graph.
    pub fn from_graph(graph: &TrustGraph) -> Self {
        let ids: Vec<ProviderId> = graph.nodes().keys().cloned().collect();
        let index: HashMap<ProviderId, usize> = ids
            .iter()
            .enumerate()
            .map(|(i, id)| (id.clone(), i))
            .collect();

        // Group edge targets by source index, skipping anything not indexed
        let mut grouped: Vec<Vec<usize>> = vec![Vec::new(); ids.len()];
        for edge in graph.edges() {
            if let (Some(&from), Some(&to)) = (index.get(&edge.from), index.get(&edge.to)) {
                grouped[from].push(to);
            }
        }

        let mut offsets = Vec::with_capacity(ids.len() + 1);
        let mut targets = Vec::with_capacity(graph.edge_count());
        offsets.push(0);
        for successors in grouped {
            targets.extend(successors);
            offsets.push(targets.len());
        }

        Self {
            ids,
            index,
            offsets,
            targets,
        }
    }

    /// Number of indexed providers.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Get the contiguous index for a provider ID.
    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.index.get(id).copied()
    }

    /// Get the provider ID for a contiguous index (panics if out of bounds).
    pub fn id(&self, i: usize) -> &ProviderId {
        &self.ids[i]
    }

    /// Successor indices of provider `i`, in declaration order.
    pub fn successors(&self, i: usize) -> &[usize] {
        if i >= self.ids.len() {
            return &[];
        }
        &self.targets[self.offsets[i]..self.offsets[i + 1]]
    }

    /// All provider IDs in index order.
    pub fn ids(&self) -> &[ProviderId] {
        &self.ids
    }
}
