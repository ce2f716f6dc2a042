//! Graph snapshot lookup.
//!
//! Brokers resolve a network ID to an immutable graph through [`GraphLookup`],
//! so tests and embedders can hand in fixed snapshots instead of relying on
//! process-wide state.

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use tp_graph::TrustGraph;

use crate::error::{AppError, AppResult};
use crate::network_service;

/// Capability resolving a network ID to its current graph snapshot.
pub trait GraphLookup: Send + Sync {
    fn graph(&self, network_id: &str) -> Option<Arc<TrustGraph>>;
}

impl<F> GraphLookup for F
where
    F: Fn(&str) -> Option<Arc<TrustGraph>> + Send + Sync,
{
    fn graph(&self, network_id: &str) -> Option<Arc<TrustGraph>> {
        self(network_id)
    }
}

/// An immutable, in-memory set of graph snapshots keyed by network ID.
///
/// Reloading builds a new set (see [`SnapshotSet::with_graph`]) rather than
/// mutating one that queries may be reading.
#[derive(Debug, Clone, Default)]
pub struct SnapshotSet {
    graphs: HashMap<String, Arc<TrustGraph>>,
}

impl SnapshotSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a set from graphs, rejecting two graphs with the same network ID.
    pub fn from_graphs(graphs: impl IntoIterator<Item = TrustGraph>) -> AppResult<Self> {
        let mut map = HashMap::new();
        for graph in graphs {
            let id = graph.network_id().to_string();
            if map.insert(id.clone(), Arc::new(graph)).is_some() {
                return Err(AppError::DuplicateNetwork(id));
            }
        }
        Ok(Self { graphs: map })
    }

    /// Load every listed network file into a new set.
    pub fn load(paths: &[impl AsRef<Path>]) -> AppResult<Self> {
        let graphs = paths
            .iter()
            .map(|path| network_service::load_network(path.as_ref()))
            .collect::<AppResult<Vec<_>>>()?;
        Self::from_graphs(graphs)
    }

    /// A new set with `graph` added, replacing any snapshot with the same network ID.
    pub fn with_graph(&self, graph: TrustGraph) -> Self {
        let mut graphs = self.graphs.clone();
        graphs.insert(graph.network_id().to_string(), Arc::new(graph));
        Self { graphs }
    }

    pub fn len(&self) -> usize {
        self.graphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.graphs.is_empty()
    }

    /// Network IDs, sorted.
    pub fn network_ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.graphs.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }
}

impl GraphLookup for SnapshotSet {
    fn graph(&self, network_id: &str) -> Option<Arc<TrustGraph>> {
        self.graphs.get(network_id).cloned()
    }
}
