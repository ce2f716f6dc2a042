//! Network loading, validation, and introspection.

use std::path::Path;

use serde::Serialize;
use tp_graph::{TrustGraph, find_cycle};
use tp_topology::PolicyRegistry;
use tracing::info;

use crate::error::{AppError, AppResult};

/// Summary of a network for listing.
#[derive(Debug, Clone, Serialize)]
pub struct NetworkSummary {
    pub network_id: String,
    pub topology_type: String,
    pub version: Option<String>,
    pub provider_count: usize,
    pub edge_count: usize,
    pub hubs: Vec<String>,
    /// `None` when no policy is registered for the topology.
    pub topology_valid: Option<bool>,
    pub has_cycle: bool,
}

/// One provider and the providers it trusts, for listing.
#[derive(Debug, Clone, Serialize)]
pub struct ProviderSummary {
    pub id: String,
    pub issuer: String,
    pub role: String,
    pub trusts: Vec<String>,
}

/// Load a network document and build its trust graph.
pub fn load_network(path: &Path) -> AppResult<TrustGraph> {
    let graph = tp_config::load_graph(path).map_err(|source| AppError::NetworkLoad {
        path: path.to_path_buf(),
        source,
    })?;
    info!(
        network = graph.network_id(),
        path = %path.display(),
        providers = graph.node_count(),
        "loaded network"
    );
    Ok(graph)
}

/// Summarize a network, checking its topology with the matching policy.
pub fn summarize(graph: &TrustGraph, registry: &PolicyRegistry) -> NetworkSummary {
    let topology_valid = registry
        .for_graph(graph)
        .map(|policy| policy.validate_topology(Some(graph)));

    NetworkSummary {
        network_id: graph.network_id().to_string(),
        topology_type: graph.topology_type().to_string(),
        version: graph.version().map(str::to_string),
        provider_count: graph.node_count(),
        edge_count: graph.edge_count(),
        hubs: graph.hubs().map(|hub| hub.id.to_string()).collect(),
        topology_valid,
        has_cycle: find_cycle(graph).is_some(),
    }
}

/// List providers in ID order with their outgoing trust.
pub fn list_providers(graph: &TrustGraph) -> Vec<ProviderSummary> {
    graph
        .nodes()
        .values()
        .map(|node| ProviderSummary {
            id: node.id.to_string(),
            issuer: node.issuer.clone(),
            role: node.role.to_string(),
            trusts: graph
                .outgoing(node.id.as_str())
                .map(|id| id.to_string())
                .collect(),
        })
        .collect()
}

/// Check a graph against its policy, failing when the topology is unknown or invalid.
pub fn validate_network(graph: &TrustGraph, registry: &PolicyRegistry) -> AppResult<()> {
    let policy = registry
        .for_graph(graph)
        .ok_or_else(|| AppError::UnknownTopology(graph.topology_type().to_string()))?;

    if !policy.validate_topology(Some(graph)) {
        return Err(AppError::InvalidInput(format!(
            "Network '{}' does not satisfy the {} topology",
            graph.network_id(),
            policy.topology_type()
        )));
    }

    Ok(())
}
