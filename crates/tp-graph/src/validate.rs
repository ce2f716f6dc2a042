//! Graph validation and structural analysis.

use std::collections::HashSet;
use tp_core::{ProviderId, TpResult};

use crate::adjacency::Adjacency;
use crate::error::GraphError;
use crate::graph::{ProviderNode, TrustEdge, TrustGraph};

/// Validate the graph structure: IDs present and unique, every edge endpoint declared.
pub(crate) fn validate_structure(
    network_id: &str,
    nodes: &[ProviderNode],
    edges: &[TrustEdge],
) -> TpResult<()> {
    if network_id.trim().is_empty() {
        return Err(GraphError::EmptyNetworkId.into());
    }

    let mut seen: HashSet<&str> = HashSet::with_capacity(nodes.len());
    for node in nodes {
        if node.id.is_empty() {
            return Err(GraphError::EmptyProviderId.into());
        }
        if !seen.insert(node.id.as_str()) {
            return Err(GraphError::DuplicateProvider {
                id: node.id.clone(),
            }
            .into());
        }
    }

    for edge in edges {
        for endpoint in [&edge.from, &edge.to] {
            if !seen.contains(endpoint.as_str()) {
                return Err(GraphError::UnknownEndpoint {
                    from: edge.from.clone(),
                    to: edge.to.clone(),
                    missing: endpoint.clone(),
                }
                .into());
            }
        }
    }

    Ok(())
}

/// Find one directed cycle, if the graph has any.
///
/// Informational only: cycles are legal and path searches cope with them.
/// The returned cycle starts and ends at the same provider, e.g. `[a, b, c, a]`.
/// Self-loops are reported as `[a, a]`.
pub fn find_cycle(graph: &TrustGraph) -> Option<Vec<ProviderId>> {
    #[derive(Clone, Copy, PartialEq, Eq)]
    enum Mark {
        Unvisited,
        OnStack,
        Done,
    }

    let adj = Adjacency::from_graph(graph);
    let mut marks = vec![Mark::Unvisited; adj.len()];

    for root in 0..adj.len() {
        if marks[root] != Mark::Unvisited {
            continue;
        }

        // Iterative DFS: (node, next successor position)
        let mut stack: Vec<(usize, usize)> = vec![(root, 0)];
        marks[root] = Mark::OnStack;

        while let Some(top) = stack.last_mut() {
            let node = top.0;
            let successors = adj.successors(node);
            if top.1 < successors.len() {
                let next = successors[top.1];
                top.1 += 1;
                match marks[next] {
                    Mark::Unvisited => {
                        marks[next] = Mark::OnStack;
                        stack.push((next, 0));
                    }
                    Mark::OnStack => {
                        let start = stack
                            .iter()
                            .position(|&(n, _)| n == next)
                            .unwrap_or_default();
                        let mut cycle: Vec<ProviderId> = stack[start..]
                            .iter()
                            .map(|&(n, _)| adj.id(n).clone())
                            .collect();
                        cycle.push(adj.id(next).clone());
                        return Some(cycle);
                    }
                    Mark::Done => {}
                }
            } else {
                marks[node] = Mark::Done;
                stack.pop();
            }
        }
    }

    None
}
