//! Path results returned by topology policies.

use serde::ser::{Serialize, SerializeStruct, Serializer};
use tp_core::ProviderId;

/// Outcome of a trust path query.
///
/// `path` is empty iff the target is unreachable. When reachable, the path
/// starts at `source` and ends at `target`; the trivial same-provider result
/// is `[source]` with zero hops.
///
/// Equality covers the whole route, not just the endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PathResult {
    source: ProviderId,
    target: ProviderId,
    path: Vec<ProviderId>,
    reachable: bool,
}

impl PathResult {
    /// Start building a result. Both endpoints are required.
    pub fn builder(source: impl Into<ProviderId>, target: impl Into<ProviderId>) -> PathResultBuilder {
        PathResultBuilder {
            source: source.into(),
            target: target.into(),
            path: Vec::new(),
            reachable: false,
        }
    }

    pub fn unreachable(source: impl Into<ProviderId>, target: impl Into<ProviderId>) -> Self {
        Self::builder(source, target).build()
    }

    /// The zero-hop result for a provider routed to itself.
    pub fn trivial(provider: impl Into<ProviderId>) -> Self {
        let provider = provider.into();
        Self::builder(provider.clone(), provider.clone())
            .path(vec![provider])
            .reachable(true)
            .build()
    }

    /// A reachable result along `path`, which must run from `source` to `target`.
    pub fn found(path: Vec<ProviderId>) -> Option<Self> {
        let source = path.first()?.clone();
        let target = path.last()?.clone();
        Some(Self::builder(source, target).path(path).reachable(true).build())
    }

    pub fn source(&self) -> &ProviderId {
        &self.source
    }

    pub fn target(&self) -> &ProviderId {
        &self.target
    }

    /// The route, in traversal order.
    pub fn path(&self) -> &[ProviderId] {
        &self.path
    }

    pub fn is_reachable(&self) -> bool {
        self.reachable
    }

    /// Number of trust edges traversed, or -1 when unreachable.
    pub fn hop_count(&self) -> i64 {
        match self.hops() {
            Some(hops) => hops as i64,
            None => -1,
        }
    }

    /// Number of trust edges traversed, if reachable.
    pub fn hops(&self) -> Option<usize> {
        self.reachable.then(|| self.path.len().saturating_sub(1))
    }
}

impl Serialize for PathResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("PathResult", 5)?;
        state.serialize_field("source", &self.source)?;
        state.serialize_field("target", &self.target)?;
        state.serialize_field("path", &self.path)?;
        state.serialize_field("reachable", &self.reachable)?;
        state.serialize_field("hop_count", &self.hop_count())?;
        state.end()
    }
}

/// Builder for [`PathResult`]; `path` defaults to empty and `reachable` to false.
#[derive(Debug, Clone)]
pub struct PathResultBuilder {
    source: ProviderId,
    target: ProviderId,
    path: Vec<ProviderId>,
    reachable: bool,
}

impl PathResultBuilder {
    pub fn path(mut self, path: Vec<ProviderId>) -> Self {
        self.path = path;
        self
    }

    pub fn reachable(mut self, reachable: bool) -> Self {
        self.reachable = reachable;
        self
    }

    pub fn build(self) -> PathResult {
        debug_assert!(
            !self.reachable
                || (self.path.first() == Some(&self.source) && self.path.last() == Some(&self.target)),
            "reachable path must run from source to target"
        );
        debug_assert!(
            self.reachable || self.path.is_empty(),
            "unreachable result must carry an empty path"
        );
        PathResult {
            source: self.source,
            target: self.target,
            path: self.path,
            reachable: self.reachable,
        }
    }
}
