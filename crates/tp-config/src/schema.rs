//! Network configuration schema.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tp_graph::{TopologyType, TrustLevel};

/// One federation network as written in a registry document.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NetworkConfig {
    pub network_id: String,
    #[serde(default)]
    pub topology_type: TopologyType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub registry_version: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub metadata: BTreeMap<String, String>,
    #[serde(default)]
    pub providers: BTreeMap<String, ProviderDef>,
    #[serde(default)]
    pub trust_relationships: Vec<TrustRelationshipDef>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProviderDef {
    pub issuer: String,
    pub role: String,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub metadata: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TrustRelationshipDef {
    pub from: String,
    pub to: String,
    #[serde(default)]
    pub level: TrustLevel,
}
