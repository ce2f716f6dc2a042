//! tp-config: federation network documents and their conversion into trust graphs.

pub mod schema;
pub mod validate;

use std::path::Path;

use tp_graph::{GraphBuilder, ProviderNode, Role, TrustGraph};
use tracing::debug;

pub use schema::*;
pub use validate::{ValidationError, validate_network};

pub type ConfigResult<T> = Result<T, ConfigError>;

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Graph error: {0}")]
    Graph(#[from] tp_core::TpError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Document format, chosen from the file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Yaml,
    Json,
}

impl Format {
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Format::Json,
            _ => Format::Yaml,
        }
    }
}

pub fn parse_yaml(content: &str) -> ConfigResult<NetworkConfig> {
    let config: NetworkConfig = serde_yaml::from_str(content)?;
    validate_network(&config)?;
    Ok(config)
}

pub fn parse_json(content: &str) -> ConfigResult<NetworkConfig> {
    let config: NetworkConfig = serde_json::from_str(content)?;
    validate_network(&config)?;
    Ok(config)
}

pub fn parse(content: &str, format: Format) -> ConfigResult<NetworkConfig> {
    match format {
        Format::Yaml => parse_yaml(content),
        Format::Json => parse_json(content),
    }
}

pub fn load(path: &Path) -> ConfigResult<NetworkConfig> {
    let content = std::fs::read_to_string(path)?;
    parse(&content, Format::from_path(path))
}

pub fn save(path: &Path, config: &NetworkConfig) -> ConfigResult<()> {
    validate_network(config)?;
    let content = match Format::from_path(path) {
        Format::Yaml => serde_yaml::to_string(config)?,
        Format::Json => serde_json::to_string_pretty(config)?,
    };
    std::fs::write(path, content)?;
    Ok(())
}

/// Build the immutable trust graph described by a validated document.
pub fn to_graph(config: &NetworkConfig) -> ConfigResult<TrustGraph> {
    let mut builder = GraphBuilder::new(config.network_id.clone());
    builder.set_topology(config.topology_type.clone());
    if let Some(version) = config.registry_version {
        builder.set_version(version.to_rfc3339());
    }
    for (key, value) in &config.metadata {
        builder.insert_metadata(key.clone(), value.clone());
    }

    for (id, def) in &config.providers {
        let mut node = ProviderNode::new(id, def.issuer.clone(), Role::parse(&def.role));
        node.metadata = def.metadata.clone();
        builder.add_provider_node(node);
    }

    for rel in &config.trust_relationships {
        builder.add_trust(&rel.from, &rel.to, rel.level);
    }

    let graph = builder.build()?;
    debug!(
        network = graph.network_id(),
        providers = graph.node_count(),
        "converted network document"
    );
    Ok(graph)
}

/// Load a document from disk and convert it into a trust graph.
pub fn load_graph(path: &Path) -> ConfigResult<TrustGraph> {
    to_graph(&load(path)?)
}
