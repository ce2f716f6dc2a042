//! Parsing and conversion of network documents.

use tp_config::{ConfigError, Format, NetworkConfig, ValidationError, parse_json, parse_yaml, to_graph};
use tp_graph::{Role, TopologyType, TrustLevel};
use tp_topology::PolicyRegistry;

const HUB_YAML: &str = r#"
network_id: acme-federation
registry_version: 2024-05-01T12:00:00Z
metadata:
  owner: platform
providers:
  hub-a:
    issuer: https://hub-a.example
    role: hub
    metadata:
      jwks_uri: https://hub-a.example/jwks
  b:
    issuer: https://b.example
    role: spoke
  c:
    issuer: https://c.example
    role: spoke
trust_relationships:
  - { from: b, to: hub-a, level: explicit }
  - { from: hub-a, to: c }
"#;

const PEER_JSON: &str = r#"{
  "network_id": "peers",
  "topology_type": "peer-to-peer",
  "providers": {
    "a": { "issuer": "https://a.example", "role": "peer" },
    "b": { "issuer": "https://b.example", "role": "peer" },
    "c": { "issuer": "https://c.example", "role": "peer" }
  },
  "trust_relationships": [
    { "from": "a", "to": "b", "level": "explicit" },
    { "from": "b", "to": "c", "level": "transitive" },
    { "from": "c", "to": "a", "level": "explicit" }
  ]
}"#;

#[test]
fn yaml_defaults_to_hub_and_spoke() {
    let config = parse_yaml(HUB_YAML).unwrap();
    assert_eq!(config.topology_type, TopologyType::HubAndSpoke);
    assert_eq!(config.providers.len(), 3);
    assert_eq!(config.trust_relationships[1].level, TrustLevel::Explicit);
}

#[test]
fn yaml_converts_to_graph() {
    let graph = to_graph(&parse_yaml(HUB_YAML).unwrap()).unwrap();

    assert_eq!(graph.network_id(), "acme-federation");
    assert_eq!(graph.version(), Some("2024-05-01T12:00:00+00:00"));
    assert_eq!(graph.metadata().get("owner").map(String::as_str), Some("platform"));
    assert_eq!(graph.node("hub-a").unwrap().role, Role::Hub);
    assert!(graph.node("hub-a").unwrap().metadata.contains_key("jwks_uri"));
    assert!(graph.has_edge("b", "hub-a"));
    assert!(graph.has_edge("hub-a", "c"));

    let policy = PolicyRegistry::default().for_graph(&graph).unwrap();
    assert!(policy.validate_topology(Some(&graph)));
    assert_eq!(policy.trust_path(&graph, "b", "c").hop_count(), 2);
}

#[test]
fn json_peer_network() {
    let config = parse_json(PEER_JSON).unwrap();
    assert_eq!(config.topology_type, TopologyType::PeerToPeer);
    assert_eq!(config.registry_version, None);

    let graph = to_graph(&config).unwrap();
    assert_eq!(graph.edges()[1].level, TrustLevel::Transitive);

    let policy = PolicyRegistry::default().for_graph(&graph).unwrap();
    let result = policy.trust_path(&graph, "a", "c");
    assert_eq!(result.hop_count(), 2);
}

#[test]
fn unknown_roles_are_preserved() {
    let yaml = r#"
network_id: n
providers:
  x: { issuer: https://x, role: relying-party }
"#;
    let graph = to_graph(&parse_yaml(yaml).unwrap()).unwrap();
    assert_eq!(graph.node("x").unwrap().role, Role::Other("relying-party".into()));
}

#[test]
fn unparsable_document_is_format_error() {
    assert!(matches!(parse_yaml("network_id: [unclosed"), Err(ConfigError::Yaml(_))));
    assert!(matches!(parse_json("{ not json"), Err(ConfigError::Json(_))));
}

#[test]
fn missing_network_id_is_format_error() {
    assert!(matches!(parse_yaml("providers: {}"), Err(ConfigError::Yaml(_))));
}

#[test]
fn unknown_level_is_format_error() {
    let yaml = r#"
network_id: n
providers:
  a: { issuer: https://a, role: peer }
  b: { issuer: https://b, role: peer }
trust_relationships:
  - { from: a, to: b, level: sideways }
"#;
    assert!(matches!(parse_yaml(yaml), Err(ConfigError::Yaml(_))));
}

#[test]
fn dangling_relationship_is_validation_error() {
    let yaml = r#"
network_id: n
providers:
  a: { issuer: https://a, role: peer }
trust_relationships:
  - { from: a, to: ghost }
"#;
    match parse_yaml(yaml) {
        Err(ConfigError::Validation(ValidationError::MissingReference { id, .. })) => {
            assert_eq!(id, "ghost")
        }
        other => panic!("expected missing reference, got {other:?}"),
    }
}

#[test]
fn format_from_extension() {
    use std::path::Path;
    assert_eq!(Format::from_path(Path::new("net.json")), Format::Json);
    assert_eq!(Format::from_path(Path::new("net.JSON")), Format::Json);
    assert_eq!(Format::from_path(Path::new("net.yaml")), Format::Yaml);
    assert_eq!(Format::from_path(Path::new("net")), Format::Yaml);
}

#[test]
fn save_and_load_file() {
    let dir = std::env::temp_dir().join(format!("tp-config-test-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("peers.json");

    let config: NetworkConfig = parse_json(PEER_JSON).unwrap();
    tp_config::save(&path, &config).unwrap();
    let loaded = tp_config::load(&path).unwrap();
    assert_eq!(loaded, config);

    let graph = tp_config::load_graph(&path).unwrap();
    assert_eq!(graph.node_count(), 3);

    std::fs::remove_dir_all(&dir).ok();
}
