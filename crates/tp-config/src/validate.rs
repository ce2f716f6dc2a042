//! Network configuration validation.

use crate::schema::NetworkConfig;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Missing field: {field}")]
    MissingField { field: String },

    #[error("Missing reference: {id} in {context}")]
    MissingReference { id: String, context: String },

    #[error("Invalid value: {field} = {value} ({reason})")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },
}

pub fn validate_network(config: &NetworkConfig) -> Result<(), ValidationError> {
    if config.network_id.trim().is_empty() {
        return Err(ValidationError::MissingField {
            field: "network_id".to_string(),
        });
    }

    for (id, provider) in &config.providers {
        if id.trim().is_empty() {
            return Err(ValidationError::InvalidValue {
                field: "providers".to_string(),
                value: id.clone(),
                reason: "provider ID must not be empty".to_string(),
            });
        }
        if provider.issuer.trim().is_empty() {
            return Err(ValidationError::MissingField {
                field: format!("providers.{id}.issuer"),
            });
        }
        if provider.role.trim().is_empty() {
            return Err(ValidationError::MissingField {
                field: format!("providers.{id}.role"),
            });
        }
    }

    for (i, rel) in config.trust_relationships.iter().enumerate() {
        for endpoint in [&rel.from, &rel.to] {
            if !config.providers.contains_key(endpoint) {
                return Err(ValidationError::MissingReference {
                    id: endpoint.clone(),
                    context: format!("trust_relationships[{i}]"),
                });
            }
        }
    }

    Ok(())
}
