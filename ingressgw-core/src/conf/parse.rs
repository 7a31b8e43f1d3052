use crate::conf::error::ConfigError;
use k8s_openapi::api::networking::v1::Ingress;
use serde::Deserialize;
use std::fs;
use std::path::Path;

const INGRESS_KIND: &str = "Ingress";

/// Reads every Ingress document from a (possibly multi-document) YAML file.
/// Documents of other kinds are skipped.
pub fn parse_ingress_manifests(path: &Path) -> Result<Vec<Ingress>, ConfigError> {
    let s = fs::read_to_string(path).map_err(|e| ConfigError::read_file(path, e))?;
    parse_ingress_str(&s).map_err(|e| ConfigError::parse_manifest(path, e))
}

pub fn parse_ingress_str(s: &str) -> Result<Vec<Ingress>, serde_yaml::Error> {
    let mut ingresses = Vec::new();

    for document in serde_yaml::Deserializer::from_str(s) {
        let value = serde_yaml::Value::deserialize(document)?;
        if value.is_null() {
            continue;
        }

        let kind = value.get("kind").and_then(|k| k.as_str()).unwrap_or_default();
        if kind != INGRESS_KIND {
            tracing::debug!(%kind, "skipping non-ingress document");
            continue;
        }

        ingresses.push(serde_yaml::from_value(value)?);
    }

    Ok(ingresses)
}
