use crate::model::intent::IngressIntent;
use crate::model::secret::resource_key;
use serde::{Deserialize, Serialize};

/// Snapshot of one ingress resource as seen by the synthesizer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct IngressResource {
    pub namespace: String,
    pub name: String,
    pub rules: Vec<IngressRule>,
    pub tls: Vec<TlsBlock>,
    pub intent: IngressIntent,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct IngressRule {
    /// Empty when the rule matches any host.
    pub host: String,
    pub paths: Vec<PathRule>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct PathRule {
    pub path: String,
    pub backend: BackendRef,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct BackendRef {
    pub service: String,
    pub port: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct TlsBlock {
    /// An empty list binds the secret to the default listener.
    pub hosts: Vec<String>,
    pub secret_name: String,
}

impl IngressResource {
    pub fn key(&self) -> String {
        resource_key(&self.namespace, &self.name)
    }

    /// Hosts matched by the resource's rules. A resource without rules
    /// behaves like a single catch-all rule.
    pub fn rule_hosts(&self) -> Vec<&str> {
        if self.rules.is_empty() {
            return vec![""];
        }
        self.rules.iter().map(|r| r.host.as_str()).collect()
    }

    pub fn has_default_tls(&self) -> bool {
        self.tls.iter().any(|block| block.hosts.is_empty())
    }
}

/// Orders resources by namespace, then name. Input order from the
/// orchestrator carries no meaning and must never leak into the output.
pub fn canonical_order(resources: &[IngressResource]) -> Vec<&IngressResource> {
    let mut ordered: Vec<&IngressResource> = resources.iter().collect();
    ordered.sort_by(|a, b| {
        (a.namespace.as_str(), a.name.as_str()).cmp(&(b.namespace.as_str(), b.name.as_str()))
    });
    ordered
}
