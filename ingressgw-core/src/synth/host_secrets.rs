use crate::model::{IngressResource, SecretIdentifier, canonical_order};
use std::collections::{BTreeMap, BTreeSet};

/// Key under which TLS blocks without hosts are recorded.
pub const DEFAULT_HOST: &str = "";

/// Two TLS blocks mapped one host to different secrets. The later one, in
/// canonical resource order, won.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostConflict {
    pub host: String,
    pub previous: SecretIdentifier,
    pub current: SecretIdentifier,
}

/// Which secret serves which hostname, built fresh for every pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HostToSecretMap {
    entries: BTreeMap<String, SecretIdentifier>,
    conflicts: Vec<HostConflict>,
}

impl HostToSecretMap {
    /// Folds the TLS blocks of every resource into one map. Last mapping
    /// wins under canonical order; nothing here can fail.
    pub fn build(resources: &[IngressResource]) -> Self {
        let mut map = Self::default();

        for resource in canonical_order(resources) {
            for block in &resource.tls {
                let id = SecretIdentifier::new(&resource.namespace, &block.secret_name);
                if block.hosts.is_empty() {
                    map.insert(DEFAULT_HOST, &id);
                } else {
                    for host in &block.hosts {
                        map.insert(host, &id);
                    }
                }
            }
        }

        tracing::debug!(
            hosts = map.entries.len(),
            conflicts = map.conflicts.len(),
            "built host to secret map"
        );
        map
    }

    fn insert(&mut self, host: &str, id: &SecretIdentifier) {
        if let Some(previous) = self.entries.insert(host.to_string(), id.clone()) {
            if &previous != id {
                self.conflicts.push(HostConflict {
                    host: host.to_string(),
                    previous,
                    current: id.clone(),
                });
            }
        }
    }

    /// Explicit entry for `host`, without default fallback.
    pub fn get(&self, host: &str) -> Option<&SecretIdentifier> {
        self.entries.get(host)
    }

    /// Entry for `host`, falling back to the default certificate.
    pub fn identifier_for(&self, host: &str) -> Option<&SecretIdentifier> {
        self.entries
            .get(host)
            .or_else(|| self.entries.get(DEFAULT_HOST))
    }

    pub fn contains_host(&self, host: &str) -> bool {
        self.entries.contains_key(host)
    }

    /// Every distinct secret referenced by the map.
    pub fn identifiers(&self) -> BTreeSet<&SecretIdentifier> {
        self.entries.values().collect()
    }

    pub fn conflicts(&self) -> &[HostConflict] {
        &self.conflicts
    }

    pub fn as_map(&self) -> &BTreeMap<String, SecretIdentifier> {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &SecretIdentifier)> {
        self.entries.iter().map(|(h, id)| (h.as_str(), id))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
