use crate::model::{SecretContent, SecretIdentifier};
use crate::secrets::resolver::{LookupError, SecretResolver};
use k8s_openapi::api::core::v1::Secret;
use std::fs;
use std::path::{Path, PathBuf};

const CERTIFICATE_KEY: &str = "tls.crt";
const PRIVATE_KEY_KEY: &str = "tls.key";

/// Reads `kubernetes.io/tls` Secret manifests laid out as
/// `<root>/<namespace>/<name>.yaml`.
///
/// Every lookup goes to disk.
#[derive(Debug, Clone)]
pub struct ManifestSecretStore {
    root: PathBuf,
}

impl ManifestSecretStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// `None` for references that are not Kubernetes object names, so a
    /// name like `../x` never leaves `root`.
    fn manifest_path(&self, id: &SecretIdentifier) -> Option<PathBuf> {
        if !is_dns_label(&id.namespace) || !is_dns_subdomain(&id.name) {
            tracing::debug!(secret = %id, "secret reference is not a valid object name");
            return None;
        }
        let dir = self.root.join(&id.namespace);
        ["yaml", "yml"]
            .iter()
            .map(|ext| dir.join(format!("{}.{ext}", id.name)))
            .find(|p| p.is_file())
    }
}

impl SecretResolver for ManifestSecretStore {
    fn lookup(&self, id: &SecretIdentifier) -> Result<SecretContent, LookupError> {
        if !self.root.is_dir() {
            return Err(LookupError::Unavailable {
                reason: format!("secret directory {} does not exist", self.root.display()),
            });
        }

        let Some(path) = self.manifest_path(id) else {
            return Err(LookupError::NotFound(id.clone()));
        };

        let malformed = |reason: String| LookupError::Malformed {
            secret: id.clone(),
            reason,
        };

        let raw = fs::read_to_string(&path)
            .map_err(|e| malformed(format!("failed to read {}: {e}", path.display())))?;
        let secret: Secret = serde_yaml::from_str(&raw)
            .map_err(|e| malformed(format!("invalid manifest {}: {e}", path.display())))?;

        if let Some(name) = secret.metadata.name.as_deref() {
            if name != id.name {
                return Err(malformed(format!("manifest declares secret '{name}'")));
            }
        }

        let certificate =
            entry(&secret, CERTIFICATE_KEY).ok_or_else(|| malformed(missing(CERTIFICATE_KEY)))?;
        let key =
            entry(&secret, PRIVATE_KEY_KEY).ok_or_else(|| malformed(missing(PRIVATE_KEY_KEY)))?;

        Ok(SecretContent { certificate, key })
    }
}

/// `data` wins over `stringData` the same way the API server merges them.
fn entry(secret: &Secret, key: &str) -> Option<Vec<u8>> {
    secret
        .data
        .as_ref()
        .and_then(|data| data.get(key))
        .map(|bytes| bytes.0.clone())
        .or_else(|| {
            secret
                .string_data
                .as_ref()
                .and_then(|data| data.get(key))
                .map(|s| s.clone().into_bytes())
        })
}

/// RFC 1123 label: namespaces.
fn is_dns_label(value: &str) -> bool {
    value.len() <= 63
        && value.starts_with(|c: char| c.is_ascii_lowercase() || c.is_ascii_digit())
        && value.ends_with(|c: char| c.is_ascii_lowercase() || c.is_ascii_digit())
        && value
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}

/// RFC 1123 subdomain: secret names.
fn is_dns_subdomain(value: &str) -> bool {
    value.len() <= 253 && value.split('.').all(is_dns_label)
}

fn missing(key: &str) -> String {
    format!("missing '{key}' entry")
}
