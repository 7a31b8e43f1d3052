use serde::{Deserialize, Serialize};
use std::fmt;

/// Formats a namespaced resource as `namespace/name`.
pub fn resource_key(namespace: &str, name: &str) -> String {
    format!("{namespace}/{name}")
}

/// Points at a secret in the secret store. Ordered by namespace, then name.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize, Serialize)]
pub struct SecretIdentifier {
    pub namespace: String,
    pub name: String,
}

impl SecretIdentifier {
    pub fn new(namespace: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            name: name.into(),
        }
    }
}

impl fmt::Display for SecretIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&resource_key(&self.namespace, &self.name))
    }
}

/// Raw certificate material as returned by a secret store.
///
/// Lives for a single synthesis pass only.
#[derive(Clone, PartialEq, Eq)]
pub struct SecretContent {
    pub certificate: Vec<u8>,
    pub key: Vec<u8>,
}

impl SecretContent {
    pub fn new(certificate: impl Into<Vec<u8>>, key: impl Into<Vec<u8>>) -> Self {
        Self {
            certificate: certificate.into(),
            key: key.into(),
        }
    }
}

impl fmt::Debug for SecretContent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecretContent")
            .field("certificate", &format_args!("<{} bytes>", self.certificate.len()))
            .field("key", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn resource_key_joins_namespace_and_name() {
        assert_eq!(resource_key("default", "pod"), "default/pod");
    }

    #[test]
    fn identifiers_order_by_namespace_then_name() {
        // Arrange
        let mut ids = vec![
            SecretIdentifier::new("b", "a"),
            SecretIdentifier::new("a", "z"),
            SecretIdentifier::new("a", "b"),
        ];

        // Act
        ids.sort();

        // Assert
        assert_eq!(
            ids,
            vec![
                SecretIdentifier::new("a", "b"),
                SecretIdentifier::new("a", "z"),
                SecretIdentifier::new("b", "a"),
            ]
        );
    }

    #[test]
    fn debug_output_never_contains_key_material() {
        let content = SecretContent::new("cert", "super-secret-key");
        let rendered = format!("{content:?}");
        assert!(!rendered.contains("super-secret-key"));
    }
}
