use crate::model::{SecretContent, SecretIdentifier};
use crate::secrets::resolver::{LookupError, SecretResolver};
use std::collections::HashMap;

/// Map-backed secret store.
#[derive(Debug, Default, Clone)]
pub struct InMemorySecretStore {
    secrets: HashMap<SecretIdentifier, SecretContent>,
    unavailable: Option<String>,
}

impl InMemorySecretStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, id: SecretIdentifier, content: SecretContent) -> &mut Self {
        self.secrets.insert(id, content);
        self
    }

    pub fn with_secret(mut self, id: SecretIdentifier, content: SecretContent) -> Self {
        self.insert(id, content);
        self
    }

    pub fn remove(&mut self, id: &SecretIdentifier) -> Option<SecretContent> {
        self.secrets.remove(id)
    }

    /// Makes every lookup fail as if the backing store went away.
    pub fn set_unavailable(&mut self, reason: impl Into<String>) {
        self.unavailable = Some(reason.into());
    }
}

impl SecretResolver for InMemorySecretStore {
    fn lookup(&self, id: &SecretIdentifier) -> Result<SecretContent, LookupError> {
        if let Some(reason) = &self.unavailable {
            return Err(LookupError::Unavailable {
                reason: reason.clone(),
            });
        }
        self.secrets
            .get(id)
            .cloned()
            .ok_or_else(|| LookupError::NotFound(id.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn lookup_returns_stored_content() {
        // Arrange
        let id = SecretIdentifier::new("default", "tls");
        let store = InMemorySecretStore::new().with_secret(id.clone(), SecretContent::new("c", "k"));

        // Act
        let content = store.lookup(&id).unwrap();

        // Assert
        assert_eq!(content, SecretContent::new("c", "k"));
    }

    #[test]
    fn lookup_of_missing_secret_is_not_found() {
        let id = SecretIdentifier::new("default", "missing");
        let store = InMemorySecretStore::new();
        assert_eq!(store.lookup(&id), Err(LookupError::NotFound(id)));
    }

    #[test]
    fn unavailable_store_fails_every_lookup() {
        // Arrange
        let id = SecretIdentifier::new("default", "tls");
        let mut store =
            InMemorySecretStore::new().with_secret(id.clone(), SecretContent::new("c", "k"));
        store.set_unavailable("connection refused");

        // Act
        let result = store.lookup(&id);

        // Assert
        assert!(matches!(result, Err(LookupError::Unavailable { .. })));
    }
}
