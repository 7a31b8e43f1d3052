use crate::model::{SecretContent, SecretIdentifier};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    #[error("secret '{0}' not found")]
    NotFound(SecretIdentifier),

    #[error("secret '{secret}' is malformed: {reason}")]
    Malformed {
        secret: SecretIdentifier,
        reason: String,
    },

    /// The store itself cannot be reached. Fatal for the whole pass.
    #[error("secret store unavailable: {reason}")]
    Unavailable { reason: String },
}

/// Read-only access to certificate material.
///
/// Implementations must not cache across calls: a rotated secret has to be
/// visible to the very next lookup.
pub trait SecretResolver {
    fn lookup(&self, id: &SecretIdentifier) -> Result<SecretContent, LookupError>;
}

impl<T: SecretResolver + ?Sized> SecretResolver for &T {
    fn lookup(&self, id: &SecretIdentifier) -> Result<SecretContent, LookupError> {
        (**self).lookup(id)
    }
}
