use crate::model::SecretIdentifier;
use miette::Diagnostic;
use thiserror::Error;

/// Failure that aborts a whole pass. The caller keeps its previous graph.
#[derive(Debug, Error, Diagnostic)]
pub enum SynthError {
    #[error("secret store unavailable while resolving '{secret}': {reason}")]
    #[diagnostic(
        code(ingressgw::secret_store_unavailable),
        help("The previously applied gateway configuration stays in place until the store is reachable again.")
    )]
    SecretStoreUnavailable {
        secret: SecretIdentifier,
        reason: String,
    },
}

/// Why a certificate could not be produced for a host or secret.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum CertificateError {
    #[error("no TLS secret is mapped to host '{host}'")]
    NoSecretForHost { host: String },

    #[error("secret '{secret}' not found")]
    SecretNotFound { secret: SecretIdentifier },

    #[error("secret '{secret}' is malformed: {reason}")]
    MalformedSecretContent {
        secret: SecretIdentifier,
        reason: String,
    },

    #[error("secret store unavailable: {reason}")]
    SecretStoreUnavailable {
        secret: SecretIdentifier,
        reason: String,
    },
}
