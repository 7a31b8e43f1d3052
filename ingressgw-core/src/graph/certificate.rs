use crate::model::SecretIdentifier;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SslCertificateConfig {
    /// Derived from the source secret only; stable across passes.
    pub name: String,

    /// Base64 of the certificate bytes.
    pub data: String,

    /// Base64 of the private key bytes.
    #[serde(skip_serializing)]
    pub key_data: String,

    pub source: SecretIdentifier,
}
