use crate::graph::{CertificateSet, SslCertificateConfig};
use crate::model::{SecretContent, SecretIdentifier};
use crate::secrets::{LookupError, SecretResolver};
use crate::synth::error::{CertificateError, SynthError};
use crate::synth::host_secrets::HostToSecretMap;
use crate::synth::naming::certificate_name;
use crate::synth::report::SynthesisReport;
use base64::{Engine, engine::general_purpose};
use std::collections::BTreeMap;

const PEM_BEGIN: &[u8] = b"-----BEGIN";
const PEM_END: &[u8] = b"-----END";

/// Fetches the certificate serving `host`, falling back to the default
/// certificate when the host has no entry of its own.
pub fn resolve(
    host: &str,
    hosts: &HostToSecretMap,
    resolver: &dyn SecretResolver,
) -> Result<(Vec<u8>, SecretIdentifier), CertificateError> {
    let id = hosts
        .identifier_for(host)
        .ok_or_else(|| CertificateError::NoSecretForHost {
            host: host.to_string(),
        })?;
    let content = fetch(id, resolver)?;
    Ok((content.certificate, id.clone()))
}

/// Certificates for one pass, plus the secrets that could not be used.
#[derive(Debug)]
pub struct ResolvedCertificates<'m> {
    hosts: &'m HostToSecretMap,
    certificates: CertificateSet,
    failures: BTreeMap<SecretIdentifier, CertificateError>,
}

impl<'m> ResolvedCertificates<'m> {
    /// Certificate a listener for `host` would use.
    pub fn for_host(&self, host: &str) -> Result<&SslCertificateConfig, CertificateError> {
        let id = self
            .hosts
            .identifier_for(host)
            .ok_or_else(|| CertificateError::NoSecretForHost {
                host: host.to_string(),
            })?;

        match self.certificates.get(id) {
            Some(cert) => Ok(cert),
            None => Err(self.failures.get(id).cloned().unwrap_or_else(|| {
                CertificateError::NoSecretForHost {
                    host: host.to_string(),
                }
            })),
        }
    }

    pub fn certificates(&self) -> &CertificateSet {
        &self.certificates
    }

    pub fn failures(&self) -> &BTreeMap<SecretIdentifier, CertificateError> {
        &self.failures
    }

    pub fn into_certificates(self) -> CertificateSet {
        self.certificates
    }
}

/// Resolves every distinct secret in `hosts` exactly once.
///
/// Missing or malformed secrets are recorded in `report` and remembered so
/// the listener stage can drop the affected hosts. An unreachable store
/// aborts the pass.
pub fn synthesize_all<'m>(
    hosts: &'m HostToSecretMap,
    resolver: &dyn SecretResolver,
    report: &mut SynthesisReport,
) -> Result<ResolvedCertificates<'m>, SynthError> {
    let mut certificates = CertificateSet::new();
    let mut failures = BTreeMap::new();

    for id in hosts.identifiers() {
        match fetch(id, resolver) {
            Ok(content) => {
                certificates.insert(id.clone(), encode(id, &content));
            }
            Err(err) => {
                match &err {
                    CertificateError::SecretNotFound { secret } => report.secret_not_found(secret),
                    CertificateError::MalformedSecretContent { secret, reason } => {
                        report.malformed_secret(secret, reason)
                    }
                    CertificateError::SecretStoreUnavailable { secret, reason } => {
                        return Err(SynthError::SecretStoreUnavailable {
                            secret: secret.clone(),
                            reason: reason.clone(),
                        });
                    }
                    CertificateError::NoSecretForHost { .. } => {}
                }
                failures.insert(id.clone(), err);
            }
        }
    }

    tracing::debug!(
        resolved = certificates.len(),
        failed = failures.len(),
        "synthesized certificates"
    );

    Ok(ResolvedCertificates {
        hosts,
        certificates,
        failures,
    })
}

fn fetch(
    id: &SecretIdentifier,
    resolver: &dyn SecretResolver,
) -> Result<SecretContent, CertificateError> {
    let content = resolver.lookup(id).map_err(|err| match err {
        LookupError::NotFound(secret) => CertificateError::SecretNotFound { secret },
        LookupError::Malformed { secret, reason } => {
            CertificateError::MalformedSecretContent { secret, reason }
        }
        LookupError::Unavailable { reason } => CertificateError::SecretStoreUnavailable {
            secret: id.clone(),
            reason,
        },
    })?;

    check_content(&content).map_err(|reason| CertificateError::MalformedSecretContent {
        secret: id.clone(),
        reason: reason.to_string(),
    })?;
    Ok(content)
}

fn check_content(content: &SecretContent) -> Result<(), &'static str> {
    if content.certificate.is_empty() {
        return Err("certificate is empty");
    }
    if content.key.is_empty() {
        return Err("private key is empty");
    }
    if content.certificate.starts_with(PEM_BEGIN)
        && !content
            .certificate
            .windows(PEM_END.len())
            .any(|w| w == PEM_END)
    {
        return Err("certificate PEM block is truncated");
    }
    Ok(())
}

fn encode(id: &SecretIdentifier, content: &SecretContent) -> SslCertificateConfig {
    SslCertificateConfig {
        name: certificate_name(id),
        data: general_purpose::STANDARD.encode(&content.certificate),
        key_data: general_purpose::STANDARD.encode(&content.key),
        source: id.clone(),
    }
}
