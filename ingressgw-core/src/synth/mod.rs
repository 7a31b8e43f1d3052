mod bindings;
mod builder;
pub mod certificates;
mod error;
pub mod host_secrets;
pub mod listeners;
mod naming;
pub mod ports;
pub mod redirects;
mod report;

#[cfg(test)]
mod tests;

pub use builder::{ConfigBuilder, Synthesis};
pub use certificates::ResolvedCertificates;
pub use error::{CertificateError, SynthError};
pub use host_secrets::{HostConflict, HostToSecretMap};
pub use report::{Severity, Stage, SynthesisReport, SynthesisWarning, WarningReason};

use serde::Serialize;

/// Knobs for a synthesis pass.
#[derive(Debug, Clone, Serialize)]
pub struct SynthOptions {
    pub http_port: u16,
    pub https_port: u16,
    /// Record a warning when two TLS blocks map one host to different secrets.
    pub warn_on_host_conflict: bool,
}

impl Default for SynthOptions {
    fn default() -> Self {
        Self {
            http_port: 80,
            https_port: 443,
            warn_on_host_conflict: true,
        }
    }
}
