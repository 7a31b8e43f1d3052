use crate::model::SecretIdentifier;
use owo_colors::OwoColorize;
use serde::Serialize;
use std::fmt::{self, Write};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    HostSecrets,
    Certificates,
    Ports,
    Listeners,
    Redirects,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Stage::HostSecrets => "host-secrets",
            Stage::Certificates => "certificates",
            Stage::Ports => "ports",
            Stage::Listeners => "listeners",
            Stage::Redirects => "redirects",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Severity {
    Error,
    Warning,
}

#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum WarningReason {
    #[error("host '{host}' moved from secret '{previous}' to '{current}'")]
    HostSecretConflict {
        host: String,
        previous: SecretIdentifier,
        current: SecretIdentifier,
    },

    #[error("secret '{secret}' not found")]
    SecretNotFound { secret: SecretIdentifier },

    #[error("secret '{secret}' is malformed: {reason}")]
    MalformedSecretContent {
        secret: SecretIdentifier,
        reason: String,
    },

    #[error("listener for host '{host}' on port {port} omitted: {cause}")]
    ListenerOmitted {
        host: String,
        port: u16,
        cause: String,
    },

    #[error(
        "redirect from '{source_listener}' dropped: no listener for host '{host}' on port {port}"
    )]
    UnresolvedRedirectTarget {
        source_listener: String,
        host: String,
        port: u16,
    },

    #[error("redirect from '{source_listener}' requested by '{resource}' conflicts with an earlier one")]
    ConflictingRedirect {
        source_listener: String,
        resource: String,
    },
}

impl WarningReason {
    pub fn severity(&self) -> Severity {
        match self {
            WarningReason::MalformedSecretContent { .. } => Severity::Error,
            _ => Severity::Warning,
        }
    }
}

/// One non-fatal problem found during a pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SynthesisWarning {
    pub stage: Stage,
    /// Host, listener, secret or resource the warning is about.
    pub subject: String,
    pub reason: WarningReason,
}

impl SynthesisWarning {
    pub fn severity(&self) -> Severity {
        self.reason.severity()
    }
}

impl fmt::Display for SynthesisWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}: {}", self.stage, self.subject, self.reason)
    }
}

/// Ordered warnings collected across all stages of a pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SynthesisReport {
    pub warnings: Vec<SynthesisWarning>,
}

impl SynthesisReport {
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    pub fn len(&self) -> usize {
        self.warnings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.warnings.is_empty()
    }

    pub fn for_stage(&self, stage: Stage) -> impl Iterator<Item = &SynthesisWarning> {
        self.warnings.iter().filter(move |w| w.stage == stage)
    }

    pub(crate) fn push(&mut self, stage: Stage, subject: impl Into<String>, reason: WarningReason) {
        let warning = SynthesisWarning {
            stage,
            subject: subject.into(),
            reason,
        };
        match warning.severity() {
            Severity::Error => tracing::error!(%stage, subject = %warning.subject, "{}", warning.reason),
            Severity::Warning => tracing::warn!(%stage, subject = %warning.subject, "{}", warning.reason),
        }
        self.warnings.push(warning);
    }

    pub fn render_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&self.warnings)
    }

    pub fn render_plain(&self) -> String {
        let mut out = String::new();
        for warning in &self.warnings {
            let severity = match warning.severity() {
                Severity::Error => "error",
                Severity::Warning => "warning",
            };
            let _ = writeln!(
                out,
                "{}:{}: {}: {}",
                warning.stage, severity, warning.subject, warning.reason
            );
        }
        out
    }

    pub fn render_pretty(&self) -> String {
        let mut out = String::new();
        if self.warnings.is_empty() {
            return out;
        }

        let errors = self
            .warnings
            .iter()
            .filter(|w| w.severity() == Severity::Error)
            .count();
        let _ = writeln!(
            out,
            "synthesis finished with {} warnings ({} errors)\n",
            self.warnings.len(),
            errors
        );

        let mut by_stage = std::collections::BTreeMap::new();
        for warning in &self.warnings {
            by_stage
                .entry(warning.stage)
                .or_insert(Vec::new())
                .push(warning);
        }

        for (stage, warnings) in by_stage {
            let _ = writeln!(out, "{}", stage.bold());
            for warning in warnings {
                match warning.severity() {
                    Severity::Error => {
                        let _ = writeln!(
                            out,
                            "  {}: {}: {}",
                            "error".red().bold(),
                            warning.subject,
                            warning.reason
                        );
                    }
                    Severity::Warning => {
                        let _ = writeln!(
                            out,
                            "  {}: {}: {}",
                            "warning".yellow().bold(),
                            warning.subject,
                            warning.reason
                        );
                    }
                }
            }
            out.push('\n');
        }
        out
    }
}

/// Per-stage helpers.
impl SynthesisReport {
    pub(crate) fn host_secret_conflict(
        &mut self,
        host: &str,
        previous: &SecretIdentifier,
        current: &SecretIdentifier,
    ) {
        self.push(
            Stage::HostSecrets,
            display_host(host),
            WarningReason::HostSecretConflict {
                host: host.to_string(),
                previous: previous.clone(),
                current: current.clone(),
            },
        );
    }

    pub(crate) fn secret_not_found(&mut self, secret: &SecretIdentifier) {
        self.push(
            Stage::Certificates,
            secret.to_string(),
            WarningReason::SecretNotFound {
                secret: secret.clone(),
            },
        );
    }

    pub(crate) fn malformed_secret(&mut self, secret: &SecretIdentifier, reason: &str) {
        self.push(
            Stage::Certificates,
            secret.to_string(),
            WarningReason::MalformedSecretContent {
                secret: secret.clone(),
                reason: reason.to_string(),
            },
        );
    }

    pub(crate) fn listener_omitted(&mut self, host: &str, port: u16, cause: String) {
        self.push(
            Stage::Listeners,
            display_host(host),
            WarningReason::ListenerOmitted {
                host: host.to_string(),
                port,
                cause,
            },
        );
    }

    pub(crate) fn unresolved_redirect_target(&mut self, source_listener: &str, host: &str, port: u16) {
        self.push(
            Stage::Redirects,
            source_listener,
            WarningReason::UnresolvedRedirectTarget {
                source_listener: source_listener.to_string(),
                host: host.to_string(),
                port,
            },
        );
    }

    pub(crate) fn conflicting_redirect(&mut self, source_listener: &str, resource: &str) {
        self.push(
            Stage::Redirects,
            source_listener,
            WarningReason::ConflictingRedirect {
                source_listener: source_listener.to_string(),
                resource: resource.to_string(),
            },
        );
    }
}

fn display_host(host: &str) -> String {
    if host.is_empty() {
        "<default>".to_string()
    } else {
        host.to_string()
    }
}
