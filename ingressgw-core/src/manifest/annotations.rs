use crate::model::{ExternalRedirect, IngressIntent, RedirectKind};
use std::collections::BTreeMap;
use thiserror::Error;

pub mod keys {
    pub const SSL_REDIRECT: &str = "ingressgw.io/ssl-redirect";
    pub const REDIRECT_KIND: &str = "ingressgw.io/redirect-kind";
    pub const FRONTEND_PORTS: &str = "ingressgw.io/frontend-ports";
    pub const REDIRECT_URL: &str = "ingressgw.io/redirect-url";
    pub const REDIRECT_INCLUDE_PATH: &str = "ingressgw.io/redirect-include-path";
    pub const REDIRECT_INCLUDE_QUERY: &str = "ingressgw.io/redirect-include-query";
    pub const INGRESS_CLASS: &str = "kubernetes.io/ingress.class";
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnnotationError {
    #[error("annotation '{key}' expects true or false, got '{value}'")]
    InvalidBool { key: &'static str, value: String },

    #[error("annotation '{key}' has invalid port '{value}'")]
    InvalidPort { key: &'static str, value: String },

    #[error("annotation '{key}': {reason}")]
    InvalidRedirectKind { key: &'static str, reason: String },

    #[error("annotation '{key}' must be an absolute http(s) URL, got '{value}'")]
    InvalidUrl { key: &'static str, value: String },
}

/// Decodes the typed intent of a resource. Values that fail to parse are
/// returned as errors and otherwise treated as absent.
pub fn decode_intent(
    annotations: &BTreeMap<String, String>,
) -> (IngressIntent, Vec<AnnotationError>) {
    let mut errors = Vec::new();
    let mut intent = IngressIntent::default();

    if let Some(v) = flag(annotations, keys::SSL_REDIRECT, &mut errors) {
        intent.ssl_redirect = v;
    }

    let redirect_kind = annotations.get(keys::REDIRECT_KIND).and_then(|raw| {
        raw.parse::<RedirectKind>()
            .map_err(|reason| {
                errors.push(AnnotationError::InvalidRedirectKind {
                    key: keys::REDIRECT_KIND,
                    reason,
                })
            })
            .ok()
    });
    if let Some(kind) = redirect_kind {
        intent.redirect_kind = kind;
    }

    if let Some(raw) = annotations.get(keys::FRONTEND_PORTS) {
        for part in raw.split(',').map(str::trim).filter(|p| !p.is_empty()) {
            match part.parse::<u16>() {
                Ok(port) if port != 0 => intent.frontend_ports.push(port),
                _ => errors.push(AnnotationError::InvalidPort {
                    key: keys::FRONTEND_PORTS,
                    value: part.to_string(),
                }),
            }
        }
        intent.frontend_ports.sort_unstable();
        intent.frontend_ports.dedup();
    }

    if let Some(url) = annotations.get(keys::REDIRECT_URL).map(|u| u.trim()) {
        if url.starts_with("http://") || url.starts_with("https://") {
            intent.external_redirect = Some(ExternalRedirect {
                url: url.to_string(),
                kind: redirect_kind.unwrap_or(RedirectKind::Found),
                include_path: flag(annotations, keys::REDIRECT_INCLUDE_PATH, &mut errors)
                    .unwrap_or(false),
                include_query_string: flag(annotations, keys::REDIRECT_INCLUDE_QUERY, &mut errors)
                    .unwrap_or(false),
            });
        } else {
            errors.push(AnnotationError::InvalidUrl {
                key: keys::REDIRECT_URL,
                value: url.to_string(),
            });
        }
    }

    (intent, errors)
}

fn flag(
    annotations: &BTreeMap<String, String>,
    key: &'static str,
    errors: &mut Vec<AnnotationError>,
) -> Option<bool> {
    let raw = annotations.get(key)?;
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" => Some(true),
        "false" => Some(false),
        _ => {
            errors.push(AnnotationError::InvalidBool {
                key,
                value: raw.clone(),
            });
            None
        }
    }
}
