use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Typed routing intent decoded from ingress annotations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct IngressIntent {
    /// Redirect plain HTTP traffic for TLS hosts to their HTTPS listener.
    pub ssl_redirect: bool,

    /// Status used for the HTTP to HTTPS redirect.
    pub redirect_kind: RedirectKind,

    /// Extra frontend ports the resource's hosts listen on.
    pub frontend_ports: Vec<u16>,

    /// Send every request for the resource's hosts to an external URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_redirect: Option<ExternalRedirect>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ExternalRedirect {
    pub url: String,
    pub kind: RedirectKind,
    pub include_path: bool,
    pub include_query_string: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize, Serialize)]
pub enum RedirectKind {
    #[default]
    Permanent,
    Found,
    SeeOther,
    Temporary,
}

impl RedirectKind {
    pub fn status_code(self) -> u16 {
        match self {
            RedirectKind::Permanent => 301,
            RedirectKind::Found => 302,
            RedirectKind::SeeOther => 303,
            RedirectKind::Temporary => 307,
        }
    }
}

impl fmt::Display for RedirectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            RedirectKind::Permanent => "Permanent",
            RedirectKind::Found => "Found",
            RedirectKind::SeeOther => "SeeOther",
            RedirectKind::Temporary => "Temporary",
        };
        f.write_str(s)
    }
}

impl FromStr for RedirectKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "permanent" | "301" => Ok(Self::Permanent),
            "found" | "302" => Ok(Self::Found),
            "seeother" | "see-other" | "303" => Ok(Self::SeeOther),
            "temporary" | "307" => Ok(Self::Temporary),
            other => Err(format!("unknown redirect kind: {other}")),
        }
    }
}
