use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Protocol {
    Http,
    Https,
}

impl fmt::Display for Protocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Protocol::Http => f.write_str("HTTP"),
            Protocol::Https => f.write_str("HTTPS"),
        }
    }
}

/// Identity of a listener: one per (port, host) pair.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ListenerKey {
    pub port: u16,
    pub host: String,
}

impl ListenerKey {
    pub fn new(port: u16, host: impl Into<String>) -> Self {
        Self {
            port,
            host: host.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Listener {
    pub name: String,

    /// Name of the frontend port this listener binds.
    pub frontend_port: String,

    pub port: u16,

    /// Empty for the catch-all listener of a port.
    pub host_name: String,

    pub protocol: Protocol,

    /// Name of the certificate; set iff the protocol is HTTPS.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub certificate: Option<String>,

    pub catch_all: bool,
}

impl Listener {
    pub fn key(&self) -> ListenerKey {
        ListenerKey::new(self.port, self.host_name.clone())
    }
}
