mod certificate;
mod listener;
mod port;
mod redirect;

pub use certificate::SslCertificateConfig;
pub use listener::{Listener, ListenerKey, Protocol};
pub use port::FrontendPort;
pub use redirect::{RedirectConfiguration, RedirectTarget};

use crate::model::SecretIdentifier;
use serde::{Serialize, Serializer};
use std::collections::BTreeMap;

pub type CertificateSet = BTreeMap<SecretIdentifier, SslCertificateConfig>;
pub type PortSet = BTreeMap<u16, FrontendPort>;
pub type ListenerSet = BTreeMap<ListenerKey, Listener>;
/// Keyed by the source listener; at most one redirect per listener.
pub type RedirectSet = BTreeMap<ListenerKey, RedirectConfiguration>;

/// The complete output of one synthesis pass.
///
/// Every collection is keyed by the natural identity of its elements, so
/// iteration (and serialization) order only depends on content.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ConfigurationGraph {
    #[serde(serialize_with = "values")]
    pub certificates: CertificateSet,

    #[serde(serialize_with = "values")]
    pub ports: PortSet,

    #[serde(serialize_with = "values")]
    pub listeners: ListenerSet,

    #[serde(serialize_with = "values")]
    pub redirects: RedirectSet,
}

impl ConfigurationGraph {
    pub fn is_empty(&self) -> bool {
        self.certificates.is_empty()
            && self.ports.is_empty()
            && self.listeners.is_empty()
            && self.redirects.is_empty()
    }

    pub fn listener(&self, port: u16, host: &str) -> Option<&Listener> {
        self.listeners.get(&ListenerKey::new(port, host))
    }

    /// Redirect attached to the listener on (`port`, `host`).
    pub fn redirect_from(&self, port: u16, host: &str) -> Option<&RedirectConfiguration> {
        self.redirects.get(&ListenerKey::new(port, host))
    }

    pub fn listener_named(&self, name: &str) -> Option<&Listener> {
        self.listeners.values().find(|l| l.name == name)
    }

    pub fn certificate_named(&self, name: &str) -> Option<&SslCertificateConfig> {
        self.certificates.values().find(|c| c.name == name)
    }
}

fn values<K, V, S>(map: &BTreeMap<K, V>, serializer: S) -> Result<S::Ok, S::Error>
where
    V: Serialize,
    S: Serializer,
{
    serializer.collect_seq(map.values())
}
