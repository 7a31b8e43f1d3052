//! (host, port) pairs a resource asks the gateway to listen on. Shared by the
//! port, listener and redirect stages so they agree on what a resource means.

use crate::model::IngressResource;
use crate::synth::SynthOptions;
use crate::synth::host_secrets::DEFAULT_HOST;
use std::collections::{BTreeMap, BTreeSet};

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Binding {
    pub host: String,
    pub port: u16,
    /// The listener must terminate TLS.
    pub tls: bool,
}

/// Hosts of `resource` that one of its own TLS blocks covers.
pub(crate) fn tls_covered_hosts(resource: &IngressResource) -> BTreeSet<String> {
    let default_tls = resource.has_default_tls();
    let explicit = explicit_tls_hosts(resource);
    implied_hosts(resource)
        .into_iter()
        .filter(|host| default_tls || explicit.contains(host.as_str()))
        .collect()
}

pub(crate) fn implied_bindings(resource: &IngressResource, options: &SynthOptions) -> Vec<Binding> {
    let covered = tls_covered_hosts(resource);
    let custom_ports: BTreeSet<u16> = resource
        .intent
        .frontend_ports
        .iter()
        .copied()
        .filter(|p| *p != options.http_port && *p != options.https_port)
        .collect();

    let mut bindings: BTreeMap<(u16, String), bool> = BTreeMap::new();
    for host in implied_hosts(resource) {
        let tls = covered.contains(&host);
        if tls {
            bindings.insert((options.https_port, host.clone()), true);
            if resource.intent.ssl_redirect {
                bindings.insert((options.http_port, host.clone()), false);
            }
        } else {
            bindings.insert((options.http_port, host.clone()), false);
        }
        for port in &custom_ports {
            bindings.insert((*port, host.clone()), tls);
        }
    }

    bindings
        .into_iter()
        .map(|((port, host), tls)| Binding { host, port, tls })
        .collect()
}

fn implied_hosts(resource: &IngressResource) -> BTreeSet<String> {
    let mut hosts: BTreeSet<String> = resource
        .rule_hosts()
        .into_iter()
        .map(str::to_string)
        .collect();
    for block in &resource.tls {
        if block.hosts.is_empty() {
            hosts.insert(DEFAULT_HOST.to_string());
        } else {
            hosts.extend(block.hosts.iter().cloned());
        }
    }
    hosts
}

fn explicit_tls_hosts(resource: &IngressResource) -> BTreeSet<&str> {
    resource
        .tls
        .iter()
        .flat_map(|block| block.hosts.iter().map(String::as_str))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{IngressIntent, IngressRule, TlsBlock};
    use pretty_assertions::assert_eq;

    fn binding(host: &str, port: u16, tls: bool) -> Binding {
        Binding {
            host: host.to_string(),
            port,
            tls,
        }
    }

    fn rule(host: &str) -> IngressRule {
        IngressRule {
            host: host.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn plain_rule_binds_http_port() {
        // Arrange
        let resource = IngressResource {
            rules: vec![rule("a.com")],
            ..Default::default()
        };

        // Act
        let bindings = implied_bindings(&resource, &SynthOptions::default());

        // Assert
        assert_eq!(bindings, vec![binding("a.com", 80, false)]);
    }

    #[test]
    fn tls_host_binds_https_and_redirect_source() {
        // Arrange
        let resource = IngressResource {
            rules: vec![rule("a.com"), rule("b.com")],
            tls: vec![TlsBlock {
                hosts: vec!["a.com".to_string()],
                secret_name: "a-tls".to_string(),
            }],
            intent: IngressIntent {
                ssl_redirect: true,
                ..Default::default()
            },
            ..Default::default()
        };

        // Act
        let bindings = implied_bindings(&resource, &SynthOptions::default());

        // Assert
        assert_eq!(
            bindings,
            vec![
                binding("a.com", 80, false),
                binding("b.com", 80, false),
                binding("a.com", 443, true),
            ]
        );
    }

    #[test]
    fn default_tls_block_covers_every_host() {
        // Arrange
        let resource = IngressResource {
            rules: vec![rule("a.com")],
            tls: vec![TlsBlock {
                hosts: vec![],
                secret_name: "default-tls".to_string(),
            }],
            ..Default::default()
        };

        // Act
        let covered = tls_covered_hosts(&resource);

        // Assert
        assert_eq!(
            covered.into_iter().collect::<Vec<_>>(),
            vec!["".to_string(), "a.com".to_string()]
        );
    }

    #[test]
    fn custom_ports_follow_host_protocol() {
        // Arrange
        let resource = IngressResource {
            rules: vec![rule("a.com"), rule("b.com")],
            tls: vec![TlsBlock {
                hosts: vec!["b.com".to_string()],
                secret_name: "b-tls".to_string(),
            }],
            intent: IngressIntent {
                frontend_ports: vec![8443, 80, 8443],
                ..Default::default()
            },
            ..Default::default()
        };

        // Act
        let bindings = implied_bindings(&resource, &SynthOptions::default());

        // Assert
        assert_eq!(
            bindings,
            vec![
                binding("a.com", 80, false),
                binding("b.com", 443, true),
                binding("a.com", 8443, false),
                binding("b.com", 8443, true),
            ]
        );
    }
}
