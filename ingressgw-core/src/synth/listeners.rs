use crate::graph::{Listener, ListenerKey, ListenerSet, PortSet, Protocol};
use crate::model::{IngressResource, canonical_order};
use crate::synth::SynthOptions;
use crate::synth::bindings::implied_bindings;
use crate::synth::certificates::ResolvedCertificates;
use crate::synth::naming::{listener_name, port_name};
use crate::synth::report::SynthesisReport;
use std::collections::BTreeMap;
use std::collections::btree_map::Entry;

/// Builds one listener per (port, host) implied by `resources`.
///
/// TLS bindings whose certificate could not be resolved are left out. The
/// omission is reported only when no other binding claims the same key.
/// When resources disagree on the protocol of a shared key, the HTTPS
/// listener is kept.
pub fn build(
    resources: &[IngressResource],
    certificates: &ResolvedCertificates<'_>,
    ports: &PortSet,
    options: &SynthOptions,
    report: &mut SynthesisReport,
) -> ListenerSet {
    let mut listeners = ListenerSet::new();
    let mut omitted: BTreeMap<ListenerKey, String> = BTreeMap::new();

    for resource in canonical_order(resources) {
        for binding in implied_bindings(resource, options) {
            let key = ListenerKey::new(binding.port, binding.host.clone());
            let frontend_port = ports
                .get(&binding.port)
                .map(|p| p.name.clone())
                .unwrap_or_else(|| port_name(binding.port));

            let certificate = if binding.tls {
                match certificates.for_host(&binding.host) {
                    Ok(cert) => Some(cert.name.clone()),
                    Err(err) => {
                        omitted.entry(key).or_insert_with(|| err.to_string());
                        continue;
                    }
                }
            } else {
                None
            };

            let candidate = Listener {
                name: listener_name(binding.port, &binding.host),
                frontend_port,
                port: binding.port,
                catch_all: binding.host.is_empty(),
                host_name: binding.host,
                protocol: if certificate.is_some() {
                    Protocol::Https
                } else {
                    Protocol::Http
                },
                certificate,
            };

            match listeners.entry(key) {
                Entry::Vacant(slot) => {
                    slot.insert(candidate);
                }
                Entry::Occupied(mut slot) => {
                    if slot.get().protocol == Protocol::Http && candidate.protocol == Protocol::Https {
                        slot.insert(candidate);
                    }
                }
            }
        }
    }

    omitted.retain(|key, _| !listeners.contains_key(key));
    for (key, cause) in omitted.iter() {
        report.listener_omitted(&key.host, key.port, cause.clone());
    }

    tracing::debug!(
        listeners = listeners.len(),
        omitted = omitted.len(),
        "synthesized listeners"
    );
    listeners
}
