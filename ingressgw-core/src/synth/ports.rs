use crate::graph::{FrontendPort, PortSet};
use crate::model::{IngressResource, canonical_order};
use crate::synth::SynthOptions;
use crate::synth::bindings::implied_bindings;
use crate::synth::naming::port_name;

/// Distinct frontend ports needed by `resources`.
///
/// The HTTP port is present when some binding listens on it, the HTTPS port
/// whenever any TLS block exists, and every custom port requested by intent.
pub fn build(resources: &[IngressResource], options: &SynthOptions) -> PortSet {
    let mut ports = PortSet::new();

    for resource in canonical_order(resources) {
        if !resource.tls.is_empty() {
            insert(&mut ports, options.https_port);
        }
        for binding in implied_bindings(resource, options) {
            insert(&mut ports, binding.port);
        }
    }

    tracing::debug!(ports = ports.len(), "synthesized frontend ports");
    ports
}

fn insert(ports: &mut PortSet, port: u16) {
    ports.entry(port).or_insert_with(|| FrontendPort {
        name: port_name(port),
        port,
    });
}
