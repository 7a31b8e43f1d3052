use crate::graph::{
    ListenerKey, ListenerSet, Protocol, RedirectConfiguration, RedirectSet, RedirectTarget,
};
use crate::model::{IngressResource, canonical_order};
use crate::synth::SynthOptions;
use crate::synth::bindings::{implied_bindings, tls_covered_hosts};
use crate::synth::naming::{external_redirect_name, ssl_redirect_name};
use crate::synth::report::SynthesisReport;
use std::collections::btree_map::Entry;

/// Derives redirects from explicit resource intent, against the listeners
/// already built for this pass. A redirect never names a listener that is
/// missing from `listeners`.
pub fn build(
    resources: &[IngressResource],
    listeners: &ListenerSet,
    options: &SynthOptions,
    report: &mut SynthesisReport,
) -> RedirectSet {
    let mut redirects = RedirectSet::new();

    for resource in canonical_order(resources) {
        if resource.intent.ssl_redirect {
            for host in tls_covered_hosts(resource) {
                let Some(source) = listeners.get(&ListenerKey::new(options.http_port, host.clone()))
                else {
                    continue;
                };
                if source.protocol != Protocol::Http {
                    continue;
                }

                let Some(target) = listeners
                    .get(&ListenerKey::new(options.https_port, host.clone()))
                    .filter(|l| l.protocol == Protocol::Https)
                else {
                    report.unresolved_redirect_target(&source.name, &host, options.https_port);
                    continue;
                };

                insert(
                    &mut redirects,
                    source.key(),
                    RedirectConfiguration {
                        name: ssl_redirect_name(&source.name),
                        source_listener: source.name.clone(),
                        target: RedirectTarget::Listener(target.name.clone()),
                        kind: resource.intent.redirect_kind,
                        include_path: true,
                        include_query_string: true,
                    },
                    resource,
                    report,
                );
            }
        }

        if let Some(external) = &resource.intent.external_redirect {
            for binding in implied_bindings(resource, options) {
                let Some(source) = listeners.get(&ListenerKey::new(binding.port, binding.host))
                else {
                    continue;
                };
                insert(
                    &mut redirects,
                    source.key(),
                    RedirectConfiguration {
                        name: external_redirect_name(&source.name),
                        source_listener: source.name.clone(),
                        target: RedirectTarget::Url(external.url.clone()),
                        kind: external.kind,
                        include_path: external.include_path,
                        include_query_string: external.include_query_string,
                    },
                    resource,
                    report,
                );
            }
        }
    }

    tracing::debug!(redirects = redirects.len(), "synthesized redirects");
    redirects
}

/// First claim on a source listener wins.
fn insert(
    redirects: &mut RedirectSet,
    source: ListenerKey,
    redirect: RedirectConfiguration,
    resource: &IngressResource,
    report: &mut SynthesisReport,
) {
    match redirects.entry(source) {
        Entry::Vacant(slot) => {
            slot.insert(redirect);
        }
        Entry::Occupied(slot) => {
            if slot.get() != &redirect {
                report.conflicting_redirect(&redirect.source_listener, &resource.key());
            }
        }
    }
}
