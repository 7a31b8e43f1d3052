use crate::graph::ConfigurationGraph;
use crate::model::IngressResource;
use crate::secrets::SecretResolver;
use crate::synth::error::SynthError;
use crate::synth::host_secrets::HostToSecretMap;
use crate::synth::report::SynthesisReport;
use crate::synth::{SynthOptions, certificates, listeners, ports, redirects};

/// Result of a successful pass: the graph and everything that was dropped
/// on the way.
#[derive(Debug, Clone)]
pub struct Synthesis {
    pub graph: ConfigurationGraph,
    pub report: SynthesisReport,
}

/// Turns an ingress snapshot into a gateway configuration graph.
///
/// Holds no state between passes: every call rebuilds the host map,
/// re-reads every secret and assembles a new graph.
pub struct ConfigBuilder<'r> {
    resolver: &'r dyn SecretResolver,
    options: SynthOptions,
}

impl<'r> ConfigBuilder<'r> {
    pub fn new(resolver: &'r dyn SecretResolver, options: SynthOptions) -> Self {
        Self { resolver, options }
    }

    pub fn options(&self) -> &SynthOptions {
        &self.options
    }

    /// Stages run in dependency order: host map, certificates, ports,
    /// listeners, redirects.
    pub fn build(&self, resources: &[IngressResource]) -> Result<Synthesis, SynthError> {
        let mut report = SynthesisReport::default();

        if resources.is_empty() {
            tracing::info!("no ingress resources; producing empty configuration");
            return Ok(Synthesis {
                graph: ConfigurationGraph::default(),
                report,
            });
        }

        let hosts = HostToSecretMap::build(resources);
        if self.options.warn_on_host_conflict {
            for conflict in hosts.conflicts() {
                report.host_secret_conflict(&conflict.host, &conflict.previous, &conflict.current);
            }
        }

        let resolved = certificates::synthesize_all(&hosts, self.resolver, &mut report)?;
        let ports = ports::build(resources, &self.options);
        let listeners =
            listeners::build(resources, &resolved, &ports, &self.options, &mut report);
        let redirects = redirects::build(resources, &listeners, &self.options, &mut report);

        let graph = ConfigurationGraph {
            certificates: resolved.into_certificates(),
            ports,
            listeners,
            redirects,
        };

        tracing::info!(
            resources = resources.len(),
            certificates = graph.certificates.len(),
            ports = graph.ports.len(),
            listeners = graph.listeners.len(),
            redirects = graph.redirects.len(),
            warnings = report.len(),
            "synthesized gateway configuration"
        );

        Ok(Synthesis { graph, report })
    }
}
