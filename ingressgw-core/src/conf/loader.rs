use crate::conf::discover::discover;
use crate::conf::env::{env_or, env_parse};
use crate::conf::error::ConfigError;
use crate::conf::parse::parse_ingress_manifests;
use crate::conf::settings::EntrypointSpec;
use crate::conf::validate::validate_synthesizer;
use crate::manifest::{into_resource, is_managed};
use crate::model::IngressResource;
use crate::secrets::ManifestSecretStore;
use crate::synth::SynthOptions;
use std::fs;
use std::path::{Path, PathBuf};

pub const ENTRYPOINT_FILE: &str = "ingressgw.hcl";

const ENV_HTTP_PORT: &str = "INGRESSGW_HTTP_PORT";
const ENV_HTTPS_PORT: &str = "INGRESSGW_HTTPS_PORT";
const ENV_INGRESS_CLASS: &str = "INGRESSGW_INGRESS_CLASS";

/// Settings plus the ingress snapshot for one pass.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub root: PathBuf,
    pub entrypoint: EntrypointSpec,
    pub resources: Vec<IngressResource>,
    /// Ingresses left out: another class, or no name.
    pub skipped: usize,
}

impl LoadedConfig {
    pub fn options(&self) -> SynthOptions {
        let s = &self.entrypoint.synthesizer;
        SynthOptions {
            http_port: s.http_port,
            https_port: s.https_port,
            warn_on_host_conflict: s.warn_on_host_conflict,
        }
    }

    pub fn secret_store(&self) -> ManifestSecretStore {
        ManifestSecretStore::new(self.root.join(&self.entrypoint.include.secrets))
    }
}

pub fn load_config(root: &Path) -> Result<LoadedConfig, ConfigError> {
    let entrypoint = load_entrypoint(root)?;

    //--------------------------------------------------------------------------
    // Discover and parse ingress manifests (hard fail)
    //--------------------------------------------------------------------------
    let files = discover(root, &entrypoint.include.ingress)?;
    let mut ingresses = Vec::new();
    for path in &files {
        ingresses.extend(parse_ingress_manifests(path)?);
    }

    //--------------------------------------------------------------------------
    // Keep our class only
    //--------------------------------------------------------------------------
    let class = &entrypoint.synthesizer.ingress_class;
    let total = ingresses.len();
    let resources: Vec<IngressResource> = ingresses
        .iter()
        .filter(|ingress| is_managed(ingress, class))
        .filter_map(into_resource)
        .collect();
    let skipped = total - resources.len();

    tracing::info!(
        files = files.len(),
        resources = resources.len(),
        skipped,
        %class,
        "loaded ingress snapshot"
    );

    Ok(LoadedConfig {
        root: root.to_path_buf(),
        entrypoint,
        resources,
        skipped,
    })
}

/// Reads `ingressgw.hcl`, applies environment overrides and validates.
pub fn load_entrypoint(root: &Path) -> Result<EntrypointSpec, ConfigError> {
    let path = root.join(ENTRYPOINT_FILE);
    let raw = fs::read_to_string(&path).map_err(|e| ConfigError::read_file(&path, e))?;
    let mut entrypoint: EntrypointSpec =
        hcl::from_str(&raw).map_err(|e| ConfigError::ParseEntrypoint {
            path: path.clone(),
            source: e,
        })?;

    apply_env_overrides(&mut entrypoint);
    validate_synthesizer(&entrypoint.synthesizer, &entrypoint.include)?;

    Ok(entrypoint)
}

fn apply_env_overrides(entrypoint: &mut EntrypointSpec) {
    let s = &mut entrypoint.synthesizer;
    s.http_port = env_parse(ENV_HTTP_PORT, s.http_port);
    s.https_port = env_parse(ENV_HTTPS_PORT, s.https_port);

    let class_name = |v: &str| {
        !v.is_empty()
            && v
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '.' | '/'))
    };
    s.ingress_class = env_or(ENV_INGRESS_CLASS, &s.ingress_class, Some(&class_name));
}
