use serde::{Deserialize, Serialize};

/// Top-level `ingressgw.hcl` file.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct EntrypointSpec {
    #[serde(default)]
    pub synthesizer: SynthesizerSpec,
    #[serde(default)]
    pub include: IncludeSpec,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct SynthesizerSpec {
    /// Port of plain HTTP listeners.
    pub http_port: u16,

    /// Port of TLS-terminating listeners.
    pub https_port: u16,

    /// Only ingresses of this class are synthesized.
    pub ingress_class: String,

    pub warn_on_host_conflict: bool,
}

impl Default for SynthesizerSpec {
    fn default() -> Self {
        Self {
            http_port: 80,
            https_port: 443,
            ingress_class: "ingressgw".to_string(),
            warn_on_host_conflict: true,
        }
    }
}

/// Where inputs live, relative to the config directory.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct IncludeSpec {
    /// Glob matching Ingress manifests.
    pub ingress: String,

    /// Directory holding `<namespace>/<name>.yaml` Secret manifests.
    pub secrets: String,
}

impl Default for IncludeSpec {
    fn default() -> Self {
        Self {
            ingress: "ingress.d/*.yaml".to_string(),
            secrets: "secrets".to_string(),
        }
    }
}
