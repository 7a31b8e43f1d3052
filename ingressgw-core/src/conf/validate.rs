use crate::conf::error::{ConfigError, ValidationErrors};
use crate::conf::settings::{IncludeSpec, SynthesizerSpec};

/// Checks synthesizer settings, collecting every problem before failing.
pub fn validate_synthesizer(
    synthesizer: &SynthesizerSpec,
    include: &IncludeSpec,
) -> Result<(), ConfigError> {
    let mut errors = ValidationErrors::default();

    if synthesizer.http_port == 0 {
        errors.push(ConfigError::InvalidPort {
            field: "http",
            port: synthesizer.http_port,
        });
    }
    if synthesizer.https_port == 0 {
        errors.push(ConfigError::InvalidPort {
            field: "https",
            port: synthesizer.https_port,
        });
    }
    if synthesizer.http_port != 0 && synthesizer.http_port == synthesizer.https_port {
        errors.push(ConfigError::DuplicatePort {
            port: synthesizer.http_port,
        });
    }
    if synthesizer.ingress_class.trim().is_empty() {
        errors.push(ConfigError::EmptyIngressClass);
    }
    if include.ingress.trim().is_empty() {
        errors.push(ConfigError::EmptyInclude { field: "ingress" });
    }
    if include.secrets.trim().is_empty() {
        errors.push(ConfigError::EmptyInclude { field: "secrets" });
    }

    errors.into_result()
}
