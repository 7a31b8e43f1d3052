use miette::Diagnostic;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum ConfigError {
    //-------------------------------------------------------------------------
    // IO / Discovery
    //-------------------------------------------------------------------------
    #[error("failed to read config file {path}: {source}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("glob pattern error: {pattern}: {source}")]
    Glob {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },

    //-------------------------------------------------------------------------
    // Parsing
    //-------------------------------------------------------------------------
    #[error("invalid configuration file: {path}\n\n{source}")]
    ParseEntrypoint {
        path: PathBuf,
        #[source]
        source: hcl::Error,
    },

    #[error("invalid manifest: {path}\n\n{source}")]
    ParseManifest {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    //-------------------------------------------------------------------------
    // Synthesizer settings
    //-------------------------------------------------------------------------
    #[error("invalid {field} port {port}: ports must be non-zero")]
    InvalidPort { field: &'static str, port: u16 },

    #[error("http_port and https_port must differ (both are {port})")]
    DuplicatePort { port: u16 },

    #[error("ingress_class must not be empty")]
    EmptyIngressClass,

    #[error("include.{field} must not be empty")]
    EmptyInclude { field: &'static str },

    //-------------------------------------------------------------------------
    // Top-level
    //-------------------------------------------------------------------------
    #[error("config validation failed {validation_errors:?}")]
    #[diagnostic(help("Fix the settings in ingressgw.hcl or the INGRESSGW_* environment variables."))]
    Validation {
        #[related]
        validation_errors: Vec<ConfigError>,
    },
}

impl ConfigError {
    pub fn read_file(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ReadFile {
            path: path.into(),
            source,
        }
    }

    pub fn parse_manifest(path: impl Into<PathBuf>, source: serde_yaml::Error) -> Self {
        Self::ParseManifest {
            path: path.into(),
            source,
        }
    }
}

/// Every settings error found in one validation run.
#[derive(Debug, Default)]
pub struct ValidationErrors(pub Vec<ConfigError>);

impl ValidationErrors {
    pub fn push(&mut self, err: ConfigError) {
        self.0.push(err);
    }

    pub fn into_result(self) -> Result<(), ConfigError> {
        if self.0.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Validation {
                validation_errors: self.0,
            })
        }
    }
}
