mod discover;
mod env;
mod error;
mod loader;
mod parse;
mod settings;
mod validate;

#[cfg(test)]
mod tests;

pub use discover::{discover, resolve_glob};
pub use env::{env_or, env_parse};
pub use error::{ConfigError, ValidationErrors};
pub use loader::{ENTRYPOINT_FILE, LoadedConfig, load_config, load_entrypoint};
pub use parse::{parse_ingress_manifests, parse_ingress_str};
pub use settings::{EntrypointSpec, IncludeSpec, SynthesizerSpec};
pub use validate::validate_synthesizer;
