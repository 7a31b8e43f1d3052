pub mod cli;
pub mod conf;
pub mod graph;
pub mod logging;
pub mod manifest;
pub mod model;
pub mod secrets;
pub mod synth;

pub use graph::ConfigurationGraph;
pub use model::{IngressResource, SecretIdentifier};
pub use synth::{ConfigBuilder, Synthesis, SynthesisReport, SynthError, SynthOptions};
