use crate::conf::load_config;
use crate::synth::ConfigBuilder;
use anyhow::Context;
use serde::Serialize;
use std::io::{self, IsTerminal};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Yaml,
}

/// Prints the graph on stdout and the report on stderr.
pub fn synth(path: PathBuf, format: OutputFormat) -> anyhow::Result<()> {
    let loaded = load_config(&path)
        .with_context(|| format!("failed to load config from {}", path.display()))?;
    let store = loaded.secret_store();

    let synthesis = ConfigBuilder::new(&store, loaded.options()).build(&loaded.resources)?;

    match format {
        OutputFormat::Json => print_json(&synthesis.graph)?,
        OutputFormat::Yaml => print_yaml(&synthesis.graph)?,
    }

    if synthesis.report.has_warnings() {
        if io::stderr().is_terminal() {
            eprint!("{}", synthesis.report.render_pretty());
        } else {
            eprint!("{}", synthesis.report.render_plain());
        }
    }

    Ok(())
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    let s = serde_json::to_string_pretty(value)?;
    println!("{s}");
    Ok(())
}

fn print_yaml<T: Serialize>(value: &T) -> anyhow::Result<()> {
    let s = serde_yaml::to_string(value)?;
    print!("{s}");
    Ok(())
}
