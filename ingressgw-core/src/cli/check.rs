use crate::conf::{ConfigError, load_config};
use crate::synth::{ConfigBuilder, Severity, SynthError};
use miette::Report;
use std::path::PathBuf;

pub fn check(path: PathBuf, plain: bool, json: bool) -> anyhow::Result<()> {
    let loaded = match load_config(&path) {
        Ok(loaded) => loaded,
        Err(err) => {
            print_config_error(err, plain);
            std::process::exit(1);
        }
    };

    let store = loaded.secret_store();
    let synthesis = match ConfigBuilder::new(&store, loaded.options()).build(&loaded.resources) {
        Ok(synthesis) => synthesis,
        Err(err) => {
            print_synth_error(err, plain);
            std::process::exit(1);
        }
    };

    let report = &synthesis.report;
    if json {
        println!("{}", report.render_json()?);
    } else {
        let graph = &synthesis.graph;
        println!("✔ Config loaded successfully");
        println!(
            "✔ {} ingresses ({} skipped)",
            loaded.resources.len(),
            loaded.skipped
        );
        println!("✔ {} certificates", graph.certificates.len());
        println!("✔ {} frontend ports", graph.ports.len());
        println!("✔ {} listeners", graph.listeners.len());
        println!("✔ {} redirects", graph.redirects.len());

        if report.has_warnings() {
            println!();
            if plain {
                print!("{}", report.render_plain());
            } else {
                print!("{}", report.render_pretty());
            }
        }
    }

    let errors = report
        .warnings
        .iter()
        .filter(|w| w.reason.severity() == Severity::Error)
        .count();
    if errors > 0 {
        std::process::exit(1);
    }
    Ok(())
}

fn print_config_error(err: ConfigError, plain: bool) {
    let hint = config_error_hint(&err);
    if plain {
        eprintln!("{}", err);
    } else {
        eprintln!();
        eprintln!("{:?}", Report::new(err));
    }
    if let Some(hint) = hint {
        eprintln!();
        eprintln!("{}", hint);
    }
}

fn print_synth_error(err: SynthError, plain: bool) {
    if plain {
        eprintln!("{}", err);
    } else {
        eprintln!();
        eprintln!("{:?}", Report::new(err));
    }
}

pub fn config_error_hint(err: &ConfigError) -> Option<&'static str> {
    match err {
        //---------------------------------------------------------------------
        // Entrypoint
        //---------------------------------------------------------------------
        ConfigError::ReadFile { .. } => Some(
            "The config directory must contain an ingressgw.hcl entrypoint.\n\
             \n\
             Run `ingressgw init <path>` to create one.",
        ),

        ConfigError::ParseEntrypoint { .. } => Some(
            "ingressgw.hcl accepts two blocks.\n\
             \n\
             Example:\n\
             \n\
             synthesizer {\n\
             \x20 https_port    = 443\n\
             \x20 ingress_class = \"ingressgw\"\n\
             }\n\
             \n\
             include {\n\
             \x20 ingress = \"ingress.d/*.yaml\"\n\
             }",
        ),

        //---------------------------------------------------------------------
        // Manifests
        //---------------------------------------------------------------------
        ConfigError::ParseManifest { .. } => Some(
            "Ingress manifests are YAML documents separated by `---`.\n\
             \n\
             Documents of other kinds are skipped; an Ingress must match\n\
             the networking.k8s.io/v1 schema.",
        ),

        ConfigError::Glob { .. } => Some(
            "include.ingress is a glob relative to the config directory, e.g. \"ingress.d/*.yaml\".",
        ),

        //---------------------------------------------------------------------
        // Everything else: no hint
        //---------------------------------------------------------------------
        _ => None,
    }
}
