use clap::Parser;
use ingressgw_core::cli::{self, Command};
use ingressgw_core::logging::init_logging;

#[derive(Parser, Debug)]
#[command(
    name = "ingressgw",
    version,
    about = "ingressgw: synthesizes gateway configuration from Kubernetes ingresses"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

fn main() {
    let cli = Cli::parse();

    init_logging();

    if let Err(e) = cli::run(cli.command) {
        tracing::error!(error = %e, "command failed");
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}
