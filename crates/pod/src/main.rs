//! # Pod CLI
//!
//! A thin terminal client over the `podcore` library: this file installs
//! logging, invokes `cli::run()` and maps errors to the exit status. Argument
//! parsing lives in `cli/args.rs` and dispatch in `cli/commands.rs`.
//!
//! Logging goes to stderr and is controlled by `RUST_LOG`
//! (default `podcore=info,pod=info`; `--verbose` raises both to `debug`).

mod cli;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn init_tracing(verbose: bool) {
    let default = if verbose {
        "podcore=debug,pod=debug"
    } else {
        "podcore=info,pod=info"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() {
    let args = cli::args::Cli::parse();
    init_tracing(args.verbose);

    if let Err(e) = cli::run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
