mod cli;
mod commands;
mod error;
mod output;

use std::time::Duration;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use btpanel_api::{ClientConfig, ClientOptions, PanelClient};

use crate::cli::{Cli, Command, GlobalOpts};
use crate::error::CliError;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(err) = run(cli).await {
        let code = err.exit_code();
        eprintln!("{:?}", miette::Report::new(err));
        std::process::exit(code);
    }
}

fn init_tracing(verbosity: u8, debug: bool) {
    let filter = match (verbosity, debug) {
        (0, false) => "warn",
        (0, true) => "warn,btpanel_api=debug",
        (1, _) => "info",
        (2, _) => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

async fn run(cli: Cli) -> Result<(), CliError> {
    if let Command::Completions(args) = &cli.command {
        use clap::CommandFactory;
        use clap_complete::generate;

        let mut cmd = Cli::command();
        generate(args.shell, &mut cmd, "btpanel", &mut std::io::stdout());
        return Ok(());
    }

    let config = build_client_config(&cli.global)?;
    init_tracing(cli.global.verbose, config.debug);

    let client = PanelClient::from_config(config)?;
    tracing::debug!(command = ?cli.command, host = client.host(), "dispatching command");
    commands::dispatch(cli.command, &client, &cli.global).await
}

/// Merge CLI flags over the environment into a resolved client config.
fn build_client_config(global: &GlobalOpts) -> Result<ClientConfig, CliError> {
    let mut options = ClientOptions::new();
    if let Some(host) = &global.host {
        options = options.host(host.as_str());
    }
    if let Some(key) = &global.api_key {
        options = options.api_key(key.as_str());
    }
    if let Some(secs) = global.timeout {
        options = options.timeout(Duration::from_secs(secs));
    }
    if global.insecure {
        options = options.verify_ssl(false);
    }
    if let Some(path) = &global.ca_cert {
        options = options.ca_cert(path.clone());
    }
    if global.debug {
        options = options.debug(true);
    }
    Ok(ClientConfig::resolve(options)?)
}
