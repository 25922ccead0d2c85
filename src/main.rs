use anyhow::Result;

mod commands;
use commands::*;

mod api;
mod client;
mod config;
mod consts;
mod controllers;
mod errors;
mod gql;

#[macro_use]
mod macros;

/// Interact with Deploifai via CLI
#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
#[clap(propagate_version = true)]
pub struct Args {
    #[clap(subcommand)]
    command: Commands,

    /// Output in JSON format
    #[clap(global = true, long)]
    json: bool,

    /// Base URL of the Deploifai backend, overriding DEPLOIFAI_BACKEND_URL
    #[clap(global = true, long)]
    backend_url: Option<String>,

    /// Print debug logs to stderr
    #[clap(global = true, short, long)]
    verbose: bool,
}

commands_enum!(whoami, workspace);

fn init_tracing(verbose: bool) {
    let default_filter = match (verbose, Configs::get_environment_id()) {
        (true, _) | (false, Environment::Development) => "deploifai=debug",
        (false, Environment::Production) => "deploifai=warn",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Args::parse();
    init_tracing(cli.verbose);

    if let Err(e) = Commands::exec(cli).await {
        eprintln!("{:?}", e);
        std::process::exit(1);
    }

    Ok(())
}
