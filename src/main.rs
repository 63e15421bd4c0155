//! randoo CLI entry point.
//!
//! Parse → load config → build the shuffled argv → supervise the child.

use clap::Parser;

use randoo::args::{build_spawn_params, Entropy};
use randoo::cli::Cli;
use randoo::config::Config;
use randoo::logging::init_tracing;
use randoo::process::Supervisor;
use randoo::RandooError;

#[tokio::main]
async fn main() {
    // clap exits with 2 on usage errors and 0 for --help/--version.
    let cli = Cli::parse();

    let code = match run(cli).await {
        Ok(()) => 0,
        Err(e) => {
            if e.is_reported() {
                tracing::error!(error = %e, "randoo failed");
                eprintln!("randoo: {e}");
            }
            e.exit_code()
        }
    };

    std::process::exit(code);
}

async fn run(cli: Cli) -> Result<(), RandooError> {
    let config = Config::load()?;
    init_tracing(&config.logging);

    let options = cli.into_options()?;
    let mut rng = Entropy::default();
    let params = build_spawn_params(&options, std::io::stdin().lock(), &mut rng)?;

    let status = Supervisor::new(config.relay.queue_capacity)
        .run(&params)
        .await?;

    if status.success() {
        Ok(())
    } else {
        Err(RandooError::ChildExit(status))
    }
}
