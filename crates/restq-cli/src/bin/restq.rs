//! restq command-line client binary

use clap::Parser;
use restq::{RestqClient, error, telemetry};
use restq_cli::{cli::Cli, dispatch, dispatch::FAILURE_STATUS, stdin::find_stdin};
use std::io::Write;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();
    telemetry::init();

    let client = match RestqClient::with_base_url(&cli.base_url) {
        Ok(client) => client,
        Err(e) => {
            error!("{e}");
            std::process::exit(1);
        }
    };

    let outcome = dispatch(&client, &cli.dispatch_options(), find_stdin).await;
    if let Some(e) = &outcome.error {
        error!("{e}");
    }

    if let Err(e) = write_output(&outcome.output) {
        error!("Failed to write output: {e}");
        std::process::exit(FAILURE_STATUS);
    }
    std::process::exit(outcome.status);
}

fn write_output(output: &str) -> std::io::Result<()> {
    let mut stdout = std::io::stdout().lock();
    stdout.write_all(output.as_bytes())?;
    stdout.flush()
}
