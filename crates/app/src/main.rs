//! Apiprobe - Main Entry Point
//!
//! Wires the reqwest HTTP adapter, the system clock, and the console
//! reporter into a scenario runner, executes the fixed probe sequence,
//! and turns the run summary into the process exit code.

use std::process::ExitCode;
use std::sync::Arc;

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use apiprobe_application::{ScenarioRunner, run_sequence};
use apiprobe_domain::RunnerConfig;
use apiprobe_infrastructure::{ConsoleReporter, ReqwestHttpClient, SystemClock};

#[tokio::main]
async fn main() -> ExitCode {
    // Diagnostics go to stderr so the probe report owns stdout.
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let client = match ReqwestHttpClient::new() {
        Ok(client) => client,
        Err(error) => {
            tracing::error!(%error, "failed to build the HTTP client");
            return ExitCode::from(1);
        }
    };

    let mut runner = ScenarioRunner::new(
        Arc::new(client),
        Arc::new(SystemClock::new()),
        Arc::new(ConsoleReporter::new()),
        RunnerConfig::default(),
    );

    let summary = run_sequence(&mut runner).await;
    ExitCode::from(summary.exit_code())
}
