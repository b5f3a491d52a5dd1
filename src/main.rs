//! Console entry point for a payroll run.

use std::io::{self, Write};
use std::process::ExitCode;

use tracing::{debug, error, warn};
use tracing_subscriber::EnvFilter;

use payroll_engine::config::ConfigLoader;
use payroll_engine::session::Session;

/// Optional configuration file in the working directory.
const CONFIG_FILE: &str = "payroll.yaml";

fn main() -> ExitCode {
    // Logs go to stderr so they never interleave with the prompts.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .with_target(false)
        .init();

    let config = match ConfigLoader::load_or_default(CONFIG_FILE) {
        Ok(config) => config,
        Err(err) => {
            error!(error = %err, "Failed to load configuration");
            eprintln!("{}", err);
            return ExitCode::FAILURE;
        }
    };

    let stdin = io::stdin().lock();
    let stdout = io::stdout().lock();
    let mut session = Session::new(stdin, stdout, config);

    match session.run() {
        Ok(summary) => {
            match serde_json::to_string(&summary) {
                Ok(json) => debug!(summary = %json, "Run summary"),
                Err(err) => warn!(error = %err, "Failed to serialize run summary"),
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!(error = %err, "Payroll run failed");
            let mut stdout = session.into_output();
            let _ = stdout.flush();
            eprintln!("{}", err);
            ExitCode::FAILURE
        }
    }
}
