use anyhow::bail;
use fintrak_shared::telemetry;
use tracing_subscriber::EnvFilter;

use crate::{cli::Cli, configuration::TracingSettings};

const APP_NAME: &str = "fintrak";

pub fn init(cli: &Cli, settings: &TracingSettings) -> anyhow::Result<()> {
    fn init_to_file(default_filter: &str) -> anyhow::Result<()> {
        let (file, filename) = telemetry::create_trace_file(APP_NAME)?;
        let subscriber = telemetry::get_subscriber(APP_NAME.into(), default_filter, file);

        match telemetry::init_subscriber(subscriber) {
            Ok(_) => {
                eprintln!("Tracing started to file {filename:?}");
                Ok(())
            }
            Err(e) => {
                bail!("Failed to start tracing to file. Error: {e}");
            }
        }
    }

    if !cli.is_to_std_out && !settings.to_stdout {
        match init_to_file(&settings.default_filter) {
            Ok(_) => return Ok(()),
            Err(e) => {
                // Print error and fall though to logging to stderr
                eprintln!("Failed to start logging to file: {e}");
            }
        }
    }

    // Keep stdout for command output
    match tracing_subscriber::fmt()
        .with_env_filter(env_filter(&settings.default_filter))
        .with_writer(std::io::stderr)
        .try_init()
    {
        Ok(_) => Ok(()),
        Err(e) => {
            bail!("Failed to start tracing. Error: {e}");
        }
    }
}

/// `RUST_LOG` wins over the configured default, as for the trace file
fn env_filter(default_filter: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter))
}
