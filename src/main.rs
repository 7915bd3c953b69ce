//! rasffwatch - daily report of RASFF Window food and feed safety notifications.
//!
//! CLI entry point.

use clap::Parser;
use rasffwatch::report::console::write_json_file;
use rasffwatch::report::ConsoleOutput;
use rasffwatch::{Config, NotificationFetcher, RasffError};
use std::process::ExitCode;
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    let config = Config::parse();

    // Set up logging
    let filter = if config.verbose {
        EnvFilter::new("rasffwatch=debug,info")
    } else {
        EnvFilter::new("rasffwatch=info,warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match run(&config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            match &e {
                RasffError::Marshal(_) => error!("Error marshaling request body: {}", e),
                RasffError::Decode(_) => error!("Error parsing response body: {}", e),
                e if e.is_transport() => error!("Error sending request: {}", e),
                _ => error!("{}", e),
            }
            ExitCode::FAILURE
        }
    }
}

async fn run(config: &Config) -> rasffwatch::Result<()> {
    let fetcher = NotificationFetcher::from_config(config)?;
    let output = ConsoleOutput::new(config.json);
    debug!("Using endpoint {}", fetcher.endpoint());

    let request = fetcher.request_body();
    let spinner = output.create_spinner(&format!(
        "Searching notifications validated {}",
        request.ec_valid_date_from
    ));
    let searched = fetcher.send_search(&request).await;
    if let Some(pb) = spinner {
        pb.finish_and_clear();
    }
    let result = searched?;

    info!(
        "Fetched {} of {} notifications",
        result.notifications.len(),
        result.total_elements
    );

    output.print_result(&result)?;

    if let Some(ref output_path) = config.output {
        write_json_file(output_path, &result)?;
        info!("Results written to: {:?}", output_path);
    }

    Ok(())
}
