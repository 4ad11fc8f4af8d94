//! Runs the three view demonstrations with the default configuration.

use std::process::ExitCode;

use log::{error, info};
use span_views::{run_all, DemoConfig};

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = DemoConfig::default();
    match run_all(&config) {
        Ok(report) => {
            info!(
                "stack buffer read back {:?}; '{}' is {:?} '{}'; parsed {:?}",
                report.stack_buffer.read_back,
                report.string_slices.first,
                report.string_slices.first_vs_second,
                report.string_slices.second,
                report.integer_parsing
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("Demonstration failed: {}", e);
            ExitCode::FAILURE
        }
    }
}
