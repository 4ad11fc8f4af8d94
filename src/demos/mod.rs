//! Demonstrations of views in use
//!
//! - Stack buffer written and read through a writable view
//! - String windows compared by ordinal value
//! - Integers parsed out of string windows

pub mod stack_buffer;
pub mod string_slices;
pub mod integer_parsing;

pub use stack_buffer::{StackBufferOutcome, STACK_BUFFER_LEN};
pub use string_slices::StringSlicesOutcome;

use log::info;
use serde::Serialize;

use crate::config::DemoConfig;
use crate::error::ViewError;
use crate::telemetry::{demo_completed, demo_failed};

/// Outcomes of all three demonstrations
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DemoReport<'a> {
    pub stack_buffer: StackBufferOutcome,
    pub string_slices: StringSlicesOutcome<'a>,
    pub integer_parsing: Vec<i32>,
}

/// Run the demonstrations in order, stopping at the first failure
pub fn run_all(config: &DemoConfig) -> Result<DemoReport<'_>, ViewError> {
    let emit = config.emit_events;

    let stack_buffer = observe(
        "stack_buffer",
        1,
        emit,
        stack_buffer::run(&config.stack_bytes),
    )?;
    let string_slices = observe(
        "string_slices",
        2,
        emit,
        string_slices::run(&config.greeting, &config.greeting_windows),
    )?;
    let integer_parsing = observe(
        "integer_parsing",
        config.number_windows.len(),
        emit,
        integer_parsing::run(&config.numbers, &config.number_windows),
    )?;

    info!("All demonstrations completed");

    Ok(DemoReport {
        stack_buffer,
        string_slices,
        integer_parsing,
    })
}

/// Emit the telemetry event for a finished demonstration and pass its result on
fn observe<T: Serialize>(
    demo: &str,
    views: usize,
    emit: bool,
    result: Result<T, ViewError>,
) -> Result<T, ViewError> {
    if emit {
        match &result {
            Ok(values) => demo_completed(demo, views).with_values(values).emit(),
            Err(e) => demo_failed(demo, e).emit(),
        }
    }
    result
}
