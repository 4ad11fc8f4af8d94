//! Configuration for the demonstrations
//!
//! Inputs are supplied as JSON bytes by the caller, never read from files.
//! Every field has a default, so `{}` yields the stock demonstration.

use serde::Deserialize;

/// A `[start, start + length)` window over some text
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
pub struct Window {
    pub start: usize,
    pub length: usize,
}

impl Window {
    pub const fn new(start: usize, length: usize) -> Self {
        Self { start, length }
    }
}

/// Demonstration inputs
#[derive(Clone, Debug, Deserialize)]
pub struct DemoConfig {
    /// Text sliced and compared by the string demonstration
    #[serde(default = "default_greeting")]
    pub greeting: String,

    /// Two windows over `greeting`; the first is compared against the second
    #[serde(default = "default_greeting_windows")]
    pub greeting_windows: [Window; 2],

    /// Text holding the numbers to parse
    #[serde(default = "default_numbers")]
    pub numbers: String,

    /// Windows over `numbers`, each parsed as an `i32`
    #[serde(default = "default_number_windows")]
    pub number_windows: Vec<Window>,

    /// Bytes written into the stack buffer (at most `STACK_BUFFER_LEN`)
    #[serde(default = "default_stack_bytes")]
    pub stack_bytes: Vec<u8>,

    /// Whether to emit a telemetry event per demonstration
    #[serde(default = "default_emit_events")]
    pub emit_events: bool,
}

fn default_greeting() -> String {
    "Hello World".to_string()
}

fn default_greeting_windows() -> [Window; 2] {
    [Window::new(0, 5), Window::new(6, 5)]
}

fn default_numbers() -> String {
    "3489,3972".to_string()
}

fn default_number_windows() -> Vec<Window> {
    vec![Window::new(0, 4), Window::new(5, 4)]
}

fn default_stack_bytes() -> Vec<u8> {
    vec![20, u8::MAX]
}

fn default_emit_events() -> bool {
    true
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            greeting: default_greeting(),
            greeting_windows: default_greeting_windows(),
            numbers: default_numbers(),
            number_windows: default_number_windows(),
            stack_bytes: default_stack_bytes(),
            emit_events: default_emit_events(),
        }
    }
}

impl DemoConfig {
    /// Parse configuration from JSON bytes
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ConfigError> {
        let config_str = std::str::from_utf8(bytes)
            .map_err(|e| ConfigError::InvalidUtf8(e.to_string()))?;

        serde_json::from_str(config_str)
            .map_err(|e| ConfigError::InvalidJson(e.to_string()))
    }
}

/// Configuration parsing errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    InvalidUtf8(String),
    InvalidJson(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::InvalidUtf8(e) => write!(f, "Invalid UTF-8: {}", e),
            ConfigError::InvalidJson(e) => write!(f, "Invalid JSON: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {}
