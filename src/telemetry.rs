//! Telemetry for the demonstrations
//!
//! Each demonstration reports one structured event, serialized to JSON and
//! written through the `log` facade. Whatever logger the host installs
//! decides where it goes.

use log::{info, warn};
use serde::Serialize;

/// Demonstration event types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DemoEventType {
    /// Demonstration ran and its checks held
    DemoCompleted,
    /// Demonstration stopped on an error
    DemoFailed,
}

/// Structured demonstration event
#[derive(Debug, Clone, Serialize)]
pub struct DemoEvent {
    pub event_type: DemoEventType,
    /// Demonstration name
    pub demo: String,
    /// Views created during the run
    pub views: usize,
    /// Human readable outcome or error
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    /// Values produced (bytes read back, parsed integers, ...)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub values: Option<serde_json::Value>,
}

impl DemoEvent {
    pub fn new(event_type: DemoEventType, demo: &str) -> Self {
        Self {
            event_type,
            demo: demo.to_string(),
            views: 0,
            detail: None,
            values: None,
        }
    }

    pub fn with_views(mut self, views: usize) -> Self {
        self.views = views;
        self
    }

    pub fn with_detail(mut self, detail: &str) -> Self {
        self.detail = Some(detail.to_string());
        self
    }

    /// Attach produced values; anything that fails to serialize is dropped
    pub fn with_values<T: Serialize>(mut self, values: &T) -> Self {
        self.values = serde_json::to_value(values).ok();
        self
    }

    /// Log the event
    pub fn emit(&self) {
        match serde_json::to_string(self) {
            Ok(json) => match self.event_type {
                DemoEventType::DemoFailed => warn!("[SPAN-VIEWS] {}", json),
                DemoEventType::DemoCompleted => info!("[SPAN-VIEWS] {}", json),
            },
            Err(e) => {
                warn!("Failed to serialize demo event: {}", e);
            }
        }
    }
}

/// Create a completed demonstration event
pub fn demo_completed(demo: &str, views: usize) -> DemoEvent {
    DemoEvent::new(DemoEventType::DemoCompleted, demo).with_views(views)
}

/// Create a failed demonstration event
pub fn demo_failed(demo: &str, error: &dyn std::error::Error) -> DemoEvent {
    DemoEvent::new(DemoEventType::DemoFailed, demo).with_detail(&error.to_string())
}
