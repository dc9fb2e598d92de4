//! # Overlay Telemetry
//!
//! Structured logging for the overlay identity crates.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use overlay_telemetry::{init_logging, TelemetryConfig};
//!
//! let config = TelemetryConfig::from_env();
//! let _guard = init_logging(&config).expect("Failed to init logging");
//! ```
//!
//! ## Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `OTEL_SERVICE_NAME` | `overlay` | Service name in log lines |
//! | `OVERLAY_LOG_LEVEL` | `info` | Log level filter |
//! | `OVERLAY_JSON_LOGS` | `false` | JSON formatted output |
//! | `OVERLAY_CONSOLE_OUTPUT` | `true` | Emit to stdout at all |

#![warn(missing_docs)]

mod config;
mod logging;

pub use config::TelemetryConfig;
pub use logging::{env_filter, init_logging, LoggingGuard};

use thiserror::Error;

/// Telemetry initialization errors
#[derive(Error, Debug)]
pub enum TelemetryError {
    /// A global subscriber is already installed
    #[error("Logging already initialized: {0}")]
    AlreadyInitialized(String),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    Config(String),
}
