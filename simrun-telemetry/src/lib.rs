//! # simrun Telemetry
//!
//! Crate for logging, the live run transcript, and runner metrics.

pub mod logging;
pub mod metrics;
pub mod transcript;

pub use logging::EventLogger;
pub use metrics::MetricsRecorder;
pub use transcript::Transcript;
