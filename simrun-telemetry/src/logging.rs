//! ## simrun-telemetry::logging
//! **Structured logging with `tracing`**
//!
//! Diagnostics go to stderr so the transcript on stdout stays readable.
//! Runner lifecycle events carry OpenTelemetry key/values as metadata.

use opentelemetry::KeyValue;
use tracing::{info_span, Instrument};
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::{fmt, EnvFilter};

/// Entry point for subscriber setup and structured runner events.
#[derive(Clone)]
pub struct EventLogger;

impl EventLogger {
    /// Install the global subscriber. `RUST_LOG` wins over `default_level`.
    ///
    /// A second call is a no-op.
    pub fn init(default_level: &str) {
        let _ = fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| EnvFilter::new(default_level)),
            )
            .with_writer(std::io::stderr)
            .with_target(false)
            .with_span_events(FmtSpan::CLOSE)
            .try_init();
    }

    /// Emit one event inside a `runner_event` span.
    pub async fn log_event(event_type: &str, metadata: Vec<KeyValue>) {
        let span = info_span!("runner_event", event_type = event_type, otel.kind = "INTERNAL");

        async {
            tracing::info!(metadata = ?metadata, "Runner event recorded");
        }
        .instrument(span)
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_test::traced_test;

    #[traced_test]
    #[test]
    fn test_logging() {
        tokio::runtime::Builder::new_current_thread()
            .build()
            .unwrap()
            .block_on(EventLogger::log_event(
                "simulator_finished",
                vec![KeyValue::new("label", "Modelsim")],
            ));
        assert!(logs_contain("Runner event recorded"));
        assert!(logs_contain("Modelsim"));
    }
}
