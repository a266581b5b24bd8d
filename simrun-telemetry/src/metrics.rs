//! ## simrun-telemetry::metrics
//! **Prometheus counters and histograms for runner invocations**

use prometheus::{Histogram, HistogramOpts, IntCounterVec, Opts, Registry};

#[derive(Debug, Clone)]
pub struct MetricsRecorder {
    pub registry: Registry,
    pub runner_results: IntCounterVec,
    pub runner_duration: Histogram,
}

impl MetricsRecorder {
    pub fn new() -> Result<Self, prometheus::Error> {
        let registry = Registry::new();
        let runner_results = IntCounterVec::new(
            Opts::new(
                "simrun_runner_results_total",
                "Simulator runner invocations by outcome",
            ),
            &["label", "outcome"],
        )?;

        let runner_duration = Histogram::with_opts(
            HistogramOpts::new(
                "simrun_runner_duration_seconds",
                "Wall-clock time of one simulator runner invocation",
            )
            .buckets(vec![1.0, 10.0, 60.0, 300.0, 1_800.0, 7_200.0]),
        )?;

        registry.register(Box::new(runner_results.clone()))?;
        registry.register(Box::new(runner_duration.clone()))?;

        Ok(Self {
            registry,
            runner_results,
            runner_duration,
        })
    }

    pub fn record_runner(&self, label: &str, passed: bool, seconds: f64) {
        let outcome = if passed { "pass" } else { "failed" };
        self.runner_results
            .with_label_values(&[label, outcome])
            .inc();
        self.runner_duration.observe(seconds);
    }

    pub fn gather_metrics(&self) -> Result<String, prometheus::Error> {
        use prometheus::Encoder;
        let encoder = prometheus::TextEncoder::new();
        let mut buffer = Vec::<u8>::new();
        encoder.encode(&self.registry.gather(), &mut buffer)?;
        Ok(String::from_utf8_lossy(&buffer).into_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_runs_by_outcome() {
        let metrics = MetricsRecorder::new().unwrap();
        metrics.record_runner("Modelsim", true, 12.0);
        metrics.record_runner("Riviera Pro", false, 3.5);
        metrics.record_runner("Riviera Pro", false, 4.0);

        assert_eq!(
            metrics
                .runner_results
                .with_label_values(&["Riviera Pro", "failed"])
                .get(),
            2
        );
        assert_eq!(metrics.runner_duration.get_sample_count(), 3);

        let text = metrics.gather_metrics().unwrap();
        assert!(text.contains("simrun_runner_results_total"));
        assert!(text.contains("label=\"Modelsim\""));
    }
}
