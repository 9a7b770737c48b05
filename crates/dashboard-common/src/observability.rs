//! Prometheus metrics for metrics-batch assembly
//!
//! Counters are registered once in the default registry; every
//! [`ModelMetrics`] handle shares them.

use prometheus::{register_int_counter, register_int_gauge, IntCounter, IntGauge};
use std::sync::OnceLock;

static GLOBAL_METRICS: OnceLock<ModelMetricsInner> = OnceLock::new();

struct ModelMetricsInner {
    samples_recorded: IntCounter,
    samples_rejected: IntCounter,
    pods_in_last_batch: IntGauge,
}

impl ModelMetricsInner {
    fn new() -> Self {
        Self {
            samples_recorded: register_int_counter!(
                "dashboard_metric_samples_recorded_total",
                "Usage samples appended to a pod history"
            )
            .expect("Failed to register samples_recorded"),

            samples_rejected: register_int_counter!(
                "dashboard_metric_samples_rejected_total",
                "Usage samples dropped for arriving out of timestamp order"
            )
            .expect("Failed to register samples_rejected"),

            pods_in_last_batch: register_int_gauge!(
                "dashboard_metrics_pods_in_last_batch",
                "Number of pods with metrics in the most recently built batch"
            )
            .expect("Failed to register pods_in_last_batch"),
        }
    }
}

/// Lightweight handle to the process-wide counters
#[derive(Clone)]
pub struct ModelMetrics {
    _private: (),
}

impl Default for ModelMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl ModelMetrics {
    pub fn new() -> Self {
        GLOBAL_METRICS.get_or_init(ModelMetricsInner::new);
        Self { _private: () }
    }

    fn inner(&self) -> &ModelMetricsInner {
        GLOBAL_METRICS.get_or_init(ModelMetricsInner::new)
    }

    pub fn inc_samples_recorded(&self) {
        self.inner().samples_recorded.inc();
    }

    pub fn inc_samples_rejected(&self) {
        self.inner().samples_rejected.inc();
    }

    pub fn set_pods_in_last_batch(&self, count: usize) {
        self.inner().pods_in_last_batch.set(count as i64);
    }

    pub fn samples_recorded(&self) -> u64 {
        self.inner().samples_recorded.get()
    }

    pub fn samples_rejected(&self) -> u64 {
        self.inner().samples_rejected.get()
    }
}
