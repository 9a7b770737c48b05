//! Assembly of a [`MetricsByPod`] batch from raw samples

use super::{push_sample, MetricResult, MetricsByPod, PodMetrics};
use crate::config::MetricsConfig;
use crate::observability::ModelMetrics;
use tracing::{debug, warn};

#[derive(Debug, Clone, Copy)]
enum Resource {
    Cpu,
    Memory,
}

impl Resource {
    fn as_str(&self) -> &'static str {
        match self {
            Resource::Cpu => "cpu",
            Resource::Memory => "memory",
        }
    }
}

/// Builds one [`MetricsByPod`] per request.
///
/// Only pods that end up with a usage value or a retained sample appear in
/// the result.
/// Samples older than the newest retained one are dropped and counted.
pub struct MetricsByPodBuilder {
    config: MetricsConfig,
    metrics: ModelMetrics,
    batch: MetricsByPod,
}

impl MetricsByPodBuilder {
    pub fn new(config: MetricsConfig) -> Self {
        Self {
            config,
            metrics: ModelMetrics::new(),
            batch: MetricsByPod::new(),
        }
    }

    fn entry(&mut self, namespace: &str, pod: &str) -> &mut PodMetrics {
        self.batch
            .metrics_map
            .entry(namespace.to_string())
            .or_default()
            .entry(pod.to_string())
            .or_default()
    }

    /// Set the current CPU usage snapshot
    pub fn set_cpu_usage(&mut self, namespace: &str, pod: &str, value: u64) -> &mut Self {
        self.entry(namespace, pod).cpu_usage = Some(value);
        self
    }

    /// Set the current memory usage snapshot
    pub fn set_memory_usage(&mut self, namespace: &str, pod: &str, value: u64) -> &mut Self {
        self.entry(namespace, pod).memory_usage = Some(value);
        self
    }

    /// Append a CPU sample to the pod's history
    pub fn record_cpu(&mut self, namespace: &str, pod: &str, sample: MetricResult) -> &mut Self {
        self.record(Resource::Cpu, namespace, pod, sample)
    }

    /// Append a memory sample to the pod's history
    pub fn record_memory(&mut self, namespace: &str, pod: &str, sample: MetricResult) -> &mut Self {
        self.record(Resource::Memory, namespace, pod, sample)
    }

    fn record(
        &mut self,
        resource: Resource,
        namespace: &str,
        pod: &str,
        sample: MetricResult,
    ) -> &mut Self {
        let limit = self.config.history_limit;
        let entry = self.entry(namespace, pod);
        let history = match resource {
            Resource::Cpu => &mut entry.cpu_usage_history,
            Resource::Memory => &mut entry.memory_usage_history,
        };

        match push_sample(history, sample, limit) {
            Ok(()) => self.metrics.inc_samples_recorded(),
            Err(e) => {
                warn!(
                    namespace = %namespace,
                    pod = %pod,
                    resource = resource.as_str(),
                    error = %e,
                    "Dropping usage sample"
                );
                self.metrics.inc_samples_rejected();
            }
        }

        self
    }

    /// Finish the batch
    pub fn build(mut self) -> MetricsByPod {
        // Pods whose samples were all rejected or evicted carry no data
        for pods in self.batch.metrics_map.values_mut() {
            pods.retain(|_, metrics| metrics.has_data());
        }
        self.batch.metrics_map.retain(|_, pods| !pods.is_empty());

        let pods = self.batch.len();
        debug!(pods, "Built pod metrics batch");
        self.metrics.set_pods_in_last_batch(pods);
        self.batch
    }
}

impl Default for MetricsByPodBuilder {
    fn default() -> Self {
        Self::new(MetricsConfig::default())
    }
}
