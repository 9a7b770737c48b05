//! Per-pod resource usage metrics
//!
//! Shapes only: a collector fills these in from raw samples (see
//! [`MetricsByPodBuilder`]) and renderers read them. Absent usage always
//! means "no data", never zero.

mod builder;
mod history;


pub use builder::MetricsByPodBuilder;
pub use history::push_sample;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One measurement of a non-negative integer quantity, e.g. memory usage in
/// bytes observed at some moment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricResult {
    pub timestamp: DateTime<Utc>,
    pub value: u64,
}

impl MetricResult {
    pub fn new(timestamp: DateTime<Utc>, value: u64) -> Self {
        Self { timestamp, value }
    }
}

/// CPU and memory usage of a single pod
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PodMetrics {
    /// Most recent CPU usage on all cores, in nanoseconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cpu_usage: Option<u64>,

    /// Most recent memory usage, in bytes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub memory_usage: Option<u64>,

    /// CPU samples over a short window, oldest first
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub cpu_usage_history: Vec<MetricResult>,

    /// Memory samples over a short window, oldest first
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub memory_usage_history: Vec<MetricResult>,
}

impl PodMetrics {
    pub fn latest_cpu_sample(&self) -> Option<&MetricResult> {
        self.cpu_usage_history.last()
    }

    pub fn latest_memory_sample(&self) -> Option<&MetricResult> {
        self.memory_usage_history.last()
    }

    /// Whether any usage or history was recorded
    pub fn has_data(&self) -> bool {
        self.cpu_usage.is_some()
            || self.memory_usage.is_some()
            || !self.cpu_usage_history.is_empty()
            || !self.memory_usage_history.is_empty()
    }
}

/// Summed current usage over a set of pods.
///
/// A total is `None` when none of the summed pods reported that usage.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageTotals {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cpu_usage: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub memory_usage: Option<u64>,
}

/// Metrics for a batch of pods queried together
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricsByPod {
    /// Metrics by namespace, then pod name
    #[serde(default)]
    pub metrics_map: BTreeMap<String, BTreeMap<String, PodMetrics>>,
}

impl MetricsByPod {
    pub fn new() -> Self {
        Self::default()
    }

    /// Metrics for one pod, `None` when the pod returned no data
    pub fn get(&self, namespace: &str, pod: &str) -> Option<&PodMetrics> {
        self.metrics_map.get(namespace)?.get(pod)
    }

    /// Insert metrics for a pod, returning the previous entry
    pub fn insert(
        &mut self,
        namespace: impl Into<String>,
        pod: impl Into<String>,
        metrics: PodMetrics,
    ) -> Option<PodMetrics> {
        self.metrics_map
            .entry(namespace.into())
            .or_default()
            .insert(pod.into(), metrics)
    }

    /// Number of pods with metrics across all namespaces
    pub fn len(&self) -> usize {
        self.metrics_map.values().map(BTreeMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterate as `(namespace, pod, metrics)`, ordered by namespace then pod
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str, &PodMetrics)> {
        self.metrics_map.iter().flat_map(|(namespace, pods)| {
            pods.iter()
                .map(move |(pod, metrics)| (namespace.as_str(), pod.as_str(), metrics))
        })
    }

    /// Sum current usage over the given `(namespace, pod)` pairs.
    ///
    /// Pods missing from the batch, or missing a usage, contribute nothing.
    pub fn sum_usage<'a>(&self, pods: impl IntoIterator<Item = (&'a str, &'a str)>) -> UsageTotals {
        let mut totals = UsageTotals::default();

        for (namespace, pod) in pods {
            let Some(metrics) = self.get(namespace, pod) else {
                continue;
            };
            if let Some(cpu) = metrics.cpu_usage {
                totals.cpu_usage = Some(totals.cpu_usage.unwrap_or(0).saturating_add(cpu));
            }
            if let Some(memory) = metrics.memory_usage {
                totals.memory_usage = Some(totals.memory_usage.unwrap_or(0).saturating_add(memory));
            }
        }

        totals
    }

    /// Sum current usage over every pod in the batch
    pub fn total_usage(&self) -> UsageTotals {
        self.sum_usage(self.iter().map(|(namespace, pod, _)| (namespace, pod)))
    }
}
