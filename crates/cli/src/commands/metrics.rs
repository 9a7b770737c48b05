//! Per-pod usage metrics from a raw sample export

use anyhow::Result;
use colored::Colorize;
use dashboard_common::{MetricResult, MetricsByPod, MetricsByPodBuilder, MetricsConfig, UsageTotals};
use serde::Serialize;
use tabled::Tabled;
use tracing::debug;

use crate::output::{
    format_bytes, format_cpu_nanos, format_usage, print_json, print_success, print_warning,
    OutputFormat,
};
use crate::source::{RawSample, SampleResource};

#[derive(Tabled)]
struct PodMetricsRow {
    #[tabled(rename = "Namespace")]
    namespace: String,
    #[tabled(rename = "Pod")]
    pod: String,
    #[tabled(rename = "CPU")]
    cpu: String,
    #[tabled(rename = "Memory")]
    memory: String,
    #[tabled(rename = "CPU Samples")]
    cpu_samples: usize,
    #[tabled(rename = "Mem Samples")]
    memory_samples: usize,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct MetricsReport<'a> {
    #[serde(flatten)]
    batch: &'a MetricsByPod,
    total: UsageTotals,
}

/// Assemble a batch from raw samples, applying the configured history bound
pub fn build_batch(samples: &[RawSample], config: MetricsConfig) -> MetricsByPod {
    let mut builder = MetricsByPodBuilder::new(config);

    for sample in samples {
        match (sample.resource, sample.timestamp) {
            (SampleResource::Cpu, None) => {
                builder.set_cpu_usage(&sample.namespace, &sample.pod, sample.value);
            }
            (SampleResource::Memory, None) => {
                builder.set_memory_usage(&sample.namespace, &sample.pod, sample.value);
            }
            (SampleResource::Cpu, Some(ts)) => {
                builder.record_cpu(&sample.namespace, &sample.pod, MetricResult::new(ts, sample.value));
            }
            (SampleResource::Memory, Some(ts)) => {
                builder.record_memory(
                    &sample.namespace,
                    &sample.pod,
                    MetricResult::new(ts, sample.value),
                );
            }
        }
    }

    debug!(samples = samples.len(), "Processed raw samples");
    builder.build()
}

/// Print per-pod usage and the batch total
pub fn show_metrics(samples: &[RawSample], config: MetricsConfig, format: OutputFormat) -> Result<()> {
    let batch = build_batch(samples, config);
    let total = batch.total_usage();

    match format {
        OutputFormat::Json => print_json(&MetricsReport {
            batch: &batch,
            total,
        })?,
        OutputFormat::Table => {
            if batch.is_empty() {
                print_warning("No pod metrics in export");
                return Ok(());
            }

            println!("{}", "Pod Metrics".bold());
            let rows: Vec<PodMetricsRow> = batch
                .iter()
                .map(|(namespace, pod, metrics)| PodMetricsRow {
                    namespace: namespace.to_string(),
                    pod: pod.to_string(),
                    cpu: format_usage(metrics.cpu_usage, format_cpu_nanos),
                    memory: format_usage(metrics.memory_usage, format_bytes),
                    cpu_samples: metrics.cpu_usage_history.len(),
                    memory_samples: metrics.memory_usage_history.len(),
                })
                .collect();

            let table = tabled::Table::new(rows)
                .with(tabled::settings::Style::rounded())
                .to_string();
            println!("{}", table);
            print_success(&format!(
                "{} pods, CPU {}, memory {}",
                batch.len(),
                format_usage(total.cpu_usage, format_cpu_nanos),
                format_usage(total.memory_usage, format_bytes)
            ));
        }
    }

    Ok(())
}
