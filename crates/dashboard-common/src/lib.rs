//! Shared view model for the cluster dashboard
//!
//! This crate provides the transport-stable types the dashboard renders for
//! every orchestrated resource, plus the derived computations over them:
//! - Resource kind vocabulary
//! - Object, type and list metadata
//! - Label selector matching
//! - Per-pod usage metrics with bounded history

pub mod config;
pub mod error;
pub mod kind;
pub mod meta;
pub mod metrics;
pub mod observability;
pub mod selector;

pub use self::config::MetricsConfig;
pub use error::ModelError;
pub use kind::ResourceKind;
pub use meta::{ListMeta, ObjectMeta, TypeMeta};
pub use metrics::{
    push_sample, MetricResult, MetricsByPod, MetricsByPodBuilder, PodMetrics, UsageTotals,
};
pub use observability::ModelMetrics;
pub use selector::{filter_by_selector, is_label_selector_matching, is_selector_matching};
