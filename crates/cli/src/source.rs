//! Loading raw objects and usage samples
//!
//! Pods come either from a `kubectl get pods -o json` export or from the
//! cluster itself. Usage samples come from a JSON export of the metrics
//! backend.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use dashboard_common::ObjectMeta;
use k8s_openapi::api::core::v1::Pod;
use kube::api::{Api, ListParams};
use kube::config::{KubeConfigOptions, Kubeconfig};
use kube::Client;
use serde::Deserialize;
use std::path::Path;
use tracing::{debug, info};

use crate::config::kubeconfig_path;

#[derive(Debug, Deserialize)]
struct PodList {
    #[serde(default)]
    items: Vec<Pod>,
}

/// Which usage a raw sample measures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SampleResource {
    Cpu,
    Memory,
}

/// One entry of a raw metrics export.
///
/// An entry without a timestamp is the current usage snapshot; an entry with
/// one is a history sample.
#[derive(Debug, Clone, Deserialize)]
pub struct RawSample {
    pub namespace: String,
    pub pod: String,
    pub resource: SampleResource,
    #[serde(default)]
    pub timestamp: Option<DateTime<Utc>>,
    pub value: u64,
}

/// Read pod metadata from a pod list export
pub fn read_pods(path: &Path) -> Result<Vec<ObjectMeta>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let list: PodList = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse pod list in {}", path.display()))?;

    debug!(path = %path.display(), pods = list.items.len(), "Loaded pods from file");
    Ok(list.items.into_iter().map(|pod| ObjectMeta::from(pod.metadata)).collect())
}

/// List pod metadata from the cluster
pub async fn fetch_pods(kubeconfig: Option<&str>, namespace: Option<&str>) -> Result<Vec<ObjectMeta>> {
    let client = connect(kubeconfig).await?;

    let api: Api<Pod> = match namespace {
        Some(ns) => Api::namespaced(client, ns),
        None => Api::all(client),
    };

    let pods = api
        .list(&ListParams::default())
        .await
        .context("Failed to list pods")?;

    info!(namespace = ?namespace, pods = pods.items.len(), "Listed pods from cluster");
    Ok(pods.items.into_iter().map(|pod| ObjectMeta::from(pod.metadata)).collect())
}

async fn connect(kubeconfig: Option<&str>) -> Result<Client> {
    let path = kubeconfig_path(kubeconfig)?;

    if !path.exists() {
        debug!(path = %path.display(), "No kubeconfig found, using in-cluster configuration");
        return Client::try_default()
            .await
            .context("Failed to create Kubernetes client");
    }

    let kubeconfig = Kubeconfig::read_from(&path)
        .with_context(|| format!("Failed to read kubeconfig {}", path.display()))?;
    let config = kube::Config::from_custom_kubeconfig(kubeconfig, &KubeConfigOptions::default())
        .await
        .context("Failed to load kubeconfig")?;

    Client::try_from(config).context("Failed to create Kubernetes client")
}

/// Read a raw usage sample export
pub fn read_samples(path: &Path) -> Result<Vec<RawSample>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse samples in {}", path.display()))
}
