//! Resource kind vocabulary
//!
//! The lowercase tokens are a wire contract: generic consumers (a deleter, a
//! renderer) match on them to dispatch without knowing the concrete type.

use crate::error::ModelError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Unique name for each resource category supported by the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    ConfigMap,
    DaemonSet,
    Deployment,
    Event,
    HorizontalPodAutoscaler,
    Ingress,
    Job,
    LimitRange,
    Namespace,
    Node,
    PersistentVolumeClaim,
    PersistentVolume,
    Pod,
    ReplicaSet,
    ReplicationController,
    ResourceQuota,
    Secret,
    Service,
    StatefulSet,
}

impl ResourceKind {
    /// Every kind, in vocabulary order
    pub const ALL: [ResourceKind; 19] = [
        ResourceKind::ConfigMap,
        ResourceKind::DaemonSet,
        ResourceKind::Deployment,
        ResourceKind::Event,
        ResourceKind::HorizontalPodAutoscaler,
        ResourceKind::Ingress,
        ResourceKind::Job,
        ResourceKind::LimitRange,
        ResourceKind::Namespace,
        ResourceKind::Node,
        ResourceKind::PersistentVolumeClaim,
        ResourceKind::PersistentVolume,
        ResourceKind::Pod,
        ResourceKind::ReplicaSet,
        ResourceKind::ReplicationController,
        ResourceKind::ResourceQuota,
        ResourceKind::Secret,
        ResourceKind::Service,
        ResourceKind::StatefulSet,
    ];

    /// The wire token for this kind
    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceKind::ConfigMap => "configmap",
            ResourceKind::DaemonSet => "daemonset",
            ResourceKind::Deployment => "deployment",
            ResourceKind::Event => "event",
            ResourceKind::HorizontalPodAutoscaler => "horizontalpodautoscaler",
            ResourceKind::Ingress => "ingress",
            ResourceKind::Job => "job",
            ResourceKind::LimitRange => "limitrange",
            ResourceKind::Namespace => "namespace",
            ResourceKind::Node => "node",
            ResourceKind::PersistentVolumeClaim => "persistentvolumeclaim",
            ResourceKind::PersistentVolume => "persistentvolume",
            ResourceKind::Pod => "pod",
            ResourceKind::ReplicaSet => "replicaset",
            ResourceKind::ReplicationController => "replicationcontroller",
            ResourceKind::ResourceQuota => "resourcequota",
            ResourceKind::Secret => "secret",
            ResourceKind::Service => "service",
            ResourceKind::StatefulSet => "statefulset",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResourceKind {
    type Err = ModelError;

    /// Exact, case-sensitive match against the wire tokens
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ResourceKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| ModelError::UnknownResourceKind(s.to_string()))
    }
}
