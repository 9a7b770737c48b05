//! Normalized metadata projections of orchestrator objects
//!
//! Every resource view the dashboard renders embeds an [`ObjectMeta`] copied
//! from the raw API object, a [`TypeMeta`] naming its kind, and list views
//! carry a [`ListMeta`] with the unpaged item count.

use crate::kind::ResourceKind;
use chrono::{DateTime, Utc};
use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta as K8sObjectMeta;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Metadata about an instance of a resource
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectMeta {
    /// Unique within a namespace
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,

    /// Empty for cluster-scoped objects and for the default namespace.
    /// Stored as received, never rewritten to "default".
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub namespace: String,

    /// Key/value pairs used to scope and select resources
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub labels: BTreeMap<String, String>,

    /// Unstructured key/value data set by external tooling
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub annotations: BTreeMap<String, String>,

    /// Server time at creation, RFC 3339 in UTC.
    /// Not ordered across separate objects.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creation_timestamp: Option<DateTime<Utc>>,
}

impl ObjectMeta {
    /// Create metadata with only name and namespace set
    pub fn new(name: impl Into<String>, namespace: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            namespace: namespace.into(),
            ..Default::default()
        }
    }

    /// Replace the labels
    pub fn with_labels<K, V>(mut self, labels: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.labels = labels
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        self
    }

    /// Replace the annotations
    pub fn with_annotations<K, V>(mut self, annotations: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.annotations = annotations
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        self
    }

    /// Set the creation timestamp
    pub fn with_creation_timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.creation_timestamp = Some(timestamp);
        self
    }
}

/// Copies the five projected fields out of the raw object metadata.
///
/// Absent fields become empty values. The maps are cloned, so later changes to
/// the source never show through.
impl From<&K8sObjectMeta> for ObjectMeta {
    fn from(raw: &K8sObjectMeta) -> Self {
        Self {
            name: raw.name.clone().unwrap_or_default(),
            namespace: raw.namespace.clone().unwrap_or_default(),
            labels: raw.labels.clone().unwrap_or_default(),
            annotations: raw.annotations.clone().unwrap_or_default(),
            creation_timestamp: raw.creation_timestamp.as_ref().map(|t| t.0),
        }
    }
}

impl From<K8sObjectMeta> for ObjectMeta {
    fn from(raw: K8sObjectMeta) -> Self {
        Self {
            name: raw.name.unwrap_or_default(),
            namespace: raw.namespace.unwrap_or_default(),
            labels: raw.labels.unwrap_or_default(),
            annotations: raw.annotations.unwrap_or_default(),
            creation_timestamp: raw.creation_timestamp.map(|t| t.0),
        }
    }
}

impl AsRef<ObjectMeta> for ObjectMeta {
    fn as_ref(&self) -> &ObjectMeta {
        self
    }
}

/// Type information attached to a resource view for generic consumers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TypeMeta {
    pub kind: ResourceKind,
}

impl TypeMeta {
    pub fn new(kind: ResourceKind) -> Self {
        Self { kind }
    }
}

impl From<ResourceKind> for TypeMeta {
    fn from(kind: ResourceKind) -> Self {
        Self::new(kind)
    }
}

/// Pagination information for a list of objects
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListMeta {
    /// Total number of items on the unpaged list
    pub total_items: usize,
}

impl ListMeta {
    pub fn new(total_items: usize) -> Self {
        Self { total_items }
    }

    /// Whether a page of `page_len` items can belong to this list
    pub fn covers(&self, page_len: usize) -> bool {
        self.total_items >= page_len
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use k8s_openapi::apimachinery::pkg::apis::meta::v1::Time;

    fn raw_meta() -> K8sObjectMeta {
        K8sObjectMeta {
            name: Some("pod-1".to_string()),
            namespace: Some("kube-system".to_string()),
            labels: Some(BTreeMap::from([
                ("app".to_string(), "x".to_string()),
                ("tier".to_string(), "web".to_string()),
            ])),
            annotations: Some(BTreeMap::from([(
                "deployment.kubernetes.io/revision".to_string(),
                "3".to_string(),
            )])),
            creation_timestamp: Some(Time(Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap())),
            uid: Some("0f6c1d2e".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_object_meta_copies_fields() {
        let raw = raw_meta();
        let meta = ObjectMeta::from(&raw);

        assert_eq!(Some(meta.name.clone()), raw.name);
        assert_eq!(Some(meta.namespace.clone()), raw.namespace);
        assert_eq!(Some(meta.labels.clone()), raw.labels);
        assert_eq!(Some(meta.annotations.clone()), raw.annotations);
        assert_eq!(
            meta.creation_timestamp,
            raw.creation_timestamp.as_ref().map(|t| t.0)
        );
    }

    #[test]
    fn test_object_meta_owned_and_borrowed_agree() {
        let raw = raw_meta();
        assert_eq!(ObjectMeta::from(&raw), ObjectMeta::from(raw));
    }

    #[test]
    fn test_empty_namespace_not_rewritten() {
        let raw = K8sObjectMeta {
            name: Some("pod-1".to_string()),
            namespace: Some(String::new()),
            labels: Some(BTreeMap::from([("app".to_string(), "x".to_string())])),
            ..Default::default()
        };

        let meta = ObjectMeta::from(&raw);
        assert_eq!(meta.namespace, "");
        assert_eq!(meta.labels["app"], "x");
    }

    #[test]
    fn test_missing_fields_become_empty() {
        let meta = ObjectMeta::from(&K8sObjectMeta::default());

        assert!(meta.name.is_empty());
        assert!(meta.namespace.is_empty());
        assert!(meta.labels.is_empty());
        assert!(meta.annotations.is_empty());
        assert!(meta.creation_timestamp.is_none());
    }

    #[test]
    fn test_source_mutation_does_not_leak() {
        let mut raw = raw_meta();
        let meta = ObjectMeta::from(&raw);

        raw.labels
            .as_mut()
            .unwrap()
            .insert("app".to_string(), "changed".to_string());
        raw.annotations = None;

        assert_eq!(meta.labels["app"], "x");
        assert_eq!(meta.annotations.len(), 1);
    }

    #[test]
    fn test_object_meta_wire_names() {
        let meta = ObjectMeta::from(&raw_meta());
        let json = serde_json::to_value(&meta).unwrap();

        assert_eq!(json["name"], "pod-1");
        assert_eq!(json["namespace"], "kube-system");
        assert_eq!(json["labels"]["tier"], "web");
        assert_eq!(json["annotations"]["deployment.kubernetes.io/revision"], "3");
        assert_eq!(json["creationTimestamp"], "2024-05-01T12:00:00Z");
    }

    #[test]
    fn test_object_meta_omits_empty_fields() {
        let json = serde_json::to_value(ObjectMeta::new("node-a", "")).unwrap();
        let obj = json.as_object().unwrap();

        assert_eq!(obj.len(), 1);
        assert_eq!(obj["name"], "node-a");
    }

    #[test]
    fn test_builders() {
        let ts = Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();
        let meta = ObjectMeta::new("web", "shop")
            .with_labels([("app", "web")])
            .with_annotations([("owner", "team-a")])
            .with_creation_timestamp(ts);

        assert_eq!(meta.labels["app"], "web");
        assert_eq!(meta.annotations["owner"], "team-a");
        assert_eq!(meta.creation_timestamp, Some(ts));
    }

    #[test]
    fn test_type_meta() {
        let meta = TypeMeta::new(ResourceKind::ReplicaSet);
        assert_eq!(meta.kind, ResourceKind::ReplicaSet);

        let json = serde_json::to_value(meta).unwrap();
        assert_eq!(json, serde_json::json!({ "kind": "replicaset" }));
        assert_eq!(TypeMeta::from(ResourceKind::Pod).kind, ResourceKind::Pod);
    }

    #[test]
    fn test_list_meta_always_serializes_total() {
        let json = serde_json::to_value(ListMeta::default()).unwrap();
        assert_eq!(json, serde_json::json!({ "totalItems": 0 }));

        let json = serde_json::to_value(ListMeta::new(42)).unwrap();
        assert_eq!(json["totalItems"], 42);
    }

    #[test]
    fn test_list_meta_covers_page() {
        let meta = ListMeta::new(10);
        assert!(meta.covers(0));
        assert!(meta.covers(10));
        assert!(!meta.covers(11));
    }
}
