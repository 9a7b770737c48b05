//! Label selector matching against pods

use anyhow::{bail, Result};
use chrono::Utc;
use colored::Colorize;
use dashboard_common::{filter_by_selector, ListMeta, ObjectMeta, ResourceKind, TypeMeta};
use serde::Serialize;
use std::collections::BTreeMap;
use tabled::Tabled;

use crate::output::{format_age, print_info, print_json, print_warning, OutputFormat};

/// A pod as rendered in a list response
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct PodView<'a> {
    object_meta: &'a ObjectMeta,
    type_meta: TypeMeta,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct PodListView<'a> {
    list_meta: ListMeta,
    pods: Vec<PodView<'a>>,
}

#[derive(Tabled)]
struct PodRow {
    #[tabled(rename = "Namespace")]
    namespace: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Labels")]
    labels: String,
    #[tabled(rename = "Age")]
    age: String,
}

/// Parse a `key=value[,key=value]` selector
pub fn parse_selector(input: &str) -> Result<BTreeMap<String, String>> {
    let mut selector = BTreeMap::new();

    for term in input.split(',').map(str::trim).filter(|t| !t.is_empty()) {
        let Some((key, value)) = term.split_once('=') else {
            bail!("Invalid selector term {:?}: expected key=value", term);
        };
        let key = key.trim();
        if key.is_empty() {
            bail!("Invalid selector term {:?}: empty key", term);
        }
        selector.insert(key.to_string(), value.trim().to_string());
    }

    Ok(selector)
}

fn format_labels(labels: &BTreeMap<String, String>) -> String {
    labels
        .iter()
        .map(|(k, v)| format!("{}={}", k, v))
        .collect::<Vec<_>>()
        .join(",")
}

/// List view over the matched pods; `list_meta` counts every scanned pod
fn pod_list_view<'a>(list_meta: ListMeta, matched: &[&'a ObjectMeta]) -> PodListView<'a> {
    PodListView {
        list_meta,
        pods: matched
            .iter()
            .map(|meta| PodView {
                object_meta: *meta,
                type_meta: TypeMeta::new(ResourceKind::Pod),
            })
            .collect(),
    }
}

/// Print the pods `selector` targets
pub fn show_matching_pods(
    selector: &BTreeMap<String, String>,
    pods: &[ObjectMeta],
    format: OutputFormat,
) -> Result<()> {
    let matched = filter_by_selector(selector, pods);
    let list_meta = ListMeta::new(pods.len());
    debug_assert!(list_meta.covers(matched.len()));

    match format {
        OutputFormat::Json => {
            let view = pod_list_view(list_meta, &matched);
            print_json(&view)?;
        }
        OutputFormat::Table => {
            if selector.is_empty() {
                print_warning("Empty selector targets no pods");
                return Ok(());
            }

            println!("Selector: {}", format_labels(selector).cyan());
            if matched.is_empty() {
                print_warning(&format!("No pods matched out of {} scanned", pods.len()));
                return Ok(());
            }

            let now = Utc::now();
            let rows: Vec<PodRow> = matched
                .iter()
                .map(|meta| PodRow {
                    namespace: meta.namespace.clone(),
                    name: meta.name.clone(),
                    labels: format_labels(&meta.labels),
                    age: format_age(meta.creation_timestamp, now),
                })
                .collect();

            let table = tabled::Table::new(rows)
                .with(tabled::settings::Style::rounded())
                .to_string();
            println!("{}", table);
            print_info(&format!(
                "Matched: {} of {} pods",
                matched.len(),
                list_meta.total_items
            ));
        }
    }

    Ok(())
}
