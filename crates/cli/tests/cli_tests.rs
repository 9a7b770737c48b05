//! CLI integration tests

use std::io::Write;
use std::process::{Command, Output};
use tempfile::NamedTempFile;

fn dashctl(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_dashctl"))
        .args(args)
        .env_remove("DASHBOARD_HISTORY_LIMIT")
        .output()
        .expect("Failed to execute command")
}

fn write_temp(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

const PODS: &str = r#"{
  "apiVersion": "v1",
  "kind": "List",
  "items": [
    {"apiVersion": "v1", "kind": "Pod",
     "metadata": {"name": "web-1", "namespace": "shop",
                  "labels": {"app": "web", "tier": "frontend"},
                  "creationTimestamp": "2024-05-01T12:00:00Z"}},
    {"apiVersion": "v1", "kind": "Pod",
     "metadata": {"name": "db-0", "namespace": "shop", "labels": {"app": "db"}}},
    {"apiVersion": "v1", "kind": "Pod",
     "metadata": {"name": "web-2", "namespace": "", "labels": {"app": "web"}}}
  ]
}"#;

/// Test that the CLI shows help
#[test]
fn test_cli_help() {
    let output = dashctl(&["--help"]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "CLI help should succeed");
    assert!(stdout.contains("kinds"), "Should show kinds command");
    assert!(stdout.contains("match"), "Should show match command");
    assert!(stdout.contains("metrics"), "Should show metrics command");
}

/// Test that the CLI shows version
#[test]
fn test_cli_version() {
    let output = dashctl(&["--version"]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "CLI version should succeed");
    assert!(stdout.contains("dashctl"), "Should show binary name");
}

#[test]
fn test_kinds_json() {
    let output = dashctl(&["--format", "json", "kinds"]);
    assert!(output.status.success());

    let kinds: Vec<String> = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(kinds.len(), 19);
    assert_eq!(kinds[0], "configmap");
    assert!(kinds.contains(&"horizontalpodautoscaler".to_string()));
}

#[test]
fn test_match_from_file_json() {
    let pods = write_temp(PODS);
    let path = pods.path().to_str().unwrap();

    let output = dashctl(&["--format", "json", "match", "-l", "app=web", "--file", path]);
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["listMeta"]["totalItems"], 3);

    let pods = json["pods"].as_array().unwrap();
    assert_eq!(pods.len(), 2);
    assert_eq!(pods[0]["objectMeta"]["name"], "web-1");
    assert_eq!(pods[0]["objectMeta"]["creationTimestamp"], "2024-05-01T12:00:00Z");
    assert_eq!(pods[0]["typeMeta"]["kind"], "pod");
    assert_eq!(pods[1]["objectMeta"]["name"], "web-2");
    assert!(pods[1]["objectMeta"].get("namespace").is_none());
}

#[test]
fn test_match_requires_every_selector_entry() {
    let pods = write_temp(PODS);
    let path = pods.path().to_str().unwrap();

    let output = dashctl(&[
        "--format",
        "json",
        "match",
        "-l",
        "app=web,tier=frontend",
        "--file",
        path,
    ]);
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["listMeta"]["totalItems"], 3);
    assert_eq!(json["pods"].as_array().unwrap().len(), 1);
    assert_eq!(json["pods"][0]["objectMeta"]["name"], "web-1");
}

#[test]
fn test_match_table_output() {
    let pods = write_temp(PODS);
    let path = pods.path().to_str().unwrap();

    let output = dashctl(&["--format", "table", "match", "-l", "app=db", "--file", path]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success());
    assert!(stdout.contains("db-0"));
    assert!(!stdout.contains("web-1"));
}

#[test]
fn test_match_rejects_malformed_selector() {
    let pods = write_temp(PODS);
    let path = pods.path().to_str().unwrap();

    let output = dashctl(&["match", "-l", "app", "--file", path]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("key=value"));
}

#[test]
fn test_metrics_json() {
    let samples = write_temp(
        r#"[
          {"namespace": "shop", "pod": "web-1", "resource": "cpu", "timestamp": "2024-05-01T12:00:00Z", "value": 100},
          {"namespace": "shop", "pod": "web-1", "resource": "cpu", "timestamp": "2024-05-01T12:01:00Z", "value": 200},
          {"namespace": "shop", "pod": "web-1", "resource": "cpu", "timestamp": "2024-05-01T12:02:00Z", "value": 300},
          {"namespace": "shop", "pod": "web-1", "resource": "cpu", "value": 300},
          {"namespace": "shop", "pod": "web-2", "resource": "memory", "value": 0}
        ]"#,
    );
    let path = samples.path().to_str().unwrap();

    let output = dashctl(&[
        "--format",
        "json",
        "metrics",
        "--file",
        path,
        "--history-limit",
        "2",
    ]);
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let web1 = &json["metricsMap"]["shop"]["web-1"];
    assert_eq!(web1["cpuUsage"], 300);
    assert_eq!(web1["cpuUsageHistory"].as_array().unwrap().len(), 2);
    assert_eq!(web1["cpuUsageHistory"][0]["value"], 200);
    assert!(web1.get("memoryUsage").is_none());

    let web2 = &json["metricsMap"]["shop"]["web-2"];
    assert_eq!(web2["memoryUsage"], 0);
    assert!(web2.get("cpuUsage").is_none());

    assert_eq!(json["total"]["cpuUsage"], 300);
    assert_eq!(json["total"]["memoryUsage"], 0);
}
