// Binary-level tests for cloudctl output and projection

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use predicates::str::contains;
use serde_json::Value;
use tempfile::TempDir;

const INVENTORY: &str = r##"{
  "zones": [
    { "uuid": "z-1", "name": "zone-a", "state": "Enabled", "type": "zstack" }
  ],
  "hosts": [
    { "uuid": "h-1", "name": "host-a", "zoneUuid": "z-1", "managementIp": "172.16.0.10" }
  ],
  "vmInstances": [
    {
      "uuid": "u-vm1",
      "name": "vm1",
      "state": "Running",
      "zoneUuid": "z-1",
      "hostUuid": "h-1",
      "memorySize": 2147483648,
      "cpuNum": 2,
      "createDate": "2025-03-01T08:15:30Z",
      "vmNics": [ { "ip": "10.0.0.5" } ]
    },
    {
      "uuid": "u-vm2",
      "name": "vm2",
      "state": "Stopped",
      "zoneUuid": "z-2",
      "lastHostUuid": null,
      "cpuSpeed": null,
      "memorySize": 1073741824,
      "cpuNum": 1
    }
  ],
  "vmNics": [
    { "uuid": "n-1", "vmInstanceUuid": "u-vm1", "ip": "10.0.0.5", "usedIps": [ { "ip": "10.0.0.5" }, { "ip": "fd00::5" } ] }
  ],
  "managementNodes": [
    { "uuid": "mn-uuid", "hostName": "mn-1", "joinDate": "2025-01-02T03:04:05Z" }
  ],
  "vmScripts": [
    { "uuid": "s-1", "name": "bootstrap", "scriptContent": "#!/bin/sh\necho 0123456789012345678901234567890123456789" }
  ],
  "tags": null,
  "globalConfigs": [
    { "category": "vm", "name": "cleanTraffic", "value": "false" },
    { "category": "host", "name": "ping.interval", "value": "60" }
  ]
}"##;

struct Fixture {
    dir: TempDir,
}

impl Fixture {
    fn new() -> Self {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("inventory.json"), INVENTORY).unwrap();
        Self { dir }
    }

    /// Command with an isolated config file and the fixture inventory
    fn cmd(&self) -> Command {
        let mut cmd = self.bare_cmd();
        cmd.env("CLOUDCTL_INVENTORY", self.dir.path().join("inventory.json"));
        cmd
    }

    /// Command with an isolated config file and no inventory
    fn bare_cmd(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("cloudctl");
        cmd.env("CLOUDCTL_CONFIG", self.dir.path().join("config.toml"))
            .env_remove("CLOUDCTL_INVENTORY")
            .env_remove("RUST_LOG")
            .env("NO_COLOR", "1");
        cmd
    }
}

fn stdout_of(cmd: &mut Command) -> String {
    let output = cmd.assert().success().get_output().stdout.clone();
    String::from_utf8(output).unwrap()
}

#[test]
fn test_table_with_fields() {
    let fx = Fixture::new();
    let out = stdout_of(fx.cmd().args(["get", "instances", "--fields", "name,state"]));

    let header = out.lines().find(|l| l.contains("name")).unwrap();
    assert!(header.contains("state"));
    assert!(!header.contains("uuid"));
    assert!(out.lines().any(|l| l.contains("vm1") && l.contains("Running")));
    assert!(out.lines().any(|l| l.contains("vm2") && l.contains("Stopped")));
    assert!(!out.contains("u-vm1"));
}

#[test]
fn test_json_output_drops_filtered_fields() {
    let fx = Fixture::new();
    let out = stdout_of(fx.cmd().args(["get", "instances", "-o", "json", "--fields", "uuid,memorySize"]));

    let rows: Vec<Value> = serde_json::from_str(&out).unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0], serde_json::json!({ "uuid": "u-vm1", "memorySize": "2.00 GB" }));
}

#[test]
fn test_yaml_output() {
    let fx = Fixture::new();
    fx.cmd()
        .args(["get", "zones", "--output", "YAML", "--fields", "name"])
        .assert()
        .success()
        .stdout("- name: zone-a\n");
}

#[test]
fn test_unknown_format_falls_back_to_table() {
    let fx = Fixture::new();
    fx.cmd()
        .args(["get", "zones", "-o", "bogus"])
        .assert()
        .success()
        .stdout(contains("zone-a").and(contains("│")));
}

#[test]
fn test_empty_listing() {
    let fx = Fixture::new();
    fx.cmd()
        .args(["get", "volumes"])
        .assert()
        .success()
        .stdout("No resources found.\n");
}

#[test]
fn test_name_and_query_filters() {
    let fx = Fixture::new();
    let out = stdout_of(fx.cmd().args(["get", "instances", "vm2", "-o", "json", "--fields", "name"]));
    assert_eq!(out.trim(), "[\n  {\n    \"name\": \"vm2\"\n  }\n]");

    let out = stdout_of(fx.cmd().args(["get", "instances", "-q", "state!=Stopped", "-o", "text", "--fields", "name"]));
    assert_eq!(out, "name: vm1\n");
}

#[test]
fn test_zone_context_resolves_name() {
    let fx = Fixture::new();
    let out = stdout_of(fx.cmd().args(["get", "instances", "--zone", "zone-a", "-o", "text", "--fields", "name"]));
    assert_eq!(out, "name: vm1\n");

    fx.cmd()
        .args(["get", "instances", "--zone", "zone-z"])
        .assert()
        .failure()
        .stderr(contains("zone with name or UUID 'zone-z' not found"));
}

#[test]
fn test_count() {
    let fx = Fixture::new();
    fx.cmd()
        .args(["get", "instances", "--count", "--limit", "1"])
        .assert()
        .success()
        .stdout("Total: 2\n");
}

#[test]
fn test_global_configs_by_category() {
    let fx = Fixture::new();
    let out = stdout_of(fx.cmd().args(["get", "global-configs", "--category", "host", "-o", "json"]));
    let rows: Vec<Value> = serde_json::from_str(&out).unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["name"], "ping.interval");
}

#[test]
fn test_describe_by_name() {
    let fx = Fixture::new();
    let out = stdout_of(fx.cmd().args(["describe", "vm", "vm1"]));
    assert!(out.contains("Field"));
    assert!(out.lines().any(|l| l.contains("ips") && l.contains("10.0.0.5")));
    assert!(out.lines().any(|l| l.contains("createDate") && l.contains("2025-03-01 08:15:30")));
}

#[test]
fn test_summary() {
    let fx = Fixture::new();
    let out = stdout_of(fx.cmd().args(["summary", "-o", "json"]));
    let counts: Value = serde_json::from_str(&out).unwrap();
    assert_eq!(counts["instances"], 2);
    assert_eq!(counts["hosts"], 1);
    assert_eq!(counts["volumes"], 0);
    assert_eq!(counts["managementNodes"], 1);
    assert_eq!(counts["tags"], 0);
}

#[test]
fn test_all_fields_unmatched_keeps_one_row_per_record() {
    let fx = Fixture::new();
    let assert = fx
        .cmd()
        .args(["get", "instances", "--fields", "nmae"])
        .assert()
        .success()
        .stderr(contains("nmae"));
    let out = String::from_utf8(assert.get_output().stdout.clone()).unwrap();

    // header plus one empty row per instance
    assert_eq!(out.lines().filter(|l| l.starts_with('│')).count(), 3);
    assert!(!out.contains("vm1"));
}

#[test]
fn test_null_fields_read_as_defaults() {
    let fx = Fixture::new();
    let out = stdout_of(fx.cmd().args(["get", "instances", "vm2", "-o", "json", "--fields", "lastHostUuid,cpuSpeed"]));
    let rows: Vec<Value> = serde_json::from_str(&out).unwrap();
    assert_eq!(rows, vec![serde_json::json!({ "lastHostUuid": "", "cpuSpeed": 0 })]);

    fx.cmd()
        .args(["get", "tags"])
        .assert()
        .success()
        .stdout("No resources found.\n");
}

#[test]
fn test_pagination_prints_total_then_page() {
    let fx = Fixture::new();
    for flag in ["--pagination", "--reply-with-count"] {
        let out = stdout_of(fx.cmd().args(["get", "instances", flag, "--limit", "1", "-o", "text", "--fields", "name"]));
        assert_eq!(out, "Total: 2\nname: vm1\n");
    }
}

#[test]
fn test_group_by_counts_per_value() {
    let fx = Fixture::new();
    let out = stdout_of(fx.cmd().args(["get", "instances", "--group-by", "zoneUuid", "-o", "json"]));
    let groups: Value = serde_json::from_str(&out).unwrap();
    assert_eq!(
        groups,
        serde_json::json!([
            { "zoneUuid": "z-1", "count": 1 },
            { "zoneUuid": "z-2", "count": 1 }
        ])
    );
}

#[test]
fn test_management_nodes_match_host_name() {
    let fx = Fixture::new();
    let out = stdout_of(fx.cmd().args(["get", "management-nodes", "mn-1", "-o", "text"]));
    assert!(out.contains("uuid: mn-uuid"));
    assert!(out.contains("joinDate: 2025-01-02 03:04:05"));

    let out = stdout_of(fx.cmd().args(["get", "management-nodes", "mn-uuid", "-o", "json"]));
    assert_eq!(out.trim(), "[]");
}

#[test]
fn test_nics_join_used_ips() {
    let fx = Fixture::new();
    let out = stdout_of(fx.cmd().args(["get", "nics", "-o", "text", "--fields", "ip,vmInstanceUuid"]));
    assert_eq!(out, "vmInstanceUuid: u-vm1\nip: 10.0.0.5, fd00::5\n");
}

#[test]
fn test_vm_scripts_truncate_unless_full() {
    let fx = Fixture::new();
    let out = stdout_of(fx.cmd().args(["get", "vm-scripts", "-o", "json", "--fields", "scriptContent"]));
    let rows: Vec<Value> = serde_json::from_str(&out).unwrap();
    let preview = rows[0]["scriptContent"].as_str().unwrap();
    assert_eq!(preview.chars().count(), 53);
    assert!(preview.ends_with("..."));

    let out = stdout_of(fx.cmd().args(["get", "vm-scripts", "bootstrap", "--show-full-script", "-o", "json"]));
    let rows: Vec<Value> = serde_json::from_str(&out).unwrap();
    assert!(rows[0]["scriptContent"].as_str().unwrap().ends_with("0123456789"));
}

#[test]
fn test_unmatched_fields_warn_on_stderr() {
    let fx = Fixture::new();
    fx.cmd()
        .args(["get", "zones", "-o", "json", "--fields", "name,nosuch"])
        .assert()
        .success()
        .stdout(contains("zone-a"))
        .stderr(contains("nosuch"));
}

#[test]
fn test_missing_inventory_reports_error() {
    let fx = Fixture::new();
    fx.bare_cmd()
        .args(["get", "zones"])
        .assert()
        .failure()
        .stderr(contains("no inventory configured"));
}

#[test]
fn test_config_set_then_view() {
    let fx = Fixture::new();
    fx.bare_cmd()
        .args(["config", "set", "output", "json"])
        .assert()
        .success();

    let out = stdout_of(fx.bare_cmd().args(["config", "view"]));
    let config: Value = serde_json::from_str(&out).unwrap();
    assert_eq!(config["output"], "json");

    // config output applies to every command
    let out = stdout_of(fx.cmd().args(["get", "zones", "--fields", "name"]));
    assert_eq!(out, "[\n  {\n    \"name\": \"zone-a\"\n  }\n]\n");
}
