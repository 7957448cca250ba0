//! Platform inventory snapshot
//!
//! A snapshot is a single JSON or YAML document holding every resource list
//! the CLI can query. Missing lists are treated as empty.

use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

use crate::error::{Error, Result};
use crate::types::{view, *};

view! {
    /// Every resource list known to the platform
    pub struct Inventory {
        pub zones: Vec<ZoneView>,
        pub clusters: Vec<ClusterView>,
        pub hosts: Vec<HostView>,
        pub vm_instances: Vec<VmInstanceView>,
        pub images: Vec<ImageView>,
        pub volumes: Vec<VolumeView>,
        pub l2_networks: Vec<L2NetworkView>,
        pub l3_networks: Vec<L3NetworkView>,
        pub ip_ranges: Vec<IpRangeView>,
        pub vips: Vec<VipView>,
        pub eips: Vec<EipView>,
        pub vm_nics: Vec<VmNicView>,
        pub primary_storages: Vec<PrimaryStorageView>,
        pub backup_storages: Vec<BackupStorageView>,
        pub volume_snapshots: Vec<VolumeSnapshotView>,
        pub vm_cd_roms: Vec<VmCdRomView>,
        pub tags: Vec<TagView>,
        pub instance_offerings: Vec<InstanceOfferingView>,
        pub disk_offerings: Vec<DiskOfferingView>,
        pub virtual_routers: Vec<VirtualRouterView>,
        pub virtual_router_offerings: Vec<VirtualRouterOfferingView>,
        pub management_nodes: Vec<ManagementNodeView>,
        pub long_jobs: Vec<LongJobView>,
        pub vm_scripts: Vec<VmScriptView>,
        pub global_configs: Vec<GlobalConfig>,
    }
}

/// Snapshot encoding, chosen by file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnapshotFormat {
    Json,
    Yaml,
}

impl SnapshotFormat {
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();

        match ext.as_str() {
            "json" => Ok(SnapshotFormat::Json),
            "yaml" | "yml" => Ok(SnapshotFormat::Yaml),
            _ => Err(Error::UnsupportedFormat(format!(".{}", ext))),
        }
    }
}

impl Inventory {
    /// Parse a snapshot from its textual form
    pub fn parse(content: &str, format: SnapshotFormat) -> Result<Self> {
        let inventory = match format {
            SnapshotFormat::Json => serde_json::from_str(content)?,
            SnapshotFormat::Yaml => serde_yaml::from_str(content)?,
        };
        Ok(inventory)
    }

    /// Load a snapshot file, picking the decoder from the extension
    pub fn load(path: &Path) -> Result<Self> {
        let format = SnapshotFormat::from_path(path)?;
        let content = std::fs::read_to_string(path)?;
        let inventory = Self::parse(&content, format)?;
        debug!(
            path = %path.display(),
            instances = inventory.vm_instances.len(),
            images = inventory.images.len(),
            "loaded inventory snapshot"
        );
        Ok(inventory)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SNAPSHOT: &str = r#"
zones:
  - uuid: z1
    name: zone-a
vmInstances:
  - uuid: u1
    name: vm1
    state: Running
    memorySize: 2147483648
    cpuNum: 2
    vmNics:
      - ip: 10.0.0.5
      - ip: ""
globalConfigs:
  - category: vm
    name: cleanTraffic
    value: "false"
"#;

    #[test]
    fn test_parse_yaml_snapshot() {
        let inv = Inventory::parse(SNAPSHOT, SnapshotFormat::Yaml).unwrap();
        assert_eq!(inv.zones.len(), 1);
        assert_eq!(inv.vm_instances[0].name, "vm1");
        assert_eq!(inv.vm_instances[0].cpu_num, 2);
        assert_eq!(inv.vm_instances[0].ips(), vec!["10.0.0.5"]);
        assert!(inv.images.is_empty());
        assert_eq!(inv.global_configs[0]["name"], "cleanTraffic");
    }

    #[test]
    fn test_load_json_file() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(file, r#"{{"images": [{{"uuid": "i1", "name": "centos", "type": "RootVolumeTemplate"}}]}}"#).unwrap();

        let inv = Inventory::load(file.path()).unwrap();
        assert_eq!(inv.images.len(), 1);
        assert_eq!(inv.images[0].kind, "RootVolumeTemplate");
    }

    #[test]
    fn test_null_lists_and_fields() {
        let content = r#"{
            "vmInstances": [{"uuid": "u1", "lastHostUuid": null, "cpuSpeed": null}],
            "tags": null,
            "vmScripts": [{"name": "init", "scriptTimeout": null}]
        }"#;
        let inv = Inventory::parse(content, SnapshotFormat::Json).unwrap();
        assert_eq!(inv.vm_instances[0].uuid, "u1");
        assert_eq!(inv.vm_instances[0].last_host_uuid, "");
        assert_eq!(inv.vm_instances[0].cpu_speed, 0);
        assert!(inv.tags.is_empty());
        assert_eq!(inv.vm_scripts[0].script_timeout, 0);
    }

    #[test]
    fn test_unsupported_extension() {
        let file = tempfile::Builder::new().suffix(".txt").tempfile().unwrap();
        let err = Inventory::load(file.path()).unwrap_err();
        assert!(matches!(err, Error::UnsupportedFormat(_)));
    }

    #[test]
    fn test_extension_is_case_insensitive() {
        assert_eq!(
            SnapshotFormat::from_path(Path::new("inventory.YML")).unwrap(),
            SnapshotFormat::Yaml
        );
    }
}
