//! Inventory view types
//!
//! These mirror the resource inventories returned by the platform API. Field
//! names serialize in camelCase, which is also the key space used by query
//! conditions (`-q zoneUuid=...`).
//!
//! The platform writes `null` for unset fields. Every field declared through
//! [`view!`] reads `null` the same as a missing key: the type's default.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Deserialize a field, mapping an explicit `null` to `T::default()`
pub(crate) fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Declare a camelCase view struct whose fields all default on missing or `null`
macro_rules! view {
    (
        $(#[$meta:meta])*
        pub struct $name:ident {
            $(
                $(#[$fmeta:meta])*
                pub $field:ident: $ty:ty,
            )*
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
        #[serde(rename_all = "camelCase", default)]
        pub struct $name {
            $(
                $(#[$fmeta])*
                #[serde(deserialize_with = "crate::types::nullable")]
                pub $field: $ty,
            )*
        }
    };
}

pub(crate) use view;

view! {
    /// Availability zone
    pub struct ZoneView {
        pub uuid: String,
        pub name: String,
        pub description: String,
        pub state: String,
        #[serde(rename = "type")]
        pub kind: String,
        pub create_date: String,
    }
}

view! {
    /// Cluster of hosts sharing a hypervisor type
    pub struct ClusterView {
        pub uuid: String,
        pub name: String,
        pub description: String,
        pub state: String,
        pub hypervisor_type: String,
        pub zone_uuid: String,
        pub create_date: String,
    }
}

view! {
    /// Physical host
    pub struct HostView {
        pub uuid: String,
        pub name: String,
        pub description: String,
        pub management_ip: String,
        pub state: String,
        pub status: String,
        pub hypervisor_type: String,
        pub zone_uuid: String,
        pub cluster_uuid: String,
        pub cpu_num: i64,
        /// Total CPU capacity in Hz
        pub total_cpu_capacity: i64,
        /// Total memory in bytes
        pub total_memory_capacity: i64,
        pub available_memory_capacity: i64,
        pub create_date: String,
    }
}

view! {
    /// Address held by a NIC
    pub struct UsedIpView {
        pub uuid: String,
        pub ip: String,
        pub ip_version: i64,
        pub netmask: String,
        pub gateway: String,
    }
}

view! {
    /// Network interface attached to a VM instance or appliance
    pub struct VmNicView {
        pub uuid: String,
        pub vm_instance_uuid: String,
        pub l3_network_uuid: String,
        pub ip: String,
        pub mac: String,
        pub netmask: String,
        pub gateway: String,
        pub ip_version: i64,
        pub device_id: i64,
        #[serde(rename = "type")]
        pub kind: String,
        pub driver_type: String,
        pub used_ips: Vec<UsedIpView>,
        pub create_date: String,
    }
}

impl VmNicView {
    /// Addresses from `usedIps`, falling back to the primary `ip`
    pub fn addresses(&self) -> String {
        let used: Vec<&str> = self
            .used_ips
            .iter()
            .map(|used| used.ip.as_str())
            .filter(|ip| !ip.is_empty())
            .collect();
        if used.is_empty() {
            self.ip.clone()
        } else {
            used.join(", ")
        }
    }
}

/// Non-empty primary addresses of `nics` in attachment order
fn nic_ips(nics: &[VmNicView]) -> Vec<&str> {
    nics.iter()
        .map(|nic| nic.ip.as_str())
        .filter(|ip| !ip.is_empty())
        .collect()
}

view! {
    /// Block volume (root or data disk)
    pub struct VolumeView {
        pub uuid: String,
        pub name: String,
        pub description: String,
        #[serde(rename = "type")]
        pub kind: String,
        pub format: String,
        /// Virtual size in bytes
        pub size: i64,
        /// Allocated size in bytes
        pub actual_size: i64,
        pub state: String,
        pub status: String,
        pub vm_instance_uuid: Option<String>,
        pub primary_storage_uuid: String,
        pub create_date: String,
    }
}

view! {
    /// Virtual machine instance
    pub struct VmInstanceView {
        pub uuid: String,
        pub name: String,
        pub description: String,
        pub zone_uuid: String,
        pub cluster_uuid: String,
        pub image_uuid: String,
        pub host_uuid: String,
        pub last_host_uuid: String,
        pub instance_offering_uuid: String,
        pub root_volume_uuid: String,
        pub platform: String,
        pub architecture: String,
        pub guest_os_type: String,
        pub default_l3_network_uuid: String,
        #[serde(rename = "type")]
        pub kind: String,
        pub hypervisor_type: String,
        /// Memory in bytes
        pub memory_size: i64,
        pub cpu_num: i64,
        /// CPU speed in Hz
        pub cpu_speed: i64,
        pub allocator_strategy: String,
        pub state: String,
        pub create_date: String,
        #[serde(rename = "vmNics")]
        pub vm_nics: Vec<VmNicView>,
        pub all_volumes: Vec<VolumeView>,
    }
}

impl VmInstanceView {
    /// Non-empty NIC addresses in attachment order.
    pub fn ips(&self) -> Vec<&str> {
        nic_ips(&self.vm_nics)
    }
}

view! {
    /// Boot or ISO image
    pub struct ImageView {
        pub uuid: String,
        pub name: String,
        pub description: String,
        pub state: String,
        pub status: String,
        pub size: i64,
        pub actual_size: i64,
        pub format: String,
        pub media_type: String,
        pub platform: String,
        pub architecture: String,
        #[serde(rename = "type")]
        pub kind: String,
        pub guest_os_type: String,
        pub create_date: String,
    }
}

view! {
    /// Layer 2 network
    pub struct L2NetworkView {
        pub uuid: String,
        pub name: String,
        pub description: String,
        #[serde(rename = "type")]
        pub kind: String,
        pub vlan: i64,
        pub physical_interface: String,
        pub zone_uuid: String,
        pub create_date: String,
    }
}

view! {
    /// Layer 3 network
    pub struct L3NetworkView {
        pub uuid: String,
        pub name: String,
        pub description: String,
        #[serde(rename = "type")]
        pub kind: String,
        pub zone_uuid: String,
        pub l2_network_uuid: String,
        pub state: String,
        pub category: String,
        pub ip_version: i64,
        pub system: bool,
        pub create_date: String,
    }
}

view! {
    /// Address range carved out of an L3 network
    pub struct IpRangeView {
        pub uuid: String,
        pub name: String,
        pub description: String,
        pub l3_network_uuid: String,
        pub start_ip: String,
        pub end_ip: String,
        pub netmask: String,
        pub gateway: String,
        pub network_cidr: String,
        pub ip_version: i64,
        pub address_mode: String,
        pub prefix_len: i64,
        pub create_date: String,
    }
}

view! {
    /// Network service attached to a VIP
    pub struct VipServiceRefView {
        pub uuid: String,
        pub service_type: String,
    }
}

view! {
    /// Virtual IP
    pub struct VipView {
        pub uuid: String,
        pub name: String,
        pub description: String,
        pub l3_network_uuid: String,
        pub ip: String,
        pub state: String,
        pub gateway: String,
        pub netmask: String,
        pub prefix_len: i64,
        pub service_provider: String,
        pub peer_l3_network_uuids: Vec<String>,
        pub use_for: String,
        pub system: bool,
        pub services_refs: Vec<VipServiceRefView>,
        pub create_date: String,
    }
}

view! {
    /// Elastic IP binding a VIP to a guest NIC
    pub struct EipView {
        pub uuid: String,
        pub name: String,
        pub description: String,
        pub vip_uuid: String,
        pub vip_ip: String,
        pub vm_nic_uuid: String,
        pub guest_ip: String,
        pub state: String,
        pub create_date: String,
    }
}

view! {
    /// Primary storage backing volumes
    pub struct PrimaryStorageView {
        pub uuid: String,
        pub name: String,
        pub description: String,
        pub zone_uuid: String,
        pub url: String,
        pub total_capacity: i64,
        pub available_capacity: i64,
        pub total_physical_capacity: i64,
        pub available_physical_capacity: i64,
        pub system_used_capacity: i64,
        #[serde(rename = "type")]
        pub kind: String,
        pub state: String,
        pub status: String,
        pub attached_cluster_uuids: Vec<String>,
        /// Ceph monitors, kept schemaless
        pub mons: Vec<Value>,
        /// Ceph pools, kept schemaless
        pub pools: Vec<Value>,
        pub create_date: String,
    }
}

view! {
    /// Backup (image) storage
    pub struct BackupStorageView {
        pub uuid: String,
        pub name: String,
        pub description: String,
        pub url: String,
        #[serde(rename = "type")]
        pub kind: String,
        pub state: String,
        pub status: String,
        pub total_capacity: i64,
        pub available_capacity: i64,
        pub create_date: String,
    }
}

view! {
    /// Point-in-time copy of a volume
    pub struct VolumeSnapshotView {
        pub uuid: String,
        pub name: String,
        pub description: String,
        #[serde(rename = "type")]
        pub kind: String,
        pub volume_uuid: String,
        pub tree_uuid: String,
        pub parent_uuid: String,
        pub primary_storage_uuid: String,
        pub size: i64,
        pub state: String,
        pub status: String,
        pub latest: bool,
        pub create_date: String,
    }
}

view! {
    /// CD-ROM drive of a VM instance
    pub struct VmCdRomView {
        pub uuid: String,
        pub vm_instance_uuid: String,
        pub device_id: i64,
        pub iso_uuid: String,
        pub iso_install_path: String,
        pub name: String,
        pub description: String,
        pub create_date: String,
    }
}

view! {
    /// User tag
    pub struct TagView {
        pub uuid: String,
        pub name: String,
        pub description: String,
        #[serde(rename = "type")]
        pub kind: String,
        pub color: String,
        pub create_date: String,
    }
}

view! {
    /// Compute offering (CPU/memory template for new instances)
    pub struct InstanceOfferingView {
        pub uuid: String,
        pub name: String,
        pub description: String,
        pub cpu_num: i64,
        pub cpu_speed: i64,
        pub memory_size: i64,
        #[serde(rename = "type")]
        pub kind: String,
        pub allocator_strategy: String,
        pub state: String,
        pub create_date: String,
    }
}

view! {
    /// Data disk template
    pub struct DiskOfferingView {
        pub uuid: String,
        pub name: String,
        pub description: String,
        /// Disk size in bytes
        pub disk_size: i64,
        #[serde(rename = "type")]
        pub kind: String,
        pub allocator_strategy: String,
        pub state: String,
        pub create_date: String,
    }
}

view! {
    /// Virtual router appliance
    pub struct VirtualRouterView {
        pub uuid: String,
        pub name: String,
        pub description: String,
        pub appliance_vm_type: String,
        pub management_network_uuid: String,
        pub default_route_l3_network_uuid: String,
        pub status: String,
        pub agent_port: i64,
        pub zone_uuid: String,
        pub cluster_uuid: String,
        pub image_uuid: String,
        pub host_uuid: String,
        pub last_host_uuid: String,
        pub instance_offering_uuid: String,
        pub root_volume_uuid: String,
        pub platform: String,
        pub default_l3_network_uuid: String,
        #[serde(rename = "type")]
        pub kind: String,
        pub hypervisor_type: String,
        pub memory_size: i64,
        pub cpu_num: i64,
        pub cpu_speed: i64,
        pub allocator_strategy: String,
        pub state: String,
        pub ha_status: String,
        pub architecture: String,
        #[serde(rename = "vmNics")]
        pub vm_nics: Vec<VmNicView>,
        pub create_date: String,
    }
}

impl VirtualRouterView {
    /// Non-empty NIC addresses in attachment order.
    pub fn ips(&self) -> Vec<&str> {
        nic_ips(&self.vm_nics)
    }
}

view! {
    /// Template for virtual router appliances
    pub struct VirtualRouterOfferingView {
        pub uuid: String,
        pub name: String,
        pub description: String,
        pub cpu_num: i64,
        pub cpu_speed: i64,
        pub memory_size: i64,
        #[serde(rename = "type")]
        pub kind: String,
        pub allocator_strategy: String,
        pub sort_key: i64,
        pub state: String,
        pub management_network_uuid: String,
        pub public_network_uuid: String,
        pub zone_uuid: String,
        pub image_uuid: String,
        pub is_default: bool,
        pub reserved_memory_size: String,
        pub create_date: String,
    }
}

view! {
    /// Management server node
    pub struct ManagementNodeView {
        pub uuid: String,
        pub host_name: String,
        pub join_date: String,
        pub heart_beat: String,
    }
}

view! {
    /// Asynchronous platform job
    pub struct LongJobView {
        pub uuid: String,
        pub name: String,
        pub description: String,
        pub state: String,
        pub job_name: String,
        pub target_resource_uuid: String,
        /// Run time in milliseconds
        pub execute_time: i64,
        pub create_date: String,
    }
}

view! {
    /// Script executed inside VM instances
    pub struct VmScriptView {
        pub uuid: String,
        pub name: String,
        pub description: String,
        pub script_content: String,
        pub render_params: String,
        pub platform: String,
        pub script_type: String,
        /// Timeout in seconds
        pub script_timeout: i64,
        pub encoding_type: String,
        pub create_date: String,
    }
}

/// Schemaless global configuration entry
pub type GlobalConfig = BTreeMap<String, Value>;
