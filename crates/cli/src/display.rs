//! Display wrappers for inventory views
//!
//! Each wrapper flattens a view into the columns shown by `get` and
//! `describe`, with sizes and timestamps already humanized.

use serde_json::{json, Value};

use cloudctl_common::units::{format_cpu_capacity, format_disk_size, format_memory_size, format_timestamp};
use cloudctl_common::{
    BackupStorageView, ClusterView, DiskOfferingView, EipView, HostView, ImageView,
    InstanceOfferingView, IpRangeView, L2NetworkView, L3NetworkView, LongJobView,
    ManagementNodeView, PrimaryStorageView, TagView, VipView, VirtualRouterOfferingView,
    VirtualRouterView, VmCdRomView, VmInstanceView, VmNicView, VmScriptView, VolumeSnapshotView,
    VolumeView, ZoneView,
};

use crate::output::{Field, TableDisplay};

/// Characters of script content shown without `--show-full-script`
pub const SCRIPT_PREVIEW_CHARS: usize = 50;

/// Declare a display wrapper. Its field table and `row()` are both generated
/// from the one column list, in declaration order.
macro_rules! display {
    (
        $(#[$meta:meta])*
        pub struct $name:ident {
            $($field:ident: $ty:ty => $display:literal,)*
        }
    ) => {
        $(#[$meta])*
        pub struct $name {
            $(pub $field: $ty,)*
        }

        impl TableDisplay for $name {
            fn fields() -> &'static [Field] {
                static FIELDS: &[Field] = &[$(Field::new(stringify!($field), $display)),*];
                FIELDS
            }

            fn row(&self) -> Vec<Value> {
                vec![$(json!(self.$field)),*]
            }
        }
    };
}

display! {
    /// Zone display wrapper
    pub struct ZoneDisplay {
        name: String => "name",
        uuid: String => "uuid",
        state: String => "state",
        kind: String => "type",
        description: String => "description",
        create_date: String => "createDate",
    }
}

impl From<ZoneView> for ZoneDisplay {
    fn from(zone: ZoneView) -> Self {
        Self {
            name: zone.name,
            uuid: zone.uuid,
            state: zone.state,
            kind: zone.kind,
            description: zone.description,
            create_date: format_timestamp(&zone.create_date),
        }
    }
}

display! {
    /// Cluster display wrapper
    pub struct ClusterDisplay {
        name: String => "name",
        uuid: String => "uuid",
        state: String => "state",
        hypervisor_type: String => "hypervisorType",
        zone_uuid: String => "zoneUuid",
        create_date: String => "createDate",
    }
}

impl From<ClusterView> for ClusterDisplay {
    fn from(cluster: ClusterView) -> Self {
        Self {
            name: cluster.name,
            uuid: cluster.uuid,
            state: cluster.state,
            hypervisor_type: cluster.hypervisor_type,
            zone_uuid: cluster.zone_uuid,
            create_date: format_timestamp(&cluster.create_date),
        }
    }
}

display! {
    /// Host display wrapper
    pub struct HostDisplay {
        name: String => "name",
        uuid: String => "uuid",
        management_ip: String => "managementIp",
        state: String => "state",
        status: String => "status",
        hypervisor_type: String => "hypervisorType",
        zone_uuid: String => "zoneUuid",
        cluster_uuid: String => "clusterUuid",
        cpu_num: i64 => "cpuNum",
        cpu_capacity: String => "cpuCapacity",
        total_memory: String => "totalMemory",
        available_memory: String => "availableMemory",
    }
}

impl From<HostView> for HostDisplay {
    fn from(host: HostView) -> Self {
        Self {
            name: host.name,
            uuid: host.uuid,
            management_ip: host.management_ip,
            state: host.state,
            status: host.status,
            hypervisor_type: host.hypervisor_type,
            zone_uuid: host.zone_uuid,
            cluster_uuid: host.cluster_uuid,
            cpu_num: host.cpu_num,
            cpu_capacity: format_cpu_capacity(host.total_cpu_capacity),
            total_memory: format_memory_size(host.total_memory_capacity),
            available_memory: format_memory_size(host.available_memory_capacity),
        }
    }
}

display! {
    /// VM instance display wrapper
    pub struct InstanceDisplay {
        name: String => "name",
        uuid: String => "uuid",
        description: String => "description",
        zone_uuid: String => "zoneUuid",
        cluster_uuid: String => "clusterUuid",
        image_uuid: String => "imageUuid",
        host_uuid: String => "hostUuid",
        last_host_uuid: String => "lastHostUuid",
        instance_offering_uuid: String => "instanceOfferingUuid",
        root_volume_uuid: String => "rootVolumeUuid",
        platform: String => "platform",
        architecture: String => "architecture",
        guest_os_type: String => "guestOsType",
        default_l3_network_uuid: String => "defaultL3NetworkUuid",
        kind: String => "type",
        hypervisor_type: String => "hypervisorType",
        memory_size: String => "memorySize",
        cpu_num: i64 => "cpuNum",
        cpu_speed: i64 => "cpuSpeed",
        allocator_strategy: String => "allocatorStrategy",
        state: String => "state",
        ips: String => "ips",
        volumes: String => "volumes",
        create_date: String => "createDate",
    }
}

impl From<VmInstanceView> for InstanceDisplay {
    fn from(vm: VmInstanceView) -> Self {
        let ips = vm.ips().join(", ");
        let volumes = vm
            .all_volumes
            .iter()
            .map(|vol| vol.name.as_str())
            .collect::<Vec<_>>()
            .join(", ");

        Self {
            ips,
            volumes,
            memory_size: format_memory_size(vm.memory_size),
            create_date: format_timestamp(&vm.create_date),
            name: vm.name,
            uuid: vm.uuid,
            description: vm.description,
            zone_uuid: vm.zone_uuid,
            cluster_uuid: vm.cluster_uuid,
            image_uuid: vm.image_uuid,
            host_uuid: vm.host_uuid,
            last_host_uuid: vm.last_host_uuid,
            instance_offering_uuid: vm.instance_offering_uuid,
            root_volume_uuid: vm.root_volume_uuid,
            platform: vm.platform,
            architecture: vm.architecture,
            guest_os_type: vm.guest_os_type,
            default_l3_network_uuid: vm.default_l3_network_uuid,
            kind: vm.kind,
            hypervisor_type: vm.hypervisor_type,
            cpu_num: vm.cpu_num,
            cpu_speed: vm.cpu_speed,
            allocator_strategy: vm.allocator_strategy,
            state: vm.state,
        }
    }
}

display! {
    /// Image display wrapper
    pub struct ImageDisplay {
        name: String => "name",
        uuid: String => "uuid",
        state: String => "state",
        status: String => "status",
        size: String => "size",
        actual_size: String => "actualSize",
        format: String => "format",
        media_type: String => "mediaType",
        platform: String => "platform",
        architecture: String => "architecture",
        kind: String => "type",
        guest_os_type: String => "guestOsType",
        create_date: String => "createDate",
    }
}

impl From<ImageView> for ImageDisplay {
    fn from(image: ImageView) -> Self {
        Self {
            name: image.name,
            uuid: image.uuid,
            state: image.state,
            status: image.status,
            size: format_disk_size(image.size),
            actual_size: format_disk_size(image.actual_size),
            format: image.format,
            media_type: image.media_type,
            platform: image.platform,
            architecture: image.architecture,
            kind: image.kind,
            guest_os_type: image.guest_os_type,
            create_date: format_timestamp(&image.create_date),
        }
    }
}

display! {
    /// Volume display wrapper
    pub struct VolumeDisplay {
        name: String => "name",
        uuid: String => "uuid",
        kind: String => "type",
        format: String => "format",
        size: String => "size",
        actual_size: String => "actualSize",
        state: String => "state",
        status: String => "status",
        vm_instance_uuid: String => "vmInstanceUuid",
        primary_storage_uuid: String => "primaryStorageUuid",
        create_date: String => "createDate",
    }
}

impl From<VolumeView> for VolumeDisplay {
    fn from(volume: VolumeView) -> Self {
        Self {
            name: volume.name,
            uuid: volume.uuid,
            kind: volume.kind,
            format: volume.format,
            size: format_disk_size(volume.size),
            actual_size: format_disk_size(volume.actual_size),
            state: volume.state,
            status: volume.status,
            vm_instance_uuid: volume.vm_instance_uuid.unwrap_or_default(),
            primary_storage_uuid: volume.primary_storage_uuid,
            create_date: format_timestamp(&volume.create_date),
        }
    }
}

display! {
    /// L2 network display wrapper
    pub struct L2NetworkDisplay {
        name: String => "name",
        uuid: String => "uuid",
        kind: String => "type",
        vlan: i64 => "vlan",
        physical_interface: String => "physicalInterface",
        zone_uuid: String => "zoneUuid",
    }
}

impl From<L2NetworkView> for L2NetworkDisplay {
    fn from(net: L2NetworkView) -> Self {
        Self {
            name: net.name,
            uuid: net.uuid,
            kind: net.kind,
            vlan: net.vlan,
            physical_interface: net.physical_interface,
            zone_uuid: net.zone_uuid,
        }
    }
}

display! {
    /// L3 network display wrapper
    pub struct L3NetworkDisplay {
        name: String => "name",
        uuid: String => "uuid",
        kind: String => "type",
        category: String => "category",
        state: String => "state",
        ip_version: i64 => "ipVersion",
        system: bool => "system",
        zone_uuid: String => "zoneUuid",
        l2_network_uuid: String => "l2NetworkUuid",
        create_date: String => "createDate",
    }
}

impl From<L3NetworkView> for L3NetworkDisplay {
    fn from(net: L3NetworkView) -> Self {
        Self {
            name: net.name,
            uuid: net.uuid,
            kind: net.kind,
            category: net.category,
            state: net.state,
            ip_version: net.ip_version,
            system: net.system,
            zone_uuid: net.zone_uuid,
            l2_network_uuid: net.l2_network_uuid,
            create_date: format_timestamp(&net.create_date),
        }
    }
}

display! {
    /// IP range display wrapper
    pub struct IpRangeDisplay {
        name: String => "name",
        uuid: String => "uuid",
        l3_network_uuid: String => "l3NetworkUuid",
        start_ip: String => "startIp",
        end_ip: String => "endIp",
        netmask: String => "netmask",
        gateway: String => "gateway",
        network_cidr: String => "networkCidr",
        ip_version: i64 => "ipVersion",
        address_mode: String => "addressMode",
        prefix_len: i64 => "prefixLen",
    }
}

impl From<IpRangeView> for IpRangeDisplay {
    fn from(range: IpRangeView) -> Self {
        Self {
            name: range.name,
            uuid: range.uuid,
            l3_network_uuid: range.l3_network_uuid,
            start_ip: range.start_ip,
            end_ip: range.end_ip,
            netmask: range.netmask,
            gateway: range.gateway,
            network_cidr: range.network_cidr,
            ip_version: range.ip_version,
            address_mode: range.address_mode,
            prefix_len: range.prefix_len,
        }
    }
}

display! {
    /// VIP display wrapper
    pub struct VipDisplay {
        name: String => "name",
        uuid: String => "uuid",
        description: String => "description",
        l3_network_uuid: String => "l3NetworkUuid",
        ip: String => "ip",
        state: String => "state",
        gateway: String => "gateway",
        netmask: String => "netmask",
        prefix_len: i64 => "prefixLen",
        service_provider: String => "serviceProvider",
        peer_l3_network_uuids: String => "peerL3NetworkUuids",
        use_for: String => "useFor",
        system: bool => "system",
        services_types: String => "servicesTypes",
    }
}

impl From<VipView> for VipDisplay {
    fn from(vip: VipView) -> Self {
        let services: Vec<String> = vip
            .services_refs
            .into_iter()
            .map(|service| service.service_type)
            .collect();

        Self {
            name: vip.name,
            uuid: vip.uuid,
            description: vip.description,
            l3_network_uuid: vip.l3_network_uuid,
            ip: vip.ip,
            state: vip.state,
            gateway: vip.gateway,
            netmask: vip.netmask,
            prefix_len: vip.prefix_len,
            service_provider: vip.service_provider,
            peer_l3_network_uuids: vip.peer_l3_network_uuids.join(","),
            use_for: vip.use_for,
            system: vip.system,
            services_types: services.join(","),
        }
    }
}

display! {
    /// Elastic IP display wrapper
    pub struct EipDisplay {
        name: String => "name",
        uuid: String => "uuid",
        vip_ip: String => "vipIp",
        guest_ip: String => "guestIp",
        state: String => "state",
        vm_nic_uuid: String => "vmNicUuid",
        vip_uuid: String => "vipUuid",
        description: String => "description",
    }
}

impl From<EipView> for EipDisplay {
    fn from(eip: EipView) -> Self {
        Self {
            name: eip.name,
            uuid: eip.uuid,
            vip_ip: eip.vip_ip,
            guest_ip: eip.guest_ip,
            state: eip.state,
            vm_nic_uuid: eip.vm_nic_uuid,
            vip_uuid: eip.vip_uuid,
            description: eip.description,
        }
    }
}

display! {
    /// VM NIC display wrapper
    pub struct NicDisplay {
        uuid: String => "uuid",
        vm_instance_uuid: String => "vmInstanceUuid",
        l3_network_uuid: String => "l3NetworkUuid",
        ip: String => "ip",
        mac: String => "mac",
        netmask: String => "netmask",
        gateway: String => "gateway",
        ip_version: i64 => "ipVersion",
        device_id: i64 => "deviceId",
        kind: String => "type",
        driver_type: String => "driverType",
    }
}

impl From<VmNicView> for NicDisplay {
    fn from(nic: VmNicView) -> Self {
        Self {
            ip: nic.addresses(),
            uuid: nic.uuid,
            vm_instance_uuid: nic.vm_instance_uuid,
            l3_network_uuid: nic.l3_network_uuid,
            mac: nic.mac,
            netmask: nic.netmask,
            gateway: nic.gateway,
            ip_version: nic.ip_version,
            device_id: nic.device_id,
            kind: nic.kind,
            driver_type: nic.driver_type,
        }
    }
}

display! {
    /// Primary storage display wrapper
    pub struct PrimaryStorageDisplay {
        name: String => "name",
        uuid: String => "uuid",
        description: String => "description",
        zone_uuid: String => "zoneUuid",
        url: String => "url",
        total_capacity: String => "totalCapacity",
        available_capacity: String => "availableCapacity",
        total_physical_capacity: String => "totalPhysicalCapacity",
        available_physical_capacity: String => "availablePhysicalCapacity",
        system_used_capacity: String => "systemUsedCapacity",
        kind: String => "type",
        state: String => "state",
        status: String => "status",
        attached_cluster_uuids: String => "attachedClusterUuids",
        mon_count: usize => "monCount",
        pool_count: usize => "poolCount",
    }
}

impl From<PrimaryStorageView> for PrimaryStorageDisplay {
    fn from(storage: PrimaryStorageView) -> Self {
        Self {
            name: storage.name,
            uuid: storage.uuid,
            description: storage.description,
            zone_uuid: storage.zone_uuid,
            url: storage.url,
            total_capacity: format_disk_size(storage.total_capacity),
            available_capacity: format_disk_size(storage.available_capacity),
            total_physical_capacity: format_disk_size(storage.total_physical_capacity),
            available_physical_capacity: format_disk_size(storage.available_physical_capacity),
            system_used_capacity: format_disk_size(storage.system_used_capacity),
            kind: storage.kind,
            state: storage.state,
            status: storage.status,
            attached_cluster_uuids: storage.attached_cluster_uuids.join(","),
            mon_count: storage.mons.len(),
            pool_count: storage.pools.len(),
        }
    }
}

display! {
    /// Image (backup) storage display wrapper
    pub struct ImageStorageDisplay {
        name: String => "name",
        uuid: String => "uuid",
        url: String => "url",
        kind: String => "type",
        state: String => "state",
        status: String => "status",
        total_capacity: String => "totalCapacity",
        available_capacity: String => "availableCapacity",
    }
}

impl From<BackupStorageView> for ImageStorageDisplay {
    fn from(storage: BackupStorageView) -> Self {
        Self {
            name: storage.name,
            uuid: storage.uuid,
            url: storage.url,
            kind: storage.kind,
            state: storage.state,
            status: storage.status,
            total_capacity: format_disk_size(storage.total_capacity),
            available_capacity: format_disk_size(storage.available_capacity),
        }
    }
}

display! {
    /// Volume snapshot display wrapper
    pub struct SnapshotDisplay {
        name: String => "name",
        uuid: String => "uuid",
        description: String => "description",
        kind: String => "type",
        volume_uuid: String => "volumeUuid",
        tree_uuid: String => "treeUuid",
        parent_uuid: String => "parentUuid",
        primary_storage_uuid: String => "primaryStorageUuid",
        size: String => "size",
        state: String => "state",
        status: String => "status",
        latest: bool => "latest",
        create_date: String => "createDate",
    }
}

impl From<VolumeSnapshotView> for SnapshotDisplay {
    fn from(snapshot: VolumeSnapshotView) -> Self {
        Self {
            name: snapshot.name,
            uuid: snapshot.uuid,
            description: snapshot.description,
            kind: snapshot.kind,
            volume_uuid: snapshot.volume_uuid,
            tree_uuid: snapshot.tree_uuid,
            parent_uuid: snapshot.parent_uuid,
            primary_storage_uuid: snapshot.primary_storage_uuid,
            size: format_disk_size(snapshot.size),
            state: snapshot.state,
            status: snapshot.status,
            latest: snapshot.latest,
            create_date: format_timestamp(&snapshot.create_date),
        }
    }
}

display! {
    /// CD-ROM display wrapper
    pub struct CdRomDisplay {
        uuid: String => "uuid",
        vm_instance_uuid: String => "vmInstanceUuid",
        device_id: i64 => "deviceId",
        iso_uuid: String => "isoUuid",
        iso_install_path: String => "isoInstallPath",
        name: String => "name",
        description: String => "description",
        create_date: String => "createDate",
    }
}

impl From<VmCdRomView> for CdRomDisplay {
    fn from(cdrom: VmCdRomView) -> Self {
        Self {
            uuid: cdrom.uuid,
            vm_instance_uuid: cdrom.vm_instance_uuid,
            device_id: cdrom.device_id,
            iso_uuid: cdrom.iso_uuid,
            iso_install_path: cdrom.iso_install_path,
            name: cdrom.name,
            description: cdrom.description,
            create_date: format_timestamp(&cdrom.create_date),
        }
    }
}

display! {
    /// Tag display wrapper
    pub struct TagDisplay {
        uuid: String => "uuid",
        name: String => "name",
        kind: String => "type",
        color: String => "color",
        create_date: String => "createDate",
    }
}

impl From<TagView> for TagDisplay {
    fn from(tag: TagView) -> Self {
        Self {
            uuid: tag.uuid,
            name: tag.name,
            kind: tag.kind,
            color: tag.color,
            create_date: format_timestamp(&tag.create_date),
        }
    }
}

display! {
    /// Instance offering display wrapper
    pub struct InstanceOfferingDisplay {
        name: String => "name",
        uuid: String => "uuid",
        cpu_num: i64 => "cpuNum",
        cpu_speed: i64 => "cpuSpeed",
        memory_size: String => "memorySize",
        kind: String => "type",
        allocator_strategy: String => "allocatorStrategy",
        state: String => "state",
        create_date: String => "createDate",
    }
}

impl From<InstanceOfferingView> for InstanceOfferingDisplay {
    fn from(offering: InstanceOfferingView) -> Self {
        Self {
            name: offering.name,
            uuid: offering.uuid,
            cpu_num: offering.cpu_num,
            cpu_speed: offering.cpu_speed,
            memory_size: format_memory_size(offering.memory_size),
            kind: offering.kind,
            allocator_strategy: offering.allocator_strategy,
            state: offering.state,
            create_date: format_timestamp(&offering.create_date),
        }
    }
}

display! {
    /// Disk offering display wrapper
    pub struct DiskOfferingDisplay {
        name: String => "name",
        uuid: String => "uuid",
        disk_size: String => "diskSize",
        kind: String => "type",
        allocator_strategy: String => "allocatorStrategy",
        state: String => "state",
    }
}

impl From<DiskOfferingView> for DiskOfferingDisplay {
    fn from(offering: DiskOfferingView) -> Self {
        Self {
            name: offering.name,
            uuid: offering.uuid,
            disk_size: format_disk_size(offering.disk_size),
            kind: offering.kind,
            allocator_strategy: offering.allocator_strategy,
            state: offering.state,
        }
    }
}

display! {
    /// Virtual router display wrapper
    pub struct VirtualRouterDisplay {
        name: String => "name",
        uuid: String => "uuid",
        description: String => "description",
        appliance_vm_type: String => "applianceVmType",
        management_network_uuid: String => "managementNetworkUuid",
        default_route_l3_network_uuid: String => "defaultRouteL3NetworkUuid",
        status: String => "status",
        agent_port: i64 => "agentPort",
        zone_uuid: String => "zoneUuid",
        cluster_uuid: String => "clusterUuid",
        image_uuid: String => "imageUuid",
        host_uuid: String => "hostUuid",
        last_host_uuid: String => "lastHostUuid",
        instance_offering_uuid: String => "instanceOfferingUuid",
        root_volume_uuid: String => "rootVolumeUuid",
        platform: String => "platform",
        default_l3_network_uuid: String => "defaultL3NetworkUuid",
        kind: String => "type",
        hypervisor_type: String => "hypervisorType",
        memory_size: String => "memorySize",
        cpu_num: i64 => "cpuNum",
        cpu_speed: i64 => "cpuSpeed",
        allocator_strategy: String => "allocatorStrategy",
        state: String => "state",
        ha_status: String => "haStatus",
        architecture: String => "architecture",
        ips: String => "ips",
    }
}

impl From<VirtualRouterView> for VirtualRouterDisplay {
    fn from(vr: VirtualRouterView) -> Self {
        Self {
            ips: vr.ips().join(", "),
            memory_size: format_memory_size(vr.memory_size),
            name: vr.name,
            uuid: vr.uuid,
            description: vr.description,
            appliance_vm_type: vr.appliance_vm_type,
            management_network_uuid: vr.management_network_uuid,
            default_route_l3_network_uuid: vr.default_route_l3_network_uuid,
            status: vr.status,
            agent_port: vr.agent_port,
            zone_uuid: vr.zone_uuid,
            cluster_uuid: vr.cluster_uuid,
            image_uuid: vr.image_uuid,
            host_uuid: vr.host_uuid,
            last_host_uuid: vr.last_host_uuid,
            instance_offering_uuid: vr.instance_offering_uuid,
            root_volume_uuid: vr.root_volume_uuid,
            platform: vr.platform,
            default_l3_network_uuid: vr.default_l3_network_uuid,
            kind: vr.kind,
            hypervisor_type: vr.hypervisor_type,
            cpu_num: vr.cpu_num,
            cpu_speed: vr.cpu_speed,
            allocator_strategy: vr.allocator_strategy,
            state: vr.state,
            ha_status: vr.ha_status,
            architecture: vr.architecture,
        }
    }
}

display! {
    /// Virtual router offering display wrapper
    pub struct VirtualRouterOfferingDisplay {
        name: String => "name",
        uuid: String => "uuid",
        description: String => "description",
        cpu_num: i64 => "cpuNum",
        cpu_speed: i64 => "cpuSpeed",
        memory_size: String => "memorySize",
        kind: String => "type",
        allocator_strategy: String => "allocatorStrategy",
        sort_key: i64 => "sortKey",
        state: String => "state",
        management_network_uuid: String => "managementNetworkUuid",
        public_network_uuid: String => "publicNetworkUuid",
        zone_uuid: String => "zoneUuid",
        image_uuid: String => "imageUuid",
        is_default: bool => "isDefault",
        reserved_memory_size: String => "reservedMemorySize",
    }
}

impl From<VirtualRouterOfferingView> for VirtualRouterOfferingDisplay {
    fn from(offering: VirtualRouterOfferingView) -> Self {
        Self {
            name: offering.name,
            uuid: offering.uuid,
            description: offering.description,
            cpu_num: offering.cpu_num,
            cpu_speed: offering.cpu_speed,
            memory_size: format_memory_size(offering.memory_size),
            kind: offering.kind,
            allocator_strategy: offering.allocator_strategy,
            sort_key: offering.sort_key,
            state: offering.state,
            management_network_uuid: offering.management_network_uuid,
            public_network_uuid: offering.public_network_uuid,
            zone_uuid: offering.zone_uuid,
            image_uuid: offering.image_uuid,
            is_default: offering.is_default,
            reserved_memory_size: offering.reserved_memory_size,
        }
    }
}

display! {
    /// Management node display wrapper
    pub struct ManagementNodeDisplay {
        uuid: String => "uuid",
        host_name: String => "hostName",
        join_date: String => "joinDate",
        heart_beat: String => "heartBeat",
    }
}

impl From<ManagementNodeView> for ManagementNodeDisplay {
    fn from(node: ManagementNodeView) -> Self {
        Self {
            uuid: node.uuid,
            host_name: node.host_name,
            join_date: format_timestamp(&node.join_date),
            heart_beat: format_timestamp(&node.heart_beat),
        }
    }
}

display! {
    /// Long job display wrapper
    pub struct LongJobDisplay {
        uuid: String => "uuid",
        name: String => "name",
        description: String => "description",
        state: String => "state",
        job_name: String => "jobName",
        target_resource_uuid: String => "targetResourceUuid",
        execute_time: i64 => "executeTime",
        create_date: String => "createDate",
    }
}

impl From<LongJobView> for LongJobDisplay {
    fn from(job: LongJobView) -> Self {
        Self {
            uuid: job.uuid,
            name: job.name,
            description: job.description,
            state: job.state,
            job_name: job.job_name,
            target_resource_uuid: job.target_resource_uuid,
            execute_time: job.execute_time,
            create_date: format_timestamp(&job.create_date),
        }
    }
}

display! {
    /// VM script display wrapper
    pub struct VmScriptDisplay {
        name: String => "name",
        uuid: String => "uuid",
        description: String => "description",
        script_content: String => "scriptContent",
        render_params: String => "renderParams",
        platform: String => "platform",
        script_type: String => "scriptType",
        script_timeout: i64 => "scriptTimeout",
        encoding_type: String => "encodingType",
    }
}

impl From<VmScriptView> for VmScriptDisplay {
    fn from(script: VmScriptView) -> Self {
        Self {
            name: script.name,
            uuid: script.uuid,
            description: script.description,
            script_content: script.script_content,
            render_params: script.render_params,
            platform: script.platform,
            script_type: script.script_type,
            script_timeout: script.script_timeout,
            encoding_type: script.encoding_type,
        }
    }
}

impl VmScriptDisplay {
    /// Cut the script content to its first [`SCRIPT_PREVIEW_CHARS`] characters
    pub fn truncate_script(mut self) -> Self {
        if let Some((cut, _)) = self.script_content.char_indices().nth(SCRIPT_PREVIEW_CHARS) {
            self.script_content.truncate(cut);
            self.script_content.push_str("...");
        }
        self
    }
}
