//! Platform inventory client
//!
//! Commands talk to the platform through [`InventoryClient`]. The shipped
//! implementation answers queries from a snapshot file.

use async_trait::async_trait;
use clap::ValueEnum;
use serde::Serialize;
use serde_json::Value;
use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;
use tracing::debug;

use cloudctl_common::{
    BackupStorageView, ClusterView, DiskOfferingView, EipView, Error, GlobalConfig, HostView,
    ImageView, InstanceOfferingView, Inventory, IpRangeView, L2NetworkView, L3NetworkView,
    LongJobView, ManagementNodeView, PrimaryStorageView, Result, TagView, VipView,
    VirtualRouterOfferingView, VirtualRouterView, VmCdRomView, VmInstanceView, VmNicView,
    VmScriptView, VolumeSnapshotView, VolumeView, ZoneView,
};

use crate::output::data::stringify;

/// Resource kinds addressable by name or UUID
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ResourceKind {
    Zone,
    Cluster,
    Host,
    #[value(alias = "vm")]
    Instance,
    Image,
    #[value(alias = "disk")]
    Volume,
    #[value(name = "l3-network", alias = "network")]
    L3Network,
    InstanceOffering,
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ResourceKind::Zone => "zone",
            ResourceKind::Cluster => "cluster",
            ResourceKind::Host => "host",
            ResourceKind::Instance => "VM instance",
            ResourceKind::Image => "image",
            ResourceKind::Volume => "volume",
            ResourceKind::L3Network => "L3 network",
            ResourceKind::InstanceOffering => "instance offering",
        };
        f.write_str(name)
    }
}

/// Comparison used by a query condition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    Eq,
    NotEq,
}

/// `key=value` or `key!=value` against a serialized field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Condition {
    pub key: String,
    pub op: Op,
    pub value: String,
}

impl Condition {
    pub fn eq(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            op: Op::Eq,
            value: value.into(),
        }
    }

    /// Split on the first operator, so `a=b!=c` keeps `b!=c` as the value
    pub fn parse(raw: &str) -> Result<Self> {
        let Some(eq) = raw.find('=') else {
            return Err(Error::InvalidQuery(format!(
                "'{}' (expected key=value or key!=value)",
                raw
            )));
        };
        let (key, op, value) = if eq > 0 && raw.as_bytes()[eq - 1] == b'!' {
            (&raw[..eq - 1], Op::NotEq, &raw[eq + 1..])
        } else {
            (&raw[..eq], Op::Eq, &raw[eq + 1..])
        };

        let key = key.trim();
        if key.is_empty() {
            return Err(Error::InvalidQuery(format!("'{}' has an empty key", raw)));
        }
        Ok(Self {
            key: key.to_string(),
            op,
            value: value.trim().to_string(),
        })
    }

    fn matches(&self, item: &Value) -> bool {
        let actual = item.get(&self.key).map(stringify);
        let equal = actual.as_deref() == Some(self.value.as_str());
        match self.op {
            Op::Eq => equal,
            Op::NotEq => !equal,
        }
    }
}

/// Sort key: `+field` ascending, `-field` descending, bare `field` ascending
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortBy {
    pub key: String,
    pub descending: bool,
}

impl SortBy {
    pub fn parse(raw: &str) -> Self {
        match raw.strip_prefix('-') {
            Some(key) => Self {
                key: key.to_string(),
                descending: true,
            },
            None => Self {
                key: raw.trim_start_matches('+').to_string(),
                descending: false,
            },
        }
    }
}

/// Filtering, ordering and paging applied to a resource list
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Query {
    pub conditions: Vec<Condition>,
    pub sort: Option<SortBy>,
    pub start: usize,
    pub limit: Option<usize>,
}

impl Query {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn by_name(name: &str) -> Self {
        Self::new().with(Condition::eq("name", name))
    }

    pub fn by_uuid(uuid: &str) -> Self {
        Self::new().with(Condition::eq("uuid", uuid))
    }

    pub fn with(mut self, condition: Condition) -> Self {
        self.conditions.push(condition);
        self
    }

    /// Parse and append a raw `-q` condition
    pub fn add_q(&mut self, raw: &str) -> Result<()> {
        self.conditions.push(Condition::parse(raw)?);
        Ok(())
    }

    /// The same filter and order without `--start`/`--limit`
    pub fn unpaged(&self) -> Self {
        Self {
            start: 0,
            limit: None,
            ..self.clone()
        }
    }

    /// Run the query over `items`, keyed by their serialized (camelCase) fields
    pub fn apply<T: Serialize + Clone>(&self, items: &[T]) -> Result<Vec<T>> {
        let mut matched = Vec::new();
        for item in items {
            let value = serde_json::to_value(item)?;
            if self.conditions.iter().all(|c| c.matches(&value)) {
                matched.push((value, item));
            }
        }

        if let Some(sort) = &self.sort {
            matched.sort_by(|(a, _), (b, _)| {
                let ord = compare(a.get(&sort.key), b.get(&sort.key));
                if sort.descending {
                    ord.reverse()
                } else {
                    ord
                }
            });
        }

        let limit = self.limit.unwrap_or(usize::MAX);
        Ok(matched
            .into_iter()
            .skip(self.start)
            .take(limit)
            .map(|(_, item)| item.clone())
            .collect())
    }
}

/// Number of items per distinct value of the serialized field `key`, ordered
/// by value. Items without the field count under the empty string.
pub fn group_counts<T: Serialize>(items: &[T], key: &str) -> Result<BTreeMap<String, usize>> {
    let mut groups = BTreeMap::new();
    for item in items {
        let value = serde_json::to_value(item)?;
        let group = value.get(key).map(stringify).unwrap_or_default();
        *groups.entry(group).or_insert(0) += 1;
    }
    Ok(groups)
}

fn compare(a: Option<&Value>, b: Option<&Value>) -> Ordering {
    match (a, b) {
        (Some(Value::Number(x)), Some(Value::Number(y))) => {
            let x = x.as_f64().unwrap_or_default();
            let y = y.as_f64().unwrap_or_default();
            x.partial_cmp(&y).unwrap_or(Ordering::Equal)
        }
        (Some(x), Some(y)) => stringify(x).cmp(&stringify(y)),
        (Some(_), None) => Ordering::Greater,
        (None, Some(_)) => Ordering::Less,
        (None, None) => Ordering::Equal,
    }
}

/// Read access to platform resources
#[async_trait]
pub trait InventoryClient: Send + Sync {
    async fn query_zones(&self, query: &Query) -> Result<Vec<ZoneView>>;
    async fn query_clusters(&self, query: &Query) -> Result<Vec<ClusterView>>;
    async fn query_hosts(&self, query: &Query) -> Result<Vec<HostView>>;
    async fn query_vm_instances(&self, query: &Query) -> Result<Vec<VmInstanceView>>;
    async fn query_images(&self, query: &Query) -> Result<Vec<ImageView>>;
    async fn query_volumes(&self, query: &Query) -> Result<Vec<VolumeView>>;
    async fn query_l2_networks(&self, query: &Query) -> Result<Vec<L2NetworkView>>;
    async fn query_l3_networks(&self, query: &Query) -> Result<Vec<L3NetworkView>>;
    async fn query_ip_ranges(&self, query: &Query) -> Result<Vec<IpRangeView>>;
    async fn query_vips(&self, query: &Query) -> Result<Vec<VipView>>;
    async fn query_eips(&self, query: &Query) -> Result<Vec<EipView>>;
    async fn query_vm_nics(&self, query: &Query) -> Result<Vec<VmNicView>>;
    async fn query_primary_storages(&self, query: &Query) -> Result<Vec<PrimaryStorageView>>;
    async fn query_backup_storages(&self, query: &Query) -> Result<Vec<BackupStorageView>>;
    async fn query_volume_snapshots(&self, query: &Query) -> Result<Vec<VolumeSnapshotView>>;
    async fn query_vm_cd_roms(&self, query: &Query) -> Result<Vec<VmCdRomView>>;
    async fn query_tags(&self, query: &Query) -> Result<Vec<TagView>>;
    async fn query_instance_offerings(&self, query: &Query) -> Result<Vec<InstanceOfferingView>>;
    async fn query_disk_offerings(&self, query: &Query) -> Result<Vec<DiskOfferingView>>;
    async fn query_virtual_routers(&self, query: &Query) -> Result<Vec<VirtualRouterView>>;
    async fn query_virtual_router_offerings(
        &self,
        query: &Query,
    ) -> Result<Vec<VirtualRouterOfferingView>>;
    async fn query_management_nodes(&self, query: &Query) -> Result<Vec<ManagementNodeView>>;
    async fn query_long_jobs(&self, query: &Query) -> Result<Vec<LongJobView>>;
    async fn query_vm_scripts(&self, query: &Query) -> Result<Vec<VmScriptView>>;
    async fn query_global_configs(&self, query: &Query) -> Result<Vec<GlobalConfig>>;

    /// UUIDs of the resources of `kind` matching `query`
    async fn query_uuids(&self, kind: ResourceKind, query: &Query) -> Result<Vec<String>> {
        let uuids = match kind {
            ResourceKind::Zone => collect_uuids(self.query_zones(query).await?, |r| r.uuid),
            ResourceKind::Cluster => collect_uuids(self.query_clusters(query).await?, |r| r.uuid),
            ResourceKind::Host => collect_uuids(self.query_hosts(query).await?, |r| r.uuid),
            ResourceKind::Instance => collect_uuids(self.query_vm_instances(query).await?, |r| r.uuid),
            ResourceKind::Image => collect_uuids(self.query_images(query).await?, |r| r.uuid),
            ResourceKind::Volume => collect_uuids(self.query_volumes(query).await?, |r| r.uuid),
            ResourceKind::L3Network => collect_uuids(self.query_l3_networks(query).await?, |r| r.uuid),
            ResourceKind::InstanceOffering => {
                collect_uuids(self.query_instance_offerings(query).await?, |r| r.uuid)
            }
        };
        Ok(uuids)
    }

    /// Resolve a name or UUID: names are tried first, then UUIDs. When several
    /// resources share the name, the first one wins.
    async fn resolve_uuid(&self, kind: ResourceKind, name_or_uuid: &str) -> Result<String> {
        for query in [Query::by_name(name_or_uuid), Query::by_uuid(name_or_uuid)] {
            if let Some(uuid) = self.query_uuids(kind, &query).await?.into_iter().next() {
                debug!(%kind, input = name_or_uuid, %uuid, "resolved resource");
                return Ok(uuid);
            }
        }
        Err(Error::not_found(kind.to_string(), name_or_uuid))
    }
}

fn collect_uuids<T>(items: Vec<T>, uuid: impl Fn(T) -> String) -> Vec<String> {
    items.into_iter().map(uuid).collect()
}

/// Client answering queries from an in-memory inventory snapshot
pub struct FileInventory {
    inventory: Inventory,
}

impl FileInventory {
    pub fn new(inventory: Inventory) -> Self {
        Self { inventory }
    }

    /// Load a JSON or YAML snapshot
    pub fn open(path: &Path) -> Result<Self> {
        Ok(Self::new(Inventory::load(path)?))
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }
}

#[async_trait]
impl InventoryClient for FileInventory {
    async fn query_zones(&self, query: &Query) -> Result<Vec<ZoneView>> {
        query.apply(&self.inventory.zones)
    }

    async fn query_clusters(&self, query: &Query) -> Result<Vec<ClusterView>> {
        query.apply(&self.inventory.clusters)
    }

    async fn query_hosts(&self, query: &Query) -> Result<Vec<HostView>> {
        query.apply(&self.inventory.hosts)
    }

    async fn query_vm_instances(&self, query: &Query) -> Result<Vec<VmInstanceView>> {
        query.apply(&self.inventory.vm_instances)
    }

    async fn query_images(&self, query: &Query) -> Result<Vec<ImageView>> {
        query.apply(&self.inventory.images)
    }

    async fn query_volumes(&self, query: &Query) -> Result<Vec<VolumeView>> {
        query.apply(&self.inventory.volumes)
    }

    async fn query_l2_networks(&self, query: &Query) -> Result<Vec<L2NetworkView>> {
        query.apply(&self.inventory.l2_networks)
    }

    async fn query_l3_networks(&self, query: &Query) -> Result<Vec<L3NetworkView>> {
        query.apply(&self.inventory.l3_networks)
    }

    async fn query_ip_ranges(&self, query: &Query) -> Result<Vec<IpRangeView>> {
        query.apply(&self.inventory.ip_ranges)
    }

    async fn query_vips(&self, query: &Query) -> Result<Vec<VipView>> {
        query.apply(&self.inventory.vips)
    }

    async fn query_eips(&self, query: &Query) -> Result<Vec<EipView>> {
        query.apply(&self.inventory.eips)
    }

    async fn query_vm_nics(&self, query: &Query) -> Result<Vec<VmNicView>> {
        query.apply(&self.inventory.vm_nics)
    }

    async fn query_primary_storages(&self, query: &Query) -> Result<Vec<PrimaryStorageView>> {
        query.apply(&self.inventory.primary_storages)
    }

    async fn query_backup_storages(&self, query: &Query) -> Result<Vec<BackupStorageView>> {
        query.apply(&self.inventory.backup_storages)
    }

    async fn query_volume_snapshots(&self, query: &Query) -> Result<Vec<VolumeSnapshotView>> {
        query.apply(&self.inventory.volume_snapshots)
    }

    async fn query_vm_cd_roms(&self, query: &Query) -> Result<Vec<VmCdRomView>> {
        query.apply(&self.inventory.vm_cd_roms)
    }

    async fn query_tags(&self, query: &Query) -> Result<Vec<TagView>> {
        query.apply(&self.inventory.tags)
    }

    async fn query_instance_offerings(&self, query: &Query) -> Result<Vec<InstanceOfferingView>> {
        query.apply(&self.inventory.instance_offerings)
    }

    async fn query_disk_offerings(&self, query: &Query) -> Result<Vec<DiskOfferingView>> {
        query.apply(&self.inventory.disk_offerings)
    }

    async fn query_virtual_routers(&self, query: &Query) -> Result<Vec<VirtualRouterView>> {
        query.apply(&self.inventory.virtual_routers)
    }

    async fn query_virtual_router_offerings(
        &self,
        query: &Query,
    ) -> Result<Vec<VirtualRouterOfferingView>> {
        query.apply(&self.inventory.virtual_router_offerings)
    }

    async fn query_management_nodes(&self, query: &Query) -> Result<Vec<ManagementNodeView>> {
        query.apply(&self.inventory.management_nodes)
    }

    async fn query_long_jobs(&self, query: &Query) -> Result<Vec<LongJobView>> {
        query.apply(&self.inventory.long_jobs)
    }

    async fn query_vm_scripts(&self, query: &Query) -> Result<Vec<VmScriptView>> {
        query.apply(&self.inventory.vm_scripts)
    }

    async fn query_global_configs(&self, query: &Query) -> Result<Vec<GlobalConfig>> {
        query.apply(&self.inventory.global_configs)
    }
}
