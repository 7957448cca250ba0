//! Get Commands

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use serde::Serialize;
use serde_json::json;
use std::future::Future;

use cloudctl_common::VmScriptView;

use crate::client::{group_counts, Condition, InventoryClient, Query, ResourceKind};
use crate::display::{
    CdRomDisplay, ClusterDisplay, DiskOfferingDisplay, EipDisplay, HostDisplay, ImageDisplay,
    ImageStorageDisplay, InstanceDisplay, InstanceOfferingDisplay, IpRangeDisplay,
    L2NetworkDisplay, L3NetworkDisplay, LongJobDisplay, ManagementNodeDisplay, NicDisplay,
    PrimaryStorageDisplay, SnapshotDisplay, TagDisplay, VipDisplay, VirtualRouterDisplay,
    VirtualRouterOfferingDisplay, VmScriptDisplay, VolumeDisplay, ZoneDisplay,
};
use crate::output::{Data, DynamicMap, TableDisplay};

use super::{QueryArgs, RenderOpts};

#[derive(Subcommand)]
pub enum GetCommands {
    /// List VM instances
    #[command(visible_alias = "vm")]
    Instances {
        #[command(flatten)]
        query: QueryArgs,

        #[command(flatten)]
        context: ContextArgs,
    },

    /// List images
    Images {
        #[command(flatten)]
        query: QueryArgs,
    },

    /// List volumes
    Volumes {
        #[command(flatten)]
        query: QueryArgs,
    },

    /// List volume snapshots
    Snapshots {
        #[command(flatten)]
        query: QueryArgs,
    },

    /// List L2 networks
    #[command(name = "l2-networks")]
    L2Networks {
        #[command(flatten)]
        query: QueryArgs,
    },

    /// List L3 networks
    #[command(name = "l3-networks")]
    L3Networks {
        #[command(flatten)]
        query: QueryArgs,
    },

    /// List IP ranges
    IpRanges {
        #[command(flatten)]
        query: QueryArgs,
    },

    /// List virtual IPs
    Vips {
        #[command(flatten)]
        query: QueryArgs,
    },

    /// List elastic IPs
    #[command(visible_alias = "eip")]
    Eips {
        #[command(flatten)]
        query: QueryArgs,
    },

    /// List VM network interfaces (the argument matches the NIC UUID)
    #[command(visible_alias = "vm-nics")]
    Nics {
        #[command(flatten)]
        query: QueryArgs,
    },

    /// List VM CD-ROM drives
    Cdroms {
        #[command(flatten)]
        query: QueryArgs,
    },

    /// List hosts
    Hosts {
        #[command(flatten)]
        query: QueryArgs,
    },

    /// List clusters
    Clusters {
        #[command(flatten)]
        query: QueryArgs,
    },

    /// List zones
    Zones {
        #[command(flatten)]
        query: QueryArgs,
    },

    /// List primary storages
    PrimaryStorages {
        #[command(flatten)]
        query: QueryArgs,
    },

    /// List image (backup) storages
    #[command(visible_alias = "backup-storages")]
    ImageStorages {
        #[command(flatten)]
        query: QueryArgs,
    },

    /// List instance offerings
    InstanceOfferings {
        #[command(flatten)]
        query: QueryArgs,
    },

    /// List disk offerings
    DiskOfferings {
        #[command(flatten)]
        query: QueryArgs,
    },

    /// List virtual routers
    VirtualRouters {
        #[command(flatten)]
        query: QueryArgs,
    },

    /// List virtual router offerings
    VirtualRouterOfferings {
        #[command(flatten)]
        query: QueryArgs,
    },

    /// List tags
    Tags {
        #[command(flatten)]
        query: QueryArgs,
    },

    /// List management nodes (the argument matches the host name)
    ManagementNodes {
        #[command(flatten)]
        query: QueryArgs,
    },

    /// List long-running jobs
    LongJobs {
        #[command(flatten)]
        query: QueryArgs,
    },

    /// List VM instance scripts
    VmScripts {
        #[command(flatten)]
        query: QueryArgs,

        /// Show the whole script instead of its first 50 characters
        #[arg(long)]
        show_full_script: bool,
    },

    /// List global configuration entries
    GlobalConfigs {
        #[command(flatten)]
        query: QueryArgs,

        /// Only entries of this category
        #[arg(long)]
        category: Option<String>,
    },
}

/// Placement filters for instance listings, each a name or UUID
#[derive(Args, Debug, Clone, Default)]
pub struct ContextArgs {
    /// Zone name or UUID
    #[arg(short = 'z', long)]
    pub zone: Option<String>,

    /// Cluster name or UUID
    #[arg(short = 'c', long)]
    pub cluster: Option<String>,

    /// Host name or UUID
    #[arg(short = 'H', long)]
    pub host: Option<String>,
}

impl ContextArgs {
    /// Resolve each given scope and narrow `query` by its UUID
    pub async fn apply(&self, client: &dyn InventoryClient, query: &mut Query) -> Result<()> {
        let scopes = [
            (ResourceKind::Zone, "zoneUuid", &self.zone),
            (ResourceKind::Cluster, "clusterUuid", &self.cluster),
            (ResourceKind::Host, "hostUuid", &self.host),
        ];
        for (kind, key, value) in scopes {
            if let Some(name_or_uuid) = value {
                let uuid = client
                    .resolve_uuid(kind, name_or_uuid)
                    .await
                    .with_context(|| format!("invalid --{} filter", key.trim_end_matches("Uuid")))?;
                query.conditions.push(Condition::eq(key, uuid));
            }
        }
        Ok(())
    }
}

pub async fn execute(cmd: GetCommands, client: &dyn InventoryClient, opts: &RenderOpts) -> Result<()> {
    let limit = opts.page_limit;
    match cmd {
        GetCommands::Instances { query, context } => {
            let mut q = query.to_query(limit)?;
            context.apply(client, &mut q).await?;
            let fetch = move |q: Query| async move { client.query_vm_instances(&q).await };
            list(&query, q, opts, fetch, rows::<InstanceDisplay, _>).await
        }
        GetCommands::Images { query } => {
            let fetch = move |q: Query| async move { client.query_images(&q).await };
            list(&query, query.to_query(limit)?, opts, fetch, rows::<ImageDisplay, _>).await
        }
        GetCommands::Volumes { query } => {
            let fetch = move |q: Query| async move { client.query_volumes(&q).await };
            list(&query, query.to_query(limit)?, opts, fetch, rows::<VolumeDisplay, _>).await
        }
        GetCommands::Snapshots { query } => {
            let fetch = move |q: Query| async move { client.query_volume_snapshots(&q).await };
            list(&query, query.to_query(limit)?, opts, fetch, rows::<SnapshotDisplay, _>).await
        }
        GetCommands::L2Networks { query } => {
            let fetch = move |q: Query| async move { client.query_l2_networks(&q).await };
            list(&query, query.to_query(limit)?, opts, fetch, rows::<L2NetworkDisplay, _>).await
        }
        GetCommands::L3Networks { query } => {
            let fetch = move |q: Query| async move { client.query_l3_networks(&q).await };
            list(&query, query.to_query(limit)?, opts, fetch, rows::<L3NetworkDisplay, _>).await
        }
        GetCommands::IpRanges { query } => {
            let fetch = move |q: Query| async move { client.query_ip_ranges(&q).await };
            list(&query, query.to_query(limit)?, opts, fetch, rows::<IpRangeDisplay, _>).await
        }
        GetCommands::Vips { query } => {
            let fetch = move |q: Query| async move { client.query_vips(&q).await };
            list(&query, query.to_query(limit)?, opts, fetch, rows::<VipDisplay, _>).await
        }
        GetCommands::Eips { query } => {
            let fetch = move |q: Query| async move { client.query_eips(&q).await };
            list(&query, query.to_query(limit)?, opts, fetch, rows::<EipDisplay, _>).await
        }
        GetCommands::Nics { query } => {
            let q = query.to_query_keyed("uuid", limit)?;
            let fetch = move |q: Query| async move { client.query_vm_nics(&q).await };
            list(&query, q, opts, fetch, rows::<NicDisplay, _>).await
        }
        GetCommands::Cdroms { query } => {
            let fetch = move |q: Query| async move { client.query_vm_cd_roms(&q).await };
            list(&query, query.to_query(limit)?, opts, fetch, rows::<CdRomDisplay, _>).await
        }
        GetCommands::Hosts { query } => {
            let fetch = move |q: Query| async move { client.query_hosts(&q).await };
            list(&query, query.to_query(limit)?, opts, fetch, rows::<HostDisplay, _>).await
        }
        GetCommands::Clusters { query } => {
            let fetch = move |q: Query| async move { client.query_clusters(&q).await };
            list(&query, query.to_query(limit)?, opts, fetch, rows::<ClusterDisplay, _>).await
        }
        GetCommands::Zones { query } => {
            let fetch = move |q: Query| async move { client.query_zones(&q).await };
            list(&query, query.to_query(limit)?, opts, fetch, rows::<ZoneDisplay, _>).await
        }
        GetCommands::PrimaryStorages { query } => {
            let fetch = move |q: Query| async move { client.query_primary_storages(&q).await };
            list(&query, query.to_query(limit)?, opts, fetch, rows::<PrimaryStorageDisplay, _>).await
        }
        GetCommands::ImageStorages { query } => {
            let fetch = move |q: Query| async move { client.query_backup_storages(&q).await };
            list(&query, query.to_query(limit)?, opts, fetch, rows::<ImageStorageDisplay, _>).await
        }
        GetCommands::InstanceOfferings { query } => {
            let fetch = move |q: Query| async move { client.query_instance_offerings(&q).await };
            list(&query, query.to_query(limit)?, opts, fetch, rows::<InstanceOfferingDisplay, _>).await
        }
        GetCommands::DiskOfferings { query } => {
            let fetch = move |q: Query| async move { client.query_disk_offerings(&q).await };
            list(&query, query.to_query(limit)?, opts, fetch, rows::<DiskOfferingDisplay, _>).await
        }
        GetCommands::VirtualRouters { query } => {
            let fetch = move |q: Query| async move { client.query_virtual_routers(&q).await };
            list(&query, query.to_query(limit)?, opts, fetch, rows::<VirtualRouterDisplay, _>).await
        }
        GetCommands::VirtualRouterOfferings { query } => {
            let fetch =
                move |q: Query| async move { client.query_virtual_router_offerings(&q).await };
            let to_data = rows::<VirtualRouterOfferingDisplay, _>;
            list(&query, query.to_query(limit)?, opts, fetch, to_data).await
        }
        GetCommands::Tags { query } => {
            let fetch = move |q: Query| async move { client.query_tags(&q).await };
            list(&query, query.to_query(limit)?, opts, fetch, rows::<TagDisplay, _>).await
        }
        GetCommands::ManagementNodes { query } => {
            let q = query.to_query_keyed("hostName", limit)?;
            let fetch = move |q: Query| async move { client.query_management_nodes(&q).await };
            list(&query, q, opts, fetch, rows::<ManagementNodeDisplay, _>).await
        }
        GetCommands::LongJobs { query } => {
            let fetch = move |q: Query| async move { client.query_long_jobs(&q).await };
            list(&query, query.to_query(limit)?, opts, fetch, rows::<LongJobDisplay, _>).await
        }
        GetCommands::VmScripts { query, show_full_script } => {
            let fetch = move |q: Query| async move { client.query_vm_scripts(&q).await };
            let to_data = move |scripts: Vec<VmScriptView>| {
                let scripts: Vec<VmScriptDisplay> = scripts
                    .into_iter()
                    .map(VmScriptDisplay::from)
                    .map(|script| if show_full_script { script } else { script.truncate_script() })
                    .collect();
                Data::list(&scripts)
            };
            list(&query, query.to_query(limit)?, opts, fetch, to_data).await
        }
        GetCommands::GlobalConfigs { query, category } => {
            let mut q = query.to_query(limit)?;
            if let Some(category) = category {
                q.conditions.push(Condition::eq("category", category));
            }
            let fetch = move |q: Query| async move { client.query_global_configs(&q).await };
            list(&query, q, opts, fetch, Data::Maps).await
        }
    }
}

/// Run a listing. `--count` and `--group-by` summarize every match,
/// `--reply-with-count` prints that total ahead of the paged rows.
async fn list<V, F, Fut>(
    args: &QueryArgs,
    query: Query,
    opts: &RenderOpts,
    fetch: F,
    to_data: impl FnOnce(Vec<V>) -> Data,
) -> Result<()>
where
    V: Serialize,
    F: Fn(Query) -> Fut,
    Fut: Future<Output = cloudctl_common::Result<Vec<V>>>,
{
    if args.count {
        print_total(fetch(query.unpaged()).await?.len());
        return Ok(());
    }
    if let Some(key) = &args.group_by {
        let items = fetch(query.unpaged()).await?;
        return opts.print(&Data::Maps(groups(&items, key)?));
    }
    if args.reply_with_count {
        print_total(fetch(query.unpaged()).await?.len());
    }
    let items = fetch(query).await?;
    opts.print(&to_data(items))
}

fn rows<D, V>(items: Vec<V>) -> Data
where
    D: TableDisplay + From<V>,
{
    let rows: Vec<D> = items.into_iter().map(D::from).collect();
    Data::list(&rows)
}

/// One `{<key>: value, count: n}` map per distinct value
fn groups<V: Serialize>(items: &[V], key: &str) -> Result<Vec<DynamicMap>> {
    let groups = group_counts(items, key)?
        .into_iter()
        .map(|(value, count)| {
            let mut group = DynamicMap::new();
            group.insert(key.to_string(), json!(value));
            group.insert("count".to_string(), json!(count));
            group
        })
        .collect();
    Ok(groups)
}

fn print_total(total: usize) {
    println!("Total: {}", total);
}
