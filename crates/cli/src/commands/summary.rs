//! Summary Command

use anyhow::Result;
use serde_json::json;
use tracing::debug;

use crate::client::{InventoryClient, Query};
use crate::output::{Data, DynamicMap};

use super::RenderOpts;

pub async fn execute(client: &dyn InventoryClient, opts: &RenderOpts) -> Result<()> {
    let counts = summarize(client).await?;
    opts.print(&Data::Map(counts))
}

/// Resource counts keyed by kind
pub async fn summarize(client: &dyn InventoryClient) -> Result<DynamicMap> {
    let all = Query::new();
    let mut counts = DynamicMap::new();
    counts.insert("zones".into(), json!(client.query_zones(&all).await?.len()));
    counts.insert("clusters".into(), json!(client.query_clusters(&all).await?.len()));
    counts.insert("hosts".into(), json!(client.query_hosts(&all).await?.len()));
    counts.insert("instances".into(), json!(client.query_vm_instances(&all).await?.len()));
    counts.insert("images".into(), json!(client.query_images(&all).await?.len()));
    counts.insert("volumes".into(), json!(client.query_volumes(&all).await?.len()));
    counts.insert("snapshots".into(), json!(client.query_volume_snapshots(&all).await?.len()));
    counts.insert("l2Networks".into(), json!(client.query_l2_networks(&all).await?.len()));
    counts.insert("l3Networks".into(), json!(client.query_l3_networks(&all).await?.len()));
    counts.insert("ipRanges".into(), json!(client.query_ip_ranges(&all).await?.len()));
    counts.insert("vips".into(), json!(client.query_vips(&all).await?.len()));
    counts.insert("eips".into(), json!(client.query_eips(&all).await?.len()));
    counts.insert("nics".into(), json!(client.query_vm_nics(&all).await?.len()));
    counts.insert("cdroms".into(), json!(client.query_vm_cd_roms(&all).await?.len()));
    counts.insert(
        "primaryStorages".into(),
        json!(client.query_primary_storages(&all).await?.len()),
    );
    counts.insert("imageStorages".into(), json!(client.query_backup_storages(&all).await?.len()));
    counts.insert(
        "instanceOfferings".into(),
        json!(client.query_instance_offerings(&all).await?.len()),
    );
    counts.insert("diskOfferings".into(), json!(client.query_disk_offerings(&all).await?.len()));
    counts.insert("virtualRouters".into(), json!(client.query_virtual_routers(&all).await?.len()));
    counts.insert(
        "virtualRouterOfferings".into(),
        json!(client.query_virtual_router_offerings(&all).await?.len()),
    );
    counts.insert("tags".into(), json!(client.query_tags(&all).await?.len()));
    counts.insert(
        "managementNodes".into(),
        json!(client.query_management_nodes(&all).await?.len()),
    );
    counts.insert("longJobs".into(), json!(client.query_long_jobs(&all).await?.len()));
    counts.insert("vmScripts".into(), json!(client.query_vm_scripts(&all).await?.len()));
    counts.insert("globalConfigs".into(), json!(client.query_global_configs(&all).await?.len()));
    debug!(kinds = counts.len(), "summarized inventory");
    Ok(counts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::FileInventory;
    use cloudctl_common::{Inventory, VmInstanceView};

    #[tokio::test]
    async fn test_summary_counts_every_kind() {
        let client = FileInventory::new(Inventory {
            vm_instances: vec![VmInstanceView::default(), VmInstanceView::default()],
            ..Default::default()
        });
        let counts = summarize(&client).await.unwrap();
        assert_eq!(counts.len(), 25);
        assert_eq!(counts["instances"], json!(2));
        assert_eq!(counts["zones"], json!(0));
        assert_eq!(counts["vmScripts"], json!(0));
    }
}
