//! Describe Command

use anyhow::Result;
use clap::Args;

use cloudctl_common::Error;

use crate::client::{InventoryClient, Query, ResourceKind};
use crate::display::{
    ClusterDisplay, HostDisplay, ImageDisplay, InstanceDisplay, InstanceOfferingDisplay,
    L3NetworkDisplay, VolumeDisplay, ZoneDisplay,
};
use crate::output::{Data, TableDisplay};

use super::RenderOpts;

#[derive(Args)]
pub struct DescribeArgs {
    /// Resource kind
    #[arg(value_enum)]
    pub kind: ResourceKind,

    /// Resource name or UUID
    pub name_or_uuid: String,
}

pub async fn execute(args: DescribeArgs, client: &dyn InventoryClient, opts: &RenderOpts) -> Result<()> {
    let data = describe(&args, client).await?;
    opts.print(&data)
}

/// Look up one resource and turn it into a single record
pub async fn describe(args: &DescribeArgs, client: &dyn InventoryClient) -> Result<Data> {
    let uuid = client.resolve_uuid(args.kind, &args.name_or_uuid).await?;
    let q = Query::by_uuid(&uuid);

    let found = match args.kind {
        ResourceKind::Zone => first::<ZoneDisplay, _>(client.query_zones(&q).await?),
        ResourceKind::Cluster => first::<ClusterDisplay, _>(client.query_clusters(&q).await?),
        ResourceKind::Host => first::<HostDisplay, _>(client.query_hosts(&q).await?),
        ResourceKind::Instance => first::<InstanceDisplay, _>(client.query_vm_instances(&q).await?),
        ResourceKind::Image => first::<ImageDisplay, _>(client.query_images(&q).await?),
        ResourceKind::Volume => first::<VolumeDisplay, _>(client.query_volumes(&q).await?),
        ResourceKind::L3Network => first::<L3NetworkDisplay, _>(client.query_l3_networks(&q).await?),
        ResourceKind::InstanceOffering => {
            first::<InstanceOfferingDisplay, _>(client.query_instance_offerings(&q).await?)
        }
    };

    let data = found.ok_or_else(|| Error::not_found(args.kind.to_string(), &args.name_or_uuid))?;
    Ok(data)
}

fn first<D, V>(items: Vec<V>) -> Option<Data>
where
    D: TableDisplay + From<V>,
{
    items.into_iter().next().map(|item| Data::item(&D::from(item)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::FileInventory;
    use cloudctl_common::{ImageView, Inventory};
    use serde_json::json;

    fn client() -> FileInventory {
        FileInventory::new(Inventory {
            images: vec![ImageView {
                uuid: "i-uuid".into(),
                name: "centos".into(),
                size: 1024 * 1024 * 1024,
                ..Default::default()
            }],
            ..Default::default()
        })
    }

    #[tokio::test]
    async fn test_describe_by_name_and_uuid() {
        let client = client();
        for input in ["centos", "i-uuid"] {
            let args = DescribeArgs {
                kind: ResourceKind::Image,
                name_or_uuid: input.into(),
            };
            let Data::Record(record) = describe(&args, &client).await.unwrap() else {
                panic!("expected a single record");
            };
            assert_eq!(record.get("uuid"), Some(&json!("i-uuid")));
            assert_eq!(record.get("size"), Some(&json!("1.00 GB")));
        }
    }

    #[tokio::test]
    async fn test_describe_missing() {
        let args = DescribeArgs {
            kind: ResourceKind::Volume,
            name_or_uuid: "ghost".into(),
        };
        let err = describe(&args, &client()).await.unwrap_err();
        assert_eq!(err.to_string(), "volume with name or UUID 'ghost' not found");
    }
}
