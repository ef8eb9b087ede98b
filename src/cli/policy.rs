//! Policy pack command implementations

use tabled::Tabled;

use pulumi_cloud_client::Result;
use pulumi_cloud_client::client::PolicyPack;

use crate::cli::CommandContext;
use crate::output::{self, table};

#[derive(Tabled)]
struct PolicyPackDisplay {
    #[tabled(rename = "POLICY PACK")]
    full_name: String,
    #[tabled(rename = "DISPLAY NAME")]
    display_name: String,
    #[tabled(rename = "VERSION")]
    version: String,
    #[tabled(rename = "PUBLISHER")]
    publisher: String,
}

impl From<&PolicyPack> for PolicyPackDisplay {
    fn from(pack: &PolicyPack) -> Self {
        Self {
            full_name: pack.full_name(),
            display_name: table::cell(pack.display_name.as_deref()),
            version: table::cell(pack.version.as_deref()),
            publisher: table::cell(pack.publisher.as_deref()),
        }
    }
}

pub async fn list(ctx: &CommandContext, org: &str) -> Result<()> {
    let packs = ctx.client.policies().list(org).await?;
    output::print_list(&packs, ctx.format, |x| PolicyPackDisplay::from(x))?;
    Ok(())
}

pub async fn get(ctx: &CommandContext, org: &str, name: &str, version: &str) -> Result<()> {
    let pack = ctx.client.policies().get(org, name, version).await?;
    output::print_one(&pack, ctx.format, |x| PolicyPackDisplay::from(x))?;
    Ok(())
}
