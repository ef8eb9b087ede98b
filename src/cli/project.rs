//! Project command implementations

use tabled::Tabled;

use pulumi_cloud_client::Result;
use pulumi_cloud_client::client::Project;

use crate::cli::CommandContext;
use crate::output::{self, table};

#[derive(Tabled)]
struct ProjectDisplay {
    #[tabled(rename = "PROJECT")]
    full_name: String,
    #[tabled(rename = "RUNTIME")]
    runtime: String,
    #[tabled(rename = "DESCRIPTION")]
    description: String,
    #[tabled(rename = "UPDATED")]
    updated_on: String,
}

impl From<&Project> for ProjectDisplay {
    fn from(project: &Project) -> Self {
        Self {
            full_name: project.full_name(),
            runtime: table::cell(project.runtime.as_deref()),
            description: table::cell(project.description.as_deref()),
            updated_on: table::time_cell(project.updated_on),
        }
    }
}

pub async fn list(ctx: &CommandContext, org: &str) -> Result<()> {
    let projects = ctx.client.projects().list(org).await?;
    output::print_list(&projects, ctx.format, |x| ProjectDisplay::from(x))?;
    Ok(())
}

pub async fn get(ctx: &CommandContext, org: &str, project: &str) -> Result<()> {
    let project = ctx.client.projects().get(org, project).await?;
    output::print_one(&project, ctx.format, |x| ProjectDisplay::from(x))?;
    Ok(())
}
