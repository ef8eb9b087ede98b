//! Organization command implementations

use colored::Colorize;
use tabled::Tabled;

use pulumi_cloud_client::Result;
use pulumi_cloud_client::client::{MemberRole, Organization};

use crate::cli::{CommandContext, OutputFormat};
use crate::output::{self, json, table};

/// Organization for table display
#[derive(Tabled)]
struct OrgDisplay {
    #[tabled(rename = "NAME")]
    name: String,
    #[tabled(rename = "DISPLAY NAME")]
    display_name: String,
    #[tabled(rename = "GITHUB")]
    github_login: String,
    #[tabled(rename = "CREATED")]
    created_on: String,
}

impl From<&Organization> for OrgDisplay {
    fn from(org: &Organization) -> Self {
        Self {
            name: org.name.clone(),
            display_name: table::cell(org.display_name.as_deref()),
            github_login: table::cell(org.github_login.as_deref()),
            created_on: table::time_cell(org.created_on),
        }
    }
}

/// Run the org list command
pub async fn list(ctx: &CommandContext) -> Result<()> {
    let orgs = ctx.client.organizations().list().await?;
    output::print_list(&orgs, ctx.format, |x| OrgDisplay::from(x))?;
    Ok(())
}

/// Run the org get command
pub async fn get(ctx: &CommandContext, org: &str) -> Result<()> {
    let org = ctx.client.organizations().get(org).await?;
    output::print_one(&org, ctx.format, |x| OrgDisplay::from(x))?;
    Ok(())
}

/// Member listings have no model; always printed as JSON
pub async fn members(ctx: &CommandContext, org: &str) -> Result<()> {
    let members = ctx.client.organizations().list_team_members(org).await?;
    println!("{}", json::format_json(&members)?);
    Ok(())
}

/// Run the org invite command
pub async fn invite(ctx: &CommandContext, org: &str, email: &str, role: MemberRole) -> Result<()> {
    let invitation = ctx
        .client
        .organizations()
        .invite_user(org, email, role)
        .await?;

    match ctx.format {
        OutputFormat::Json => println!("{}", json::format_json(&invitation)?),
        OutputFormat::Table => {
            eprintln!("{} Invited {} to {} as {}", "✓".green(), email, org, role)
        }
    }
    Ok(())
}
