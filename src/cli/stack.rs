//! Stack command implementations

use colored::Colorize;
use tabled::Tabled;

use pulumi_cloud_client::Result;
use pulumi_cloud_client::client::Stack;

use crate::cli::{CommandContext, OutputFormat, StackRef};
use crate::output::{self, json, table};

/// Stack for table display
#[derive(Tabled)]
pub struct StackDisplay {
    #[tabled(rename = "STACK")]
    pub full_name: String,
    #[tabled(rename = "LAST UPDATE")]
    pub last_update: String,
    #[tabled(rename = "RESOURCES")]
    pub resource_count: u64,
}

impl From<&Stack> for StackDisplay {
    fn from(stack: &Stack) -> Self {
        Self {
            full_name: stack.full_name(),
            last_update: table::time_cell(stack.last_update),
            resource_count: stack.resource_count,
        }
    }
}

#[derive(Tabled)]
struct TagDisplay {
    #[tabled(rename = "KEY")]
    key: String,
    #[tabled(rename = "VALUE")]
    value: String,
}

/// Run the stack list command
pub async fn list(ctx: &CommandContext, org: &str, project: Option<&str>) -> Result<()> {
    let stacks = ctx.client.stacks().list(org, project).await?;
    output::print_list(&stacks, ctx.format, |x| StackDisplay::from(x))?;
    Ok(())
}

/// Run the stack get command
pub async fn get(ctx: &CommandContext, stack: &StackRef) -> Result<()> {
    let stack = ctx
        .client
        .stacks()
        .get(&stack.org, &stack.project, &stack.stack)
        .await?;
    output::print_one(&stack, ctx.format, |x| StackDisplay::from(x))?;
    Ok(())
}

/// Run the stack tags command
pub async fn tags(ctx: &CommandContext, stack: &StackRef) -> Result<()> {
    let tags = ctx
        .client
        .stacks()
        .list_tags(&stack.org, &stack.project, &stack.stack)
        .await?;

    match ctx.format {
        OutputFormat::Json => println!("{}", json::format_json(&tags)?),
        OutputFormat::Table => {
            let rows: Vec<TagDisplay> = tags
                .into_iter()
                .map(|(key, value)| TagDisplay { key, value })
                .collect();
            println!("{}", table::format_table(&rows));
        }
    }
    Ok(())
}

/// Run the stack transfer command
pub async fn transfer(ctx: &CommandContext, stack: &StackRef, to: &str) -> Result<()> {
    let transferred = ctx
        .client
        .stacks()
        .transfer(&stack.org, &stack.project, &stack.stack, to)
        .await?;

    match ctx.format {
        OutputFormat::Json => println!("{}", json::format_json(&transferred)?),
        OutputFormat::Table => eprintln!(
            "{} Transferred {}/{} from {} to {}",
            "✓".green(),
            stack.project,
            stack.stack,
            stack.org,
            to
        ),
    }
    Ok(())
}
