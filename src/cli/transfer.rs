//! Bulk stack transfer between organizations

use clap::Args;
use colored::Colorize;
use dialoguer::Confirm;
use futures::stream::{self, StreamExt};
use indicatif::{ProgressBar, ProgressStyle};
use log::debug;
use serde::Serialize;

use pulumi_cloud_client::client::Stack;
use pulumi_cloud_client::{PulumiClient, Result};

use crate::cli::{CommandContext, OutputFormat};
use crate::output::json;

/// Default number of concurrent transfers
pub const DEFAULT_PARALLEL: usize = 4;

/// Arguments for `stack transfer-all`
#[derive(Args, Debug, Clone)]
pub struct TransferAllArgs {
    /// Organization the stacks currently belong to
    #[arg(long, short = 's')]
    pub source_org: String,

    /// Organization to move the stacks to
    #[arg(long, short = 'd')]
    pub dest_org: String,

    /// Only transfer stacks of this project
    #[arg(long, short = 'p')]
    pub project: Option<String>,

    /// Number of transfers in flight at once
    #[arg(long, default_value_t = DEFAULT_PARALLEL)]
    pub parallel: usize,

    /// List what would be transferred without calling the API
    #[arg(long)]
    pub dry_run: bool,

    /// Skip the confirmation prompt
    #[arg(long, short = 'y')]
    pub yes: bool,
}

/// Outcome of one stack transfer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum TransferStatus {
    Transferred,
    DryRun,
    Failed,
}

#[derive(Debug, Clone, Serialize)]
pub struct TransferReport {
    /// `org/project/stack` before the transfer
    pub stack: String,
    pub destination: String,
    pub status: TransferStatus,
    pub message: String,
}

impl TransferReport {
    pub fn succeeded(&self) -> bool {
        self.status != TransferStatus::Failed
    }
}

#[derive(Debug, Default, Serialize)]
pub struct TransferSummary {
    pub total: usize,
    pub successful: usize,
    pub failed: usize,
}

impl TransferSummary {
    pub fn from_reports(reports: &[TransferReport]) -> Self {
        let successful = reports.iter().filter(|r| r.succeeded()).count();
        Self {
            total: reports.len(),
            successful,
            failed: reports.len() - successful,
        }
    }
}

async fn transfer_one(
    client: &PulumiClient,
    stack: Stack,
    destination: &str,
    dry_run: bool,
) -> TransferReport {
    let full_name = stack.full_name();

    if dry_run {
        return TransferReport {
            message: format!("Would transfer {} to {} (dry run)", full_name, destination),
            stack: full_name,
            destination: destination.to_string(),
            status: TransferStatus::DryRun,
        };
    }

    let result = client
        .stacks()
        .transfer(&stack.organization, &stack.project, &stack.name, destination)
        .await;

    let (status, message) = match result {
        Ok(_) => (
            TransferStatus::Transferred,
            format!("Transferred {} to {}", full_name, destination),
        ),
        Err(err) => (
            TransferStatus::Failed,
            format!("Failed to transfer {}: {}", full_name, err),
        ),
    };

    TransferReport {
        stack: full_name,
        destination: destination.to_string(),
        status,
        message,
    }
}

/// Transfer `stacks` to `destination` with at most `parallel` requests in flight.
///
/// A failed transfer is recorded in its report and does not stop the others.
/// `on_done` sees each report as it completes; the returned reports are in
/// completion order.
pub async fn transfer_stacks(
    client: &PulumiClient,
    stacks: Vec<Stack>,
    destination: &str,
    parallel: usize,
    dry_run: bool,
    mut on_done: impl FnMut(&TransferReport),
) -> Vec<TransferReport> {
    let mut results = stream::iter(stacks)
        .map(|stack| transfer_one(client, stack, destination, dry_run))
        .buffer_unordered(parallel.max(1));

    let mut reports = Vec::new();
    while let Some(report) = results.next().await {
        on_done(&report);
        reports.push(report);
    }
    reports
}

fn progress_bar(len: usize) -> ProgressBar {
    let pb = ProgressBar::new(len as u64);
    if let Ok(style) =
        ProgressStyle::default_bar().template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len}")
    {
        pb.set_style(style.progress_chars("#>-"));
    }
    pb
}

/// Run the stack transfer-all command
pub async fn run(ctx: &CommandContext, args: &TransferAllArgs) -> Result<()> {
    let stacks = ctx
        .client
        .stacks()
        .list(&args.source_org, args.project.as_deref())
        .await?;

    let scope = match &args.project {
        Some(project) => format!("organization '{}' project '{}'", args.source_org, project),
        None => format!("organization '{}'", args.source_org),
    };
    eprintln!("Found {} stacks in {}", stacks.len(), scope);

    if stacks.is_empty() {
        eprintln!("No stacks found to transfer.");
        return Ok(());
    }

    eprintln!();
    for (i, stack) in stacks.iter().enumerate() {
        eprintln!(
            "  {}. {} ({} resources)",
            i + 1,
            stack.full_name(),
            stack.resource_count
        );
    }
    eprintln!();

    if args.dry_run {
        eprintln!("{}", "Dry run: no stacks will be transferred.".yellow());
    } else if !args.yes {
        let confirmed = Confirm::new()
            .with_prompt(format!(
                "Transfer {} stacks from '{}' to '{}'?",
                stacks.len(),
                args.source_org,
                args.dest_org
            ))
            .default(false)
            .interact()?;

        if !confirmed {
            eprintln!("Cancelled.");
            return Ok(());
        }
    }

    debug!(
        "Transferring {} stacks with parallelism {}",
        stacks.len(),
        args.parallel
    );

    let pb = progress_bar(stacks.len());
    let reports = transfer_stacks(
        &ctx.client,
        stacks,
        &args.dest_org,
        args.parallel,
        args.dry_run,
        |report| {
            let mark = if report.succeeded() {
                "✓".green()
            } else {
                "✗".red()
            };
            let line = format!("{} {}", mark, report.message);
            // A hidden bar (stderr not a terminal) drops println output
            if pb.is_hidden() {
                eprintln!("{}", line);
            } else {
                pb.println(line);
            }
            pb.inc(1);
        },
    )
    .await;
    pb.finish_and_clear();

    let summary = TransferSummary::from_reports(&reports);
    match ctx.format {
        OutputFormat::Json => {
            let output = serde_json::json!({ "summary": summary, "results": reports });
            println!("{}", json::format_json(&output)?);
        }
        OutputFormat::Table => {
            eprintln!();
            eprintln!("Transfer summary:");
            eprintln!("  Total stacks: {}", summary.total);
            eprintln!("  Successful:   {}", summary.successful.to_string().as_str().green());
            if summary.failed > 0 {
                eprintln!("  Failed:       {}", summary.failed.to_string().as_str().red());
            } else {
                eprintln!("  Failed:       0");
            }
        }
    }
    Ok(())
}
