//! pulumi-cloud CLI - command-line companion for the Pulumi Cloud API

use clap::Parser;
use log::LevelFilter;

mod cli;
mod output;

use cli::{
    Cli, CommandContext, Commands, OrgCommands, PolicyCommands, ProjectCommands, StackCommands,
};
use pulumi_cloud_client::Result;

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

fn init_logging(debug: bool) {
    let level = if debug {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    // RUST_LOG still refines per-module filters on top of the base level
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

async fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.debug);

    let ctx = || CommandContext::new(cli.format, cli.config.as_deref());

    match &cli.command {
        Commands::Version => {
            println!("pulumi-cloud version {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        Commands::Completions { shell } => {
            cli::completions::run(*shell);
            Ok(())
        }
        Commands::Org(org_cmd) => match org_cmd {
            OrgCommands::List => cli::org::list(&ctx()?).await,
            OrgCommands::Get { org } => cli::org::get(&ctx()?, org).await,
            OrgCommands::Members { org } => cli::org::members(&ctx()?, org).await,
            OrgCommands::Invite { org, email, role } => {
                cli::org::invite(&ctx()?, org, email, (*role).into()).await
            }
        },
        Commands::Project(project_cmd) => match project_cmd {
            ProjectCommands::List { org } => cli::project::list(&ctx()?, org).await,
            ProjectCommands::Get { org, project } => {
                cli::project::get(&ctx()?, org, project).await
            }
        },
        Commands::Stack(stack_cmd) => match stack_cmd {
            StackCommands::List { org, project } => {
                cli::stack::list(&ctx()?, org, project.as_deref()).await
            }
            StackCommands::Get(stack) => cli::stack::get(&ctx()?, stack).await,
            StackCommands::Tags(stack) => cli::stack::tags(&ctx()?, stack).await,
            StackCommands::Transfer { stack, to } => {
                cli::stack::transfer(&ctx()?, stack, to).await
            }
            StackCommands::TransferAll(args) => cli::transfer::run(&ctx()?, args).await,
        },
        Commands::Policy(policy_cmd) => match policy_cmd {
            PolicyCommands::List { org } => cli::policy::list(&ctx()?, org).await,
            PolicyCommands::Get { org, name, version } => {
                cli::policy::get(&ctx()?, org, name, version).await
            }
        },
        Commands::Api(args) => cli::api::run(&ctx()?, args).await,
    }
}
