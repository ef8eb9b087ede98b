//! CLI command definitions and handlers

use clap::{Args, Parser, Subcommand, ValueEnum};
pub use clap_complete::Shell;

use pulumi_cloud_client::client::MemberRole;

pub mod api;
pub mod completions;
pub mod context;
pub mod org;
pub mod policy;
pub mod project;
pub mod stack;
pub mod transfer;

pub use context::CommandContext;
pub use transfer::TransferAllArgs;

/// Output format options
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table
    #[default]
    Table,
    /// JSON envelope with `data` and `meta`, for scripts
    Json,
}

/// Command-line companion for the Pulumi Cloud API
#[derive(Parser, Debug)]
#[command(name = "pulumi-cloud")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (table, json)
    #[arg(
        long,
        global = true,
        env = "PULUMI_CLOUD_FORMAT",
        default_value = "table",
        hide_env = true
    )]
    pub format: OutputFormat,

    /// Override config file location
    #[arg(long, global = true, env = "PULUMI_CLOUD_CONFIG", hide_env = true)]
    pub config: Option<String>,

    /// Enable debug logging
    #[arg(long, global = true, env = "PULUMI_CLOUD_DEBUG", hide_env = true)]
    pub debug: bool,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Display version information
    Version,

    /// Manage organizations
    #[command(subcommand)]
    Org(OrgCommands),

    /// List and inspect projects
    #[command(subcommand)]
    Project(ProjectCommands),

    /// Manage stacks
    #[command(subcommand)]
    Stack(StackCommands),

    /// List and inspect policy packs
    #[command(subcommand)]
    Policy(PolicyCommands),

    /// Make a raw API request
    Api(ApiArgs),

    /// Generate shell completions
    Completions {
        /// Target shell
        shell: Shell,
    },
}

/// Organization subcommands
#[derive(Subcommand, Debug)]
pub enum OrgCommands {
    /// List organizations you belong to
    List,

    /// Show one organization
    Get {
        /// Organization name
        org: String,
    },

    /// List organization members (raw JSON)
    Members {
        /// Organization name
        org: String,
    },

    /// Invite a user to an organization
    Invite {
        /// Organization name
        org: String,

        /// Email address to invite
        email: String,

        /// Role to grant
        #[arg(long, value_enum, default_value = "member")]
        role: RoleArg,
    },
}

/// Member role as accepted on the command line
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum RoleArg {
    Admin,
    Member,
}

impl From<RoleArg> for MemberRole {
    fn from(role: RoleArg) -> Self {
        match role {
            RoleArg::Admin => MemberRole::Admin,
            RoleArg::Member => MemberRole::Member,
        }
    }
}

/// Project subcommands
#[derive(Subcommand, Debug)]
pub enum ProjectCommands {
    /// List projects in an organization
    List {
        #[arg(long)]
        org: String,
    },

    /// Show one project
    Get {
        #[arg(long)]
        org: String,

        /// Project name
        project: String,
    },
}

/// Stack subcommands
#[derive(Subcommand, Debug)]
pub enum StackCommands {
    /// List stacks in an organization, optionally for one project
    List {
        #[arg(long)]
        org: String,

        #[arg(long)]
        project: Option<String>,
    },

    /// Show one stack
    Get(StackRef),

    /// Show stack tags
    Tags(StackRef),

    /// Transfer one stack to another organization
    Transfer {
        #[command(flatten)]
        stack: StackRef,

        /// Destination organization
        #[arg(long)]
        to: String,
    },

    /// Transfer every stack of an organization (or project) to another organization
    TransferAll(TransferAllArgs),
}

/// Identifies a single stack
#[derive(Args, Debug, Clone)]
pub struct StackRef {
    #[arg(long)]
    pub org: String,

    #[arg(long)]
    pub project: String,

    #[arg(long)]
    pub stack: String,
}

/// Policy subcommands
#[derive(Subcommand, Debug)]
pub enum PolicyCommands {
    /// List policy packs in an organization
    List {
        #[arg(long)]
        org: String,
    },

    /// Show a policy pack version
    Get {
        #[arg(long)]
        org: String,

        /// Policy pack name
        name: String,

        /// Policy pack version
        version: String,
    },
}

/// Raw request arguments
#[derive(Args, Debug)]
pub struct ApiArgs {
    /// HTTP method (GET, POST, PUT, PATCH, DELETE)
    pub method: String,

    /// API path, e.g. /api/user
    pub path: String,

    /// Query parameter as key=value (repeatable)
    #[arg(long = "query", short = 'q', value_parser = api::parse_key_val)]
    pub query: Vec<(String, String)>,

    /// JSON request body
    #[arg(long)]
    pub body: Option<String>,
}
