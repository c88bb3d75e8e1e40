//! Command-line interface.

pub mod apply;
pub mod completions;
pub mod output;

use clap::{Args, Parser, Subcommand};

use crate::core::constants::DEFAULT_API_ENDPOINT;

/// ghvar - Declarative GitHub Actions secrets and variables.
#[derive(Parser)]
#[command(
    name = "ghvar",
    about = "Declaratively manage one GitHub Actions secret or variable",
    version
)]
pub struct Cli {
    /// Show debug logs (overridden by GHVAR_LOG)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Where the value lives.
#[derive(Args, Debug, Clone)]
pub struct ScopeArgs {
    /// Repository in owner/repo form
    #[arg(short, long)]
    pub repository: Option<String>,

    /// Deployment environment of the repository
    #[arg(short, long, requires = "repository")]
    pub environment: Option<String>,

    /// Organization
    #[arg(short, long, conflicts_with_all = ["repository", "environment"])]
    pub organization: Option<String>,
}

/// How to reach GitHub.
#[derive(Args, Debug, Clone)]
pub struct ConnectionArgs {
    /// Personal access token
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// REST API base URL (GitHub Enterprise: https://HOST/api/v3)
    #[arg(long, env = "GITHUB_API_URL", default_value = DEFAULT_API_ENDPOINT)]
    pub api_url: String,
}

/// Arguments of `ghvar apply`.
#[derive(Args, Debug)]
pub struct ApplyArgs {
    /// Secret or variable name (e.g., API_KEY)
    pub name: String,

    /// Value; read from stdin or prompted when omitted
    pub value: Option<String>,

    #[command(flatten)]
    pub scope: ScopeArgs,

    /// Manage a variable (plaintext) instead of a secret
    #[arg(long)]
    pub variable: bool,

    /// Base64-encode the value before sending
    #[arg(long)]
    pub base64: bool,

    /// Organization visibility: all, private or selected
    #[arg(long)]
    pub visibility: Option<String>,

    /// Repository id granted access with --visibility selected (repeatable)
    #[arg(long = "selected-repository-id", value_name = "ID")]
    pub selected_repository_ids: Vec<u64>,

    /// Desired state: present or absent
    #[arg(long, default_value = "present")]
    pub state: String,

    #[command(flatten)]
    pub connection: ConnectionArgs,

    /// Print the outcome as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments of `ghvar delete`.
#[derive(Args, Debug)]
pub struct DeleteArgs {
    /// Secret or variable name
    pub name: String,

    #[command(flatten)]
    pub scope: ScopeArgs,

    /// Delete a variable instead of a secret
    #[arg(long)]
    pub variable: bool,

    #[command(flatten)]
    pub connection: ConnectionArgs,

    /// Print the outcome as JSON
    #[arg(long)]
    pub json: bool,
}

/// Top-level commands.
#[derive(Subcommand)]
pub enum Command {
    /// Make a secret or variable match the desired state
    Apply(ApplyArgs),

    /// Ensure a secret or variable is absent (same as apply --state absent)
    Delete(DeleteArgs),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Supported shells for completions.
#[derive(clap::ValueEnum, Clone, Debug)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}

/// Execute a command.
pub fn execute(command: Command) -> crate::error::Result<()> {
    match command {
        Command::Apply(args) => apply::apply(args),
        Command::Delete(args) => apply::delete(args),
        Command::Completions { shell } => completions::execute(shell),
    }
}
