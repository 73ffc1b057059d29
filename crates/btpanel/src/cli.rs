//! Clap derive structures for the `btpanel` CLI.
//!
//! Defines the command tree, global flags, and shared argument groups.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

// ── Top-Level CLI ────────────────────────────────────────────────────

/// btpanel -- manage BT (BaoTa) server panels from the command line
#[derive(Debug, Parser)]
#[command(
    name = "btpanel",
    version,
    about = "Manage BT panel servers from the command line",
    long_about = "Talks to the panel's HTTP API using an API key from\n\
        Panel Settings > API. The caller's IP must be on the panel's API whitelist.",
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Command,
}

// ── Global Options ───────────────────────────────────────────────────

#[derive(Debug, Args)]
#[allow(clippy::struct_excessive_bools)]
pub struct GlobalOpts {
    /// Panel base URL, e.g. https://203.0.113.5:8888
    #[arg(long, short = 'H', env = "BT_PANEL_HOST", global = true)]
    pub host: Option<String>,

    /// Panel API key
    #[arg(long, env = "BT_API_KEY", global = true, hide_env_values = true)]
    pub api_key: Option<String>,

    /// Request timeout in seconds [default: TIMEOUT or 30]
    #[arg(long, global = true)]
    pub timeout: Option<u64>,

    /// Accept self-signed TLS certificates
    #[arg(long, short = 'k', global = true)]
    pub insecure: bool,

    /// Trust an extra CA certificate (PEM)
    #[arg(long, global = true, value_name = "PATH")]
    pub ca_cert: Option<PathBuf>,

    /// Log request fields and response bodies
    #[arg(long, global = true)]
    pub debug: bool,

    /// Output format
    #[arg(
        long,
        short = 'o',
        env = "BT_OUTPUT",
        default_value = "table",
        global = true
    )]
    pub output: OutputFormat,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Skip confirmation prompts
    #[arg(long, short = 'y', global = true)]
    pub yes: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Pretty table (default, interactive)
    Table,
    /// Pretty-printed JSON
    Json,
    /// Compact single-line JSON
    JsonCompact,
    /// YAML
    Yaml,
}

// ── Top-Level Command Enum ───────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Host status and panel updates
    #[command(alias = "sys")]
    System(SystemArgs),

    /// Manage websites
    #[command(alias = "site")]
    Sites(SitesArgs),

    /// Manage FTP accounts
    Ftp(FtpArgs),

    /// Manage databases
    #[command(alias = "database")]
    Db(DbArgs),

    /// Call any endpoint by name or path with key=value form fields
    Call(CallArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

// ── Shared List Arguments ────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Filter by name (substring match on the panel)
    #[arg(long, short = 's')]
    pub search: Option<String>,

    /// Page number
    #[arg(long, default_value_t = 1)]
    pub page: u32,

    /// Rows per page
    #[arg(long, short = 'l', default_value_t = 15)]
    pub limit: u32,
}

// ── System ───────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct SystemArgs {
    #[command(subcommand)]
    pub command: SystemCommand,
}

#[derive(Debug, Subcommand)]
pub enum SystemCommand {
    /// OS, uptime, CPU, memory and panel version
    Total,
    /// Disk partitions and usage
    Disk,
    /// Live CPU, memory, load and network counters
    #[command(alias = "net")]
    Network,
    /// Pending install tasks
    Tasks,
    /// Check for a panel update
    Update {
        /// Force a fresh check instead of the cached result
        #[arg(long)]
        check: bool,
        /// Apply the update if one is available
        #[arg(long)]
        force: bool,
    },
}

// ── Sites ────────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct SitesArgs {
    #[command(subcommand)]
    pub command: SitesCommand,
}

#[derive(Debug, Subcommand)]
pub enum SitesCommand {
    /// List sites
    #[command(alias = "ls")]
    List(ListArgs),
    /// List site categories
    Types,
    /// List installed PHP versions
    Php,
    /// Start a stopped site
    Start {
        /// Site name (primary domain)
        name: String,
    },
    /// Stop a site
    Stop {
        /// Site name (primary domain)
        name: String,
    },
    /// Delete a site
    #[command(alias = "rm")]
    Delete {
        /// Site name (primary domain)
        name: String,
        /// Also delete the site's FTP account
        #[arg(long)]
        ftp: bool,
        /// Also delete the site's database
        #[arg(long)]
        database: bool,
        /// Also delete the site's root directory
        #[arg(long)]
        path: bool,
    },
    /// List a site's backups
    Backups {
        /// Site name (primary domain)
        name: String,
        #[arg(long, default_value_t = 1)]
        page: u32,
        #[arg(long, short = 'l', default_value_t = 5)]
        limit: u32,
    },
    /// Back a site up now
    Backup {
        /// Site name (primary domain)
        name: String,
    },
}

// ── FTP ──────────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct FtpArgs {
    #[command(subcommand)]
    pub command: FtpCommand,
}

#[derive(Debug, Subcommand)]
pub enum FtpCommand {
    /// List FTP accounts
    #[command(alias = "ls")]
    List(ListArgs),
    /// Enable an account
    Enable { username: String },
    /// Disable an account
    Disable { username: String },
    /// Change an account's password
    Passwd {
        username: String,
        /// New password (prompted when omitted)
        #[arg(long)]
        password: Option<String>,
    },
}

// ── Databases ────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct DbArgs {
    #[command(subcommand)]
    pub command: DbCommand,
}

#[derive(Debug, Subcommand)]
pub enum DbCommand {
    /// List databases
    #[command(alias = "ls")]
    List(ListArgs),
    /// Back a database up now
    Backup { name: String },
    /// Reset a database user's password
    Passwd {
        name: String,
        /// New password (prompted when omitted)
        #[arg(long)]
        password: Option<String>,
    },
}

// ── Raw calls ────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct CallArgs {
    /// Endpoint name (e.g. GetSystemTotal) or path starting with '/'
    pub endpoint: String,

    /// Form fields as key=value
    #[arg(value_name = "KEY=VALUE")]
    pub fields: Vec<String>,
}

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: clap_complete::Shell,
}
