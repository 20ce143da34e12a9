use std::net::SocketAddr;
use std::path::PathBuf;

use blog_store::IdPolicy;
use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "blogd", about = "Blog post service", version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Log at debug level regardless of the configured level
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// TOML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Start the HTTP server
    Serve(ServeArgs),
    /// Print the effective configuration as TOML
    Config(ConfigArgs),
}

#[derive(Args)]
pub struct ServeArgs {
    #[arg(long)]
    pub bind: Option<SocketAddr>,
    #[arg(long, value_enum)]
    pub id_policy: Option<IdPolicyArg>,
    /// Reject incomplete bodies with 400 before they reach the store
    #[arg(long)]
    pub strict: bool,
}

#[derive(Args)]
pub struct ConfigArgs {}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum IdPolicyArg {
    Sequential,
    CollectionSize,
}

impl From<IdPolicyArg> for IdPolicy {
    fn from(arg: IdPolicyArg) -> Self {
        match arg {
            IdPolicyArg::Sequential => IdPolicy::Sequential,
            IdPolicyArg::CollectionSize => IdPolicy::CollectionSize,
        }
    }
}
