use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "shard",
    about = "Shardstore: sharded on-disk keyed object store",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[command(flatten)]
    pub store: StoreArgs,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Clone, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Store shape. Flags override the config file, which overrides defaults.
#[derive(Args, Debug, Default)]
pub struct StoreArgs {
    /// TOML file with `root`, `partitions` and `levels`
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
    /// Store root directory
    #[arg(long, global = true)]
    pub root: Option<PathBuf>,
    /// Number of partition directories (1-16)
    #[arg(long, global = true)]
    pub partitions: Option<usize>,
    /// Number of nested level directories (0-40)
    #[arg(long, global = true)]
    pub levels: Option<usize>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Create the store root and partition directories
    Init,
    /// Store an object read from a file or stdin
    Put(PutArgs),
    /// Write an object to a file or stdout
    Get(GetArgs),
    /// Check whether an object is stored (exit status 1 if not)
    Exists(KeyArgs),
    /// Print the on-disk path for a key
    Locate(KeyArgs),
    /// Remove every object and recreate empty partitions
    Clean(CleanArgs),
}

#[derive(Args)]
pub struct KeyArgs {
    pub key: String,
}

#[derive(Args)]
pub struct PutArgs {
    pub key: String,
    /// Read the payload from this file instead of stdin
    #[arg(short, long)]
    pub file: Option<PathBuf>,
}

#[derive(Args)]
pub struct GetArgs {
    pub key: String,
    /// Write the payload to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Args)]
pub struct CleanArgs {
    /// Required; cleaning deletes every stored object
    #[arg(long)]
    pub yes: bool,
}
