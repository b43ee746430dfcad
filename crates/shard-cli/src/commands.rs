use std::fs::File;
use std::io::{self, Read, Write};
use std::process::ExitCode;

use anyhow::{bail, Context};
use colored::Colorize;
use serde_json::json;
use shard_store::{DiskStore, ObjectStore, StoreConfig};
use shard_types::KeyDigest;

use crate::cli::*;

/// How a command that ran to completion should exit.
#[derive(Debug, PartialEq, Eq)]
pub enum Outcome {
    Done,
    /// The queried object is not stored.
    Absent,
}

impl From<Outcome> for ExitCode {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Done => ExitCode::SUCCESS,
            Outcome::Absent => ExitCode::FAILURE,
        }
    }
}

pub fn run_command(cli: Cli) -> anyhow::Result<Outcome> {
    let config = resolve_config(&cli.store)?;
    let format = cli.format;

    match cli.command {
        Command::Init => cmd_init(&config, &format),
        Command::Put(args) => cmd_put(&config, args),
        Command::Get(args) => cmd_get(&config, args),
        Command::Exists(args) => cmd_exists(&config, args, &format),
        Command::Locate(args) => cmd_locate(&config, args, &format),
        Command::Clean(args) => cmd_clean(&config, args),
    }
}

/// Defaults, then the config file, then command-line flags.
pub fn resolve_config(args: &StoreArgs) -> anyhow::Result<StoreConfig> {
    let mut config = match &args.config {
        Some(path) => StoreConfig::load(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => StoreConfig::default(),
    };
    if let Some(root) = &args.root {
        config.root = root.clone();
    }
    if let Some(partitions) = args.partitions {
        config.partitions = partitions;
    }
    if let Some(levels) = args.levels {
        config.levels = levels;
    }
    Ok(config)
}

fn open(config: &StoreConfig) -> anyhow::Result<DiskStore> {
    DiskStore::from_config(config)
        .with_context(|| format!("opening store at {}", config.root.display()))
}

fn cmd_init(config: &StoreConfig, format: &OutputFormat) -> anyhow::Result<Outcome> {
    let store = open(config)?;
    match format {
        OutputFormat::Json => println!(
            "{}",
            json!({
                "root": store.root(),
                "partitions": store.partitions(),
                "levels": store.levels(),
            })
        ),
        OutputFormat::Text => {
            println!(
                "{} Initialized store in {}",
                "✓".green().bold(),
                store.root().display().to_string().bold()
            );
            println!("  Partitions: {}", store.partitions().to_string().cyan());
            println!("  Levels: {}", store.levels().to_string().cyan());
        }
    }
    Ok(Outcome::Done)
}

fn cmd_put(config: &StoreConfig, args: PutArgs) -> anyhow::Result<Outcome> {
    let store = open(config)?;
    let mut src: Box<dyn Read> = match &args.file {
        Some(path) => Box::new(
            File::open(path).with_context(|| format!("opening {}", path.display()))?,
        ),
        None => Box::new(io::stdin().lock()),
    };
    store
        .put(&args.key, &mut src)
        .with_context(|| format!("storing {}", args.key))?;
    tracing::info!(key = %args.key, "stored");
    Ok(Outcome::Done)
}

fn cmd_get(config: &StoreConfig, args: GetArgs) -> anyhow::Result<Outcome> {
    let store = open(config)?;
    let data = store
        .get(&args.key)
        .with_context(|| format!("retrieving {}", args.key))?;
    match &args.output {
        Some(path) => std::fs::write(path, &data)
            .with_context(|| format!("writing {}", path.display()))?,
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(&data)?;
            stdout.flush()?;
        }
    }
    Ok(Outcome::Done)
}

fn cmd_exists(
    config: &StoreConfig,
    args: KeyArgs,
    format: &OutputFormat,
) -> anyhow::Result<Outcome> {
    let store = open(config)?;
    let exists = store.exists(&args.key)?;
    match format {
        OutputFormat::Json => println!("{}", json!({ "key": args.key, "exists": exists })),
        OutputFormat::Text if exists => println!("{} {}", "✓".green(), args.key),
        OutputFormat::Text => println!("{} {}", "✗".red(), args.key),
    }
    Ok(if exists { Outcome::Done } else { Outcome::Absent })
}

fn cmd_locate(
    config: &StoreConfig,
    args: KeyArgs,
    format: &OutputFormat,
) -> anyhow::Result<Outcome> {
    let store = open(config)?;
    let path = store.path_of(&args.key);
    match format {
        OutputFormat::Json => println!(
            "{}",
            json!({
                "key": args.key,
                "digest": KeyDigest::of(&args.key).to_hex(),
                "path": path,
            })
        ),
        OutputFormat::Text => println!("{}", path.display()),
    }
    Ok(Outcome::Done)
}

fn cmd_clean(config: &StoreConfig, args: CleanArgs) -> anyhow::Result<Outcome> {
    if !args.yes {
        bail!("refusing to clean {} without --yes", config.root.display());
    }
    let store = open(config)?;
    store.clean()?;
    println!("{} Cleaned {}", "✓".green().bold(), store.root().display());
    Ok(Outcome::Done)
}
