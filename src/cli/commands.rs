use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::digest::{DigestOptions, build_digest};
use crate::filters::NoiseFilter;
use crate::git::{DEFAULT_MAX_COMMITS, ReadOptions};
use crate::grouping::DEFAULT_MAX_GROUPS;

#[derive(Parser)]
#[command(name = "commit-digest")]
#[command(version = "0.1.0")]
#[command(about = "Digest a repository's recent commit history for summarization", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render the grouped commit digest
    Digest(HistoryArgs),
    /// Show window statistics without the digest text
    Stats(HistoryArgs),
}

#[derive(Args)]
pub struct HistoryArgs {
    /// Path to the git repository
    #[arg(default_value = ".")]
    pub repo: PathBuf,

    /// Branch or ref to analyze
    #[arg(short, long, default_value = "HEAD")]
    pub branch: String,

    /// Maximum number of commits to read
    #[arg(long, default_value_t = DEFAULT_MAX_COMMITS)]
    pub max_commits: usize,

    /// Only commits at or after this date (RFC 3339 or YYYY-MM-DD)
    #[arg(long)]
    pub since: Option<String>,

    /// Only commits at or before this date (RFC 3339 or YYYY-MM-DD)
    #[arg(long)]
    pub until: Option<String>,

    /// Maximum number of groups before folding the rest into "Older activity"
    #[arg(long, default_value_t = DEFAULT_MAX_GROUPS)]
    pub max_groups: usize,

    /// Give up on the history read after this many seconds
    #[arg(long)]
    pub timeout_secs: Option<u64>,

    /// Extra author identity to treat as automation (repeatable)
    #[arg(long = "bot-author", value_name = "NAME")]
    pub bot_authors: Vec<String>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match &cli.command {
        Some(Commands::Digest(args)) => render_digest(args),
        Some(Commands::Stats(args)) => show_stats(args),
        None => {
            println!("Use --help for usage information");
            Ok(())
        }
    }
}

fn render_digest(args: &HistoryArgs) -> Result<()> {
    let digest = build_digest(&digest_options(args))
        .with_context(|| format!("Failed to digest history of {}", args.repo.display()))?;

    if digest.truncated {
        eprintln!("Note: history truncated to the {} most recent commits", args.max_commits);
    }
    if digest.removed_count > 0 {
        eprintln!("Note: filtered {} noisy commit(s)", digest.removed_count);
    }

    match args.format {
        OutputFormat::Text => println!("{}", digest.text),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&digest)?),
    }

    Ok(())
}

fn show_stats(args: &HistoryArgs) -> Result<()> {
    let digest = build_digest(&digest_options(args))
        .with_context(|| format!("Failed to digest history of {}", args.repo.display()))?;

    println!("Commit History Statistics");
    println!("=========================");
    println!("Repository: {}", args.repo.display());
    println!("Branch: {}", args.branch);
    println!("Commits kept: {}", digest.commit_count);
    println!("Noisy commits removed: {}", digest.removed_count);
    println!("Groups: {}", digest.group_count);
    println!("History truncated: {}", if digest.truncated { "yes" } else { "no" });

    Ok(())
}

fn digest_options(args: &HistoryArgs) -> DigestOptions {
    let mut filter = NoiseFilter::default();
    for author in &args.bot_authors {
        filter.add_bot_author(author);
    }

    DigestOptions {
        read: ReadOptions {
            repo: args.repo.clone(),
            branch: args.branch.clone(),
            max_commits: args.max_commits,
            since: args.since.clone(),
            until: args.until.clone(),
        },
        max_groups: args.max_groups,
        filter,
        timeout: args.timeout_secs.map(Duration::from_secs),
    }
}
