use clap::Parser;
use std::path::PathBuf;

use crate::release_audit::domain::Cutoff;

/// Report when every package pinned in an npm lockfile was published
#[derive(Parser, Debug)]
#[command(name = "npm-release-audit")]
#[command(version)]
#[command(
    about = "Report when every package pinned in an npm lockfile was published",
    long_about = "Walks the nested \"dependencies\" tree of an npm lockfile, looks up the \
                  publication time of every package version in the npm registry, and \
                  optionally lists the packages published after a cutoff timestamp."
)]
pub struct Args {
    /// Path to the JSON lockfile (package-lock.json / npm-shrinkwrap.json)
    #[arg(value_name = "LOCKFILE")]
    pub lockfile: PathBuf,

    /// Cutoff timestamp in RFC 3339 form, e.g. 2023-01-01T00:00:00Z
    #[arg(value_name = "CUTOFF")]
    pub cutoff: Option<Cutoff>,

    /// Directory receiving the run log and result files [default: out]
    #[arg(short, long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Base URL of the npm registry [default: https://registry.npmjs.org]
    #[arg(long, value_name = "URL")]
    pub registry: Option<String>,

    /// Path to a config file (defaults to npm-release-audit.config.yml in the current directory)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
