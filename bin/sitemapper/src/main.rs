//! Sitemapper CLI
//!
//! Generates `sitemap.xml` for a directory of static HTML pages.
//!
//! This is the binary entry point. The command implementations are in `lib.rs`.

use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::Result;
use sitemapper::cmd::{self, Overrides};

/// Command-line interface for sitemapper.
#[derive(Parser)]
#[command(
    name = "sitemapper",
    version,
    about = "Generate a sitemap.xml for a static HTML site"
)]
struct Cli {
    /// Path to configuration file (defaults to ./sitemap.toml when present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available CLI commands.
#[derive(clap::Subcommand)]
enum Commands {
    /// Scan the site and write the sitemap (default)
    Build {
        #[command(flatten)]
        site: SiteArgs,
        /// Print the sitemap instead of writing it
        #[arg(long)]
        dry_run: bool,
    },
    /// Validate configuration and report how many pages would be listed
    Check {
        #[command(flatten)]
        site: SiteArgs,
    },
}

/// Settings that override the configuration file.
#[derive(clap::Args, Default)]
struct SiteArgs {
    /// Site root directory to scan
    #[arg(short, long)]
    root: Option<PathBuf>,
    /// Output sitemap path
    #[arg(short, long)]
    output: Option<PathBuf>,
    /// Override site base URL (e.g., https://example.com)
    #[arg(long)]
    base_url: Option<String>,
}

impl From<SiteArgs> for Overrides {
    fn from(args: SiteArgs) -> Self {
        Self {
            root: args.root,
            output: args.output,
            base_url: args.base_url,
        }
    }
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    sitemapper::init_tracing(cli.verbose);

    let config_path = cli.config.as_deref();
    match cli.command.unwrap_or(Commands::Build {
        site: SiteArgs::default(),
        dry_run: false,
    }) {
        Commands::Build { site, dry_run } => {
            cmd::build::run(config_path, &site.into(), dry_run)?;
        }
        Commands::Check { site } => {
            cmd::check::run(config_path, &site.into())?;
        }
    }

    Ok(())
}
