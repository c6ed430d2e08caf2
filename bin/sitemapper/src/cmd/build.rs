//! Build command - generates the sitemap

use std::path::Path;

use color_eyre::eyre::{Result, WrapErr};
use sitemapper_generator::{Builder, build::absolute};

use super::{Overrides, load_config};

/// Run the build command.
///
/// Scans the site root and writes the sitemap. With `dry_run` the XML is
/// printed to stdout instead of written.
pub fn run(config_path: Option<&Path>, overrides: &Overrides, dry_run: bool) -> Result<()> {
    tracing::info!(?config_path, ?overrides, dry_run, "Starting build");

    let config = load_config(config_path, overrides)?;
    let sample_size = config.output.sample_size;
    let builder = Builder::new(config);

    println!(
        "Scanning: {}",
        absolute(&builder.config().scan.root_dir).display()
    );

    if dry_run {
        let rendered = builder.render();
        println!("{}", rendered.xml);
        println!();
        println!("  Dry run: {} pages, nothing written", rendered.entries.len());
        return Ok(());
    }

    let stats = builder.build().wrap_err("Build failed")?;

    // Print build statistics
    println!("{}", "-".repeat(30));
    println!("  Sitemap generated: {} pages", stats.count());
    println!("  Output: {}", stats.output.display());
    println!("{}", "-".repeat(30));
    for entry in stats.sample(sample_size) {
        println!("  {}", entry.loc);
    }
    if stats.remaining(sample_size) > 0 {
        println!("  ...");
    }

    tracing::info!(
        count = stats.count(),
        duration_ms = stats.duration_ms,
        "Build completed successfully"
    );

    Ok(())
}
