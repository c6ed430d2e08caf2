//! Check command - validate configuration and scan root

use std::path::Path;

use color_eyre::eyre::{Result, bail};
use sitemapper_core::Config;
use sitemapper_generator::{PageCollector, build::absolute};

use super::{Overrides, load_config};

/// Run the check command.
///
/// Validates the configuration and reports how many pages a build would list.
pub fn run(config_path: Option<&Path>, overrides: &Overrides) -> Result<()> {
    tracing::info!(?config_path, "Checking configuration");

    println!("Checking configuration...");
    let config = match load_config(config_path, overrides) {
        Ok(c) => {
            println!("  ✓ Configuration valid");
            c
        }
        Err(e) => {
            println!("  ✗ Configuration invalid: {e:#}");
            bail!("Validation failed");
        }
    };

    println!("\nChecking site root...");
    let collector = PageCollector::new(&config);
    if let Err(e) = collector.check_root() {
        println!("  ✗ {e}");
        bail!("Validation failed");
    }
    let pages = collector.collect();
    println!(
        "  ✓ {} pages under {}",
        pages.len(),
        absolute(&config.scan.root_dir).display()
    );

    print_summary(&config);

    println!();
    println!("✓ All checks passed");
    Ok(())
}

fn print_summary(config: &Config) {
    println!();
    println!("Summary:");
    println!("  Base URL: {}", config.site.base_url);
    println!("  Output:   {}", absolute(&config.output.path).display());
    println!(
        "  Excluded files: {}",
        join(config.scan.exclude_files.iter())
    );
    println!("  Excluded dirs:  {}", join(config.scan.exclude_dirs.iter()));
}

fn join<'a>(names: impl Iterator<Item = &'a String>) -> String {
    names.map(String::as_str).collect::<Vec<_>>().join(", ")
}
