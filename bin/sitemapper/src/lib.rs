//! Sitemapper CLI Library
//!
//! Command implementations for the `sitemapper` binary.
//!
//! # Modules
//!
//! - [`cmd`] - Command implementations (build, check)
//!
//! # Example
//!
//! ```no_run
//! use sitemapper::cmd::{self, Overrides};
//!
//! // Scan the working directory and write sitemap.xml
//! cmd::build::run(None, &Overrides::default(), false).unwrap();
//! ```

pub mod cmd;

// Re-export core types for convenience
pub use sitemapper_core::Config;
pub use sitemapper_generator::{BuildStats, Builder, PageEntry};

/// Initialize tracing with the specified verbosity level.
///
/// # Arguments
///
/// * `verbose` - Verbosity level (0 = WARN, 1 = INFO, 2 = DEBUG, 3+ = TRACE)
pub fn init_tracing(verbose: u8) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .init();
}
