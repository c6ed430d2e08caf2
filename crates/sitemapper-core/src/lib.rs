//! Sitemapper Core Library
//!
//! Configuration and error handling shared by the sitemapper crates.

pub mod config;
pub mod error;

pub use config::Config;
pub use error::{CoreError, Result};
