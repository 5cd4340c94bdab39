//! landkit CLI Library
//!
//! Command implementations for the landkit page renderer. The binary entry
//! point parses arguments and hands off to [`cmd`].
//!
//! # Modules
//!
//! - [`cmd`] - Command implementations (build, render, check, providers)
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//!
//! use landkit::cmd;
//!
//! // Build every routed page
//! cmd::build::run(Path::new("landkit.toml"), None, false).unwrap();
//! ```

pub mod cmd;

// Re-export core types for convenience
pub use landkit_core::{Config, Site};
pub use landkit_generator::{BuildStats, Builder};

/// Initialize tracing with the specified verbosity level.
///
/// # Arguments
///
/// * `verbose` - Verbosity level (0 = WARN, 1 = INFO, 2 = DEBUG, 3+ = TRACE)
///
/// # Example
///
/// ```no_run
/// landkit::init_tracing(2); // Enable DEBUG level logging
/// ```
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
