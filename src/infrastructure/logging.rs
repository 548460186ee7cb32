//! Logging configuration
//!
//! Initializes tracing for the binary. Workflow-facing output (group
//! markers, info lines) goes through [`super::workflow`] instead so it
//! stays on plain stdout for the CI runner to interpret.

/// Initializes logging with the specified level
pub fn init_logging(level: &str) {
    use tracing_subscriber::{EnvFilter, fmt};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
