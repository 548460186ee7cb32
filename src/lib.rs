//! # Cmakeline - a CMake build step for CI pipelines
//!
//! Cmakeline sequences the external tools of a native build job: it
//! optionally updates git submodules, configures a CMake build tree,
//! compiles it and optionally runs the ctest suite. Each stage is
//! reported as a named log group and the first failing command fails
//! the whole job.
//!
//! ## Quick Start
//!
//! ```bash
//! INPUT_CONFIG=Release cmakeline
//! ```
//!
//! ## Features
//!
//! - **Grouped logs**: every stage opens and closes a `::group::` marker,
//!   even on the failure path
//! - **Input-driven**: stages are selected by the same named inputs a CI
//!   runner provides (`submodule_update`, `run_tests`, ...)
//! - **Parallel builds**: picks `--parallel N` or `-- -jN` from the
//!   detected CMake version and CPU count
//! - **Dry runs**: print the assembled command plan as JSON without
//!   spawning anything
//!
//! ## License
//!
//! Licensed under either of
//! - Apache License, Version 2.0 ([LICENSE-APACHE](LICENSE-APACHE) or <https://www.apache.org/licenses/LICENSE-2.0>)
//! - MIT license ([LICENSE-MIT](LICENSE-MIT) or <https://opensource.org/licenses/MIT>)
//!
//! at your option.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

pub mod executor;
pub mod infrastructure;
pub mod pipeline;

// Prelude module for common imports
pub mod prelude;

// Re-export commonly used types
pub use executor::{Command, Executor, GroupExecutor};
pub use infrastructure::{EnvInputs, InputProvider, MapInputs, workflow};
pub use pipeline::{
    Action, ActionConfig, CMakeVersion, CommandPlan, GroupPlan, HostFacts, PipelineError, Plan,
};

/// Version of the cmakeline crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
