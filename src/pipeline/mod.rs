//! Pipeline domain: configuration, stage builders and the action runner

pub mod action;
pub mod config;
pub mod errors;
pub mod steps;
pub mod version;

// Re-export public types from submodules
pub use action::{Action, CommandPlan, GroupPlan, Plan};
pub use config::ActionConfig;
pub use errors::PipelineError;
pub use steps::{HostFacts, build_step, configure_step, submodule_update_step, test_step};
pub use version::CMakeVersion;

/// Assembles the full action from the resolved configuration and host
/// facts.
///
/// The stage order is fixed: optional submodule update, configure, build,
/// optional tests. Configure must precede build and test because it
/// creates the build directory they run in.
///
/// # Errors
///
/// Propagates the configure stage's [`PipelineError::Directory`] when the
/// build directory cannot be created.
pub fn assemble(config: &ActionConfig, facts: &HostFacts) -> Result<Action, PipelineError> {
    let mut action = Action::new();

    if config.submodule_update {
        action.add_group(submodule_update_step(facts));
    }

    action.add_group(configure_step(config, facts)?);
    action.add_group(build_step(config, facts));

    if config.run_tests {
        action.add_group(test_step(facts));
    }

    Ok(action)
}
