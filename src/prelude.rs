//! Prelude module for common imports

// Re-export all pipeline types with full paths
pub use crate::pipeline::action::{Action, CommandPlan, GroupPlan, Plan};
pub use crate::pipeline::assemble;
pub use crate::pipeline::config::ActionConfig;
pub use crate::pipeline::errors::PipelineError;
pub use crate::pipeline::steps::{
    HostFacts, build_step, configure_step, submodule_update_step, test_step,
};
pub use crate::pipeline::version::CMakeVersion;

// Re-export executor types
pub use crate::executor::{Command, Executor, GroupExecutor};

// Re-export infrastructure types
pub use crate::infrastructure::{EnvInputs, InputProvider, MapInputs, workflow};
