//! The top-level action pipeline

use crate::executor::GroupExecutor;
use crate::pipeline::PipelineError;
use serde::Serialize;
use std::io::Write;
use std::path::PathBuf;

/// Ordered list of stage groups making up one pipeline run.
///
/// Groups are appended during assembly and executed strictly in that
/// order; the first failing group aborts every remaining one and its
/// error propagates to the caller unchanged. Only the first failure is
/// ever reported.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Action {
    groups: Vec<GroupExecutor>,
}

impl Action {
    /// Creates an empty action.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a stage group. Only valid before [`run`](Self::run).
    pub fn add_group(&mut self, group: GroupExecutor) {
        self.groups.push(group);
    }

    /// Returns the stage groups in run order.
    #[must_use]
    pub fn groups(&self) -> &[GroupExecutor] {
        &self.groups
    }

    /// Runs every group in order, writing markers to stdout.
    ///
    /// # Errors
    ///
    /// Propagates the first failing group's [`PipelineError`] unchanged.
    pub fn run(&self) -> Result<(), PipelineError> {
        self.run_with(&mut std::io::stdout().lock())
    }

    /// Runs every group in order, writing markers to the given sink.
    ///
    /// # Errors
    ///
    /// Propagates the first failing group's [`PipelineError`] unchanged.
    pub fn run_with<W: Write>(&self, sink: &mut W) -> Result<(), PipelineError> {
        tracing::info!(groups = self.groups.len(), "Starting pipeline");

        for group in &self.groups {
            group.run_with(sink)?;
        }

        Ok(())
    }

    /// Returns a serializable view of what would run, for dry runs.
    #[must_use]
    pub fn plan(&self) -> Plan {
        Plan {
            groups: self
                .groups
                .iter()
                .map(|group| GroupPlan {
                    label: group.label().to_string(),
                    commands: group
                        .executors()
                        .iter()
                        .map(|executor| CommandPlan {
                            program: executor.command().program().to_string(),
                            args: executor.command().args().to_vec(),
                            cwd: executor.command().cwd().to_path_buf(),
                        })
                        .collect(),
                })
                .collect(),
        }
    }
}

/// Serializable description of a full pipeline run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Plan {
    /// Stage groups in run order.
    pub groups: Vec<GroupPlan>,
}

/// One stage group in a [`Plan`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroupPlan {
    /// Group label.
    pub label: String,
    /// Commands in run order.
    pub commands: Vec<CommandPlan>,
}

/// One command in a [`Plan`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommandPlan {
    /// Program name.
    pub program: String,
    /// Arguments in invocation order.
    pub args: Vec<String>,
    /// Working directory.
    pub cwd: PathBuf,
}
