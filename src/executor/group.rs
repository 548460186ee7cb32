//! Named groups of sequential commands

use crate::executor::Executor;
use crate::infrastructure::workflow::LogGroup;
use crate::pipeline::PipelineError;
use std::io::Write;

/// A labelled, ordered sequence of [`Executor`]s forming one pipeline stage.
///
/// Running a group opens a named log group, runs each child strictly in
/// order and closes the group again. The first child failure stops the
/// remaining children and propagates unchanged, but the closing marker is
/// still written so the structured log stays well-formed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupExecutor {
    label: String,
    executors: Vec<Executor>,
}

impl GroupExecutor {
    /// Creates a group with the given label and children.
    #[must_use]
    pub fn new(label: impl Into<String>, executors: Vec<Executor>) -> Self {
        Self {
            label: label.into(),
            executors,
        }
    }

    /// Appends another executor. Only valid before the group runs.
    pub fn add(&mut self, executor: Executor) {
        self.executors.push(executor);
    }

    /// Returns the group label.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Returns the child executors in run order.
    #[must_use]
    pub fn executors(&self) -> &[Executor] {
        &self.executors
    }

    /// Runs the group, writing its markers to stdout.
    ///
    /// # Errors
    ///
    /// Propagates the first child's [`PipelineError`] unchanged.
    pub fn run(&self) -> Result<(), PipelineError> {
        self.run_with(&mut std::io::stdout().lock())
    }

    /// Runs the group, writing its markers to the given sink.
    ///
    /// # Errors
    ///
    /// Propagates the first child's [`PipelineError`] unchanged.
    pub fn run_with<W: Write>(&self, sink: &mut W) -> Result<(), PipelineError> {
        let _group = LogGroup::open(sink, &self.label);
        tracing::info!(group = %self.label, commands = self.executors.len(), "Running group");

        for executor in &self.executors {
            executor.run()?;
        }

        Ok(())
    }
}
