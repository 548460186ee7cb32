//! Single external command execution
//!
//! An [`Executor`] wraps exactly one [`Command`] and runs it synchronously,
//! streaming its output to the console. A non-zero exit status is the only
//! failure mode and is fatal to the enclosing group; there is no retry.

use crate::pipeline::PipelineError;
use std::path::{Path, PathBuf};
use std::process::{Command as StdCommand, Stdio};

/// One external command invocation: program, arguments and the directory
/// it runs in.
///
/// Immutable once built. The working directory is carried explicitly on
/// every command instead of mutating the process-wide current directory,
/// so later stages can rely on running inside the build tree without any
/// hidden global state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    /// Program name, resolved on the host `PATH`.
    program: String,
    /// Arguments, in invocation order.
    args: Vec<String>,
    /// Directory the program runs in.
    cwd: PathBuf,
}

impl Command {
    /// Creates a new command.
    pub fn new<I, S>(program: impl Into<String>, args: I, cwd: impl Into<PathBuf>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
            cwd: cwd.into(),
        }
    }

    /// Returns the program name.
    #[must_use]
    pub fn program(&self) -> &str {
        &self.program
    }

    /// Returns the arguments.
    #[must_use]
    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// Returns the working directory.
    #[must_use]
    pub fn cwd(&self) -> &Path {
        &self.cwd
    }

    /// Renders the command the way it would appear on a shell prompt.
    #[must_use]
    pub fn display_line(&self) -> String {
        let mut line = self.program.clone();
        for arg in &self.args {
            line.push(' ');
            line.push_str(arg);
        }
        line
    }
}

/// Runs one [`Command`] to completion.
///
/// Created at step-build time and executed exactly once; success or failure
/// is communicated purely through the returned `Result`, no state is kept
/// after execution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Executor {
    command: Command,
}

impl Executor {
    /// Creates an executor for the given command.
    #[must_use]
    pub fn new(command: Command) -> Self {
        Self { command }
    }

    /// Returns the wrapped command.
    #[must_use]
    pub fn command(&self) -> &Command {
        &self.command
    }

    /// Spawns the command and blocks until it exits.
    ///
    /// Output streams directly to the parent's stdout/stderr so it
    /// interleaves with the surrounding log group markers.
    ///
    /// # Errors
    ///
    /// Returns [`PipelineError::CommandSpawn`] when the program cannot be
    /// started and [`PipelineError::CommandFailed`] on any non-zero exit.
    pub fn run(&self) -> Result<(), PipelineError> {
        tracing::debug!(
            program = %self.command.program,
            args = ?self.command.args,
            cwd = %self.command.cwd.display(),
            "Running command"
        );

        let status = StdCommand::new(&self.command.program)
            .args(&self.command.args)
            .current_dir(&self.command.cwd)
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|e| PipelineError::CommandSpawn {
                program: self.command.program.clone(),
                error: e.to_string(),
            })?;

        if status.success() {
            return Ok(());
        }

        tracing::error!(
            program = %self.command.program,
            code = ?status.code(),
            "Command failed"
        );

        Err(PipelineError::CommandFailed {
            program: self.command.program.clone(),
            args: self.command.args.clone(),
            code: status.code(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn cwd() -> PathBuf {
        std::env::current_dir().unwrap()
    }

    #[test]
    fn test_zero_exit_returns_ok() {
        let exec = Executor::new(Command::new("true", Vec::<String>::new(), cwd()));
        assert!(exec.run().is_ok());
    }

    #[test]
    fn test_nonzero_exit_reports_program_args_and_code() {
        let exec = Executor::new(Command::new("sh", ["-c", "exit 3"], cwd()));
        let err = exec.run().unwrap_err();
        assert_eq!(
            err,
            PipelineError::CommandFailed {
                program: "sh".to_string(),
                args: vec!["-c".to_string(), "exit 3".to_string()],
                code: Some(3),
            }
        );
    }

    #[test]
    fn test_missing_program_is_a_spawn_error() {
        let exec = Executor::new(Command::new(
            "cmakeline-no-such-tool",
            Vec::<String>::new(),
            cwd(),
        ));
        let err = exec.run().unwrap_err();
        assert!(matches!(err, PipelineError::CommandSpawn { program, .. }
            if program == "cmakeline-no-such-tool"));
    }

    #[test]
    fn test_command_runs_in_given_directory() {
        let dir = tempfile::tempdir().unwrap();
        let exec = Executor::new(Command::new("touch", ["marker"], dir.path()));
        exec.run().unwrap();
        assert!(dir.path().join("marker").exists());
    }

    #[test]
    fn test_display_line() {
        let command = Command::new("cmake", ["--build", "."], cwd());
        assert_eq!(command.display_line(), "cmake --build .");
    }
}
