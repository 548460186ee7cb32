//! Error types for the build pipeline

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while assembling or running the pipeline
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PipelineError {
    /// External command exited with a non-zero status
    #[error("'{program}' failed ({})", exit_display(*code))]
    CommandFailed {
        /// Program that was invoked.
        program: String,
        /// Arguments it was invoked with.
        args: Vec<String>,
        /// Exit code, or `None` when the process was killed by a signal.
        code: Option<i32>,
    },

    /// External command could not be spawned at all
    #[error("failed to spawn '{program}': {error}")]
    CommandSpawn {
        /// Program that could not be started.
        program: String,
        /// Underlying IO error text.
        error: String,
    },

    /// Build directory could not be created
    #[error("failed to create directory '{}': {error}", path.display())]
    Directory {
        /// Directory that could not be created.
        path: PathBuf,
        /// Underlying IO error text.
        error: String,
    },

    /// Tool version output did not contain a parsable version
    #[error("could not parse a version from: {output:?}")]
    VersionParse {
        /// The raw version output that failed to parse.
        output: String,
    },

    /// A required input was not provided
    #[error("required input '{name}' is missing")]
    MissingInput {
        /// Name of the missing input.
        name: String,
    },
}

fn exit_display(code: Option<i32>) -> String {
    match code {
        Some(code) => format!("exit code {code}"),
        None => "terminated by signal".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_command_failed_display() {
        let err = PipelineError::CommandFailed {
            program: "cmake".to_string(),
            args: vec!["--build".to_string(), ".".to_string()],
            code: Some(2),
        };
        assert_eq!(err.to_string(), "'cmake' failed (exit code 2)");
    }

    #[test]
    fn test_command_killed_display() {
        let err = PipelineError::CommandFailed {
            program: "ctest".to_string(),
            args: vec![],
            code: None,
        };
        assert_eq!(err.to_string(), "'ctest' failed (terminated by signal)");
    }

    #[test]
    fn test_directory_display() {
        let err = PipelineError::Directory {
            path: PathBuf::from("/tmp/build"),
            error: "permission denied".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "failed to create directory '/tmp/build': permission denied"
        );
    }
}
