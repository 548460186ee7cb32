//! Stage builders
//!
//! Each builder turns the resolved [`ActionConfig`] plus detected host
//! facts into one [`GroupExecutor`]. Builders never spawn the build
//! tools themselves; the only side effect is the configure stage
//! creating the build directory.

use crate::executor::{Command, Executor, GroupExecutor};
use crate::pipeline::config::ActionConfig;
use crate::pipeline::errors::PipelineError;
use crate::pipeline::version::CMakeVersion;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::thread;

const SUBMODULE_GROUP: &str = "Submodule update";
const CONFIGURE_GROUP: &str = "Configure build";
const BUILD_GROUP: &str = "Start build";
const TEST_GROUP: &str = "Run unit tests";

/// Name of the build directory created under the starting directory.
pub const BUILD_DIR: &str = "build";

const GIT: &str = "git";
const CMAKE: &str = "cmake";
const CTEST: &str = "ctest";

/// Host facts resolved once at startup and treated as read-only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostFacts {
    /// Detected CPU count.
    pub cpus: usize,
    /// Directory the step was started in; the build directory is created
    /// directly underneath it.
    pub start_dir: PathBuf,
    /// Detected CMake version. Probed only when `cpus > 1`, since a
    /// single-CPU build never passes a parallelism flag.
    pub cmake_version: Option<CMakeVersion>,
}

impl HostFacts {
    /// Detects CPU count and, when it matters, the CMake version.
    ///
    /// # Errors
    ///
    /// Propagates the version probe's [`PipelineError`] when `cmake
    /// --version` cannot be run or parsed.
    pub fn detect(start_dir: impl Into<PathBuf>) -> Result<Self, PipelineError> {
        let cpus = thread::available_parallelism().map_or(1, std::num::NonZeroUsize::get);

        let cmake_version = if cpus > 1 {
            Some(CMakeVersion::probe()?)
        } else {
            None
        };

        Ok(Self {
            cpus,
            start_dir: start_dir.into(),
            cmake_version,
        })
    }

    /// Returns the build directory path.
    #[must_use]
    pub fn build_dir(&self) -> PathBuf {
        self.start_dir.join(BUILD_DIR)
    }
}

/// Builds the submodule-update stage: `git submodule update --init
/// --recursive` in the starting directory.
#[must_use]
pub fn submodule_update_step(facts: &HostFacts) -> GroupExecutor {
    GroupExecutor::new(
        SUBMODULE_GROUP,
        vec![Executor::new(Command::new(
            GIT,
            ["submodule", "update", "--init", "--recursive"],
            &facts.start_dir,
        ))],
    )
}

/// Builds the configure stage.
///
/// Ensures the build directory exists, then assembles `cmake ..` run from
/// inside it: the unit-test-build argument is appended verbatim when
/// non-empty, followed by the semicolon-delimited extra arguments with
/// empty tokens dropped and order preserved.
///
/// # Errors
///
/// Returns [`PipelineError::Directory`] when the build directory cannot
/// be created, before any command is built.
pub fn configure_step(
    config: &ActionConfig,
    facts: &HostFacts,
) -> Result<GroupExecutor, PipelineError> {
    let build_dir = facts.build_dir();
    ensure_build_dir(&build_dir)?;
    tracing::info!(dir = %build_dir.display(), "Build directory");

    let mut args = vec!["..".to_string()];

    if !config.unit_test_build.is_empty() {
        args.push(config.unit_test_build.clone());
    }

    args.extend(
        config
            .cmake_args
            .split(';')
            .filter(|arg| !arg.is_empty())
            .map(String::from),
    );

    Ok(GroupExecutor::new(
        CONFIGURE_GROUP,
        vec![Executor::new(Command::new(CMAKE, args, build_dir))],
    ))
}

fn ensure_build_dir(build_dir: &Path) -> Result<(), PipelineError> {
    match fs::create_dir(build_dir) {
        Ok(()) => {
            tracing::info!(dir = %build_dir.display(), "Created build directory");
            Ok(())
        }
        Err(e) if e.kind() == ErrorKind::AlreadyExists => {
            if build_dir.is_dir() {
                Ok(())
            } else {
                Err(PipelineError::Directory {
                    path: build_dir.to_path_buf(),
                    error: "exists but is not a directory".to_string(),
                })
            }
        }
        Err(e) => Err(PipelineError::Directory {
            path: build_dir.to_path_buf(),
            error: e.to_string(),
        }),
    }
}

/// Builds the compile stage: `cmake --build . --config <config>` in the
/// build directory.
///
/// With more than one CPU a parallelism flag is appended: `--parallel N`
/// when the detected CMake version reports native support, otherwise the
/// generator passthrough `-- -jN`. An undetected version also falls back
/// to the passthrough. A single CPU appends nothing.
#[must_use]
pub fn build_step(config: &ActionConfig, facts: &HostFacts) -> GroupExecutor {
    let mut args = vec![
        "--build".to_string(),
        ".".to_string(),
        "--config".to_string(),
        config.config.clone(),
    ];

    if facts.cpus > 1 {
        let native = facts
            .cmake_version
            .is_some_and(|version| version.supports_native_parallel());
        if native {
            args.push("--parallel".to_string());
            args.push(facts.cpus.to_string());
        } else {
            args.push("--".to_string());
            args.push(format!("-j{}", facts.cpus));
        }
    }

    GroupExecutor::new(
        BUILD_GROUP,
        vec![Executor::new(Command::new(CMAKE, args, facts.build_dir()))],
    )
}

/// Builds the test stage: `ctest --output-on-failure -j <cpus>` in the
/// build directory.
#[must_use]
pub fn test_step(facts: &HostFacts) -> GroupExecutor {
    GroupExecutor::new(
        TEST_GROUP,
        vec![Executor::new(Command::new(
            CTEST,
            [
                "--output-on-failure".to_string(),
                "-j".to_string(),
                facts.cpus.to_string(),
            ],
            facts.build_dir(),
        ))],
    )
}
