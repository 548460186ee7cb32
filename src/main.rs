//! cmakeline - CMake build step for CI pipelines
//!
//! Reads the step inputs the CI runner provides (or their command-line
//! overrides), assembles the stage groups and runs them in order:
//!
//! 1. `git submodule update --init --recursive` (when `submodule_update=ON`)
//! 2. `cmake ..` from inside a freshly-ensured `build/` directory
//! 3. `cmake --build . --config <config>` with a parallelism flag picked
//!    from the CPU count and detected CMake version
//! 4. `ctest --output-on-failure -j <N>` (when `run_tests=ON`)
//!
//! The first failing command aborts the remaining stages; its message is
//! reported as the job failure and the process exits non-zero.

use anyhow::{Context, Result};
use clap::Parser;
use std::io::Write;
use std::process::ExitCode;

use cmakeline::infrastructure::{init_logging, workflow};
use cmakeline::pipeline::{self, ActionConfig, HostFacts};
use cmakeline::EnvInputs;

/// CLI arguments for cmakeline
///
/// Every input can also come from the runner environment as
/// `INPUT_<NAME>`; a flag given here wins over the environment.
#[derive(Parser, Debug, Default)]
#[command(name = "cmakeline")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Override the submodule_update input ("ON" enables the stage)
    #[arg(long, value_name = "VALUE")]
    submodule_update: Option<String>,

    /// Override the run_tests input ("ON" enables the stage)
    #[arg(long, value_name = "VALUE")]
    run_tests: Option<String>,

    /// Override the config input (build configuration name)
    #[arg(long, value_name = "NAME")]
    config: Option<String>,

    /// Override the cmake_args input (semicolon-delimited)
    #[arg(long, value_name = "ARGS")]
    cmake_args: Option<String>,

    /// Override the unit_test_build input
    #[arg(long, value_name = "ARG")]
    unit_test_build: Option<String>,

    /// Print the assembled plan as JSON instead of running it
    #[arg(long)]
    dry_run: bool,

    /// Diagnostic log level (overridden by RUST_LOG)
    #[arg(long, default_value = "info", value_name = "LEVEL")]
    log_level: String,
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(&args.log_level);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            workflow::set_failed(&mut std::io::stdout().lock(), &e.to_string());
            tracing::debug!(error = ?e, "Pipeline failed");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<()> {
    let mut config = ActionConfig::from_inputs(&EnvInputs::new());
    apply_overrides(&mut config, args);

    let start_dir = std::env::current_dir().context("failed to resolve starting directory")?;
    let facts = HostFacts::detect(start_dir)?;

    let stdout = std::io::stdout();
    let mut sink = stdout.lock();
    workflow::info(&mut sink, &format!("CPUs: {}", facts.cpus));
    workflow::info(
        &mut sink,
        &format!("Starting directory: {}", facts.start_dir.display()),
    );

    let action = pipeline::assemble(&config, &facts)?;

    if args.dry_run {
        let json = serde_json::to_string_pretty(&action.plan())?;
        writeln!(sink, "{json}").context("failed to write plan")?;
        return Ok(());
    }

    action.run_with(&mut sink)?;
    Ok(())
}

/// Applies command-line overrides on top of the environment inputs.
fn apply_overrides(config: &mut ActionConfig, args: &Args) {
    if let Some(value) = &args.submodule_update {
        config.submodule_update = value == "ON";
    }
    if let Some(value) = &args.run_tests {
        config.run_tests = value == "ON";
    }
    if let Some(value) = &args.config {
        config.config = value.clone();
    }
    if let Some(value) = &args.cmake_args {
        config.cmake_args = value.clone();
    }
    if let Some(value) = &args.unit_test_build {
        config.unit_test_build = value.clone();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_cli_overrides_beat_resolved_inputs() {
        let mut config = ActionConfig {
            submodule_update: false,
            run_tests: true,
            config: "Debug".to_string(),
            ..ActionConfig::default()
        };
        let args = Args {
            submodule_update: Some("ON".to_string()),
            run_tests: Some("OFF".to_string()),
            config: Some("Release".to_string()),
            ..Args::default()
        };

        apply_overrides(&mut config, &args);
        assert!(config.submodule_update);
        assert!(!config.run_tests);
        assert_eq!(config.config, "Release");
    }

    #[test]
    fn test_no_overrides_leave_config_untouched() {
        let mut config = ActionConfig {
            cmake_args: "-DFOO=1".to_string(),
            ..ActionConfig::default()
        };
        apply_overrides(&mut config, &Args::default());
        assert_eq!(config.cmake_args, "-DFOO=1");
    }
}
