//! Resolved step configuration

use crate::infrastructure::InputProvider;
use serde::{Deserialize, Serialize};

/// Input names as the CI runner provides them.
pub mod input {
    /// Enables the submodule-update stage when `"ON"`.
    pub const SUBMODULE_UPDATE: &str = "submodule_update";
    /// Semicolon-delimited extra configure arguments.
    pub const CMAKE_ARGS: &str = "cmake_args";
    /// Enables the test stage when `"ON"`.
    pub const RUN_TESTS: &str = "run_tests";
    /// Extra configure argument enabling the unit-test build, if non-empty.
    pub const UNIT_TEST_BUILD: &str = "unit_test_build";
    /// Build configuration name passed to `cmake --build`.
    pub const CONFIG: &str = "config";
}

/// The literal value that switches an optional stage on.
const ON: &str = "ON";

/// Step configuration resolved once at startup.
///
/// All values are read-only inputs to the step builders; the two stage
/// toggles are enabled only by the exact literal `"ON"`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ActionConfig {
    /// Run the submodule-update stage.
    pub submodule_update: bool,
    /// Run the test stage.
    pub run_tests: bool,
    /// Raw semicolon-delimited extra configure arguments.
    pub cmake_args: String,
    /// Extra configure argument, appended verbatim when non-empty.
    pub unit_test_build: String,
    /// Build configuration name (e.g. `Release`).
    pub config: String,
}

impl ActionConfig {
    /// Resolves the configuration from an input provider.
    ///
    /// Every input is optional; absent inputs resolve to the empty string,
    /// which disables the optional stages and contributes no arguments.
    pub fn from_inputs(inputs: &impl InputProvider) -> Self {
        Self {
            submodule_update: inputs.get_or_default(input::SUBMODULE_UPDATE) == ON,
            run_tests: inputs.get_or_default(input::RUN_TESTS) == ON,
            cmake_args: inputs.get_or_default(input::CMAKE_ARGS),
            unit_test_build: inputs.get_or_default(input::UNIT_TEST_BUILD),
            config: inputs.get_or_default(input::CONFIG),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::MapInputs;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_absent_inputs_disable_optional_stages() {
        let config = ActionConfig::from_inputs(&MapInputs::new());
        assert_eq!(config, ActionConfig::default());
        assert!(!config.submodule_update);
        assert!(!config.run_tests);
    }

    #[test]
    fn test_only_the_literal_on_enables_stages() {
        for value in ["on", "true", "1", "ON "] {
            let inputs = MapInputs::new()
                .set(input::SUBMODULE_UPDATE, value)
                .set(input::RUN_TESTS, value);
            let config = ActionConfig::from_inputs(&inputs);
            assert!(!config.submodule_update, "{value:?} must not enable");
            assert!(!config.run_tests, "{value:?} must not enable");
        }

        let inputs = MapInputs::new()
            .set(input::SUBMODULE_UPDATE, "ON")
            .set(input::RUN_TESTS, "ON");
        let config = ActionConfig::from_inputs(&inputs);
        assert!(config.submodule_update);
        assert!(config.run_tests);
    }

    #[test]
    fn test_string_inputs_pass_through() {
        let inputs = MapInputs::new()
            .set(input::CMAKE_ARGS, "-DFOO=1;-DBAR=2")
            .set(input::UNIT_TEST_BUILD, "-DBUILD_TESTING=ON")
            .set(input::CONFIG, "Release");
        let config = ActionConfig::from_inputs(&inputs);
        assert_eq!(config.cmake_args, "-DFOO=1;-DBAR=2");
        assert_eq!(config.unit_test_build, "-DBUILD_TESTING=ON");
        assert_eq!(config.config, "Release");
    }
}
