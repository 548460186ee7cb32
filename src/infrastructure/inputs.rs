//! Named input resolution
//!
//! CI runners hand inputs to a step as `INPUT_<NAME>` environment
//! variables. The [`InputProvider`] trait abstracts that source so the
//! step builders can be driven from a plain map in tests.

use crate::pipeline::PipelineError;
use std::collections::HashMap;

/// Source of named string inputs.
pub trait InputProvider {
    /// Returns the raw value of an input, or `None` when it is absent.
    fn get(&self, name: &str) -> Option<String>;

    /// Returns an optional input, defaulting to the empty string.
    fn get_or_default(&self, name: &str) -> String {
        self.get(name).unwrap_or_default()
    }

    /// Returns a required input.
    ///
    /// # Errors
    ///
    /// Returns [`PipelineError::MissingInput`] when the input is absent
    /// or empty.
    fn get_required(&self, name: &str) -> Result<String, PipelineError> {
        match self.get(name) {
            Some(value) if !value.is_empty() => Ok(value),
            _ => Err(PipelineError::MissingInput {
                name: name.to_string(),
            }),
        }
    }
}

/// Reads inputs from `INPUT_<NAME>` environment variables.
///
/// Names are uppercased and spaces become underscores, the convention the
/// runner uses when exporting step inputs. Values are trimmed.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvInputs;

impl EnvInputs {
    /// Creates an environment-backed provider.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    fn env_name(name: &str) -> String {
        format!("INPUT_{}", name.replace(' ', "_").to_uppercase())
    }
}

impl InputProvider for EnvInputs {
    fn get(&self, name: &str) -> Option<String> {
        std::env::var(Self::env_name(name))
            .ok()
            .map(|v| v.trim().to_string())
    }
}

/// Map-backed provider for tests and programmatic use.
#[derive(Debug, Clone, Default)]
pub struct MapInputs {
    values: HashMap<String, String>,
}

impl MapInputs {
    /// Creates an empty provider.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets an input value.
    #[must_use]
    pub fn set(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(name.into(), value.into());
        self
    }
}

impl InputProvider for MapInputs {
    fn get(&self, name: &str) -> Option<String> {
        self.values.get(name).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_env_name_mapping() {
        assert_eq!(EnvInputs::env_name("cmake_args"), "INPUT_CMAKE_ARGS");
        assert_eq!(EnvInputs::env_name("build config"), "INPUT_BUILD_CONFIG");
    }

    #[test]
    fn test_absent_input_defaults_to_empty() {
        let inputs = MapInputs::new();
        assert_eq!(inputs.get("config"), None);
        assert_eq!(inputs.get_or_default("config"), "");
    }

    #[test]
    fn test_required_input_rejects_absent_and_empty() {
        let inputs = MapInputs::new().set("config", "");
        let err = inputs.get_required("config").unwrap_err();
        assert_eq!(
            err,
            PipelineError::MissingInput {
                name: "config".to_string()
            }
        );
        assert!(inputs.get_required("missing").is_err());
    }

    #[test]
    fn test_required_input_returns_value() {
        let inputs = MapInputs::new().set("config", "Release");
        assert_eq!(inputs.get_required("config").unwrap(), "Release");
    }
}
