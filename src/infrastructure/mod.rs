//! Infrastructure layer
//!
//! Input resolution, logging setup and the CI runner log protocol.

mod inputs;
pub mod logging;
pub mod workflow;

pub use inputs::{EnvInputs, InputProvider, MapInputs};
pub use logging::init_logging;
