//! Command execution layer
//!
//! This module contains the executors that run external build tools.

mod command;
mod group;

pub use command::{Command, Executor};
pub use group::GroupExecutor;
