//! Task execution module
//!
//! This module turns a task selection into an ordered plan of steps and runs
//! those steps one at a time, stopping at the first failure.

pub mod command;
pub mod plan;
pub mod runner;

pub use command::{CommandRunner, Invocation, ProcessRunner};
pub use plan::{build_plan, Step};
pub use runner::TaskRunner;
