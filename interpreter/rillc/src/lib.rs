//! Rill CLI library: the program driver and the command entry points.

pub mod commands;
pub mod driver;

pub use driver::{Program, RunError};
