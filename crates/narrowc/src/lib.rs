//! narrowc - runs the narrowing and overload scenarios.
//!
//! Each scenario builds its handler tables or overload sets once and
//! feeds them a fixed set of inputs, collecting the output lines so the
//! same code serves the CLI and the tests.

pub mod commands;
pub mod scenarios;
mod tracing_setup;

pub use tracing_setup::init_tracing;
