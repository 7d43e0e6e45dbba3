//! Command handlers for the narrowc CLI.
//!
//! Handlers return their output lines; `main` prints them. That keeps
//! every command testable without capturing stdout.

mod demo;
mod options;

use thiserror::Error;

use crate::scenarios::ScenarioError;

pub use demo::{list_scenarios, run_all, run_demo};
pub use options::parse_dispatch_options;

/// A command could not complete.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("unknown scenario '{0}' (see `narrowc list`)")]
    UnknownScenario(String),
    #[error("unknown option '{0}'")]
    UnknownOption(String),
    #[error("option '{0}' needs a value")]
    MissingOptionValue(&'static str),
    #[error("scenario '{scenario}' failed: {source}")]
    Scenario {
        scenario: &'static str,
        #[source]
        source: ScenarioError,
    },
}
