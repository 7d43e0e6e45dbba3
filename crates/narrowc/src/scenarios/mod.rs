//! Narrowing and overload scenarios.
//!
//! Every scenario returns its output as lines. Inputs that are meant to be
//! rejected (a boolean passed to `printID`, two arguments to `makeDate`)
//! show up as `error[...]` lines; a table that fails to build aborts the
//! scenario with `ScenarioError`.

mod equality;
mod make_date;
mod multiply_value;
mod paint_shape;
mod print_all;
mod print_id;
mod truthiness;

use thiserror::Error;

use narrow_dispatch::{DispatchConfig, DispatchError, TableError};

pub use make_date::MadeDate;

/// The available scenarios.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Scenario {
    PrintId,
    PrintAll,
    MultiplyValue,
    Equality,
    MakeDate,
    PaintShape,
    Truthiness,
}

impl Scenario {
    /// All scenarios, in the order `all` runs them.
    pub const ALL: [Scenario; 7] = [
        Scenario::PrintId,
        Scenario::PrintAll,
        Scenario::MultiplyValue,
        Scenario::Equality,
        Scenario::MakeDate,
        Scenario::PaintShape,
        Scenario::Truthiness,
    ];

    /// Command-line name.
    pub fn name(self) -> &'static str {
        match self {
            Self::PrintId => "print-id",
            Self::PrintAll => "print-all",
            Self::MultiplyValue => "multiply-value",
            Self::Equality => "equality",
            Self::MakeDate => "make-date",
            Self::PaintShape => "paint-shape",
            Self::Truthiness => "truthiness",
        }
    }

    /// One-line summary for `narrowc list`.
    pub fn description(self) -> &'static str {
        match self {
            Self::PrintId => "string | number id: upper-case strings, offset numbers",
            Self::PrintAll => "string | string[] | null, with null kept apart from objects",
            Self::MultiplyValue => "multiply a container value unless it is null or undefined",
            Self::Equality => "strict equality narrows string | number and string | boolean",
            Self::MakeDate => "overloads makeDate(timestamp) and makeDate(m, d, y)",
            Self::PaintShape => "tagged shapes with xPos/yPos defaulting to 0",
            Self::Truthiness => "falsy values, typeof, and the shape the classifier picks",
        }
    }

    /// Look up a scenario by its command-line name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.name() == name)
    }

    /// Run the scenario and collect its output.
    #[tracing::instrument(level = "debug", skip(config), fields(scenario = self.name()))]
    pub fn run(self, config: &DispatchConfig) -> Result<Vec<String>, ScenarioError> {
        match self {
            Self::PrintId => print_id::run(config),
            Self::PrintAll => print_all::run(config),
            Self::MultiplyValue => multiply_value::run(config),
            Self::Equality => equality::run(config),
            Self::MakeDate => make_date::run(config),
            Self::PaintShape => paint_shape::run(config),
            Self::Truthiness => Ok(truthiness::run(config)),
        }
    }
}

/// A scenario could not run to completion.
#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("invalid handler table: {0}")]
    Table(#[from] TableError),
    #[error(transparent)]
    Dispatch(#[from] DispatchError),
}

impl ScenarioError {
    pub fn code(&self) -> &'static str {
        match self {
            Self::Table(err) => err.code(),
            Self::Dispatch(err) => err.code(),
        }
    }
}

/// Render an outcome, reporting a dispatch error inline.
fn outcome<T: std::fmt::Display>(result: Result<T, DispatchError>) -> String {
    match result {
        Ok(value) => value.to_string(),
        Err(err) => format!("error[{}]: {err}", err.code()),
    }
}

#[cfg(test)]
mod tests;
