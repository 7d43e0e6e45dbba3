//! `makeDate(timestamp)` and `makeDate(m, d, y)` behind one body.
//!
//! There is no two-argument signature, so `makeDate(5, 4)`
//! fails resolution instead of silently building a timestamp.

use std::fmt;

use narrow_dispatch::{DispatchConfig, OverloadSet, ParamKind, Signature};
use narrow_value::Value;

use super::{outcome, ScenarioError};

/// Result of `makeDate`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MadeDate {
    Timestamp(f64),
    Calendar { year: f64, month: f64, day: f64 },
}

impl fmt::Display for MadeDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Timestamp(ts) => write!(f, "Date(timestamp {})", Value::Number(*ts)),
            Self::Calendar { year, month, day } => write!(
                f,
                "Date({}-{}-{})",
                Value::Number(*year),
                Value::Number(*month),
                Value::Number(*day)
            ),
        }
    }
}

pub(super) fn run(config: &DispatchConfig) -> Result<Vec<String>, ScenarioError> {
    let make_date: OverloadSet<MadeDate> = OverloadSet::builder("makeDate")
        .config(config.clone())
        .signature(Signature::new([ParamKind::number()]))
        .signature(Signature::new([
            ParamKind::number(),
            ParamKind::number(),
            ParamKind::number(),
        ]))
        .build(|call| {
            let first = call.require(0)?.to_number();
            Ok(match (call.number(1), call.number(2)) {
                (Some(day), Some(year)) => MadeDate::Calendar {
                    year,
                    month: first,
                    day,
                },
                _ => MadeDate::Timestamp(first),
            })
        })?;

    let calls: [&[f64]; 3] = [&[12_345_678.0], &[5.0, 5.0, 5.0], &[1.0, 3.0]];
    Ok(calls
        .iter()
        .map(|nums| {
            let args: Vec<Value> = nums.iter().copied().map(Value::Number).collect();
            let rendered: Vec<String> = args.iter().map(Value::to_string).collect();
            format!(
                "makeDate({}) -> {}",
                rendered.join(", "),
                outcome(make_date.call(&args))
            )
        })
        .collect())
}
