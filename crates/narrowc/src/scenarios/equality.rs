//! `example(x: string | number, y: string | boolean)`.
//!
//! When `x === y` holds, the only kind both unions share is string, so
//! both sides go through string-only tables.

use narrow_dispatch::{
    DispatchConfig, Discriminant, HandlerTable, OverloadSet, ParamKind, Signature,
};
use narrow_value::Value;

use super::{outcome, ScenarioError};

pub(super) fn run(config: &DispatchConfig) -> Result<Vec<String>, ScenarioError> {
    let upper: HandlerTable<String> = HandlerTable::builder()
        .config(config.clone())
        .on_string(|s| Ok(s.to_uppercase()))
        .build()?;
    let lower: HandlerTable<String> = HandlerTable::builder()
        .config(config.clone())
        .on_string(|s| Ok(s.to_lowercase()))
        .build()?;

    let example: OverloadSet<String> = OverloadSet::builder("example")
        .config(config.clone())
        .signature(Signature::new([
            ParamKind::one_of([Discriminant::STRING, Discriminant::NUMBER]),
            ParamKind::one_of([Discriminant::STRING, Discriminant::BOOLEAN]),
        ]))
        .build(move |call| {
            let (x, y) = (call.require(0)?, call.require(1)?);
            if x.strict_eq(y) {
                Ok(format!("{} {}", upper.dispatch(x)?, lower.dispatch(y)?))
            } else {
                Ok(format!("{} {}", x.display_value(), y.display_value()))
            }
        })?;

    let calls = [
        [Value::string("Hi"), Value::string("Hi")],
        [Value::Number(1.0), Value::Bool(true)],
        [Value::string("1"), Value::Bool(true)],
        [Value::Bool(true), Value::string("a")],
    ];
    Ok(calls
        .iter()
        .map(|args| {
            format!(
                "example({}, {}) -> {}",
                args[0],
                args[1],
                outcome(example.call(args))
            )
        })
        .collect())
}
