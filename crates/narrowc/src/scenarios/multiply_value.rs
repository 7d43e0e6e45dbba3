//! `multiplyValue(container, factor)` where `container.value` may be
//! `number | null | undefined`.
//!
//! The table always uses the loose null policy: one handler covers both
//! sentinels, which is what `value != undefined` expresses.

use narrow_dispatch::{DispatchConfig, Discriminant, HandlerTable, NullPolicy};
use narrow_value::Value;

use super::ScenarioError;

const FACTOR: f64 = 2.0;

pub(super) fn run(config: &DispatchConfig) -> Result<Vec<String>, ScenarioError> {
    // None leaves the value untouched.
    let multiply: HandlerTable<Option<f64>> = HandlerTable::builder()
        .config(config.clone().with_null_policy(NullPolicy::Loose))
        .on_number(|n| Ok(Some(n * FACTOR)))
        .on(Discriminant::Nullish, |_| Ok(None))
        .build()?;

    let containers = [
        Value::object([("value", Value::Number(3.0))]),
        Value::object([("value", Value::Null)]),
        Value::object([("value", Value::Undefined)]),
        Value::object(Vec::<(String, Value)>::new()),
        Value::object([("value", Value::string("3"))]),
    ];

    let mut lines = Vec::new();
    for container in &containers {
        let current = container.get("value").cloned().unwrap_or(Value::Undefined);
        let result = match multiply.dispatch(&current) {
            Ok(Some(n)) => format!("value: {}", Value::Number(n)),
            Ok(None) => format!("value: {current}"),
            Err(err) => format!("error[{}]: {err}", err.code()),
        };
        lines.push(format!("multiplyValue({container}, {FACTOR}) -> {result}"));
    }

    let pairs = [
        (Value::Null, Value::Undefined),
        (Value::Null, Value::Null),
        (Value::Undefined, Value::Undefined),
    ];
    for (a, b) in &pairs {
        lines.push(format!(
            "{a} == {b}: {}, {a} === {b}: {}",
            a.loose_eq(b),
            a.strict_eq(b)
        ));
    }
    Ok(lines)
}
