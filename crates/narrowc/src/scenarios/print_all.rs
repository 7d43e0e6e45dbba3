//! `printAll(strs: string | string[] | null)`.
//!
//! The host language's `typeof strs === "object"` is true for both the list
//! and `null`; here null has its own handler and never reaches the list
//! logic.

use narrow_dispatch::{DispatchConfig, Discriminant, HandlerTable, NullPolicy};
use narrow_value::Value;

use super::ScenarioError;

pub(super) fn run(config: &DispatchConfig) -> Result<Vec<String>, ScenarioError> {
    let builder = HandlerTable::builder()
        .config(config.clone())
        .on_string(|s| Ok(vec![s.to_string()]))
        .on_list(|items| Ok(items.iter().map(Value::display_value).collect()));
    let builder = match config.null_policy {
        NullPolicy::Strict => builder.on(Discriminant::Null, |_| Ok(Vec::new())),
        NullPolicy::Loose => builder.on(Discriminant::Nullish, |_| Ok(Vec::new())),
    };
    let print_all: HandlerTable<Vec<String>> = builder.build()?;

    let inputs = [
        Value::string("hello"),
        Value::list(vec![Value::string("a"), Value::string("b")]),
        Value::Null,
        Value::Undefined,
    ];

    let mut lines = Vec::new();
    for strs in &inputs {
        lines.push(format!("printAll({strs}):"));
        match print_all.dispatch(strs) {
            Ok(printed) if printed.is_empty() => lines.push("  (nothing to print)".to_string()),
            Ok(printed) => lines.extend(printed.into_iter().map(|s| format!("  {s}"))),
            Err(err) => lines.push(format!("  error[{}]: {err}", err.code())),
        }
    }
    Ok(lines)
}
