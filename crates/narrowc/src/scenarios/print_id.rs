use narrow_dispatch::{DispatchConfig, Discriminant, HandlerTable};
use narrow_value::Value;

use super::{outcome, ScenarioError};

pub(super) fn run(config: &DispatchConfig) -> Result<Vec<String>, ScenarioError> {
    let print_id: HandlerTable<String> = HandlerTable::builder()
        .config(config.clone())
        .exhaustive([Discriminant::STRING, Discriminant::NUMBER])
        .on_string(|id| Ok(id.to_uppercase()))
        .on_number(|id| Ok(Value::Number(id + 100.0).to_string()))
        .build()?;

    let ids = [Value::string("hello"), Value::Number(42.0), Value::Bool(true)];
    Ok(ids
        .iter()
        .map(|id| format!("printID({id}) -> {}", outcome(print_id.dispatch(id))))
        .collect())
}
