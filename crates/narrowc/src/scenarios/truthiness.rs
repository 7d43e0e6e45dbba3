use narrow_dispatch::{Classifier, DispatchConfig};
use narrow_value::Value;

/// Falsy values first, then truthy ones. `!!v` is the same as `Boolean(v)`.
/// BigInt `0n` has no `Value` counterpart and is not listed.
pub(super) fn run(config: &DispatchConfig) -> Vec<String> {
    let classifier = Classifier::new(config);
    let values = [
        Value::Number(0.0),
        Value::Number(f64::NAN),
        Value::string(""),
        Value::Undefined,
        Value::Null,
        Value::Bool(false),
        Value::string("hello"),
        Value::list(Vec::new()),
        Value::object(Vec::<(String, Value)>::new()),
    ];

    values
        .iter()
        .map(|value| {
            let classified = classifier.classify(value);
            format!(
                "Boolean({value}) = {}, typeof {value} = {:?}, shape = {} ({} rule)",
                value.is_truthy(),
                value.type_of(),
                classified.discriminant,
                classified.rule.name()
            )
        })
        .collect()
}
