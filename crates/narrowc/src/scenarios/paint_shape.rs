//! Tagged shapes whose position fields are optional and default to 0.

use narrow_dispatch::{
    DispatchConfig, DispatchError, Discriminant, FieldDefaults, HandlerTable, ShapeView,
};
use narrow_value::Value;

use super::{outcome, ScenarioError};

pub(super) fn run(config: &DispatchConfig) -> Result<Vec<String>, ScenarioError> {
    let origin = FieldDefaults::new()
        .with("xPos", Value::Number(0.0))
        .with("yPos", Value::Number(0.0));

    let paint: HandlerTable<String> = HandlerTable::builder()
        .config(config.clone())
        .on_shape("circle", |view| {
            Ok(format!("circle r={} at {}", view.require("radius")?, position(view)?))
        })
        .on_shape("square", |view| {
            Ok(format!("square side={} at {}", view.require("side")?, position(view)?))
        })
        .defaults(Discriminant::tagged("circle"), origin.clone())
        .defaults(Discriminant::tagged("square"), origin)
        .build()?;

    let tag = config.tag_field.as_str();
    let shapes = [
        Value::object([(tag, Value::string("circle")), ("radius", Value::Number(2.0))]),
        Value::object([
            (tag, Value::string("square")),
            ("side", Value::Number(3.0)),
            ("xPos", Value::Number(5.0)),
        ]),
        Value::object([
            (tag, Value::string("circle")),
            ("radius", Value::Number(1.0)),
            ("xPos", Value::Undefined),
            ("yPos", Value::Null),
        ]),
        Value::object([(tag, Value::string("circle"))]),
        Value::object([(tag, Value::string("triangle")), ("base", Value::Number(4.0))]),
        Value::object([("radius", Value::Number(2.0))]),
    ];

    Ok(shapes
        .iter()
        .map(|shape| format!("paintShape({shape}) -> {}", outcome(paint.dispatch(shape))))
        .collect())
}

fn position(view: ShapeView<'_>) -> Result<String, DispatchError> {
    Ok(format!("({}, {})", view.require("xPos")?, view.require("yPos")?))
}
