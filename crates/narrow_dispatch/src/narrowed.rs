//! Views handed to handlers after classification.

use rustc_hash::FxHashMap;

use narrow_value::{Fields, Value};

use crate::{DispatchError, Discriminant};

/// Default values for optional fields of one structural shape.
///
/// A field counts as absent when it is missing or holds `undefined`. An
/// explicit `null` is a present value and is not replaced.
#[derive(Clone, Debug, Default)]
pub struct FieldDefaults {
    fields: FxHashMap<String, Value>,
}

impl FieldDefaults {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a default for `field`.
    #[must_use]
    pub fn with(mut self, field: impl Into<String>, value: Value) -> Self {
        self.fields.insert(field.into(), value);
        self
    }

    /// The default declared for `field`.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Field access on an object narrowed to a structural shape.
#[derive(Clone, Copy, Debug)]
pub struct ShapeView<'a> {
    shape: &'a Discriminant,
    fields: &'a Fields,
    defaults: Option<&'a FieldDefaults>,
}

impl<'a> ShapeView<'a> {
    /// The shape this object was narrowed to.
    pub fn shape(&self) -> &'a Discriminant {
        self.shape
    }

    /// Raw fields, without defaults applied.
    pub fn fields(&self) -> &'a Fields {
        self.fields
    }

    /// Field value, falling back to the shape's declared default.
    pub fn field(&self, name: &str) -> Option<&'a Value> {
        match self.fields.get(name) {
            Some(Value::Undefined) | None => self.defaults.and_then(|d| d.get(name)),
            present => present,
        }
    }

    /// Like `field`, but absence is an error.
    pub fn require(&self, name: &str) -> Result<&'a Value, DispatchError> {
        self.field(name).ok_or_else(|| DispatchError::MissingField {
            shape: self.shape.clone(),
            field: name.to_string(),
        })
    }

    /// Numeric field, with defaults applied.
    pub fn number(&self, name: &str) -> Option<f64> {
        self.field(name).and_then(Value::as_number)
    }

    /// String field, with defaults applied.
    pub fn str(&self, name: &str) -> Option<&'a str> {
        self.field(name).and_then(Value::as_str)
    }
}

/// A value narrowed to the structural contract of its shape.
#[derive(Clone, Copy, Debug)]
pub enum Narrowed<'a> {
    Undefined,
    Null,
    /// Either sentinel under the loose policy; holds the original value.
    Nullish(&'a Value),
    Bool(bool),
    Number(f64),
    Str(&'a str),
    List(&'a [Value]),
    /// Object carrying the literal tag `tag`.
    Tagged { tag: &'a str, view: ShapeView<'a> },
    Object(ShapeView<'a>),
}

impl<'a> Narrowed<'a> {
    /// Build the view of `value` for the discriminant it was classified as.
    pub(crate) fn new(
        value: &'a Value,
        shape: &'a Discriminant,
        defaults: Option<&'a FieldDefaults>,
    ) -> Self {
        if *shape == Discriminant::Nullish {
            return Narrowed::Nullish(value);
        }
        match value {
            Value::Undefined => Narrowed::Undefined,
            Value::Null => Narrowed::Null,
            Value::Bool(b) => Narrowed::Bool(*b),
            Value::Number(n) => Narrowed::Number(*n),
            Value::Str(s) => Narrowed::Str(s.as_str()),
            Value::List(items) => Narrowed::List(items.as_slice()),
            Value::Object(fields) => {
                let view = ShapeView {
                    shape,
                    fields: &**fields,
                    defaults,
                };
                match shape {
                    Discriminant::Tagged(tag) => Narrowed::Tagged {
                        tag: tag.as_str(),
                        view,
                    },
                    _ => Narrowed::Object(view),
                }
            }
        }
    }

    /// The structural view, for tagged and untagged objects.
    pub fn view(&self) -> Option<ShapeView<'a>> {
        match self {
            Narrowed::Tagged { view, .. } | Narrowed::Object(view) => Some(*view),
            _ => None,
        }
    }
}
