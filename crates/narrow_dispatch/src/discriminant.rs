//! Runtime tags that select a handler.

use std::fmt;

use narrow_value::Value;

/// Primitive kinds recognised by the primitive rule.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PrimitiveKind {
    String,
    Number,
    Boolean,
}

impl PrimitiveKind {
    /// The primitive kind of `value`, if it is a primitive.
    pub fn of(value: &Value) -> Option<Self> {
        match value {
            Value::Str(_) => Some(Self::String),
            Value::Number(_) => Some(Self::Number),
            Value::Bool(_) => Some(Self::Boolean),
            Value::Undefined | Value::Null | Value::List(_) | Value::Object(_) => None,
        }
    }

    /// Name used in diagnostics.
    pub fn name(self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Number => "number",
            Self::Boolean => "boolean",
        }
    }
}

/// The shape a value was classified as.
///
/// A closed set of structural kinds plus one open family, `Tagged`, keyed by
/// the literal string in an object's tag field.
///
/// The derived order (declaration order, then tag) is the canonical order
/// of union members.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Discriminant {
    /// No value was provided (strict null policy).
    Undefined,
    /// An explicit null (strict null policy).
    Null,
    /// Either sentinel (loose null policy).
    Nullish,
    /// A string, number or boolean.
    Primitive(PrimitiveKind),
    /// An object carrying a literal tag, e.g. `{ kind: "circle", .. }`.
    Tagged(String),
    /// A list of values.
    List,
    /// An object without a usable tag.
    Object,
}

impl Discriminant {
    pub const STRING: Discriminant = Discriminant::Primitive(PrimitiveKind::String);
    pub const NUMBER: Discriminant = Discriminant::Primitive(PrimitiveKind::Number);
    pub const BOOLEAN: Discriminant = Discriminant::Primitive(PrimitiveKind::Boolean);

    /// Discriminant for an object tagged with `tag`.
    #[inline]
    pub fn tagged(tag: impl Into<String>) -> Self {
        Discriminant::Tagged(tag.into())
    }

    /// Check whether this is one of the sentinel discriminants.
    pub fn is_sentinel(&self) -> bool {
        matches!(self, Self::Undefined | Self::Null | Self::Nullish)
    }
}

impl fmt::Display for Discriminant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Undefined => write!(f, "undefined"),
            Self::Null => write!(f, "null"),
            Self::Nullish => write!(f, "null | undefined"),
            Self::Primitive(kind) => write!(f, "{}", kind.name()),
            // Literal type syntax
            Self::Tagged(tag) => write!(f, "{tag:?}"),
            Self::List => write!(f, "list"),
            Self::Object => write!(f, "object"),
        }
    }
}

#[cfg(test)]
mod tests;
