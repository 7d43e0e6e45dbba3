//! Runtime values for the narrow dispatcher.
//!
//! # Heap Enforcement
//!
//! Strings, lists and objects live behind `Heap<T>`, whose constructor is
//! private to this module:
//!
//! ```text
//! let s = Value::string("hello");                      // OK
//! let shape = Value::object([("kind", Value::string("circle"))]); // OK
//! let s = Value::Str(Heap::new(...));                  // ERROR: Heap::new is pub(super)
//! ```
//!
//! # Sentinels
//!
//! `Undefined` (no value was provided) and `Null` (a value that is
//! explicitly empty) are separate variants. The scripting helpers below
//! (`type_of`, `loose_eq`) reproduce the places where the
//! host language blurs them, so callers can see the pitfall without ever
//! relying on it for dispatch.

mod heap;

use std::collections::BTreeMap;
use std::fmt;

pub use heap::Heap;

/// Field storage of an object value, ordered by field name.
pub type Fields = BTreeMap<String, Value>;

/// Runtime value whose shape is only known after inspection.
#[derive(Clone, PartialEq)]
pub enum Value {
    // Sentinels
    /// No value was provided.
    Undefined,
    /// An explicitly empty value.
    Null,

    // Primitives (inline, no heap allocation)
    /// Boolean value.
    Bool(bool),
    /// Number value (IEEE double, like the host language).
    Number(f64),

    // Heap Types
    /// String value.
    Str(Heap<String>),
    /// Ordered list of values.
    List(Heap<Vec<Value>>),
    /// Object with named fields.
    Object(Heap<Fields>),
}

// Factory Methods (ONLY way to construct heap values)

impl Value {
    /// Create a string value.
    #[inline]
    pub fn string(s: impl Into<String>) -> Self {
        Value::Str(Heap::new(s.into()))
    }

    /// Create a list value.
    ///
    /// ```text
    /// let names = Value::list(vec![Value::string("a"), Value::string("b")]);
    /// ```
    #[inline]
    pub fn list(items: Vec<Value>) -> Self {
        Value::List(Heap::new(items))
    }

    /// Create an object value from `(name, value)` pairs.
    ///
    /// Later pairs overwrite earlier ones with the same name.
    ///
    /// ```text
    /// let origin = Value::object([("x", Value::Number(0.0)), ("y", Value::Number(0.0))]);
    /// ```
    pub fn object<K, I>(fields: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, Value)>,
    {
        Value::Object(Heap::new(
            fields.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        ))
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::string(s)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::string(s)
    }
}

// Accessors

impl Value {
    /// Check for either sentinel.
    pub fn is_nullish(&self) -> bool {
        matches!(self, Value::Undefined | Value::Null)
    }

    /// Try to view as a boolean.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Try to view as a number.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Try to view as a string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Try to view as a list.
    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    /// Try to view as an object's fields.
    pub fn as_object(&self) -> Option<&Fields> {
        match self {
            Value::Object(fields) => Some(fields),
            _ => None,
        }
    }

    /// Look up a field on an object value.
    ///
    /// Returns `None` for non-objects and for missing fields. A field that
    /// is present but holds `Undefined` is returned as-is.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.as_object().and_then(|fields| fields.get(field))
    }
}

// Host-language semantics

impl Value {
    /// The host language's `typeof` answer for this value.
    ///
    /// `null` reports `"object"`, and so do lists. This is exactly the
    /// answer a dispatcher must not trust on its own.
    pub fn type_of(&self) -> &'static str {
        match self {
            Value::Undefined => "undefined",
            Value::Bool(_) => "boolean",
            Value::Number(_) => "number",
            Value::Str(_) => "string",
            Value::Null | Value::List(_) | Value::Object(_) => "object",
        }
    }

    /// Truthiness as the host language defines it.
    ///
    /// Falsy: `undefined`, `null`, `false`, `0`, `-0`, `NaN`, `""`.
    /// Everything else, including empty lists and objects, is truthy.
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Undefined | Value::Null => false,
            Value::Bool(b) => *b,
            Value::Number(n) => *n != 0.0 && !n.is_nan(),
            Value::Str(s) => !s.is_empty(),
            Value::List(_) | Value::Object(_) => true,
        }
    }

    /// Numeric conversion used by loose equality.
    ///
    /// Lists and objects convert to `NaN`; primitive coercion of compound
    /// values is not modelled.
    pub fn to_number(&self) -> f64 {
        match self {
            Value::Null => 0.0,
            Value::Bool(b) => f64::from(u8::from(*b)),
            Value::Number(n) => *n,
            Value::Str(s) => parse_number(s),
            Value::Undefined | Value::List(_) | Value::Object(_) => f64::NAN,
        }
    }

    /// Strict (`===`) equality.
    ///
    /// Same variant and same content for primitives; same allocation for
    /// lists and objects. `NaN` is never strictly equal to itself, and
    /// `null` is never strictly equal to `undefined`.
    pub fn strict_eq(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Undefined, Value::Undefined) | (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Number(a), Value::Number(b)) => numbers_equal(*a, *b),
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::List(a), Value::List(b)) => Heap::ptr_eq(a, b),
            (Value::Object(a), Value::Object(b)) => Heap::ptr_eq(a, b),
            _ => false,
        }
    }

    /// Loose (`==`) equality.
    ///
    /// `null` and `undefined` equal each other and nothing else. Booleans
    /// and numeric strings are coerced to numbers before comparing with a
    /// number.
    pub fn loose_eq(&self, other: &Value) -> bool {
        match (self, other) {
            (a, b) if a.is_nullish() || b.is_nullish() => a.is_nullish() && b.is_nullish(),
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Bool(_), _) => Value::Number(self.to_number()).loose_eq(other),
            (_, Value::Bool(_)) => self.loose_eq(&Value::Number(other.to_number())),
            (Value::Number(a), Value::Str(_)) => numbers_equal(*a, other.to_number()),
            (Value::Str(_), Value::Number(b)) => numbers_equal(self.to_number(), *b),
            _ => self.strict_eq(other),
        }
    }

    /// Display value for user output (strings unquoted).
    pub fn display_value(&self) -> String {
        match self {
            Value::Str(s) => s.to_string(),
            _ => self.to_string(),
        }
    }
}

#[expect(clippy::float_cmp, reason = "host equality is exact IEEE comparison")]
fn numbers_equal(a: f64, b: f64) -> bool {
    a == b
}

/// Parse a string the way the host language's `Number(s)` does.
fn parse_number(s: &str) -> f64 {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    match trimmed {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }
    if let Some(n) = parse_radix_literal(trimmed) {
        return n;
    }
    // Rust also accepts "inf" and "nan"; the host language does not.
    if trimmed.chars().any(|c| c.is_ascii_alphabetic() && c != 'e' && c != 'E') {
        return f64::NAN;
    }
    trimmed.parse().unwrap_or(f64::NAN)
}

/// `0x`, `0o` and `0b` literals. Unsigned only: `"-0x10"` is `NaN`.
fn parse_radix_literal(s: &str) -> Option<f64> {
    let radix = match s.get(..2)? {
        "0x" | "0X" => 16,
        "0o" | "0O" => 8,
        "0b" | "0B" => 2,
        _ => return None,
    };
    let digits = &s[2..];
    if digits.is_empty() {
        return Some(f64::NAN);
    }
    let value = digits.chars().try_fold(0.0_f64, |acc, c| {
        c.to_digit(radix)
            .map(|d| acc * f64::from(radix) + f64::from(d))
    });
    Some(value.unwrap_or(f64::NAN))
}

fn format_number(n: f64, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if n.is_nan() {
        write!(f, "NaN")
    } else if n.is_infinite() {
        write!(f, "{}Infinity", if n < 0.0 { "-" } else { "" })
    } else if n == 0.0 {
        // -0 prints as 0
        write!(f, "0")
    } else {
        write!(f, "{n}")
    }
}

// Trait Implementations

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Undefined => write!(f, "undefined"),
            Value::Null => write!(f, "null"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Number(n) => format_number(*n, f),
            Value::Str(s) => write!(f, "{:?}", &**s),
            Value::List(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, "]")
            }
            Value::Object(fields) => {
                if fields.is_empty() {
                    return write!(f, "{{}}");
                }
                write!(f, "{{ ")?;
                for (i, (name, value)) in fields.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{name}: {value}")?;
                }
                write!(f, " }}")
            }
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Undefined => write!(f, "Undefined"),
            Value::Null => write!(f, "Null"),
            Value::Bool(b) => write!(f, "Bool({b})"),
            Value::Number(n) => write!(f, "Number({n})"),
            Value::Str(s) => write!(f, "Str({:?})", &**s),
            Value::List(items) => write!(f, "List({:?})", &**items),
            Value::Object(fields) => write!(f, "Object({:?})", &**fields),
        }
    }
}
