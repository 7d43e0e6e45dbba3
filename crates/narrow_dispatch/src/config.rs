//! Per-table dispatch configuration.

use std::fmt;

use narrow_value::Value;

use crate::Discriminant;

/// Field inspected by the structural-tag rule unless configured otherwise.
pub const DEFAULT_TAG_FIELD: &str = "kind";

/// How the sentinel rule treats `null` and `undefined`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum NullPolicy {
    /// `null` and `undefined` are different shapes.
    #[default]
    Strict,
    /// Both classify as `Discriminant::Nullish`.
    Loose,
}

impl NullPolicy {
    /// Sentinel discriminant of `value` under this policy.
    pub fn sentinel(self, value: &Value) -> Option<Discriminant> {
        match (self, value) {
            (Self::Strict, Value::Undefined) => Some(Discriminant::Undefined),
            (Self::Strict, Value::Null) => Some(Discriminant::Null),
            (Self::Loose, Value::Undefined | Value::Null) => Some(Discriminant::Nullish),
            _ => None,
        }
    }

    /// Check whether the classifier can ever produce `discriminant`.
    pub fn can_select(self, discriminant: &Discriminant) -> bool {
        match discriminant {
            Discriminant::Undefined | Discriminant::Null => self == Self::Strict,
            Discriminant::Nullish => self == Self::Loose,
            _ => true,
        }
    }

    /// Name used in diagnostics and on the command line.
    pub fn name(self) -> &'static str {
        match self {
            Self::Strict => "strict",
            Self::Loose => "loose",
        }
    }
}

impl fmt::Display for NullPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Configuration shared by handler tables and overload sets.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DispatchConfig {
    /// Treatment of `null` versus `undefined`.
    pub null_policy: NullPolicy,
    /// Object field holding the literal tag.
    pub tag_field: String,
}

impl DispatchConfig {
    /// Default configuration with the loose null policy.
    pub fn loose() -> Self {
        Self {
            null_policy: NullPolicy::Loose,
            ..Self::default()
        }
    }

    /// Replace the tag field.
    #[must_use]
    pub fn with_tag_field(mut self, field: impl Into<String>) -> Self {
        self.tag_field = field.into();
        self
    }

    /// Replace the null policy.
    #[must_use]
    pub fn with_null_policy(mut self, policy: NullPolicy) -> Self {
        self.null_policy = policy;
        self
    }
}

impl Default for DispatchConfig {
    fn default() -> Self {
        Self {
            null_policy: NullPolicy::Strict,
            tag_field: DEFAULT_TAG_FIELD.to_string(),
        }
    }
}
