//! Discriminant computation.
//!
//! # Rule Order
//!
//! Rules are tried in priority order (lowest first) and the first match
//! wins:
//! 1. `Sentinel` (priority 0) - `undefined` / `null`, per the null policy
//! 2. `Primitive` (priority 1) - string, number, boolean
//! 3. `StructuralTag` (priority 2) - object with a string tag field
//! 4. `Structure` (priority 3) - list, or any remaining object
//!
//! `Structure` is the terminal rule: every value the first three rules
//! leave unmatched is a list or an object, so classification is total.

use narrow_value::Value;

use crate::{DispatchConfig, Discriminant, NullPolicy, PrimitiveKind};

/// A classification rule.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Rule {
    Sentinel,
    Primitive,
    StructuralTag,
    Structure,
}

impl Rule {
    /// All rules in the order they are tried.
    pub const ORDER: [Rule; 4] = [
        Rule::Sentinel,
        Rule::Primitive,
        Rule::StructuralTag,
        Rule::Structure,
    ];

    /// Get the priority of this rule (lower = tried earlier).
    pub fn priority(self) -> u8 {
        match self {
            Self::Sentinel => 0,
            Self::Primitive => 1,
            Self::StructuralTag => 2,
            Self::Structure => 3,
        }
    }

    /// Get a human-readable name for this rule (for tracing).
    pub fn name(self) -> &'static str {
        match self {
            Self::Sentinel => "sentinel",
            Self::Primitive => "primitive",
            Self::StructuralTag => "structural_tag",
            Self::Structure => "structure",
        }
    }
}

/// Result of classifying one value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Classification {
    /// The computed discriminant.
    pub discriminant: Discriminant,
    /// The rule that produced it.
    pub rule: Rule,
}

/// Computes the discriminant of a value.
///
/// Pure: holds only configuration, so classifying the same value twice
/// always gives the same answer.
#[derive(Clone, Debug)]
pub struct Classifier {
    null_policy: NullPolicy,
    tag_field: String,
}

impl Classifier {
    /// Create a classifier from a dispatch configuration.
    pub fn new(config: &DispatchConfig) -> Self {
        Self {
            null_policy: config.null_policy,
            tag_field: config.tag_field.clone(),
        }
    }

    /// The null policy in effect.
    pub fn null_policy(&self) -> NullPolicy {
        self.null_policy
    }

    /// The field read by the structural-tag rule.
    pub fn tag_field(&self) -> &str {
        &self.tag_field
    }

    /// Classify `value`.
    pub fn classify(&self, value: &Value) -> Classification {
        let classification = Rule::ORDER
            .into_iter()
            .find_map(|rule| {
                self.apply(rule, value)
                    .map(|discriminant| Classification { discriminant, rule })
            })
            .unwrap_or_else(|| Classification {
                discriminant: Discriminant::Object,
                rule: Rule::Structure,
            });
        tracing::trace!(
            rule = classification.rule.name(),
            discriminant = %classification.discriminant,
            "classified value"
        );
        classification
    }

    /// Try a single rule against `value`.
    pub fn apply(&self, rule: Rule, value: &Value) -> Option<Discriminant> {
        match rule {
            Rule::Sentinel => self.null_policy.sentinel(value),
            Rule::Primitive => PrimitiveKind::of(value).map(Discriminant::Primitive),
            Rule::StructuralTag => value
                .get(&self.tag_field)
                .and_then(Value::as_str)
                .map(Discriminant::tagged),
            Rule::Structure => match value {
                Value::List(_) => Some(Discriminant::List),
                Value::Object(_) => Some(Discriminant::Object),
                _ => None,
            },
        }
    }
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new(&DispatchConfig::default())
    }
}
