//! Handler tables mapping discriminants to handlers.
//!
//! # Construction
//!
//! Tables are assembled with `HandlerTableBuilder` and validated once in
//! `build()`:
//! - every discriminant has at most one handler
//! - every discriminant declared with `exhaustive` has a handler
//! - no handler is registered for a sentinel the null policy never produces
//! - field defaults only target tagged or untagged objects that have a
//!   handler
//!
//! A built table is immutable. `dispatch` only reads it, so the same table
//! can serve any number of callers, including from other threads.

use rustc_hash::FxHashMap;

use narrow_value::Value;

use crate::{
    Classification, Classifier, DispatchConfig, DispatchError, Discriminant, FieldDefaults,
    Narrowed, NullPolicy, ShapeView, TableError,
};

/// Handler invoked with a value narrowed to its shape.
pub type Handler<R, E> = Box<dyn Fn(Narrowed<'_>) -> Result<R, E> + Send + Sync>;

/// Builder for `HandlerTable`.
///
/// Registration never fails; all validation happens in `build()`.
pub struct HandlerTableBuilder<R, E = DispatchError> {
    config: DispatchConfig,
    registrations: Vec<(Discriminant, Handler<R, E>)>,
    expected: Vec<Discriminant>,
    defaults: FxHashMap<Discriminant, FieldDefaults>,
}

impl<R, E> HandlerTableBuilder<R, E> {
    /// Create an empty builder with the default configuration.
    pub fn new() -> Self {
        Self {
            config: DispatchConfig::default(),
            registrations: Vec::new(),
            expected: Vec::new(),
            defaults: FxHashMap::default(),
        }
    }

    /// Replace the whole configuration.
    #[must_use]
    pub fn config(mut self, config: DispatchConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the null policy.
    #[must_use]
    pub fn null_policy(mut self, policy: NullPolicy) -> Self {
        self.config.null_policy = policy;
        self
    }

    /// Set the field read by the structural-tag rule.
    #[must_use]
    pub fn tag_field(mut self, field: impl Into<String>) -> Self {
        self.config.tag_field = field.into();
        self
    }

    /// Register a handler for `discriminant`.
    #[must_use]
    pub fn on<F>(mut self, discriminant: Discriminant, handler: F) -> Self
    where
        F: Fn(Narrowed<'_>) -> Result<R, E> + Send + Sync + 'static,
    {
        self.registrations.push((discriminant, Box::new(handler)));
        self
    }

    /// Register a handler for objects tagged with `tag`.
    #[must_use]
    pub fn on_tag<F>(self, tag: impl Into<String>, handler: F) -> Self
    where
        F: Fn(Narrowed<'_>) -> Result<R, E> + Send + Sync + 'static,
    {
        self.on(Discriminant::tagged(tag), handler)
    }

    /// Declare defaults for optional fields of a structural shape.
    ///
    /// Declaring defaults twice for one shape merges nothing: the later
    /// declaration replaces the earlier one. `build()` rejects defaults for
    /// a shape that is not an object or has no handler.
    #[must_use]
    pub fn defaults(mut self, discriminant: Discriminant, defaults: FieldDefaults) -> Self {
        self.defaults.insert(discriminant, defaults);
        self
    }

    /// Declare shapes that must all have handlers when the table is built.
    #[must_use]
    pub fn exhaustive(mut self, shapes: impl IntoIterator<Item = Discriminant>) -> Self {
        self.expected.extend(shapes);
        self
    }

    /// Validate the registrations and freeze the table.
    pub fn build(self) -> Result<HandlerTable<R, E>, TableError> {
        let policy = self.config.null_policy;
        let mut handlers: FxHashMap<Discriminant, Handler<R, E>> =
            FxHashMap::with_capacity_and_hasher(self.registrations.len(), Default::default());

        for (discriminant, handler) in self.registrations {
            if !policy.can_select(&discriminant) {
                return Err(TableError::UnreachableHandler {
                    discriminant,
                    policy,
                });
            }
            if handlers.contains_key(&discriminant) {
                return Err(TableError::DuplicateHandler { discriminant });
            }
            handlers.insert(discriminant, handler);
        }

        if let Some(missing) = self
            .expected
            .into_iter()
            .find(|shape| !handlers.contains_key(shape))
        {
            return Err(TableError::MissingHandler {
                discriminant: missing,
            });
        }

        if let Some(shape) = self.defaults.keys().find(|shape| {
            !matches!(shape, Discriminant::Tagged(_) | Discriminant::Object)
                || !handlers.contains_key(*shape)
        }) {
            return Err(TableError::MisplacedDefaults {
                discriminant: shape.clone(),
            });
        }

        tracing::debug!(
            handlers = handlers.len(),
            null_policy = %policy,
            tag_field = %self.config.tag_field,
            "built handler table"
        );

        Ok(HandlerTable {
            classifier: Classifier::new(&self.config),
            handlers,
            defaults: self.defaults,
        })
    }
}

/// Typed registration for the closed shapes.
///
/// The handler receives the payload directly instead of a `Narrowed`. The
/// classifier only produces these discriminants for matching payloads, so
/// the mismatch arm reports the shape as unhandled rather than panicking.
impl<R, E> HandlerTableBuilder<R, E>
where
    R: 'static,
    E: From<DispatchError> + 'static,
{
    /// Register a handler for strings.
    #[must_use]
    pub fn on_string<F>(self, handler: F) -> Self
    where
        F: Fn(&str) -> Result<R, E> + Send + Sync + 'static,
    {
        self.on(Discriminant::STRING, move |narrowed| match narrowed {
            Narrowed::Str(s) => handler(s),
            _ => Err(mismatch(Discriminant::STRING)),
        })
    }

    /// Register a handler for numbers.
    #[must_use]
    pub fn on_number<F>(self, handler: F) -> Self
    where
        F: Fn(f64) -> Result<R, E> + Send + Sync + 'static,
    {
        self.on(Discriminant::NUMBER, move |narrowed| match narrowed {
            Narrowed::Number(n) => handler(n),
            _ => Err(mismatch(Discriminant::NUMBER)),
        })
    }

    /// Register a handler for booleans.
    #[must_use]
    pub fn on_boolean<F>(self, handler: F) -> Self
    where
        F: Fn(bool) -> Result<R, E> + Send + Sync + 'static,
    {
        self.on(Discriminant::BOOLEAN, move |narrowed| match narrowed {
            Narrowed::Bool(b) => handler(b),
            _ => Err(mismatch(Discriminant::BOOLEAN)),
        })
    }

    /// Register a handler for lists.
    #[must_use]
    pub fn on_list<F>(self, handler: F) -> Self
    where
        F: Fn(&[Value]) -> Result<R, E> + Send + Sync + 'static,
    {
        self.on(Discriminant::List, move |narrowed| match narrowed {
            Narrowed::List(items) => handler(items),
            _ => Err(mismatch(Discriminant::List)),
        })
    }

    /// Register a handler for objects tagged with `tag`, given the field view.
    #[must_use]
    pub fn on_shape<F>(self, tag: impl Into<String>, handler: F) -> Self
    where
        F: Fn(ShapeView<'_>) -> Result<R, E> + Send + Sync + 'static,
    {
        let shape = Discriminant::tagged(tag);
        let expected = shape.clone();
        self.on(shape, move |narrowed| match narrowed {
            Narrowed::Tagged { view, .. } => handler(view),
            _ => Err(mismatch(expected.clone())),
        })
    }
}

fn mismatch<E: From<DispatchError>>(discriminant: Discriminant) -> E {
    DispatchError::UnhandledShape { discriminant }.into()
}

impl<R, E> Default for HandlerTableBuilder<R, E> {
    fn default() -> Self {
        Self::new()
    }
}

/// Immutable mapping from discriminant to handler.
pub struct HandlerTable<R, E = DispatchError> {
    classifier: Classifier,
    handlers: FxHashMap<Discriminant, Handler<R, E>>,
    defaults: FxHashMap<Discriminant, FieldDefaults>,
}

impl<R, E> HandlerTable<R, E> {
    /// Start building a table.
    pub fn builder() -> HandlerTableBuilder<R, E> {
        HandlerTableBuilder::new()
    }

    /// Classify `value` the way `dispatch` would.
    pub fn classify(&self, value: &Value) -> Classification {
        self.classifier.classify(value)
    }

    /// Check whether a handler is registered for `discriminant`.
    pub fn handles(&self, discriminant: &Discriminant) -> bool {
        self.handlers.contains_key(discriminant)
    }

    /// Registered discriminants, in no particular order.
    pub fn discriminants(&self) -> impl Iterator<Item = &Discriminant> {
        self.handlers.keys()
    }

    /// The null policy this table classifies with.
    pub fn null_policy(&self) -> NullPolicy {
        self.classifier.null_policy()
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

impl<R, E> HandlerTable<R, E>
where
    E: From<DispatchError>,
{
    /// Classify `value` and run the one handler registered for its shape.
    ///
    /// Returns `UnhandledShape` (converted into `E`) when the shape has no
    /// handler. Errors returned by the handler are passed through as-is.
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn dispatch(&self, value: &Value) -> Result<R, E> {
        let Classification { discriminant, rule } = self.classifier.classify(value);
        let Some((shape, handler)) = self.handlers.get_key_value(&discriminant) else {
            tracing::debug!(%discriminant, "no handler for shape");
            return Err(DispatchError::UnhandledShape { discriminant }.into());
        };
        tracing::debug!(%shape, rule = rule.name(), "dispatching");
        handler(Narrowed::new(value, shape, self.defaults.get(shape)))
    }
}
