//! Overload resolution over classified arguments.
//!
//! An `OverloadSet` declares several call signatures and one body. A call
//! is resolved by classifying each argument and scoring every signature
//! of matching arity:
//!
//! | parameter | accepts | points |
//! |---|---|---|
//! | `Exact(d)` | exactly `d` | 2 |
//! | `OneOf(ds)` | any of `ds` | 1 |
//! | `Any` | anything | 0 |
//!
//! The highest total wins; ties go to the signature declared first. If no
//! signature accepts the arguments the call fails with
//! `NoMatchingOverload`.

use std::fmt;
use std::marker::PhantomData;

use smallvec::SmallVec;

use narrow_value::Value;

use crate::{Classifier, DispatchConfig, DispatchError, Discriminant, TableError};

/// Accepted kinds for one parameter position.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ParamKind {
    /// Exactly one discriminant.
    Exact(Discriminant),
    /// A union of discriminants.
    OneOf(SmallVec<[Discriminant; 4]>),
    /// Any value.
    Any,
}

impl ParamKind {
    pub fn number() -> Self {
        Self::Exact(Discriminant::NUMBER)
    }

    pub fn string() -> Self {
        Self::Exact(Discriminant::STRING)
    }

    pub fn boolean() -> Self {
        Self::Exact(Discriminant::BOOLEAN)
    }

    /// A union parameter, e.g. `string | number`.
    ///
    /// Members are sorted and deduplicated; a single-member union becomes
    /// `Exact`.
    pub fn one_of(kinds: impl IntoIterator<Item = Discriminant>) -> Self {
        Self::OneOf(kinds.into_iter().collect()).canonical()
    }

    /// Canonical form: two parameters that accept the same kinds compare
    /// equal.
    #[must_use]
    pub fn canonical(self) -> Self {
        match self {
            Self::OneOf(mut kinds) => {
                kinds.sort_unstable();
                kinds.dedup();
                if kinds.len() == 1 {
                    Self::Exact(kinds.remove(0))
                } else {
                    Self::OneOf(kinds)
                }
            }
            other => other,
        }
    }

    /// Check whether an argument of kind `arg` fits this parameter.
    pub fn accepts(&self, arg: &Discriminant) -> bool {
        match self {
            Self::Exact(d) => d == arg,
            Self::OneOf(ds) => ds.contains(arg),
            Self::Any => true,
        }
    }

    /// How specific this parameter is; higher is preferred.
    pub fn specificity(&self) -> u32 {
        match self {
            Self::Exact(_) => 2,
            Self::OneOf(_) => 1,
            Self::Any => 0,
        }
    }
}

impl fmt::Display for ParamKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exact(d) => write!(f, "{d}"),
            Self::OneOf(ds) => {
                for (i, d) in ds.iter().enumerate() {
                    if i > 0 {
                        write!(f, " | ")?;
                    }
                    write!(f, "{d}")?;
                }
                Ok(())
            }
            Self::Any => write!(f, "any"),
        }
    }
}

/// One declared call signature.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Signature {
    params: SmallVec<[ParamKind; 4]>,
}

impl Signature {
    /// Parameters are stored in canonical form, so signatures that accept
    /// the same arguments are equal.
    pub fn new(params: impl IntoIterator<Item = ParamKind>) -> Self {
        Self {
            params: params.into_iter().map(ParamKind::canonical).collect(),
        }
    }

    pub fn params(&self) -> &[ParamKind] {
        &self.params
    }

    pub fn arity(&self) -> usize {
        self.params.len()
    }

    /// Specificity score for these argument kinds, or `None` if the
    /// signature does not accept them.
    pub fn score(&self, args: &[Discriminant]) -> Option<u32> {
        if args.len() != self.params.len() {
            return None;
        }
        self.params
            .iter()
            .zip(args)
            .try_fold(0u32, |total, (param, arg)| {
                param
                    .accepts(arg)
                    .then(|| total.saturating_add(param.specificity()))
            })
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, param) in self.params.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{param}")?;
        }
        write!(f, ")")
    }
}

/// Classified kinds of a concrete argument list, for diagnostics.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArgShape(SmallVec<[Discriminant; 4]>);

impl ArgShape {
    pub fn new(kinds: impl IntoIterator<Item = Discriminant>) -> Self {
        Self(kinds.into_iter().collect())
    }

    pub fn kinds(&self) -> &[Discriminant] {
        &self.0
    }
}

impl fmt::Display for ArgShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, kind) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{kind}")?;
        }
        write!(f, ")")
    }
}

/// A resolved call, as seen by the shared body.
#[derive(Clone, Copy, Debug)]
pub struct Call<'a> {
    name: &'a str,
    index: usize,
    signature: &'a Signature,
    shape: &'a ArgShape,
    args: &'a [Value],
}

impl<'a> Call<'a> {
    /// Name of the overload set being called.
    pub fn name(&self) -> &'a str {
        self.name
    }

    /// Position of the selected signature in declaration order.
    pub fn signature_index(&self) -> usize {
        self.index
    }

    pub fn signature(&self) -> &'a Signature {
        self.signature
    }

    pub fn args(&self) -> &'a [Value] {
        self.args
    }

    /// Argument at `index`; `None` when the selected signature is shorter.
    pub fn arg(&self, index: usize) -> Option<&'a Value> {
        self.args.get(index)
    }

    /// Like `arg`, but a missing argument is `NoMatchingOverload`.
    pub fn require(&self, index: usize) -> Result<&'a Value, DispatchError> {
        self.arg(index)
            .ok_or_else(|| DispatchError::NoMatchingOverload {
                name: self.name.to_string(),
                args: self.shape.clone(),
            })
    }

    /// Numeric argument at `index`.
    pub fn number(&self, index: usize) -> Option<f64> {
        self.arg(index).and_then(Value::as_number)
    }

    /// String argument at `index`.
    pub fn str(&self, index: usize) -> Option<&'a str> {
        self.arg(index).and_then(Value::as_str)
    }
}

/// The single implementation body behind all signatures.
pub type Body<R, E> = Box<dyn Fn(&Call<'_>) -> Result<R, E> + Send + Sync>;

/// Builder for `OverloadSet`.
pub struct OverloadSetBuilder<R, E = DispatchError> {
    name: String,
    signatures: Vec<Signature>,
    config: DispatchConfig,
    _result: PhantomData<fn() -> Result<R, E>>,
}

impl<R, E> OverloadSetBuilder<R, E> {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            signatures: Vec::new(),
            config: DispatchConfig::default(),
            _result: PhantomData,
        }
    }

    /// Declare a signature. Declaration order breaks specificity ties.
    #[must_use]
    pub fn signature(mut self, signature: Signature) -> Self {
        self.signatures.push(signature);
        self
    }

    /// Configuration used to classify arguments.
    #[must_use]
    pub fn config(mut self, config: DispatchConfig) -> Self {
        self.config = config;
        self
    }

    /// Validate the signatures and attach the implementation body.
    pub fn build<F>(self, body: F) -> Result<OverloadSet<R, E>, TableError>
    where
        F: Fn(&Call<'_>) -> Result<R, E> + Send + Sync + 'static,
    {
        if self.signatures.is_empty() {
            return Err(TableError::EmptyOverloadSet { name: self.name });
        }
        for (i, signature) in self.signatures.iter().enumerate() {
            if self.signatures[..i].contains(signature) {
                return Err(TableError::DuplicateSignature {
                    name: self.name,
                    signature: signature.clone(),
                });
            }
        }

        tracing::debug!(
            name = %self.name,
            signatures = self.signatures.len(),
            "built overload set"
        );

        Ok(OverloadSet {
            name: self.name,
            signatures: self.signatures,
            classifier: Classifier::new(&self.config),
            body: Box::new(body),
        })
    }
}

/// Declared signatures plus one shared implementation.
pub struct OverloadSet<R, E = DispatchError> {
    name: String,
    signatures: Vec<Signature>,
    classifier: Classifier,
    body: Body<R, E>,
}

impl<R, E> OverloadSet<R, E> {
    /// Start building an overload set named `name`.
    pub fn builder(name: impl Into<String>) -> OverloadSetBuilder<R, E> {
        OverloadSetBuilder::new(name)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn signatures(&self) -> &[Signature] {
        &self.signatures
    }

    /// Classify each argument.
    pub fn arg_shape(&self, args: &[Value]) -> ArgShape {
        ArgShape::new(args.iter().map(|arg| self.classifier.classify(arg).discriminant))
    }

    /// Select the signature for `args` without running the body.
    pub fn resolve(&self, args: &[Value]) -> Result<(usize, &Signature), DispatchError> {
        self.select(self.arg_shape(args))
            .map(|(index, signature, _)| (index, signature))
    }

    fn select(&self, shape: ArgShape) -> Result<(usize, &Signature, ArgShape), DispatchError> {
        let mut best: Option<(usize, u32)> = None;
        for (index, signature) in self.signatures.iter().enumerate() {
            let Some(score) = signature.score(shape.kinds()) else {
                continue;
            };
            if best.map_or(true, |(_, top)| score > top) {
                best = Some((index, score));
            }
        }
        match best {
            Some((index, score)) => {
                tracing::trace!(name = %self.name, index, score, "resolved overload");
                Ok((index, &self.signatures[index], shape))
            }
            None => Err(DispatchError::NoMatchingOverload {
                name: self.name.clone(),
                args: shape,
            }),
        }
    }
}

impl<R, E> OverloadSet<R, E>
where
    E: From<DispatchError>,
{
    /// Resolve `args` and run the body once with the selected signature.
    #[tracing::instrument(level = "debug", skip_all, fields(name = %self.name, argc = args.len()))]
    pub fn call(&self, args: &[Value]) -> Result<R, E> {
        let (index, signature, shape) = self.select(self.arg_shape(args))?;
        let call = Call {
            name: &self.name,
            index,
            signature,
            shape: &shape,
            args,
        };
        (self.body)(&call)
    }
}

#[cfg(test)]
mod tests;
