//! Narrow Dispatch - tagged-union dispatch over dynamic values.
//!
//! This crate provides:
//! - `Discriminant`, the runtime tag computed for a `Value`
//! - `Classifier`, which computes it with priority-ordered rules
//! - `HandlerTable`, an immutable discriminant -> handler mapping with
//!   build-time uniqueness and coverage checks
//! - `Narrowed`, the view a handler receives, with per-shape field defaults
//! - `OverloadSet`, which picks one declared signature for a call and runs
//!   a single shared body
//!
//! # Classification Order
//!
//! 1. Sentinel: `undefined` / `null` (or the unified `null | undefined`
//!    under the loose policy)
//! 2. Primitive kind: string, number, boolean
//! 3. Structural tag: an object whose tag field (default `kind`) holds a string
//! 4. Structure: list, or any other object
//!
//! The first rule that matches wins, so `null` is never mistaken for an
//! object even though the host language's `typeof null` says `"object"`.
//!
//! # Thread Safety
//!
//! Handlers and overload bodies are `Send + Sync`, and tables never mutate
//! after `build()`, so a built table can be shared across threads by
//! reference.

mod classify;
mod config;
mod discriminant;
mod errors;
mod narrowed;
mod overload;
mod table;

pub use classify::{Classification, Classifier, Rule};
pub use config::{DispatchConfig, NullPolicy, DEFAULT_TAG_FIELD};
pub use discriminant::{Discriminant, PrimitiveKind};
pub use errors::{DispatchError, TableError};
pub use narrowed::{FieldDefaults, Narrowed, ShapeView};
pub use overload::{ArgShape, Body, Call, OverloadSet, OverloadSetBuilder, ParamKind, Signature};
pub use table::{Handler, HandlerTable, HandlerTableBuilder};

pub use narrow_value::Value;
