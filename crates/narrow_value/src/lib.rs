//! Narrow Value - dynamic runtime values for the narrow dispatcher.
//!
//! This crate provides:
//! - `Value`, an open value that is only known at runtime to be one of
//!   the absent/null sentinels, a primitive, a list, or an object
//! - `Heap<T>`, the shared payload wrapper behind strings, lists and objects
//! - Host-language helpers (`type_of`, `loose_eq`, `strict_eq`, `is_truthy`)
//!   that reproduce the scripting semantics the dispatcher must guard against
//!
//! # Value Types
//!
//! All heap allocations go through `Value::` factory methods; `Heap<T>`
//! cannot be constructed outside this crate.

mod value;

pub use value::{Fields, Heap, Value};
