//! Invariant-carrying values used inside schema nodes.
//!
//! Each constructor rejects out-of-range input with
//! [`SchemaError`](crate::SchemaError), so a node tree that was built at all
//! is well formed and the validator never re-checks schema consistency.

pub mod bound;
pub mod multiplier;
pub mod pattern;
pub mod positive_int;
pub mod property_name;

pub use bound::{Interval, LowerBound, UpperBound};
pub use multiplier::Multiplier;
pub use pattern::CompiledPattern;
pub use positive_int::PositiveInt;
pub use property_name::PropertyName;
