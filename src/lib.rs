//! # closure-algebra
//!
//! Operator-based composition of callables for Rust.
//!
//! ## Overview
//!
//! Wrapping a callable in a [`Closure`](closure::Closure) gives it
//! operators that build new callables without writing a single lambda:
//!
//! - **Pipes**: `f | g` feeds the result of `f` into `g`
//! - **Boolean algebra**: `p * q` (AND), `p + q` (OR), `!p`, plus
//!   [`equal`](composition::Combinators::equal),
//!   [`not_equal`](composition::Combinators::not_equal) and
//!   [`equivalent`](composition::Combinators::equivalent)
//! - **Currying**: `f << v` binds a leading argument, `f >> v` a trailing one
//!
//! Compositions are plain values holding every callable by its concrete type
//! in a heterogeneous list, so invoking one is as cheap as the hand-written
//! closure. Chains of the same associative operator are flattened at the type
//! level: `a | b | c` holds three callables, not a nested pair.
//!
//! ## Feature Flags
//!
//! - `functions` (default): predefined comparison, arithmetic and utility
//!   function objects
//! - `serde`: `Serialize`/`Deserialize` for operator metadata
//! - `tracing`: trace events when compositions are built
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use closure_algebra::prelude::*;
//!
//! let is_even = predicate(|value: &i32| value % 2 == 0);
//! let is_large = predicate(|value: &i32| *value > 45);
//! let keep = !is_even + is_large;
//!
//! let kept: Vec<i32> = (42..48).filter(|value| keep.invoke((value,))).collect();
//! assert_eq!(kept, [43, 45, 46, 47]);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
// Note: Disabling redundant_closure_for_method_calls due to clippy 0.1.92 panic bug
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports the closure constructors, the invocation traits and the
/// combinator trait.
///
/// # Usage
///
/// ```rust
/// use closure_algebra::prelude::*;
/// ```
pub mod prelude {
    pub use crate::callable::{Invoke, InvokeMut, InvokeOnce, Nothrow, by_mut, by_ref, nothrow};
    pub use crate::closure::{Apply, Closure, Predicate, Transform, apply, predicate, transform};
    pub use crate::composition::{Combinators, Composition, lift};
    pub use crate::operator::{FlattenPolicy, OperatorKind};
    pub use crate::strategy::BoundValue;

    #[cfg(feature = "functions")]
    pub use crate::functions::*;
}

pub mod callable;
pub mod closure;
pub mod composition;
pub mod error;
pub mod operator;
pub mod sequence;
pub mod strategy;
pub mod tuple;

#[cfg(feature = "functions")]
pub mod functions;

pub use error::ParseOperatorKindError;
