//! The invocation protocol shared by every building block of the crate.
//!
//! Rust's own [`Fn`], [`FnMut`] and [`FnOnce`] traits cannot be implemented
//! on user types, so this module mirrors them with three traits that can:
//!
//! - [`InvokeOnce`]: consuming invocation (`self`)
//! - [`InvokeMut`]: invocation through a unique reference (`&mut self`)
//! - [`Invoke`]: invocation through a shared reference (`&self`)
//!
//! Arguments are always passed as one tuple, so a binary callable is invoked
//! with `(lhs, rhs)` and a unary one with `(value,)`. Every Rust closure and
//! function of up to eight parameters implements the traits through blanket
//! implementations.
//!
//! # Examples
//!
//! ```rust
//! use closure_algebra::callable::{Invoke, InvokeMut, InvokeOnce};
//!
//! let add = |lhs: i32, rhs: i32| lhs + rhs;
//! assert_eq!(add.invoke((1, 2)), 3);
//!
//! let mut counter = 0;
//! let mut count = |step: i32| {
//!     counter += step;
//!     counter
//! };
//! assert_eq!(count.invoke_mut((2,)), 2);
//! assert_eq!(count.invoke_mut((3,)), 5);
//!
//! let message = String::from("moved");
//! let consume = move || message;
//! assert_eq!(consume.invoke_once(()), "moved");
//! ```
//!
//! # Nothrow
//!
//! [`Nothrow`] marks callables that never panic. The marker is derived
//! structurally by the closure and composition types, so a composition is
//! [`Nothrow`] exactly when its strategy and all of its callables are.
//! Plain closures cannot be inspected, so they opt in through [`nothrow`].

mod adapters;
mod function;

pub use adapters::{AssertNothrow, ByMut, ByRef, by_mut, by_ref, nothrow};

/// A callable that can be invoked once, consuming itself.
///
/// `Args` is the tuple of arguments.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be invoked with the arguments `{Args}`",
    label = "not invocable with `{Args}`",
    note = "arguments are passed as a tuple: `(value,)` for one argument, `(lhs, rhs)` for two"
)]
pub trait InvokeOnce<Args> {
    /// The value produced by the invocation.
    type Output;

    /// Invokes the callable, consuming it.
    fn invoke_once(self, args: Args) -> Self::Output;
}

/// A callable that can be invoked repeatedly through a unique reference.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be invoked through `&mut` with the arguments `{Args}`",
    label = "not invocable through `&mut` with `{Args}`"
)]
pub trait InvokeMut<Args>: InvokeOnce<Args> {
    /// Invokes the callable through a unique reference.
    fn invoke_mut(&mut self, args: Args) -> Self::Output;
}

/// A callable that can be invoked repeatedly through a shared reference.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be invoked through `&` with the arguments `{Args}`",
    label = "not invocable through `&` with `{Args}`"
)]
pub trait Invoke<Args>: InvokeMut<Args> {
    /// Invokes the callable through a shared reference.
    fn invoke(&self, args: Args) -> Self::Output;
}

/// Marker for callables whose invocation never panics.
///
/// Implemented structurally: closures, compositions and lists are `Nothrow`
/// when everything they hold is. Raw Rust closures are opaque and opt in via
/// [`nothrow`].
///
/// The marker is decided per type, not per invocation tier or argument list:
///
/// - [`BoundValue<T>`](crate::strategy::BoundValue) is `Nothrow` only for
///   `T: Copy`, even though [`InvokeOnce`] moves the value out without
///   cloning it.
/// - [`Equality`](crate::strategy::Equality) strategies are always
///   `Nothrow`. A panicking [`PartialEq`] or [`PartialOrd`] implementation on
///   the compared results is not accounted for.
///
/// # Examples
///
/// ```rust
/// use closure_algebra::callable::{Nothrow, nothrow};
/// use closure_algebra::closure::transform;
///
/// fn assert_nothrow<T: Nothrow>(_: &T) {}
///
/// let increment = transform(nothrow(|value: i32| value.wrapping_add(1)));
/// assert_nothrow(&increment);
/// assert_nothrow(&(increment | increment));
/// ```
pub trait Nothrow {}

/// Invokes a callable through a shared reference, packing the arguments.
///
/// `invoke!(f, a, b)` expands to `f.invoke((a, b))`.
///
/// # Examples
///
/// ```rust
/// use closure_algebra::invoke;
/// use closure_algebra::closure::transform;
///
/// let multiply = transform(|lhs: i32, rhs: i32| lhs * rhs);
/// assert_eq!(invoke!(multiply, 6, 7), 42);
/// assert_eq!(invoke!(|| 1), 1);
/// ```
#[macro_export]
macro_rules! invoke {
    ($function:expr $(, $argument:expr)* $(,)?) => {
        $crate::callable::Invoke::invoke(&$function, ($($argument,)*))
    };
}
