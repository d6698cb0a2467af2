//! Single-callable wrappers with operator capabilities.
//!
//! A [`Closure`] owns exactly one callable. Two type parameters configure it:
//!
//! - an [`InvokePolicy`](policy::InvokePolicy) deciding how call arguments
//!   reach the callable ([`DirectPolicy`] or [`ApplyPolicy`])
//! - a capability set deciding which composition operators are available
//!   ([`TransformCaps`] or [`PredicateCaps`])
//!
//! The common flavors have aliases and constructor functions:
//!
//! | Alias | Constructor | Policy | Capabilities |
//! |---|---|---|---|
//! | [`Transform<F>`] | [`transform`] | direct | pipe and currying |
//! | [`Predicate<F>`] | [`predicate`] | direct | pipe, currying and boolean operators |
//! | [`Apply<F>`] | [`apply`] | apply | pipe and currying |
//!
//! # Examples
//!
//! ```rust
//! use closure_algebra::callable::Invoke;
//! use closure_algebra::closure::{predicate, transform};
//!
//! let add_42 = transform(|value: i32| value + 42);
//! let triple = transform(|value: i32| value * 3);
//! assert_eq!((add_42 | triple).invoke((1,)), 129);
//! assert_eq!((triple | add_42).invoke((1,)), 45);
//!
//! let is_even = predicate(|value: i32| value % 2 == 0);
//! let is_positive = predicate(|value: i32| value > 0);
//! let even_and_positive = is_even * is_positive;
//! assert!(even_and_positive.invoke((4,)));
//! assert!(!even_and_positive.invoke((-4,)));
//! assert!((!is_even).invoke((3,)));
//! ```

mod capability;
pub mod policy;

pub use capability::{
    Disabled, EnableBindBack, EnableBindFront, EnableConjunction, EnableDisjunction, EnableEqual,
    EnableEquivalent, EnableNegation, EnableNotEqual, EnablePipe, Enabled, Inherit, PredicateCaps,
    ResolveCapabilities, Select, Supports, TransformCaps,
};
pub use policy::{ApplyPolicy, DirectPolicy, InvokePolicy};

use std::fmt;
use std::marker::PhantomData;

use crate::callable::{Invoke, InvokeMut, InvokeOnce, Nothrow};

/// Wraps one callable with an invocation policy `P` and capability set `K`.
///
/// The markers are carried as `PhantomData<fn() -> (P, K)>`, so `Send`,
/// `Sync` and the other auto traits depend on `F` alone.
pub struct Closure<F, P = DirectPolicy, K = TransformCaps> {
    function: F,
    marker: PhantomData<fn() -> (P, K)>,
}

/// A closure supporting pipe, currying and every boolean operator.
pub type Predicate<F> = Closure<F, DirectPolicy, PredicateCaps>;

/// A closure supporting pipe and currying.
pub type Transform<F> = Closure<F, DirectPolicy, TransformCaps>;

/// A transform that spreads a single tuple argument.
pub type Apply<F> = Closure<F, ApplyPolicy, TransformCaps>;

impl<F, P, K> Closure<F, P, K> {
    /// Wraps `function`.
    #[inline]
    pub const fn new(function: F) -> Self {
        Self {
            function,
            marker: PhantomData,
        }
    }

    /// Returns a reference to the wrapped callable.
    #[inline]
    pub const fn inner(&self) -> &F {
        &self.function
    }

    /// Returns a mutable reference to the wrapped callable.
    #[inline]
    pub const fn inner_mut(&mut self) -> &mut F {
        &mut self.function
    }

    /// Unwraps the callable.
    #[inline]
    pub fn into_inner(self) -> F {
        self.function
    }

    /// Re-wraps the callable with another capability set.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use closure_algebra::callable::Invoke;
    /// use closure_algebra::closure::{PredicateCaps, transform};
    ///
    /// let is_small = transform(|value: u8| value < 10).with_capabilities::<PredicateCaps>();
    /// assert!((!is_small).invoke((12,)));
    /// ```
    #[inline]
    pub fn with_capabilities<Caps>(self) -> Closure<F, P, Caps> {
        Closure::new(self.function)
    }
}

/// Wraps `function` as a [`Predicate`].
#[inline]
pub const fn predicate<F>(function: F) -> Predicate<F> {
    Closure::new(function)
}

/// Wraps `function` as a [`Transform`].
#[inline]
pub const fn transform<F>(function: F) -> Transform<F> {
    Closure::new(function)
}

/// Wraps `function` as an [`Apply`] transform.
#[inline]
pub const fn apply<F>(function: F) -> Apply<F> {
    Closure::new(function)
}

/// Wraps `function` with explicitly chosen policy and capabilities.
///
/// # Examples
///
/// ```rust
/// use closure_algebra::callable::Invoke;
/// use closure_algebra::closure::{ApplyPolicy, PredicateCaps, envelop};
///
/// let ordered = envelop::<ApplyPolicy, PredicateCaps, _>(|lhs: i32, rhs: i32| lhs <= rhs);
/// assert!(ordered.invoke(((1, 2),)));
/// assert!((!ordered).invoke(((2, 1),)));
/// ```
#[inline]
pub const fn envelop<P, K, F>(function: F) -> Closure<F, P, K> {
    Closure::new(function)
}

impl<F, P, K> From<F> for Closure<F, P, K> {
    fn from(function: F) -> Self {
        Self::new(function)
    }
}

impl<F: Clone, P, K> Clone for Closure<F, P, K> {
    fn clone(&self) -> Self {
        Self::new(self.function.clone())
    }
}

impl<F: Copy, P, K> Copy for Closure<F, P, K> {}

impl<F: Default, P, K> Default for Closure<F, P, K> {
    fn default() -> Self {
        Self::new(F::default())
    }
}

impl<F, P, K> fmt::Debug for Closure<F, P, K> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Closure")
            .field("function", &std::any::type_name::<F>())
            .field("policy", &std::any::type_name::<P>())
            .field("capabilities", &std::any::type_name::<K>())
            .finish()
    }
}

impl<F, P, K, Args> InvokeOnce<Args> for Closure<F, P, K>
where
    P: InvokePolicy<Args>,
    F: InvokeOnce<P::Arguments>,
{
    type Output = F::Output;

    #[inline]
    fn invoke_once(self, args: Args) -> Self::Output {
        self.function.invoke_once(P::arrange(args))
    }
}

impl<F, P, K, Args> InvokeMut<Args> for Closure<F, P, K>
where
    P: InvokePolicy<Args>,
    F: InvokeMut<P::Arguments>,
{
    #[inline]
    fn invoke_mut(&mut self, args: Args) -> Self::Output {
        self.function.invoke_mut(P::arrange(args))
    }
}

impl<F, P, K, Args> Invoke<Args> for Closure<F, P, K>
where
    P: InvokePolicy<Args>,
    F: Invoke<P::Arguments>,
{
    #[inline]
    fn invoke(&self, args: Args) -> Self::Output {
        self.function.invoke(P::arrange(args))
    }
}

impl<F: Nothrow, P: Nothrow, K> Nothrow for Closure<F, P, K> {}
