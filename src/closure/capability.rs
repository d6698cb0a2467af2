//! Capability sets: which operators a closure flavor supports.
//!
//! Each operator has one marker trait. A capability set is a zero-sized type
//! implementing the traits of the operators it enables, and every closure or
//! composition carrying that set gets exactly those operators.
//!
//! | Operator | [`TransformCaps`] | [`PredicateCaps`] |
//! |---|---|---|
//! | pipe, bind front, bind back | yes | yes |
//! | conjunction, disjunction, negation | | yes |
//! | equal, not equal, equivalent | | yes |
//!
//! When two operands carry different sets, the result takes the set of the
//! first operand that enables the operator, so `transform(f) * predicate(p)`
//! is a predicate conjunction while `transform(f) | predicate(p)` stays a
//! transform. Lifted callables and bound values carry [`Inherit`], which
//! enables nothing and always defers to the other operand.
//!
//! Custom sets implement the `Enable*` traits of the operators they allow
//! and [`Supports`] for every strategy.

use crate::strategy::{
    BindBack, BindFront, Conjunction, Disjunction, Equal, Equivalent, Negation, NotEqual, Pipe,
};

macro_rules! capability_traits {
    ($($(#[$attribute:meta])* $name:ident => $message:tt;)*) => {
        $(
            $(#[$attribute])*
            #[diagnostic::on_unimplemented(
                message = $message,
                label = "operator not available for this closure flavor",
                note = "transforms only support pipe and currying; wrap the callable with `predicate` for boolean operators"
            )]
            pub trait $name {}
        )*
    };
}

capability_traits! {
    /// Enables `|` and [`pipe`](crate::composition::Combinators::pipe).
    EnablePipe => "`{Self}` does not enable the pipe operator";
    /// Enables `*` and [`and`](crate::composition::Combinators::and).
    EnableConjunction => "`{Self}` does not enable the conjunction operator";
    /// Enables `+` and [`or`](crate::composition::Combinators::or).
    EnableDisjunction => "`{Self}` does not enable the disjunction operator";
    /// Enables `<<` and [`bind_front`](crate::composition::Combinators::bind_front).
    EnableBindFront => "`{Self}` does not enable the bind front operator";
    /// Enables `>>` and [`bind_back`](crate::composition::Combinators::bind_back).
    EnableBindBack => "`{Self}` does not enable the bind back operator";
    /// Enables [`equal`](crate::composition::Combinators::equal).
    EnableEqual => "`{Self}` does not enable the equal operator";
    /// Enables [`not_equal`](crate::composition::Combinators::not_equal).
    EnableNotEqual => "`{Self}` does not enable the not equal operator";
    /// Enables [`equivalent`](crate::composition::Combinators::equivalent).
    EnableEquivalent => "`{Self}` does not enable the equivalent operator";
    /// Enables `!` and [`negate`](crate::composition::Combinators::negate).
    EnableNegation => "`{Self}` does not enable the negation operator";
}

/// Capabilities of a value-mapping pipeline.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct TransformCaps;

/// Capabilities of a boolean predicate.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct PredicateCaps;

/// Capabilities of operands without a flavor of their own.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Inherit;

/// Type-level answer: the set enables the operator.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Enabled;

/// Type-level answer: the set does not enable the operator.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Disabled;

/// Whether a capability set enables the operator of strategy `S`.
///
/// `Answer` is [`Enabled`] or [`Disabled`]. Unlike the `Enable*` traits this
/// is implemented for both outcomes, so a set can be rejected in favor of the
/// other operand's.
#[diagnostic::on_unimplemented(
    message = "`{Self}` does not declare whether it supports `{S}`",
    note = "capability sets implement `Supports` for every strategy"
)]
pub trait Supports<S> {
    /// [`Enabled`] or [`Disabled`].
    type Answer;
}

/// Picks one of two capability sets from a [`Supports`] answer.
pub trait Select<Lhs, Rhs> {
    /// The chosen set.
    type Output;
}

impl<Lhs, Rhs> Select<Lhs, Rhs> for Enabled {
    type Output = Lhs;
}

impl<Lhs, Rhs> Select<Lhs, Rhs> for Disabled {
    type Output = Rhs;
}

/// Capability set of a composition built with `S` from a `(lhs, rhs)` pair
/// of operand sets.
///
/// The left set wins when it enables the operator; otherwise the right set
/// is taken, which the operator then requires to enable it.
pub trait ResolveCapabilities<S> {
    /// The resolved set.
    type Output;
}

impl<S, Lhs, Rhs> ResolveCapabilities<S> for (Lhs, Rhs)
where
    Lhs: Supports<S>,
    Lhs::Answer: Select<Lhs, Rhs>,
{
    type Output = <Lhs::Answer as Select<Lhs, Rhs>>::Output;
}

macro_rules! capability_set {
    ($set:ty { $($enable:ident => $strategy:ty),* $(,)? } without { $($disabled:ty),* $(,)? }) => {
        $(
            impl $enable for $set {}

            impl Supports<$strategy> for $set {
                type Answer = Enabled;
            }
        )*
        $(
            impl Supports<$disabled> for $set {
                type Answer = Disabled;
            }
        )*
    };
}

capability_set! {
    TransformCaps {
        EnablePipe => Pipe,
        EnableBindFront => BindFront,
        EnableBindBack => BindBack,
    } without {
        Conjunction, Disjunction, Equal, NotEqual, Equivalent, Negation,
    }
}

capability_set! {
    PredicateCaps {
        EnablePipe => Pipe,
        EnableBindFront => BindFront,
        EnableBindBack => BindBack,
        EnableConjunction => Conjunction,
        EnableDisjunction => Disjunction,
        EnableEqual => Equal,
        EnableNotEqual => NotEqual,
        EnableEquivalent => Equivalent,
        EnableNegation => Negation,
    } without {}
}

capability_set! {
    Inherit {} without {
        Pipe, BindFront, BindBack, Conjunction, Disjunction, Equal, NotEqual, Equivalent, Negation,
    }
}
