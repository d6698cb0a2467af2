//! Strategies: how a composition evaluates its list of callables.
//!
//! A strategy is a zero-sized marker type. It carries no state; what it
//! decides is how the callables in a [`Cons`](crate::sequence::Cons) list are
//! driven by one set of call arguments. The evaluation itself is implemented
//! on the list types through [`EvaluateOnce`], [`EvaluateMut`] and
//! [`Evaluate`], parameterized by the strategy, one tier per ownership mode of
//! the composition.
//!
//! # Strategies
//!
//! - [`Pipe`]: the result of each callable is the single argument of the next
//! - [`Conjunction`]: `true` when every callable returns `true`; stops at the
//!   first `false`
//! - [`Disjunction`]: `true` when any callable returns `true`; stops at the
//!   first `true`
//! - [`Equal`]: every result is `==` to the first one
//! - [`Equivalent`]: every result is ordered equal to the first one
//! - [`NotEqual`]: the two results differ
//! - [`Negation`]: complement of a single predicate
//! - [`BindFront`] / [`BindBack`]: call the first element with bound values in
//!   front of / behind the call arguments

mod bind;
mod equality;
mod logic;
mod negation;
mod pipe;

pub use bind::{BindBack, BindFront, BoundValue, Gather, GatherMut, GatherOnce};
pub use equality::{
    AllMatch, AllMatchMut, AllMatchOnce, ByOrdering, ByPartialEq, Equal, Equality, Equivalent,
    NotEqual, Relation,
};
pub use logic::{Conjunction, Disjunction};
pub use negation::Negation;
pub use pipe::Pipe;

use std::fmt::Debug;

use crate::operator::OperatorKind;

/// A stateless evaluation policy for compositions.
pub trait Strategy: Copy + Default + Debug + Send + Sync + 'static {
    /// The operator this strategy implements.
    const KIND: OperatorKind;
}

/// Consuming evaluation of a callable list under strategy `S`.
#[diagnostic::on_unimplemented(
    message = "the callables of this `{S}` composition cannot be evaluated with the arguments `{Args}`",
    label = "invoked here",
    note = "boolean strategies need every callable to return `bool`; pipes need each result to be accepted by the next callable"
)]
pub trait EvaluateOnce<S, Args> {
    /// Result of the evaluation.
    type Output;

    /// Evaluates the list, consuming its callables.
    fn evaluate_once(self, args: Args) -> Self::Output;
}

/// Evaluation of a callable list under strategy `S` through `&mut`.
#[diagnostic::on_unimplemented(
    message = "the callables of this `{S}` composition cannot be evaluated through `&mut` with the arguments `{Args}`"
)]
pub trait EvaluateMut<S, Args>: EvaluateOnce<S, Args> {
    /// Evaluates the list through a unique reference.
    fn evaluate_mut(&mut self, args: Args) -> Self::Output;
}

/// Evaluation of a callable list under strategy `S` through `&`.
#[diagnostic::on_unimplemented(
    message = "the callables of this `{S}` composition cannot be evaluated through `&` with the arguments `{Args}`"
)]
pub trait Evaluate<S, Args>: EvaluateMut<S, Args> {
    /// Evaluates the list through a shared reference.
    fn evaluate(&self, args: Args) -> Self::Output;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::callable::Nothrow;
    use rstest::rstest;
    use static_assertions::{assert_eq_size, assert_impl_all};

    assert_eq_size!(Pipe, ());
    assert_eq_size!(Equal, ());
    assert_eq_size!(BindBack, ());
    assert_impl_all!(Pipe: Nothrow, Strategy);
    assert_impl_all!(Conjunction: Nothrow, Strategy);
    assert_impl_all!(Disjunction: Nothrow, Strategy);
    assert_impl_all!(Equal: Nothrow, Strategy);
    assert_impl_all!(Equivalent: Nothrow, Strategy);
    assert_impl_all!(NotEqual: Nothrow, Strategy);
    assert_impl_all!(Negation: Nothrow, Strategy);
    assert_impl_all!(BindFront: Nothrow, Strategy);
    assert_impl_all!(BindBack: Nothrow, Strategy);

    fn kind_of<S: Strategy>(_: S) -> OperatorKind {
        S::KIND
    }

    #[rstest]
    #[case(kind_of(Pipe), OperatorKind::Pipe)]
    #[case(kind_of(Conjunction), OperatorKind::Conjunction)]
    #[case(kind_of(Disjunction), OperatorKind::Disjunction)]
    #[case(kind_of(Equal::default()), OperatorKind::Equal)]
    #[case(kind_of(Equivalent::default()), OperatorKind::Equivalent)]
    #[case(kind_of(NotEqual), OperatorKind::NotEqual)]
    #[case(kind_of(Negation), OperatorKind::Negation)]
    #[case(kind_of(BindFront), OperatorKind::BindFront)]
    #[case(kind_of(BindBack), OperatorKind::BindBack)]
    fn strategies_report_their_operator(#[case] actual: OperatorKind, #[case] expected: OperatorKind) {
        assert_eq!(actual, expected);
    }
}
