//! Type-level flattening of composition operands.
//!
//! Every operand of a joinable operator describes, through [`Segment`], the
//! list it contributes to the new composition. A composition whose strategy
//! is the operator's own strategy contributes its whole list; anything else
//! is a single element. The operator then appends the two lists, so
//! `(f | g) | h` and `f | (g | h)` both become `Composition<Pipe, [f, g, h]>`.

use super::Composition;
use crate::callable::{Invoke, InvokeMut, InvokeOnce, Nothrow};
use crate::closure::{Closure, Inherit, ResolveCapabilities};
use crate::operator::trace_build;
use crate::sequence::{Append, Cons, Nil, Sequence};
use crate::strategy::{
    BindBack, BindFront, BoundValue, Conjunction, Disjunction, Equal, Equivalent, Negation,
    NotEqual, Pipe, Strategy,
};

/// The callables an operand contributes to a composition built with `S`.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be used as an operand of a `{S}` composition",
    label = "not a closure, composition or bound value",
    note = "wrap plain callables with `transform`, `predicate` or `lift` first"
)]
pub trait Segment<S> {
    /// The contributed list.
    type List: Sequence;

    /// The capability set the operand brings to the result.
    type Capabilities;

    /// Converts the operand into its contributed list.
    fn into_list(self) -> Self::List;
}

impl<F, P, K, S> Segment<S> for Closure<F, P, K> {
    type List = Cons<Self, Nil>;
    type Capabilities = K;

    #[inline]
    fn into_list(self) -> Self::List {
        Cons::new(self, Nil)
    }
}

impl<T, S> Segment<S> for BoundValue<T> {
    type List = Cons<Self, Nil>;
    type Capabilities = Inherit;

    #[inline]
    fn into_list(self) -> Self::List {
        Cons::new(self, Nil)
    }
}

/// Marks an arbitrary callable as a single, never-flattened operand.
///
/// A lifted callable has no capability set of its own; the other operand
/// decides which operators apply.
///
/// # Examples
///
/// ```rust
/// use closure_algebra::callable::Invoke;
/// use closure_algebra::closure::transform;
/// use closure_algebra::composition::lift;
///
/// let composition = transform(|value: i32| value + 1) | lift(|value: i32| value * 10);
/// assert_eq!(composition.invoke((1,)), 20);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Lift<F>(pub F);

/// Wraps `function` as a [`Lift`] operand.
#[inline]
pub const fn lift<F>(function: F) -> Lift<F> {
    Lift(function)
}

impl<F, S> Segment<S> for Lift<F> {
    type List = Cons<F, Nil>;
    type Capabilities = Inherit;

    #[inline]
    fn into_list(self) -> Self::List {
        Cons::new(self.0, Nil)
    }
}

impl<F: InvokeOnce<Args>, Args> InvokeOnce<Args> for Lift<F> {
    type Output = F::Output;

    #[inline]
    fn invoke_once(self, args: Args) -> Self::Output {
        self.0.invoke_once(args)
    }
}

impl<F: InvokeMut<Args>, Args> InvokeMut<Args> for Lift<F> {
    #[inline]
    fn invoke_mut(&mut self, args: Args) -> Self::Output {
        self.0.invoke_mut(args)
    }
}

impl<F: Invoke<Args>, Args> Invoke<Args> for Lift<F> {
    #[inline]
    fn invoke(&self, args: Args) -> Self::Output {
        self.0.invoke(args)
    }
}

impl<F: Nothrow> Nothrow for Lift<F> {}

// For each joinable strategy: a composition of that same strategy is spliced,
// a composition of any other strategy stays one element.
macro_rules! join_rules {
    ($($target:ty => [$($other:ty),* $(,)?];)*) => {
        $(
            impl<L: Sequence, K> Segment<$target> for Composition<$target, L, K> {
                type List = L;
                type Capabilities = K;

                #[inline]
                fn into_list(self) -> L {
                    self.functions
                }
            }

            $(
                impl<L, K> Segment<$target> for Composition<$other, L, K> {
                    type List = Cons<Self, Nil>;
                    type Capabilities = K;

                    #[inline]
                    fn into_list(self) -> Self::List {
                        Cons::new(self, Nil)
                    }
                }
            )*
        )*
    };
}

join_rules! {
    Pipe => [Conjunction, Disjunction, BindFront, BindBack, Equal, NotEqual, Equivalent, Negation];
    Conjunction => [Pipe, Disjunction, BindFront, BindBack, Equal, NotEqual, Equivalent, Negation];
    Disjunction => [Pipe, Conjunction, BindFront, BindBack, Equal, NotEqual, Equivalent, Negation];
    BindFront => [Pipe, Conjunction, Disjunction, BindBack, Equal, NotEqual, Equivalent, Negation];
    BindBack => [Pipe, Conjunction, Disjunction, BindFront, Equal, NotEqual, Equivalent, Negation];
    Equal => [Pipe, Conjunction, Disjunction, BindFront, BindBack, NotEqual, Equivalent, Negation];
    Equivalent => [Pipe, Conjunction, Disjunction, BindFront, BindBack, Equal, NotEqual, Negation];
}

// Inequality never splices, so every composition is a single operand.
impl<T, L, K> Segment<NotEqual> for Composition<T, L, K> {
    type List = Cons<Self, Nil>;
    type Capabilities = K;

    #[inline]
    fn into_list(self) -> Self::List {
        Cons::new(self, Nil)
    }
}

/// The capability set of combining `Lhs` and `Rhs` with `S`: the first
/// operand's set that enables the operator.
pub type Resolved<S, Lhs, Rhs> = <(
    <Lhs as Segment<S>>::Capabilities,
    <Rhs as Segment<S>>::Capabilities,
) as ResolveCapabilities<S>>::Output;

/// The composition produced by combining `Lhs` and `Rhs` with `S`.
pub type Composed<S, Lhs, Rhs, K> = Composition<
    S,
    <<Lhs as Segment<S>>::List as Append<<Rhs as Segment<S>>::List>>::Output,
    K,
>;

/// Combines two operands with a joinable strategy, splicing same-strategy
/// operands.
///
/// # Examples
///
/// ```rust
/// use closure_algebra::callable::Invoke;
/// use closure_algebra::closure::{PredicateCaps, predicate};
/// use closure_algebra::composition::compose;
/// use closure_algebra::strategy::Disjunction;
///
/// let is_zero = predicate(|value: i32| value == 0);
/// let is_large = predicate(|value: i32| value > 100);
/// let either = compose::<Disjunction, PredicateCaps, _, _>(is_zero, is_large);
/// assert!(either.invoke((0,)));
/// assert!(!either.invoke((50,)));
/// ```
pub fn compose<S, K, Lhs, Rhs>(lhs: Lhs, rhs: Rhs) -> Composed<S, Lhs, Rhs, K>
where
    S: Strategy,
    Lhs: Segment<S>,
    Rhs: Segment<S>,
    Lhs::List: Append<Rhs::List>,
{
    let lhs_len = <Lhs::List as Sequence>::LEN;
    let rhs_len = <Rhs::List as Sequence>::LEN;
    let functions = lhs.into_list().append(rhs.into_list());
    trace_build(S::KIND, lhs_len, rhs_len, lhs_len + rhs_len);
    Composition::from_functions(functions)
}

/// Builds a two-element composition without flattening either operand.
pub fn nested<S, K, Lhs, Rhs>(lhs: Lhs, rhs: Rhs) -> Composition<S, Cons<Lhs, Cons<Rhs, Nil>>, K>
where
    S: Strategy,
{
    trace_build(S::KIND, 1, 1, 2);
    Composition::from_functions(Cons::new(lhs, Cons::new(rhs, Nil)))
}

/// Builds a one-element composition around `operand`.
pub fn unary<S, K, F>(operand: F) -> Composition<S, Cons<F, Nil>, K>
where
    S: Strategy,
{
    trace_build(S::KIND, 1, 0, 1);
    Composition::from_functions(Cons::new(operand, Nil))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::closure::{PredicateCaps, TransformCaps, predicate, transform};
    use crate::operator::OperatorKind;
    use rstest::rstest;

    #[rstest]
    fn same_strategy_operands_are_spliced() {
        let f = transform(|value: i32| value + 1);
        let inner = compose::<Pipe, TransformCaps, _, _>(f, f);
        let outer = compose::<Pipe, TransformCaps, _, _>(inner, inner);
        assert_eq!(outer.len(), 4);
        assert_eq!(outer.invoke((0,)), 4);
    }

    #[rstest]
    fn foreign_strategy_operands_stay_single() {
        let positive = predicate(|value: i32| value > 0);
        let both = compose::<Conjunction, PredicateCaps, _, _>(positive, positive);
        let either = compose::<Disjunction, PredicateCaps, _, _>(both, positive);
        assert_eq!(either.len(), 2);
        assert!(either.invoke((1,)));
    }

    #[rstest]
    fn lifted_operands_are_opaque() {
        let f = transform(|value: i32| value + 1);
        let inner = compose::<Pipe, TransformCaps, _, _>(f, f);
        let outer = compose::<Pipe, TransformCaps, _, _>(f, lift(inner));
        assert_eq!(outer.len(), 2);
        assert_eq!(outer.invoke((0,)), 3);
    }

    #[rstest]
    fn lift_forwards_every_invocation_tier() {
        let mut total = 0;
        let mut lifted = lift(|value: i32| {
            total += value;
            total
        });
        assert_eq!(lifted.invoke_mut((2,)), 2);
        assert_eq!(lifted.invoke_once((3,)), 5);

        let shared = lift(|value: i32| value * 2);
        assert_eq!(shared.invoke((4,)), 8);
    }

    #[rstest]
    fn nested_and_unary_keep_their_shape() {
        let positive = predicate(|value: i32| value > 0);
        let differ = nested::<NotEqual, PredicateCaps, _, _>(positive, positive);
        let negated = unary::<Negation, PredicateCaps, _>(differ);
        assert_eq!(differ.len(), 2);
        assert_eq!(negated.len(), 1);
        assert_eq!(negated.kind(), OperatorKind::Negation);
        assert!(negated.invoke((3,)));
    }
}
