//! Short-circuit conjunction and disjunction.
//!
//! Every callable receives its own clone of the original arguments; results
//! are never chained. Evaluation runs left to right and stops as soon as the
//! outcome is decided, so callables after the deciding one are never
//! invoked.

use super::{Evaluate, EvaluateMut, EvaluateOnce, Strategy};
use crate::callable::{Invoke, InvokeMut, InvokeOnce, Nothrow};
use crate::operator::OperatorKind;
use crate::sequence::{Cons, Nil};

/// Logical AND over predicates, stopping at the first `false`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Conjunction;

/// Logical OR over predicates, stopping at the first `true`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Disjunction;

impl Strategy for Conjunction {
    const KIND: OperatorKind = OperatorKind::Conjunction;
}

impl Strategy for Disjunction {
    const KIND: OperatorKind = OperatorKind::Disjunction;
}

impl Nothrow for Conjunction {}

impl Nothrow for Disjunction {}

/// `$neutral` is the result of an empty list; `$operator` is the
/// short-circuiting boolean operator joining head and tail.
macro_rules! impl_short_circuit {
    ($strategy:ty, $neutral:literal, $operator:tt) => {
        impl<Args> EvaluateOnce<$strategy, Args> for Nil {
            type Output = bool;

            #[inline]
            fn evaluate_once(self, _args: Args) -> bool {
                $neutral
            }
        }

        impl<Args> EvaluateMut<$strategy, Args> for Nil {
            #[inline]
            fn evaluate_mut(&mut self, _args: Args) -> bool {
                $neutral
            }
        }

        impl<Args> Evaluate<$strategy, Args> for Nil {
            #[inline]
            fn evaluate(&self, _args: Args) -> bool {
                $neutral
            }
        }

        impl<Head, Tail, Args> EvaluateOnce<$strategy, Args> for Cons<Head, Tail>
        where
            Head: InvokeOnce<Args, Output = bool>,
            Tail: EvaluateOnce<$strategy, Args, Output = bool>,
            Args: Clone,
        {
            type Output = bool;

            #[inline]
            fn evaluate_once(self, args: Args) -> bool {
                self.head.invoke_once(args.clone()) $operator self.tail.evaluate_once(args)
            }
        }

        impl<Head, Tail, Args> EvaluateMut<$strategy, Args> for Cons<Head, Tail>
        where
            Head: InvokeMut<Args, Output = bool>,
            Tail: EvaluateMut<$strategy, Args, Output = bool>,
            Args: Clone,
        {
            #[inline]
            fn evaluate_mut(&mut self, args: Args) -> bool {
                self.head.invoke_mut(args.clone()) $operator self.tail.evaluate_mut(args)
            }
        }

        impl<Head, Tail, Args> Evaluate<$strategy, Args> for Cons<Head, Tail>
        where
            Head: Invoke<Args, Output = bool>,
            Tail: Evaluate<$strategy, Args, Output = bool>,
            Args: Clone,
        {
            #[inline]
            fn evaluate(&self, args: Args) -> bool {
                self.head.invoke(args.clone()) $operator self.tail.evaluate(args)
            }
        }
    };
}

impl_short_circuit!(Conjunction, true, &&);
impl_short_circuit!(Disjunction, false, ||);
