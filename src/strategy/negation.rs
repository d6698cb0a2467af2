//! Logical complement.

use super::{Evaluate, EvaluateMut, EvaluateOnce, Strategy};
use crate::callable::{Invoke, InvokeMut, InvokeOnce, Nothrow};
use crate::operator::OperatorKind;
use crate::sequence::{Cons, Nil};

/// Inverts the boolean result of a single predicate.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Negation;

impl Strategy for Negation {
    const KIND: OperatorKind = OperatorKind::Negation;
}

impl Nothrow for Negation {}

impl<Predicate, Args> EvaluateOnce<Negation, Args> for Cons<Predicate, Nil>
where
    Predicate: InvokeOnce<Args, Output = bool>,
{
    type Output = bool;

    #[inline]
    fn evaluate_once(self, args: Args) -> bool {
        !self.head.invoke_once(args)
    }
}

impl<Predicate, Args> EvaluateMut<Negation, Args> for Cons<Predicate, Nil>
where
    Predicate: InvokeMut<Args, Output = bool>,
{
    #[inline]
    fn evaluate_mut(&mut self, args: Args) -> bool {
        !self.head.invoke_mut(args)
    }
}

impl<Predicate, Args> Evaluate<Negation, Args> for Cons<Predicate, Nil>
where
    Predicate: Invoke<Args, Output = bool>,
{
    #[inline]
    fn evaluate(&self, args: Args) -> bool {
        !self.head.invoke(args)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fn_list;
    use rstest::rstest;

    #[rstest]
    #[case(4, false)]
    #[case(7, true)]
    fn negation_inverts(#[case] value: u32, #[case] expected: bool) {
        let list = fn_list![|value: u32| value % 2 == 0];
        assert_eq!(Evaluate::<Negation, _>::evaluate(&list, (value,)), expected);
    }

    #[rstest]
    fn negation_passes_all_arguments() {
        let list = fn_list![|lhs: i32, rhs: i32| lhs < rhs];
        assert!(EvaluateOnce::<Negation, _>::evaluate_once(list, (2, 1)));
    }
}
