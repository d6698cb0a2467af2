//! Equality, equivalence and inequality of results.
//!
//! [`Equal`] and [`Equivalent`] use baseline semantics: the first callable's
//! result is kept, and the composition is `true` when every later result
//! matches it. `p.equal(q).equal(r)` therefore means "all three agree", not
//! `(p == q) == r` evaluated on booleans.

use std::cmp::Ordering;
use std::marker::PhantomData;

use super::{Evaluate, EvaluateMut, EvaluateOnce, Strategy};
use crate::callable::{Invoke, InvokeMut, InvokeOnce, Nothrow};
use crate::operator::OperatorKind;
use crate::sequence::{Cons, Nil};

/// A relation deciding whether two results match.
pub trait Relation<Lhs: ?Sized, Rhs: ?Sized> {
    /// Returns `true` if `lhs` and `rhs` are related.
    fn holds(lhs: &Lhs, rhs: &Rhs) -> bool;
}

/// Matches results with [`PartialEq`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ByPartialEq;

/// Matches results whose [`PartialOrd`] comparison is [`Ordering::Equal`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ByOrdering;

impl<Lhs, Rhs> Relation<Lhs, Rhs> for ByPartialEq
where
    Lhs: PartialEq<Rhs> + ?Sized,
    Rhs: ?Sized,
{
    #[inline]
    fn holds(lhs: &Lhs, rhs: &Rhs) -> bool {
        lhs == rhs
    }
}

impl<Lhs, Rhs> Relation<Lhs, Rhs> for ByOrdering
where
    Lhs: PartialOrd<Rhs> + ?Sized,
    Rhs: ?Sized,
{
    #[inline]
    fn holds(lhs: &Lhs, rhs: &Rhs) -> bool {
        lhs.partial_cmp(rhs) == Some(Ordering::Equal)
    }
}

/// Baseline comparison of results under relation `R`.
pub struct Equality<R> {
    relation: PhantomData<R>,
}

/// Every result is `==` to the first.
pub type Equal = Equality<ByPartialEq>;

/// Every result compares [`Ordering::Equal`] to the first.
///
/// Unlike [`Equal`], values such as `0.0` and `-0.0` or two case-folded
/// keys with a custom ordering are matched by ordering alone.
pub type Equivalent = Equality<ByOrdering>;

impl<R> Clone for Equality<R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R> Copy for Equality<R> {}

impl<R> Default for Equality<R> {
    fn default() -> Self {
        Self {
            relation: PhantomData,
        }
    }
}

impl<R> PartialEq for Equality<R> {
    fn eq(&self, _: &Self) -> bool {
        true
    }
}

impl<R> Eq for Equality<R> {}

impl std::fmt::Debug for Equality<ByPartialEq> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.write_str("Equal")
    }
}

impl std::fmt::Debug for Equality<ByOrdering> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.write_str("Equivalent")
    }
}

impl Strategy for Equal {
    const KIND: OperatorKind = OperatorKind::Equal;
}

impl Strategy for Equivalent {
    const KIND: OperatorKind = OperatorKind::Equivalent;
}

impl<R> Nothrow for Equality<R> {}

/// Consuming check that every callable's result matches `baseline`.
pub trait AllMatchOnce<R, Baseline, Args> {
    /// Returns `true` if all results match; stops at the first mismatch.
    fn all_match_once(self, baseline: &Baseline, args: Args) -> bool;
}

/// [`AllMatchOnce`] through `&mut`.
pub trait AllMatchMut<R, Baseline, Args>: AllMatchOnce<R, Baseline, Args> {
    /// Returns `true` if all results match; stops at the first mismatch.
    fn all_match_mut(&mut self, baseline: &Baseline, args: Args) -> bool;
}

/// [`AllMatchOnce`] through `&`.
pub trait AllMatch<R, Baseline, Args>: AllMatchMut<R, Baseline, Args> {
    /// Returns `true` if all results match; stops at the first mismatch.
    fn all_match(&self, baseline: &Baseline, args: Args) -> bool;
}

impl<R, Baseline, Args> AllMatchOnce<R, Baseline, Args> for Nil {
    #[inline]
    fn all_match_once(self, _baseline: &Baseline, _args: Args) -> bool {
        true
    }
}

impl<R, Baseline, Args> AllMatchMut<R, Baseline, Args> for Nil {
    #[inline]
    fn all_match_mut(&mut self, _baseline: &Baseline, _args: Args) -> bool {
        true
    }
}

impl<R, Baseline, Args> AllMatch<R, Baseline, Args> for Nil {
    #[inline]
    fn all_match(&self, _baseline: &Baseline, _args: Args) -> bool {
        true
    }
}

impl<R, Baseline, Head, Tail, Args> AllMatchOnce<R, Baseline, Args> for Cons<Head, Tail>
where
    Head: InvokeOnce<Args>,
    R: Relation<Baseline, Head::Output>,
    Tail: AllMatchOnce<R, Baseline, Args>,
    Args: Clone,
{
    #[inline]
    fn all_match_once(self, baseline: &Baseline, args: Args) -> bool {
        R::holds(baseline, &self.head.invoke_once(args.clone()))
            && self.tail.all_match_once(baseline, args)
    }
}

impl<R, Baseline, Head, Tail, Args> AllMatchMut<R, Baseline, Args> for Cons<Head, Tail>
where
    Head: InvokeMut<Args>,
    R: Relation<Baseline, Head::Output>,
    Tail: AllMatchMut<R, Baseline, Args>,
    Args: Clone,
{
    #[inline]
    fn all_match_mut(&mut self, baseline: &Baseline, args: Args) -> bool {
        R::holds(baseline, &self.head.invoke_mut(args.clone()))
            && self.tail.all_match_mut(baseline, args)
    }
}

impl<R, Baseline, Head, Tail, Args> AllMatch<R, Baseline, Args> for Cons<Head, Tail>
where
    Head: Invoke<Args>,
    R: Relation<Baseline, Head::Output>,
    Tail: AllMatch<R, Baseline, Args>,
    Args: Clone,
{
    #[inline]
    fn all_match(&self, baseline: &Baseline, args: Args) -> bool {
        R::holds(baseline, &self.head.invoke(args.clone())) && self.tail.all_match(baseline, args)
    }
}

impl<R, Head, Tail, Args> EvaluateOnce<Equality<R>, Args> for Cons<Head, Tail>
where
    Head: InvokeOnce<Args>,
    Tail: AllMatchOnce<R, Head::Output, Args>,
    Args: Clone,
{
    type Output = bool;

    #[inline]
    fn evaluate_once(self, args: Args) -> bool {
        let baseline = self.head.invoke_once(args.clone());
        self.tail.all_match_once(&baseline, args)
    }
}

impl<R, Head, Tail, Args> EvaluateMut<Equality<R>, Args> for Cons<Head, Tail>
where
    Head: InvokeMut<Args>,
    Tail: AllMatchMut<R, Head::Output, Args>,
    Args: Clone,
{
    #[inline]
    fn evaluate_mut(&mut self, args: Args) -> bool {
        let baseline = self.head.invoke_mut(args.clone());
        self.tail.all_match_mut(&baseline, args)
    }
}

impl<R, Head, Tail, Args> Evaluate<Equality<R>, Args> for Cons<Head, Tail>
where
    Head: Invoke<Args>,
    Tail: AllMatch<R, Head::Output, Args>,
    Args: Clone,
{
    #[inline]
    fn evaluate(&self, args: Args) -> bool {
        let baseline = self.head.invoke(args.clone());
        self.tail.all_match(&baseline, args)
    }
}

/// The results of exactly two callables differ.
///
/// Never flattened: `p.not_equal(q).not_equal(r)` compares the boolean
/// result of `p != q` against `r`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct NotEqual;

impl Strategy for NotEqual {
    const KIND: OperatorKind = OperatorKind::NotEqual;
}

impl Nothrow for NotEqual {}

impl<Lhs, Rhs, Args> EvaluateOnce<NotEqual, Args> for Cons<Lhs, Cons<Rhs, Nil>>
where
    Lhs: InvokeOnce<Args>,
    Rhs: InvokeOnce<Args>,
    Lhs::Output: PartialEq<Rhs::Output>,
    Args: Clone,
{
    type Output = bool;

    #[inline]
    fn evaluate_once(self, args: Args) -> bool {
        self.head.invoke_once(args.clone()) != self.tail.head.invoke_once(args)
    }
}

impl<Lhs, Rhs, Args> EvaluateMut<NotEqual, Args> for Cons<Lhs, Cons<Rhs, Nil>>
where
    Lhs: InvokeMut<Args>,
    Rhs: InvokeMut<Args>,
    Lhs::Output: PartialEq<Rhs::Output>,
    Args: Clone,
{
    #[inline]
    fn evaluate_mut(&mut self, args: Args) -> bool {
        self.head.invoke_mut(args.clone()) != self.tail.head.invoke_mut(args)
    }
}

impl<Lhs, Rhs, Args> Evaluate<NotEqual, Args> for Cons<Lhs, Cons<Rhs, Nil>>
where
    Lhs: Invoke<Args>,
    Rhs: Invoke<Args>,
    Lhs::Output: PartialEq<Rhs::Output>,
    Args: Clone,
{
    #[inline]
    fn evaluate(&self, args: Args) -> bool {
        self.head.invoke(args.clone()) != self.tail.head.invoke(args)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fn_list;
    use rstest::rstest;

    #[rstest]
    #[case(true, true, false, false)]
    #[case(false, false, false, true)]
    #[case(true, true, true, true)]
    #[case(false, true, true, false)]
    fn equal_compares_against_the_baseline(
        #[case] first: bool,
        #[case] second: bool,
        #[case] third: bool,
        #[case] expected: bool,
    ) {
        let list = fn_list![move || first, move || second, move || third];
        assert_eq!(Evaluate::<Equal, _>::evaluate(&list, ()), expected);
    }

    #[rstest]
    fn equal_works_on_non_boolean_results() {
        let list = fn_list![
            |value: i32| value * 2,
            |value: i32| value + value,
            |value: i32| value << 1,
        ];
        assert!(Evaluate::<Equal, _>::evaluate(&list, (21,)));
    }

    #[rstest]
    fn equal_stops_at_first_mismatch() {
        let list = fn_list![|| 1, || 2, || -> i32 { panic!("evaluated after a mismatch") }];
        assert!(!EvaluateOnce::<Equal, _>::evaluate_once(list, ()));
    }

    #[rstest]
    fn equivalent_uses_ordering() {
        let list = fn_list![|| 0.0_f64, || -0.0_f64];
        assert!(Evaluate::<Equivalent, _>::evaluate(&list, ()));

        let not_a_number = fn_list![|| f64::NAN, || f64::NAN];
        assert!(!Evaluate::<Equivalent, _>::evaluate(&not_a_number, ()));
    }

    #[rstest]
    #[case(1, 2, true)]
    #[case(3, 3, false)]
    fn not_equal_compares_two_results(#[case] lhs: i32, #[case] rhs: i32, #[case] expected: bool) {
        let list = fn_list![move |offset: i32| lhs + offset, move |offset: i32| rhs + offset];
        assert_eq!(Evaluate::<NotEqual, _>::evaluate(&list, (10,)), expected);
    }

    #[rstest]
    fn relations_are_usable_directly() {
        assert!(ByPartialEq::holds("a", "a"));
        assert!(ByOrdering::holds(&1.5_f32, &1.5_f32));
        assert!(!ByOrdering::holds(&1, &2));
    }

    #[rstest]
    fn debug_names_the_strategy() {
        assert_eq!(format!("{:?}", Equal::default()), "Equal");
        assert_eq!(format!("{:?}", Equivalent::default()), "Equivalent");
    }
}
