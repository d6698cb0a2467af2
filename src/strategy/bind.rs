//! Currying: binding constant values to a callable's argument list.
//!
//! A bound composition stores the target callable first and the bound values
//! after it, in the order they were bound:
//!
//! ```text
//! f << a << b   =>   [f, BoundValue(a), BoundValue(b)]   calls f(a, b, args...)
//! f >> a >> b   =>   [f, BoundValue(a), BoundValue(b)]   calls f(args..., a, b)
//! ```
//!
//! Keeping the callable in front is what lets every further bind of the same
//! direction simply append to the list.

use super::{Evaluate, EvaluateMut, EvaluateOnce, Strategy};
use crate::callable::{Invoke, InvokeMut, InvokeOnce, Nothrow};
use crate::operator::OperatorKind;
use crate::sequence::{Cons, Nil};
use crate::tuple::{Concat, Push};

/// Calls the first callable with the bound values in front of the arguments.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct BindFront;

/// Calls the first callable with the bound values behind the arguments.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct BindBack;

impl Strategy for BindFront {
    const KIND: OperatorKind = OperatorKind::BindFront;
}

impl Strategy for BindBack {
    const KIND: OperatorKind = OperatorKind::BindBack;
}

impl Nothrow for BindFront {}

impl Nothrow for BindBack {}

/// A zero-argument callable that always yields the captured value.
///
/// Consuming invocation moves the value out; shared and unique invocation
/// hand out clones.
///
/// # Examples
///
/// ```rust
/// use closure_algebra::callable::{Invoke, InvokeOnce};
/// use closure_algebra::strategy::BoundValue;
///
/// let bound = BoundValue::new(String::from("value"));
/// assert_eq!(bound.invoke(()), "value");
/// assert_eq!(bound.invoke_once(()), "value");
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct BoundValue<T> {
    value: T,
}

impl<T> BoundValue<T> {
    /// Captures `value`.
    #[inline]
    pub const fn new(value: T) -> Self {
        Self { value }
    }

    /// Returns a reference to the captured value.
    #[inline]
    pub const fn get(&self) -> &T {
        &self.value
    }

    /// Releases the captured value.
    #[inline]
    pub fn into_inner(self) -> T {
        self.value
    }
}

impl<T> InvokeOnce<()> for BoundValue<T> {
    type Output = T;

    #[inline]
    fn invoke_once(self, (): ()) -> T {
        self.value
    }
}

impl<T: Clone> InvokeMut<()> for BoundValue<T> {
    #[inline]
    fn invoke_mut(&mut self, (): ()) -> T {
        self.value.clone()
    }
}

impl<T: Clone> Invoke<()> for BoundValue<T> {
    #[inline]
    fn invoke(&self, (): ()) -> T {
        self.value.clone()
    }
}

// Cloning a `Copy` value cannot panic.
impl<T: Copy> Nothrow for BoundValue<T> {}

/// Consuming evaluation of bound values, pushing each result onto `Acc`.
pub trait GatherOnce<Acc> {
    /// `Acc` with every bound value appended.
    type Output;

    /// Evaluates the bound values left to right.
    fn gather_once(self, acc: Acc) -> Self::Output;
}

/// [`GatherOnce`] through `&mut`.
pub trait GatherMut<Acc>: GatherOnce<Acc> {
    /// Evaluates the bound values left to right.
    fn gather_mut(&mut self, acc: Acc) -> Self::Output;
}

/// [`GatherOnce`] through `&`.
pub trait Gather<Acc>: GatherMut<Acc> {
    /// Evaluates the bound values left to right.
    fn gather(&self, acc: Acc) -> Self::Output;
}

impl<Acc> GatherOnce<Acc> for Nil {
    type Output = Acc;

    #[inline]
    fn gather_once(self, acc: Acc) -> Acc {
        acc
    }
}

impl<Acc> GatherMut<Acc> for Nil {
    #[inline]
    fn gather_mut(&mut self, acc: Acc) -> Acc {
        acc
    }
}

impl<Acc> Gather<Acc> for Nil {
    #[inline]
    fn gather(&self, acc: Acc) -> Acc {
        acc
    }
}

impl<Value, Tail, Acc> GatherOnce<Acc> for Cons<Value, Tail>
where
    Value: InvokeOnce<()>,
    Acc: Push<Value::Output>,
    Tail: GatherOnce<Acc::Output>,
{
    type Output = Tail::Output;

    #[inline]
    fn gather_once(self, acc: Acc) -> Self::Output {
        self.tail.gather_once(acc.push(self.head.invoke_once(())))
    }
}

impl<Value, Tail, Acc> GatherMut<Acc> for Cons<Value, Tail>
where
    Value: InvokeMut<()>,
    Acc: Push<Value::Output>,
    Tail: GatherMut<Acc::Output>,
{
    #[inline]
    fn gather_mut(&mut self, acc: Acc) -> Self::Output {
        self.tail.gather_mut(acc.push(self.head.invoke_mut(())))
    }
}

impl<Value, Tail, Acc> Gather<Acc> for Cons<Value, Tail>
where
    Value: Invoke<()>,
    Acc: Push<Value::Output>,
    Tail: Gather<Acc::Output>,
{
    #[inline]
    fn gather(&self, acc: Acc) -> Self::Output {
        self.tail.gather(acc.push(self.head.invoke(())))
    }
}

type Gathered<Values, Acc> = <Values as GatherOnce<Acc>>::Output;

type FrontArguments<Values, Args> = <Gathered<Values, ()> as Concat<Args>>::Output;

impl<Function, Values, Args> EvaluateOnce<BindFront, Args> for Cons<Function, Values>
where
    Values: GatherOnce<()>,
    Gathered<Values, ()>: Concat<Args>,
    Function: InvokeOnce<FrontArguments<Values, Args>>,
{
    type Output = Function::Output;

    #[inline]
    fn evaluate_once(self, args: Args) -> Self::Output {
        let bound = self.tail.gather_once(());
        self.head.invoke_once(bound.concat(args))
    }
}

impl<Function, Values, Args> EvaluateMut<BindFront, Args> for Cons<Function, Values>
where
    Values: GatherMut<()>,
    Gathered<Values, ()>: Concat<Args>,
    Function: InvokeMut<FrontArguments<Values, Args>>,
{
    #[inline]
    fn evaluate_mut(&mut self, args: Args) -> Self::Output {
        let bound = self.tail.gather_mut(());
        self.head.invoke_mut(bound.concat(args))
    }
}

impl<Function, Values, Args> Evaluate<BindFront, Args> for Cons<Function, Values>
where
    Values: Gather<()>,
    Gathered<Values, ()>: Concat<Args>,
    Function: Invoke<FrontArguments<Values, Args>>,
{
    #[inline]
    fn evaluate(&self, args: Args) -> Self::Output {
        let bound = self.tail.gather(());
        self.head.invoke(bound.concat(args))
    }
}

impl<Function, Values, Args> EvaluateOnce<BindBack, Args> for Cons<Function, Values>
where
    Values: GatherOnce<Args>,
    Function: InvokeOnce<Gathered<Values, Args>>,
{
    type Output = Function::Output;

    #[inline]
    fn evaluate_once(self, args: Args) -> Self::Output {
        let arguments = self.tail.gather_once(args);
        self.head.invoke_once(arguments)
    }
}

impl<Function, Values, Args> EvaluateMut<BindBack, Args> for Cons<Function, Values>
where
    Values: GatherMut<Args>,
    Function: InvokeMut<Gathered<Values, Args>>,
{
    #[inline]
    fn evaluate_mut(&mut self, args: Args) -> Self::Output {
        let arguments = self.tail.gather_mut(args);
        self.head.invoke_mut(arguments)
    }
}

impl<Function, Values, Args> Evaluate<BindBack, Args> for Cons<Function, Values>
where
    Values: Gather<Args>,
    Function: Invoke<Gathered<Values, Args>>,
{
    #[inline]
    fn evaluate(&self, args: Args) -> Self::Output {
        let arguments = self.tail.gather(args);
        self.head.invoke(arguments)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fn_list;
    use rstest::rstest;

    fn describe(first: i32, second: i32, third: i32) -> String {
        format!("{first}-{second}-{third}")
    }

    #[rstest]
    fn bind_front_places_values_first() {
        let list = fn_list![describe, BoundValue::new(1), BoundValue::new(2)];
        assert_eq!(Evaluate::<BindFront, _>::evaluate(&list, (3,)), "1-2-3");
    }

    #[rstest]
    fn bind_back_places_values_last() {
        let list = fn_list![describe, BoundValue::new(2), BoundValue::new(3)];
        assert_eq!(Evaluate::<BindBack, _>::evaluate(&list, (1,)), "1-2-3");
    }

    #[rstest]
    fn binding_every_argument_leaves_a_nullary_call() {
        let list = fn_list![describe, BoundValue::new(7), BoundValue::new(8), BoundValue::new(9)];
        assert_eq!(Evaluate::<BindFront, _>::evaluate(&list, ()), "7-8-9");
        assert_eq!(Evaluate::<BindBack, _>::evaluate(&list, ()), "7-8-9");
    }

    #[rstest]
    fn consuming_evaluation_moves_bound_values() {
        let list = fn_list![
            |mut items: Vec<i32>, extra: i32| {
                items.push(extra);
                items
            },
            BoundValue::new(vec![1, 2]),
        ];
        assert_eq!(EvaluateOnce::<BindFront, _>::evaluate_once(list, (3,)), vec![1, 2, 3]);
    }

    #[rstest]
    fn shared_evaluation_clones_bound_values() {
        let list = fn_list![|text: String, count: usize| text.repeat(count), BoundValue::new(String::from("ab"))];
        assert_eq!(Evaluate::<BindFront, _>::evaluate(&list, (2,)), "abab");
        assert_eq!(Evaluate::<BindFront, _>::evaluate(&list, (1,)), "ab");
    }

    #[rstest]
    fn bound_value_accessors() {
        let bound = BoundValue::new(5);
        assert_eq!(*bound.get(), 5);
        assert_eq!(bound.into_inner(), 5);
    }
}
