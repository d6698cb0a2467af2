//! Sequential composition.

use super::{Evaluate, EvaluateMut, EvaluateOnce, Strategy};
use crate::callable::{Invoke, InvokeMut, InvokeOnce, Nothrow};
use crate::operator::OperatorKind;
use crate::sequence::{Cons, Nil};

/// Feeds the result of each callable into the next one.
///
/// The first callable receives the call arguments. Every later callable
/// receives exactly one argument, the previous result, even when that
/// result is itself a tuple.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Pipe;

impl Strategy for Pipe {
    const KIND: OperatorKind = OperatorKind::Pipe;
}

impl Nothrow for Pipe {}

// The end of the pipe hands back the value that reached it.
impl<Value> EvaluateOnce<Pipe, (Value,)> for Nil {
    type Output = Value;

    #[inline]
    fn evaluate_once(self, (value,): (Value,)) -> Value {
        value
    }
}

impl<Value> EvaluateMut<Pipe, (Value,)> for Nil {
    #[inline]
    fn evaluate_mut(&mut self, (value,): (Value,)) -> Value {
        value
    }
}

impl<Value> Evaluate<Pipe, (Value,)> for Nil {
    #[inline]
    fn evaluate(&self, (value,): (Value,)) -> Value {
        value
    }
}

impl<Head, Tail, Args> EvaluateOnce<Pipe, Args> for Cons<Head, Tail>
where
    Head: InvokeOnce<Args>,
    Tail: EvaluateOnce<Pipe, (Head::Output,)>,
{
    type Output = Tail::Output;

    #[inline]
    fn evaluate_once(self, args: Args) -> Self::Output {
        self.tail.evaluate_once((self.head.invoke_once(args),))
    }
}

impl<Head, Tail, Args> EvaluateMut<Pipe, Args> for Cons<Head, Tail>
where
    Head: InvokeMut<Args>,
    Tail: EvaluateMut<Pipe, (Head::Output,)>,
{
    #[inline]
    fn evaluate_mut(&mut self, args: Args) -> Self::Output {
        self.tail.evaluate_mut((self.head.invoke_mut(args),))
    }
}

impl<Head, Tail, Args> Evaluate<Pipe, Args> for Cons<Head, Tail>
where
    Head: Invoke<Args>,
    Tail: Evaluate<Pipe, (Head::Output,)>,
{
    #[inline]
    fn evaluate(&self, args: Args) -> Self::Output {
        self.tail.evaluate((self.head.invoke(args),))
    }
}
