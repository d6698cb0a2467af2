//! Operators, combinator methods and free functions building compositions.

use std::ops::{Add, BitOr, Mul, Not, Shl, Shr};

use super::Composition;
use super::flatten::{Composed, Lift, Resolved, Segment, compose, lift, nested, unary};
use crate::callable::{Invoke, InvokeOnce};
use crate::closure::{
    Closure, EnableBindBack, EnableBindFront, EnableConjunction, EnableDisjunction, EnableEqual,
    EnableEquivalent, EnableNegation, EnableNotEqual, EnablePipe, ResolveCapabilities,
};
use crate::sequence::{Append, Cons, Nil};
use crate::strategy::{
    BindBack, BindFront, BoundValue, Conjunction, Disjunction, Equal, Equivalent, Negation,
    NotEqual, Pipe,
};

/// Combinator methods shared by closures and compositions.
///
/// The right operand of [`pipe`](Self::pipe), [`and`](Self::and),
/// [`or`](Self::or), [`equal`](Self::equal) and
/// [`equivalent`](Self::equivalent) may be any callable, including plain Rust
/// closures. It is kept as one element; use the operators or the free
/// functions to splice compositions of the same kind.
///
/// # Examples
///
/// ```rust
/// use closure_algebra::callable::Invoke;
/// use closure_algebra::closure::predicate;
/// use closure_algebra::composition::Combinators;
///
/// let is_even = predicate(|value: i32| value % 2 == 0);
/// let check = is_even.and(|value: i32| value > 10).or(|value: i32| value == 3);
///
/// assert!(check.invoke((12,)));
/// assert!(check.invoke((3,)));
/// assert!(!check.invoke((8,)));
/// ```
pub trait Combinators: Sized {
    /// Capability set deciding which combinators are available.
    type Capabilities;

    /// Feeds the result of `self` into `next`.
    fn pipe<G>(self, next: G) -> Composed<Pipe, Self, Lift<G>, <Self as Combinators>::Capabilities>
    where
        Self: Segment<Pipe>,
        <Self as Combinators>::Capabilities: EnablePipe,
        <Self as Segment<Pipe>>::List: Append<<Lift<G> as Segment<Pipe>>::List>,
    {
        compose(self, lift(next))
    }

    /// Short-circuit AND of `self` and `other`.
    fn and<G>(self, other: G) -> Composed<Conjunction, Self, Lift<G>, <Self as Combinators>::Capabilities>
    where
        Self: Segment<Conjunction>,
        <Self as Combinators>::Capabilities: EnableConjunction,
        <Self as Segment<Conjunction>>::List: Append<<Lift<G> as Segment<Conjunction>>::List>,
    {
        compose(self, lift(other))
    }

    /// Short-circuit OR of `self` and `other`.
    fn or<G>(self, other: G) -> Composed<Disjunction, Self, Lift<G>, <Self as Combinators>::Capabilities>
    where
        Self: Segment<Disjunction>,
        <Self as Combinators>::Capabilities: EnableDisjunction,
        <Self as Segment<Disjunction>>::List: Append<<Lift<G> as Segment<Disjunction>>::List>,
    {
        compose(self, lift(other))
    }

    /// `true` when `other` returns a value `==` to the result of `self`.
    fn equal<G>(self, other: G) -> Composed<Equal, Self, Lift<G>, <Self as Combinators>::Capabilities>
    where
        Self: Segment<Equal>,
        <Self as Combinators>::Capabilities: EnableEqual,
        <Self as Segment<Equal>>::List: Append<<Lift<G> as Segment<Equal>>::List>,
    {
        compose(self, lift(other))
    }

    /// `true` when the results of `self` and `other` differ.
    fn not_equal<G>(self, other: G) -> Composition<NotEqual, Cons<Self, Cons<G, Nil>>, Self::Capabilities>
    where
        Self::Capabilities: EnableNotEqual,
    {
        nested(self, other)
    }

    /// `true` when neither result orders before the other.
    fn equivalent<G>(self, other: G) -> Composed<Equivalent, Self, Lift<G>, <Self as Combinators>::Capabilities>
    where
        Self: Segment<Equivalent>,
        <Self as Combinators>::Capabilities: EnableEquivalent,
        <Self as Segment<Equivalent>>::List: Append<<Lift<G> as Segment<Equivalent>>::List>,
    {
        compose(self, lift(other))
    }

    /// Logical complement of `self`.
    fn negate(self) -> Composition<Negation, Cons<Self, Nil>, Self::Capabilities>
    where
        Self::Capabilities: EnableNegation,
    {
        unary(self)
    }

    /// Binds `value` in front of the remaining arguments.
    fn bind_front<T>(self, value: T) -> Composed<BindFront, Self, BoundValue<T>, <Self as Combinators>::Capabilities>
    where
        Self: Segment<BindFront>,
        <Self as Combinators>::Capabilities: EnableBindFront,
        <Self as Segment<BindFront>>::List: Append<<BoundValue<T> as Segment<BindFront>>::List>,
    {
        compose(self, BoundValue::new(value))
    }

    /// Binds `value` behind the remaining arguments.
    fn bind_back<T>(self, value: T) -> Composed<BindBack, Self, BoundValue<T>, <Self as Combinators>::Capabilities>
    where
        Self: Segment<BindBack>,
        <Self as Combinators>::Capabilities: EnableBindBack,
        <Self as Segment<BindBack>>::List: Append<<BoundValue<T> as Segment<BindBack>>::List>,
    {
        compose(self, BoundValue::new(value))
    }

    /// Borrows `self` as a unary Rust closure, for iterator adapters.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use closure_algebra::closure::transform;
    /// use closure_algebra::composition::Combinators;
    ///
    /// let double_then_increment = transform(|value: i32| value * 2) | transform(|value: i32| value + 1);
    /// let mapped: Vec<i32> = [1, 2, 3].into_iter().map(double_then_increment.as_fn()).collect();
    /// assert_eq!(mapped, [3, 5, 7]);
    /// ```
    fn as_fn<A>(&self) -> impl Fn(A) -> <Self as InvokeOnce<(A,)>>::Output
    where
        Self: Invoke<(A,)>,
    {
        move |value| self.invoke((value,))
    }

    /// Borrows `self` as a predicate over references, for `filter` and friends.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use closure_algebra::closure::predicate;
    /// use closure_algebra::composition::Combinators;
    ///
    /// let divisible_by_3 = predicate(|value: i32| value % 3 == 0);
    /// let not_multiple_of_3 = !divisible_by_3;
    /// let kept: Vec<i32> = (1..=6).filter(not_multiple_of_3.as_predicate_fn()).collect();
    /// assert_eq!(kept, [1, 2, 4, 5]);
    /// ```
    fn as_predicate_fn<A: Clone>(&self) -> impl Fn(&A) -> bool
    where
        Self: Invoke<(A,), Output = bool>,
    {
        move |value: &A| self.invoke((value.clone(),))
    }
}

impl<F, P, K> Combinators for Closure<F, P, K> {
    type Capabilities = K;
}

impl<S, L, K> Combinators for Composition<S, L, K> {
    type Capabilities = K;
}

macro_rules! impl_operators {
    ($([$($generic:ident),*] $operand:ty => $capabilities:ident;)*) => {
        $(
            impl<$($generic,)* Rhs> BitOr<Rhs> for $operand
            where
                Self: Segment<Pipe>,
                Rhs: Segment<Pipe>,
                (<Self as Segment<Pipe>>::Capabilities, Rhs::Capabilities): ResolveCapabilities<Pipe>,
                Resolved<Pipe, Self, Rhs>: EnablePipe,
                <Self as Segment<Pipe>>::List: Append<<Rhs as Segment<Pipe>>::List>,
            {
                type Output = Composed<Pipe, Self, Rhs, Resolved<Pipe, Self, Rhs>>;

                #[inline]
                fn bitor(self, rhs: Rhs) -> Self::Output {
                    compose(self, rhs)
                }
            }

            impl<$($generic,)* Rhs> Mul<Rhs> for $operand
            where
                Self: Segment<Conjunction>,
                Rhs: Segment<Conjunction>,
                (<Self as Segment<Conjunction>>::Capabilities, Rhs::Capabilities): ResolveCapabilities<Conjunction>,
                Resolved<Conjunction, Self, Rhs>: EnableConjunction,
                <Self as Segment<Conjunction>>::List: Append<<Rhs as Segment<Conjunction>>::List>,
            {
                type Output = Composed<Conjunction, Self, Rhs, Resolved<Conjunction, Self, Rhs>>;

                #[inline]
                fn mul(self, rhs: Rhs) -> Self::Output {
                    compose(self, rhs)
                }
            }

            impl<$($generic,)* Rhs> Add<Rhs> for $operand
            where
                Self: Segment<Disjunction>,
                Rhs: Segment<Disjunction>,
                (<Self as Segment<Disjunction>>::Capabilities, Rhs::Capabilities): ResolveCapabilities<Disjunction>,
                Resolved<Disjunction, Self, Rhs>: EnableDisjunction,
                <Self as Segment<Disjunction>>::List: Append<<Rhs as Segment<Disjunction>>::List>,
            {
                type Output = Composed<Disjunction, Self, Rhs, Resolved<Disjunction, Self, Rhs>>;

                #[inline]
                fn add(self, rhs: Rhs) -> Self::Output {
                    compose(self, rhs)
                }
            }

            impl<$($generic,)* Value> Shl<Value> for $operand
            where
                $capabilities: EnableBindFront,
                Self: Segment<BindFront>,
                <Self as Segment<BindFront>>::List:
                    Append<<BoundValue<Value> as Segment<BindFront>>::List>,
            {
                type Output = Composed<BindFront, Self, BoundValue<Value>, $capabilities>;

                #[inline]
                fn shl(self, value: Value) -> Self::Output {
                    compose(self, BoundValue::new(value))
                }
            }

            impl<$($generic,)* Value> Shr<Value> for $operand
            where
                $capabilities: EnableBindBack,
                Self: Segment<BindBack>,
                <Self as Segment<BindBack>>::List:
                    Append<<BoundValue<Value> as Segment<BindBack>>::List>,
            {
                type Output = Composed<BindBack, Self, BoundValue<Value>, $capabilities>;

                #[inline]
                fn shr(self, value: Value) -> Self::Output {
                    compose(self, BoundValue::new(value))
                }
            }

            impl<$($generic),*> Not for $operand
            where
                $capabilities: EnableNegation,
            {
                type Output = Composition<Negation, Cons<Self, Nil>, $capabilities>;

                #[inline]
                fn not(self) -> Self::Output {
                    unary(self)
                }
            }
        )*
    };
}

impl_operators! {
    [F, P, K] Closure<F, P, K> => K;
    [S, L, K] Composition<S, L, K> => K;
}

macro_rules! joining_functions {
    ($($(#[$attribute:meta])* $name:ident => $strategy:ty, $capability:ident;)*) => {
        $(
            $(#[$attribute])*
            #[inline]
            pub fn $name<Lhs, Rhs>(
                lhs: Lhs,
                rhs: Rhs,
            ) -> Composed<$strategy, Lhs, Rhs, Resolved<$strategy, Lhs, Rhs>>
            where
                Lhs: Segment<$strategy>,
                Rhs: Segment<$strategy>,
                (Lhs::Capabilities, Rhs::Capabilities): ResolveCapabilities<$strategy>,
                Resolved<$strategy, Lhs, Rhs>: $capability,
                <Lhs as Segment<$strategy>>::List: Append<<Rhs as Segment<$strategy>>::List>,
            {
                compose(lhs, rhs)
            }
        )*
    };
}

joining_functions! {
    /// Function form of `lhs | rhs`.
    pipe => Pipe, EnablePipe;
    /// Function form of `lhs * rhs`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use closure_algebra::callable::Invoke;
    /// use closure_algebra::closure::{predicate, transform};
    /// use closure_algebra::composition::conjunction;
    ///
    /// // The transform has no conjunction, so the predicate's set is used.
    /// let both = conjunction(transform(|value: i32| value != 0), predicate(|value: i32| value > 0));
    /// assert!(both.invoke((3,)));
    /// assert!(!both.invoke((-3,)));
    /// ```
    conjunction => Conjunction, EnableConjunction;
    /// Function form of `lhs + rhs`.
    disjunction => Disjunction, EnableDisjunction;
    /// Equality of every result with the result of `lhs`, splicing operands
    /// that are equality compositions themselves.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use closure_algebra::callable::Invoke;
    /// use closure_algebra::closure::predicate;
    /// use closure_algebra::composition::equal;
    ///
    /// let first = predicate(|(lhs, _): (i32, i32)| lhs);
    /// let second = predicate(|(_, rhs): (i32, i32)| rhs);
    /// let same = equal(first, second);
    /// assert!(same.invoke(((4, 4),)));
    /// assert!(!same.invoke(((4, 5),)));
    /// ```
    equal => Equal, EnableEqual;
    /// Ordered equality of every result with the result of `lhs`.
    equivalent => Equivalent, EnableEquivalent;
}

/// Function form of [`Combinators::not_equal`].
///
/// Both operands are kept whole; the result takes the capability set of the
/// first operand enabling inequality.
#[inline]
pub fn not_equal<Lhs, Rhs>(
    lhs: Lhs,
    rhs: Rhs,
) -> Composition<NotEqual, Cons<Lhs, Cons<Rhs, Nil>>, Resolved<NotEqual, Lhs, Rhs>>
where
    Lhs: Segment<NotEqual>,
    Rhs: Segment<NotEqual>,
    (Lhs::Capabilities, Rhs::Capabilities): ResolveCapabilities<NotEqual>,
    Resolved<NotEqual, Lhs, Rhs>: EnableNotEqual,
{
    nested(lhs, rhs)
}

/// Function form of `!operand`.
#[inline]
pub fn negation<Operand>(operand: Operand) -> Composition<Negation, Cons<Operand, Nil>, Operand::Capabilities>
where
    Operand: Combinators,
    Operand::Capabilities: EnableNegation,
{
    unary(operand)
}

/// Function form of `function << value`.
#[inline]
pub fn bind_front<F, T>(function: F, value: T) -> Composed<BindFront, F, BoundValue<T>, <F as Combinators>::Capabilities>
where
    F: Combinators + Segment<BindFront>,
    <F as Combinators>::Capabilities: EnableBindFront,
    <F as Segment<BindFront>>::List: Append<<BoundValue<T> as Segment<BindFront>>::List>,
{
    function.bind_front(value)
}

/// Function form of `function >> value`.
///
/// # Examples
///
/// ```rust
/// use closure_algebra::callable::Invoke;
/// use closure_algebra::closure::predicate;
/// use closure_algebra::composition::bind_back;
///
/// let below_44 = bind_back(predicate(|lhs: i32, rhs: i32| lhs < rhs), 44);
/// assert!(below_44.invoke((43,)));
/// assert!(!below_44.invoke((44,)));
/// ```
#[inline]
pub fn bind_back<F, T>(function: F, value: T) -> Composed<BindBack, F, BoundValue<T>, <F as Combinators>::Capabilities>
where
    F: Combinators + Segment<BindBack>,
    <F as Combinators>::Capabilities: EnableBindBack,
    <F as Segment<BindBack>>::List: Append<<BoundValue<T> as Segment<BindBack>>::List>,
{
    function.bind_back(value)
}
