//! Compositions of several callables under one strategy.
//!
//! A [`Composition`] owns an ordered list of callables and a zero-sized
//! [`Strategy`]. Invoking it hands the call arguments and the whole list to
//! the strategy. The list order is the order in which the expression was
//! written, which matters for pipes (data flow) and equality (the first
//! result is the baseline).
//!
//! Compositions are built by the operators on [`Closure`](crate::closure::Closure)
//! and on compositions themselves. Applying the same joinable operator again
//! does not nest; the lists are spliced:
//!
//! ```rust
//! use closure_algebra::callable::Invoke;
//! use closure_algebra::closure::transform;
//!
//! let f = transform(|value: i32| value + 1);
//! let g = transform(|value: i32| value * 2);
//! let h = transform(|value: i32| value - 3);
//!
//! let left = (f | g) | h;
//! let right = f | (g | h);
//!
//! assert_eq!(left.len(), 3);
//! assert_eq!(right.len(), 3);
//! assert_eq!(left.invoke((5,)), right.invoke((5,)));
//! ```
//!
//! # Operators
//!
//! | Operator | Method | Free function | Strategy |
//! |---|---|---|---|
//! | `a \| b` | [`pipe`](Combinators::pipe) | [`pipe`](pipe()) | [`Pipe`] |
//! | `a * b` | [`and`](Combinators::and) | [`conjunction`] | [`Conjunction`] |
//! | `a + b` | [`or`](Combinators::or) | [`disjunction`] | [`Disjunction`] |
//! | | [`equal`](Combinators::equal) | [`equal`](equal()) | [`Equal`] |
//! | | [`not_equal`](Combinators::not_equal) | [`not_equal`](not_equal()) | [`NotEqual`] |
//! | | [`equivalent`](Combinators::equivalent) | [`equivalent`](equivalent()) | [`Equivalent`] |
//! | `!a` | [`negate`](Combinators::negate) | [`negation`] | [`Negation`] |
//! | `a << v` | [`bind_front`](Combinators::bind_front) | [`bind_front`](bind_front()) | [`BindFront`] |
//! | `a >> v` | [`bind_back`](Combinators::bind_back) | [`bind_back`](bind_back()) | [`BindBack`] |
//!
//! The operators and free functions flatten both operands. The methods take
//! any callable as the right operand and keep it as a single element.
//!
//! [`Pipe`]: crate::strategy::Pipe
//! [`Conjunction`]: crate::strategy::Conjunction
//! [`Disjunction`]: crate::strategy::Disjunction
//! [`Equal`]: crate::strategy::Equal
//! [`NotEqual`]: crate::strategy::NotEqual
//! [`Equivalent`]: crate::strategy::Equivalent
//! [`Negation`]: crate::strategy::Negation
//! [`BindFront`]: crate::strategy::BindFront
//! [`BindBack`]: crate::strategy::BindBack

mod combinators;
mod flatten;

pub use combinators::{
    Combinators, bind_back, bind_front, conjunction, disjunction, equal, equivalent, negation,
    not_equal, pipe,
};
pub use flatten::{Composed, Lift, Resolved, Segment, compose, lift, nested, unary};

use std::fmt;
use std::marker::PhantomData;

use crate::callable::{Invoke, InvokeMut, InvokeOnce, Nothrow};
use crate::closure::TransformCaps;
use crate::operator::{FlattenPolicy, OperatorKind};
use crate::sequence::Sequence;
use crate::strategy::{Evaluate, EvaluateMut, EvaluateOnce, Strategy};

/// An ordered list of callables `L` evaluated by strategy `S`.
///
/// `K` is the capability set of the first operand that enabled the operator
/// building it; it decides which operators the composition itself offers.
pub struct Composition<S, L, K = TransformCaps> {
    strategy: S,
    functions: L,
    capabilities: PhantomData<fn() -> K>,
}

impl<S, L, K> Composition<S, L, K> {
    /// Creates a composition from a strategy and a callable list.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use closure_algebra::callable::Invoke;
    /// use closure_algebra::composition::Composition;
    /// use closure_algebra::fn_list;
    /// use closure_algebra::strategy::Disjunction;
    ///
    /// let composition: Composition<_, _> = Composition::new(
    ///     Disjunction,
    ///     fn_list![|value: char| value.is_ascii_digit(), |value: char| value == '_'],
    /// );
    /// assert!(composition.invoke(('_',)));
    /// assert!(!composition.invoke(('a',)));
    /// ```
    #[inline]
    pub const fn new(strategy: S, functions: L) -> Self {
        Self {
            strategy,
            functions,
            capabilities: PhantomData,
        }
    }

    /// Creates a composition with the default strategy instance.
    #[inline]
    pub fn from_functions(functions: L) -> Self
    where
        S: Strategy,
    {
        Self::new(S::default(), functions)
    }

    /// Returns the strategy.
    #[inline]
    pub const fn strategy(&self) -> &S {
        &self.strategy
    }

    /// Returns the callable list.
    #[inline]
    pub const fn functions(&self) -> &L {
        &self.functions
    }

    /// Releases the callable list.
    #[inline]
    pub fn into_functions(self) -> L {
        self.functions
    }

    /// Number of callables at the top level of this composition.
    ///
    /// Nested compositions count as one element.
    #[inline]
    #[allow(clippy::len_without_is_empty)]
    pub const fn len(&self) -> usize
    where
        L: Sequence,
    {
        L::LEN
    }

    /// The operator that produced this composition.
    #[inline]
    pub const fn kind(&self) -> OperatorKind
    where
        S: Strategy,
    {
        S::KIND
    }

    /// How this composition combines with another of the same operator.
    #[inline]
    pub const fn flatten_policy(&self) -> FlattenPolicy
    where
        S: Strategy,
    {
        S::KIND.flatten_policy()
    }

    /// Re-labels the composition with another capability set.
    #[inline]
    pub fn with_capabilities<Caps>(self) -> Composition<S, L, Caps> {
        Composition::new(self.strategy, self.functions)
    }
}

impl<S: Clone, L: Clone, K> Clone for Composition<S, L, K> {
    fn clone(&self) -> Self {
        Self::new(self.strategy.clone(), self.functions.clone())
    }
}

impl<S: Copy, L: Copy, K> Copy for Composition<S, L, K> {}

impl<S: Strategy, L: Sequence, K> fmt::Debug for Composition<S, L, K> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Composition")
            .field("kind", &S::KIND)
            .field("len", &L::LEN)
            .field("capabilities", &std::any::type_name::<K>())
            .finish()
    }
}

impl<S, L, K, Args> InvokeOnce<Args> for Composition<S, L, K>
where
    L: EvaluateOnce<S, Args>,
{
    type Output = L::Output;

    #[inline]
    fn invoke_once(self, args: Args) -> Self::Output {
        self.functions.evaluate_once(args)
    }
}

impl<S, L, K, Args> InvokeMut<Args> for Composition<S, L, K>
where
    L: EvaluateMut<S, Args>,
{
    #[inline]
    fn invoke_mut(&mut self, args: Args) -> Self::Output {
        self.functions.evaluate_mut(args)
    }
}

impl<S, L, K, Args> Invoke<Args> for Composition<S, L, K>
where
    L: Evaluate<S, Args>,
{
    #[inline]
    fn invoke(&self, args: Args) -> Self::Output {
        self.functions.evaluate(args)
    }
}

impl<S: Nothrow, L: Nothrow, K> Nothrow for Composition<S, L, K> {}
