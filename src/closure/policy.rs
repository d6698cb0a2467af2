//! Invocation policies: how a closure hands its arguments to its callable.

use crate::callable::Nothrow;

/// Rearranges the argument tuple before it reaches the wrapped callable.
///
/// A policy only sees the arguments, never the callable, so the same policy
/// serves all three ownership tiers of [`Closure`](super::Closure).
#[diagnostic::on_unimplemented(
    message = "the invocation policy `{Self}` cannot accept the arguments `{Args}`",
    note = "`ApplyPolicy` expects exactly one argument: the tuple to spread"
)]
pub trait InvokePolicy<Args> {
    /// The argument tuple passed to the callable.
    type Arguments;

    /// Converts the call arguments into the callable's arguments.
    fn arrange(args: Args) -> Self::Arguments;
}

/// Passes the arguments through unchanged.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct DirectPolicy;

impl<Args> InvokePolicy<Args> for DirectPolicy {
    type Arguments = Args;

    #[inline]
    fn arrange(args: Args) -> Args {
        args
    }
}

/// Spreads the elements of a single tuple argument as the argument list.
///
/// # Examples
///
/// ```rust
/// use closure_algebra::callable::Invoke;
/// use closure_algebra::closure::apply;
///
/// let add = apply(|lhs: i32, rhs: i32| lhs + rhs);
/// assert_eq!(add.invoke(((2, 3),)), 5);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ApplyPolicy;

impl<Packed> InvokePolicy<(Packed,)> for ApplyPolicy {
    type Arguments = Packed;

    #[inline]
    fn arrange((packed,): (Packed,)) -> Packed {
        packed
    }
}

impl Nothrow for DirectPolicy {}

impl Nothrow for ApplyPolicy {}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn direct_policy_is_identity() {
        assert_eq!(<DirectPolicy as InvokePolicy<_>>::arrange((1, 'a')), (1, 'a'));
    }

    #[rstest]
    fn apply_policy_unwraps_the_single_argument() {
        assert_eq!(<ApplyPolicy as InvokePolicy<_>>::arrange(((1, 'a'),)), (1, 'a'));
    }
}
