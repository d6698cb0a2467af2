//! Heterogeneous lists holding the callables of a composition.
//!
//! A composition stores its callables in a type-level list built from
//! [`Nil`] and [`Cons`]. Every element keeps its own concrete type, so
//! invoking a composition is fully monomorphized and never boxes.
//!
//! - `Nil` - Empty list (base case)
//! - `Cons<Head, Tail>` - List with `Head` prepended to `Tail`
//!
//! Lists are concatenated with [`Append`], which is how two compositions of
//! the same operator are spliced into one.
//!
//! # Examples
//!
//! ```rust
//! use closure_algebra::fn_list;
//! use closure_algebra::sequence::{Append, Cons, Nil, Sequence};
//!
//! let first = fn_list![|value: i32| value + 1];
//! let second = fn_list![|value: i32| value * 2, |value: i32| value - 3];
//! let joined = first.append(second);
//!
//! assert_eq!(joined.len(), 3);
//! ```

use crate::callable::Nothrow;

/// The empty list.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct Nil;

/// A non-empty list with `head` prepended to `tail`.
///
/// # Type Parameters
///
/// - `Head`: The first element
/// - `Tail`: The remaining elements (another list)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct Cons<Head, Tail> {
    /// The first element.
    pub head: Head,
    /// The remaining elements.
    pub tail: Tail,
}

impl<Head, Tail> Cons<Head, Tail> {
    /// Creates a new `Cons` cell.
    #[inline]
    pub const fn new(head: Head, tail: Tail) -> Self {
        Self { head, tail }
    }
}

/// Common behavior of [`Nil`] and [`Cons`].
pub trait Sequence {
    /// Number of elements in the list.
    const LEN: usize;

    /// Returns the number of elements in the list.
    #[inline]
    fn len(&self) -> usize {
        Self::LEN
    }

    /// Returns `true` for [`Nil`].
    #[inline]
    fn is_empty(&self) -> bool {
        Self::LEN == 0
    }
}

impl Sequence for Nil {
    const LEN: usize = 0;
}

impl<Head, Tail: Sequence> Sequence for Cons<Head, Tail> {
    const LEN: usize = 1 + Tail::LEN;
}

/// Concatenation of two lists, preserving the order of both.
pub trait Append<Rhs> {
    /// The concatenated list.
    type Output;

    /// Appends `rhs` after the elements of `self`.
    fn append(self, rhs: Rhs) -> Self::Output;
}

impl<Rhs> Append<Rhs> for Nil {
    type Output = Rhs;

    #[inline]
    fn append(self, rhs: Rhs) -> Rhs {
        rhs
    }
}

impl<Head, Tail, Rhs> Append<Rhs> for Cons<Head, Tail>
where
    Tail: Append<Rhs>,
{
    type Output = Cons<Head, Tail::Output>;

    #[inline]
    fn append(self, rhs: Rhs) -> Self::Output {
        Cons::new(self.head, self.tail.append(rhs))
    }
}

impl Nothrow for Nil {}

impl<Head: Nothrow, Tail: Nothrow> Nothrow for Cons<Head, Tail> {}

/// Builds a [`Cons`] list value from a list of expressions.
///
/// # Syntax
///
/// - `fn_list![]` - Empty list (`Nil`)
/// - `fn_list![a]` - Single element list (`Cons { head: a, tail: Nil }`)
/// - `fn_list![a, b, ...]` - Multiple elements
///
/// # Examples
///
/// ```rust
/// use closure_algebra::fn_list;
/// use closure_algebra::sequence::{Nil, Sequence};
///
/// let empty = fn_list![];
/// assert_eq!(empty, Nil);
///
/// let list = fn_list![1, "two", 3.0];
/// assert_eq!(list.len(), 3);
/// assert_eq!(list.tail.head, "two");
/// ```
#[macro_export]
macro_rules! fn_list {
    () => { $crate::sequence::Nil };
    ($head:expr $(, $rest:expr)* $(,)?) => {
        $crate::sequence::Cons::new($head, $crate::fn_list!($($rest),*))
    };
}

/// Names the type of a [`Cons`] list.
///
/// # Examples
///
/// ```rust
/// use closure_algebra::FnList;
/// use closure_algebra::sequence::{Cons, Nil};
///
/// type Pair = FnList![u8, u16];
/// let pair: Pair = Cons::new(1, Cons::new(2, Nil));
/// assert_eq!(pair.head, 1);
/// ```
#[macro_export]
macro_rules! FnList {
    () => { $crate::sequence::Nil };
    ($head:ty $(, $rest:ty)* $(,)?) => {
        $crate::sequence::Cons<$head, $crate::FnList!($($rest),*)>
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use static_assertions::assert_impl_all;

    assert_impl_all!(Nil: Nothrow, Send, Sync, Copy);
    assert_impl_all!(Cons<Nil, Nil>: Nothrow, Send, Sync, Copy);

    #[rstest]
    fn nil_is_empty() {
        assert_eq!(Nil::LEN, 0);
        assert!(Nil.is_empty());
    }

    #[rstest]
    fn cons_length_counts_every_element() {
        let list = fn_list![1_u8, 2_u16, 3_u32, 4_u64];
        assert_eq!(list.len(), 4);
        assert!(!list.is_empty());
    }

    #[rstest]
    fn append_keeps_left_elements_first() {
        let joined = fn_list!['a', 'b'].append(fn_list!['c']);
        assert_eq!(joined, fn_list!['a', 'b', 'c']);
    }

    #[rstest]
    fn append_to_nil_is_identity() {
        let list = fn_list![1, 2];
        assert_eq!(Nil.append(list), list);
        assert_eq!(list.append(Nil), list);
    }

    #[rstest]
    fn appended_length_is_sum_of_lengths() {
        type Left = crate::FnList![u8, u8];
        type Right = crate::FnList![u8, u8, u8];
        assert_eq!(<<Left as Append<Right>>::Output as Sequence>::LEN, 5);
    }

    #[rstest]
    fn list_is_debug() {
        let debug_string = format!("{:?}", fn_list![1]);
        assert_eq!(debug_string, "Cons { head: 1, tail: Nil }");
    }
}
