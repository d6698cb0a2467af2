//! Comparison predicates over two arguments.
//!
//! The predicates take their operands by value, in call order, and are
//! usually curried: `less() >> 44` reads as "less than 44".

use std::cmp::Ordering;

use crate::closure::{Predicate, Transform, predicate, transform};

function_objects! {
    /// `lhs < rhs`.
    Less<Lhs, Rhs>(lhs: Lhs, rhs: Rhs) -> bool
    where [Lhs: PartialOrd<Rhs>]
    { lhs < rhs }

    /// `lhs <= rhs`.
    LessEqual<Lhs, Rhs>(lhs: Lhs, rhs: Rhs) -> bool
    where [Lhs: PartialOrd<Rhs>]
    { lhs <= rhs }

    /// `lhs > rhs`.
    Greater<Lhs, Rhs>(lhs: Lhs, rhs: Rhs) -> bool
    where [Lhs: PartialOrd<Rhs>]
    { lhs > rhs }

    /// `lhs >= rhs`.
    GreaterEqual<Lhs, Rhs>(lhs: Lhs, rhs: Rhs) -> bool
    where [Lhs: PartialOrd<Rhs>]
    { lhs >= rhs }

    /// `lhs == rhs`.
    EqualTo<Lhs, Rhs>(lhs: Lhs, rhs: Rhs) -> bool
    where [Lhs: PartialEq<Rhs>]
    { lhs == rhs }

    /// `lhs != rhs`.
    NotEqualTo<Lhs, Rhs>(lhs: Lhs, rhs: Rhs) -> bool
    where [Lhs: PartialEq<Rhs>]
    { lhs != rhs }

    /// `lhs.partial_cmp(&rhs)`.
    ThreeWay<Lhs, Rhs>(lhs: Lhs, rhs: Rhs) -> Option<Ordering>
    where [Lhs: PartialOrd<Rhs>]
    { lhs.partial_cmp(&rhs) }
}

/// Predicate form of [`Less`].
///
/// # Examples
///
/// ```rust
/// use closure_algebra::callable::Invoke;
/// use closure_algebra::functions::less;
///
/// let below_44 = less() >> 44_i32;
/// assert!(below_44.invoke((43,)));
/// assert!(!below_44.invoke((44,)));
/// ```
#[inline]
pub const fn less() -> Predicate<Less> {
    predicate(Less)
}

/// Predicate form of [`LessEqual`].
#[inline]
pub const fn less_equal() -> Predicate<LessEqual> {
    predicate(LessEqual)
}

/// Predicate form of [`Greater`].
#[inline]
pub const fn greater() -> Predicate<Greater> {
    predicate(Greater)
}

/// Predicate form of [`GreaterEqual`].
#[inline]
pub const fn greater_equal() -> Predicate<GreaterEqual> {
    predicate(GreaterEqual)
}

/// Predicate form of [`EqualTo`].
#[inline]
pub const fn equal_to() -> Predicate<EqualTo> {
    predicate(EqualTo)
}

/// Predicate form of [`NotEqualTo`].
#[inline]
pub const fn not_equal_to() -> Predicate<NotEqualTo> {
    predicate(NotEqualTo)
}

/// Transform form of [`ThreeWay`]. Yields `None` for unordered operands.
///
/// # Examples
///
/// ```rust
/// use std::cmp::Ordering;
///
/// use closure_algebra::callable::Invoke;
/// use closure_algebra::functions::three_way;
///
/// assert_eq!(three_way().invoke((1.0, 2.0)), Some(Ordering::Less));
/// assert_eq!(three_way().invoke((f64::NAN, 2.0)), None);
/// ```
#[inline]
pub const fn three_way() -> Transform<ThreeWay> {
    transform(ThreeWay)
}
