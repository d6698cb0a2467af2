//! Arithmetic transforms built on the `std::ops` traits.

use std::ops::{Add, Div, Mul, Neg, Rem, Sub};

use crate::closure::{Transform, transform};

function_objects! {
    /// `lhs + rhs`.
    Plus<Lhs, Rhs>(lhs: Lhs, rhs: Rhs) -> <Lhs as Add<Rhs>>::Output
    where [Lhs: Add<Rhs>]
    { lhs + rhs }

    /// `lhs - rhs`.
    Minus<Lhs, Rhs>(lhs: Lhs, rhs: Rhs) -> <Lhs as Sub<Rhs>>::Output
    where [Lhs: Sub<Rhs>]
    { lhs - rhs }

    /// `lhs * rhs`.
    Multiplies<Lhs, Rhs>(lhs: Lhs, rhs: Rhs) -> <Lhs as Mul<Rhs>>::Output
    where [Lhs: Mul<Rhs>]
    { lhs * rhs }

    /// `lhs / rhs`. Panics where the operand type's division does.
    Divides<Lhs, Rhs>(lhs: Lhs, rhs: Rhs) -> <Lhs as Div<Rhs>>::Output
    where [Lhs: Div<Rhs>]
    { lhs / rhs }

    /// `lhs % rhs`.
    Modulus<Lhs, Rhs>(lhs: Lhs, rhs: Rhs) -> <Lhs as Rem<Rhs>>::Output
    where [Lhs: Rem<Rhs>]
    { lhs % rhs }

    /// `-value`.
    Negate<Value>(value: Value) -> <Value as Neg>::Output
    where [Value: Neg]
    { -value }
}

/// Transform form of [`Plus`].
///
/// # Examples
///
/// ```rust
/// use closure_algebra::callable::Invoke;
/// use closure_algebra::functions::{multiplies, plus};
///
/// let add_42_then_triple = (plus() << 42_i32) | (multiplies() << 3_i32);
/// assert_eq!(add_42_then_triple.invoke((1_i32,)), 129);
/// ```
#[inline]
pub const fn plus() -> Transform<Plus> {
    transform(Plus)
}

/// Transform form of [`Minus`].
#[inline]
pub const fn minus() -> Transform<Minus> {
    transform(Minus)
}

/// Transform form of [`Multiplies`].
#[inline]
pub const fn multiplies() -> Transform<Multiplies> {
    transform(Multiplies)
}

/// Transform form of [`Divides`].
#[inline]
pub const fn divides() -> Transform<Divides> {
    transform(Divides)
}

/// Transform form of [`Modulus`].
#[inline]
pub const fn modulus() -> Transform<Modulus> {
    transform(Modulus)
}

/// Transform form of [`Negate`].
#[inline]
pub const fn negate() -> Transform<Negate> {
    transform(Negate)
}
