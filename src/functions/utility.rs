//! Plumbing transforms: identity, conversion, dereferencing, projection
//! and constants.

use std::fmt;
use std::marker::PhantomData;
use std::ops::Deref;

use crate::callable::{Invoke, InvokeMut, InvokeOnce, Nothrow};
use crate::closure::{Transform, transform};
use crate::strategy::BoundValue;

function_objects! {
    /// Returns its argument unchanged.
    Identity<Value>(value: Value) -> Value
    where []
    { value }

    /// Clones the value behind a pointer or reference.
    Dereference<Pointer>(pointer: Pointer) -> <Pointer as Deref>::Target
    where [Pointer: Deref, Pointer::Target: Clone + Sized]
    { (*pointer).clone() }
}

impl Nothrow for Identity {}

/// Transform form of [`Identity`].
#[inline]
pub const fn identity() -> Transform<Identity> {
    transform(Identity)
}

/// Transform form of [`Dereference`].
///
/// # Examples
///
/// ```rust
/// use closure_algebra::callable::Invoke;
/// use closure_algebra::functions::dereference;
///
/// let shared = std::rc::Rc::new(String::from("shared"));
/// assert_eq!(dereference().invoke((shared,)), "shared");
/// ```
#[inline]
pub const fn dereference() -> Transform<Dereference> {
    transform(Dereference)
}

/// Converts its argument into `To` through [`From`].
pub struct Convert<To> {
    target: PhantomData<fn() -> To>,
}

impl<To> Convert<To> {
    /// Creates the conversion.
    #[inline]
    pub const fn new() -> Self {
        Self {
            target: PhantomData,
        }
    }
}

impl<To> Clone for Convert<To> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<To> Copy for Convert<To> {}

impl<To> Default for Convert<To> {
    fn default() -> Self {
        Self::new()
    }
}

impl<To> fmt::Debug for Convert<To> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "Convert<{}>", std::any::type_name::<To>())
    }
}

impl<Source, To: From<Source>> InvokeOnce<(Source,)> for Convert<To> {
    type Output = To;

    #[inline]
    fn invoke_once(self, (source,): (Source,)) -> To {
        To::from(source)
    }
}

impl<Source, To: From<Source>> InvokeMut<(Source,)> for Convert<To> {
    #[inline]
    fn invoke_mut(&mut self, (source,): (Source,)) -> To {
        To::from(source)
    }
}

impl<Source, To: From<Source>> Invoke<(Source,)> for Convert<To> {
    #[inline]
    fn invoke(&self, (source,): (Source,)) -> To {
        To::from(source)
    }
}

/// Transform form of [`Convert`].
///
/// # Examples
///
/// ```rust
/// use closure_algebra::callable::Invoke;
/// use closure_algebra::functions::{convert, plus};
///
/// let widen_then_add = convert::<i64>() | (plus() << 1_i64);
/// assert_eq!(widen_then_add.invoke((i32::MAX,)), i64::from(i32::MAX) + 1);
/// ```
#[inline]
pub const fn convert<To>() -> Transform<Convert<To>> {
    transform(Convert::new())
}

/// Tuples whose element `INDEX` can be moved out.
pub trait Project<const INDEX: usize> {
    /// The element type.
    type Output;

    /// Moves element `INDEX` out of the tuple.
    fn project(self) -> Self::Output;
}

macro_rules! impl_project {
    (@element ($($element:ident),+) $index:tt $selected:ident) => {
        impl<$($element),+> Project<$index> for ($($element,)+) {
            type Output = $selected;

            #[inline]
            fn project(self) -> $selected {
                self.$index
            }
        }
    };
    ($tuple:tt: $($index:tt => $selected:ident),+) => {
        $(impl_project!(@element $tuple $index $selected);)+
    };
}

impl_project!((A): 0 => A);
impl_project!((A, B): 0 => A, 1 => B);
impl_project!((A, B, C): 0 => A, 1 => B, 2 => C);
impl_project!((A, B, C, D): 0 => A, 1 => B, 2 => C, 3 => D);
impl_project!((A, B, C, D, E): 0 => A, 1 => B, 2 => C, 3 => D, 4 => E);
impl_project!((A, B, C, D, E, F): 0 => A, 1 => B, 2 => C, 3 => D, 4 => E, 5 => F);
impl_project!((A, B, C, D, E, F, G): 0 => A, 1 => B, 2 => C, 3 => D, 4 => E, 5 => F, 6 => G);
impl_project!((A, B, C, D, E, F, G, H): 0 => A, 1 => B, 2 => C, 3 => D, 4 => E, 5 => F, 6 => G, 7 => H);

/// Selects element `INDEX` of a tuple argument.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct GetAt<const INDEX: usize>;

impl<const INDEX: usize, Tuple: Project<INDEX>> InvokeOnce<(Tuple,)> for GetAt<INDEX> {
    type Output = Tuple::Output;

    #[inline]
    fn invoke_once(self, (tuple,): (Tuple,)) -> Self::Output {
        tuple.project()
    }
}

impl<const INDEX: usize, Tuple: Project<INDEX>> InvokeMut<(Tuple,)> for GetAt<INDEX> {
    #[inline]
    fn invoke_mut(&mut self, (tuple,): (Tuple,)) -> Self::Output {
        tuple.project()
    }
}

impl<const INDEX: usize, Tuple: Project<INDEX>> Invoke<(Tuple,)> for GetAt<INDEX> {
    #[inline]
    fn invoke(&self, (tuple,): (Tuple,)) -> Self::Output {
        tuple.project()
    }
}

impl<const INDEX: usize> Nothrow for GetAt<INDEX> {}

/// Transform form of [`GetAt`].
///
/// # Examples
///
/// ```rust
/// use closure_algebra::callable::Invoke;
/// use closure_algebra::functions::get_at;
///
/// assert_eq!(get_at::<1>().invoke((("first", 2, 3.0),)), 2);
/// ```
#[inline]
pub const fn get_at<const INDEX: usize>() -> Transform<GetAt<INDEX>> {
    transform(GetAt)
}

/// A nullary callable always yielding `value`.
///
/// Useful as a bound argument or as the head of a pipe that ignores its input
/// through currying.
#[inline]
pub const fn constant<T>(value: T) -> BoundValue<T> {
    BoundValue::new(value)
}
