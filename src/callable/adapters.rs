//! Adapters that change how a callable is held or what it promises.

use std::fmt;

use super::{Invoke, InvokeMut, InvokeOnce, Nothrow};

/// Borrows a callable so it can be composed without giving up ownership.
///
/// Invoking a `ByRef` in any tier invokes the referenced callable through a
/// shared reference.
///
/// # Examples
///
/// ```rust
/// use closure_algebra::callable::{Invoke, by_ref};
/// use closure_algebra::closure::transform;
///
/// let double = |value: i32| value * 2;
/// let pipeline = transform(by_ref(&double)) | transform(by_ref(&double));
///
/// assert_eq!(pipeline.invoke((3,)), 12);
/// assert_eq!(double(1), 2);
/// ```
pub struct ByRef<'a, F: ?Sized> {
    function: &'a F,
}

/// Wraps a shared reference to `function`.
#[inline]
pub const fn by_ref<F: ?Sized>(function: &F) -> ByRef<'_, F> {
    ByRef { function }
}

impl<'a, F: ?Sized> ByRef<'a, F> {
    /// Returns the referenced callable.
    #[inline]
    pub const fn get(&self) -> &'a F {
        self.function
    }
}

impl<F: ?Sized> Clone for ByRef<'_, F> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<F: ?Sized> Copy for ByRef<'_, F> {}

impl<F: ?Sized> fmt::Debug for ByRef<'_, F> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("ByRef")
            .field("function", &std::any::type_name::<F>())
            .finish()
    }
}

impl<F, Args> InvokeOnce<Args> for ByRef<'_, F>
where
    F: Invoke<Args> + ?Sized,
{
    type Output = F::Output;

    #[inline]
    fn invoke_once(self, args: Args) -> Self::Output {
        self.function.invoke(args)
    }
}

impl<F, Args> InvokeMut<Args> for ByRef<'_, F>
where
    F: Invoke<Args> + ?Sized,
{
    #[inline]
    fn invoke_mut(&mut self, args: Args) -> Self::Output {
        self.function.invoke(args)
    }
}

impl<F, Args> Invoke<Args> for ByRef<'_, F>
where
    F: Invoke<Args> + ?Sized,
{
    #[inline]
    fn invoke(&self, args: Args) -> Self::Output {
        self.function.invoke(args)
    }
}

impl<F: Nothrow + ?Sized> Nothrow for ByRef<'_, F> {}

/// Mutably borrows a stateful callable so it can be composed in place.
///
/// `ByMut` is only invocable through `&mut` or by value, since the
/// referenced callable needs unique access.
///
/// # Examples
///
/// ```rust
/// use closure_algebra::callable::{InvokeMut, by_mut};
/// use closure_algebra::closure::transform;
///
/// let mut calls = 0;
/// let mut count = |value: i32| {
///     calls += 1;
///     value
/// };
///
/// let mut pipeline = transform(by_mut(&mut count)) | transform(|value: i32| value + 1);
/// assert_eq!(pipeline.invoke_mut((1,)), 2);
/// assert_eq!(pipeline.invoke_mut((2,)), 3);
/// drop(pipeline);
/// assert_eq!(calls, 2);
/// ```
pub struct ByMut<'a, F: ?Sized> {
    function: &'a mut F,
}

/// Wraps a unique reference to `function`.
#[inline]
pub const fn by_mut<F: ?Sized>(function: &mut F) -> ByMut<'_, F> {
    ByMut { function }
}

impl<F: ?Sized> fmt::Debug for ByMut<'_, F> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("ByMut")
            .field("function", &std::any::type_name::<F>())
            .finish()
    }
}

impl<F, Args> InvokeOnce<Args> for ByMut<'_, F>
where
    F: InvokeMut<Args> + ?Sized,
{
    type Output = F::Output;

    #[inline]
    fn invoke_once(self, args: Args) -> Self::Output {
        self.function.invoke_mut(args)
    }
}

impl<F, Args> InvokeMut<Args> for ByMut<'_, F>
where
    F: InvokeMut<Args> + ?Sized,
{
    #[inline]
    fn invoke_mut(&mut self, args: Args) -> Self::Output {
        self.function.invoke_mut(args)
    }
}

impl<F: Nothrow + ?Sized> Nothrow for ByMut<'_, F> {}

/// A callable whose author asserts it never panics.
///
/// Created by [`nothrow`]. Behaves exactly like the wrapped callable.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct AssertNothrow<F> {
    function: F,
}

/// Marks `function` as [`Nothrow`].
///
/// The marker is a promise by the caller; the crate cannot verify it.
#[inline]
pub const fn nothrow<F>(function: F) -> AssertNothrow<F> {
    AssertNothrow { function }
}

impl<F> AssertNothrow<F> {
    /// Unwraps the callable.
    #[inline]
    pub fn into_inner(self) -> F {
        self.function
    }
}

impl<F> fmt::Debug for AssertNothrow<F> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("AssertNothrow")
            .field("function", &std::any::type_name::<F>())
            .finish()
    }
}

impl<F: InvokeOnce<Args>, Args> InvokeOnce<Args> for AssertNothrow<F> {
    type Output = F::Output;

    #[inline]
    fn invoke_once(self, args: Args) -> Self::Output {
        self.function.invoke_once(args)
    }
}

impl<F: InvokeMut<Args>, Args> InvokeMut<Args> for AssertNothrow<F> {
    #[inline]
    fn invoke_mut(&mut self, args: Args) -> Self::Output {
        self.function.invoke_mut(args)
    }
}

impl<F: Invoke<Args>, Args> Invoke<Args> for AssertNothrow<F> {
    #[inline]
    fn invoke(&self, args: Args) -> Self::Output {
        self.function.invoke(args)
    }
}

impl<F> Nothrow for AssertNothrow<F> {}
