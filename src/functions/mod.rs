//! Predefined function objects for comparisons, arithmetic and plumbing.
//!
//! Every function object is a zero-sized type implementing the invocation
//! traits generically over its argument types, so one `less()` works for
//! integers, strings and anything else that is [`PartialOrd`]. Each has a
//! constructor returning it wrapped in the matching closure flavor.
//!
//! # Examples
//!
//! ```rust
//! use closure_algebra::callable::Invoke;
//! use closure_algebra::functions::{greater, less};
//!
//! let in_range = (less() >> 10_i32) * (greater() >> 0_i32);
//! assert!(in_range.invoke((5_i32,)));
//! assert!(!in_range.invoke((10_i32,)));
//! assert!(!in_range.invoke((0_i32,)));
//! ```

// Declares unit structs and implements all three invocation tiers for them.
// The shared tier carries the body; the other two delegate to it.
macro_rules! function_objects {
    ($(
        $(#[$attribute:meta])*
        $name:ident<$($generic:ident),*>($($argument:ident: $type:ty),*) -> $output:ty
        where [$($bound:tt)*]
        $body:block
    )*) => {
        $(
            $(#[$attribute])*
            #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
            pub struct $name;

            impl<$($generic),*> $crate::callable::InvokeOnce<($($type,)*)> for $name
            where
                $($bound)*
            {
                type Output = $output;

                #[inline]
                fn invoke_once(self, args: ($($type,)*)) -> $output {
                    $crate::callable::Invoke::invoke(&self, args)
                }
            }

            impl<$($generic),*> $crate::callable::InvokeMut<($($type,)*)> for $name
            where
                $($bound)*
            {
                #[inline]
                fn invoke_mut(&mut self, args: ($($type,)*)) -> $output {
                    $crate::callable::Invoke::invoke(self, args)
                }
            }

            impl<$($generic),*> $crate::callable::Invoke<($($type,)*)> for $name
            where
                $($bound)*
            {
                #[inline]
                fn invoke(&self, ($($argument,)*): ($($type,)*)) -> $output $body
            }
        )*
    };
}

pub mod arithmetic;
pub mod compare;
pub mod utility;

pub use arithmetic::{divides, minus, modulus, multiplies, negate, plus};
pub use compare::{equal_to, greater, greater_equal, less, less_equal, not_equal_to, three_way};
pub use utility::{constant, convert, dereference, get_at, identity};
