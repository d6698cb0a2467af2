//! Blanket implementations of the invocation traits for Rust closures and
//! functions.

use super::{Invoke, InvokeMut, InvokeOnce};

macro_rules! impl_invoke_for_functions {
    ($($argument:ident),*) => {
        paste::paste! {
            impl<Function, Return, $($argument,)*> InvokeOnce<($($argument,)*)> for Function
            where
                Function: FnOnce($($argument),*) -> Return,
            {
                type Output = Return;

                #[inline]
                fn invoke_once(self, ($([<$argument:lower>],)*): ($($argument,)*)) -> Return {
                    self($([<$argument:lower>]),*)
                }
            }

            impl<Function, Return, $($argument,)*> InvokeMut<($($argument,)*)> for Function
            where
                Function: FnMut($($argument),*) -> Return,
            {
                #[inline]
                fn invoke_mut(&mut self, ($([<$argument:lower>],)*): ($($argument,)*)) -> Return {
                    self($([<$argument:lower>]),*)
                }
            }

            impl<Function, Return, $($argument,)*> Invoke<($($argument,)*)> for Function
            where
                Function: Fn($($argument),*) -> Return,
            {
                #[inline]
                fn invoke(&self, ($([<$argument:lower>],)*): ($($argument,)*)) -> Return {
                    self($([<$argument:lower>]),*)
                }
            }
        }
    };
}

impl_invoke_for_functions!();
impl_invoke_for_functions!(A1);
impl_invoke_for_functions!(A1, A2);
impl_invoke_for_functions!(A1, A2, A3);
impl_invoke_for_functions!(A1, A2, A3, A4);
impl_invoke_for_functions!(A1, A2, A3, A4, A5);
impl_invoke_for_functions!(A1, A2, A3, A4, A5, A6);
impl_invoke_for_functions!(A1, A2, A3, A4, A5, A6, A7);
impl_invoke_for_functions!(A1, A2, A3, A4, A5, A6, A7, A8);

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn answer() -> i32 {
        42
    }

    #[rstest]
    fn nullary_function_is_invoked_with_unit() {
        assert_eq!(answer.invoke(()), 42);
    }

    #[rstest]
    #[case(1, 2, 3)]
    #[case(-4, 4, 0)]
    fn binary_closure_receives_arguments_in_order(
        #[case] lhs: i32,
        #[case] rhs: i32,
        #[case] expected: i32,
    ) {
        let add = |first: i32, second: i32| first + second;
        assert_eq!(add.invoke((lhs, rhs)), expected);
    }

    #[rstest]
    fn eight_arguments_are_supported() {
        let sum = |a: u8, b: u8, c: u8, d: u8, e: u8, f: u8, g: u8, h: u8| {
            u32::from(a) + u32::from(b) + u32::from(c) + u32::from(d)
                + u32::from(e) + u32::from(f) + u32::from(g) + u32::from(h)
        };
        assert_eq!(sum.invoke((1, 2, 3, 4, 5, 6, 7, 8)), 36);
    }

    #[rstest]
    fn mutable_closure_keeps_state_between_calls() {
        let mut total = 0;
        let mut accumulate = |value: i32| {
            total += value;
            total
        };
        accumulate.invoke_mut((1,));
        accumulate.invoke_mut((2,));
        assert_eq!(accumulate.invoke_mut((3,)), 6);
    }

    #[rstest]
    fn move_only_closure_is_consumed() {
        let owned = vec![1, 2, 3];
        let take = move |extra: i32| {
            let mut values = owned;
            values.push(extra);
            values
        };
        assert_eq!(take.invoke_once((4,)), vec![1, 2, 3, 4]);
    }

    #[rstest]
    fn tuple_results_are_not_spread() {
        let split = |value: i32| (value, -value);
        assert_eq!(split.invoke((5,)), (5, -5));
    }
}
