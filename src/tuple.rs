//! Tuple plumbing for argument packs.
//!
//! Arguments travel as tuples, so currying needs to grow a tuple one element
//! at a time ([`Push`]) and to join two argument packs ([`Concat`]). Both
//! work for tuples of up to eight elements.
//!
//! # Examples
//!
//! ```rust
//! use closure_algebra::tuple::{Concat, Push};
//!
//! assert_eq!((1, 2).push(3), (1, 2, 3));
//! assert_eq!((1,).concat(("two", 3.0)), (1, "two", 3.0));
//! assert_eq!(().concat(()), ());
//! ```

/// Appends one element at the end of a tuple.
pub trait Push<Item> {
    /// The tuple with `Item` appended.
    type Output;

    /// Appends `item` after the existing elements.
    fn push(self, item: Item) -> Self::Output;
}

/// Moves the elements of `Self` behind the elements of `Lhs`.
///
/// This is the building block of [`Concat`]; it is implemented on the right
/// operand so each arity needs exactly one implementation.
pub trait AppendTo<Lhs> {
    /// The joined tuple.
    type Output;

    /// Returns `lhs` followed by the elements of `self`.
    fn append_to(self, lhs: Lhs) -> Self::Output;
}

/// Concatenation of two tuples.
pub trait Concat<Rhs> {
    /// The joined tuple.
    type Output;

    /// Returns the elements of `self` followed by the elements of `rhs`.
    fn concat(self, rhs: Rhs) -> Self::Output;
}

impl<Lhs, Rhs> Concat<Rhs> for Lhs
where
    Rhs: AppendTo<Lhs>,
{
    type Output = Rhs::Output;

    #[inline]
    fn concat(self, rhs: Rhs) -> Self::Output {
        rhs.append_to(self)
    }
}

macro_rules! impl_push {
    ($($element:ident),*) => {
        paste::paste! {
            impl<$($element,)* Item> Push<Item> for ($($element,)*) {
                type Output = ($($element,)* Item,);

                #[inline]
                fn push(self, item: Item) -> Self::Output {
                    let ($([<$element:lower>],)*) = self;
                    ($([<$element:lower>],)* item,)
                }
            }
        }
    };
}

impl_push!();
impl_push!(A1);
impl_push!(A1, A2);
impl_push!(A1, A2, A3);
impl_push!(A1, A2, A3, A4);
impl_push!(A1, A2, A3, A4, A5);
impl_push!(A1, A2, A3, A4, A5, A6);
impl_push!(A1, A2, A3, A4, A5, A6, A7);

impl<Lhs> AppendTo<Lhs> for () {
    type Output = Lhs;

    #[inline]
    fn append_to(self, lhs: Lhs) -> Lhs {
        lhs
    }
}

macro_rules! impl_append_to {
    ($first:ident $(, $rest:ident)*) => {
        paste::paste! {
            impl<Lhs, $first, $($rest,)*> AppendTo<Lhs> for ($first, $($rest,)*)
            where
                Lhs: Push<$first>,
                ($($rest,)*): AppendTo<<Lhs as Push<$first>>::Output>,
            {
                type Output = <($($rest,)*) as AppendTo<<Lhs as Push<$first>>::Output>>::Output;

                #[inline]
                fn append_to(self, lhs: Lhs) -> Self::Output {
                    let ([<$first:lower>], $([<$rest:lower>],)*) = self;
                    ($([<$rest:lower>],)*).append_to(lhs.push([<$first:lower>]))
                }
            }
        }
    };
}

impl_append_to!(B1);
impl_append_to!(B1, B2);
impl_append_to!(B1, B2, B3);
impl_append_to!(B1, B2, B3, B4);
impl_append_to!(B1, B2, B3, B4, B5);
impl_append_to!(B1, B2, B3, B4, B5, B6);
impl_append_to!(B1, B2, B3, B4, B5, B6, B7);
impl_append_to!(B1, B2, B3, B4, B5, B6, B7, B8);

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn push_onto_unit_makes_a_single() {
        assert_eq!(().push('x'), ('x',));
    }

    #[rstest]
    fn push_fills_up_to_eight_elements() {
        let full = (1, 2, 3, 4, 5, 6, 7).push(8);
        assert_eq!(full, (1, 2, 3, 4, 5, 6, 7, 8));
    }

    #[rstest]
    fn concat_keeps_both_orders() {
        assert_eq!((1, 2).concat((3, 4)), (1, 2, 3, 4));
        assert_eq!((3, 4).concat((1, 2)), (3, 4, 1, 2));
    }

    #[rstest]
    fn concat_with_unit_is_identity() {
        assert_eq!(("a", 'b').concat(()), ("a", 'b'));
        assert_eq!(().concat(("a", 'b')), ("a", 'b'));
    }

    #[rstest]
    fn concat_mixes_element_types() {
        let joined = (String::from("front"),).concat((1_u8, [2_u8; 2]));
        assert_eq!(joined, (String::from("front"), 1_u8, [2_u8; 2]));
    }
}
