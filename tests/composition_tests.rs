//! Integration tests for building compositions.
//!
//! Covers pipe semantics, type-level flattening of repeated operators and the
//! agreement between `OperatorKind::flatten_policy` and the shapes the
//! operators actually build.

use std::any::type_name_of_val;

use closure_algebra::composition::{
    compose, conjunction, disjunction, equal, equivalent, not_equal, pipe,
};
use closure_algebra::prelude::*;
use closure_algebra::closure::PredicateCaps;
use closure_algebra::strategy::{Conjunction, Disjunction, Pipe};
use rstest::rstest;

// =============================================================================
// Pipe semantics
// =============================================================================

#[rstest]
fn test_pipe_feeds_left_result_into_right() {
    let add_42 = transform(|value: i32| value + 42);
    let triple = transform(|value: i32| value * 3);

    assert_eq!((add_42 | triple).invoke((1,)), 129);
    assert_eq!((triple | add_42).invoke((1,)), 45);
}

#[rstest]
fn test_pipe_changes_types_along_the_chain() {
    let parse = transform(|text: &str| text.len());
    let describe = transform(|length: usize| format!("{length} bytes"));

    assert_eq!((parse | describe).invoke(("four",)), "4 bytes");
}

#[rstest]
fn test_first_callable_of_a_pipe_may_take_several_arguments() {
    let add = transform(|lhs: i32, rhs: i32| lhs + rhs);
    let negate = transform(|value: i32| -value);

    assert_eq!((add | negate).invoke((2, 3)), -5);
}

// =============================================================================
// Flattening
// =============================================================================

#[rstest]
fn test_pipe_grouping_produces_one_flat_type() {
    let f = transform(|value: i32| value.wrapping_add(1));
    let g = transform(|value: i32| value.wrapping_mul(2));
    let h = transform(|value: i32| value.wrapping_sub(3));

    let left = (f | g) | h;
    let right = f | (g | h);

    assert_eq!(left.len(), 3);
    assert_eq!(right.len(), 3);
    assert_eq!(type_name_of_val(&left), type_name_of_val(&right));
    assert_eq!(left.invoke((10,)), right.invoke((10,)));
}

#[rstest]
fn test_long_chains_stay_flat() {
    let step = transform(|value: u64| value + 1);
    let chain = step | step | step | step | step | step;

    assert_eq!(chain.len(), 6);
    assert_eq!(chain.invoke((0,)), 6);
}

#[rstest]
fn test_mixed_operators_nest() {
    let positive = predicate(|value: i32| value > 0);
    let even = predicate(|value: i32| value % 2 == 0);
    let small = predicate(|value: i32| value < 10);

    let and_then_or = positive * even + small;
    assert_eq!(and_then_or.kind(), OperatorKind::Disjunction);
    assert_eq!(and_then_or.len(), 2);

    let or_inside_and = positive * (even + small);
    assert_eq!(or_inside_and.kind(), OperatorKind::Conjunction);
    assert_eq!(or_inside_and.len(), 2);

    assert!(and_then_or.invoke((-4,)));
    assert!(!or_inside_and.invoke((-4,)));
}

#[rstest]
fn test_free_functions_flatten_both_operands() {
    let step = transform(|value: i32| value + 1);
    let joined = pipe(step | step, step | step);

    assert_eq!(joined.len(), 4);
    assert_eq!(joined.invoke((0,)), 4);
}

#[rstest]
fn test_methods_keep_their_argument_whole() {
    let step = transform(|value: i32| value + 1);
    let kept = step.pipe(step | step);

    assert_eq!(kept.len(), 2);
    assert_eq!(kept.invoke((0,)), 3);
}

#[rstest]
fn test_lift_accepts_raw_closures_as_operands() {
    let is_positive = predicate(|value: i32| value > 0);
    let check = is_positive * lift(|value: i32| value % 5 == 0);

    assert_eq!(check.len(), 2);
    assert!(check.invoke((15,)));
    assert!(!check.invoke((-15,)));
}

#[rstest]
fn test_compose_accepts_any_joinable_strategy() {
    let small = predicate(|value: i32| value < 3);
    let large = predicate(|value: i32| value > 7);

    let either: Composition<Disjunction, _, PredicateCaps> = compose(small, large);
    assert!(either.invoke((9,)));
    assert!(!either.invoke((5,)));

    let both = compose::<Conjunction, PredicateCaps, _, _>(either, small);
    assert_eq!(both.len(), 2);
    assert!(both.invoke((1,)));
}

// =============================================================================
// Operator table consistency
// =============================================================================

#[rstest]
fn test_flatten_policy_matches_the_built_shapes() {
    let step = transform(|value: i32| value);
    let p = predicate(|value: i32| value > 0);
    let q = predicate(|value: i32| value < 10);
    let sum = transform(|first: i32, second: i32, third: i32| first + second + third);

    // Spliced: three chained operands end up in one list.
    let spliced = [
        (OperatorKind::Pipe, (step | step | step).len() == 3),
        (OperatorKind::Conjunction, (p * q * p).len() == 3),
        (OperatorKind::Disjunction, (p + q + p).len() == 3),
        (OperatorKind::BindFront, (sum << 1 << 2).len() == 3),
        (OperatorKind::BindBack, (sum >> 1 >> 2).len() == 3),
        (OperatorKind::Equal, equal(equal(p, q), p).len() == 3),
        (OperatorKind::NotEqual, not_equal(not_equal(p, q), p).len() == 3),
        (OperatorKind::Equivalent, equivalent(equivalent(p, q), p).len() == 3),
        (OperatorKind::Negation, type_name_of_val(&!!p) == type_name_of_val(&!p)),
    ];

    assert_eq!(spliced.len(), OperatorKind::ALL.len());
    for (kind, was_spliced) in spliced {
        assert_eq!(kind.flatten_policy().joins(), was_spliced, "{kind}");
    }
}

#[rstest]
fn test_conjunction_and_disjunction_free_functions() {
    let p = predicate(|value: i32| value > 0);
    let q = predicate(|value: i32| value < 10);

    assert_eq!(conjunction(p * q, p * q).len(), 4);
    assert_eq!(disjunction(p, p + q).len(), 3);
}

// =============================================================================
// Introspection
// =============================================================================

#[rstest]
fn test_composition_exposes_its_parts() {
    let step = transform(|value: i32| value + 1);
    let chain = step | step;

    let _: &Pipe = chain.strategy();
    assert_eq!(chain.kind(), OperatorKind::Pipe);
    assert_eq!(chain.flatten_policy(), FlattenPolicy::PreferJoin);

    let functions = chain.into_functions();
    assert_eq!(functions.head.invoke((1,)), 2);
    assert_eq!(functions.tail.head.invoke((2,)), 3);
}

#[rstest]
fn test_debug_output_summarizes_the_composition() {
    let check = predicate(|value: i32| value > 0) * predicate(|value: i32| value < 3);
    let rendered = format!("{check:?}");

    assert!(rendered.contains("Conjunction"));
    assert!(rendered.contains("len: 2"));
    assert!(rendered.contains("PredicateCaps"));
}
