//! The closed set of composition operators and their flattening rules.
//!
//! Every strategy reports which operator it implements through
//! [`Strategy::KIND`](crate::strategy::Strategy::KIND). Whether two adjacent
//! compositions may be spliced into one is decided by the operator's
//! [`FlattenPolicy`]:
//!
//! | Operator | Rust spelling | Policy |
//! |---|---|---|
//! | pipe | `f \| g` | prefer-join |
//! | conjunction | `p * q` | join |
//! | disjunction | `p + q` | join |
//! | bind front | `f << v` | prefer-join |
//! | bind back | `f >> v` | prefer-join |
//! | equal | `p.equal(q)` | join |
//! | not equal | `p.not_equal(q)` | nested-only |
//! | equivalent | `p.equivalent(q)` | join |
//! | negation | `!p` | nested-only |
//!
//! The type-level joining rules in [`composition`](crate::composition) are
//! generated from the same table, and the crate's tests check that both agree.

use std::fmt;
use std::str::FromStr;

use crate::error::ParseOperatorKindError;

/// How repeated application of one operator is represented.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum FlattenPolicy {
    /// Associative operators: `(a op b) op c` is one list `[a, b, c]`.
    Join,
    /// Operators that join whenever both sides share the operator, but where
    /// nesting would still be meaningful (pipe and currying).
    PreferJoin,
    /// Operators that never join: every application is a new level.
    NestedOnly,
}

impl FlattenPolicy {
    /// Returns `true` if compositions of this operator are spliced together.
    #[inline]
    pub const fn joins(self) -> bool {
        matches!(self, Self::Join | Self::PreferJoin)
    }
}

/// Identity of a composition operator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum OperatorKind {
    /// Sequential composition: the result of one callable feeds the next.
    Pipe,
    /// Short-circuit logical AND over predicates.
    Conjunction,
    /// Short-circuit logical OR over predicates.
    Disjunction,
    /// Binds values in front of the call arguments.
    BindFront,
    /// Binds values behind the call arguments.
    BindBack,
    /// Every result equals the first one.
    Equal,
    /// The two results differ.
    NotEqual,
    /// Every result is ordered equal to the first one.
    Equivalent,
    /// Logical complement of a predicate.
    Negation,
}

impl OperatorKind {
    /// Every operator, in declaration order.
    pub const ALL: [Self; 9] = [
        Self::Pipe,
        Self::Conjunction,
        Self::Disjunction,
        Self::BindFront,
        Self::BindBack,
        Self::Equal,
        Self::NotEqual,
        Self::Equivalent,
        Self::Negation,
    ];

    /// Returns how repeated applications of this operator are represented.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use closure_algebra::operator::{FlattenPolicy, OperatorKind};
    ///
    /// assert_eq!(OperatorKind::Conjunction.flatten_policy(), FlattenPolicy::Join);
    /// assert!(!OperatorKind::NotEqual.flatten_policy().joins());
    /// ```
    pub const fn flatten_policy(self) -> FlattenPolicy {
        match self {
            Self::Conjunction | Self::Disjunction | Self::Equal | Self::Equivalent => {
                FlattenPolicy::Join
            }
            Self::Pipe | Self::BindFront | Self::BindBack => FlattenPolicy::PreferJoin,
            Self::NotEqual | Self::Negation => FlattenPolicy::NestedOnly,
        }
    }

    /// The snake-case name of the operator, as used by [`Display`](fmt::Display).
    pub const fn name(self) -> &'static str {
        match self {
            Self::Pipe => "pipe",
            Self::Conjunction => "conjunction",
            Self::Disjunction => "disjunction",
            Self::BindFront => "bind_front",
            Self::BindBack => "bind_back",
            Self::Equal => "equal",
            Self::NotEqual => "not_equal",
            Self::Equivalent => "equivalent",
            Self::Negation => "negation",
        }
    }

    /// The Rust operator token, if the operator has one.
    ///
    /// Equality operators are methods because Rust's comparison operators
    /// must return `bool`.
    pub const fn symbol(self) -> Option<&'static str> {
        match self {
            Self::Pipe => Some("|"),
            Self::Conjunction => Some("*"),
            Self::Disjunction => Some("+"),
            Self::BindFront => Some("<<"),
            Self::BindBack => Some(">>"),
            Self::Negation => Some("!"),
            Self::Equal | Self::NotEqual | Self::Equivalent => None,
        }
    }

    /// Returns `true` for operators taking a single operand.
    pub const fn is_unary(self) -> bool {
        matches!(self, Self::Negation)
    }

    /// Returns `true` for operators whose compositions produce `bool`.
    pub const fn is_boolean(self) -> bool {
        matches!(
            self,
            Self::Conjunction
                | Self::Disjunction
                | Self::Equal
                | Self::NotEqual
                | Self::Equivalent
                | Self::Negation
        )
    }
}

impl fmt::Display for OperatorKind {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.name())
    }
}

impl FromStr for OperatorKind {
    type Err = ParseOperatorKindError;

    /// Parses an operator from its name or its Rust symbol.
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let trimmed = input.trim();
        Self::ALL
            .into_iter()
            .find(|kind| kind.name() == trimmed || kind.symbol() == Some(trimmed))
            .ok_or_else(|| ParseOperatorKindError::new(input))
    }
}

#[cfg(feature = "tracing")]
pub(crate) fn trace_build(kind: OperatorKind, lhs_len: usize, rhs_len: usize, len: usize) {
    tracing::trace!(operator = %kind, lhs_len, rhs_len, len, "built composition");
}

#[cfg(not(feature = "tracing"))]
#[inline]
pub(crate) const fn trace_build(_kind: OperatorKind, _lhs_len: usize, _rhs_len: usize, _len: usize) {}
