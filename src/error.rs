//! Error types of the crate.
//!
//! Composition itself cannot fail at run time: misuse is rejected by the
//! compiler, and failures of the wrapped callables pass through untouched.
//! The only fallible operation is parsing an
//! [`OperatorKind`](crate::operator::OperatorKind) from text.

/// Returned when a string names no known operator.
///
/// # Examples
///
/// ```rust
/// use closure_algebra::operator::OperatorKind;
///
/// let error = "xor".parse::<OperatorKind>().unwrap_err();
/// assert_eq!(error.input(), "xor");
/// assert_eq!(
///     format!("{error}"),
///     "unknown operator `xor`: expected a symbol such as `|` or a name such as `pipe`"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseOperatorKindError {
    input: String,
}

impl ParseOperatorKindError {
    pub(crate) fn new(input: &str) -> Self {
        Self {
            input: input.to_owned(),
        }
    }

    /// The rejected input.
    pub fn input(&self) -> &str {
        &self.input
    }
}

impl std::fmt::Display for ParseOperatorKindError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            formatter,
            "unknown operator `{}`: expected a symbol such as `|` or a name such as `pipe`",
            self.input
        )
    }
}

impl std::error::Error for ParseOperatorKindError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_quotes_the_input() {
        let error = ParseOperatorKindError::new("&&");
        assert_eq!(
            format!("{error}"),
            "unknown operator `&&`: expected a symbol such as `|` or a name such as `pipe`"
        );
    }

    #[test]
    fn test_is_std_error() {
        let error: Box<dyn std::error::Error> = Box::new(ParseOperatorKindError::new(""));
        assert!(error.source().is_none());
    }
}
