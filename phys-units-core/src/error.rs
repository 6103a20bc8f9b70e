//! Error types.
//!
//! Dimensional errors are compile errors; the only run-time failures are text lookups.

use thiserror::Error;

/// Result alias for fallible operations of this crate.
pub type Result<T> = core::result::Result<T, QuantityError>;

/// Run-time errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QuantityError {
    /// The text is not one of the SI prefixes.
    #[error("quantity: unrecognized prefix '{prefix}'")]
    UnrecognizedPrefix {
        /// The rejected prefix.
        prefix: String,
    },

    /// A serialized quantity carries a unit symbol that does not match its dimension.
    #[error("unit mismatch: expected '{expected}', found '{found}'")]
    UnitMismatch {
        /// Symbol of the target dimension.
        expected: String,
        /// Symbol found in the input.
        found: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        let err = QuantityError::UnrecognizedPrefix { prefix: "x".into() };
        assert_eq!(err.to_string(), "quantity: unrecognized prefix 'x'");
        let err = QuantityError::UnitMismatch {
            expected: "N".into(),
            found: "J".into(),
        };
        assert_eq!(err.to_string(), "unit mismatch: expected 'N', found 'J'");
    }
}
