//! Error types for the black76 library.
//!
//! All fallible operations return `Result<T, Black76Error>` rather than panicking.
//! A quote that no volatility can reproduce is reported as
//! [`Black76Error::NoSolution`], which is a legitimate answer about the input
//! and not a solver fault.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Convenience type alias for results in this crate.
pub type Result<T> = std::result::Result<T, Black76Error>;

/// Why an observed price has no implied volatility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NoSolutionReason {
    /// Price is below the discounted intrinsic value (no-arbitrage lower bound).
    BelowIntrinsic,
    /// Price is at or above the discounted forward, unreachable for any finite vol.
    AboveDiscountedForward,
    /// Bracket expansion hit its iteration cap or the objective stopped being finite.
    BracketNotFound,
}

impl fmt::Display for NoSolutionReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BelowIntrinsic => f.pad("price below discounted intrinsic value"),
            Self::AboveDiscountedForward => f.pad("price at or above discounted forward"),
            Self::BracketNotFound => f.pad("no volatility bracket found"),
        }
    }
}

/// Errors that can occur while pricing or inverting the Black-76 model.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Black76Error {
    /// Input data is invalid (e.g., non-positive forward, zero expiry, NaN rate).
    #[error("invalid input: {message}")]
    InvalidInput { message: String },

    /// No real volatility reproduces the observed price.
    #[error("no implied volatility: {reason} (price={price}, bound={bound})")]
    NoSolution {
        reason: NoSolutionReason,
        /// Observed price that was being inverted.
        price: f64,
        /// The bound that was violated, or the last bracket endpoint tried.
        bound: f64,
    },

    /// Bisection did not reach tolerance within its iteration cap.
    #[error("bisection failed to converge after {iterations} iterations in [{lo}, {hi}]")]
    ConvergenceFailed { iterations: usize, lo: f64, hi: f64 },
}

impl Black76Error {
    /// True for the "unquotable input" outcomes, as opposed to bad arguments
    /// or a numerical failure.
    pub fn is_no_solution(&self) -> bool {
        matches!(self, Self::NoSolution { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_solution_fields_accessible() {
        let err = Black76Error::NoSolution {
            reason: NoSolutionReason::BelowIntrinsic,
            price: 1.0,
            bound: 2.5,
        };
        match &err {
            Black76Error::NoSolution {
                reason,
                price,
                bound,
            } => {
                assert_eq!(*reason, NoSolutionReason::BelowIntrinsic);
                assert_eq!(*price, 1.0);
                assert_eq!(*bound, 2.5);
            }
            _ => panic!("wrong variant"),
        }
        assert!(err.is_no_solution());
    }

    #[test]
    fn convergence_failed_is_not_no_solution() {
        let err = Black76Error::ConvergenceFailed {
            iterations: 100,
            lo: 0.1,
            hi: 0.2,
        };
        assert!(!err.is_no_solution());
    }

    #[test]
    fn error_display_includes_message() {
        let err = Black76Error::InvalidInput {
            message: "strike must be positive".into(),
        };
        assert!(format!("{err}").contains("strike must be positive"));

        let err2 = Black76Error::NoSolution {
            reason: NoSolutionReason::AboveDiscountedForward,
            price: 120.0,
            bound: 99.0,
        };
        let display = format!("{err2}");
        assert!(display.contains("discounted forward"));
        assert!(display.contains("120"));

        let err3 = Black76Error::ConvergenceFailed {
            iterations: 7,
            lo: 0.0,
            hi: 1.0,
        };
        assert!(format!("{err3}").contains("7 iterations"));
    }

    #[test]
    fn reason_display_is_distinct() {
        let a = NoSolutionReason::BelowIntrinsic.to_string();
        let b = NoSolutionReason::AboveDiscountedForward.to_string();
        let c = NoSolutionReason::BracketNotFound.to_string();
        assert_ne!(a, b);
        assert_ne!(b, c);
        assert_ne!(a, c);
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Black76Error>();
    }
}
