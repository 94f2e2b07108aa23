//! Solver tunables.

use serde::{Deserialize, Serialize};

use crate::error::{self, Black76Error};
use crate::optim::{BisectConfig, BracketConfig};
use crate::validate::{validate_non_negative, validate_positive};

/// Configuration for [`BlackImpliedVol`](super::BlackImpliedVol).
///
/// The defaults reproduce the classic bracket-then-bisect setup: first trial
/// vol of 20%, bisection to `2e-12 + 4ε·|σ|`, at most 100 bisection steps.
///
/// Missing fields fall back to their defaults when deserializing:
/// ```
/// use black76::SolverConfig;
/// let cfg: SolverConfig = serde_json::from_str(r#"{"xtol": 1e-10}"#).unwrap();
/// assert_eq!(cfg.xtol, 1e-10);
/// assert_eq!(cfg.initial_vol, 0.2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverConfig {
    /// Starting upper bracket endpoint.
    pub initial_vol: f64,
    /// Cap on halvings and, separately, on doublings during bracket search.
    ///
    /// The default spans the whole `f64` exponent range from the initial vol.
    pub max_bracket_iter: usize,
    /// Absolute tolerance on the solved volatility.
    pub xtol: f64,
    /// Relative tolerance on the solved volatility.
    pub rtol: f64,
    /// Cap on bisection steps.
    pub max_bisect_iter: usize,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            initial_vol: 0.2,
            max_bracket_iter: 1100,
            xtol: 2e-12,
            rtol: 4.0 * f64::EPSILON,
            max_bisect_iter: 100,
        }
    }
}

impl SolverConfig {
    /// Check that the tunables describe a usable solver.
    ///
    /// # Errors
    /// Returns [`Black76Error::InvalidInput`] for a non-positive initial vol,
    /// negative or non-finite tolerances, or zero iteration caps.
    pub fn validate(&self) -> error::Result<()> {
        validate_positive(self.initial_vol, "initial_vol")?;
        validate_non_negative(self.xtol, "xtol")?;
        validate_non_negative(self.rtol, "rtol")?;
        if self.max_bracket_iter == 0 {
            return Err(Black76Error::InvalidInput {
                message: "max_bracket_iter must be at least 1".into(),
            });
        }
        if self.max_bisect_iter == 0 {
            return Err(Black76Error::InvalidInput {
                message: "max_bisect_iter must be at least 1".into(),
            });
        }
        Ok(())
    }

    pub(crate) fn bracket(&self) -> BracketConfig {
        BracketConfig {
            initial: self.initial_vol,
            max_iter: self.max_bracket_iter,
        }
    }

    pub(crate) fn bisect(&self) -> BisectConfig {
        BisectConfig {
            xtol: self.xtol,
            rtol: self.rtol,
            max_iter: self.max_bisect_iter,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        assert!(SolverConfig::default().validate().is_ok());
    }

    #[test]
    fn rejects_zero_initial_vol() {
        let cfg = SolverConfig {
            initial_vol: 0.0,
            ..SolverConfig::default()
        };
        assert!(matches!(cfg.validate(), Err(Black76Error::InvalidInput { .. })));
    }

    #[test]
    fn rejects_negative_tolerance() {
        let cfg = SolverConfig {
            xtol: -1e-12,
            ..SolverConfig::default()
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn rejects_zero_iteration_caps() {
        let cfg = SolverConfig {
            max_bracket_iter: 0,
            ..SolverConfig::default()
        };
        assert!(cfg.validate().is_err());
        let cfg = SolverConfig {
            max_bisect_iter: 0,
            ..SolverConfig::default()
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn serde_roundtrip() {
        let cfg = SolverConfig {
            max_bisect_iter: 60,
            ..SolverConfig::default()
        };
        let json = serde_json::to_string(&cfg).unwrap();
        let cfg2: SolverConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(cfg, cfg2);
    }

    #[test]
    fn serde_empty_object_is_default() {
        let cfg: SolverConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(cfg, SolverConfig::default());
    }
}
