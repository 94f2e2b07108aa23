//! Black-76 implied volatility via bracket expansion and bisection.
//!
//! # Algorithm
//! 1. Reject prices below the discounted intrinsic value; return exactly zero
//!    at that bound; reject prices at or above the discounted forward.
//! 2. Starting from `σ = 0.2`, halve while the model price is too high, then
//!    double while it is too low. The last doubling gives `[σ/2, σ]`.
//! 3. Bisect `price(σ) − observed` on that interval.
//!
//! The model price is non-decreasing in `σ`, so step 2 terminates for every
//! reachable quote. Quotes that pass step 1 but lie above the model's
//! supremum hit the bracket iteration cap and are reported as
//! [`NoSolutionReason::BracketNotFound`].

use crate::conventions::discounted_forward;
use crate::error::{self, Black76Error, NoSolutionReason};
use crate::implied::SolverConfig;
use crate::optim::{bisect, expand_bracket};
use crate::pricer;
use crate::types::{Contract, OptionType, Vol};

/// Black-76 implied volatility calculator.
///
/// Holds a [`SolverConfig`]; the solver itself is stateless, so one instance
/// can be shared across threads.
#[derive(Debug, Clone, Default)]
pub struct BlackImpliedVol {
    config: SolverConfig,
}

impl BlackImpliedVol {
    /// Calculator with the default [`SolverConfig`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Calculator with custom tunables.
    ///
    /// # Errors
    /// Returns [`Black76Error::InvalidInput`] if `config` fails
    /// [`SolverConfig::validate`].
    pub fn with_config(config: SolverConfig) -> error::Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Compute Black-76 implied volatility with the default configuration.
    ///
    /// # Arguments
    /// * `option_type` — Call or Put
    /// * `option_price` — Observed premium
    /// * `forward` — Forward price at expiry (must be > 0)
    /// * `risk_free` — Continuously-compounded discount rate
    /// * `strike` — Strike price (must be > 0)
    /// * `expiry` — Time to expiry in years (must be > 0)
    ///
    /// Inputs are not validated; use [`Contract`] and
    /// [`solve_contract`](Self::solve_contract) for checked parameters.
    ///
    /// # Errors
    /// Returns [`Black76Error::NoSolution`] when no volatility reproduces the
    /// price, [`Black76Error::InvalidInput`] for a NaN price, and
    /// [`Black76Error::ConvergenceFailed`] if bisection exhausts its cap.
    ///
    /// # Examples
    /// ```
    /// use black76::implied::BlackImpliedVol;
    /// use black76::OptionType;
    ///
    /// let vol = BlackImpliedVol::compute(
    ///     OptionType::Call, 33.3, 1132.759389, 0.02, 1100.0, 4.0 / 252.0,
    /// ).unwrap();
    /// assert!((vol.0 - 0.299_327_747_743).abs() < 1e-9);
    /// ```
    pub fn compute(
        option_type: OptionType,
        option_price: f64,
        forward: f64,
        risk_free: f64,
        strike: f64,
        expiry: f64,
    ) -> error::Result<Vol> {
        Self::default().solve(option_type, option_price, forward, risk_free, strike, expiry)
    }

    /// Solve for the volatility that reprices `option_price`.
    ///
    /// Same contract as [`compute`](Self::compute), using this instance's
    /// configuration.
    pub fn solve(
        &self,
        option_type: OptionType,
        option_price: f64,
        forward: f64,
        risk_free: f64,
        strike: f64,
        expiry: f64,
    ) -> error::Result<Vol> {
        #[cfg(feature = "logging")]
        tracing::debug!(
            ?option_type,
            option_price,
            forward,
            risk_free,
            strike,
            expiry,
            "implied vol solve started"
        );

        if option_price.is_nan() {
            return Err(Black76Error::InvalidInput {
                message: "option price must not be NaN".into(),
            });
        }

        let lower_bound = pricer::lower_bound(option_type, forward, risk_free, expiry, strike);
        if option_price < lower_bound {
            return Err(no_solution(
                NoSolutionReason::BelowIntrinsic,
                option_price,
                lower_bound,
            ));
        }
        if option_price == lower_bound {
            return Ok(Vol(0.0));
        }
        let upper_bound = discounted_forward(forward, risk_free, expiry);
        if option_price >= upper_bound {
            return Err(no_solution(
                NoSolutionReason::AboveDiscountedForward,
                option_price,
                upper_bound,
            ));
        }

        let objective =
            |vol: f64| pricer::price(option_type, vol, forward, risk_free, expiry, strike);

        let bracket = expand_bracket(objective, option_price, &self.config.bracket())
            .map_err(|exhausted| {
                no_solution(NoSolutionReason::BracketNotFound, option_price, exhausted.last)
            })?;

        #[cfg(feature = "logging")]
        tracing::debug!(lo = bracket.lo, hi = bracket.hi, "vol bracket found");

        let vol = bisect(
            |v| objective(v) - option_price,
            bracket.lo,
            bracket.hi,
            &self.config.bisect(),
        )?;

        #[cfg(feature = "logging")]
        tracing::debug!(vol, "implied vol solve complete");

        Ok(Vol(vol))
    }

    /// Solve against a validated [`Contract`].
    pub fn solve_contract(
        &self,
        option_type: OptionType,
        option_price: f64,
        contract: &Contract,
    ) -> error::Result<Vol> {
        self.solve(
            option_type,
            option_price,
            contract.forward(),
            contract.risk_free(),
            contract.strike(),
            contract.expiry(),
        )
    }
}

fn no_solution(reason: NoSolutionReason, price: f64, bound: f64) -> Black76Error {
    #[cfg(feature = "logging")]
    tracing::debug!(%reason, price, bound, "no implied vol");

    Black76Error::NoSolution {
        reason,
        price,
        bound,
    }
}

/// Implied volatility as a plain number.
///
/// Returns `0.0` for a price exactly at the discounted intrinsic value and
/// `f64::NAN` whenever [`BlackImpliedVol::compute`] would return an error.
/// Treat NaN as "unquotable input", not as a solver failure.
///
/// # Examples
/// ```
/// use black76::{implied_volatility, OptionType};
///
/// let vol = implied_volatility(OptionType::Put, 0.325, 1132.759389, 0.02, 1050.0, 4.0 / 365.0);
/// assert!(vol > 0.0);
///
/// // A call can never be worth more than the discounted forward.
/// assert!(implied_volatility(OptionType::Call, 2000.0, 1132.759389, 0.02, 1100.0, 0.5).is_nan());
/// ```
pub fn implied_volatility(
    option_type: OptionType,
    observed_price: f64,
    forward: f64,
    risk_free: f64,
    strike: f64,
    expiry: f64,
) -> f64 {
    BlackImpliedVol::compute(option_type, observed_price, forward, risk_free, strike, expiry)
        .map_or(f64::NAN, |v| v.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    const F: f64 = 1132.759389;
    const R: f64 = 0.02;

    #[test]
    fn reference_call_quote() {
        let t = 4.0 / 252.0;
        let vol = BlackImpliedVol::compute(OptionType::Call, 33.3, F, R, 1100.0, t).unwrap();
        assert_abs_diff_eq!(vol.0, 0.299_327_747_743_371, epsilon = 1e-9);
        let reprice = pricer::price(OptionType::Call, vol.0, F, R, t, 1100.0);
        assert_abs_diff_eq!(reprice, 33.3, epsilon = 1e-8);
    }

    #[test]
    fn reference_put_quote() {
        let t = 4.0 / 365.0;
        let vol = BlackImpliedVol::compute(OptionType::Put, 0.325, F, R, 1050.0, t).unwrap();
        assert_abs_diff_eq!(vol.0, 0.894_686_256_762_692, epsilon = 1e-9);
        let reprice = pricer::price(OptionType::Put, vol.0, F, R, t, 1050.0);
        assert_abs_diff_eq!(reprice, 0.325, epsilon = 1e-8);
    }

    #[test]
    fn round_trip_across_strikes() {
        let (f, r, t) = (100.0, 0.03, 0.5);
        for &vol in &[0.4, 0.8, 1.5, 3.0] {
            for &k in &[90.0, 100.0, 110.0] {
                for option_type in [OptionType::Call, OptionType::Put] {
                    let p = pricer::price(option_type, vol, f, r, t, k);
                    let lb = pricer::lower_bound(option_type, f, r, t, k);
                    if p <= lb {
                        continue;
                    }
                    let iv = BlackImpliedVol::compute(option_type, p, f, r, k, t).unwrap();
                    assert_abs_diff_eq!(iv.0, vol, epsilon = 1e-8);
                }
            }
        }
    }

    #[test]
    fn exact_lower_bound_returns_zero() {
        let (f, r, t, k) = (110.0, 0.05, 1.0, 100.0);
        let lb = pricer::lower_bound(OptionType::Call, f, r, t, k);
        let vol = BlackImpliedVol::compute(OptionType::Call, lb, f, r, k, t).unwrap();
        assert_eq!(vol.0, 0.0);
    }

    #[test]
    fn zero_price_otm_returns_zero() {
        assert_eq!(implied_volatility(OptionType::Call, 0.0, 100.0, 0.01, 120.0, 1.0), 0.0);
        assert_eq!(implied_volatility(OptionType::Put, 0.0, 100.0, 0.01, 80.0, 1.0), 0.0);
    }

    #[test]
    fn below_intrinsic_is_no_solution() {
        let (f, r, t, k) = (110.0, 0.05, 1.0, 100.0);
        let res = BlackImpliedVol::compute(OptionType::Call, 5.0, f, r, k, t);
        match res {
            Err(Black76Error::NoSolution { reason, bound, .. }) => {
                assert_eq!(reason, NoSolutionReason::BelowIntrinsic);
                assert_abs_diff_eq!(bound, 10.0 * (-0.05_f64).exp(), epsilon = 1e-12);
            }
            other => panic!("expected NoSolution, got {other:?}"),
        }
    }

    #[test]
    fn negative_price_is_no_solution() {
        assert!(implied_volatility(OptionType::Put, -0.01, 100.0, 0.0, 90.0, 1.0).is_nan());
    }

    #[test]
    fn at_discounted_forward_is_no_solution() {
        let (f, r, t, k) = (100.0, 0.05, 1.0, 100.0);
        let df = discounted_forward(f, r, t);
        let res = BlackImpliedVol::compute(OptionType::Call, df, f, r, k, t);
        assert!(matches!(
            res,
            Err(Black76Error::NoSolution {
                reason: NoSolutionReason::AboveDiscountedForward,
                ..
            })
        ));
        assert!(implied_volatility(OptionType::Put, df + 1.0, f, r, k, t).is_nan());
    }

    #[test]
    fn unreachable_price_hits_bracket_cap() {
        // ATM the call tends to F·Φ(0)·e^{-rT} = 50, below the discounted forward of 100.
        let res = BlackImpliedVol::compute(OptionType::Call, 60.0, 100.0, 0.0, 100.0, 1.0);
        assert!(matches!(
            res,
            Err(Black76Error::NoSolution {
                reason: NoSolutionReason::BracketNotFound,
                ..
            })
        ));
    }

    #[test]
    fn small_bracket_cap_gives_up_early() {
        let cfg = SolverConfig {
            max_bracket_iter: 2,
            ..SolverConfig::default()
        };
        let solver = BlackImpliedVol::with_config(cfg).unwrap();
        let p = pricer::price(OptionType::Call, 4.0, 100.0, 0.0, 1.0, 100.0);
        // Reaching σ = 4 from 0.2 needs five doublings.
        let res = solver.solve(OptionType::Call, p, 100.0, 0.0, 100.0, 1.0);
        assert!(res.is_err());
    }

    #[test]
    fn nan_price_is_invalid_input() {
        let res = BlackImpliedVol::compute(OptionType::Call, f64::NAN, 100.0, 0.0, 100.0, 1.0);
        assert!(matches!(res, Err(Black76Error::InvalidInput { .. })));
    }

    #[test]
    fn nan_forward_does_not_panic() {
        assert!(implied_volatility(OptionType::Call, 1.0, f64::NAN, 0.0, 100.0, 1.0).is_nan());
    }

    #[test]
    fn with_config_rejects_invalid() {
        let cfg = SolverConfig {
            initial_vol: -1.0,
            ..SolverConfig::default()
        };
        assert!(BlackImpliedVol::with_config(cfg).is_err());
    }

    #[test]
    fn looser_tolerance_still_close() {
        let cfg = SolverConfig {
            xtol: 1e-4,
            ..SolverConfig::default()
        };
        let solver = BlackImpliedVol::with_config(cfg).unwrap();
        let p = pricer::price(OptionType::Put, 0.35, 100.0, 0.01, 0.25, 105.0);
        let vol = solver.solve(OptionType::Put, p, 100.0, 0.01, 105.0, 0.25).unwrap();
        assert_abs_diff_eq!(vol.0, 0.35, epsilon = 1e-4);
    }

    #[test]
    fn solve_contract_matches_free_form() {
        let c = Contract::new(F, R, 4.0 / 252.0, 1100.0).unwrap();
        let solver = BlackImpliedVol::new();
        let a = solver.solve_contract(OptionType::Call, 33.3, &c).unwrap();
        let b = solver.solve(OptionType::Call, 33.3, F, R, 1100.0, 4.0 / 252.0).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn solver_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<BlackImpliedVol>();
    }
}
