//! Internal root-finding utilities for implied volatility inversion.
//!
//! Two pieces: a geometric bracket search that halves then doubles a trial
//! point until it straddles the target, and a bisection root-finder on the
//! resulting interval.

use crate::error::Black76Error;

/// Configuration for bracket expansion.
pub(crate) struct BracketConfig {
    /// Starting trial point for the upper end of the bracket.
    pub initial: f64,
    /// Maximum number of halvings, and separately of doublings.
    pub max_iter: usize,
}

/// An interval `[lo, hi]` with `objective(lo) ≤ target ≤ objective(hi)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Bracket {
    pub lo: f64,
    pub hi: f64,
}

/// Bracket search gave up: iteration cap, or the objective left the finite range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct BracketExhausted {
    /// Last trial point evaluated.
    pub last: f64,
}

/// Configuration for bisection.
pub(crate) struct BisectConfig {
    /// Absolute tolerance on the root.
    pub xtol: f64,
    /// Relative tolerance on the root.
    pub rtol: f64,
    /// Maximum number of bisection steps.
    pub max_iter: usize,
}

/// Find `[hi/2, hi]` bracketing `target` for a non-decreasing `objective`.
///
/// Starting at `config.initial`, halve `hi` while `objective(hi) > target`,
/// then double it while `objective(hi) < target`. Each phase is capped at
/// `config.max_iter` steps so plateaus and non-monotone inputs terminate.
pub(crate) fn expand_bracket<F>(
    objective: F,
    target: f64,
    config: &BracketConfig,
) -> Result<Bracket, BracketExhausted>
where
    F: Fn(f64) -> f64,
{
    let mut hi = config.initial;

    let mut value = objective(hi);
    let mut steps = 0;
    while value > target {
        if steps == config.max_iter {
            return Err(BracketExhausted { last: hi });
        }
        hi *= 0.5;
        value = objective(hi);
        steps += 1;
    }

    steps = 0;
    while value < target {
        if steps == config.max_iter || !hi.is_finite() {
            return Err(BracketExhausted { last: hi });
        }
        hi *= 2.0;
        value = objective(hi);
        steps += 1;
    }

    // NaN fails both loop conditions.
    if !value.is_finite() || hi <= 0.0 || !hi.is_finite() {
        return Err(BracketExhausted { last: hi });
    }

    Ok(Bracket { lo: hi * 0.5, hi })
}

/// Find a root of `f` in `[a, b]` by bisection.
///
/// `f(a)` and `f(b)` must not share a strict sign. Stops when `f(mid) == 0`
/// or when the half-width drops below `xtol + rtol·|mid|`.
///
/// # Errors
/// Returns [`Black76Error::InvalidInput`] if the endpoints do not bracket a root and
/// [`Black76Error::ConvergenceFailed`] if `max_iter` is exhausted.
pub(crate) fn bisect<F>(f: F, a: f64, b: f64, config: &BisectConfig) -> crate::error::Result<f64>
where
    F: Fn(f64) -> f64,
{
    let fa = f(a);
    let fb = f(b);
    if fa * fb > 0.0 || fa.is_nan() || fb.is_nan() {
        return Err(Black76Error::InvalidInput {
            message: format!(
                "f(a) and f(b) must have different signs, got f({a})={fa}, f({b})={fb}"
            ),
        });
    }
    if fa == 0.0 {
        return Ok(a);
    }
    if fb == 0.0 {
        return Ok(b);
    }

    let mut xa = a;
    let mut dm = b - a;
    for _ in 0..config.max_iter {
        dm *= 0.5;
        let xm = xa + dm;
        let fm = f(xm);
        if fm * fa >= 0.0 {
            xa = xm;
        }
        if fm == 0.0 || dm.abs() < config.xtol + config.rtol * xm.abs() {
            return Ok(xm);
        }
    }

    Err(Black76Error::ConvergenceFailed {
        iterations: config.max_iter,
        lo: xa,
        hi: xa + dm,
    })
}
