//! Black-76 pricing of European options on a forward.
//!
//! # Formula
//! ```text
//! sd = σ·√T
//! d1 = ln(F / K)
//! d2 = d1 − sd
//! C  = e^{−rT}·(F·Φ(d1) − K·Φ(d2))
//! P  = e^{−rT}·(K·Φ(−d2) − F·Φ(−d1))
//! ```
//!
//! `d1` is the raw log-moneyness and is not scaled by `1/sd` as in the
//! textbook Black-76 form. Prices from this module are what the implied
//! volatility solver inverts, so the two must stay in lockstep.
//!
//! Put-call parity `C − P = e^{−rT}·(F − K)` holds for every `σ`, and both
//! prices are non-decreasing in `σ ≥ 0`.
//!
//! None of these functions validate their inputs: non-positive forward,
//! strike or expiry propagate as NaN through the arithmetic.

use statrs::function::erf::erfc;

use crate::conventions::{discount_factor, log_moneyness};
use crate::types::OptionType;

/// Standard normal CDF, Φ(x) = ½·erfc(−x/√2).
pub fn norm_cdf(x: f64) -> f64 {
    0.5 * erfc(-x / std::f64::consts::SQRT_2)
}

/// Black-76 price for either option type.
///
/// # Arguments
/// * `option_type` — Call or Put
/// * `vol` — Annualized volatility (≥ 0)
/// * `forward` — Forward price (> 0)
/// * `risk_free` — Continuously-compounded discount rate
/// * `expiry` — Time to expiry in years (> 0)
/// * `strike` — Strike price (> 0)
///
/// # Examples
/// ```
/// use black76::pricer::price;
/// use black76::OptionType;
///
/// let call = price(OptionType::Call, 0.2, 100.0, 0.0, 1.0, 100.0);
/// let put = price(OptionType::Put, 0.2, 100.0, 0.0, 1.0, 100.0);
/// // At the money with zero rate, calls and puts coincide.
/// assert!((call - put).abs() < 1e-12);
/// ```
pub fn price(
    option_type: OptionType,
    vol: f64,
    forward: f64,
    risk_free: f64,
    expiry: f64,
    strike: f64,
) -> f64 {
    match option_type {
        OptionType::Call => black76_call(vol, forward, risk_free, expiry, strike),
        OptionType::Put => black76_put(vol, forward, risk_free, expiry, strike),
    }
}

/// Black-76 call price.
pub fn black76_call(vol: f64, forward: f64, risk_free: f64, expiry: f64, strike: f64) -> f64 {
    let (d1, d2) = d1_d2(vol, forward, expiry, strike);
    discount_factor(risk_free, expiry) * (forward * norm_cdf(d1) - strike * norm_cdf(d2))
}

/// Black-76 put price.
pub fn black76_put(vol: f64, forward: f64, risk_free: f64, expiry: f64, strike: f64) -> f64 {
    let (d1, d2) = d1_d2(vol, forward, expiry, strike);
    discount_factor(risk_free, expiry) * (strike * norm_cdf(-d2) - forward * norm_cdf(-d1))
}

/// No-arbitrage lower bound: the discounted intrinsic value.
///
/// Call: `max(0, (F − K)·e^{−rT})`. Put: `max(0, (K − F)·e^{−rT})`.
pub fn lower_bound(
    option_type: OptionType,
    forward: f64,
    risk_free: f64,
    expiry: f64,
    strike: f64,
) -> f64 {
    let intrinsic = match option_type {
        OptionType::Call => forward - strike,
        OptionType::Put => strike - forward,
    };
    (intrinsic * discount_factor(risk_free, expiry)).max(0.0)
}

#[inline]
fn d1_d2(vol: f64, forward: f64, expiry: f64, strike: f64) -> (f64, f64) {
    let sd = vol * expiry.sqrt();
    let d1 = -log_moneyness(strike, forward);
    (d1, d1 - sd)
}
