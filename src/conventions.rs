//! Market conventions shared by the pricer and the solver.
//!
//! Rates are continuously compounded and times are year fractions.

/// Discount factor `exp(-r · T)`.
pub fn discount_factor(rate: f64, expiry: f64) -> f64 {
    (-rate * expiry).exp()
}

/// Present value of the forward: `F · exp(-r · T)`.
///
/// This is the supremum of the call price as volatility grows without bound,
/// so it caps every quote the solver accepts.
pub fn discounted_forward(forward: f64, rate: f64, expiry: f64) -> f64 {
    forward * discount_factor(rate, expiry)
}

/// Compute forward price from spot: F = S · exp(r · T).
pub fn forward_price(spot: f64, rate: f64, expiry: f64) -> f64 {
    spot * (rate * expiry).exp()
}

/// Log-moneyness of a strike against the forward, `ln(K / F)`.
///
/// The pricer's `d1` is the negation of this value.
pub fn log_moneyness(strike: f64, forward: f64) -> f64 {
    (strike / forward).ln()
}
