//! Batch implied volatility over independent quotes.
//!
//! Every quote is solved in isolation. With the `parallel` feature the work is
//! spread across the rayon thread pool; output order always matches input order.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::error;
use crate::implied::{BlackImpliedVol, SolverConfig};
use crate::types::{Quote, Vol};

/// Solve every quote with the same configuration.
///
/// # Errors
/// Returns [`Black76Error::InvalidInput`](crate::Black76Error::InvalidInput)
/// if `config` is invalid. Per-quote failures are reported in place.
///
/// # Examples
/// ```
/// use black76::{implied_volatilities, Contract, OptionType, Quote, SolverConfig};
///
/// let contract = Contract::new(100.0, 0.01, 0.5, 100.0).unwrap();
/// let quotes = [
///     Quote::new(OptionType::Call, contract.price(OptionType::Call, 0.3), contract),
///     Quote::new(OptionType::Call, 500.0, contract),
/// ];
/// let vols = implied_volatilities(&quotes, &SolverConfig::default()).unwrap();
/// assert!((vols[0].as_ref().unwrap().0 - 0.3).abs() < 1e-9);
/// assert!(vols[1].is_err());
/// ```
pub fn implied_volatilities(
    quotes: &[Quote],
    config: &SolverConfig,
) -> error::Result<Vec<error::Result<Vol>>> {
    let solver = BlackImpliedVol::with_config(*config)?;

    #[cfg(feature = "logging")]
    tracing::debug!(n_quotes = quotes.len(), "batch implied vol started");

    let solve =
        |quote: &Quote| solver.solve_contract(quote.option_type, quote.price, &quote.contract);

    #[cfg(feature = "parallel")]
    let vols: Vec<error::Result<Vol>> = quotes.par_iter().map(solve).collect();
    #[cfg(not(feature = "parallel"))]
    let vols: Vec<error::Result<Vol>> = quotes.iter().map(solve).collect();

    #[cfg(feature = "logging")]
    tracing::debug!(
        n_solved = vols.iter().filter(|v| v.is_ok()).count(),
        "batch implied vol complete"
    );

    Ok(vols)
}
