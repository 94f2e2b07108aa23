//! Implied volatility extraction from Black-76 option prices.
//!
//! - [`BlackImpliedVol`] — bracket expansion followed by bisection
//! - [`implied_volatility`] — the same solve, returning NaN when no volatility fits
//! - [`implied_volatilities`] — batch solve over many [`Quote`](crate::types::Quote)s

pub mod batch;
pub mod black;
mod config;

pub use batch::implied_volatilities;
pub use black::{BlackImpliedVol, implied_volatility};
pub use config::SolverConfig;
