//! # black76
//!
//! Black-76 option pricing on forwards and implied volatility inversion.
//!
//! Given an observed premium together with the forward, discount rate,
//! strike and expiry of a European option, the solver recovers the
//! volatility that reprices the premium under the model.
//!
//! ## Architecture
//!
//! - **`pricer`** — closed-form call and put prices
//! - **`implied`** — bracket expansion + bisection inversion of the pricer
//! - **`conventions`** — discounting and moneyness helpers
//! - **`types`** — [`Vol`], [`OptionType`], [`Contract`], [`Quote`]
//!
//! ## Design
//!
//! - **No panics.** Fallible operations return [`Result`]; library code never
//!   calls `unwrap()` or `expect()`.
//! - **Explicit no-solution results.** A price outside the no-arbitrage range
//!   is a [`Black76Error::NoSolution`], not a silent NaN. The
//!   [`implied_volatility`] wrapper maps it back to NaN for numeric callers.
//! - **Bounded search.** Bracket expansion and bisection are both capped by
//!   [`SolverConfig`], so degenerate inputs terminate.
//! - **Thread-safe.** All public types are `Send + Sync`; with the `parallel`
//!   feature [`implied_volatilities`] solves quotes on the rayon pool.
//!
//! ## Quick start
//!
//! ```
//! use black76::{implied_volatility, price, OptionType};
//!
//! let (forward, rate, strike, expiry) = (1132.759389, 0.02, 1100.0, 4.0 / 252.0);
//! let vol = implied_volatility(OptionType::Call, 33.3, forward, rate, strike, expiry);
//! let reprice = price(OptionType::Call, vol, forward, rate, expiry, strike);
//! assert!((reprice - 33.3).abs() < 1e-8);
//! ```

pub mod conventions;
pub mod error;
pub mod implied;
mod optim;
pub mod pricer;
pub mod types;
mod validate;

#[doc(inline)]
pub use error::{Black76Error, NoSolutionReason, Result};
#[doc(inline)]
pub use implied::{BlackImpliedVol, SolverConfig, implied_volatilities, implied_volatility};
#[doc(inline)]
pub use pricer::price;
#[doc(inline)]
pub use types::{Contract, OptionType, Quote, Vol};
