//! Core domain types for Black-76 pricing and implied volatility.
//!
//! # Newtype Strategy
//!
//! **Outputs use newtypes.** The solver returns [`Vol`] so a solved volatility
//! is never confused with a price.
//!
//! **Inputs use bare `f64`.** The free functions take raw floats in the order
//! the pricing formula reads. [`Contract`] is the validated alternative for
//! callers that want the four market parameters checked once and carried
//! together.
//!
//! # Why no `Eq` or `Ord`?
//! These types wrap `f64`, which does not implement `Eq` or `Ord` because `NaN`
//! breaks total ordering. We derive `PartialEq` and `PartialOrd` only.

use serde::{Deserialize, Serialize};

use crate::conventions;
use crate::error::{self, Black76Error};
use crate::validate::{validate_finite, validate_positive};

/// Implied volatility `σ`, measured as annualized standard deviation.
///
/// A vol of 0.20 represents 20% annualized volatility.
///
/// # Examples
/// ```
/// use black76::types::Vol;
/// let vol = Vol(0.20);
/// assert_eq!(vol.0, 0.20);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Vol(pub f64);

/// Option type: call or put.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OptionType {
    /// Right to buy at strike price.
    Call,
    /// Right to sell at strike price.
    Put,
}

/// Market and contract parameters of a single European option on a forward.
///
/// Together with a volatility these fully determine the Black-76 price.
/// Construction validates that `forward`, `expiry` and `strike` are positive
/// and that `risk_free` is finite; deserialization runs the same checks.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ContractRaw", into = "ContractRaw")]
pub struct Contract {
    forward: f64,
    risk_free: f64,
    expiry: f64,
    strike: f64,
}

#[derive(Serialize, Deserialize)]
struct ContractRaw {
    forward: f64,
    risk_free: f64,
    expiry: f64,
    strike: f64,
}

impl TryFrom<ContractRaw> for Contract {
    type Error = Black76Error;
    fn try_from(raw: ContractRaw) -> Result<Self, Self::Error> {
        Self::new(raw.forward, raw.risk_free, raw.expiry, raw.strike)
    }
}

impl From<Contract> for ContractRaw {
    fn from(c: Contract) -> Self {
        Self {
            forward: c.forward,
            risk_free: c.risk_free,
            expiry: c.expiry,
            strike: c.strike,
        }
    }
}

impl Contract {
    /// Create a validated contract.
    ///
    /// # Errors
    /// Returns [`Black76Error::InvalidInput`] if `forward`, `expiry` or
    /// `strike` is not positive and finite, or if `risk_free` is not finite.
    ///
    /// # Examples
    /// ```
    /// use black76::types::Contract;
    /// let c = Contract::new(100.0, 0.02, 0.5, 105.0).unwrap();
    /// assert_eq!(c.strike(), 105.0);
    /// assert!(Contract::new(100.0, 0.02, 0.0, 105.0).is_err());
    /// ```
    pub fn new(forward: f64, risk_free: f64, expiry: f64, strike: f64) -> error::Result<Self> {
        validate_positive(forward, "forward")?;
        validate_finite(risk_free, "risk_free")?;
        validate_positive(expiry, "expiry")?;
        validate_positive(strike, "strike")?;
        Ok(Self {
            forward,
            risk_free,
            expiry,
            strike,
        })
    }

    /// Forward price of the underlying.
    pub fn forward(&self) -> f64 {
        self.forward
    }

    /// Continuously-compounded discount rate.
    pub fn risk_free(&self) -> f64 {
        self.risk_free
    }

    /// Time to expiry in years.
    pub fn expiry(&self) -> f64 {
        self.expiry
    }

    /// Strike price.
    pub fn strike(&self) -> f64 {
        self.strike
    }

    /// `exp(-r · T)`.
    pub fn discount_factor(&self) -> f64 {
        conventions::discount_factor(self.risk_free, self.expiry)
    }

    /// `F · exp(-r · T)`, the upper limit on any quotable premium.
    pub fn discounted_forward(&self) -> f64 {
        conventions::discounted_forward(self.forward, self.risk_free, self.expiry)
    }

    /// Discounted intrinsic value, the no-arbitrage lower bound.
    ///
    /// Call: `max(0, (F − K)·e^{−rT})`. Put: `max(0, (K − F)·e^{−rT})`.
    pub fn lower_bound(&self, option_type: OptionType) -> f64 {
        crate::pricer::lower_bound(
            option_type,
            self.forward,
            self.risk_free,
            self.expiry,
            self.strike,
        )
    }

    /// Black-76 price of this contract at volatility `vol`.
    pub fn price(&self, option_type: OptionType, vol: f64) -> f64 {
        crate::pricer::price(
            option_type,
            vol,
            self.forward,
            self.risk_free,
            self.expiry,
            self.strike,
        )
    }
}

/// An observed premium to invert, as used by batch solving.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    pub option_type: OptionType,
    /// Observed market premium.
    pub price: f64,
    pub contract: Contract,
}

impl Quote {
    pub fn new(option_type: OptionType, price: f64, contract: Contract) -> Self {
        Self {
            option_type,
            price,
            contract,
        }
    }
}
