//! Extract implied volatility from Black-76 option prices.
//!
//! Shows how to:
//!   - Invert the two reference weekly quotes
//!   - Verify round-trip accuracy
//!   - See how out-of-range quotes are reported
//!
//! Run with: `cargo run --example implied_vol`

use black76::{Black76Error, BlackImpliedVol, Contract, OptionType, implied_volatility, price};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let forward = 1132.759389;
    let rate = 0.02;

    // ---------------------------------------------------------------
    // 1. Reference quotes
    // ---------------------------------------------------------------

    let call_expiry = 4.0 / 252.0;
    let put_expiry = 4.0 / 365.0;
    let iv_call = implied_volatility(OptionType::Call, 33.3, forward, rate, 1100.0, call_expiry);
    let iv_put = implied_volatility(OptionType::Put, 0.325, forward, rate, 1050.0, put_expiry);

    println!("Implied vol (bracket + bisection)");
    println!("  Call K=1100 @ 33.300: {iv_call:.12}");
    println!("  Put  K=1050 @  0.325: {iv_put:.12}");

    // ---------------------------------------------------------------
    // 2. Round-trip accuracy
    // ---------------------------------------------------------------

    let reprice = price(OptionType::Call, iv_call, forward, rate, call_expiry, 1100.0);
    println!("\nRound-trip accuracy");
    println!("  Observed:  {:.15}", 33.3);
    println!("  Repriced:  {reprice:.15}");
    println!("  Error:     {:.2e}", (reprice - 33.3).abs());

    // ---------------------------------------------------------------
    // 3. Boundary handling
    // ---------------------------------------------------------------

    let contract = Contract::new(forward, rate, call_expiry, 1100.0)?;
    let solver = BlackImpliedVol::new();
    let lb = contract.lower_bound(OptionType::Call);
    let cap = contract.discounted_forward();

    println!("\n--- Boundary quotes (lower bound {lb:.6}, cap {cap:.6}) ---\n");
    println!("{:>14} {:>16}", "Price", "Result");
    println!("{}", "-".repeat(32));
    for p in [lb - 1.0, lb, 40.0, cap] {
        match solver.solve_contract(OptionType::Call, p, &contract) {
            Ok(vol) => println!("{p:>14.6} {:>16.10}", vol.0),
            Err(Black76Error::NoSolution { reason, .. }) => println!("{p:>14.6} {reason:>16}"),
            Err(e) => return Err(e.into()),
        }
    }

    Ok(())
}
