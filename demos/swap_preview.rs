//! Swap and liquidity previews against the demo ETH/USDT pool.
//!
//! Prints what the swap and liquidity forms of a DEX front end show for a
//! few inputs: output amount, fee, minimum received, rate, price impact,
//! pool shares and withdrawal amounts.
//!
//! # Run
//!
//! ```bash
//! RUST_LOG=debug cargo run --example swap_preview
//! ```

use cpmm_engine::config::QuoteConfig;
use cpmm_engine::cpmm::compute_spot_price;
use cpmm_engine::domain::{BasisPoints, SwapDirection};
use cpmm_engine::math::{format_display, from_base_units, to_base_units};
use cpmm_engine::pools::StaticPool;
use cpmm_engine::traits::PoolState;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let pool = StaticPool::demo();
    let config = QuoteConfig::default();
    let snapshot = pool.liquidity_snapshot()?;

    println!("=== Constant Product Pool (x · y = k) ===\n");
    println!(
        "Reserves:     {} ETH / {} USDT",
        from_base_units(snapshot.reserve0(), pool.decimals0()),
        from_base_units(snapshot.reserve1(), pool.decimals1()),
    );
    println!("Fee:          {}", config.fee());
    println!("Slippage:     {}", config.slippage());

    let spot = compute_spot_price(pool.reserve_pair(SwapDirection::ZeroForOne)?)
        * pool.decimals0().scale_f64()
        / pool.decimals1().scale_f64();
    println!("Spot price:   1 ETH = {} USDT", format_display(spot, 6));

    // ── 1. Swaps of growing size ────────────────────────────────────────
    for (human, direction) in [
        ("1000", SwapDirection::ZeroForOne),
        ("40000", SwapDirection::ZeroForOne),
        ("2000", SwapDirection::OneForZero),
    ] {
        let (d_in, d_out) = pool.decimals_for(direction);
        let quote = pool.quote_swap(to_base_units(human, d_in)?, direction, &config)?;

        println!("\n--- Swap {human} ({direction}) ---");
        println!("  You receive:      {}", from_base_units(quote.amount_out(), d_out));
        println!("  Fee paid:         {}", from_base_units(quote.fee_paid(), d_in));
        println!("  Minimum received: {}", from_base_units(quote.minimum_received(), d_out));
        println!(
            "  Rate:             1 = {}",
            format_display(quote.execution_rate(d_in, d_out), 6)
        );
        println!(
            "  Price impact:     {}% ({})",
            format_display(quote.price_impact(), 2),
            quote.impact_level()
        );
        if let Some(advice) = quote.impact_level().advice() {
            println!("  ! {advice}");
        }
    }

    // ── 2. Add liquidity ────────────────────────────────────────────────
    let deposit = pool.quote_deposit(to_base_units("10", pool.decimals0())?)?;
    println!("\n--- Add liquidity ---");
    println!(
        "  Deposit:          {} ETH + {} USDT",
        from_base_units(deposit.amount0(), pool.decimals0()),
        from_base_units(deposit.amount1(), pool.decimals1()),
    );
    println!(
        "  Share of deposit: {}%",
        format_display(deposit.share_after_deposit(), 6)
    );
    println!("  Current share:    {}%", format_display(deposit.current_share(), 4));

    // ── 3. Remove liquidity quick picks ─────────────────────────────────
    println!("\n--- Remove liquidity ---");
    for bps in [2_500, 5_000, 7_500, 10_000] {
        let portion = BasisPoints::new(bps);
        let quote = pool.quote_withdrawal_portion(portion)?;
        println!(
            "  {:>5}: {} ETH + {} USDT, share left {}%",
            format!("{}%", format_display(portion.as_percent(), 2)),
            from_base_units(quote.amount0(), pool.decimals0()),
            from_base_units(quote.amount1(), pool.decimals1()),
            format_display(quote.remaining_share(), 4),
        );
    }

    Ok(())
}
