// demos/pricing_demo.rs

//! Demonstration of headline pricing and the spot/volatility sensitivity grid
//!
//! This example shows how to:
//! 1. Price an at-the-money call and put
//! 2. Check put-call parity on the result
//! 3. Build the 10x10 heatmap matrices
//! 4. Mark a small long-call position against the grid

use anyhow::Result;
use bsm_heatmap::{
    build_grid, pnl_grid, price, FixedParameters, GridRange, Position, GRID_SIZE,
};

fn main() -> Result<()> {
    println!("Black-Scholes Pricing Demo");
    println!("==========================");

    let (spot, strike, t, vol, r) = (100.0, 100.0, 1.0, 0.2, 0.05);
    let prices = price(spot, strike, t, vol, r)?;
    println!("\nStep 1: Headline prices");
    println!("  Call: ${:.2}", prices.call);
    println!("  Put:  ${:.2}", prices.put);

    let parity_gap = (prices.call - prices.put) - (spot - strike * (-r * t).exp());
    println!("\nStep 2: Put-call parity residual: {:.2e}", parity_gap);

    println!("\nStep 3: Sensitivity grid (spot 80-120, vol 10%-30%)");
    let range = GridRange::new(80.0, 120.0, 0.10, 0.30)?;
    let fixed = FixedParameters {
        strike,
        time_to_maturity: t,
        risk_free_rate: r,
    };
    let grid = build_grid(&range, &fixed)?;

    print!("{:>6}", "");
    for s in &grid.spot_samples {
        print!("{:>8.2}", s);
    }
    println!();
    for (i, v) in grid.volatility_labels().iter().enumerate() {
        print!("{:>6.2}", v);
        for j in 0..GRID_SIZE {
            print!("{:>8.2}", grid.call_matrix[i][j]);
        }
        println!();
    }

    println!("\nStep 4: P&L of 10 calls bought at the headline price");
    let position = Position {
        call_purchase_price: prices.call,
        call_quantity: 10.0,
        ..Position::default()
    };
    let pnl = pnl_grid(&grid, &position)?;
    let corner = GRID_SIZE - 1;
    println!(
        "  spot {:.2}, vol {:.2}: {:+.2}",
        grid.spot_samples[corner],
        grid.volatility_labels()[corner],
        pnl.call_pnl[corner][corner]
    );

    Ok(())
}
