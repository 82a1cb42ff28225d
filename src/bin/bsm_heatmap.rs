// bsm-heatmap: price one European option and write its spot/volatility heatmaps.
//
// Usage:
//     bsm-heatmap [session.toml]
//
// Without a config file the built-in demo session is used. Set RUST_LOG to override
// the log level chosen by `output.verbosity`.

use std::env;

use anyhow::Result;
use bsm_heatmap::{run_session, SessionConfig, GRID_SIZE};
use tracing_subscriber::EnvFilter;

fn init_tracing(default_directive: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn print_matrix(title: &str, grid: &[[f64; GRID_SIZE]; GRID_SIZE], spots: &[f64], vols: &[f64]) {
    println!("\n{}", title);
    print!("{:>8}", "vol\\spot");
    for s in spots {
        print!("{:>9.2}", s);
    }
    println!();
    for (v, row) in vols.iter().zip(grid.iter()) {
        print!("{:>8.2}", v);
        for value in row {
            print!("{:>9.2}", value);
        }
        println!();
    }
}

fn main() -> Result<()> {
    let config = match env::args().nth(1) {
        Some(path) => SessionConfig::from_path(&path)?,
        None => SessionConfig::demo(),
    };
    init_tracing(config.output.log_directive());

    let report = run_session(&config)?;
    let shown = report.prices.rounded(2);

    println!("Black-Scholes Pricing Model");
    println!("===========================");
    println!(
        "Spot {:.2} | Strike {:.2} | T {:.4}y | Vol {:.4} | r {:.4}",
        report.parameters.spot,
        report.parameters.strike,
        report.parameters.time_to_maturity,
        report.parameters.volatility,
        report.parameters.risk_free_rate
    );
    println!("Call option value: ${:.2}", shown.call);
    println!("Put option value:  ${:.2}", shown.put);
    if let Some(pnl) = &report.position_pnl {
        println!(
            "Position P&L: call {:+.2} | put {:+.2} | total {:+.2}",
            pnl.call, pnl.put, pnl.total
        );
    }

    let vols = report.grid.volatility_labels();
    print_matrix(
        "Call option value heatmap",
        &report.grid.call_matrix,
        &report.grid.spot_samples,
        &vols,
    );
    print_matrix(
        "Put option value heatmap",
        &report.grid.put_matrix,
        &report.grid.spot_samples,
        &vols,
    );

    let written = report.write_outputs(&config.output)?;
    for path in written {
        println!("wrote {}", path.display());
    }
    Ok(())
}
