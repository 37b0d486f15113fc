// demos/savings_demo.rs

//! Walk through one calculator session
//!
//! This example shows how to:
//! 1. Start a session for a built-in theme
//! 2. Change inputs the way a user would (slider, text field, toggle)
//! 3. Render the animated counters headlessly at 60 Hz
//! 4. Print the final comparison report
//!
//! Usage:
//!     RUST_LOG=savings_lib=debug cargo run --example savings_demo -- [theme]

use std::env;
use std::time::Duration;

use anyhow::{anyhow, Result};
use savings_lib::animation::DEFAULT_REFRESH_HZ;
use savings_lib::{CalculatorSession, ManualClock, ThemeConfig};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let theme_name = env::args().nth(1).unwrap_or_else(|| "standard".to_string());
    let theme = ThemeConfig::preset(&theme_name).ok_or_else(|| {
        anyhow!(
            "unknown theme '{}', expected one of {:?}",
            theme_name,
            ThemeConfig::PRESET_NAMES
        )
    })?;

    println!("Savings Calculator Demo ({})", theme.name);
    println!("==============================");

    let clock = ManualClock::new();
    let mut session = CalculatorSession::new(theme, &clock)?;
    print_frame("initial", &mut session);

    println!("\nStep 1: slider moves to 300 cases per year");
    session.set_cases_per_year(300);
    render_until_settled(&clock, &mut session);

    println!("\nStep 2: typing '7.500' into the claim field");
    session.enter_claim_text("7.500");
    render_until_settled(&clock, &mut session);

    println!("\nStep 3: switching to B2C");
    session.set_b2b(false);
    render_until_settled(&clock, &mut session);

    println!("\n{}", session.report());
    Ok(())
}

fn render_until_settled(clock: &ManualClock, session: &mut CalculatorSession<&ManualClock>) {
    let frame = Duration::from_secs(1) / DEFAULT_REFRESH_HZ;
    let mut frames = 0;
    loop {
        clock.advance(frame);
        frames += 1;
        let snapshot = session.snapshot();
        // Print every fifth frame to keep the output short.
        if frames % 5 == 0 || snapshot.settled {
            print_snapshot(&format!("frame {:>2}", frames), &snapshot);
        }
        if snapshot.settled {
            break;
        }
    }
}

fn print_frame(label: &str, session: &mut CalculatorSession<&ManualClock>) {
    let snapshot = session.snapshot();
    print_snapshot(label, &snapshot);
}

fn print_snapshot(label: &str, snapshot: &savings_lib::DisplaySnapshot) {
    println!(
        "  {:<9} boost {:>14} | days {:>4} | revenue {:>16} | factor {}",
        label,
        snapshot.liquidity_advantage,
        snapshot.saved_days,
        snapshot.required_revenue,
        snapshot.compensation_factor
    );
}
