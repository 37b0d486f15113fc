use anyhow::Result;
use savings_lib::{calculate_savings, default_themes, format_currency, CalculatorInputs};

fn main() -> Result<()> {
    println!("Savings-lib Built-in Themes\n");

    for (i, theme) in default_themes::all().iter().enumerate() {
        let inputs =
            CalculatorInputs::from_bounds(&theme.bounds, theme.show_internal_costs_by_default);
        let metrics = calculate_savings(inputs, theme);

        println!("{}. {}", i + 1, theme.name);
        println!(
            "   Cases: {}..{} (default {})",
            theme.bounds.cases.min, theme.bounds.cases.max, theme.bounds.cases.default
        );
        println!(
            "   Claim: {}..{} EUR (default {})",
            theme.bounds.claim.min, theme.bounds.claim.max, theme.bounds.claim.default
        );
        println!(
            "   Agency fee: {} % (min {} EUR)",
            theme.legacy_fee.pct, theme.legacy_fee.min_fee
        );
        println!(
            "   Interest B2B/B2C: {} % / {} %",
            theme.interest.b2b_pct, theme.interest.b2c_pct
        );
        println!(
            "   Yearly saving at defaults: {}\n",
            format_currency(metrics.yearly_saving, 0)
        );
    }

    // Seed a custom theme file from a preset.
    println!("TOML for the fee_floor theme:\n");
    println!("{}", default_themes::fee_floor().to_toml_string()?);
    Ok(())
}
