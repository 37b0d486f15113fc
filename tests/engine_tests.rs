
use savings_lib::{
    calculate_savings, compute, default_themes, CalculatorEngine, CalculatorInputs, FeeSchedule,
    ThemeConfig,
};
use test_utils::{load_scenarios, reference_inputs};

/// Every scenario in the fixture file must reproduce its expected figures.
#[test]
fn test_scenarios_from_fixture() {
    let scenarios =
        load_scenarios("tests/data/scenarios.csv").expect("Failed to load scenario fixture");
    assert!(!scenarios.is_empty(), "Fixture should not be empty");

    for scenario in &scenarios {
        let theme = scenario.theme();
        let metrics = calculate_savings(scenario.inputs(), &theme);
        scenario.check(&metrics);
    }
}

/// `120 cases x 2500 EUR at 4 %`: factor 25, required revenue 7.5 million.
#[test]
fn test_reference_margin_figures() {
    let metrics = compute(&reference_inputs(), &default_themes::standard());
    assert_eq!(metrics.compensation_factor, 25);
    assert_eq!(metrics.total_claim_volume, 300_000.0);
    assert!((metrics.required_revenue - 7_500_000.0).abs() < 1e-6);
}

/// Repeated computation yields bit-identical results.
#[test]
fn test_compute_is_deterministic() {
    for theme in default_themes::all() {
        let engine = CalculatorEngine::new(theme);
        let inputs = reference_inputs();
        let first = engine.compute(&inputs);
        for _ in 0..10 {
            let again = engine.compute(&inputs);
            assert_eq!(again, first);
            assert_eq!(again.yearly_saving.to_bits(), first.yearly_saving.to_bits());
        }
    }
}

/// Non-positive case counts never reach the engine.
#[test]
fn test_zero_cases_are_clamped_before_compute() {
    let theme = default_themes::enterprise();
    let metrics = calculate_savings(
        CalculatorInputs {
            cases_per_year: 0,
            ..reference_inputs()
        },
        &theme,
    );
    assert_eq!(metrics.total_claim_volume, 2500.0);
    assert_eq!(metrics.membership_fee_per_case, theme.membership_annual_fee);

    let bounds = theme.bounds;
    assert_eq!(bounds.clamp_cases(-500), 1);
}

/// Fee example: 2000 EUR at 16 % with a 40 EUR floor is 320 EUR.
#[test]
fn test_fee_floor_example() {
    let fee = FeeSchedule::new(16.0, 40.0);
    assert_eq!(fee.fee_for(2000.0), 320.0);

    let theme = default_themes::fee_floor();
    let m = compute(
        &CalculatorInputs {
            avg_claim_amount: 2000.0,
            ..reference_inputs()
        },
        &theme,
    );
    assert_eq!(m.legacy_fee_per_case, 320.0);
}

/// Saving sign follows `total_legacy - total_new` and is not clamped.
#[test]
fn test_negative_outcomes_stay_signed() {
    let theme = ThemeConfig {
        new_fee: FeeSchedule::new(60.0, 0.0),
        ..default_themes::standard()
    };
    let m = compute(&reference_inputs(), &theme);
    assert!(m.yearly_saving < 0.0, "new process should cost more here");
    assert!((m.yearly_saving - (m.total_legacy - m.total_new)).abs() < 1e-9);
    assert!(m.saving_per_case < 0.0);
}

/// The internal-cost toggle removes exactly `internal_cost_per_case * cases`.
#[test]
fn test_internal_cost_toggle() {
    let theme = default_themes::lean();
    let inputs = CalculatorInputs::from_bounds(&theme.bounds, theme.show_internal_costs_by_default);
    assert!(!inputs.show_internal_costs);

    let hidden = compute(&inputs, &theme);
    let shown = compute(
        &CalculatorInputs {
            show_internal_costs: true,
            ..inputs
        },
        &theme,
    );
    let expected = theme.internal_cost_per_case * inputs.cases_per_year as f64;
    assert!((shown.total_legacy - hidden.total_legacy - expected).abs() < 1e-9);
    assert!((shown.yearly_saving - hidden.yearly_saving - expected).abs() < 1e-9);
}

#[cfg(feature = "serde")]
#[test]
fn test_custom_theme_from_toml_feeds_engine() {
    let theme = ThemeConfig::from_toml_str(
        r#"
        name = "no_compensation"
        b2b_delay_compensation = 0.0
        "#,
    )
    .expect("theme parses");
    let with = compute(&reference_inputs(), &default_themes::standard());
    let without = compute(&reference_inputs(), &theme);
    assert!((without.total_new - with.total_new - 4800.0).abs() < 1e-9);
}
