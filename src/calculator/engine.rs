//! Derived-metrics engine.
//!
//! A single closed-form pass from [`CalculatorInputs`] to [`DerivedMetrics`].
//! Inputs are expected to be clamped by [`InputBounds::sanitize`](crate::InputBounds::sanitize)
//! already; the only guard kept here is flooring the case count to one wherever
//! it is used as a divisor.

use crate::calculator::config::ThemeConfig;
use crate::calculator::types::{CalculatorInputs, DerivedMetrics};

const MINUTES_PER_HOUR: f64 = 60.0;
const DAYS_PER_YEAR: f64 = 365.0;

/// Engine bound to one theme.
#[derive(Debug, Clone, Default)]
pub struct CalculatorEngine {
    theme: ThemeConfig,
}

impl CalculatorEngine {
    pub fn new(theme: ThemeConfig) -> Self {
        Self { theme }
    }

    pub fn theme(&self) -> &ThemeConfig {
        &self.theme
    }

    pub fn compute(&self, inputs: &CalculatorInputs) -> DerivedMetrics {
        compute(inputs, &self.theme)
    }
}

/// Compute every derived figure for `inputs` under the constants of `theme`.
///
/// Pure and total: identical arguments always give bit-identical results.
pub fn compute(inputs: &CalculatorInputs, theme: &ThemeConfig) -> DerivedMetrics {
    let cases = inputs.cases_per_year as f64;
    let divisor = cases.max(1.0);
    let claim = inputs.avg_claim_amount;

    // Per case
    let membership_fee_per_case = theme.membership_annual_fee / divisor;
    let legacy_fee_per_case = theme.legacy_fee.fee_for(claim);
    let new_fee_per_case = theme.new_fee.fee_for(claim);
    let legacy_default_loss_per_case = claim * (theme.legacy_default_rate_pct / 100.0);
    let new_default_loss_per_case = claim * (theme.new_default_rate_pct / 100.0);
    let interest_gain_per_case = claim * (theme.interest.rate_for(inputs.is_b2b) / 100.0)
        * (theme.new_collection_days / DAYS_PER_YEAR);

    // Legacy side
    let total_internal_legacy = if inputs.show_internal_costs {
        theme.internal_cost_per_case * cases
    } else {
        0.0
    };
    let total_admin_legacy = theme.admin_cost_per_case * cases;
    let total_membership = theme.membership_annual_fee;
    let total_legacy_fees = legacy_fee_per_case * cases;
    let total_evidence_legacy = theme.legacy_evidence_fee_per_case * cases;
    let total_default_legacy = legacy_default_loss_per_case * cases;

    // New process
    let total_internal_new = theme.new_internal_cost_per_case * cases;
    let total_new_fees = new_fee_per_case * cases;
    let total_default_new = new_default_loss_per_case * cases;
    let total_b2b_compensation = if inputs.is_b2b {
        theme.b2b_delay_compensation * cases
    } else {
        0.0
    };
    let total_interest_gain = interest_gain_per_case * cases;

    let total_legacy = total_internal_legacy
        + total_admin_legacy
        + total_membership
        + total_legacy_fees
        + total_evidence_legacy
        + total_default_legacy;
    let total_new = total_internal_new + total_new_fees + total_default_new
        - total_b2b_compensation
        - total_interest_gain;

    let yearly_saving = total_legacy - total_new;
    let total_claim_volume = cases * claim;

    // Time
    let legacy_hours = cases * theme.legacy_minutes_per_case / MINUTES_PER_HOUR;
    let new_hours = cases * theme.new_minutes_per_case / MINUTES_PER_HOUR;
    let saved_hours = legacy_hours - new_hours;

    DerivedMetrics {
        membership_fee_per_case,
        legacy_fee_per_case,
        new_fee_per_case,
        legacy_default_loss_per_case,
        new_default_loss_per_case,
        interest_gain_per_case,
        total_internal_legacy,
        total_admin_legacy,
        total_membership,
        total_legacy_fees,
        total_evidence_legacy,
        total_default_legacy,
        total_internal_new,
        total_new_fees,
        total_default_new,
        total_b2b_compensation,
        total_interest_gain,
        total_legacy,
        total_new,
        yearly_saving,
        saving_per_case: yearly_saving / divisor,
        additional_recovered: total_default_legacy - total_default_new,
        total_claim_volume,
        net_revenue_legacy: total_claim_volume - total_legacy,
        net_revenue_new: total_claim_volume - total_new,
        legacy_hours,
        new_hours,
        saved_hours,
        saved_days: saved_hours / theme.hours_per_work_day,
        legacy_recovery_rate_pct: 100.0 - theme.legacy_default_rate_pct,
        new_recovery_rate_pct: 100.0 - theme.new_default_rate_pct,
        required_revenue: total_claim_volume / (inputs.margin_pct / 100.0),
        compensation_factor: compensation_factor(inputs.margin_pct),
    }
}

/// Number of equally profitable transactions that offset one lost claim: `round(100 / margin)`.
pub fn compensation_factor(margin_pct: f64) -> u32 {
    (100.0 / margin_pct).round() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference_inputs() -> CalculatorInputs {
        CalculatorInputs {
            is_b2b: true,
            cases_per_year: 120,
            avg_claim_amount: 2500.0,
            margin_pct: 4.0,
            show_internal_costs: true,
        }
    }

    #[test]
    fn reference_scenario() {
        let m = compute(&reference_inputs(), &ThemeConfig::standard());

        assert_eq!(m.compensation_factor, 25);
        assert_eq!(m.total_claim_volume, 300_000.0);
        assert!((m.required_revenue - 7_500_000.0).abs() < 1e-6);

        // 3000 + 1440 + 300 + 45000 + 600 + 75000
        assert!((m.total_legacy - 125_340.0).abs() < 1e-9);
        // 180 + 36000 - 4800
        assert!((m.total_new - 31_380.0).abs() < 1e-9);
        assert!((m.yearly_saving - 93_960.0).abs() < 1e-9);
        assert!((m.saving_per_case - 783.0).abs() < 1e-9);
        assert!((m.additional_recovered - 39_000.0).abs() < 1e-9);

        assert_eq!(m.legacy_hours, 60.0);
        assert_eq!(m.new_hours, 4.0);
        assert_eq!(m.saved_days, 7.0);
        assert_eq!(m.membership_fee_per_case, 2.5);
    }

    #[test]
    fn b2c_has_no_delay_compensation() {
        let inputs = CalculatorInputs {
            is_b2b: false,
            ..reference_inputs()
        };
        let m = compute(&inputs, &ThemeConfig::standard());
        assert_eq!(m.total_b2b_compensation, 0.0);
        assert!((m.total_new - 36_180.0).abs() < 1e-9);
    }

    #[test]
    fn hiding_internal_costs_only_touches_legacy_side() {
        let theme = ThemeConfig::standard();
        let shown = compute(&reference_inputs(), &theme);
        let hidden = compute(
            &CalculatorInputs {
                show_internal_costs: false,
                ..reference_inputs()
            },
            &theme,
        );
        assert_eq!(hidden.total_internal_legacy, 0.0);
        assert_eq!(hidden.total_new, shown.total_new);
        assert!((shown.total_legacy - hidden.total_legacy - 3000.0).abs() < 1e-9);
    }

    #[test]
    fn zero_cases_never_divides_by_zero() {
        let inputs = CalculatorInputs {
            cases_per_year: 0,
            ..reference_inputs()
        };
        let m = compute(&inputs, &ThemeConfig::standard());
        assert_eq!(m.membership_fee_per_case, 300.0);
        assert!(m.saving_per_case.is_finite());
    }

    #[test]
    fn interest_depends_on_regime() {
        let theme = ThemeConfig::statutory_interest();
        let b2b = compute(&reference_inputs(), &theme);
        let b2c = compute(
            &CalculatorInputs {
                is_b2b: false,
                ..reference_inputs()
            },
            &theme,
        );
        assert!(b2b.interest_gain_per_case > b2c.interest_gain_per_case);
        // 2500 * 11.27 % * 21 / 365
        assert!((b2b.interest_gain_per_case - 2500.0 * 0.1127 * 21.0 / 365.0).abs() < 1e-9);
    }

    #[test]
    fn compensation_factor_rounds_half_away_from_zero() {
        assert_eq!(compensation_factor(4.0), 25);
        assert_eq!(compensation_factor(8.0), 13); // 12.5
        assert_eq!(compensation_factor(3.0), 33);
        assert_eq!(compensation_factor(0.5), 200);
    }
}
