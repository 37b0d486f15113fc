//! One running calculator widget.
//!
//! The session holds the current inputs, recomputes all metrics synchronously on
//! every change, and retargets one animator per animated figure. Rendering code
//! calls [`CalculatorSession::snapshot`] once per frame.

use anyhow::{Context, Result};
use tracing::debug;

use crate::animation::{Clock, ValueAnimator};
use crate::calculator::{CalculatorEngine, CalculatorInputs, DerivedMetrics, ThemeConfig};
use crate::format::{
    display_floor, format_compact_currency, format_factor, format_number, format_signed_currency,
};
use crate::report::ComparisonReport;

/// Formatted figures for one rendered frame.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplaySnapshot {
    /// Yearly saving ("Liquiditäts-Boost"), e.g. `+93.960 €`
    pub liquidity_advantage: String,
    /// Saved work days per year, e.g. `7`
    pub saved_days: String,
    /// Revenue needed to replace the claim volume, e.g. `7,5 Mio. €`
    pub required_revenue: String,
    pub compensation_factor: String,
    /// `true` once every counter shows its final value
    pub settled: bool,
}

#[derive(Debug)]
pub struct CalculatorSession<C: Clock> {
    engine: CalculatorEngine,
    inputs: CalculatorInputs,
    metrics: DerivedMetrics,
    clock: C,
    liquidity_advantage: ValueAnimator,
    saved_days: ValueAnimator,
    required_revenue: ValueAnimator,
}

impl<C: Clock> CalculatorSession<C> {
    /// Start a session with the theme's default inputs. Counters start settled.
    pub fn new(theme: ThemeConfig, clock: C) -> Result<Self> {
        theme
            .validate()
            .with_context(|| format!("cannot start calculator with theme '{}'", theme.name))?;
        let inputs =
            CalculatorInputs::from_bounds(&theme.bounds, theme.show_internal_costs_by_default);
        let engine = CalculatorEngine::new(theme);
        let metrics = engine.compute(&inputs);
        debug!(theme = %engine.theme().name, ?inputs, "calculator session started");

        Ok(Self {
            engine,
            inputs,
            clock,
            liquidity_advantage: ValueAnimator::new(metrics.yearly_saving),
            saved_days: ValueAnimator::new(metrics.saved_days),
            required_revenue: ValueAnimator::new(metrics.required_revenue),
            metrics,
        })
    }

    pub fn theme(&self) -> &ThemeConfig {
        self.engine.theme()
    }

    pub fn inputs(&self) -> &CalculatorInputs {
        &self.inputs
    }

    pub fn metrics(&self) -> &DerivedMetrics {
        &self.metrics
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn set_b2b(&mut self, is_b2b: bool) -> &DerivedMetrics {
        self.update(|inputs| inputs.is_b2b = is_b2b)
    }

    pub fn set_show_internal_costs(&mut self, show: bool) -> &DerivedMetrics {
        self.update(|inputs| inputs.show_internal_costs = show)
    }

    /// Slider or stepper input. Out-of-range values snap to the nearest bound.
    pub fn set_cases_per_year(&mut self, cases: i64) -> &DerivedMetrics {
        let cases = self.theme().bounds.clamp_cases(cases);
        self.update(|inputs| inputs.cases_per_year = cases)
    }

    pub fn set_avg_claim_amount(&mut self, amount: f64) -> &DerivedMetrics {
        let amount = self.theme().bounds.clamp_claim(amount);
        self.update(|inputs| inputs.avg_claim_amount = amount)
    }

    pub fn set_margin(&mut self, margin_pct: f64) -> &DerivedMetrics {
        let margin = self.theme().bounds.clamp_margin(margin_pct);
        self.update(|inputs| inputs.margin_pct = margin)
    }

    /// Text-field input; unparsable text falls back to the lower bound.
    pub fn enter_cases_text(&mut self, text: &str) -> &DerivedMetrics {
        let cases = self.theme().bounds.parse_cases(text);
        self.update(|inputs| inputs.cases_per_year = cases)
    }

    pub fn enter_claim_text(&mut self, text: &str) -> &DerivedMetrics {
        let amount = self.theme().bounds.parse_claim(text);
        self.update(|inputs| inputs.avg_claim_amount = amount)
    }

    pub fn enter_margin_text(&mut self, text: &str) -> &DerivedMetrics {
        let margin = self.theme().bounds.parse_margin(text);
        self.update(|inputs| inputs.margin_pct = margin)
    }

    /// Replace all inputs at once; every field is clamped.
    pub fn set_inputs(&mut self, inputs: CalculatorInputs) -> &DerivedMetrics {
        self.update(|current| *current = inputs)
    }

    fn update<F>(&mut self, edit: F) -> &DerivedMetrics
    where
        F: FnOnce(&mut CalculatorInputs),
    {
        let mut next = self.inputs;
        edit(&mut next);
        let next = self.engine.theme().bounds.sanitize(next);
        if next == self.inputs {
            return &self.metrics;
        }

        self.inputs = next;
        self.metrics = self.engine.compute(&self.inputs);
        debug!(
            inputs = ?self.inputs,
            yearly_saving = self.metrics.yearly_saving,
            "inputs changed, metrics recomputed"
        );

        let now = self.clock.now();
        self.liquidity_advantage
            .set_target(self.metrics.yearly_saving, now);
        self.saved_days.set_target(self.metrics.saved_days, now);
        self.required_revenue
            .set_target(self.metrics.required_revenue, now);
        &self.metrics
    }

    /// `true` when no counter is mid-transition.
    pub fn is_settled(&self) -> bool {
        !(self.liquidity_advantage.is_animating()
            || self.saved_days.is_animating()
            || self.required_revenue.is_animating())
    }

    /// Sample every counter at the clock's current time and format the result.
    pub fn snapshot(&mut self) -> DisplaySnapshot {
        let now = self.clock.now();
        let liquidity = self.liquidity_advantage.tick(now).value;
        let days = self.saved_days.tick(now).value;
        let revenue = self.required_revenue.tick(now).value;

        DisplaySnapshot {
            liquidity_advantage: format_signed_currency(display_floor(liquidity).round(), 0),
            saved_days: format_number(display_floor(days), 0),
            required_revenue: format_compact_currency(display_floor(revenue)),
            compensation_factor: format_factor(self.metrics.compensation_factor),
            settled: self.is_settled(),
        }
    }

    /// Comparison table and cards for the current inputs (final values, not animated).
    pub fn report(&self) -> ComparisonReport {
        ComparisonReport::build(&self.inputs, &self.metrics, self.engine.theme())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::{ManualClock, TRANSITION_DURATION};
    use std::time::Duration;

    #[test]
    fn starts_settled_with_default_inputs() {
        let clock = ManualClock::new();
        let mut session = CalculatorSession::new(ThemeConfig::standard(), &clock).unwrap();
        assert_eq!(session.inputs().cases_per_year, 120);
        let snap = session.snapshot();
        assert!(snap.settled);
        assert_eq!(snap.liquidity_advantage, "+93.960\u{a0}€");
        assert_eq!(snap.saved_days, "7");
        assert_eq!(snap.compensation_factor, "25x");
        assert_eq!(snap.required_revenue, "7,5\u{a0}Mio.\u{a0}€");
    }

    #[test]
    fn change_animates_then_settles() {
        let clock = ManualClock::new();
        let mut session = CalculatorSession::new(ThemeConfig::standard(), &clock).unwrap();
        session.set_cases_per_year(240);
        assert!(!session.is_settled());

        let first = session.snapshot();
        assert_eq!(first.liquidity_advantage, "+93.960\u{a0}€");

        clock.advance(TRANSITION_DURATION);
        let last = session.snapshot();
        assert!(last.settled);
        assert_eq!(last.saved_days, "14");
    }

    #[test]
    fn unchanged_input_does_not_restart() {
        let clock = ManualClock::starting_at(Duration::from_secs(5));
        let mut session = CalculatorSession::new(ThemeConfig::standard(), &clock).unwrap();
        session.set_cases_per_year(120);
        assert!(session.is_settled());
        session.set_cases_per_year(-3);
        assert_eq!(session.inputs().cases_per_year, 10);
        assert!(!session.is_settled());
    }

    #[test]
    fn margin_is_fixed_in_standard_theme() {
        let clock = ManualClock::new();
        let mut session = CalculatorSession::new(ThemeConfig::standard(), &clock).unwrap();
        session.set_margin(10.0);
        assert_eq!(session.inputs().margin_pct, 4.0);
        assert!(session.is_settled());
    }

    #[test]
    fn invalid_theme_is_rejected() {
        let mut theme = ThemeConfig::standard();
        theme.hours_per_work_day = 0.0;
        assert!(CalculatorSession::new(theme, ManualClock::new()).is_err());
    }
}
