//! # Savings-Lib: Debt-Collection Savings Calculator Core
//!
//! `savings-lib` computes the figures behind a savings-calculator widget that
//! compares a traditional, manual debt-collection workflow with an automated one,
//! and animates how those figures are displayed.
//!
//! ## Core Features
//!
//! - **Derived-Metrics Engine**: closed-form cost, saving, time and margin figures
//!   from a handful of inputs
//! - **Themes**: every visual variant of the widget is one [`ThemeConfig`] of fixed
//!   business constants, loadable from TOML
//! - **Value Transitions**: 500 ms cubic ease-out counters that retarget smoothly
//! - **`de-DE` Formatting**: EUR amounts, grouped numbers and "Mio." abbreviations
//!
//! ## Quick Start
//!
//! ```rust
//! use savings_lib::{calculate_savings, default_themes, CalculatorInputs};
//!
//! let theme = default_themes::standard();
//! let inputs = CalculatorInputs {
//!     is_b2b: true,
//!     cases_per_year: 120,
//!     avg_claim_amount: 2500.0,
//!     margin_pct: 4.0,
//!     show_internal_costs: true,
//! };
//!
//! let metrics = calculate_savings(inputs, &theme);
//! assert_eq!(metrics.compensation_factor, 25);
//! assert!((metrics.required_revenue - 7_500_000.0).abs() < 1e-6);
//! ```
//!
//! ## Animated Display
//!
//! ```rust
//! use std::time::Duration;
//! use savings_lib::{default_themes, CalculatorSession, ManualClock};
//!
//! let clock = ManualClock::new();
//! let mut session = CalculatorSession::new(default_themes::standard(), &clock)?;
//! session.set_cases_per_year(240);
//!
//! clock.advance(Duration::from_millis(500));
//! let frame = session.snapshot();
//! assert!(frame.settled);
//! assert_eq!(frame.saved_days, "14");
//! # Ok::<(), anyhow::Error>(())
//! ```

// ================================================================================================
// MODULES
// ================================================================================================

pub mod animation;
pub mod calculator;
pub mod format;
pub mod report;
pub mod session;

// ================================================================================================
// PUBLIC RE-EXPORTS
// ================================================================================================

// Inputs, constants and results
pub use calculator::{
    compensation_factor, compute, parse_de_number, CalculatorEngine, CalculatorInputs,
    DerivedMetrics, FeeSchedule, InputBounds, InputRange, InterestRates, ThemeConfig,
};

// Animation
pub use animation::{
    drive, ease_out_cubic, Clock, FrameScheduler, ManualClock, MonotonicClock, NoFrames,
    RealtimeFrames, SimulatedFrames, ValueAnimator, TRANSITION_DURATION,
};

// Presentation
pub use format::{
    display_floor, format_compact_currency, format_currency, format_number,
    format_signed_currency,
};
pub use report::{ComparisonReport, ComparisonRow, ValueCard, CTA_URL};
pub use session::{CalculatorSession, DisplaySnapshot};

// ================================================================================================
// DEFAULT THEMES
// ================================================================================================

/// Built-in themes, one per widget variant.
///
/// # Available Themes
///
/// - [`standard()`]: reference constants with a fixed 4 % margin
/// - [`fee_floor()`]: agency fee of 16 % with a 40 EUR minimum
/// - [`statutory_interest()`]: adds B2B/B2C default interest
/// - [`enterprise()`]: up to 2 500 cases and 100 000 EUR claims
/// - [`margin_explorer()`]: margin adjustable from 0.5 % to 50 %
/// - [`lean()`]: internal labour cost hidden by default
pub mod default_themes {
    use crate::calculator::ThemeConfig;

    /// Reference constants.
    ///
    /// **Characteristics:**
    /// - 15 % agency fee, 25 % vs 12 % write-off rate
    /// - 40 EUR B2B delay compensation per case
    /// - Margin fixed at 4 %
    pub fn standard() -> ThemeConfig {
        ThemeConfig::standard()
    }

    /// Agency fee with a per-case floor.
    ///
    /// # Example
    ///
    /// ```rust
    /// use savings_lib::default_themes;
    ///
    /// let theme = default_themes::fee_floor();
    /// assert_eq!(theme.legacy_fee.fee_for(2000.0), 320.0);
    /// assert_eq!(theme.legacy_fee.fee_for(100.0), 40.0);
    /// ```
    pub fn fee_floor() -> ThemeConfig {
        ThemeConfig::fee_floor()
    }

    /// Statutory default interest on top of the standard constants.
    ///
    /// **Characteristics:**
    /// - 2.27 % base rate plus 9 points for B2B, plus 5 points for B2C
    /// - Interest accrues over the 21-day collection time of the new process
    /// - Everything else as in [`standard()`]
    pub fn statutory_interest() -> ThemeConfig {
        ThemeConfig::statutory_interest()
    }

    /// Large creditors.
    ///
    /// **Characteristics:**
    /// - 1 to 2 500 cases per year, starting at 500
    /// - Claims from 50 EUR to 100 000 EUR, starting at 5 000 EUR
    /// - Margin fixed at 4 %
    pub fn enterprise() -> ThemeConfig {
        ThemeConfig::enterprise()
    }

    /// Margin as a slider.
    ///
    /// **Characteristics:**
    /// - Margin adjustable from 0.5 % to 50 % in 0.5 steps
    /// - Compensation factor ranges from 200x down to 2x
    /// - Standard cost constants
    pub fn margin_explorer() -> ThemeConfig {
        ThemeConfig::margin_explorer()
    }

    /// Compact variant for small businesses.
    ///
    /// **Characteristics:**
    /// - Internal labour cost starts switched off
    /// - 1 to 250 cases and claims up to 10 000 EUR
    /// - Adjustable margin from 0.5 % to 50 %
    pub fn lean() -> ThemeConfig {
        ThemeConfig::lean()
    }

    /// Every built-in theme, in declaration order.
    pub fn all() -> Vec<ThemeConfig> {
        ThemeConfig::PRESET_NAMES
            .iter()
            .filter_map(|name| ThemeConfig::preset(name))
            .collect()
    }
}

/// Clamp `inputs` to the theme's bounds and compute every derived figure.
///
/// This is the one-shot form of [`CalculatorSession`]: no animation, no state.
///
/// # Example
///
/// ```rust
/// use savings_lib::{calculate_savings, default_themes, CalculatorInputs};
///
/// let theme = default_themes::standard();
/// let inputs = CalculatorInputs { cases_per_year: 0, ..CalculatorInputs::default() };
///
/// // Zero cases is clamped to the theme's lower bound before computing.
/// let metrics = calculate_savings(inputs, &theme);
/// assert_eq!(metrics.total_claim_volume, 10.0 * 2500.0);
/// ```
pub fn calculate_savings(inputs: CalculatorInputs, theme: &ThemeConfig) -> DerivedMetrics {
    let inputs = theme.bounds.sanitize(inputs);
    compute(&inputs, theme)
}
