use anyhow::{bail, Result};

use crate::calculator::types::{FeeSchedule, InputBounds, InputRange, InterestRates};

/// Fixed business assumptions of one calculator theme.
///
/// Every visual variant of the widget runs the same arithmetic; they only differ
/// in these constants. None of them is user-adjustable at runtime.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ThemeConfig {
    /// Display name of the theme
    pub name: String,

    /// Internal staff cost per case in the traditional process (EUR)
    pub internal_cost_per_case: f64,
    /// Postage, printing and other material per case (EUR)
    pub admin_cost_per_case: f64,
    /// Yearly membership fee of a credit-protection association (EUR)
    pub membership_annual_fee: f64,
    /// Fee of a traditional collection agency
    pub legacy_fee: FeeSchedule,
    /// Yearly evidence-keeping fee per case (EUR)
    pub legacy_evidence_fee_per_case: f64,
    /// Share of claims written off in the traditional process (percent)
    pub legacy_default_rate_pct: f64,

    /// Share of claims written off with the new process (percent)
    pub new_default_rate_pct: f64,
    /// Remaining internal cost per case with the new process (EUR)
    pub new_internal_cost_per_case: f64,
    /// Fee charged by the new process
    pub new_fee: FeeSchedule,
    /// Flat delay compensation a business debtor owes per case (EUR, B2B only)
    pub b2b_delay_compensation: f64,
    /// Default interest collected on top of the claim
    pub interest: InterestRates,

    /// Internal handling time per case, traditional process
    pub legacy_minutes_per_case: f64,
    /// Internal handling time per case, new process
    pub new_minutes_per_case: f64,
    pub hours_per_work_day: f64,

    /// Average days until payment, traditional process
    pub legacy_collection_days: f64,
    /// Average days until payment, new process
    pub new_collection_days: f64,

    /// Whether the internal-cost toggle starts switched on
    pub show_internal_costs_by_default: bool,

    pub bounds: InputBounds,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self::standard()
    }
}

impl ThemeConfig {
    /// The reference theme: fixed 4 % margin, no interest, no fee floor.
    pub fn standard() -> Self {
        Self {
            name: "standard".to_string(),
            internal_cost_per_case: 25.0,
            admin_cost_per_case: 12.0,
            membership_annual_fee: 300.0,
            legacy_fee: FeeSchedule::new(15.0, 0.0),
            legacy_evidence_fee_per_case: 5.0,
            legacy_default_rate_pct: 25.0,
            new_default_rate_pct: 12.0,
            new_internal_cost_per_case: 1.5,
            new_fee: FeeSchedule::default(),
            b2b_delay_compensation: 40.0,
            interest: InterestRates::default(),
            legacy_minutes_per_case: 30.0,
            new_minutes_per_case: 2.0,
            hours_per_work_day: 8.0,
            legacy_collection_days: 41.0,
            new_collection_days: 21.0,
            show_internal_costs_by_default: true,
            bounds: InputBounds {
                margin: InputRange::new(4.0, 4.0, 0.0, 4.0),
                ..InputBounds::default()
            },
        }
    }

    /// Agency fee of 16 % with a 40 EUR minimum per case.
    pub fn fee_floor() -> Self {
        Self {
            name: "fee_floor".to_string(),
            legacy_fee: FeeSchedule::new(16.0, 40.0),
            ..Self::standard()
        }
    }

    /// Adds statutory default interest: 9 (B2B) or 5 (B2C) points over a 2.27 % base rate.
    pub fn statutory_interest() -> Self {
        Self {
            name: "statutory_interest".to_string(),
            interest: InterestRates {
                b2b_pct: 2.27 + 9.0,
                b2c_pct: 2.27 + 5.0,
            },
            ..Self::standard()
        }
    }

    /// Wide ranges for large creditors.
    pub fn enterprise() -> Self {
        Self {
            name: "enterprise".to_string(),
            bounds: InputBounds {
                cases: InputRange::new(1.0, 2_500.0, 1.0, 500.0),
                claim: InputRange::new(50.0, 100_000.0, 50.0, 5_000.0),
                margin: InputRange::new(4.0, 4.0, 0.0, 4.0),
            },
            ..Self::standard()
        }
    }

    /// Exposes the profit margin as a slider.
    pub fn margin_explorer() -> Self {
        Self {
            name: "margin_explorer".to_string(),
            bounds: InputBounds::default(),
            ..Self::standard()
        }
    }

    /// Starts with internal labour cost left out of the comparison.
    pub fn lean() -> Self {
        Self {
            name: "lean".to_string(),
            show_internal_costs_by_default: false,
            bounds: InputBounds {
                cases: InputRange::new(1.0, 250.0, 1.0, 50.0),
                claim: InputRange::new(100.0, 10_000.0, 100.0, 1_500.0),
                margin: InputRange::new(0.5, 50.0, 0.5, 4.0),
            },
            ..Self::standard()
        }
    }

    /// Look up a preset by its name.
    pub fn preset(name: &str) -> Option<Self> {
        match name {
            "standard" => Some(Self::standard()),
            "fee_floor" => Some(Self::fee_floor()),
            "statutory_interest" => Some(Self::statutory_interest()),
            "enterprise" => Some(Self::enterprise()),
            "margin_explorer" => Some(Self::margin_explorer()),
            "lean" => Some(Self::lean()),
            _ => None,
        }
    }

    /// Names accepted by [`ThemeConfig::preset`].
    pub const PRESET_NAMES: [&'static str; 6] = [
        "standard",
        "fee_floor",
        "statutory_interest",
        "enterprise",
        "margin_explorer",
        "lean",
    ];

    /// Check that the constants keep the engine total.
    ///
    /// The engine divides by the margin and the work-day length and assumes at
    /// least one case, so those bounds must stay positive.
    pub fn validate(&self) -> Result<()> {
        for (label, range) in [
            ("cases", &self.bounds.cases),
            ("claim", &self.bounds.claim),
            ("margin", &self.bounds.margin),
        ] {
            if !(range.min.is_finite() && range.max.is_finite()) {
                bail!("{} bounds must be finite, got [{}, {}]", label, range.min, range.max);
            }
            if range.min > range.max {
                bail!("{} bounds are inverted: min {} > max {}", label, range.min, range.max);
            }
            if !(range.min..=range.max).contains(&range.default) {
                bail!(
                    "{} default {} lies outside [{}, {}]",
                    label,
                    range.default,
                    range.min,
                    range.max
                );
            }
        }
        if self.bounds.cases.min < 1.0 {
            bail!("cases lower bound must be at least 1, got {}", self.bounds.cases.min);
        }
        if self.bounds.margin.min <= 0.0 {
            bail!("margin lower bound must be positive, got {}", self.bounds.margin.min);
        }
        if self.bounds.claim.min < 0.0 {
            bail!("claim lower bound must not be negative, got {}", self.bounds.claim.min);
        }
        if !self.hours_per_work_day.is_finite() || self.hours_per_work_day <= 0.0 {
            bail!("hours_per_work_day must be positive, got {}", self.hours_per_work_day);
        }

        let non_negative = [
            ("internal_cost_per_case", self.internal_cost_per_case),
            ("admin_cost_per_case", self.admin_cost_per_case),
            ("membership_annual_fee", self.membership_annual_fee),
            ("legacy_fee.pct", self.legacy_fee.pct),
            ("legacy_fee.min_fee", self.legacy_fee.min_fee),
            ("legacy_evidence_fee_per_case", self.legacy_evidence_fee_per_case),
            ("new_internal_cost_per_case", self.new_internal_cost_per_case),
            ("new_fee.pct", self.new_fee.pct),
            ("new_fee.min_fee", self.new_fee.min_fee),
            ("b2b_delay_compensation", self.b2b_delay_compensation),
            ("interest.b2b_pct", self.interest.b2b_pct),
            ("interest.b2c_pct", self.interest.b2c_pct),
            ("legacy_minutes_per_case", self.legacy_minutes_per_case),
            ("new_minutes_per_case", self.new_minutes_per_case),
            ("legacy_collection_days", self.legacy_collection_days),
            ("new_collection_days", self.new_collection_days),
        ];
        for (label, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                bail!("{} must be a non-negative number, got {}", label, value);
            }
        }

        for (label, rate) in [
            ("legacy_default_rate_pct", self.legacy_default_rate_pct),
            ("new_default_rate_pct", self.new_default_rate_pct),
        ] {
            if !(0.0..=100.0).contains(&rate) {
                bail!("{} must lie within 0..=100, got {}", label, rate);
            }
        }

        Ok(())
    }
}

#[cfg(feature = "serde")]
mod loading {
    use super::ThemeConfig;
    use anyhow::{Context, Result};
    use std::path::Path;
    use tracing::debug;

    impl ThemeConfig {
        /// Parse a theme from TOML. Missing keys keep their [`ThemeConfig::standard`] value.
        ///
        /// ```rust
        /// # use savings_lib::ThemeConfig;
        /// let theme = ThemeConfig::from_toml_str(r#"
        ///     name = "custom"
        ///     legacy_default_rate_pct = 30.0
        ///
        ///     [legacy_fee]
        ///     pct = 16.0
        ///     min_fee = 40.0
        /// "#)?;
        /// assert_eq!(theme.legacy_fee.min_fee, 40.0);
        /// assert_eq!(theme.admin_cost_per_case, 12.0);
        /// # Ok::<(), anyhow::Error>(())
        /// ```
        pub fn from_toml_str(source: &str) -> Result<Self> {
            let theme: ThemeConfig =
                toml::from_str(source).context("failed to parse theme configuration")?;
            theme
                .validate()
                .with_context(|| format!("invalid theme '{}'", theme.name))?;
            debug!(theme = %theme.name, "loaded theme configuration");
            Ok(theme)
        }

        /// Read and validate a theme file.
        pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
            let path = path.as_ref();
            let source = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read theme file {}", path.display()))?;
            Self::from_toml_str(&source).with_context(|| format!("in {}", path.display()))
        }

        /// Serialize the theme back to TOML, e.g. to seed a custom theme file.
        pub fn to_toml_string(&self) -> Result<String> {
            toml::to_string_pretty(self).context("failed to serialize theme configuration")
        }
    }
}
