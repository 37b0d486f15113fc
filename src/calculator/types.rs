//! Input, bound and output records shared by the engine, the session and the report.

/// A fee that is proportional to the claim amount but never drops below a floor.
///
/// `pct` is expressed in percent (15.0 means 15 %).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FeeSchedule {
    /// Fee as a percentage of the claim amount
    pub pct: f64,
    /// Absolute minimum fee per case in EUR
    pub min_fee: f64,
}

impl Default for FeeSchedule {
    fn default() -> Self {
        Self {
            pct: 0.0,
            min_fee: 0.0,
        }
    }
}

impl FeeSchedule {
    pub fn new(pct: f64, min_fee: f64) -> Self {
        Self { pct, min_fee }
    }

    /// Fee charged for a single claim: `max(claim * pct / 100, min_fee)`.
    ///
    /// ```rust
    /// # use savings_lib::FeeSchedule;
    /// let fee = FeeSchedule::new(16.0, 40.0);
    /// assert_eq!(fee.fee_for(2000.0), 320.0);
    /// assert_eq!(fee.fee_for(100.0), 40.0);
    /// ```
    pub fn fee_for(&self, claim_amount: f64) -> f64 {
        (claim_amount * self.pct / 100.0).max(self.min_fee)
    }
}

/// Statutory default-interest rates in percent per year, split by customer regime.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct InterestRates {
    pub b2b_pct: f64,
    pub b2c_pct: f64,
}

impl InterestRates {
    pub fn rate_for(&self, is_b2b: bool) -> f64 {
        if is_b2b {
            self.b2b_pct
        } else {
            self.b2c_pct
        }
    }
}

/// Closed range of a slider input, with the slider step and the initial value.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InputRange {
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub default: f64,
}

impl InputRange {
    pub const fn new(min: f64, max: f64, step: f64, default: f64) -> Self {
        Self {
            min,
            max,
            step,
            default,
        }
    }

    /// Snap a value into `[min, max]`. NaN falls back to the lower bound.
    pub fn clamp(&self, value: f64) -> f64 {
        if value.is_nan() {
            return self.min;
        }
        value.max(self.min).min(self.max)
    }

    /// Clamp a value entered in a free-text field.
    ///
    /// Unparsable text and zero both fall back to the lower bound before clamping,
    /// so an emptied field never reaches the engine as `0`.
    pub fn clamp_text(&self, text: &str) -> f64 {
        match parse_de_number(text) {
            Some(v) if v != 0.0 => self.clamp(v),
            _ => self.min,
        }
    }

    /// Relative slider position in percent, used for the filled track.
    pub fn fill_pct(&self, value: f64) -> f64 {
        if self.max <= self.min {
            return 100.0;
        }
        (self.clamp(value) - self.min) / (self.max - self.min) * 100.0
    }
}

/// Bounds for every numeric input of one theme.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct InputBounds {
    pub cases: InputRange,
    pub claim: InputRange,
    pub margin: InputRange,
}

impl Default for InputBounds {
    fn default() -> Self {
        Self {
            cases: InputRange::new(10.0, 500.0, 10.0, 120.0),
            claim: InputRange::new(100.0, 20_000.0, 100.0, 2_500.0),
            margin: InputRange::new(0.5, 50.0, 0.5, 4.0),
        }
    }
}

impl InputBounds {
    pub fn clamp_cases(&self, cases: i64) -> u32 {
        // Lower bound is validated to be >= 1, so the cast cannot go negative.
        self.cases.clamp(cases as f64).round() as u32
    }

    pub fn clamp_claim(&self, amount: f64) -> f64 {
        self.claim.clamp(amount)
    }

    pub fn clamp_margin(&self, margin_pct: f64) -> f64 {
        self.margin.clamp(margin_pct)
    }

    pub fn parse_cases(&self, text: &str) -> u32 {
        self.cases.clamp_text(text).round() as u32
    }

    pub fn parse_claim(&self, text: &str) -> f64 {
        self.claim.clamp_text(text)
    }

    pub fn parse_margin(&self, text: &str) -> f64 {
        self.margin.clamp_text(text)
    }

    /// Clamp every numeric field of `inputs` into range.
    pub fn sanitize(&self, inputs: CalculatorInputs) -> CalculatorInputs {
        CalculatorInputs {
            cases_per_year: self.clamp_cases(inputs.cases_per_year as i64),
            avg_claim_amount: self.clamp_claim(inputs.avg_claim_amount),
            margin_pct: self.clamp_margin(inputs.margin_pct),
            ..inputs
        }
    }
}

/// Parse a number as typed into a `de-DE` text field.
///
/// Accepts `2500`, `2.500`, `2.500,50`, `4,5` and a trailing `€` or `%`.
/// Dots are read as thousands separators only when every group after them has
/// exactly three digits, so `2.5` still parses as two and a half.
pub fn parse_de_number(text: &str) -> Option<f64> {
    let cleaned: String = text
        .trim()
        .trim_end_matches(&['€', '%'][..])
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '\u{a0}')
        .collect();
    if cleaned.is_empty() {
        return None;
    }

    let normalized = if cleaned.contains(',') {
        cleaned.replace('.', "").replace(',', ".")
    } else if is_thousands_grouped(&cleaned) {
        cleaned.replace('.', "")
    } else {
        cleaned
    };

    normalized.parse::<f64>().ok().filter(|v| v.is_finite())
}

fn is_thousands_grouped(s: &str) -> bool {
    let digits = s.strip_prefix('-').unwrap_or(s);
    let mut groups = digits.split('.');
    let head = groups.next().unwrap_or_default();
    let mut saw_group = false;
    if head.is_empty() || head.len() > 3 || !head.chars().all(|c| c.is_ascii_digit()) {
        return false;
    }
    for group in groups {
        if group.len() != 3 || !group.chars().all(|c| c.is_ascii_digit()) {
            return false;
        }
        saw_group = true;
    }
    saw_group
}

/// User-adjustable inputs of one calculator instance.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CalculatorInputs {
    /// Business customers (B2B) or consumers (B2C)
    pub is_b2b: bool,
    /// Collection cases per year
    pub cases_per_year: u32,
    /// Average claim amount in EUR
    pub avg_claim_amount: f64,
    /// Profit margin in percent, always > 0 after clamping
    pub margin_pct: f64,
    /// Count internal labour cost on the traditional side
    pub show_internal_costs: bool,
}

impl Default for CalculatorInputs {
    fn default() -> Self {
        Self::from_bounds(&InputBounds::default(), true)
    }
}

impl CalculatorInputs {
    /// Initial inputs as a widget with these bounds would show them.
    pub fn from_bounds(bounds: &InputBounds, show_internal_costs: bool) -> Self {
        Self {
            is_b2b: true,
            cases_per_year: bounds.cases.default.round() as u32,
            avg_claim_amount: bounds.claim.default,
            margin_pct: bounds.margin.default,
            show_internal_costs,
        }
    }
}

/// Everything the widget displays, derived from [`CalculatorInputs`] and a theme.
///
/// Values are signed: a negative `yearly_saving` means the new process costs more.
/// Flooring at zero happens only when formatting for display.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DerivedMetrics {
    // Per case
    pub membership_fee_per_case: f64,
    pub legacy_fee_per_case: f64,
    pub new_fee_per_case: f64,
    pub legacy_default_loss_per_case: f64,
    pub new_default_loss_per_case: f64,
    pub interest_gain_per_case: f64,

    // Yearly totals, legacy side
    pub total_internal_legacy: f64,
    pub total_admin_legacy: f64,
    pub total_membership: f64,
    pub total_legacy_fees: f64,
    pub total_evidence_legacy: f64,
    pub total_default_legacy: f64,

    // Yearly totals, new process
    pub total_internal_new: f64,
    pub total_new_fees: f64,
    pub total_default_new: f64,
    pub total_b2b_compensation: f64,
    pub total_interest_gain: f64,

    pub total_legacy: f64,
    pub total_new: f64,
    /// `total_legacy - total_new`; positive when the new process is cheaper
    pub yearly_saving: f64,
    pub saving_per_case: f64,
    /// Extra money recovered thanks to the lower default rate
    pub additional_recovered: f64,

    pub total_claim_volume: f64,
    pub net_revenue_legacy: f64,
    pub net_revenue_new: f64,

    // Time
    pub legacy_hours: f64,
    pub new_hours: f64,
    pub saved_hours: f64,
    pub saved_days: f64,

    pub legacy_recovery_rate_pct: f64,
    pub new_recovery_rate_pct: f64,

    /// Revenue needed at the given margin to replace the whole claim volume
    pub required_revenue: f64,
    /// Successful transactions needed to offset one fully lost claim
    pub compensation_factor: u32,
}

impl DerivedMetrics {
    /// Legacy costs excluding internal labour and write-offs, as shown in the
    /// "costs" comparison row.
    pub fn legacy_external_costs(&self) -> f64 {
        self.total_admin_legacy
            + self.total_membership
            + self.total_legacy_fees
            + self.total_evidence_legacy
    }
}
