//! `de-DE` number and EUR currency formatting.
//!
//! Thousands are grouped with `.`, decimals use `,`, and the euro sign follows the
//! amount after a no-break space (`1.234,50 €`). Rounding is half away from zero.

/// Separator between amount and currency sign.
pub const NBSP: char = '\u{a0}';

/// Amounts from this value upwards are abbreviated by [`format_compact_currency`].
pub const MILLION: f64 = 1_000_000.0;

/// Floor applied to every currency amount right before it is displayed.
///
/// Metrics keep their signed values; only what the user sees is floored.
pub fn display_floor(value: f64) -> f64 {
    value.max(0.0)
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(c);
    }
    out
}

/// Fraction digits beyond this are not rendered.
pub const MAX_DECIMALS: usize = 6;

/// Returns `(is_negative, digits)` where `digits` is the grouped magnitude.
fn render(value: f64, decimals: usize) -> (bool, String) {
    if !value.is_finite() {
        return (false, "0".to_string());
    }
    let decimals = decimals.min(MAX_DECIMALS);
    let scale = 10f64.powi(decimals as i32);
    let scaled = (value.abs() * scale).round();
    let whole_part = (scaled / scale).trunc();
    let whole = group_thousands(&format!("{:.0}", whole_part));
    let negative = value < 0.0 && scaled != 0.0;

    if decimals == 0 {
        (negative, whole)
    } else {
        let frac = (scaled - whole_part * scale).max(0.0) as u64;
        (negative, format!("{},{:0width$}", whole, frac, width = decimals))
    }
}

/// `1.234,5` style plain number with exactly `decimals` fraction digits.
pub fn format_number(value: f64, decimals: usize) -> String {
    let (negative, digits) = render(value, decimals);
    if negative {
        format!("-{}", digits)
    } else {
        digits
    }
}

/// EUR amount with exactly `decimals` fraction digits: `1.234 €`, `-12,50 €`.
pub fn format_currency(value: f64, decimals: usize) -> String {
    format!("{}{}€", format_number(value, decimals), NBSP)
}

/// EUR amount with an explicit sign: `+93.960 €`, `-120 €`.
pub fn format_signed_currency(value: f64, decimals: usize) -> String {
    let (negative, digits) = render(value, decimals);
    let sign = if negative { '-' } else { '+' };
    format!("{}{}{}€", sign, digits, NBSP)
}

/// Drop a trailing `,0`/`,00` so whole numbers print without decimals.
fn trim_fraction(mut text: String) -> String {
    if let Some(comma) = text.find(',') {
        let trimmed_len = text.trim_end_matches('0').len();
        text.truncate(if trimmed_len == comma + 1 {
            comma
        } else {
            trimmed_len
        });
    }
    text
}

/// EUR amount, abbreviated to millions from [`MILLION`] upwards: `7,5 Mio. €`.
pub fn format_compact_currency(value: f64) -> String {
    if value.abs() >= MILLION {
        let millions = trim_fraction(format_number(value / MILLION, 1));
        format!("{}{}Mio.{}€", millions, NBSP, NBSP)
    } else {
        format_currency(value, 0)
    }
}

/// Percentage with at most one decimal: `75%`, `4,5%`.
pub fn format_percent(value: f64) -> String {
    format!("{}%", trim_fraction(format_number(value, 1)))
}

/// Whole hours: `60 Std.`
pub fn format_hours(hours: f64) -> String {
    format!("{} Std.", format_number(hours, 0))
}

/// Whole days: `41 Tage`, `1 Tag`.
pub fn format_days(days: f64) -> String {
    let text = format_number(days, 0);
    if text == "1" {
        "1 Tag".to_string()
    } else {
        format!("{} Tage", text)
    }
}

/// Compensation factor as a multiplier: `25x`.
pub fn format_factor(factor: u32) -> String {
    format!("{}x", format_number(factor as f64, 0))
}
