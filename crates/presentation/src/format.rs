use num_format::{Locale, ToFormattedString};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

/// Metric prefixes from 10^-24 (y) to 10^24 (Y), one per power of 1000.
const SI_PREFIXES: [&str; 17] = [
    "y", "z", "a", "f", "p", "n", "µ", "m", "", "k", "M", "G", "T", "P", "E", "Z", "Y",
];
const SI_UNITY: i32 = 8;

/// Two decimals with thousands separators: `1234567.891` → `1,234,567.89`.
pub fn grouped(value: Decimal) -> String {
    let rounded = value.round_dp(2);
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    let magnitude = rounded.abs();
    let whole = magnitude.trunc().to_u128().unwrap_or_default();
    let cents = (magnitude.fract() * Decimal::ONE_HUNDRED)
        .to_u32()
        .unwrap_or_default();
    format!("{sign}{}.{cents:02}", whole.to_formatted_string(&Locale::en))
}

/// `grouped` with a rupee sign.
pub fn rupees(value: Decimal) -> String {
    format!("₹{}", grouped(value))
}

/// A counter without trailing zeros: `5.00` → `5`.
pub fn count(value: Decimal) -> String {
    value.normalize().to_string()
}

/// Two significant digits with a metric prefix, as used on chart bars:
/// `840` → `840`, `1234` → `1.2k`, `100000` → `100k`.
pub fn si(value: Decimal) -> String {
    let Some(x) = value.to_f64() else {
        return value.to_string();
    };
    if x == 0.0 {
        return "0.0".to_string();
    }

    let rounded = round_significant(x, 2);
    let exponent = decimal_exponent(rounded);
    let group = exponent.div_euclid(3).clamp(-SI_UNITY, SI_UNITY);
    let scaled = if group >= 0 {
        rounded / 10f64.powi(group * 3)
    } else {
        rounded * 10f64.powi(-group * 3)
    };
    let integer_digits = exponent - group * 3 + 1;
    let decimals = (2 - integer_digits).max(0) as usize;
    format!(
        "{scaled:.decimals$}{}",
        SI_PREFIXES[(group + SI_UNITY) as usize]
    )
}

fn round_significant(x: f64, digits: i32) -> f64 {
    let shift = digits - 1 - decimal_exponent(x);
    if shift >= 0 {
        let factor = 10f64.powi(shift);
        (x * factor).round() / factor
    } else {
        let factor = 10f64.powi(-shift);
        (x / factor).round() * factor
    }
}

/// floor(log10(|x|)), corrected for rounding at exact powers of ten.
fn decimal_exponent(x: f64) -> i32 {
    let magnitude = x.abs();
    let mut exponent = magnitude.log10().floor() as i32;
    if 10f64.powi(exponent + 1) <= magnitude {
        exponent += 1;
    } else if 10f64.powi(exponent) > magnitude {
        exponent -= 1;
    }
    exponent
}
