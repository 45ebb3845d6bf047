//! Per-field digit tables and radices.
//!
//! Digit 0 means "unset" for every optional field. That convention is part of
//! the format and is shared by categorical fields (where 0 is not "flat" or
//! "low") and by financial figures (where 0 is not £0).

use er_core::enums::{BusinessType, CustomerConcentration, GrowthTrend};

use crate::warnings::EncodeWarning;

pub const FORMAT_VERSION: u32 = 1;
pub const VERSION_RADIX: u32 = 2;
pub const BUSINESS_TYPE_RADIX: u32 = 4;
pub const TURNOVER_RADIX: u32 = 100_001;
pub const EBITDA_RADIX: u32 = 200_001;
pub const DEBT_RADIX: u32 = 100_001;
pub const GROWTH_RADIX: u32 = 4;
pub const CONCENTRATION_RADIX: u32 = 4;
pub const RECURRING_RADIX: u32 = 102;

/// Largest amount in thousands (£100M).
const MAX_THOUSANDS: f64 = 100_000.0;
/// Most negative EBITDA in thousands (-£99.999M).
const MIN_EBITDA_THOUSANDS: f64 = -99_999.0;
/// Added to EBITDA thousands so that digit 0 stays free for "unset".
const EBITDA_OFFSET: f64 = 100_000.0;
const MAX_RECURRING: u8 = 100;

// ---- categorical ----

pub const fn business_type_digit(value: Option<BusinessType>) -> u32 {
    match value {
        None => 0,
        Some(BusinessType::Service) => 1,
        Some(BusinessType::Product) => 2,
        Some(BusinessType::TechSaas) => 3,
    }
}

pub const fn business_type_from_digit(digit: u32) -> Option<BusinessType> {
    match digit {
        1 => Some(BusinessType::Service),
        2 => Some(BusinessType::Product),
        3 => Some(BusinessType::TechSaas),
        _ => None,
    }
}

pub const fn growth_digit(value: Option<GrowthTrend>) -> u32 {
    match value {
        None => 0,
        Some(GrowthTrend::Declining) => 1,
        Some(GrowthTrend::Flat) => 2,
        Some(GrowthTrend::Growing) => 3,
    }
}

pub const fn growth_from_digit(digit: u32) -> Option<GrowthTrend> {
    match digit {
        1 => Some(GrowthTrend::Declining),
        2 => Some(GrowthTrend::Flat),
        3 => Some(GrowthTrend::Growing),
        _ => None,
    }
}

pub const fn concentration_digit(value: Option<CustomerConcentration>) -> u32 {
    match value {
        None => 0,
        Some(CustomerConcentration::High) => 1,
        Some(CustomerConcentration::Medium) => 2,
        Some(CustomerConcentration::Low) => 3,
    }
}

pub const fn concentration_from_digit(digit: u32) -> Option<CustomerConcentration> {
    match digit {
        1 => Some(CustomerConcentration::High),
        2 => Some(CustomerConcentration::Medium),
        3 => Some(CustomerConcentration::Low),
        _ => None,
    }
}

pub fn recurring_digit(value: Option<u8>, warnings: &mut Vec<EncodeWarning>) -> u32 {
    let Some(percent) = value else {
        return 0;
    };
    if percent > MAX_RECURRING {
        warnings.push(EncodeWarning::Clamped {
            field: "recurringRevenuePercentage".into(),
            original: f64::from(percent),
            stored: f64::from(MAX_RECURRING),
        });
    }
    u32::from(percent.min(MAX_RECURRING)) + 1
}

pub fn recurring_from_digit(digit: u32) -> Option<u8> {
    digit
        .checked_sub(1)
        .and_then(|percent| u8::try_from(percent).ok())
        .map(|percent| percent.min(MAX_RECURRING))
}

// ---- financial ----

/// Nearest whole thousand, halves rounded up.
fn to_thousands(value: f64) -> f64 {
    (value / 1000.0 + 0.5).floor()
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
const fn small_digit(nonnegative_whole: f64) -> u32 {
    nonnegative_whole as u32
}

/// Digit for a turnover or debt figure: thousands in `1..=100000`, 0 = unset.
pub fn amount_digit(value: Option<f64>, field: &str, warnings: &mut Vec<EncodeWarning>) -> u32 {
    let Some(value) = value else {
        return 0;
    };
    if !value.is_finite() {
        warnings.push(EncodeWarning::NotFinite {
            field: field.to_string(),
        });
        return 0;
    }
    let thousands = to_thousands(value);
    if thousands <= 0.0 {
        warnings.push(EncodeWarning::ZeroTreatedAsUnset {
            field: field.to_string(),
            original: value,
        });
        return 0;
    }
    let stored = clamp_and_report(value, thousands, 1.0, MAX_THOUSANDS, field, warnings);
    small_digit(stored)
}

/// Digit for an EBITDA figure: 0 = unset, otherwise thousands in
/// `-99999..=100000` shifted up by 100000.
pub fn ebitda_digit(value: Option<f64>, field: &str, warnings: &mut Vec<EncodeWarning>) -> u32 {
    let Some(value) = value else {
        return 0;
    };
    if !value.is_finite() {
        warnings.push(EncodeWarning::NotFinite {
            field: field.to_string(),
        });
        return 0;
    }
    let thousands = to_thousands(value);
    let stored = clamp_and_report(
        value,
        thousands,
        MIN_EBITDA_THOUSANDS,
        MAX_THOUSANDS,
        field,
        warnings,
    );
    small_digit(stored + EBITDA_OFFSET)
}

fn clamp_and_report(
    value: f64,
    thousands: f64,
    min: f64,
    max: f64,
    field: &str,
    warnings: &mut Vec<EncodeWarning>,
) -> f64 {
    let stored = thousands.clamp(min, max);
    if stored != thousands {
        warnings.push(EncodeWarning::Clamped {
            field: field.to_string(),
            original: value,
            stored: stored * 1000.0,
        });
    } else if stored * 1000.0 != value {
        warnings.push(EncodeWarning::Rounded {
            field: field.to_string(),
            original: value,
            stored: stored * 1000.0,
        });
    }
    stored
}

pub fn amount_from_digit(digit: u32) -> Option<f64> {
    (digit != 0).then(|| f64::from(digit) * 1000.0)
}

pub fn ebitda_from_digit(digit: u32) -> Option<f64> {
    (digit != 0).then(|| (f64::from(digit) - EBITDA_OFFSET) * 1000.0)
}
