//! # er-valuation
//!
//! Indicative business valuation from sparse financial inputs.
//!
//! The engine prefers an EBITDA multiple over normalised EBITDA and falls
//! back to a turnover multiple for businesses turning over at most £3M.
//! Base multiples depend on the business type and are adjusted for customer
//! concentration, recurring revenue and growth; small companies are pulled
//! toward the low end of their range. The result carries enterprise and
//! equity value ranges, the adjustments applied, a confidence rating and
//! caveats. [`calculate_valuation`] is a pure function and never fails.

pub mod adjustments;
pub mod caveats;
pub mod engine;
pub mod format;
pub mod multiples;

pub use engine::{calculate_valuation, has_minimum_data, latest_turnover, normalised_ebitda};
pub use format::{format_currency, format_number, parse_amount};
pub use multiples::{MultipleRange, base_multiples};
