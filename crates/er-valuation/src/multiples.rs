//! Base multiple ranges per business type.

use er_core::enums::BusinessType;
use er_core::valuation::ValueRange;

/// EBITDA and revenue multiple ranges for one business type.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MultipleRange {
    pub business_type: BusinessType,
    pub ebitda: ValueRange,
    pub revenue: ValueRange,
}

/// UK SME market ranges (UK200Group SME Valuation Index 2024, Hilton Smythe H2 2024).
const MULTIPLE_RANGES: [MultipleRange; 3] = [
    MultipleRange {
        business_type: BusinessType::Service,
        ebitda: ValueRange::new(2.0, 4.0),
        revenue: ValueRange::new(0.5, 1.0),
    },
    MultipleRange {
        business_type: BusinessType::Product,
        ebitda: ValueRange::new(3.0, 6.0),
        revenue: ValueRange::new(0.8, 1.5),
    },
    MultipleRange {
        business_type: BusinessType::TechSaas,
        ebitda: ValueRange::new(4.0, 10.0),
        revenue: ValueRange::new(1.0, 2.0),
    },
];

#[must_use]
pub const fn base_multiples(business_type: BusinessType) -> MultipleRange {
    match business_type {
        BusinessType::Service => MULTIPLE_RANGES[0],
        BusinessType::Product => MULTIPLE_RANGES[1],
        BusinessType::TechSaas => MULTIPLE_RANGES[2],
    }
}
