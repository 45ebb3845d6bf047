//! Categorical values for valuation inputs and results.
//!
//! All enums serialize as kebab-case strings (`tech-saas`, `ebitda-multiple`)
//! so that documents written by the browser front end load unchanged. Input
//! enums also implement [`FromStr`] for command-line parsing.

use std::fmt;
use std::str::FromStr;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

// ---------------------------------------------------------------------------
// BusinessType
// ---------------------------------------------------------------------------

/// Business type, which selects the base multiple ranges.
///
/// - `service`: professional services, consulting, agencies
/// - `product`: manufacturing, retail, distribution
/// - `tech-saas`: software and technology platforms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum BusinessType {
    Service,
    Product,
    TechSaas,
}

impl BusinessType {
    pub const ALL: [Self; 3] = [Self::Service, Self::Product, Self::TechSaas];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Service => "service",
            Self::Product => "product",
            Self::TechSaas => "tech-saas",
        }
    }

    /// Human-readable label shown in reports.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Service => "Service Business",
            Self::Product => "Product Business",
            Self::TechSaas => "Tech/SaaS",
        }
    }
}

impl fmt::Display for BusinessType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BusinessType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|value| value.as_str() == s)
            .ok_or_else(|| CoreError::Validation(format!("unknown business type '{s}'")))
    }
}

// ---------------------------------------------------------------------------
// GrowthTrend
// ---------------------------------------------------------------------------

/// Year-over-year revenue trajectory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum GrowthTrend {
    Declining,
    Flat,
    Growing,
}

impl GrowthTrend {
    pub const ALL: [Self; 3] = [Self::Declining, Self::Flat, Self::Growing];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Declining => "declining",
            Self::Flat => "flat",
            Self::Growing => "growing",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Declining => "Declining",
            Self::Flat => "Flat",
            Self::Growing => "Growing",
        }
    }
}

impl fmt::Display for GrowthTrend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GrowthTrend {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|value| value.as_str() == s)
            .ok_or_else(|| CoreError::Validation(format!("unknown growth trend '{s}'")))
    }
}

// ---------------------------------------------------------------------------
// CustomerConcentration
// ---------------------------------------------------------------------------

/// Share of revenue that depends on the single largest customer.
///
/// - `high`: more than 40%
/// - `medium`: 20-40%
/// - `low`: under 20%
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum CustomerConcentration {
    High,
    Medium,
    Low,
}

impl CustomerConcentration {
    pub const ALL: [Self; 3] = [Self::High, Self::Medium, Self::Low];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::High => "High (>40% from one customer)",
            Self::Medium => "Medium (20-40% from one customer)",
            Self::Low => "Low/Diversified (<20%)",
        }
    }
}

impl fmt::Display for CustomerConcentration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CustomerConcentration {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL.into_iter().find(|value| value.as_str() == s).ok_or_else(|| {
            CoreError::Validation(format!("unknown customer concentration '{s}'"))
        })
    }
}

// ---------------------------------------------------------------------------
// Confidence
// ---------------------------------------------------------------------------

/// How much underlying data supports a valuation estimate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum Confidence {
    Low,
    Medium,
    High,
}

impl Confidence {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// ValuationMethod
// ---------------------------------------------------------------------------

/// Method a valuation was computed with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum ValuationMethod {
    EbitdaMultiple,
    RevenueMultiple,
    InsufficientData,
}

impl ValuationMethod {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::EbitdaMultiple => "ebitda-multiple",
            Self::RevenueMultiple => "revenue-multiple",
            Self::InsufficientData => "insufficient-data",
        }
    }
}

impl fmt::Display for ValuationMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// AdjustmentImpact
// ---------------------------------------------------------------------------

/// Direction of a valuation adjustment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum AdjustmentImpact {
    Premium,
    Discount,
    Neutral,
}

impl AdjustmentImpact {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Premium => "premium",
            Self::Discount => "discount",
            Self::Neutral => "neutral",
        }
    }
}

impl fmt::Display for AdjustmentImpact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
