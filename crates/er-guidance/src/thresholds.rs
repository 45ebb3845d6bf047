//! Deal-breaker and critical-threshold detection.

use std::fmt;

use er_core::scoring::{average_for, domain_averages};
use er_core::{QuestionnaireSpec, Responses};
use serde::Serialize;

/// Averages below this count as Level 0.
pub const LEVEL_ZERO_CEILING: f64 = 0.9;

// ---------------------------------------------------------------------------
// ViolationType
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ViolationType {
    LevelZero,
    FinancialCritical,
    LegalCritical,
    PeopleCritical,
}

impl ViolationType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::LevelZero => "level-zero",
            Self::FinancialCritical => "financial-critical",
            Self::LegalCritical => "legal-critical",
            Self::PeopleCritical => "people-critical",
        }
    }

    /// Type of a critical-threshold breach for a dimension id.
    #[must_use]
    pub fn critical_for(dimension_id: &str) -> Self {
        match dimension_id {
            "financial" => Self::FinancialCritical,
            "legal" => Self::LegalCritical,
            "people" => Self::PeopleCritical,
            _ => Self::LevelZero,
        }
    }
}

impl fmt::Display for ViolationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Severity
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Severity {
    Blocker,
    Critical,
}

impl Severity {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Blocker => "blocker",
            Self::Critical => "critical",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// ThresholdViolation
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThresholdViolation {
    #[serde(rename = "type")]
    pub violation_type: ViolationType,
    pub domain_id: String,
    pub domain_name: String,
    pub current_level: f64,
    pub required_level: f64,
    pub severity: Severity,
    pub message: String,
}

/// Level-0 blockers and critical-threshold breaches, blockers first.
///
/// A dimension can produce both. Order within each severity follows the
/// questionnaire.
#[must_use]
pub fn detect_threshold_violations(
    spec: &QuestionnaireSpec,
    responses: &Responses,
) -> Vec<ThresholdViolation> {
    let averages = domain_averages(spec, responses);
    let mut violations = Vec::new();

    for dimension in &spec.dimensions {
        let average = average_for(&averages, &dimension.id);

        if average < LEVEL_ZERO_CEILING {
            violations.push(ThresholdViolation {
                violation_type: ViolationType::LevelZero,
                domain_id: dimension.id.clone(),
                domain_name: dimension.name.clone(),
                current_level: average,
                required_level: 1.0,
                severity: Severity::Blocker,
                message: format!(
                    "{} is at Level 0 (Incomplete). This is a potential deal-breaker that must be addressed before engaging buyers.",
                    dimension.name
                ),
            });
        }

        let minimum = dimension.min_acceptable.filter(|min| *min > 0.0);
        if let Some(minimum) = minimum.filter(|min| dimension.is_critical() && average < *min) {
            violations.push(ThresholdViolation {
                violation_type: ViolationType::critical_for(&dimension.id),
                domain_id: dimension.id.clone(),
                domain_name: dimension.name.clone(),
                current_level: average,
                required_level: minimum,
                severity: Severity::Critical,
                message: format!(
                    "{} is below the critical threshold (Level {minimum}). This may prevent transaction completion or significantly impact valuation.",
                    dimension.name
                ),
            });
        }
    }

    // Stable: keeps questionnaire order within each severity.
    violations.sort_by_key(|v| v.severity != Severity::Blocker);
    violations
}
