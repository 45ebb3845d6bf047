//! Time-to-transaction estimate.

use er_core::scoring::domain_averages;
use er_core::{QuestionnaireSpec, Responses};
use serde::Serialize;

use crate::benchmark::benchmark_comparison;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineGuidance {
    /// Unweighted mean of the domain averages.
    pub overall_level: f64,
    pub estimated_months: String,
    pub priority: String,
    pub recommendations: Vec<String>,
    /// Benchmark minimum mean less the overall level, when a benchmark was used.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub benchmark_gap: Option<f64>,
}

struct Band {
    months: &'static str,
    priority: &'static str,
    recommendations: [&'static str; 3],
}

const SIGNIFICANT: &str = "Significant preparation required";
const FOUNDATION: &str = "Foundation in place but gaps remain";
const MOST_BUYERS: &str = "Transaction-ready for most buyer types";
const OPTIMISED: &str = "Fully optimised for competitive process";

const BENCHMARK_BANDS: [Band; 4] = [
    Band {
        months: "18-24 months",
        priority: SIGNIFICANT,
        recommendations: [
            "Focus on minimum levels shown on the radar plot across all domains before engaging buyers",
            "Address any Level 0 domains immediately - these are always deal-breakers",
            "Prioritise Financial and Legal & Corporate as foundational requirements",
        ],
    },
    Band {
        months: "9-18 months",
        priority: FOUNDATION,
        recommendations: [
            "Suitable for trade buyer conversations with appropriate expectations",
            "Focus on documenting processes and building management depth",
            "Ensure all critical domains (Financial, Legal, People) meet level minimums",
        ],
    },
    Band {
        months: "3-9 months",
        priority: MOST_BUYERS,
        recommendations: [
            "Focus on elevating any domains below Level 3",
            "Begin preparing due diligence materials for key domains",
            "Consider engaging advisors for transaction process optimisation",
        ],
    },
    Band {
        months: "Ready now",
        priority: OPTIMISED,
        recommendations: [
            "Ready for PE auction or premium trade sale",
            "Vendor DD investment likely to yield significant ROI",
            "Focus on maintaining current position and addressing any remaining Level 3 gaps",
        ],
    },
];

const OVERALL_BANDS: [Band; 4] = [
    Band {
        months: "18-24 months",
        priority: SIGNIFICANT,
        recommendations: [
            "Focus on achieving Level 2 baseline across all domains before engaging buyers",
            "Address any Level 0 domains immediately - these are deal-breakers",
            "Prioritise Financial and Legal & Corporate as foundational requirements",
        ],
    },
    Band {
        months: "9-15 months",
        priority: FOUNDATION,
        recommendations: [
            "Suitable for trade buyer conversations with appropriate expectations",
            "Focus on documenting processes and building management depth",
            "Ensure all critical domains (Financial, Legal, People) meet Level 2 minimum",
        ],
    },
    Band {
        months: "3-9 months",
        priority: MOST_BUYERS,
        recommendations: [
            "Focus on elevating any domains that are much below the others",
            "Begin preparing due diligence materials for key domains",
            "Consider engaging advisors for transaction process optimisation",
        ],
    },
    Band {
        months: "Ready now",
        priority: OPTIMISED,
        recommendations: [
            "Ready for competitive PE auction or premium trade sale",
            "Ensure that all domains are evenly strong to maximise valuation",
            "Focus on maintaining current position and addressing any remaining Level 3 gaps",
        ],
    },
];

fn benchmark_band(gap: f64) -> &'static Band {
    if gap > 1.5 {
        &BENCHMARK_BANDS[0]
    } else if gap > 0.5 {
        &BENCHMARK_BANDS[1]
    } else if gap > 0.0 {
        &BENCHMARK_BANDS[2]
    } else {
        &BENCHMARK_BANDS[3]
    }
}

fn overall_band(overall: f64) -> &'static Band {
    if overall < 1.0 {
        &OVERALL_BANDS[0]
    } else if overall < 2.0 {
        &OVERALL_BANDS[1]
    } else if overall < 3.0 {
        &OVERALL_BANDS[2]
    } else {
        &OVERALL_BANDS[3]
    }
}

/// Estimated preparation time.
///
/// With a known sector and lifecycle phase the estimate is driven by how far
/// the overall level sits below the benchmark minimums; otherwise by the
/// overall level alone.
#[must_use]
pub fn timeline_guidance(
    spec: &QuestionnaireSpec,
    responses: &Responses,
    sector_id: Option<&str>,
    lifecycle_id: Option<&str>,
) -> TimelineGuidance {
    let averages = domain_averages(spec, responses);
    #[allow(clippy::cast_precision_loss)]
    let overall_level = if averages.is_empty() {
        0.0
    } else {
        averages.iter().map(|d| d.average).sum::<f64>() / averages.len() as f64
    };

    let comparison = sector_id
        .zip(lifecycle_id)
        .and_then(|(sector, lifecycle)| benchmark_comparison(spec, responses, sector, lifecycle));

    let (band, benchmark_gap) = match comparison {
        Some(comparison) => {
            let gap = comparison.minimum_scores.mean() - overall_level;
            (benchmark_band(gap), Some(gap))
        }
        None => (overall_band(overall_level), None),
    };

    TimelineGuidance {
        overall_level,
        estimated_months: band.months.to_string(),
        priority: band.priority.to_string(),
        recommendations: band.recommendations.iter().map(ToString::to_string).collect(),
        benchmark_gap,
    }
}
