//! Comparison of domain averages against a sector/lifecycle benchmark.

use er_core::questionnaire::{DOMAIN_IDS, DomainScores};
use er_core::scoring::{benchmark_scores, domain_averages};
use er_core::{QuestionnaireSpec, Responses};
use serde::Serialize;

/// One domain against the benchmark minimum and average.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DomainGap {
    pub domain: String,
    pub user_score: f64,
    pub min_score: f64,
    pub avg_score: f64,
    pub below_minimum: bool,
    pub below_average: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BenchmarkComparison {
    pub sector: String,
    pub sector_name: String,
    pub lifecycle: String,
    pub lifecycle_name: String,
    pub user_scores: DomainScores,
    pub minimum_scores: DomainScores,
    pub average_scores: DomainScores,
    /// In radar-chart domain order.
    pub gaps: Vec<DomainGap>,
    pub critical_domains: Vec<String>,
}

impl BenchmarkComparison {
    /// Gaps where the user is below the benchmark minimum.
    pub fn below_minimum(&self) -> impl Iterator<Item = &DomainGap> {
        self.gaps.iter().filter(|gap| gap.below_minimum)
    }
}

/// Compare responses with the benchmark for `sector_id` at `lifecycle_id`.
///
/// `None` when the questionnaire has no benchmarks or either id is unknown.
#[must_use]
pub fn benchmark_comparison(
    spec: &QuestionnaireSpec,
    responses: &Responses,
    sector_id: &str,
    lifecycle_id: &str,
) -> Option<BenchmarkComparison> {
    let sector = spec.sectors().iter().find(|s| s.id == sector_id)?;
    let phase = sector.lifecycle_phases.get(lifecycle_id)?;
    let user_scores = benchmark_scores(&domain_averages(spec, responses));

    let gaps = DOMAIN_IDS
        .iter()
        .zip(user_scores.to_array())
        .zip(phase.minimum.to_array().into_iter().zip(phase.average.to_array()))
        .map(|((domain, user_score), (min_score, avg_score))| DomainGap {
            domain: (*domain).to_string(),
            user_score,
            min_score,
            avg_score,
            below_minimum: user_score < min_score,
            below_average: user_score < avg_score,
        })
        .collect();

    let lifecycle_name = spec
        .lifecycle_phases()
        .iter()
        .find(|p| p.id == lifecycle_id)
        .map_or_else(|| lifecycle_id.to_string(), |p| p.name.clone());

    Some(BenchmarkComparison {
        sector: sector.id.clone(),
        sector_name: sector.name.clone(),
        lifecycle: lifecycle_id.to_string(),
        lifecycle_name,
        user_scores,
        minimum_scores: phase.minimum,
        average_scores: phase.average,
        gaps,
        critical_domains: sector.critical_domains.clone(),
    })
}
