//! Domain averages and the weighted overall score.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::questionnaire::{DomainScores, Level, QuestionnaireSpec};
use crate::responses::Responses;

/// Mean answer for one dimension.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct DomainAverage {
    pub id: String,
    pub name: String,
    pub average: f64,
}

/// Mean answer per dimension, in document order.
///
/// Unanswered questions are skipped; a dimension with no answers averages 0.
#[must_use]
pub fn domain_averages(spec: &QuestionnaireSpec, responses: &Responses) -> Vec<DomainAverage> {
    spec.dimensions
        .iter()
        .map(|dimension| {
            let values: Vec<i32> = dimension
                .questions
                .iter()
                .filter_map(|q| responses.get(&q.id))
                .collect();
            let average = if values.is_empty() {
                0.0
            } else {
                f64::from(values.iter().sum::<i32>()) / values.len() as f64
            };
            DomainAverage {
                id: dimension.id.clone(),
                name: dimension.name.clone(),
                average,
            }
        })
        .collect()
}

/// Average for one dimension id, or 0 when the id is unknown.
#[must_use]
pub fn average_for(averages: &[DomainAverage], id: &str) -> f64 {
    averages
        .iter()
        .find(|d| d.id == id)
        .map_or(0.0, |d| d.average)
}

/// Averages for the six benchmark domains; missing dimensions score 0.
#[must_use]
pub fn benchmark_scores(averages: &[DomainAverage]) -> DomainScores {
    DomainScores {
        financial: average_for(averages, "financial"),
        legal: average_for(averages, "legal"),
        commercial: average_for(averages, "commercial"),
        operational: average_for(averages, "operational"),
        people: average_for(averages, "people"),
        esg: average_for(averages, "esg"),
    }
}

/// Weight-averaged dimension score.
#[must_use]
pub fn overall_score(spec: &QuestionnaireSpec, responses: &Responses) -> f64 {
    let averages = domain_averages(spec, responses);
    let total_weight: f64 = spec.dimensions.iter().map(|d| d.effective_weight()).sum();
    if total_weight == 0.0 {
        return 0.0;
    }
    let weighted: f64 = spec
        .dimensions
        .iter()
        .zip(&averages)
        .map(|(dimension, avg)| avg.average * dimension.effective_weight())
        .sum();
    weighted / total_weight
}

/// Overall score as a percentage of the scale maximum.
#[must_use]
pub fn overall_percent(spec: &QuestionnaireSpec, responses: &Responses) -> f64 {
    if spec.scale.max == 0 {
        return 0.0;
    }
    overall_score(spec, responses) / f64::from(spec.scale.max) * 100.0
}

/// Level band containing `score`, falling back to the last declared level.
#[must_use]
pub fn level_for(spec: &QuestionnaireSpec, score: f64) -> Option<&Level> {
    spec.levels
        .iter()
        .find(|level| score >= level.min && score < level.max)
        .or_else(|| spec.levels.last())
}

/// Level band of the weighted overall score.
#[must_use]
pub fn overall_level<'a>(spec: &'a QuestionnaireSpec, responses: &Responses) -> Option<&'a Level> {
    level_for(spec, overall_score(spec, responses))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn spec() -> QuestionnaireSpec {
        QuestionnaireSpec::builtin().unwrap()
    }

    fn answer_dimension(spec: &QuestionnaireSpec, responses: &mut Responses, id: &str, value: i32) {
        for q in &spec.dimension(id).unwrap().questions {
            responses.set(q.id.clone(), value);
        }
    }

    #[test]
    fn averages_follow_document_order() {
        let spec = spec();
        let mut responses = Responses::zeroed(&spec);
        answer_dimension(&spec, &mut responses, "legal", 3);
        let averages = domain_averages(&spec, &responses);
        assert_eq!(averages.len(), 6);
        assert_eq!(averages[0].id, "financial");
        assert_eq!(average_for(&averages, "legal"), 3.0);
        assert_eq!(average_for(&averages, "financial"), 0.0);
    }

    #[test]
    fn unanswered_questions_are_skipped() {
        let spec = spec();
        let mut responses = Responses::new();
        responses.set("f1", 4);
        let averages = domain_averages(&spec, &responses);
        assert_eq!(average_for(&averages, "financial"), 4.0);
        assert_eq!(average_for(&averages, "people"), 0.0);
    }

    #[test]
    fn overall_score_is_weighted() {
        let mut spec = spec();
        for dimension in &mut spec.dimensions {
            dimension.weight = Some(if dimension.id == "financial" { 3.0 } else { 1.0 });
        }
        let mut responses = Responses::zeroed(&spec);
        answer_dimension(&spec, &mut responses, "financial", 4);
        // (4 * 3) / (3 + 5)
        assert!((overall_score(&spec, &responses) - 1.5).abs() < 1e-9);
    }

    #[test]
    fn percent_scales_by_maximum() {
        let spec = spec();
        let mut responses = Responses::zeroed(&spec);
        for id in ["financial", "legal", "commercial", "operational", "people", "esg"] {
            answer_dimension(&spec, &mut responses, id, 2);
        }
        assert!((overall_percent(&spec, &responses) - 50.0).abs() < 1e-9);
    }

    #[test]
    fn level_lookup_uses_half_open_bands() {
        let spec = spec();
        assert_eq!(level_for(&spec, 0.0).unwrap().name, "Incomplete");
        assert_eq!(level_for(&spec, 0.9).unwrap().name, "Initial");
        assert_eq!(level_for(&spec, 3.7).unwrap().name, "Optimised");
        assert_eq!(level_for(&spec, 99.0).unwrap().name, "Optimised");
    }

    #[test]
    fn fresh_assessment_is_incomplete() {
        let spec = spec();
        let responses = Responses::zeroed(&spec);
        assert_eq!(overall_level(&spec, &responses).unwrap().name, "Incomplete");
    }

    #[test]
    fn benchmark_scores_pick_fixed_domains() {
        let spec = spec();
        let mut responses = Responses::zeroed(&spec);
        answer_dimension(&spec, &mut responses, "esg", 1);
        let scores = benchmark_scores(&domain_averages(&spec, &responses));
        assert_eq!(scores.esg, 1.0);
        assert_eq!(scores.financial, 0.0);
    }
}
