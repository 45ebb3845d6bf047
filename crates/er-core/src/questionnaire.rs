//! The static questionnaire document.
//!
//! A [`QuestionnaireSpec`] is read-only input to every other crate. Field names
//! follow the camelCase JSON document served to the browser front end, so the
//! same file can be loaded here without conversion. Internal consistency (for
//! example contiguous level ranges) is the document author's responsibility
//! and is not validated.

use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

const BUILTIN_DOCUMENT: &str = include_str!("../assets/questionnaire.json");

/// Ids of the six fixed benchmark domains, in radar-chart order.
pub const DOMAIN_IDS: [&str; 6] = [
    "financial",
    "legal",
    "commercial",
    "operational",
    "people",
    "esg",
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct QuestionnaireSpec {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub scale: Scale,
    pub levels: Vec<Level>,
    pub dimensions: Vec<Dimension>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub benchmarks: Option<BenchmarkData>,
}

/// Integer answer scale with one label per value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Scale {
    pub min: i32,
    pub max: i32,
    pub labels: Vec<String>,
}

/// Maturity level band: `min` inclusive, `max` exclusive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Level {
    pub name: String,
    pub min: f64,
    pub max: f64,
    pub color: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Dimension {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub critical: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_acceptable: Option<f64>,
    pub questions: Vec<Question>,
}

impl Dimension {
    /// Weight used for the overall score. Missing weights count as 1.
    #[must_use]
    pub fn effective_weight(&self) -> f64 {
        self.weight.unwrap_or(1.0)
    }

    #[must_use]
    pub fn is_critical(&self) -> bool {
        self.critical.unwrap_or(false)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub id: String,
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plain_summary: Option<String>,
    /// One explanation per scale value, indexed from `scale.min`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explanations: Option<Vec<String>>,
}

// ---------------------------------------------------------------------------
// Benchmarks
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct BenchmarkData {
    pub sectors: Vec<SectorBenchmark>,
    pub lifecycle_phases: Vec<LifecyclePhaseInfo>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SectorBenchmark {
    pub id: String,
    pub name: String,
    pub description: String,
    pub critical_domains: Vec<String>,
    /// Benchmark vectors keyed by lifecycle phase id.
    pub lifecycle_phases: BTreeMap<String, PhaseBenchmark>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct PhaseBenchmark {
    pub name: String,
    pub description: String,
    pub minimum: DomainScores,
    pub average: DomainScores,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct LifecyclePhaseInfo {
    pub id: String,
    pub name: String,
    pub description: String,
    pub valuation_range: String,
}

/// One score per fixed benchmark domain.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct DomainScores {
    pub financial: f64,
    pub legal: f64,
    pub commercial: f64,
    pub operational: f64,
    pub people: f64,
    pub esg: f64,
}

impl DomainScores {
    /// Score for one of [`DOMAIN_IDS`]; `None` for any other id.
    #[must_use]
    pub fn get(&self, domain_id: &str) -> Option<f64> {
        match domain_id {
            "financial" => Some(self.financial),
            "legal" => Some(self.legal),
            "commercial" => Some(self.commercial),
            "operational" => Some(self.operational),
            "people" => Some(self.people),
            "esg" => Some(self.esg),
            _ => None,
        }
    }

    /// Scores in [`DOMAIN_IDS`] order.
    #[must_use]
    pub const fn to_array(&self) -> [f64; 6] {
        [
            self.financial,
            self.legal,
            self.commercial,
            self.operational,
            self.people,
            self.esg,
        ]
    }

    #[must_use]
    pub fn mean(&self) -> f64 {
        self.to_array().iter().sum::<f64>() / 6.0
    }
}

// ---------------------------------------------------------------------------
// QuestionnaireSpec operations
// ---------------------------------------------------------------------------

impl QuestionnaireSpec {
    /// Parse a questionnaire document.
    pub fn from_json(document: &str) -> Result<Self, CoreError> {
        Ok(serde_json::from_str(document)?)
    }

    /// The exit-readiness questionnaire shipped with the crate.
    pub fn builtin() -> Result<Self, CoreError> {
        Self::from_json(BUILTIN_DOCUMENT)
    }

    /// Question ids in encoding order: dimension order, then question order.
    pub fn question_ids(&self) -> impl Iterator<Item = &str> {
        self.dimensions
            .iter()
            .flat_map(|dimension| dimension.questions.iter().map(|q| q.id.as_str()))
    }

    #[must_use]
    pub fn question_count(&self) -> usize {
        self.dimensions.iter().map(|d| d.questions.len()).sum()
    }

    #[must_use]
    pub fn dimension(&self, id: &str) -> Option<&Dimension> {
        self.dimensions.iter().find(|d| d.id == id)
    }

    #[must_use]
    pub fn question(&self, id: &str) -> Option<&Question> {
        self.dimensions
            .iter()
            .flat_map(|d| d.questions.iter())
            .find(|q| q.id == id)
    }

    /// Sectors currently offered for benchmarking, in document order.
    #[must_use]
    pub fn sectors(&self) -> &[SectorBenchmark] {
        self.benchmarks.as_ref().map_or(&[], |b| b.sectors.as_slice())
    }

    /// Lifecycle phases currently offered for benchmarking, in document order.
    #[must_use]
    pub fn lifecycle_phases(&self) -> &[LifecyclePhaseInfo] {
        self.benchmarks
            .as_ref()
            .map_or(&[], |b| b.lifecycle_phases.as_slice())
    }

    #[must_use]
    pub fn sector_ids(&self) -> Vec<String> {
        self.sectors().iter().map(|s| s.id.clone()).collect()
    }

    #[must_use]
    pub fn lifecycle_phase_ids(&self) -> Vec<String> {
        self.lifecycle_phases().iter().map(|p| p.id.clone()).collect()
    }

    /// Scale label for an answer value, falling back to the number itself.
    #[must_use]
    pub fn label_for(&self, value: i32) -> String {
        usize::try_from(value - self.scale.min)
            .ok()
            .and_then(|index| self.scale.labels.get(index))
            .cloned()
            .unwrap_or_else(|| value.to_string())
    }

    /// Per-answer explanation text for a question, when the document has one.
    #[must_use]
    pub fn explanation_for(&self, question_id: &str, value: i32) -> Option<&str> {
        let question = self.question(question_id)?;
        let index = usize::try_from(value - self.scale.min).ok()?;
        question
            .explanations
            .as_ref()?
            .get(index)
            .map(String::as_str)
    }
}
