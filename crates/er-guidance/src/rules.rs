//! Threshold rules that turn domain averages into recommendations.

use er_core::scoring::{DomainAverage, average_for, domain_averages};
use er_core::{QuestionnaireSpec, Responses};
use serde::{Deserialize, Serialize};

/// When a rule fires, against one domain's average.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum RuleCondition {
    /// `average < threshold`
    Below { domain: String, threshold: f64 },
    /// `min <= average < max`
    Between { domain: String, min: f64, max: f64 },
    /// `average >= threshold`
    AtLeast { domain: String, threshold: f64 },
}

impl RuleCondition {
    #[must_use]
    pub fn domain(&self) -> &str {
        match self {
            Self::Below { domain, .. } | Self::Between { domain, .. } | Self::AtLeast { domain, .. } => {
                domain
            }
        }
    }

    #[must_use]
    pub fn matches(&self, average: f64) -> bool {
        match self {
            Self::Below { threshold, .. } => average < *threshold,
            Self::Between { min, max, .. } => average >= *min && average < *max,
            Self::AtLeast { threshold, .. } => average >= *threshold,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rule {
    #[serde(flatten)]
    pub condition: RuleCondition,
    pub message: String,
}

fn below(domain: &str, threshold: f64, message: &str) -> Rule {
    Rule {
        condition: RuleCondition::Below {
            domain: domain.to_string(),
            threshold,
        },
        message: message.to_string(),
    }
}

fn between(domain: &str, min: f64, max: f64, message: &str) -> Rule {
    Rule {
        condition: RuleCondition::Between {
            domain: domain.to_string(),
            min,
            max,
        },
        message: message.to_string(),
    }
}

fn at_least(domain: &str, threshold: f64, message: &str) -> Rule {
    Rule {
        condition: RuleCondition::AtLeast {
            domain: domain.to_string(),
            threshold,
        },
        message: message.to_string(),
    }
}

/// The exit-readiness rule set, evaluated in this order.
#[must_use]
pub fn default_rules() -> Vec<Rule> {
    vec![
        // Level 0-1: foundational gaps
        below(
            "financial",
            1.0,
            "Financial: Urgent - establish basic bookkeeping, file accounts, and produce management reports.",
        ),
        below(
            "legal",
            1.0,
            "Legal: Urgent - update statutory registers, file returns, and document key contracts.",
        ),
        below(
            "commercial",
            1.0,
            "Commercial: Urgent - implement customer tracking and understand revenue sources.",
        ),
        below(
            "operational",
            1.0,
            "Operational: Urgent - document core processes and implement basic IT backups.",
        ),
        below(
            "people",
            1.0,
            "People: Urgent - ensure employment contracts are in place and identify key person dependencies.",
        ),
        below(
            "esg",
            1.0,
            "Governance & Risk: Urgent - achieve basic H&S and GDPR compliance; document policies.",
        ),
        // Level 1-2
        between(
            "financial",
            1.0,
            2.0,
            "Financial: Obtain audited accounts, normalise EBITDA, and improve management reporting quality.",
        ),
        between(
            "legal",
            1.0,
            2.0,
            "Legal: Complete statutory books, catalog material contracts, and verify IP ownership.",
        ),
        between(
            "commercial",
            1.0,
            2.0,
            "Commercial: Reduce customer concentration, build recurring revenue, and track retention metrics.",
        ),
        between(
            "operational",
            1.0,
            2.0,
            "Operational: Create SOPs, reduce founder dependency, and implement disaster recovery.",
        ),
        between(
            "people",
            1.0,
            2.0,
            "People: Build management depth, implement HR policies, and create retention plans.",
        ),
        // Level 2-3
        between(
            "financial",
            2.0,
            3.0,
            "Financial: Prepare vendor DD pack, obtain tax clearances, and refine financial model.",
        ),
        between(
            "legal",
            2.0,
            3.0,
            "Legal: Conduct legal audit, prepare DD pack, and resolve outstanding litigation.",
        ),
        between(
            "commercial",
            2.0,
            3.0,
            "Commercial: Evidence market position, improve LTV/CAC metrics, and strengthen customer relationships.",
        ),
        // Level 3+
        at_least(
            "financial",
            3.0,
            "Financial: Maintain audit-ready position and ensure locked-box readiness for competitive process.",
        ),
        at_least(
            "operational",
            3.0,
            "Operational: Demonstrate scalability and prepare operational DD materials to support premium valuation.",
        ),
    ]
}

/// Messages of every matching rule, in rule order.
///
/// Rules naming a domain the questionnaire does not have are skipped. When
/// nothing matches, one generic line per dimension is returned instead.
#[must_use]
pub fn compute_recommendations(
    spec: &QuestionnaireSpec,
    responses: &Responses,
    rules: &[Rule],
) -> Vec<String> {
    let averages = domain_averages(spec, responses);
    let matched: Vec<String> = rules
        .iter()
        .filter(|rule| spec.dimension(rule.condition.domain()).is_some())
        .filter(|rule| rule.condition.matches(average_for(&averages, rule.condition.domain())))
        .map(|rule| rule.message.clone())
        .collect();
    if !matched.is_empty() {
        return matched;
    }
    tracing::debug!("no recommendation rule matched, using generic guidance");
    generic_recommendations(spec, &averages)
}

fn generic_recommendations(spec: &QuestionnaireSpec, averages: &[DomainAverage]) -> Vec<String> {
    let midpoint = f64::from(spec.scale.min + spec.scale.max) / 2.0;
    let near_top = f64::from(spec.scale.max) - 0.5;
    averages
        .iter()
        .map(|domain| {
            if domain.average < midpoint {
                format!("{}: focus on improving foundational practices.", domain.name)
            } else if domain.average < near_top {
                format!("{}: Standardise and measure to progress to the next level.", domain.name)
            } else {
                format!("{}: Continue optimising and innovating.", domain.name)
            }
        })
        .collect()
}
