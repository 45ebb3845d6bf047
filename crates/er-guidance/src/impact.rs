//! What professional exit preparation could recover.
//!
//! Combines the valuation discounts the inputs attract, the deal-breaker and
//! benchmark risks, and the weakest documentation domains into one summary.

use er_core::enums::{CustomerConcentration, GrowthTrend};
use er_core::scoring::DomainAverage;
use er_core::{ValuationInputs, ValuationResult};
use serde::Serialize;

use crate::thresholds::{Severity, ThresholdViolation};

/// Domains averaging below this level get a documentation opportunity.
pub const DOCUMENTATION_LEVEL: f64 = 2.0;

const CURRENT_BASE_PROBABILITY: u32 = 28;
const CURRENT_FLOOR: u32 = 5;
const MITIGATED_BASE_PROBABILITY: u32 = 68;
const MITIGATED_FLOOR: u32 = 45;
const MITIGATED_CEILING: u32 = 85;

const DD_TIME_SAVINGS: &str = "6-8 weeks";
const DD_TIME_EXPLANATION: &str = "Professional data room preparation typically reduces DD duration by 6-8 weeks, keeping deals within the critical 90-day window.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum OpportunityCategory {
    Valuation,
    Documentation,
}

/// One gap that preparation work can close.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MitigationOpportunity {
    pub id: String,
    pub category: OpportunityCategory,
    pub title: String,
    pub current_state: String,
    pub mitigated_state: String,
    pub current_value: f64,
    pub mitigated_value: f64,
    /// `%` for discounts, `level` for domain averages.
    pub unit: String,
    pub approach: String,
    pub evidence_source: String,
    pub evidence_url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValuationImpact {
    pub current_discount_percent: f64,
    pub mitigated_discount_percent: f64,
    pub improvement_percent: f64,
    /// Enterprise-value midpoint times the improvement, in whole pounds.
    pub estimated_value_gain: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletionImpact {
    pub current_probability: u32,
    pub mitigated_probability: u32,
    pub risk_factor_count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineImpact {
    pub dd_time_savings: String,
    pub explanation: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImpactSummary {
    pub has_mitigatable_issues: bool,
    pub valuation: ValuationImpact,
    pub completion: CompletionImpact,
    pub timeline: TimelineImpact,
    /// Valuation opportunities first, then documentation in domain order.
    pub opportunities: Vec<MitigationOpportunity>,
}

// ---------------------------------------------------------------------------
// Playbooks
// ---------------------------------------------------------------------------

struct Playbook {
    id: &'static str,
    category: OpportunityCategory,
    title: &'static str,
    current_state: &'static str,
    mitigated_state: &'static str,
    current_discount: f64,
    mitigated_discount: f64,
    approach: &'static str,
    source: &'static str,
    url: &'static str,
}

impl Playbook {
    fn opportunity(&self) -> MitigationOpportunity {
        MitigationOpportunity {
            id: self.id.to_string(),
            category: self.category,
            title: self.title.to_string(),
            current_state: self.current_state.to_string(),
            mitigated_state: self.mitigated_state.to_string(),
            current_value: -self.current_discount,
            mitigated_value: -self.mitigated_discount,
            unit: "%".to_string(),
            approach: self.approach.to_string(),
            evidence_source: self.source.to_string(),
            evidence_url: self.url.to_string(),
        }
    }
}

static HIGH_CONCENTRATION: Playbook = Playbook {
    id: "customer-concentration",
    category: OpportunityCategory::Valuation,
    title: "Customer Concentration Mitigation",
    current_state: "-25% valuation discount (high concentration)",
    mitigated_state: "-12% with documented diversification strategy",
    current_discount: 25.0,
    mitigated_discount: 12.0,
    approach: "Document customer diversification strategy, support securing multi-year contracts, institutionalise relationships across multiple contacts per customer, create customer dependency reduction roadmap.",
    source: "L40 M&A Advisory Research",
    url: "https://www.l40.com/insights/customer-concentration-risk",
};

static MEDIUM_CONCENTRATION: Playbook = Playbook {
    id: "customer-concentration-medium",
    category: OpportunityCategory::Valuation,
    title: "Customer Concentration Improvement",
    current_state: "-12% valuation discount (medium concentration)",
    mitigated_state: "-5% with documented mitigation",
    current_discount: 12.0,
    mitigated_discount: 5.0,
    approach: "Document customer acquisition pipeline, demonstrate diversification trend, secure contract extensions with key accounts.",
    source: "Morgan & Westfield M&A Research",
    url: "https://www.morganandwestfield.com/",
};

static DECLINING_GROWTH: Playbook = Playbook {
    id: "growth-narrative",
    category: OpportunityCategory::Valuation,
    title: "Growth Narrative & Pipeline Documentation",
    current_state: "-18% valuation discount (declining trend)",
    mitigated_state: "-10% with contextualised growth story",
    current_discount: 18.0,
    mitigated_discount: 10.0,
    approach: "Build compelling growth narrative, document sales pipeline and conversion rates, market opportunity analysis, identify and document growth levers, contextualise historical decline with turnaround evidence.",
    source: "Drooms M&A Deal Intelligence",
    url: "https://drooms.com/",
};

static DATA_ROOM: Playbook = Playbook {
    id: "data-room-quality",
    category: OpportunityCategory::Documentation,
    title: "Transaction-Ready Data Room",
    current_state: "Potential 5-10% implicit uncertainty discount",
    mitigated_state: "Professional presentation eliminates uncertainty",
    current_discount: 8.0,
    mitigated_discount: 0.0,
    approach: "Professional data room structure and indexing, document housekeeping and version control, gap identification with remediation guidance, buyer-ready presentation format.",
    source: "IDEALS Virtual Data Room Research",
    url: "https://www.idealsvdr.com/",
};

struct DomainPlaybook {
    domain: &'static str,
    title: &'static str,
    approach: &'static str,
    source: &'static str,
    url: &'static str,
}

// No financial playbook: accountancy work is not offered.
const DOMAIN_PLAYBOOKS: [DomainPlaybook; 5] = [
    DomainPlaybook {
        domain: "legal",
        title: "Legal & Corporate Data Room Preparation",
        approach: "Organise corporate documents, catalogue contracts with key terms summaries, identify gaps in corporate records, prepare document index for legal DD, flag change-of-control provisions.",
        source: "Intralinks M&A Leaks Report",
        url: "https://www.intralinks.com/",
    },
    DomainPlaybook {
        domain: "commercial",
        title: "Commercial Documentation & Customer Analysis",
        approach: "Structure customer data presentation, document revenue quality metrics, prepare customer concentration analysis, organise pipeline documentation, create commercial narrative.",
        source: "Merrill DataSite Research",
        url: "https://www.merrillcorp.com/",
    },
    DomainPlaybook {
        domain: "operational",
        title: "Operational Process Documentation",
        approach: "Document key processes and SOPs, identify founder dependencies, prepare operational DD materials, create scalability narrative, document IT systems and infrastructure.",
        source: "Bain M&A Report",
        url: "https://www.bain.com/insights/topics/mergers-and-acquisitions/",
    },
    DomainPlaybook {
        domain: "people",
        title: "People & Organisation DD Materials",
        approach: "Organise employment documentation, prepare organisation charts, document management team capabilities, identify retention risks, create people narrative for buyers.",
        source: "Harvard Business Review M&A Research",
        url: "https://hbr.org/",
    },
    DomainPlaybook {
        domain: "esg",
        title: "ESG & Risk Documentation",
        approach: "Compile compliance documentation, organise H&S records, document data protection compliance, prepare risk register, create ESG narrative.",
        source: "Diligent Institute 2025 Report",
        url: "https://www.diligent.com/",
    },
];

// ---------------------------------------------------------------------------
// Calculations
// ---------------------------------------------------------------------------

/// Valuation playbooks that apply to the inputs.
///
/// The data-room baseline stands in when neither concentration nor growth
/// attracts a discount.
fn valuation_playbooks(inputs: &ValuationInputs) -> Vec<&'static Playbook> {
    let mut playbooks = Vec::new();
    match inputs.customer_concentration {
        Some(CustomerConcentration::High) => playbooks.push(&HIGH_CONCENTRATION),
        Some(CustomerConcentration::Medium) => playbooks.push(&MEDIUM_CONCENTRATION),
        Some(CustomerConcentration::Low) | None => {}
    }
    if inputs.growth_trend == Some(GrowthTrend::Declining) {
        playbooks.push(&DECLINING_GROWTH);
    }
    if playbooks.is_empty() {
        playbooks.push(&DATA_ROOM);
    }
    playbooks
}

fn documentation_opportunities(domains: &[DomainAverage]) -> Vec<MitigationOpportunity> {
    domains
        .iter()
        .filter(|domain| domain.average < DOCUMENTATION_LEVEL)
        .filter_map(|domain| {
            let playbook = DOMAIN_PLAYBOOKS.iter().find(|p| p.domain == domain.id)?;
            Some(MitigationOpportunity {
                id: format!("{}-documentation", domain.id),
                category: OpportunityCategory::Documentation,
                title: playbook.title.to_string(),
                current_state: format!(
                    "{} at Level {:.1} - gaps in DD readiness",
                    domain.name, domain.average
                ),
                mitigated_state: "Transaction-ready documentation prepared".to_string(),
                current_value: domain.average,
                mitigated_value: DOCUMENTATION_LEVEL,
                unit: "level".to_string(),
                approach: playbook.approach.to_string(),
                evidence_source: playbook.source.to_string(),
                evidence_url: playbook.url.to_string(),
            })
        })
        .collect()
}

fn saturating_u32(count: usize) -> u32 {
    u32::try_from(count).unwrap_or(u32::MAX)
}

/// Deal completion probability in percent, before and after preparation.
///
/// Each Level 0 domain costs 8 points and each domain below its benchmark
/// minimum 4, floored at 5. Prepared, the penalties drop to 3 and 2 on a base
/// of 68, kept within 45..=85.
#[must_use]
pub fn completion_probability(level_zero_count: usize, below_minimum_count: usize) -> (u32, u32) {
    let level_zero = saturating_u32(level_zero_count);
    let below_minimum = saturating_u32(below_minimum_count);

    let penalty = level_zero
        .saturating_mul(8)
        .saturating_add(below_minimum.saturating_mul(4));
    let current = CURRENT_BASE_PROBABILITY
        .saturating_sub(penalty)
        .max(CURRENT_FLOOR);

    let mitigated_penalty = level_zero
        .saturating_mul(3)
        .saturating_add(below_minimum.saturating_mul(2));
    let mitigated = MITIGATED_BASE_PROBABILITY
        .saturating_sub(mitigated_penalty)
        .clamp(MITIGATED_FLOOR, MITIGATED_CEILING);

    (current, mitigated)
}

/// Impact of preparation work on value, completion odds and DD duration.
///
/// `below_minimum_count` is the number of domains under their benchmark
/// minimum, 0 when no benchmark is selected. Only blocker violations count
/// towards completion risk. The value gain needs a calculable valuation.
#[must_use]
pub fn impact_analysis(
    domains: &[DomainAverage],
    violations: &[ThresholdViolation],
    valuation: Option<&ValuationResult>,
    inputs: &ValuationInputs,
    below_minimum_count: usize,
) -> ImpactSummary {
    let playbooks = valuation_playbooks(inputs);
    let current_discount: f64 = playbooks.iter().map(|p| p.current_discount).sum();
    let mitigated_discount: f64 = playbooks.iter().map(|p| p.mitigated_discount).sum();
    let improvement = current_discount - mitigated_discount;

    let mut opportunities: Vec<MitigationOpportunity> =
        playbooks.iter().map(|p| p.opportunity()).collect();
    opportunities.extend(documentation_opportunities(domains));

    let level_zero_count = violations
        .iter()
        .filter(|v| v.severity == Severity::Blocker)
        .count();
    let (current_probability, mitigated_probability) =
        completion_probability(level_zero_count, below_minimum_count);

    let estimated_value_gain = valuation
        .filter(|result| result.is_calculable)
        .and_then(|result| result.enterprise_value.as_ref())
        .map(|range| (range.midpoint() * improvement / 100.0).round());

    tracing::debug!(
        improvement,
        level_zero_count,
        below_minimum_count,
        opportunities = opportunities.len(),
        "impact analysis"
    );

    ImpactSummary {
        has_mitigatable_issues: !opportunities.is_empty() || level_zero_count > 0,
        valuation: ValuationImpact {
            current_discount_percent: current_discount,
            mitigated_discount_percent: mitigated_discount,
            improvement_percent: improvement,
            estimated_value_gain,
        },
        completion: CompletionImpact {
            current_probability,
            mitigated_probability,
            risk_factor_count: level_zero_count + below_minimum_count,
        },
        timeline: TimelineImpact {
            dd_time_savings: DD_TIME_SAVINGS.to_string(),
            explanation: DD_TIME_EXPLANATION.to_string(),
        },
        opportunities,
    }
}
