//! # er-guidance
//!
//! Readiness guidance derived from questionnaire responses:
//! - Rule-based recommendations per domain
//! - Level-0 blockers and critical-threshold breaches
//! - Gaps against sector/lifecycle benchmarks
//! - Time-to-transaction estimate
//! - Impact of preparation on value, completion odds and DD duration

pub mod benchmark;
pub mod impact;
pub mod rules;
pub mod thresholds;
pub mod timeline;

pub use benchmark::{BenchmarkComparison, DomainGap, benchmark_comparison};
pub use impact::{
    CompletionImpact, ImpactSummary, MitigationOpportunity, OpportunityCategory, TimelineImpact,
    ValuationImpact, completion_probability, impact_analysis,
};
pub use rules::{Rule, RuleCondition, compute_recommendations, default_rules};
pub use thresholds::{Severity, ThresholdViolation, ViolationType, detect_threshold_violations};
pub use timeline::{TimelineGuidance, timeline_guidance};
