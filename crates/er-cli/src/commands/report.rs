use er_core::scoring::{DomainAverage, domain_averages, overall_level, overall_percent, overall_score};
use er_core::{AssessmentSnapshot, QuestionnaireSpec, ValuationResult};
use er_guidance::{
    BenchmarkComparison, ImpactSummary, ThresholdViolation, TimelineGuidance,
    benchmark_comparison, compute_recommendations, default_rules, detect_threshold_violations,
    impact_analysis, timeline_guidance,
};
use er_valuation::{calculate_valuation, format_currency};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ReportArgs;
use crate::commands::shared::view::valuation_tables;
use crate::context::AppContext;
use crate::output::{Table, output_with_tables};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Report {
    title: String,
    overall_score: f64,
    overall_percent: f64,
    level: Option<String>,
    domains: Vec<DomainAverage>,
    violations: Vec<ThresholdViolation>,
    recommendations: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    benchmark: Option<BenchmarkComparison>,
    timeline: TimelineGuidance,
    impact: ImpactSummary,
    #[serde(skip_serializing_if = "Option::is_none")]
    valuation: Option<ValuationResult>,
    code: String,
}

/// Handle `exr report`.
pub fn handle(args: &ReportArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let snapshot = ctx.snapshot()?;
    let code = er_codec::encode(&snapshot, &ctx.codec).code;
    let report = build(&ctx.spec, &snapshot, code, !args.no_valuation);
    output_with_tables(&report, flags.format, report_tables)
}

fn build(
    spec: &QuestionnaireSpec,
    snapshot: &AssessmentSnapshot,
    code: String,
    with_valuation: bool,
) -> Report {
    let responses = &snapshot.responses;
    let benchmark = snapshot
        .sector_id()
        .zip(snapshot.lifecycle_id())
        .and_then(|(sector, lifecycle)| benchmark_comparison(spec, responses, sector, lifecycle));
    let domains = domain_averages(spec, responses);
    let violations = detect_threshold_violations(spec, responses);
    let valuation = calculate_valuation(&snapshot.valuation);
    let below_minimum = benchmark
        .as_ref()
        .map_or(0, |comparison| comparison.below_minimum().count());
    let impact = impact_analysis(
        &domains,
        &violations,
        Some(&valuation),
        &snapshot.valuation,
        below_minimum,
    );

    Report {
        title: spec.title.clone(),
        overall_score: overall_score(spec, responses),
        overall_percent: overall_percent(spec, responses),
        level: overall_level(spec, responses).map(|level| level.name.clone()),
        domains,
        violations,
        recommendations: compute_recommendations(spec, responses, &default_rules()),
        benchmark,
        timeline: timeline_guidance(spec, responses, snapshot.sector_id(), snapshot.lifecycle_id()),
        impact,
        valuation: with_valuation.then_some(valuation),
        code,
    }
}

fn report_tables(report: &Report) -> Vec<(String, Table)> {
    let mut summary = Table::new(["key", "value"]);
    summary
        .row(["overall score".to_string(), format!("{:.2}", report.overall_score)])
        .row(["overall".to_string(), format!("{:.0}%", report.overall_percent)])
        .row([
            "level".to_string(),
            report.level.clone().unwrap_or_else(|| "—".to_string()),
        ])
        .row(["time to transaction".to_string(), report.timeline.estimated_months.clone()])
        .row(["priority".to_string(), report.timeline.priority.clone()])
        .row(["export code".to_string(), report.code.clone()]);

    let mut domains = match &report.benchmark {
        Some(_) => Table::new(["domain", "average", "minimum", "benchmark avg", "status"]),
        None => Table::new(["domain", "average"]),
    };
    for domain in &report.domains {
        let average = format!("{:.2}", domain.average);
        let gap = report
            .benchmark
            .as_ref()
            .and_then(|comparison| comparison.gaps.iter().find(|gap| gap.domain == domain.id));
        match gap {
            Some(gap) => domains.row([
                domain.name.clone(),
                average,
                format!("{:.2}", gap.min_score),
                format!("{:.2}", gap.avg_score),
                gap_status(gap.below_minimum, gap.below_average).to_string(),
            ]),
            None => domains.row([domain.name.clone(), average]),
        };
    }

    let mut tables = vec![
        (report.title.clone(), summary),
        ("Domains".to_string(), domains),
    ];

    if !report.violations.is_empty() {
        let mut violations = Table::new(["severity", "domain", "message"]);
        for violation in &report.violations {
            violations.row([
                violation.severity.as_str().to_string(),
                violation.domain_name.clone(),
                violation.message.clone(),
            ]);
        }
        tables.push(("Threshold violations".to_string(), violations));
    }

    let mut recommendations = Table::new(["recommendation"]);
    for line in report
        .recommendations
        .iter()
        .chain(&report.timeline.recommendations)
    {
        recommendations.row([line.as_str()]);
    }
    tables.push(("Recommendations".to_string(), recommendations));
    tables.extend(impact_tables(&report.impact));

    if let Some(valuation) = &report.valuation {
        tables.extend(valuation_tables(valuation));
    }
    tables
}

fn impact_tables(impact: &ImpactSummary) -> Vec<(String, Table)> {
    let valuation = &impact.valuation;
    let completion = &impact.completion;
    let mut summary = Table::new(["key", "value"]);
    summary
        .row([
            "valuation discount".to_string(),
            format!(
                "{}% → {}%",
                valuation.current_discount_percent, valuation.mitigated_discount_percent
            ),
        ])
        .row([
            "estimated value gain".to_string(),
            format_currency(valuation.estimated_value_gain),
        ])
        .row([
            "completion probability".to_string(),
            format!(
                "{}% → {}%",
                completion.current_probability, completion.mitigated_probability
            ),
        ])
        .row(["risk factors".to_string(), completion.risk_factor_count.to_string()])
        .row(["DD time savings".to_string(), impact.timeline.dd_time_savings.clone()]);

    let mut opportunities = Table::new(["opportunity", "now", "prepared"]);
    for opportunity in &impact.opportunities {
        opportunities.row([
            opportunity.title.as_str(),
            opportunity.current_state.as_str(),
            opportunity.mitigated_state.as_str(),
        ]);
    }

    vec![
        ("Preparation impact".to_string(), summary),
        ("Opportunities".to_string(), opportunities),
    ]
}

const fn gap_status(below_minimum: bool, below_average: bool) -> &'static str {
    if below_minimum {
        "critical"
    } else if below_average {
        "warning"
    } else {
        "yes"
    }
}
