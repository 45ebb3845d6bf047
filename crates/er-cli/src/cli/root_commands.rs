use clap::{Args, Subcommand};
use er_core::enums::{BusinessType, CustomerConcentration, GrowthTrend};

use crate::cli::subcommands::StateCommands;

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Record an answer to one question.
    Answer(AnswerArgs),
    /// Choose the benchmark sector and lifecycle phase.
    Select(SelectArgs),
    /// Set business characteristics used by the valuation.
    Business(BusinessArgs),
    /// Set turnover and EBITDA for one financial year.
    Year(YearArgs),
    /// Print the export code for the current state.
    Encode,
    /// Decode an export code without touching the saved state.
    Decode(CodeArgs),
    /// Replace the saved state with a decoded export code.
    Restore(CodeArgs),
    /// Indicative valuation for the current state.
    Value,
    /// Full readiness report: scores, guidance, valuation and export code.
    Report(ReportArgs),
    /// Saved state management.
    State {
        #[command(subcommand)]
        action: StateCommands,
    },
}

/// Arguments for `exr answer`.
#[derive(Clone, Debug, Args)]
pub struct AnswerArgs {
    /// Question id (for example `f1`).
    pub question_id: String,
    /// Score on the questionnaire scale.
    pub value: i32,
}

/// Arguments for `exr select`.
#[derive(Clone, Debug, Args)]
#[command(group(
    clap::ArgGroup::new("selection")
        .required(true)
        .multiple(true)
        .args(["sector", "lifecycle"])
))]
pub struct SelectArgs {
    /// Sector id; `none` or an empty value clears it.
    #[arg(long)]
    pub sector: Option<String>,
    /// Lifecycle phase id; `none` or an empty value clears it.
    #[arg(long)]
    pub lifecycle: Option<String>,
}

/// Arguments for `exr business`.
#[derive(Clone, Debug, Args)]
pub struct BusinessArgs {
    /// Business type: service, product, tech-saas
    #[arg(long = "type")]
    pub business_type: Option<BusinessType>,
    /// Revenue trend: declining, flat, growing
    #[arg(long)]
    pub growth: Option<GrowthTrend>,
    /// Customer concentration: high, medium, low
    #[arg(long)]
    pub concentration: Option<CustomerConcentration>,
    /// Share of revenue that is recurring, 0-100.
    #[arg(long, value_parser = clap::value_parser!(u8).range(0..=100))]
    pub recurring: Option<u8>,
    /// Total debt in pounds; an empty value clears it.
    #[arg(long)]
    pub debt: Option<String>,
    /// Clear every business characteristic before applying the flags above.
    #[arg(long)]
    pub reset: bool,
}

/// Arguments for `exr year`.
#[derive(Clone, Debug, Args)]
pub struct YearArgs {
    /// Calendar year, one of the three historical or three forecast years.
    pub year: i32,
    /// Turnover in pounds; an empty value clears it.
    #[arg(long)]
    pub turnover: Option<String>,
    /// EBITDA in pounds, may be negative; an empty value clears it.
    #[arg(long, allow_hyphen_values = true)]
    pub ebitda: Option<String>,
}

/// Arguments for `exr decode` and `exr restore`.
#[derive(Clone, Debug, Args)]
pub struct CodeArgs {
    /// Export code (case-insensitive).
    pub code: String,
}

/// Arguments for `exr report`.
#[derive(Clone, Debug, Args)]
pub struct ReportArgs {
    /// Leave out the valuation section.
    #[arg(long)]
    pub no_valuation: bool,
}
