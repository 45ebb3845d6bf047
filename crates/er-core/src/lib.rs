//! # er-core
//!
//! Core data model for exitready.
//!
//! This crate provides the foundational types shared across all exitready crates:
//! - The questionnaire document (dimensions, scale, levels, benchmark tables)
//! - Response maps and sector/lifecycle selections
//! - Valuation inputs and results
//! - The assessment snapshot that the codec encodes and the CLI persists
//! - Categorical enums with their wire strings
//! - Domain-average and overall scoring helpers
//! - Cross-cutting error types

pub mod enums;
pub mod errors;
pub mod questionnaire;
pub mod responses;
pub mod scoring;
pub mod snapshot;
pub mod valuation;

pub use errors::CoreError;
pub use questionnaire::QuestionnaireSpec;
pub use responses::Responses;
pub use snapshot::AssessmentSnapshot;
pub use valuation::{FinancialYear, ValuationInputs, ValuationResult};
