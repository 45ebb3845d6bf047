//! The full user state captured by an export code.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::questionnaire::QuestionnaireSpec;
use crate::responses::{Responses, selected};
use crate::valuation::ValuationInputs;

/// Responses, benchmark selections and valuation inputs for one session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentSnapshot {
    pub responses: Responses,
    /// Selected sector id; `None` or empty means no selection.
    #[serde(default)]
    pub sector: Option<String>,
    /// Selected lifecycle phase id; `None` or empty means no selection.
    #[serde(default)]
    pub lifecycle: Option<String>,
    pub valuation: ValuationInputs,
}

impl AssessmentSnapshot {
    /// A fresh session: every question answered 0, nothing selected, no figures.
    #[must_use]
    pub fn initial(spec: &QuestionnaireSpec, anchor_year: i32) -> Self {
        Self {
            responses: Responses::zeroed(spec),
            sector: None,
            lifecycle: None,
            valuation: ValuationInputs::for_year(anchor_year),
        }
    }

    #[must_use]
    pub fn sector_id(&self) -> Option<&str> {
        selected(self.sector.as_deref())
    }

    #[must_use]
    pub fn lifecycle_id(&self) -> Option<&str> {
        selected(self.lifecycle.as_deref())
    }
}
