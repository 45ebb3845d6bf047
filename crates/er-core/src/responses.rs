//! Question responses and benchmark selections.

use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::questionnaire::QuestionnaireSpec;

/// Map from question id to integer score.
///
/// Key order is irrelevant to every consumer: the codec and the scoring
/// helpers always walk the questionnaire's own dimension/question order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct Responses(BTreeMap<String, i32>);

impl Responses {
    #[must_use]
    pub const fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Every question in `spec` answered with 0.
    #[must_use]
    pub fn zeroed(spec: &QuestionnaireSpec) -> Self {
        Self(spec.question_ids().map(|id| (id.to_string(), 0)).collect())
    }

    #[must_use]
    pub fn get(&self, question_id: &str) -> Option<i32> {
        self.0.get(question_id).copied()
    }

    /// Score for a question, treating an absent answer as 0.
    #[must_use]
    pub fn value_or_zero(&self, question_id: &str) -> i32 {
        self.get(question_id).unwrap_or(0)
    }

    pub fn set(&mut self, question_id: impl Into<String>, value: i32) {
        self.0.insert(question_id.into(), value);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, i32)> {
        self.0.iter().map(|(id, value)| (id.as_str(), *value))
    }
}

impl FromIterator<(String, i32)> for Responses {
    fn from_iter<I: IntoIterator<Item = (String, i32)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Normalise a sector or lifecycle selection: empty strings mean "none".
#[must_use]
pub fn selected(id: Option<&str>) -> Option<&str> {
    id.map(str::trim).filter(|id| !id.is_empty())
}
