//! The questionnaire layout a code is encoded against.

use er_core::QuestionnaireSpec;

use crate::error::CodecError;

/// Ordered ids and radices that define the packed layout.
///
/// A code only decodes correctly against a context with the same question
/// sequence, scale maximum and sector/phase lists it was encoded with. A
/// context with fewer questions than the encoder used, or a reordered list,
/// decodes onto the wrong ids rather than failing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodecContext {
    question_ids: Vec<String>,
    scale_max: u32,
    sector_ids: Vec<String>,
    phase_ids: Vec<String>,
    anchor_year: i32,
}

impl CodecContext {
    /// Build a context from explicit ordered lists.
    pub fn new(
        question_ids: Vec<String>,
        scale_max: i32,
        sector_ids: Vec<String>,
        phase_ids: Vec<String>,
        anchor_year: i32,
    ) -> Result<Self, CodecError> {
        let scale_max = u32::try_from(scale_max)
            .ok()
            .filter(|max| *max < u32::MAX)
            .ok_or_else(|| {
                CodecError::Context(format!("scale maximum {scale_max} cannot be packed"))
            })?;
        for (kind, ids) in [("sector", &sector_ids), ("lifecycle phase", &phase_ids)] {
            if u32::try_from(ids.len()).map_or(true, |len| len == u32::MAX) {
                return Err(CodecError::Context(format!("too many {kind} entries")));
            }
        }
        Ok(Self {
            question_ids,
            scale_max,
            sector_ids,
            phase_ids,
            anchor_year,
        })
    }

    /// Layout of the active questionnaire. `anchor_year` positions the
    /// decoded financial years (historical `anchor-3..anchor-1`).
    pub fn from_spec(spec: &QuestionnaireSpec, anchor_year: i32) -> Result<Self, CodecError> {
        Self::new(
            spec.question_ids().map(str::to_string).collect(),
            spec.scale.max,
            spec.sector_ids(),
            spec.lifecycle_phase_ids(),
            anchor_year,
        )
    }

    #[must_use]
    pub fn question_ids(&self) -> &[String] {
        &self.question_ids
    }

    #[must_use]
    pub const fn scale_max(&self) -> u32 {
        self.scale_max
    }

    /// Radix of each answer digit.
    #[must_use]
    pub const fn answer_radix(&self) -> u32 {
        self.scale_max + 1
    }

    #[must_use]
    pub fn sector_ids(&self) -> &[String] {
        &self.sector_ids
    }

    #[must_use]
    pub fn phase_ids(&self) -> &[String] {
        &self.phase_ids
    }

    #[must_use]
    pub const fn anchor_year(&self) -> i32 {
        self.anchor_year
    }

    /// Radix of the sector digit: one slot per sector plus "none".
    #[must_use]
    pub fn sector_radix(&self) -> u32 {
        selection_radix(&self.sector_ids)
    }

    /// Radix of the lifecycle digit: one slot per phase plus "none".
    #[must_use]
    pub fn phase_radix(&self) -> u32 {
        selection_radix(&self.phase_ids)
    }
}

fn selection_radix(ids: &[String]) -> u32 {
    // Length was bounded in `CodecContext::new`.
    u32::try_from(ids.len()).map_or(u32::MAX, |len| len + 1)
}

/// Digit for a selection: 0 for none, else the 1-based position in `ids`.
pub(crate) fn selection_digit(ids: &[String], selected: Option<&str>) -> Option<u32> {
    let Some(selected) = selected else {
        return Some(0);
    };
    ids.iter()
        .position(|id| id == selected)
        .and_then(|index| u32::try_from(index + 1).ok())
}

/// Inverse of [`selection_digit`].
pub(crate) fn selection_id(ids: &[String], digit: u32) -> Option<String> {
    let index = usize::try_from(digit).ok()?.checked_sub(1)?;
    ids.get(index).cloned()
}
