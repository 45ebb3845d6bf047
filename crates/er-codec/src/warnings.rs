//! Lossy-transform reports produced while encoding.

use std::fmt;

use serde::Serialize;

// ---- SelectionKind ----

/// Which benchmark selection a warning refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionKind {
    Sector,
    Lifecycle,
}

impl SelectionKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Sector => "sector",
            Self::Lifecycle => "lifecycle",
        }
    }
}

impl fmt::Display for SelectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---- EncodeWarning ----

/// A value that will not decode exactly as it was given.
///
/// `field` paths use the JSON field names of `ValuationInputs`, e.g.
/// `historicalFinancials[0].turnover`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EncodeWarning {
    /// Outside the encodable range; stored at the nearest bound.
    Clamped {
        field: String,
        original: f64,
        stored: f64,
    },
    /// Not a whole number of thousands; stored rounded.
    Rounded {
        field: String,
        original: f64,
        stored: f64,
    },
    /// A set value whose digit collides with "unset"; decodes as unset.
    ZeroTreatedAsUnset { field: String, original: f64 },
    /// NaN or infinite; encoded as unset.
    NotFinite { field: String },
    /// An answer outside `0..=scale.max`; stored clamped.
    ResponseOutOfRange {
        question_id: String,
        value: i32,
        stored: u32,
    },
    /// A selection id the questionnaire does not list; encoded as none.
    UnknownSelection { selection: SelectionKind, id: String },
}

impl fmt::Display for EncodeWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Clamped {
                field,
                original,
                stored,
            } => write!(f, "{field}: {original} is out of range, stored as {stored}"),
            Self::Rounded {
                field,
                original,
                stored,
            } => write!(f, "{field}: {original} rounded to {stored}"),
            Self::ZeroTreatedAsUnset { field, original } => {
                write!(f, "{field}: {original} rounds to zero and will read back as not provided")
            }
            Self::NotFinite { field } => write!(f, "{field}: not a finite number, stored as not provided"),
            Self::ResponseOutOfRange {
                question_id,
                value,
                stored,
            } => write!(f, "{question_id}: answer {value} is outside the scale, stored as {stored}"),
            Self::UnknownSelection { selection, id } => {
                write!(f, "unknown {selection} '{id}', stored as no selection")
            }
        }
    }
}
