//! Validation outcome: an ordered list of field failures.

use serde::Serialize;

/// Which class of rule produced a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    /// Value missing, empty, or the `Invalid` sentinel.
    Required,
    /// Pattern or composition rule.
    Format,
    /// Too short or too long.
    Length,
    /// Value outside its plausible range.
    Range,
    /// UIN is not 13 digits or does not carry a calendar date.
    Structural,
    /// UIN check digit does not match.
    Checksum,
    /// Declared date of birth differs from the one in the UIN.
    DateMismatch,
    /// Declared gender differs from the one in the UIN.
    GenderMismatch,
    /// Confirmation field differs from the field it confirms.
    ConfirmationMismatch,
}

impl FailureKind {
    /// Whether a failure of this kind stops the remaining rules on its field.
    pub fn halts_field(self) -> bool {
        matches!(self, FailureKind::Required | FailureKind::Structural)
    }

    /// Whether this failure compares two or more fields.
    pub fn is_cross_field(self) -> bool {
        matches!(
            self,
            FailureKind::DateMismatch
                | FailureKind::GenderMismatch
                | FailureKind::ConfirmationMismatch
        )
    }
}

/// One failed rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldFailure {
    pub field: &'static str,
    pub kind: FailureKind,
    pub message: &'static str,
}

/// All failures of one validation pass, in rule declaration order.
///
/// Empty means the request is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationReport {
    failures: Vec<FieldFailure>,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, failure: FieldFailure) {
        self.failures.push(failure);
    }

    pub fn is_valid(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn len(&self) -> usize {
        self.failures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn failures(&self) -> &[FieldFailure] {
        &self.failures
    }

    /// Failures for one field, in order.
    pub fn for_field<'a>(&'a self, field: &'a str) -> impl Iterator<Item = &'a FieldFailure> + 'a {
        self.failures.iter().filter(move |f| f.field == field)
    }

    /// Check whether any failure has the given kind.
    pub fn has_kind(&self, kind: FailureKind) -> bool {
        self.failures.iter().any(|f| f.kind == kind)
    }

    /// `(field, message)` pairs, the shape most callers render.
    pub fn messages(&self) -> Vec<(&'static str, &'static str)> {
        self.failures.iter().map(|f| (f.field, f.message)).collect()
    }

    pub fn into_failures(self) -> Vec<FieldFailure> {
        self.failures
    }
}

impl IntoIterator for ValidationReport {
    type Item = FieldFailure;
    type IntoIter = std::vec::IntoIter<FieldFailure>;

    fn into_iter(self) -> Self::IntoIter {
        self.failures.into_iter()
    }
}

impl<'a> IntoIterator for &'a ValidationReport {
    type Item = &'a FieldFailure;
    type IntoIter = std::slice::Iter<'a, FieldFailure>;

    fn into_iter(self) -> Self::IntoIter {
        self.failures.iter()
    }
}
