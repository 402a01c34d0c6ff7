//! Error types for idcred Core.

use thiserror::Error;

/// Why a string is not a structurally valid UIN.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StructuralError {
    #[error("expected 13 characters, got {len}")]
    WrongLength { len: usize },

    #[error("non-digit character at position {position}")]
    NonDigit { position: usize },

    #[error("date segment {day:02}.{month:02}. with year code {year_code:03} is not a calendar date")]
    InvalidDate { day: u8, month: u8, year_code: u16 },
}

impl StructuralError {
    /// True for length and character-set failures, where no decoding was attempted.
    pub fn is_shape(&self) -> bool {
        matches!(
            self,
            StructuralError::WrongLength { .. } | StructuralError::NonDigit { .. }
        )
    }
}

/// Errors from configuration and UIN encoding.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("invalid alphabet: {0}")]
    InvalidAlphabet(String),

    #[error("invalid epoch window: legacy_from {legacy_from} must be above modern_through {modern_through} and at most 999")]
    InvalidEpochWindow { legacy_from: u16, modern_through: u16 },

    #[error("year {0} cannot be encoded in the configured epoch window")]
    YearOutOfWindow(i32),

    #[error("gender must be supplied to encode a UIN")]
    GenderNotSupplied,

    #[error("region {0} is out of range (0-99)")]
    RegionOutOfRange(u8),

    #[error("serial {0} is out of range (0-499)")]
    SerialOutOfRange(u16),
}
