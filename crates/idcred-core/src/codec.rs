//! UIN decoding: date segment, epoch window and gender digit.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{CoreError, StructuralError};
use crate::types::{DecodedIdentity, Gender, Uin};

/// Number of characters in a UIN.
pub const UIN_LEN: usize = 13;

/// Gender digits below this value are male, the rest female.
pub const GENDER_THRESHOLD: u8 = 5;

/// Maps a 3-digit year code to a full year.
///
/// Codes at or above `legacy_from` are `1000 + code` (9xx is the 1900s,
/// 8xx the 1800s). Codes at or below `modern_through` are `2000 + code`.
/// Codes in between do not resolve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EpochWindow {
    pub legacy_from: u16,
    pub modern_through: u16,
}

impl Default for EpochWindow {
    fn default() -> Self {
        Self {
            legacy_from: 800,
            modern_through: 99,
        }
    }
}

impl EpochWindow {
    /// Create a checked window.
    pub fn new(legacy_from: u16, modern_through: u16) -> Result<Self, CoreError> {
        let window = Self {
            legacy_from,
            modern_through,
        };
        window.check()?;
        Ok(window)
    }

    /// Check that the two ranges are ordered and fit in three digits.
    pub fn check(&self) -> Result<(), CoreError> {
        if self.modern_through >= self.legacy_from || self.legacy_from > 999 {
            return Err(CoreError::InvalidEpochWindow {
                legacy_from: self.legacy_from,
                modern_through: self.modern_through,
            });
        }
        Ok(())
    }

    /// Resolve a year code to a year.
    pub fn resolve(&self, year_code: u16) -> Option<i32> {
        if year_code > 999 {
            None
        } else if year_code >= self.legacy_from {
            Some(1000 + i32::from(year_code))
        } else if year_code <= self.modern_through {
            Some(2000 + i32::from(year_code))
        } else {
            None
        }
    }

    /// Inverse of [`resolve`](Self::resolve).
    pub fn year_code(&self, year: i32) -> Option<u16> {
        let code = match year {
            1000..=1999 => year - 1000,
            2000..=2999 => year - 2000,
            _ => return None,
        };
        let code = u16::try_from(code).ok()?;
        (self.resolve(code) == Some(year)).then_some(code)
    }

    /// First and last representable years, legacy range first.
    pub fn legacy_years(&self) -> (i32, i32) {
        (1000 + i32::from(self.legacy_from), 1999)
    }

    pub fn modern_years(&self) -> (i32, i32) {
        (2000, 2000 + i32::from(self.modern_through))
    }

    /// Check whether a date can be carried by a UIN under this window.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.year_code(date.year()).is_some()
    }
}

/// Parse and decode a UIN string.
pub fn decode(input: &str, window: &EpochWindow) -> Result<DecodedIdentity, StructuralError> {
    let uin = Uin::parse(input)?;
    decode_uin(&uin, window)
}

/// Decode an already parsed UIN.
pub fn decode_uin(uin: &Uin, window: &EpochWindow) -> Result<DecodedIdentity, StructuralError> {
    let (day, month, year_code) = (uin.day(), uin.month(), uin.year_code());
    let invalid = StructuralError::InvalidDate {
        day,
        month,
        year_code,
    };

    let year = window.resolve(year_code).ok_or(invalid)?;
    let birth_date =
        NaiveDate::from_ymd_opt(year, u32::from(month), u32::from(day)).ok_or(invalid)?;

    Ok(DecodedIdentity {
        birth_date,
        gender: gender_of(uin.gender_digit()),
    })
}

fn gender_of(digit: u8) -> Gender {
    if digit < GENDER_THRESHOLD {
        Gender::Male
    } else {
        Gender::Female
    }
}
