//! Strong type definitions for idcred.
//!
//! A [`Uin`] can only be obtained from a string that passed the length and
//! character-set checks, so code taking `&Uin` never sees malformed input.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::StructuralError;

/// Declared or decoded gender.
///
/// `Invalid` is the "not supplied" sentinel and never passes a required rule.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    #[default]
    Invalid,
    Male,
    Female,
}

impl Gender {
    /// Check that a real value was supplied.
    pub fn is_supplied(self) -> bool {
        self != Gender::Invalid
    }
}

/// Role requested at registration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    #[default]
    Invalid,
    Admin,
    Employee,
    Client,
}

impl Role {
    /// Check that a real value was supplied.
    pub fn is_supplied(self) -> bool {
        self != Role::Invalid
    }

    /// Staff roles belong to a department; clients do not.
    pub fn requires_department(self) -> bool {
        matches!(self, Role::Admin | Role::Employee)
    }
}

/// The data embedded in a UIN.
///
/// Lives for one validation pass. `gender` is always `Male` or `Female`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodedIdentity {
    pub birth_date: NaiveDate,
    pub gender: Gender,
}

/// A 13-digit unique identification number that passed the shape checks.
///
/// Layout: `DD MM YYY RR SSS C`, day, month, year code, region, serial
/// (index 9 carries the gender digit) and check digit.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Uin(pub(crate) [u8; 13]);

impl Uin {
    /// Check length and character set.
    ///
    /// Length is counted in characters, so multi-byte input reports the
    /// length a user would see.
    pub fn parse(input: &str) -> Result<Self, StructuralError> {
        let len = input.chars().count();
        if len != 13 {
            return Err(StructuralError::WrongLength { len });
        }

        let mut digits = [0u8; 13];
        for (position, c) in input.chars().enumerate() {
            match c.to_digit(10) {
                Some(d) => digits[position] = d as u8,
                None => return Err(StructuralError::NonDigit { position }),
            }
        }
        Ok(Self(digits))
    }

    /// Digit values (0-9), not ASCII bytes.
    pub const fn digits(&self) -> &[u8; 13] {
        &self.0
    }

    /// The twelve digits covered by the check digit.
    pub fn body(&self) -> [u8; 12] {
        let mut body = [0u8; 12];
        body.copy_from_slice(&self.0[..12]);
        body
    }

    pub fn day(&self) -> u8 {
        self.0[0] * 10 + self.0[1]
    }

    pub fn month(&self) -> u8 {
        self.0[2] * 10 + self.0[3]
    }

    /// Three-digit year code, resolved to a year through an `EpochWindow`.
    pub fn year_code(&self) -> u16 {
        u16::from(self.0[4]) * 100 + u16::from(self.0[5]) * 10 + u16::from(self.0[6])
    }

    pub fn region(&self) -> u8 {
        self.0[7] * 10 + self.0[8]
    }

    /// Serial number within region and date (000-999).
    pub fn serial(&self) -> u16 {
        u16::from(self.0[9]) * 100 + u16::from(self.0[10]) * 10 + u16::from(self.0[11])
    }

    /// The digit that carries the gender.
    pub fn gender_digit(&self) -> u8 {
        self.0[9]
    }

    pub fn check_digit(&self) -> u8 {
        self.0[12]
    }
}

impl FromStr for Uin {
    type Err = StructuralError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Debug for Uin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Uin({self})")
    }
}

impl fmt::Display for Uin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for d in self.0 {
            write!(f, "{d}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_segments() {
        let uin = Uin::parse("0101990710003").unwrap();
        assert_eq!(uin.day(), 1);
        assert_eq!(uin.month(), 1);
        assert_eq!(uin.year_code(), 990);
        assert_eq!(uin.region(), 71);
        assert_eq!(uin.serial(), 0);
        assert_eq!(uin.gender_digit(), 0);
        assert_eq!(uin.check_digit(), 3);
    }

    #[test]
    fn test_parse_wrong_length() {
        assert_eq!(
            Uin::parse("").unwrap_err(),
            StructuralError::WrongLength { len: 0 }
        );
        assert_eq!(
            Uin::parse("010199050000").unwrap_err(),
            StructuralError::WrongLength { len: 12 }
        );
        assert_eq!(
            Uin::parse("01019905000031").unwrap_err(),
            StructuralError::WrongLength { len: 14 }
        );
    }

    #[test]
    fn test_parse_non_digit() {
        assert_eq!(
            Uin::parse("01019905a0003").unwrap_err(),
            StructuralError::NonDigit { position: 8 }
        );
        // Arabic-Indic digits are numeric but not ASCII.
        assert_eq!(
            Uin::parse("٠101990500003").unwrap_err(),
            StructuralError::NonDigit { position: 0 }
        );
    }

    #[test]
    fn test_multibyte_length_counts_chars() {
        assert_eq!(
            Uin::parse("č").unwrap_err(),
            StructuralError::WrongLength { len: 1 }
        );
    }

    #[test]
    fn test_display_roundtrip() {
        let uin: Uin = "0101990500003".parse().unwrap();
        assert_eq!(uin.to_string(), "0101990500003");
        assert_eq!(format!("{:?}", uin), "Uin(0101990500003)");
    }

    #[test]
    fn test_sentinels() {
        assert_eq!(Gender::default(), Gender::Invalid);
        assert!(!Gender::Invalid.is_supplied());
        assert!(Gender::Female.is_supplied());
        assert_eq!(Role::default(), Role::Invalid);
        assert!(!Role::Invalid.is_supplied());
        assert!(Role::Employee.requires_department());
        assert!(!Role::Client.requires_department());
    }

    #[test]
    fn test_enum_serde() {
        let g: Gender = serde_json::from_str("\"female\"").unwrap();
        assert_eq!(g, Gender::Female);
        assert_eq!(serde_json::to_string(&Role::Client).unwrap(), "\"client\"");
    }
}
