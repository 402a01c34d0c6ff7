//! Golden UIN vectors.
//!
//! Each vector pins the outcome of assessing one UIN under the default epoch
//! window, so codec or checksum regressions show up as a named failure.

use chrono::NaiveDate;
use idcred::UinAssessment;
use idcred_core::{EpochWindow, Gender, StructuralError};

/// What assessing a vector must produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expected {
    /// Structurally valid, correct check digit, decodes to this identity.
    Valid {
        birth_date: (i32, u32, u32),
        gender: Gender,
    },
    /// Structurally valid with a wrong check digit.
    BadChecksum,
    /// Rejected before the check digit is read.
    Structural(StructuralError),
}

/// A golden test vector.
#[derive(Debug, Clone)]
pub struct GoldenVector {
    /// Human-readable name for the vector.
    pub name: &'static str,
    /// The UIN as a caller would submit it.
    pub uin: &'static str,
    pub expected: Expected,
}

/// Get all golden test vectors.
pub fn all_vectors() -> Vec<GoldenVector> {
    vec![
        GoldenVector {
            name: "male born 1990-01-01",
            uin: "0101990500003",
            expected: Expected::Valid {
                birth_date: (1990, 1, 1),
                gender: Gender::Male,
            },
        },
        GoldenVector {
            name: "female born 2005-03-15",
            uin: "1503005715127",
            expected: Expected::Valid {
                birth_date: (2005, 3, 15),
                gender: Gender::Female,
            },
        },
        GoldenVector {
            name: "leap day 2000",
            uin: "2902000801233",
            expected: Expected::Valid {
                birth_date: (2000, 2, 29),
                gender: Gender::Male,
            },
        },
        GoldenVector {
            name: "remainder 1 folds check digit to 0",
            uin: "3112899109990",
            expected: Expected::Valid {
                birth_date: (1899, 12, 31),
                gender: Gender::Female,
            },
        },
        GoldenVector {
            name: "first legacy year",
            uin: "0101800000000",
            expected: Expected::Valid {
                birth_date: (1800, 1, 1),
                gender: Gender::Male,
            },
        },
        GoldenVector {
            name: "last modern year",
            uin: "3112099500003",
            expected: Expected::Valid {
                birth_date: (2099, 12, 31),
                gender: Gender::Male,
            },
        },
        GoldenVector {
            name: "wrong check digit",
            uin: "0101990500006",
            expected: Expected::BadChecksum,
        },
        GoldenVector {
            name: "year code below legacy range",
            uin: "0101799500003",
            expected: Expected::Structural(StructuralError::InvalidDate {
                day: 1,
                month: 1,
                year_code: 799,
            }),
        },
        GoldenVector {
            name: "year code above modern range",
            uin: "0101100500003",
            expected: Expected::Structural(StructuralError::InvalidDate {
                day: 1,
                month: 1,
                year_code: 100,
            }),
        },
        GoldenVector {
            name: "29 February in a common year",
            uin: "2902001500003",
            expected: Expected::Structural(StructuralError::InvalidDate {
                day: 29,
                month: 2,
                year_code: 1,
            }),
        },
        GoldenVector {
            name: "twelve digits",
            uin: "010199050000",
            expected: Expected::Structural(StructuralError::WrongLength { len: 12 }),
        },
        GoldenVector {
            name: "dash inside",
            uin: "0101990-00003",
            expected: Expected::Structural(StructuralError::NonDigit { position: 7 }),
        },
    ]
}

/// Check one vector against the current implementation.
pub fn verify_vector(vector: &GoldenVector) -> bool {
    let assessment = UinAssessment::of(vector.uin, &EpochWindow::default());

    match vector.expected {
        Expected::Valid {
            birth_date: (y, m, d),
            gender,
        } => assessment.trusted().is_some_and(|identity| {
            Some(identity.birth_date) == NaiveDate::from_ymd_opt(y, m, d)
                && identity.gender == gender
        }),
        Expected::BadChecksum => {
            assessment.structural_error().is_none() && !assessment.is_checksum_valid()
        }
        Expected::Structural(error) => assessment.structural_error() == Some(error),
    }
}

/// Verify all golden vectors, returning `(name, passed)` per vector.
pub fn verify_all_vectors() -> Vec<(&'static str, bool)> {
    all_vectors()
        .iter()
        .map(|v| (v.name, verify_vector(v)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_vectors_pass() {
        for (name, passed) in verify_all_vectors() {
            assert!(passed, "Vector '{}' did not match its expected outcome", name);
        }
    }

    #[test]
    fn test_vector_names_unique() {
        let vectors = all_vectors();
        let mut names: Vec<_> = vectors.iter().map(|v| v.name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), vectors.len());
    }

    #[test]
    fn test_tampered_vector_fails() {
        let vector = GoldenVector {
            name: "claims valid but is not",
            uin: "0101990500006",
            expected: Expected::Valid {
                birth_date: (1990, 1, 1),
                gender: Gender::Male,
            },
        };
        assert!(!verify_vector(&vector));
    }
}
