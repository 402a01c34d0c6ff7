//! One-shot assessment of a UIN field.
//!
//! Registration assesses the UIN once and hands the result to every rule
//! that needs it. The decoded identity is only exposed when both the
//! structure and the check digit are valid.

use idcred_core::{checksum, decode_uin, DecodedIdentity, EpochWindow, StructuralError, Uin};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UinAssessment {
    structure: Result<(Uin, DecodedIdentity), StructuralError>,
    checksum_valid: bool,
}

impl UinAssessment {
    /// Parse, decode and checksum `input`.
    pub fn of(input: &str, window: &EpochWindow) -> Self {
        let structure = Uin::parse(input)
            .and_then(|uin| decode_uin(&uin, window).map(|identity| (uin, identity)));
        let checksum_valid = matches!(&structure, Ok((uin, _)) if checksum::is_valid(uin));

        Self {
            structure,
            checksum_valid,
        }
    }

    pub fn structural_error(&self) -> Option<StructuralError> {
        self.structure.as_ref().err().copied()
    }

    /// False when the structure is invalid, since no check digit was read.
    pub fn is_checksum_valid(&self) -> bool {
        self.checksum_valid
    }

    /// The decoded identity, if the UIN can be trusted for cross-checks.
    pub fn trusted(&self) -> Option<&DecodedIdentity> {
        match &self.structure {
            Ok((_, identity)) if self.checksum_valid => Some(identity),
            _ => None,
        }
    }

    /// Short outcome label for logs.
    pub fn outcome(&self) -> &'static str {
        match self.structure {
            Err(StructuralError::WrongLength { .. }) => "wrong_length",
            Err(StructuralError::NonDigit { .. }) => "non_digit",
            Err(StructuralError::InvalidDate { .. }) => "invalid_date",
            Ok(_) if !self.checksum_valid => "bad_checksum",
            Ok(_) => "valid",
        }
    }
}
