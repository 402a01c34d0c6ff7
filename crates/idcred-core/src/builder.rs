//! Builder for encoding UINs.
//!
//! The inverse of [`decode_uin`](crate::codec::decode_uin): every UIN it
//! produces is structurally valid, carries a correct check digit, and decodes
//! back to the date and gender it was built from.

use chrono::{Datelike, NaiveDate};

use crate::checksum::check_digit;
use crate::codec::EpochWindow;
use crate::error::CoreError;
use crate::types::{Gender, Uin};

/// Highest serial per gender; female serials are offset by 500.
pub const MAX_SERIAL: u16 = 499;

/// Highest two-digit region code.
pub const MAX_REGION: u8 = 99;

/// Builder for creating UINs.
pub struct UinBuilder {
    birth_date: NaiveDate,
    gender: Gender,
    region: u8,
    serial: u16,
}

impl UinBuilder {
    /// Start building a UIN for a birth date.
    pub fn new(birth_date: NaiveDate) -> Self {
        Self {
            birth_date,
            gender: Gender::Invalid,
            region: 71,
            serial: 0,
        }
    }

    /// Set the gender.
    pub fn gender(mut self, gender: Gender) -> Self {
        self.gender = gender;
        self
    }

    /// Set the region code (0-99).
    pub fn region(mut self, region: u8) -> Self {
        self.region = region;
        self
    }

    /// Set the serial within the gender's range (0-499).
    pub fn serial(mut self, serial: u16) -> Self {
        self.serial = serial;
        self
    }

    /// Encode and append the check digit.
    pub fn build(self, window: &EpochWindow) -> Result<Uin, CoreError> {
        let year = self.birth_date.year();
        let year_code = window
            .year_code(year)
            .ok_or(CoreError::YearOutOfWindow(year))?;

        if self.region > MAX_REGION {
            return Err(CoreError::RegionOutOfRange(self.region));
        }
        if self.serial > MAX_SERIAL {
            return Err(CoreError::SerialOutOfRange(self.serial));
        }
        let serial = match self.gender {
            Gender::Male => self.serial,
            Gender::Female => self.serial + 500,
            Gender::Invalid => return Err(CoreError::GenderNotSupplied),
        };

        let mut body = [0u8; 12];
        write_digits(&mut body[0..2], self.birth_date.day() as u16);
        write_digits(&mut body[2..4], self.birth_date.month() as u16);
        write_digits(&mut body[4..7], year_code);
        write_digits(&mut body[7..9], u16::from(self.region));
        write_digits(&mut body[9..12], serial);

        let mut digits = [0u8; 13];
        digits[..12].copy_from_slice(&body);
        digits[12] = check_digit(&body);
        Ok(Uin(digits))
    }
}

/// Write `value` as zero-padded decimal into `out`.
fn write_digits(out: &mut [u8], mut value: u16) {
    for slot in out.iter_mut().rev() {
        *slot = (value % 10) as u8;
        value /= 10;
    }
}
