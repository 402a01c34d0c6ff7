//! Registration: every personal field plus the UIN cross-checks.
//!
//! The UIN is assessed once before the table runs (see `UinAssessment`).
//! Date of birth and gender are compared against the decoded identity only
//! when the UIN passed both its structural and checksum rules.

use std::sync::LazyLock;

use idcred_core::rules::{
    char_len, is_email, is_phone_pattern, is_plausible_birth_date, is_present, is_username,
    NAME_MAX_LEN, PHONE_MAX_LEN, PHONE_MIN_LEN,
};

use super::{FieldRules, Rule, RuleTable};
use crate::messages::*;
use crate::report::FailureKind::*;
use crate::requests::RegisterRequest;

type R = RegisterRequest;

pub(crate) static REGISTER: LazyLock<RuleTable<R>> = LazyLock::new(|| {
    RuleTable::new(vec![
        FieldRules::new(
            "first_name",
            vec![
                Rule::new(Required, FIRST_NAME_REQUIRED, |_, r: &R| {
                    is_present(&r.first_name)
                }),
                Rule::new(Format, FIRST_NAME_INVALID, |cx, r: &R| {
                    cx.names.is_name(&r.first_name)
                }),
                Rule::new(Length, FIRST_NAME_TOO_LONG, |_, r: &R| {
                    char_len(&r.first_name) <= NAME_MAX_LEN
                }),
            ],
        ),
        FieldRules::new(
            "last_name",
            vec![
                Rule::new(Required, LAST_NAME_REQUIRED, |_, r: &R| {
                    is_present(&r.last_name)
                }),
                Rule::new(Format, LAST_NAME_INVALID, |cx, r: &R| {
                    cx.names.is_name(&r.last_name)
                }),
                Rule::new(Length, LAST_NAME_TOO_LONG, |_, r: &R| {
                    char_len(&r.last_name) <= NAME_MAX_LEN
                }),
            ],
        ),
        FieldRules::new(
            "date_of_birth",
            vec![
                Rule::new(Required, DATE_OF_BIRTH_REQUIRED, |_, r: &R| {
                    r.date_of_birth.is_some()
                }),
                Rule::new(Range, DATE_OF_BIRTH_INVALID, |cx, r: &R| {
                    r.date_of_birth
                        .is_some_and(|date| is_plausible_birth_date(date, cx.today))
                }),
                Rule::new(DateMismatch, DATE_OF_BIRTH_MISMATCH, |cx, r: &R| {
                    cx.identity()
                        .map_or(true, |id| r.date_of_birth == Some(id.birth_date))
                }),
            ],
        ),
        FieldRules::new(
            "gender",
            vec![
                Rule::new(Required, GENDER_REQUIRED, |_, r: &R| r.gender.is_supplied()),
                Rule::new(GenderMismatch, GENDER_MISMATCH, |cx, r: &R| {
                    cx.identity().map_or(true, |id| r.gender == id.gender)
                }),
            ],
        ),
        FieldRules::new(
            "unique_identification_number",
            vec![
                Rule::new(Required, UIN_REQUIRED, |_, r: &R| {
                    is_present(&r.unique_identification_number)
                }),
                Rule::new(Structural, UIN_NOT_13_DIGITS, |cx, _: &R| {
                    !cx.uin
                        .and_then(|uin| uin.structural_error())
                        .is_some_and(|e| e.is_shape())
                }),
                Rule::new(Structural, UIN_INVALID_DATE, |cx, _: &R| {
                    cx.uin.map_or(true, |uin| uin.structural_error().is_none())
                }),
                Rule::new(Checksum, UIN_INVALID_CONTROL_DIGIT, |cx, _: &R| {
                    cx.uin.map_or(true, |uin| uin.is_checksum_valid())
                }),
            ],
        ),
        FieldRules::new(
            "email",
            vec![
                Rule::new(Required, EMAIL_REQUIRED, |_, r: &R| is_present(&r.email)),
                Rule::new(Format, EMAIL_INVALID, |_, r: &R| is_email(&r.email)),
            ],
        ),
        FieldRules::new(
            "username",
            vec![
                Rule::new(Required, USERNAME_REQUIRED, |_, r: &R| {
                    is_present(&r.username)
                }),
                Rule::new(Format, USERNAME_INVALID, |_, r: &R| is_username(&r.username)),
            ],
        ),
        FieldRules::new(
            "phone_number",
            vec![
                Rule::new(Required, PHONE_REQUIRED, |_, r: &R| {
                    is_present(&r.phone_number)
                }),
                Rule::new(Format, PHONE_INVALID, |_, r: &R| {
                    is_phone_pattern(&r.phone_number)
                }),
                Rule::new(Length, PHONE_TOO_SHORT, |_, r: &R| {
                    char_len(&r.phone_number) >= PHONE_MIN_LEN
                }),
                Rule::new(Length, PHONE_TOO_LONG, |_, r: &R| {
                    char_len(&r.phone_number) <= PHONE_MAX_LEN
                }),
            ],
        ),
        FieldRules::new(
            "address",
            vec![
                Rule::new(Required, ADDRESS_REQUIRED, |_, r: &R| is_present(&r.address)),
                Rule::new(Format, ADDRESS_INVALID, |cx, r: &R| {
                    cx.names.is_name_with_numbers(&r.address)
                }),
            ],
        ),
        FieldRules::new(
            "role",
            vec![Rule::new(Required, ROLE_REQUIRED, |_, r: &R| r.role.is_supplied())],
        ),
        FieldRules::new(
            "department",
            vec![
                Rule::new(Required, DEPARTMENT_REQUIRED, |_, r: &R| {
                    !r.role.requires_department() || is_present(&r.department)
                }),
                Rule::new(Format, DEPARTMENT_INVALID, |cx, r: &R| {
                    r.department.is_empty() || cx.names.is_name_with_numbers(&r.department)
                }),
            ],
        ),
    ])
});
