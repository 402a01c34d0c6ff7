//! Activation and password reset share one table: a new password and its
//! confirmation.

use std::sync::LazyLock;

use idcred_core::rules::{
    char_len, has_lowercase, has_min_digits, has_uppercase, is_present, PASSWORD_MAX_LEN,
    PASSWORD_MIN_LEN,
};

use super::{FieldRules, Rule, RuleTable};
use crate::messages::*;
use crate::report::FailureKind::*;
use crate::requests::{ActivationRequest, NewPassword, PasswordResetRequest};

pub(crate) static ACTIVATION: LazyLock<RuleTable<ActivationRequest>> =
    LazyLock::new(new_password_table);

pub(crate) static PASSWORD_RESET: LazyLock<RuleTable<PasswordResetRequest>> =
    LazyLock::new(new_password_table);

fn new_password_table<R: NewPassword>() -> RuleTable<R> {
    RuleTable::new(vec![
        FieldRules::new(
            "password",
            vec![
                Rule::new(Required, PASSWORD_REQUIRED, |_, r: &R| {
                    is_present(r.password())
                }),
                Rule::new(Format, PASSWORD_TWO_DIGITS, |_, r: &R| {
                    has_min_digits(r.password())
                }),
                Rule::new(Format, PASSWORD_LOWERCASE, |_, r: &R| {
                    has_lowercase(r.password())
                }),
                Rule::new(Format, PASSWORD_UPPERCASE, |_, r: &R| {
                    has_uppercase(r.password())
                }),
                Rule::new(Length, PASSWORD_TOO_SHORT, |_, r: &R| {
                    char_len(r.password()) >= PASSWORD_MIN_LEN
                }),
                Rule::new(Length, PASSWORD_TOO_LONG, |_, r: &R| {
                    char_len(r.password()) <= PASSWORD_MAX_LEN
                }),
            ],
        ),
        FieldRules::new(
            "confirm_password",
            vec![
                Rule::new(Required, CONFIRM_PASSWORD_REQUIRED, |_, r: &R| {
                    is_present(r.confirm_password())
                }),
                Rule::new(ConfirmationMismatch, PASSWORDS_DO_NOT_MATCH, |_, r: &R| {
                    r.confirm_password() == r.password()
                }),
            ],
        ),
    ])
}
