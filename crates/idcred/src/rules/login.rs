use std::sync::LazyLock;

use idcred_core::rules::{is_email, is_present};

use super::{FieldRules, Rule, RuleTable};
use crate::messages::*;
use crate::report::FailureKind::*;
use crate::requests::LoginRequest;

type R = LoginRequest;

/// Login checks the address only; password strength is enforced when the
/// password is set, not when it is presented.
pub(crate) static LOGIN: LazyLock<RuleTable<R>> = LazyLock::new(|| {
    RuleTable::new(vec![FieldRules::new(
        "email",
        vec![
            Rule::new(Required, EMAIL_REQUIRED, |_, r: &R| is_present(&r.email)),
            Rule::new(Format, EMAIL_INVALID, |_, r: &R| is_email(&r.email)),
        ],
    )])
});
