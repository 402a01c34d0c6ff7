//! Stateless field predicates.
//!
//! Each predicate answers one question about one value. Messages, ordering
//! and aggregation belong to the caller. Name grammars live in
//! [`NameGrammar`](crate::alphabet::NameGrammar) because they depend on the
//! configured alphabet.

use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;
use validator::ValidateEmail;

/// Username length bounds (characters).
pub const USERNAME_MIN_LEN: usize = 3;
pub const USERNAME_MAX_LEN: usize = 32;

/// Phone number length bounds, including the leading `+`.
pub const PHONE_MIN_LEN: usize = 12;
pub const PHONE_MAX_LEN: usize = 13;

/// Password length bounds (characters).
pub const PASSWORD_MIN_LEN: usize = 8;
pub const PASSWORD_MAX_LEN: usize = 32;

/// Minimum number of decimal digits in a password.
pub const PASSWORD_MIN_DIGITS: usize = 2;

/// Names and departments are capped at this many characters.
pub const NAME_MAX_LEN: usize = 32;

static USERNAME_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9._]{3,32}$").expect("USERNAME_REGEX is a valid regex pattern")
});

static PHONE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+[0-9]+$").expect("PHONE_REGEX is a valid regex pattern"));

/// Non-empty.
pub fn is_present(value: &str) -> bool {
    !value.is_empty()
}

/// Length in characters, not bytes.
pub fn char_len(value: &str) -> usize {
    value.chars().count()
}

/// 3-32 of letters, digits, `.` and `_`; no `..` and no trailing `.`.
pub fn is_username(value: &str) -> bool {
    USERNAME_REGEX.is_match(value) && !value.contains("..") && !value.ends_with('.')
}

/// `+` followed by one or more ASCII digits. Length is checked separately.
pub fn is_phone_pattern(value: &str) -> bool {
    PHONE_REGEX.is_match(value)
}

/// Pattern and length together.
pub fn is_phone_number(value: &str) -> bool {
    is_phone_pattern(value) && (PHONE_MIN_LEN..=PHONE_MAX_LEN).contains(&char_len(value))
}

/// Mailbox syntax from `validator`, plus a dot in the domain.
pub fn is_email(value: &str) -> bool {
    let has_dotted_domain = value
        .rsplit_once('@')
        .is_some_and(|(_, domain)| domain.contains('.'));
    has_dotted_domain && value.validate_email()
}

pub fn has_min_digits(value: &str) -> bool {
    value.chars().filter(char::is_ascii_digit).count() >= PASSWORD_MIN_DIGITS
}

pub fn has_lowercase(value: &str) -> bool {
    value.chars().any(char::is_lowercase)
}

pub fn has_uppercase(value: &str) -> bool {
    value.chars().any(char::is_uppercase)
}

pub fn is_password_length(value: &str) -> bool {
    (PASSWORD_MIN_LEN..=PASSWORD_MAX_LEN).contains(&char_len(value))
}

/// Length 8-32, at least two digits, one lowercase and one uppercase letter.
///
/// Special characters are allowed but not required.
pub fn is_strong_password(value: &str) -> bool {
    is_password_length(value)
        && has_min_digits(value)
        && has_lowercase(value)
        && has_uppercase(value)
}

/// Birth dates must be strictly before today. There is no lower bound.
pub fn is_plausible_birth_date(date: NaiveDate, today: NaiveDate) -> bool {
    date < today
}
