//! Failure messages reported to callers.
//!
//! The text is part of the observable output; callers that localize map
//! from `(field, kind)` instead of matching on these strings.

pub const EMAIL_REQUIRED: &str = "Email is required.";
pub const EMAIL_INVALID: &str = "Email is not a valid email address.";

pub const PASSWORD_REQUIRED: &str = "Password is required.";
pub const PASSWORD_TWO_DIGITS: &str = "Password must contain at least two digits.";
pub const PASSWORD_LOWERCASE: &str = "Password must contain at least one lowercase character.";
pub const PASSWORD_UPPERCASE: &str = "Password must contain at least one uppercase character.";
pub const PASSWORD_TOO_SHORT: &str = "Password must be at least 8 characters long.";
pub const PASSWORD_TOO_LONG: &str = "Password must be at most 32 characters long.";
pub const CONFIRM_PASSWORD_REQUIRED: &str = "Password confirmation is required.";
pub const PASSWORDS_DO_NOT_MATCH: &str = "Passwords do not match.";

pub const FIRST_NAME_REQUIRED: &str = "First name is required.";
pub const FIRST_NAME_INVALID: &str = "First name is not valid.";
pub const FIRST_NAME_TOO_LONG: &str = "First name must be at most 32 characters long.";
pub const LAST_NAME_REQUIRED: &str = "Last name is required.";
pub const LAST_NAME_INVALID: &str = "Last name is not valid.";
pub const LAST_NAME_TOO_LONG: &str = "Last name must be at most 32 characters long.";

pub const DATE_OF_BIRTH_REQUIRED: &str = "Date of birth is required.";
pub const DATE_OF_BIRTH_INVALID: &str = "Date of birth is not valid.";
pub const DATE_OF_BIRTH_MISMATCH: &str =
    "Date of birth does not match the unique identification number.";

pub const GENDER_REQUIRED: &str = "Gender is required.";
pub const GENDER_MISMATCH: &str = "Gender does not match the unique identification number.";

pub const UIN_REQUIRED: &str = "Unique identification number is required.";
pub const UIN_NOT_13_DIGITS: &str = "Unique identification number must be 13 digits.";
pub const UIN_INVALID_DATE: &str = "Unique identification number does not contain a valid date.";
pub const UIN_INVALID_CONTROL_DIGIT: &str =
    "Unique identification number does not have a valid control digit.";

pub const USERNAME_REQUIRED: &str = "Username is required.";
pub const USERNAME_INVALID: &str = "Invalid username.";

pub const PHONE_REQUIRED: &str = "Phone number is required.";
pub const PHONE_INVALID: &str = "Phone number is not valid.";
pub const PHONE_TOO_SHORT: &str = "Phone number does not have enough digits.";
pub const PHONE_TOO_LONG: &str = "Phone number has more than 13 digits.";

pub const ADDRESS_REQUIRED: &str = "Address is required.";
pub const ADDRESS_INVALID: &str = "Address is not valid.";

pub const ROLE_REQUIRED: &str = "Role is required.";

pub const DEPARTMENT_REQUIRED: &str = "Department name is required for staff roles.";
pub const DEPARTMENT_INVALID: &str = "Department name is not valid.";
