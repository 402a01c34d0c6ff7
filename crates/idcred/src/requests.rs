//! Request records handed to the engine.
//!
//! Plain data as marshalled by the transport layer. The engine only reads
//! them.

use chrono::NaiveDate;
use idcred_core::{Gender, Role};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegisterRequest {
    pub first_name: String,
    pub last_name: String,
    /// `None` when not supplied.
    pub date_of_birth: Option<NaiveDate>,
    pub gender: Gender,
    pub unique_identification_number: String,
    pub username: String,
    pub email: String,
    pub phone_number: String,
    pub address: String,
    pub role: Role,
    /// Only required for staff roles.
    pub department: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ActivationRequest {
    pub password: String,
    pub confirm_password: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PasswordResetRequest {
    pub password: String,
    pub confirm_password: String,
}

/// Any request the engine can validate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ValidationRequest {
    Login(LoginRequest),
    Register(RegisterRequest),
    Activation(ActivationRequest),
    PasswordReset(PasswordResetRequest),
}

impl ValidationRequest {
    /// Short name used in logs.
    pub fn kind(&self) -> &'static str {
        match self {
            ValidationRequest::Login(_) => "login",
            ValidationRequest::Register(_) => "register",
            ValidationRequest::Activation(_) => "activation",
            ValidationRequest::PasswordReset(_) => "password_reset",
        }
    }
}

/// Password plus confirmation, shared by activation and reset.
pub(crate) trait NewPassword {
    fn password(&self) -> &str;
    fn confirm_password(&self) -> &str;
}

impl NewPassword for ActivationRequest {
    fn password(&self) -> &str {
        &self.password
    }

    fn confirm_password(&self) -> &str {
        &self.confirm_password
    }
}

impl NewPassword for PasswordResetRequest {
    fn password(&self) -> &str {
        &self.password
    }

    fn confirm_password(&self) -> &str {
        &self.confirm_password
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_from_json() {
        let json = r#"{
            "kind": "register",
            "first_name": "Marko",
            "date_of_birth": "1990-01-01",
            "gender": "male",
            "role": "client"
        }"#;
        let request: ValidationRequest = serde_json::from_str(json).unwrap();
        let ValidationRequest::Register(register) = &request else {
            panic!("expected register, got {request:?}");
        };
        assert_eq!(register.first_name, "Marko");
        assert_eq!(
            register.date_of_birth,
            NaiveDate::from_ymd_opt(1990, 1, 1)
        );
        assert_eq!(register.gender, Gender::Male);
        assert_eq!(register.role, Role::Client);
        assert!(register.last_name.is_empty());
        assert_eq!(request.kind(), "register");
    }

    #[test]
    fn test_missing_fields_default_to_sentinels() {
        let request: RegisterRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(request.gender, Gender::Invalid);
        assert_eq!(request.role, Role::Invalid);
        assert!(request.date_of_birth.is_none());
    }

    #[test]
    fn test_password_reset_tag() {
        let request: ValidationRequest = serde_json::from_str(
            r#"{"kind": "password_reset", "password": "x", "confirm_password": "y"}"#,
        )
        .unwrap();
        assert_eq!(request.kind(), "password_reset");
    }
}
