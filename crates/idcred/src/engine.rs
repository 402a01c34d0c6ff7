//! The Engine: runs request rule tables.
//!
//! An engine holds only immutable configuration (compiled name grammar,
//! epoch window, clock) and can be shared across threads. Each call builds
//! its own context and report; nothing is carried from one call to the next.

use idcred_core::{Alphabet, Clock, EpochWindow, NameGrammar, SystemClock};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::error::Result;
use crate::report::ValidationReport;
use crate::requests::{
    ActivationRequest, LoginRequest, PasswordResetRequest, RegisterRequest, ValidationRequest,
};
use crate::rules::{RuleContext, RuleTable, ACTIVATION, LOGIN, PASSWORD_RESET, REGISTER};
use crate::uin::UinAssessment;

/// Configuration for the Engine.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Year code to year mapping for UIN dates.
    pub epoch: EpochWindow,
    /// Letters accepted in names and addresses.
    pub alphabet: Alphabet,
}

/// The validation engine.
pub struct Engine<C: Clock = SystemClock> {
    names: NameGrammar,
    epoch: EpochWindow,
    clock: C,
}

impl Engine<SystemClock> {
    /// Create an engine that reads today's date from the host.
    pub fn new(config: EngineConfig) -> Result<Self> {
        Self::with_clock(config, SystemClock)
    }
}

impl<C: Clock> Engine<C> {
    /// Create an engine with an injected clock.
    pub fn with_clock(config: EngineConfig, clock: C) -> Result<Self> {
        config.epoch.check()?;
        let names = NameGrammar::new(&config.alphabet)?;

        debug!(
            legacy_from = config.epoch.legacy_from,
            modern_through = config.epoch.modern_through,
            extra_letters = config.alphabet.extra_letters.chars().count(),
            "validation engine configured"
        );

        Ok(Self {
            names,
            epoch: config.epoch,
            clock,
        })
    }

    pub fn epoch(&self) -> &EpochWindow {
        &self.epoch
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Validate any request type.
    pub fn validate<R: Validate>(&self, request: &R) -> ValidationReport {
        request.validate_with(self)
    }

    /// Validate a request whose kind is only known at runtime.
    pub fn validate_request(&self, request: &ValidationRequest) -> ValidationReport {
        match request {
            ValidationRequest::Login(r) => self.validate_login(r),
            ValidationRequest::Register(r) => self.validate_register(r),
            ValidationRequest::Activation(r) => self.validate_activation(r),
            ValidationRequest::PasswordReset(r) => self.validate_password_reset(r),
        }
    }

    pub fn validate_login(&self, request: &LoginRequest) -> ValidationReport {
        self.run("login", &LOGIN, request, None)
    }

    /// Validate a registration, including the UIN cross-checks.
    pub fn validate_register(&self, request: &RegisterRequest) -> ValidationReport {
        let uin = UinAssessment::of(&request.unique_identification_number, &self.epoch);
        trace!(outcome = uin.outcome(), "assessed unique identification number");

        self.run("register", &REGISTER, request, Some(&uin))
    }

    pub fn validate_activation(&self, request: &ActivationRequest) -> ValidationReport {
        self.run("activation", &ACTIVATION, request, None)
    }

    pub fn validate_password_reset(&self, request: &PasswordResetRequest) -> ValidationReport {
        self.run("password_reset", &PASSWORD_RESET, request, None)
    }

    fn run<R>(
        &self,
        kind: &'static str,
        table: &RuleTable<R>,
        request: &R,
        uin: Option<&UinAssessment>,
    ) -> ValidationReport {
        let cx = RuleContext {
            names: &self.names,
            today: self.clock.today(),
            uin,
        };
        let report = table.evaluate(&cx, request);

        debug!(
            request = kind,
            failures = report.len(),
            valid = report.is_valid(),
            "validated request"
        );
        report
    }
}

/// Request types the engine can validate.
pub trait Validate {
    fn validate_with<C: Clock>(&self, engine: &Engine<C>) -> ValidationReport;
}

impl Validate for LoginRequest {
    fn validate_with<C: Clock>(&self, engine: &Engine<C>) -> ValidationReport {
        engine.validate_login(self)
    }
}

impl Validate for RegisterRequest {
    fn validate_with<C: Clock>(&self, engine: &Engine<C>) -> ValidationReport {
        engine.validate_register(self)
    }
}

impl Validate for ActivationRequest {
    fn validate_with<C: Clock>(&self, engine: &Engine<C>) -> ValidationReport {
        engine.validate_activation(self)
    }
}

impl Validate for PasswordResetRequest {
    fn validate_with<C: Clock>(&self, engine: &Engine<C>) -> ValidationReport {
        engine.validate_password_reset(self)
    }
}

impl Validate for ValidationRequest {
    fn validate_with<C: Clock>(&self, engine: &Engine<C>) -> ValidationReport {
        engine.validate_request(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EngineError;
    use crate::messages;
    use crate::report::FailureKind;
    use chrono::NaiveDate;
    use idcred_core::rules::is_strong_password;
    use idcred_core::{CoreError, FixedClock};
    use proptest::prelude::*;

    fn engine() -> Engine<FixedClock> {
        let today = NaiveDate::from_ymd_opt(2026, 1, 14).unwrap();
        Engine::with_clock(EngineConfig::default(), FixedClock(today)).unwrap()
    }

    #[test]
    fn test_rejects_bad_alphabet() {
        let config = EngineConfig {
            alphabet: Alphabet {
                extra_letters: "a]".into(),
            },
            ..Default::default()
        };
        assert!(matches!(
            Engine::new(config),
            Err(EngineError::Config(CoreError::InvalidAlphabet(_)))
        ));
    }

    #[test]
    fn test_rejects_bad_epoch() {
        let config = EngineConfig {
            epoch: EpochWindow {
                legacy_from: 50,
                modern_through: 99,
            },
            ..Default::default()
        };
        assert!(matches!(
            Engine::new(config),
            Err(EngineError::Config(CoreError::InvalidEpochWindow { .. }))
        ));
    }

    #[test]
    fn test_config_from_json() {
        let config: EngineConfig =
            serde_json::from_str(r#"{"epoch": {"legacy_from": 900, "modern_through": 30}}"#)
                .unwrap();
        assert_eq!(config.epoch.legacy_from, 900);
        assert_eq!(config.alphabet, Alphabet::serbian_latin());
    }

    #[test]
    fn test_login() {
        let engine = engine();

        let report = engine.validate_login(&LoginRequest::default());
        assert_eq!(report.messages(), vec![("email", messages::EMAIL_REQUIRED)]);

        let report = engine.validate_login(&LoginRequest {
            email: "not-an-email".into(),
            password: String::new(),
        });
        assert_eq!(report.messages(), vec![("email", messages::EMAIL_INVALID)]);

        let report = engine.validate(&LoginRequest {
            email: "a@b.com".into(),
            password: String::new(),
        });
        assert!(report.is_valid());
    }

    #[test]
    fn test_password_reset_boundaries() {
        let engine = engine();
        let reset = |password: &str| PasswordResetRequest {
            password: password.into(),
            confirm_password: password.into(),
        };

        assert!(engine.validate(&reset("Abcdef12")).is_valid());
        assert!(engine.validate(&reset(&format!("Ab12{}", "x".repeat(28)))).is_valid());

        let report = engine.validate(&reset("Abcde12"));
        assert_eq!(
            report.messages(),
            vec![("password", messages::PASSWORD_TOO_SHORT)]
        );

        let report = engine.validate(&reset(&format!("Ab12{}", "x".repeat(29))));
        assert_eq!(
            report.messages(),
            vec![("password", messages::PASSWORD_TOO_LONG)]
        );
    }

    #[test]
    fn test_password_collects_all_failures() {
        let report = engine().validate_activation(&ActivationRequest {
            password: "abc".into(),
            confirm_password: "abd".into(),
        });
        assert_eq!(
            report.messages(),
            vec![
                ("password", messages::PASSWORD_TWO_DIGITS),
                ("password", messages::PASSWORD_UPPERCASE),
                ("password", messages::PASSWORD_TOO_SHORT),
                ("confirm_password", messages::PASSWORDS_DO_NOT_MATCH),
            ]
        );
    }

    #[test]
    fn test_empty_password_reports_required_only() {
        let report = engine().validate_activation(&ActivationRequest::default());
        assert_eq!(
            report.messages(),
            vec![
                ("password", messages::PASSWORD_REQUIRED),
                ("confirm_password", messages::CONFIRM_PASSWORD_REQUIRED),
            ]
        );
        assert!(report.failures().iter().all(|f| f.kind == FailureKind::Required));
    }

    #[test]
    fn test_dispatch_by_kind() {
        let engine = engine();
        let request = ValidationRequest::Login(LoginRequest::default());
        assert_eq!(engine.validate(&request), engine.validate_request(&request));
        assert_eq!(engine.validate_request(&request).len(), 1);
    }

    #[test]
    fn test_engine_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Engine<SystemClock>>();
        assert_send_sync::<Engine<FixedClock>>();
    }

    proptest! {
        #[test]
        fn test_login_only_reports_email(email in any::<String>(), password in any::<String>()) {
            let engine = engine();
            let request = LoginRequest { email, password };

            let report = engine.validate(&request);
            prop_assert_eq!(&report, &engine.validate(&request));
            prop_assert!(report.len() <= 1);
            prop_assert!(report.failures().iter().all(|f| f.field == "email"));
        }

        #[test]
        fn test_activation_reports_password_fields(
            password in any::<String>(),
            confirm_password in any::<String>(),
        ) {
            let engine = engine();
            let request = ActivationRequest { password, confirm_password };

            let report = engine.validate(&request);
            prop_assert_eq!(&report, &engine.validate(&request));
            prop_assert!(report
                .failures()
                .iter()
                .all(|f| f.field == "password" || f.field == "confirm_password"));
        }

        #[test]
        fn test_password_reset_matches_strength_predicate(password in any::<String>()) {
            let engine = engine();
            let request = PasswordResetRequest {
                confirm_password: password.clone(),
                password,
            };

            let report = engine.validate(&request);
            prop_assert_eq!(&report, &engine.validate(&request));
            prop_assert_eq!(report.is_valid(), is_strong_password(&request.password));
            prop_assert!(report.for_field("confirm_password").next().is_none()
                || request.password.is_empty());
        }
    }
}
