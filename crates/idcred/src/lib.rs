//! # idcred
//!
//! Identity and credential validation: decides whether login, registration,
//! activation and password reset requests are well-formed and internally
//! consistent.
//!
//! ## Overview
//!
//! - **Rule tables**: per request kind, an ordered list of fields, each with
//!   an ordered list of predicate + message pairs
//! - **Aggregation**: every field is checked and all failures are reported,
//!   not just the first
//! - **Cross-field checks**: the birth date and gender embedded in the
//!   unique identification number (UIN) must match the declared ones
//!
//! Validation never fails and never panics; the outcome is a
//! [`ValidationReport`], empty when the request is valid.
//!
//! ## Usage
//!
//! ```rust
//! use chrono::NaiveDate;
//! use idcred::{Engine, EngineConfig, LoginRequest};
//! use idcred::core::FixedClock;
//!
//! let today = NaiveDate::from_ymd_opt(2026, 1, 14).unwrap();
//! let engine = Engine::with_clock(EngineConfig::default(), FixedClock(today)).unwrap();
//!
//! let report = engine.validate(&LoginRequest {
//!     email: "not-an-email".into(),
//!     password: String::new(),
//! });
//! assert_eq!(
//!     report.messages(),
//!     vec![("email", "Email is not a valid email address.")]
//! );
//! ```
//!
//! ## Re-exports
//!
//! - `idcred::core` - UIN codec, checksum and pattern predicates

pub mod engine;
pub mod error;
pub mod messages;
pub mod report;
pub mod requests;
mod rules;
pub mod uin;

pub use idcred_core as core;

pub use engine::{Engine, EngineConfig, Validate};
pub use error::{EngineError, Result};
pub use report::{FailureKind, FieldFailure, ValidationReport};
pub use requests::{
    ActivationRequest, LoginRequest, PasswordResetRequest, RegisterRequest, ValidationRequest,
};
pub use uin::UinAssessment;

pub use idcred_core::{DecodedIdentity, Gender, Role};
