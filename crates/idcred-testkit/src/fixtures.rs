//! Test fixtures and helpers.
//!
//! Common setup code for integration tests.

use chrono::NaiveDate;
use rand::Rng;

use idcred::{
    ActivationRequest, Engine, EngineConfig, Gender, LoginRequest, PasswordResetRequest,
    RegisterRequest, Role,
};
use idcred_core::builder::{MAX_REGION, MAX_SERIAL};
use idcred_core::{EpochWindow, FixedClock, Uin, UinBuilder};

/// The date every fixture engine treats as today.
pub fn fixture_today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 1, 14).expect("valid calendar date")
}

/// A test fixture with an engine pinned to [`fixture_today`].
pub struct TestFixture {
    pub engine: Engine<FixedClock>,
}

impl TestFixture {
    /// Create a fixture with the default configuration.
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    /// Create a fixture with a custom configuration.
    pub fn with_config(config: EngineConfig) -> Self {
        Self {
            engine: Engine::with_clock(config, FixedClock(fixture_today()))
                .expect("fixture configuration is valid"),
        }
    }

    /// A registration that passes every rule.
    pub fn register_request(&self) -> RegisterRequest {
        RegisterRequest {
            first_name: "Marko".into(),
            last_name: "Marković".into(),
            date_of_birth: NaiveDate::from_ymd_opt(1990, 1, 1),
            gender: Gender::Male,
            unique_identification_number: "0101990500003".into(),
            username: "marko.m".into(),
            email: "marko@example.com".into(),
            phone_number: "+381601234567".into(),
            address: "Bulevar Oslobođenja 12".into(),
            role: Role::Client,
            department: String::new(),
        }
    }

    /// A registration for a freshly issued random identity.
    pub fn random_register_request(&self) -> RegisterRequest {
        let mut rng = rand::thread_rng();
        let birth_date = random_birth_date(&mut rng);
        let gender = if rng.gen_bool(0.5) {
            Gender::Male
        } else {
            Gender::Female
        };
        let uin = random_uin_for(&mut rng, birth_date, gender, self.engine.epoch());

        RegisterRequest {
            date_of_birth: Some(birth_date),
            gender,
            unique_identification_number: uin.to_string(),
            ..self.register_request()
        }
    }

    pub fn login_request(&self) -> LoginRequest {
        LoginRequest {
            email: "marko@example.com".into(),
            password: "Secret12".into(),
        }
    }

    pub fn activation_request(&self) -> ActivationRequest {
        ActivationRequest {
            password: "Secret12".into(),
            confirm_password: "Secret12".into(),
        }
    }

    pub fn password_reset_request(&self) -> PasswordResetRequest {
        PasswordResetRequest {
            password: "NewSecret34".into(),
            confirm_password: "NewSecret34".into(),
        }
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// A valid UIN for a random identity born before [`fixture_today`].
pub fn random_uin() -> Uin {
    let mut rng = rand::thread_rng();
    let birth_date = random_birth_date(&mut rng);
    random_uin_for(&mut rng, birth_date, Gender::Male, &EpochWindow::default())
}

fn random_birth_date(rng: &mut impl Rng) -> NaiveDate {
    // 1900-01-01 plus up to ~120 years, kept before today.
    let start = NaiveDate::from_ymd_opt(1900, 1, 1).expect("valid calendar date");
    let span = (fixture_today() - start).num_days();
    start + chrono::Duration::days(rng.gen_range(0..span))
}

fn random_uin_for(
    rng: &mut impl Rng,
    birth_date: NaiveDate,
    gender: Gender,
    window: &EpochWindow,
) -> Uin {
    UinBuilder::new(birth_date)
        .gender(gender)
        .region(rng.gen_range(0..=MAX_REGION))
        .serial(rng.gen_range(0..=MAX_SERIAL))
        .build(window)
        .expect("random identity is encodable")
}
