//! Proptest generators for property-based testing.

use chrono::{Duration, NaiveDate};
use proptest::prelude::*;

use idcred::{RegisterRequest, Role};
use idcred_core::builder::{MAX_REGION, MAX_SERIAL};
use idcred_core::{EpochWindow, Gender, Uin, UinBuilder};

use crate::fixtures::fixture_today;

fn first_day() -> NaiveDate {
    NaiveDate::from_ymd_opt(1800, 1, 1).unwrap()
}

/// Generate a date the default epoch window can encode (1800-01-01 to 2099-12-31).
pub fn encodable_date() -> impl Strategy<Value = NaiveDate> {
    let last = NaiveDate::from_ymd_opt(2099, 12, 31).unwrap();
    (0..=(last - first_day()).num_days()).prop_map(|days| first_day() + Duration::days(days))
}

/// Generate an encodable birth date strictly before the fixture's today.
pub fn past_birth_date() -> impl Strategy<Value = NaiveDate> {
    (0..(fixture_today() - first_day()).num_days())
        .prop_map(|days| first_day() + Duration::days(days))
}

/// Generate a supplied gender.
pub fn gender() -> impl Strategy<Value = Gender> {
    prop_oneof![Just(Gender::Male), Just(Gender::Female)]
}

/// Generate a supplied role.
pub fn role() -> impl Strategy<Value = Role> {
    prop_oneof![Just(Role::Admin), Just(Role::Employee), Just(Role::Client)]
}

/// Generate any 13-digit string.
pub fn digit_string() -> impl Strategy<Value = String> {
    "[0-9]{13}".prop_map(String::from)
}

/// Parameters for building a UIN.
#[derive(Debug, Clone)]
pub struct UinParams {
    pub birth_date: NaiveDate,
    pub gender: Gender,
    pub region: u8,
    pub serial: u16,
}

impl Arbitrary for UinParams {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        (
            encodable_date(),
            gender(),
            0u8..=MAX_REGION,
            0u16..=MAX_SERIAL,
        )
            .prop_map(|(birth_date, gender, region, serial)| UinParams {
                birth_date,
                gender,
                region,
                serial,
            })
            .boxed()
    }
}

/// Build a UIN from parameters.
pub fn uin_from_params(params: &UinParams) -> Uin {
    UinBuilder::new(params.birth_date)
        .gender(params.gender)
        .region(params.region)
        .serial(params.serial)
        .build(&EpochWindow::default())
        .expect("generated parameters are always encodable")
}

/// Generate a registration that passes every rule under the fixture clock.
pub fn valid_register_request() -> impl Strategy<Value = RegisterRequest> {
    let identity = (past_birth_date(), gender(), 0u8..=MAX_REGION, 0u16..=MAX_SERIAL);
    let person = (
        "[A-Z][a-zčćđšž]{1,15}",
        "[A-ZČĆĐŠŽ][a-z]{1,12}( [A-Z][a-z]{1,12})?",
        "[a-z][a-z0-9_]{2,15}(\\.[a-z0-9_]{1,8})?",
        "[a-z]{1,10}@[a-z]{2,10}\\.(com|rs|org)",
    );
    let contact = (
        "\\+381[0-9]{8,9}",
        "[A-Z][a-z]{2,10} [0-9]{1,3}[a-z]?",
        role(),
        "[A-Z][a-z]{2,10}( [0-9]{1,2})?",
    );

    (identity, person, contact).prop_map(
        |(
            (birth_date, gender, region, serial),
            (first_name, last_name, username, email),
            (phone_number, address, role, department),
        )| {
            let uin = uin_from_params(&UinParams {
                birth_date,
                gender,
                region,
                serial,
            });
            RegisterRequest {
                first_name,
                last_name,
                date_of_birth: Some(birth_date),
                gender,
                unique_identification_number: uin.to_string(),
                username,
                email,
                phone_number,
                address,
                role,
                department: if role.requires_department() {
                    department
                } else {
                    String::new()
                },
            }
        },
    )
}
