//! # idcred Core
//!
//! Pure primitives for identity and credential validation: the 13-digit
//! unique identification number (UIN) codec, its mod-11 check digit, and the
//! stateless pattern rules used for names, usernames, phone numbers, email
//! addresses and passwords.
//!
//! This crate contains no I/O, no storage, no networking. The only outside
//! input is "today", which comes in through the [`Clock`] trait.
//!
//! ## Key Types
//!
//! - [`Uin`] - A structurally valid identifier (13 digits)
//! - [`DecodedIdentity`] - Birth date and gender carried by a UIN
//! - [`EpochWindow`] - Mapping from 3-digit year codes to full years
//! - [`NameGrammar`] - Compiled name grammars for a given [`Alphabet`]
//!
//! ## Example
//!
//! ```rust
//! use idcred_core::{checksum, decode, EpochWindow, Gender, Uin};
//!
//! let window = EpochWindow::default();
//! let uin = Uin::parse("0101990500003").unwrap();
//! assert!(checksum::is_valid(&uin));
//!
//! let identity = decode("0101990500003", &window).unwrap();
//! assert_eq!(identity.gender, Gender::Male);
//! ```

pub mod alphabet;
pub mod builder;
pub mod checksum;
pub mod clock;
pub mod codec;
pub mod error;
pub mod rules;
pub mod types;

pub use alphabet::{Alphabet, NameGrammar};
pub use builder::UinBuilder;
pub use clock::{Clock, FixedClock, SystemClock};
pub use codec::{decode, decode_uin, EpochWindow, GENDER_THRESHOLD, UIN_LEN};
pub use error::{CoreError, StructuralError};
pub use types::{DecodedIdentity, Gender, Role, Uin};
