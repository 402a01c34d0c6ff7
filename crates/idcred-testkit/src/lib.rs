//! # idcred Testkit
//!
//! Testing utilities for idcred.
//!
//! ## Overview
//!
//! This crate provides:
//!
//! - **Golden vectors**: Known UINs with their expected structural, checksum
//!   and decoded outcomes
//! - **Generators**: Proptest strategies for identities and requests
//! - **Fixtures**: A pinned-clock engine and known-good requests
//!
//! ## Golden Vectors
//!
//! ```rust
//! use idcred_testkit::vectors::verify_all_vectors;
//!
//! for (name, ok) in verify_all_vectors() {
//!     assert!(ok, "vector {name} failed");
//! }
//! ```
//!
//! ## Property Testing
//!
//! ```rust,ignore
//! use proptest::prelude::*;
//! use idcred_testkit::generators::{uin_from_params, UinParams};
//!
//! proptest! {
//!     #[test]
//!     fn built_uins_decode(params: UinParams) {
//!         let uin = uin_from_params(&params);
//!         prop_assert!(idcred_core::checksum::is_valid(&uin));
//!     }
//! }
//! ```
//!
//! ## Test Fixtures
//!
//! ```rust
//! use idcred_testkit::fixtures::TestFixture;
//!
//! let fixture = TestFixture::new();
//! let report = fixture.engine.validate(&fixture.register_request());
//! assert!(report.is_valid());
//! ```

pub mod fixtures;
pub mod generators;
pub mod vectors;

pub use fixtures::{fixture_today, random_uin, TestFixture};
pub use generators::{uin_from_params, UinParams};
pub use vectors::{all_vectors, verify_all_vectors, GoldenVector};
