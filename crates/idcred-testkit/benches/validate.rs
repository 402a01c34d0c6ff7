//! Benchmarks for request validation.
//!
//! Covers the UIN codec on its own and the full register and login rule
//! chains against a pinned-clock engine.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use idcred::{RegisterRequest, UinAssessment, ValidationRequest};
use idcred_core::{checksum, decode, EpochWindow, Uin};
use idcred_testkit::fixtures::TestFixture;

fn bench_uin_decode(c: &mut Criterion) {
    let window = EpochWindow::default();

    c.bench_function("uin_decode", |b| {
        b.iter(|| decode(black_box("0101990500003"), &window))
    });

    let uin: Uin = "0101990500003".parse().unwrap();
    c.bench_function("uin_checksum", |b| b.iter(|| checksum::is_valid(black_box(&uin))));

    c.bench_function("uin_assess_bad_checksum", |b| {
        b.iter(|| UinAssessment::of(black_box("0101990500006"), &window))
    });
}

fn bench_register(c: &mut Criterion) {
    let fixture = TestFixture::new();
    let valid = fixture.register_request();
    let empty = RegisterRequest::default();

    c.bench_function("validate_register_valid", |b| {
        b.iter(|| fixture.engine.validate(black_box(&valid)))
    });

    c.bench_function("validate_register_empty", |b| {
        b.iter(|| fixture.engine.validate(black_box(&empty)))
    });
}

fn bench_login(c: &mut Criterion) {
    let fixture = TestFixture::new();
    let login = fixture.login_request();

    c.bench_function("validate_login", |b| {
        b.iter(|| fixture.engine.validate(black_box(&login)))
    });

    let json = serde_json::json!({
        "kind": "login",
        "email": "marko@example.com",
        "password": "Secret12",
    });
    let request: ValidationRequest = serde_json::from_value(json).unwrap();
    c.bench_function("validate_request_login", |b| {
        b.iter(|| fixture.engine.validate_request(black_box(&request)))
    });
}

criterion_group!(benches, bench_uin_decode, bench_register, bench_login);
criterion_main!(benches);
