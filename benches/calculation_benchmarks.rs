//! Performance benchmarks for the salary draft engine.
//!
//! Covers the hot paths of an editing session:
//! - Totals recomputation after one amount change
//! - Parsing one raw amount entry
//! - A full edit pass over every field of a form
//! - The calculate endpoint end to end
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use rust_decimal::Decimal;

use salary_draft::api::{AppState, create_router};
use salary_draft::calculation::{calculate_totals, parse_amount};
use salary_draft::config::ConfigLoader;
use salary_draft::form::SalaryForm;
use salary_draft::models::{PayPeriod, SalaryAmounts, SalaryField};

use axum::{body::Body, http::Request};
use tower::ServiceExt;

/// Creates a test state with loaded configuration.
fn create_test_state() -> AppState {
    let config = ConfigLoader::load("./config/default").expect("Failed to load config");
    AppState::new(config)
}

/// Amounts with every field populated.
fn create_full_amounts() -> SalaryAmounts {
    let mut amounts = SalaryAmounts::default();
    for (i, field) in SalaryField::ALL.iter().enumerate() {
        amounts.set(*field, Decimal::new(100_050 + i as i64 * 1_000, 2));
    }
    amounts
}

fn bench_calculate_totals(c: &mut Criterion) {
    let amounts = create_full_amounts();
    c.bench_function("calculate_totals", |b| {
        b.iter(|| black_box(calculate_totals(black_box(&amounts))))
    });
}

fn bench_parse_amount(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_amount");
    for input in ["5000", "  4200.50 ", "1.5e3", "abc"] {
        group.bench_with_input(BenchmarkId::from_parameter(input), input, |b, input| {
            b.iter(|| black_box(parse_amount(black_box(input))))
        });
    }
    group.finish();
}

fn bench_form_edit_pass(c: &mut Criterion) {
    let mut group = c.benchmark_group("form_edit_pass");
    group.throughput(Throughput::Elements(SalaryField::ALL.len() as u64));
    group.bench_function("all_fields", |b| {
        b.iter(|| {
            let mut form = SalaryForm::new(PayPeriod::new(3, 2026));
            for field in SalaryField::ALL {
                form.set_amount(field, "1250.75").unwrap();
            }
            black_box(form.totals().net_salary)
        })
    });
    group.finish();
}

fn bench_calculate_endpoint(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let router = create_router(create_test_state());
    let body = serde_json::json!({
        "amounts": {
            "base_salary": "5000",
            "housing_allowance": "1000",
            "transport_allowance": "500",
            "bonus": "500",
            "social_insurance": "400",
            "tax": "200"
        }
    })
    .to_string();

    c.bench_function("calculate_endpoint", |b| {
        b.to_async(&rt).iter(|| async {
            let router = router.clone();
            let response = router
                .oneshot(
                    Request::builder()
                        .method("POST")
                        .uri("/salaries/calculate")
                        .header("Content-Type", "application/json")
                        .body(Body::from(body.clone()))
                        .unwrap(),
                )
                .await
                .unwrap();
            black_box(response)
        })
    });
}

criterion_group!(
    benches,
    bench_calculate_totals,
    bench_parse_amount,
    bench_form_edit_pass,
    bench_calculate_endpoint,
);
criterion_main!(benches);
