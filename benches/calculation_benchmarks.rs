//! Performance benchmarks for the Setoran Engine.
//!
//! Covers the pure calculation, partial-update reconciliation, the record
//! store, and the preview endpoint end to end.
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rust_decimal::Decimal;

use setoran_engine::api::{create_router, AppState, CalculationRequest};
use setoran_engine::calculation::{calculate, reconcile, UNIT_PRICE};
use setoran_engine::config::ConfigLoader;
use setoran_engine::models::{LineItem, ShiftDraft, ShiftInput, ShiftPatch};
use setoran_engine::store::ShiftStore;

use axum::{body::Body, http::Request};
use tower::ServiceExt;

/// Creates a test state with loaded configuration.
fn create_test_state() -> AppState {
    let config = ConfigLoader::load("./config/default").expect("Failed to load config");
    AppState::new(config)
}

/// Creates `count` line items with distinct descriptions and amounts.
fn create_items(prefix: &str, count: usize) -> Vec<LineItem> {
    (0..count)
        .map(|i| {
            LineItem::new(
                format!("{}{}", prefix, i + 1),
                format!("{} item {}", prefix, i + 1),
                Decimal::new(1000 + i as i64 * 250, 0),
            )
        })
        .collect()
}

/// Creates a shift input with the given number of expense and income items.
fn create_input(item_count: usize) -> ShiftInput {
    ShiftInput {
        meter_start: Decimal::new(1_000_000, 2),
        meter_end: Decimal::new(1_045_075, 2),
        qris_amount: Decimal::new(150_000, 0),
        expense_items: create_items("e", item_count),
        income_items: create_items("i", item_count),
    }
}

fn create_draft(item_count: usize) -> ShiftDraft {
    ShiftDraft {
        employee_name: "Budi".to_string(),
        clock_in: "07:00".to_string(),
        clock_out: "15:00".to_string(),
        input: create_input(item_count),
    }
}

fn create_request(item_count: usize) -> CalculationRequest {
    let input = create_input(item_count);
    CalculationRequest {
        meter_start: input.meter_start,
        meter_end: input.meter_end,
        qris_amount: input.qris_amount,
        expense_items: input.expense_items,
        income_items: input.income_items,
    }
}

/// Benchmark: Pure calculation with growing line-item lists.
fn bench_calculate(c: &mut Criterion) {
    let mut group = c.benchmark_group("calculate");

    for item_count in [0usize, 5, 50, 500].iter() {
        let input = create_input(*item_count);

        group.throughput(Throughput::Elements((*item_count * 2) as u64));
        group.bench_with_input(
            BenchmarkId::new("line_items", item_count),
            &input,
            |b, input| b.iter(|| black_box(calculate(black_box(input)))),
        );
    }

    group.finish();
}

/// Benchmark: Reconciling a display-only patch versus a financial patch.
fn bench_reconcile(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let store = ShiftStore::new(UNIT_PRICE);
    let record = rt.block_on(store.create(create_draft(50))).unwrap();

    let display_patch = ShiftPatch {
        employee_name: Some("Siti".to_string()),
        ..ShiftPatch::default()
    };
    let financial_patch = ShiftPatch {
        qris_amount: Some(Decimal::ZERO),
        ..ShiftPatch::default()
    };

    let mut group = c.benchmark_group("reconcile");
    group.bench_function("display_only", |b| {
        b.iter(|| black_box(reconcile(black_box(&record), &display_patch)))
    });
    group.bench_function("financial", |b| {
        b.iter(|| black_box(reconcile(black_box(&record), &financial_patch)))
    });
    group.finish();
}

/// Benchmark: Store create and update, including line-item encoding.
fn bench_store(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let store = ShiftStore::new(UNIT_PRICE);
    let record = rt.block_on(store.create(create_draft(5))).unwrap();
    let patch = ShiftPatch {
        income_items: Some(create_items("i", 10)),
        ..ShiftPatch::default()
    };

    let mut group = c.benchmark_group("store");
    group.bench_function("create", |b| {
        b.to_async(&rt)
            .iter(|| async { black_box(store.create(create_draft(5)).await.unwrap()) })
    });
    group.bench_function("update_income_items", |b| {
        b.to_async(&rt)
            .iter(|| async { black_box(store.update(record.id, &patch).await.unwrap()) })
    });
    group.finish();
}

/// Benchmark: Preview endpoint end to end, including JSON handling.
fn bench_preview_endpoint(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let state = create_test_state();

    let mut group = c.benchmark_group("preview_endpoint");

    for item_count in [0usize, 5, 50].iter() {
        let router = create_router(state.clone());
        let body = serde_json::to_string(&create_request(*item_count)).unwrap();

        group.bench_with_input(
            BenchmarkId::new("line_items", item_count),
            item_count,
            |b, _| {
                b.to_async(&rt).iter(|| async {
                    let router = router.clone();
                    let response = router
                        .oneshot(
                            Request::builder()
                                .method("POST")
                                .uri("/api/setoran/calculate")
                                .header("Content-Type", "application/json")
                                .body(Body::from(body.clone()))
                                .unwrap(),
                        )
                        .await
                        .unwrap();
                    black_box(response)
                })
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_calculate,
    bench_reconcile,
    bench_store,
    bench_preview_endpoint,
);
criterion_main!(benches);
