//! Performance benchmarks for the payroll engine.
//!
//! This benchmark suite verifies that roster operations stay cheap at
//! expected scale:
//! - Single payroll calculation: well under 1μs mean
//! - Processing a 100-record roster: < 100μs mean
//! - Worst-case search (last record) on a 1000-record roster: < 50μs mean
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rust_decimal::Decimal;

use payroll_engine::models::Employee;
use payroll_engine::roster::Roster;

/// Builds a roster of the given size, cycling through all five categories.
fn build_roster(size: usize) -> Roster {
    let mut roster = Roster::new();
    for i in 0..size {
        let id = (i + 1) as i64;
        let name = format!("employee_{:04}", id);
        let employee = match i % 5 {
            0 => Employee::permanent(id, name, "Eng", Decimal::from(1000), Decimal::from(200)),
            1 => Employee::contract(id, name, "Ops", Decimal::from(28), Decimal::from(38)),
            2 => Employee::manager(
                id,
                name,
                "Eng",
                Decimal::from(1500),
                Decimal::from(300),
                Decimal::from(100),
            ),
            3 => Employee::sales_person(
                id,
                name,
                "Sales",
                Decimal::from(800),
                Decimal::from(100),
                Decimal::from(400),
            ),
            _ => Employee::technician(
                id,
                name,
                "Ops",
                Decimal::from(30),
                Decimal::from(40),
                Decimal::from(150),
            ),
        }
        .expect("benchmark employee construction");
        roster.add(employee);
    }
    roster
}

/// Benchmarks a single payroll calculation per category.
fn bench_calculate_payroll(c: &mut Criterion) {
    let manager = Employee::manager(
        1,
        "Ana",
        "Eng",
        Decimal::from(1500),
        Decimal::from(300),
        Decimal::from(100),
    )
    .unwrap();
    let technician = Employee::technician(
        2,
        "Bo",
        "Ops",
        Decimal::from(30),
        Decimal::from(40),
        Decimal::from(150),
    )
    .unwrap();

    c.bench_function("calculate_payroll_manager", |b| {
        b.iter(|| black_box(&manager).calculate_payroll())
    });
    c.bench_function("calculate_payroll_technician", |b| {
        b.iter(|| black_box(&technician).calculate_payroll())
    });
}

/// Benchmarks full processing passes at several roster sizes.
fn bench_process_all(c: &mut Criterion) {
    let mut group = c.benchmark_group("process_all");
    for size in [10usize, 100, 1000] {
        let roster = build_roster(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &roster, |b, roster| {
            b.iter(|| black_box(roster.process_all()))
        });
    }
    group.finish();
}

/// Benchmarks the full display report at several roster sizes.
fn bench_display_all(c: &mut Criterion) {
    let mut group = c.benchmark_group("display_all");
    for size in [10usize, 100, 1000] {
        let roster = build_roster(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &roster, |b, roster| {
            b.iter(|| black_box(roster.display_all()))
        });
    }
    group.finish();
}

/// Benchmarks the worst-case linear search (last record).
fn bench_find_by_id_worst_case(c: &mut Criterion) {
    let roster = build_roster(1000);
    c.bench_function("find_by_id_last_of_1000", |b| {
        b.iter(|| roster.find_by_id(black_box(1000)).unwrap())
    });
}

criterion_group!(
    benches,
    bench_calculate_payroll,
    bench_process_all,
    bench_display_all,
    bench_find_by_id_worst_case
);
criterion_main!(benches);
