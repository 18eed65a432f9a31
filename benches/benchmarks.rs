use criterion::{black_box, criterion_group, criterion_main, Criterion};
use num_bigint::BigInt;
use settlement_report::{
    instruction::RawInstruction, report::Report, sample::reference_instructions, types::Amount,
};

fn batch(size: usize) -> Vec<RawInstruction> {
    let currencies = ["AED", "SAR", "SGP", "USD", "EUR", "LOD"];
    let start = chrono::NaiveDate::from_ymd_opt(2018, 1, 1).unwrap();

    (0..size)
        .map(|i| {
            let settles = start + chrono::Duration::days((i % 365) as i64);
            RawInstruction::new(
                format!("entity-{}", i % 50),
                if i % 2 == 0 { "B" } else { "S" },
                currencies[i % currencies.len()],
            )
            .with_exchange_rate(Amount::new(BigInt::from(50 + (i % 100) as i64), 2))
            .with_units(100 + i as u64)
            .with_price_per_unit(Amount::new(BigInt::from(10_025 + i as i64), 2))
            .with_dates(Some(start), Some(settles))
        })
        .collect()
}

fn benchmark_reference_report(c: &mut Criterion) {
    let instructions = reference_instructions();

    c.bench_function("report_reference_batch", |b| {
        b.iter(|| Report::build(black_box(&instructions)));
    });
}

fn benchmark_large_report(c: &mut Criterion) {
    let instructions = batch(10_000);

    c.bench_function("report_10000_instructions", |b| {
        b.iter(|| {
            let report = Report::build(black_box(&instructions));
            black_box(report.incoming_daily_totals());
            black_box(report.outgoing_daily_totals());
        });
    });
}

criterion_group!(benches, benchmark_reference_report, benchmark_large_report);
criterion_main!(benches);
