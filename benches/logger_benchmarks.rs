//! Criterion benchmarks for module_logger

use chrono::NaiveDate;
use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use module_logger::prelude::*;
use module_logger::render;
use std::io;
use std::sync::Arc;

/// Sink that throws everything away, so only formatting and dispatch are measured
struct Discard;

impl Sink for Discard {
    fn write_all(&self, bytes: &[u8]) -> io::Result<()> {
        black_box(bytes);
        Ok(())
    }
}

fn discard_logger<F: Formatter + 'static>(level: LogLevel, formatter: F) -> Logger {
    let defaults = Arc::new(Defaults::with(level, vec![Output::new(Discard, formatter)]));
    Logger::with_defaults("bench", defaults)
}

// ============================================================================
// Formatter Benchmarks
// ============================================================================

fn bench_formatters(c: &mut Criterion) {
    let mut group = c.benchmark_group("formatters");
    group.throughput(Throughput::Elements(1));

    let time = NaiveDate::from_ymd_opt(2024, 1, 2)
        .unwrap()
        .and_hms_opt(3, 4, 5)
        .unwrap();
    let attrs = [
        Attr::new("port", 8080),
        Attr::new("host", "example.internal"),
        Attr::new("latency", 12.5),
        Attr::new("ok", true),
    ];
    let record = Record::new(time, LogLevel::Info, "svc", "request handled", &attrs);

    group.bench_function("line", |b| {
        let formatter = LineFormatter::new();
        b.iter(|| black_box(render(&formatter, black_box(&record)).unwrap()));
    });

    group.bench_function("tag", |b| {
        let formatter = TagFormatter::new();
        b.iter(|| black_box(render(&formatter, black_box(&record)).unwrap()));
    });

    group.bench_function("json", |b| {
        let formatter = JsonFormatter::new();
        b.iter(|| black_box(render(&formatter, black_box(&record)).unwrap()));
    });

    group.finish();
}

// ============================================================================
// Logging Performance Benchmarks
// ============================================================================

fn bench_logging(c: &mut Criterion) {
    let mut group = c.benchmark_group("logging");
    group.throughput(Throughput::Elements(1));

    let logger = discard_logger(LogLevel::Trace, LineFormatter::new());

    group.bench_function("info_no_attrs", |b| {
        b.iter(|| logger.info(black_box("Info message"), &[]));
    });

    group.bench_function("info_with_attrs", |b| {
        b.iter(|| {
            logger.info(
                black_box("Info message"),
                &[Attr::new("user", "alice"), Attr::new("id", 42)],
            )
        });
    });

    group.bench_function("infof", |b| {
        b.iter(|| logger.infof(format_args!("Processing {} items", black_box(100))));
    });

    group.finish();
}

// ============================================================================
// Filtering Benchmarks
// ============================================================================

fn bench_level_filtering(c: &mut Criterion) {
    let mut group = c.benchmark_group("level_filtering");
    group.throughput(Throughput::Elements(1));

    let logger = discard_logger(LogLevel::Warning, LineFormatter::new());

    group.bench_function("below_threshold", |b| {
        b.iter(|| logger.debug(black_box("Filtered message"), &[]));
    });

    group.bench_function("above_threshold", |b| {
        b.iter(|| logger.error(black_box("Kept message"), &"io", &[]));
    });

    group.finish();
}

// ============================================================================
// Concurrent Logging Benchmarks
// ============================================================================

fn bench_concurrent_logging(c: &mut Criterion) {
    let mut group = c.benchmark_group("concurrent_logging");

    let logger = Arc::new(discard_logger(LogLevel::Info, JsonFormatter::new()));

    group.bench_function("multi_thread_4", |b| {
        let logger = Arc::clone(&logger);
        b.iter(|| {
            let handles: Vec<_> = (0..4)
                .map(|_| {
                    let logger = Arc::clone(&logger);
                    std::thread::spawn(move || {
                        logger.info(black_box("Concurrent message"), &[]);
                    })
                })
                .collect();

            for handle in handles {
                handle.join().unwrap();
            }
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_formatters,
    bench_logging,
    bench_level_filtering,
    bench_concurrent_logging
);
criterion_main!(benches);
