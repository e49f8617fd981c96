// Hot-path benchmarks: one call per severity at each level ceiling.
// Run with: cargo bench -p tasklog

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use tasklog::{Level, Logger, Sink};

/// Sink that discards everything, so only formatting and filtering are measured
struct NullSink;

impl Sink for NullSink {
    fn write_all(&self, buf: &[u8]) -> std::io::Result<()> {
        black_box(buf);
        Ok(())
    }

    fn close(&self) -> std::io::Result<()> {
        Ok(())
    }
}

fn bench_ceilings(c: &mut Criterion) {
    let mut group = c.benchmark_group("five_calls");
    for ceiling in Level::ALL {
        let logger = Logger::new(NullSink, ceiling);
        group.bench_function(ceiling.as_str(), |b| {
            b.iter(|| {
                logger.info(black_box("aaa"));
                logger.warn(black_box("bbb"));
                logger.error(black_box("ccc"));
                logger.debug(black_box("ddd"));
                logger.fatal(black_box("eee"));
            });
        });
    }
    group.finish();
}

/// Suppressed calls should cost no more than a level load
fn bench_suppressed(c: &mut Criterion) {
    let logger = Logger::new(NullSink, Level::Fatal);
    c.bench_function("suppressed_debug", |b| {
        b.iter(|| logger.debug(black_box("never written")));
    });
}

fn bench_task_view(c: &mut Criterion) {
    let logger = Logger::new(NullSink, Level::Info).with_task_name("request-id");
    c.bench_function("task_view_info", |b| {
        b.iter(|| tasklog::info!(logger, "user", black_box(42), "logged in"));
    });
}

criterion_group!(benches, bench_ceilings, bench_suppressed, bench_task_view);
criterion_main!(benches);
