use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::time::Duration;
use strxbench::config::{BenchConfig, Revision};
use strxbench::driver::Harness;
use strxbench::variants;

// The CLI's chunked pass, scaled down so criterion can sample it.
fn chunked_benches(c: &mut Criterion) {
    let len = 1 << 16;
    let mut group = c.benchmark_group("chunked");
    group.sample_size(20);
    group.warm_up_time(Duration::from_millis(300));
    group.measurement_time(Duration::from_millis(900));

    for revision in [Revision::First, Revision::Second] {
        let config = BenchConfig::for_revision(revision).with_size(len, revision.default_step());
        let mut harness = Harness::new(config).expect("bench config is valid");
        group.throughput(Throughput::Bytes(config.plan().covered() as u64));

        for variant in variants::available() {
            let label = format!("rev{}", revision as u8 + 1);
            group.bench_with_input(BenchmarkId::new(variant.key, &label), &variant, |b, v| {
                b.iter(|| harness.run(v));
            });
        }
    }

    group.finish();
}

criterion_group!(benches, chunked_benches);
criterion_main!(benches);
