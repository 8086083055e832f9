// std imports
use std::{hint::black_box, time::Duration};

// third-party imports
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group};

// local imports
use super::{GROUP, ND};

criterion_group!(benches, bench);

fn bench(c: &mut Criterion) {
    let mut c = c.benchmark_group(format!("{GROUP}{ND}wildcard"));
    c.warm_up_time(Duration::from_secs(1));
    c.measurement_time(Duration::from_secs(3));

    let variants = [
        ("short", "_TEST", "_*", true),
        ("short", "TEST", "_*", false),
        ("long", "_TEST_SOME_VERY_VERY_LONG_NAME", "_*", true),
        ("long", "SOME_VERY_VERY_LONG_PREFIX_AND_SOMEWHAT", "SOME_VERY_VERY_LONG_PREFIX_*", true),
        ("multi", "http://www.example.com/index.html", "*www.*.com*", true),
        ("multi", "http://www.example.edu/index.html", "*www.*.com*", false),
        ("backtrack", "abababababababababababababababababc", "*ab*abc", true),
        ("backtrack", "abababababababababababababababababd", "*ab*abc", false),
    ];

    for (name, input, pattern, expected) in variants {
        let pattern = wildcard::Pattern::new(pattern);
        assert_eq!(pattern.matches(input), expected);

        let param = format!("{}{ND}{}{ND}{}", name, pattern, if expected { "pos" } else { "neg" });
        c.throughput(Throughput::Bytes(input.len() as u64));
        c.bench_function(BenchmarkId::new("matches", param), |b| {
            b.iter(|| black_box(&pattern).matches(black_box(input)));
        });
    }
}
