// std imports
use std::{hint::black_box, time::Duration};

// third-party imports
use criterion::{BenchmarkId, Criterion, criterion_group};
use listmatch::PatternList;

// local imports
use super::{GROUP, ND};

criterion_group!(benches, bench);

fn bench(c: &mut Criterion) {
    let mut c = c.benchmark_group(format!("{GROUP}{ND}list"));
    c.warm_up_time(Duration::from_secs(1));
    c.measurement_time(Duration::from_secs(3));

    let patterns: Vec<String> = (0..256)
        .map(|i| format!("user{i}@example{i}.com"))
        .chain((0..64).map(|i| format!("*@domain{i}.*")))
        .collect();

    let list = PatternList::new(&patterns, Some("@"), false);

    let variants = [
        ("exact", "user7@example7.com", true),
        ("wildcard", "anyone@domain42.org", true),
        ("miss", "anyone@nowhere.org", false),
        ("mismatch", "a@b@c", false),
    ];

    for (name, value, expected) in variants {
        assert_eq!(list.matches(Some(value)), expected);
        c.bench_function(BenchmarkId::new("matches", name), |b| {
            b.iter(|| black_box(&list).matches(black_box(Some(value))));
        });
    }
}
