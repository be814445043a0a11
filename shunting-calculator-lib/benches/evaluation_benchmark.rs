use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use shunting_calculator::interpreter::evaluate;

fn criterion_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("evaluate");
    let expressions = [
        "14".to_string(),
        "2+3*4".to_string(),
        "2.5*2+1-8/4".to_string(),
        "1 + 2 * 3 - 4 / 5 + 6 * 7 - 8 / 9".to_string(),
        (0..256).map(|i| i.to_string()).collect::<Vec<_>>().join("+"),
    ];
    for expression in expressions {
        group.throughput(Throughput::Bytes(expression.len() as u64));

        group.bench_with_input(
            BenchmarkId::from_parameter(expression.len()),
            &expression,
            |bencher, expression| {
                bencher.iter(|| evaluate(expression));
            },
        );
    }
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
