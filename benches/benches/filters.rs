//! Benchmark value coercion and filter dispatch time.

use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use extra_filters::{coerce, Library, Value};

use benches::context;

criterion_main! { benches }
criterion_group! { benches, bench_init, bench_coerce, bench_apply }

/// Benchmarks the time taken to create a library with all builtin filters.
fn bench_init(c: &mut Criterion) {
    c.bench_function("init", |b| b.iter(Library::new));
}

/// Benchmarks the time taken to coerce values.
fn bench_coerce(c: &mut Criterion) {
    let mut g = c.benchmark_group("coerce");

    let ctx = context::random(150);

    g.bench_function("integer", |b| {
        b.iter(|| coerce(Value::Integer(42)).unwrap());
    });
    g.bench_function("text", |b| {
        b.iter_batched(
            || Value::from(" 1_000.25 "),
            |v| coerce(v).unwrap(),
            BatchSize::SmallInput,
        );
    });
    g.bench_function("list", |b| {
        b.iter_batched(
            || Value::from(ctx.prices.clone()),
            |v| coerce(v).unwrap(),
            BatchSize::SmallInput,
        );
    });
}

/// Benchmarks the time taken to look up and apply a filter.
fn bench_apply(c: &mut Criterion) {
    let mut g = c.benchmark_group("apply");

    let library = Library::new();
    let ctx = context::random(150);

    macro_rules! bench {
        ($name:literal, $value:expr, $arg:expr) => {{
            g.bench_function($name, |b| {
                b.iter_batched(
                    || ($value, $arg),
                    |(v, a)| library.apply($name, v, a).unwrap(),
                    BatchSize::SmallInput,
                );
            });
        }};
    }

    bench!("sqrt", Value::from("16"), None);
    bench!("gcd", Value::from("12"), Some(Value::from(8)));
    bench!("log", Value::from("8"), Some(Value::from("2")));
    bench!("sum", Value::from(ctx.quantities.clone()), None);
    bench!("fsum", Value::from(ctx.prices.clone()), None);
}
