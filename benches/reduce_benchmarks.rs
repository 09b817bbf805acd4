//! Benchmark suite for parsing, tabulation and prime-implicant reduction
//!
//! Expressions grow by variable count so the exponential stages show up
//! clearly next to the linear parser.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use implicant_logic::{analyze, prime_implicants, AnalysisConfig, BoolExpr, TruthTable};

/// Expression families, by shape
#[derive(Debug, Clone, Copy)]
enum Family {
    Parity,   // a^b^c..., no merges possible
    Chain,    // a&b|b&c|..., overlapping products
    Majority, // every pair of adjacent variables
}

impl Family {
    fn as_str(&self) -> &str {
        match self {
            Family::Parity => "parity",
            Family::Chain => "chain",
            Family::Majority => "majority",
        }
    }

    fn expression(&self, num_vars: usize) -> String {
        let names: Vec<char> = ('a'..='z').take(num_vars).collect();
        match self {
            Family::Parity => join(names.iter().map(char::to_string), "^"),
            Family::Chain => join(
                names.windows(2).map(|pair| format!("{}&{}", pair[0], pair[1])),
                "|",
            ),
            Family::Majority => join(
                names
                    .windows(3)
                    .map(|w| format!("{}&{}|{}&{}|{}&{}", w[0], w[1], w[1], w[2], w[0], w[2])),
                "|",
            ),
        }
    }
}

fn join(parts: impl Iterator<Item = String>, sep: &str) -> String {
    parts.collect::<Vec<_>>().join(sep)
}

const FAMILIES: [Family; 3] = [Family::Parity, Family::Chain, Family::Majority];
const SIZES: [usize; 4] = [4, 6, 8, 10];

/// Benchmark: Parse expressions
fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");

    for family in FAMILIES {
        for num_vars in SIZES {
            let input = family.expression(num_vars);
            group.throughput(Throughput::Bytes(input.len() as u64));
            group.bench_with_input(
                BenchmarkId::new(family.as_str(), num_vars),
                &input,
                |b, data| {
                    b.iter(|| black_box(BoolExpr::parse(black_box(data)).unwrap()));
                },
            );
        }
    }

    group.finish();
}

/// Benchmark: Build truth tables
fn bench_truth_table(c: &mut Criterion) {
    let mut group = c.benchmark_group("truth_table");

    for family in FAMILIES {
        for num_vars in SIZES {
            let expr = BoolExpr::parse(&family.expression(num_vars)).unwrap();
            let variables = expr.variables().unwrap();
            group.throughput(Throughput::Elements(1 << variables.len()));
            group.bench_with_input(
                BenchmarkId::new(family.as_str(), num_vars),
                &(expr, variables),
                |b, (expr, variables)| {
                    b.iter(|| black_box(TruthTable::build(expr, variables).unwrap()));
                },
            );
        }
    }

    group.finish();
}

/// Benchmark: Reduce minterm lists to prime implicants
fn bench_reduce(c: &mut Criterion) {
    let mut group = c.benchmark_group("prime_implicants");

    for family in FAMILIES {
        for num_vars in SIZES {
            let expr = BoolExpr::parse(&family.expression(num_vars)).unwrap();
            let variables = expr.variables().unwrap();
            let table = TruthTable::build(&expr, &variables).unwrap();
            let minterms = table.minterms().to_vec();

            group.throughput(Throughput::Elements(minterms.len() as u64));
            group.bench_with_input(
                BenchmarkId::new(family.as_str(), num_vars),
                &minterms,
                |b, data| {
                    b.iter(|| black_box(prime_implicants(variables.len(), black_box(data)).unwrap()));
                },
            );
        }
    }

    group.finish();
}

/// Benchmark: Complete pipeline (parse + table + reduce)
fn bench_full_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("full_pipeline");
    let config = AnalysisConfig::default();

    for family in FAMILIES {
        let input = family.expression(8);
        group.bench_with_input(BenchmarkId::new(family.as_str(), 8), &input, |b, data| {
            b.iter(|| black_box(analyze(black_box(data), &config).unwrap()));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_parse,
    bench_truth_table,
    bench_reduce,
    bench_full_pipeline
);
criterion_main!(benches);
