// ============================================================================
// Calculator Benchmarks
// ============================================================================
//
// Benchmark Categories:
// 1. Validation - The numeric guard alone
// 2. Fixed Arity - Every two-argument operation through `evaluate`
// 3. Variadic - average/min/max over growing argument lists
// 4. Overflow - Promotion path vs strict failure
// ============================================================================

use calculator::numeric::validate_numbers;
use calculator::prelude::*;
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;

// ============================================================================
// Validation Benchmarks
// ============================================================================

fn benchmark_validation(c: &mut Criterion) {
    let mut group = c.benchmark_group("validate_numbers");

    for len in [2usize, 16, 256].iter() {
        let args: Vec<Value> = (0..*len as i64)
            .map(|i| if i % 2 == 0 { Value::Int(i) } else { Value::Float(i as f64) })
            .collect();

        group.bench_with_input(BenchmarkId::from_parameter(len), &args, |b, args| {
            b.iter(|| black_box(validate_numbers(black_box(args))))
        });
    }

    group.finish();
}

// ============================================================================
// Fixed Arity Benchmarks
// ============================================================================

fn benchmark_binary_operations(c: &mut Criterion) {
    let mut group = c.benchmark_group("binary_operations");
    let calc = Calculator::new();
    let int_args = [Value::Int(-7), Value::Int(3)];
    let float_args = [Value::Float(-7.5), Value::Float(3.25)];

    for op in Operation::ALL
        .into_iter()
        .filter(|op| op.arity() == Arity::Exact(2))
    {
        group.bench_with_input(BenchmarkId::new("int", op), &int_args, |b, args| {
            b.iter(|| black_box(calc.evaluate(op, black_box(args))))
        });
        group.bench_with_input(BenchmarkId::new("float", op), &float_args, |b, args| {
            b.iter(|| black_box(calc.evaluate(op, black_box(args))))
        });
    }

    group.finish();
}

// ============================================================================
// Variadic Benchmarks
// ============================================================================

fn benchmark_variadic_operations(c: &mut Criterion) {
    let mut group = c.benchmark_group("variadic_operations");
    let calc = Calculator::new();

    for len in [4usize, 64, 1024].iter() {
        let args: Vec<Value> = (0..*len as i64).map(|i| Value::Int(i * 31 % 97)).collect();

        for op in [Operation::Average, Operation::MinOfList, Operation::MaxOfList] {
            group.bench_with_input(BenchmarkId::new(op.name(), len), &args, |b, args| {
                b.iter(|| black_box(calc.evaluate(op, black_box(args))))
            });
        }
    }

    group.finish();
}

// ============================================================================
// Overflow Benchmarks
// ============================================================================

fn benchmark_overflow_policy(c: &mut Criterion) {
    let mut group = c.benchmark_group("overflow_policy");
    let args = [Value::Int(i64::MAX), Value::Int(2)];

    let lenient = Calculator::new();
    group.bench_function("promote", |b| {
        b.iter(|| black_box(lenient.evaluate(Operation::Multiply, black_box(&args))))
    });

    let strict = CalculatorBuilder::new().fail_on_overflow().build().unwrap();
    group.bench_function("error", |b| {
        b.iter(|| black_box(strict.evaluate(Operation::Multiply, black_box(&args))))
    });

    group.finish();
}

criterion_group!(
    benches,
    benchmark_validation,
    benchmark_binary_operations,
    benchmark_variadic_operations,
    benchmark_overflow_policy,
);
criterion_main!(benches);
