//! Parser benchmarks.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use sln_parser::parse_solution;

const MINIMAL_SLN: &str = "\
Microsoft Visual Studio Solution File, Format Version 12.00
# Visual Studio 2012
Global
\tGlobalSection(SolutionProperties) = preSolution
\t\tHideSolutionNode = FALSE
\tEndGlobalSection
EndGlobal
";

const MEDIUM_SLN: &str = include_str!("../../../tests/fixtures/example00.sln");

fn parse_minimal(c: &mut Criterion) {
    c.bench_function("parse_minimal", |b| {
        b.iter(|| parse_solution(black_box(MINIMAL_SLN)))
    });
}

fn parse_medium(c: &mut Criterion) {
    c.bench_function("parse_medium", |b| {
        b.iter(|| parse_solution(black_box(MEDIUM_SLN)))
    });
}

criterion_group!(benches, parse_minimal, parse_medium);
criterion_main!(benches);
