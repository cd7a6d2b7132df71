//! Tokenize benchmarks — the template-scanning hot path.
//!
//! Measures: literal-only templates (miss-heavy), expression-dense
//! templates, and eager materialization.

use regex::Regex;
use rutem::{tokenize, tokenize_all};

fn main() {
    divan::main();
}

// ═══════════════════════════════════════════════════════════════════════════════
// Test fixtures
// ═══════════════════════════════════════════════════════════════════════════════

/// The expression rule a template engine would inject.
fn expr_rule() -> Regex {
    Regex::new(r"\{([^}]+)\}").expect("expression rule compiles")
}

fn dense_template(n: usize) -> String {
    (0..n).map(|i| format!("/seg{i}/{{var{i}}}")).collect()
}

// ═══════════════════════════════════════════════════════════════════════════════
// Scenarios
// ═══════════════════════════════════════════════════════════════════════════════

#[divan::bench]
fn literal_only(bencher: divan::Bencher) {
    let rule = expr_rule();
    bencher.bench_local(|| tokenize(&rule, "/static/assets/css/site.min.css").count());
}

#[divan::bench]
fn single_expression(bencher: divan::Bencher) {
    let rule = expr_rule();
    bencher.bench_local(|| tokenize(&rule, "/users/{id}/avatar").count());
}

#[divan::bench(args = [4, 16, 64])]
fn dense_expressions(bencher: divan::Bencher, n: usize) {
    let rule = expr_rule();
    let template = dense_template(n);
    bencher.bench_local(|| tokenize(&rule, &template).count());
}

#[divan::bench]
fn eager_materialization(bencher: divan::Bencher) {
    let rule = expr_rule();
    let template = dense_template(16);
    bencher.bench_local(|| tokenize_all(&rule, &template).len());
}
