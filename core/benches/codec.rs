//! Codec benchmarks — percent-encoding and decoding.
//!
//! Measures: all-safe input (pass-through), escape-heavy input, multi-byte
//! input, and the decode path.

use rutem::{decode, encode};

fn main() {
    divan::main();
}

#[divan::bench]
fn encode_all_safe(bencher: divan::Bencher) {
    bencher.bench_local(|| encode("abcdefghijklmnopqrstuvwxyz0123456789-._"));
}

#[divan::bench]
fn encode_escape_heavy(bencher: divan::Bencher) {
    bencher.bench_local(|| encode("a b/c?d=e&f=g#h i j k l m n o p"));
}

#[divan::bench]
fn encode_multibyte(bencher: divan::Bencher) {
    bencher.bench_local(|| encode("héllo wörld ☕ 日本語のテキスト"));
}

#[divan::bench]
fn decode_escape_heavy(bencher: divan::Bencher) {
    let encoded = encode("a b/c?d=e&f=g#h i j k l m n o p");
    bencher.bench_local(|| decode(&encoded));
}

#[divan::bench]
fn decode_pass_through(bencher: divan::Bencher) {
    bencher.bench_local(|| decode("no-escapes-in-this-input-at-all"));
}
