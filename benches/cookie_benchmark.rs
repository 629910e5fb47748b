// Copyright (c) 2026 shaneyale (shaneyale86@gmail.com)
// All rights reserved.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use cookie_manager::{Cookie, CookieManager, SameSite};

fn simple_header_parse_benchmark(c: &mut Criterion) {
    let header = "sid=abc123; theme=dark";

    c.bench_function("simple_header_parse", |b| {
        b.iter(|| {
            let _ = CookieManager::new(black_box(header));
        });
    });
}

fn encoded_header_parse_benchmark(c: &mut Criterion) {
    let header = "user%20name=Jos%C3%A9; cart=%5B1%2C2%2C3%5D; ; broken; =x; sid=abc";

    c.bench_function("encoded_header_parse", |b| {
        b.iter(|| {
            let _ = CookieManager::new(black_box(header));
        });
    });
}

fn header_parse_by_count_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("header_parse_by_count");

    for count in [1, 10, 50].iter() {
        let header = (0..*count)
            .map(|i| format!("cookie{}=value{}", i, i))
            .collect::<Vec<_>>()
            .join("; ");
        group.bench_with_input(BenchmarkId::from_parameter(count), &header, |b, header| {
            b.iter(|| {
                let _ = CookieManager::new(black_box(header));
            });
        });
    }

    group.finish();
}

fn serialize_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("serialize");

    let mut full = Cookie::new("session", "abc123");
    full.set_domain("example.com")
        .set_secure(true)
        .set_http_only(true)
        .set_same_site(SameSite::Lax)
        .forever();
    let mut encoded = Cookie::new("user name", "José; admin");
    encoded.set_raw(false);

    for (name, cookie) in [("plain", Cookie::new("k", "v")), ("full", full), ("encoded", encoded)] {
        group.bench_with_input(BenchmarkId::from_parameter(name), &cookie, |b, cookie| {
            b.iter(|| black_box(cookie).to_string());
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    simple_header_parse_benchmark,
    encoded_header_parse_benchmark,
    header_parse_by_count_benchmark,
    serialize_benchmark
);
criterion_main!(benches);
