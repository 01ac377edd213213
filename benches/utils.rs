//! 工具函数性能基准测试

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use localshort::storage::{ShortenedUrl, deserialize_urls, serialize_urls};
use localshort::utils::url_validator::{normalize_url, validate_url};
use localshort::utils::{generate_short_id, is_valid_short_id};

// ============== generate_short_id 基准测试 ==============

fn bench_generate_short_id(c: &mut Criterion) {
    let mut group = c.benchmark_group("utils/generate_short_id");

    for length in [6, 8, 12, 20] {
        group.bench_with_input(BenchmarkId::new("length", length), &length, |b, &length| {
            b.iter(|| {
                let id = generate_short_id(length);
                assert!(is_valid_short_id(&id, length));
            });
        });
    }

    group.finish();
}

// ============== normalize + validate 基准测试 ==============

fn bench_normalize_and_validate(c: &mut Criterion) {
    let mut group = c.benchmark_group("utils/normalize_and_validate");

    group.bench_function("bare_domain", |b| {
        b.iter(|| {
            let url = normalize_url("example.com/path?query=1").unwrap();
            assert!(validate_url(&url).is_ok());
        });
    });

    group.bench_function("with_scheme", |b| {
        b.iter(|| {
            let url = normalize_url("http://localhost:8080/api/v1").unwrap();
            assert!(validate_url(&url).is_ok());
        });
    });

    group.bench_function("invalid", |b| {
        b.iter(|| {
            let url = normalize_url("not a url").unwrap();
            assert!(validate_url(&url).is_err());
        });
    });

    let long_url = format!("example.com/{}", "a".repeat(1000));
    group.bench_function("long_url", |b| {
        b.iter(|| {
            let url = normalize_url(&long_url).unwrap();
            assert!(validate_url(&url).is_ok());
        });
    });

    group.finish();
}

// ============== 列表序列化基准测试 ==============

fn bench_list_round_trip(c: &mut Criterion) {
    let mut group = c.benchmark_group("storage/list_round_trip");

    for size in [10, 100, 1000] {
        let urls: Vec<ShortenedUrl> = (0..size)
            .map(|i| {
                let id = generate_short_id(6);
                ShortenedUrl {
                    short_url: format!("http://localhost:3000/{}", id),
                    original_url: format!("https://example.com/page/{}", i),
                    id,
                    created_at: chrono::Utc::now(),
                }
            })
            .collect();

        group.bench_with_input(BenchmarkId::new("records", size), &urls, |b, urls| {
            b.iter(|| {
                let raw = serialize_urls(urls).unwrap();
                let restored = deserialize_urls(&raw).unwrap();
                assert_eq!(restored.len(), urls.len());
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_generate_short_id,
    bench_normalize_and_validate,
    bench_list_round_trip,
);
criterion_main!(benches);
