use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::sync::Arc;
use syndicate_core::{AttributeResolver, MenuItem, Surface};
use syndicate_server::cache::{CacheConfig, CacheKey, MenuCache, TtlPolicy};
use syndicate_server::render::render_items;
use tokio::runtime::Runtime;

/// Crea N items de prueba repartidos en 5 categorias
fn create_test_items(count: usize) -> Vec<MenuItem> {
    (0..count)
        .map(|i| MenuItem {
            order_key: i as i64,
            food_id: i.to_string(),
            food_name: format!("Dish {i}"),
            category_id: (i % 5).to_string(),
            category_name: format!("Category {}", i % 5),
            vegetarian: i % 2 == 0,
            calories: Some(100.0 + i as f64),
            ..MenuItem::default()
        })
        .collect()
}

fn policy() -> TtlPolicy {
    TtlPolicy::from_secs(3600, 900)
}

/// Benchmark: Cache get (hit)
fn bench_cache_get_hit(c: &mut Criterion) {
    let rt = Runtime::new().unwrap();

    let cache = MenuCache::new(CacheConfig::default());
    let key = CacheKey::location("dining", "1");

    // Pre-populate cache
    rt.block_on(async {
        cache.put(key.clone(), Some(create_test_items(100)), &policy()).await;
    });

    c.bench_function("cache_get_hit", |b| {
        b.to_async(&rt).iter(|| async {
            let result = cache.get(&key).await;
            std::hint::black_box(result)
        });
    });
}

/// Benchmark: Cache get (miss)
fn bench_cache_get_miss(c: &mut Criterion) {
    let rt = Runtime::new().unwrap();
    let cache = MenuCache::new(CacheConfig::default());

    c.bench_function("cache_get_miss", |b| {
        b.to_async(&rt).iter(|| async {
            let key = CacheKey::location("dining", "missing");
            let result = cache.get(&key).await;
            std::hint::black_box(result)
        });
    });
}

/// Benchmark: Cache put con diferentes tamanos de payload
fn bench_cache_put_sizes(c: &mut Criterion) {
    let rt = Runtime::new().unwrap();
    let mut group = c.benchmark_group("cache_put_sizes");

    for size in [10, 100, 500].iter() {
        let cache = Arc::new(MenuCache::new(CacheConfig::default()));
        let items = Arc::new(create_test_items(*size));

        group.throughput(Throughput::Elements(1));
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _size| {
            let counter = Arc::new(std::sync::atomic::AtomicU64::new(0));
            b.to_async(&rt).iter(|| {
                let cache = Arc::clone(&cache);
                let items = Arc::clone(&items);
                let counter = Arc::clone(&counter);
                async move {
                    let count = counter.fetch_add(1, std::sync::atomic::Ordering::Relaxed);
                    let key = CacheKey::location("dining", count.to_string());
                    cache.put(key, Some((*items).clone()), &policy()).await;
                }
            });
        });
    }

    group.finish();
}

/// Benchmark: render por modo de salida
fn bench_render_modes(c: &mut Criterion) {
    let items = create_test_items(200);
    let today = chrono::Local::now().date_naive();
    let resolver = AttributeResolver::default();
    let mut group = c.benchmark_group("render_modes");

    for mode in ["list", "full", "headline", "cards", "json"] {
        let config = resolver
            .resolve([("output", mode)], &Surface::dining_feed())
            .unwrap();

        group.bench_with_input(BenchmarkId::from_parameter(mode), &config, |b, config| {
            b.iter(|| std::hint::black_box(render_items(&items, config, today)));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_cache_get_hit,
    bench_cache_get_miss,
    bench_cache_put_sizes,
    bench_render_modes,
);

criterion_main!(benches);
