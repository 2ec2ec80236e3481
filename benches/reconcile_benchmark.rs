use async_trait::async_trait;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tokio::runtime::Runtime;

use gamefinder_engine::{
    Currency, PriceReconciler, Result, SteamPrice, SteamPriceLookup, Store,
};

struct FixedLookup(Option<SteamPrice>);

#[async_trait]
impl SteamPriceLookup for FixedLookup {
    async fn lookup(&self, _game_name: &str) -> Result<Option<SteamPrice>> {
        Ok(self.0)
    }
}

fn bench_reconcile(c: &mut Criterion) {
    let rt = Runtime::new().unwrap();
    let reconciler = PriceReconciler::new();

    let resolved = FixedLookup(Some(SteamPrice {
        final_price: 19.99,
        initial_price: 24.99,
        discount_percent: 20,
    }));
    let unresolved = FixedLookup(None);

    let mut group = c.benchmark_group("reconcile");

    group.bench_function("single_store_resolved", |b| {
        b.to_async(&rt).iter(|| {
            reconciler.quote(
                black_box("Hades"),
                Store::Epic,
                Currency::USD,
                &resolved,
            )
        })
    });

    group.bench_function("quote_all_resolved", |b| {
        b.to_async(&rt)
            .iter(|| reconciler.quote_all(black_box("Hades"), Currency::EUR, &resolved))
    });

    group.bench_function("quote_all_estimated", |b| {
        b.to_async(&rt).iter(|| {
            reconciler.quote_all(
                black_box("The Witcher 3: Wild Hunt"),
                Currency::UAH,
                &unresolved,
            )
        })
    });

    group.finish();
}

criterion_group!(benches, bench_reconcile);
criterion_main!(benches);
