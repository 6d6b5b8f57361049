use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use recomendar::prelude::*;

const EMBEDDING_DIM: usize = 32;

fn generate_store(n_users: u64, n_items: u64, ratings_per_user: usize, rng: &mut StdRng) -> RatingStore {
    let mut store = RatingStore::new();
    for user_id in 1..=n_users {
        for _ in 0..ratings_per_user {
            let item_id = rng.gen_range(1..=n_items);
            let rating = rng.gen_range(1..=5) as f32;
            store.insert(Rating::new(user_id, item_id, rating));
        }
    }
    store
}

fn generate_catalog(n_items: u64, rng: &mut StdRng) -> ItemCatalog {
    ItemCatalog::from_items((1..=n_items).map(|item_id| {
        let embedding: Vec<f32> = (0..EMBEDDING_DIM).map(|_| rng.gen_range(-1.0..1.0)).collect();
        Item::new(
            item_id,
            format!("item_{item_id}"),
            "synthetic description",
            Vector::from_vec(embedding),
        )
    }))
    .expect("uniform dims")
}

fn bench_recommend(c: &mut Criterion) {
    let mut group = c.benchmark_group("hybrid_recommend");
    group.sample_size(30);

    for n_items in [50u64, 200, 500] {
        let mut rng = StdRng::seed_from_u64(42);
        let store = generate_store(100, n_items, 20, &mut rng);
        let catalog = generate_catalog(n_items, &mut rng);
        let recommender = HybridRecommender::new().with_top_n(10);

        group.bench_with_input(BenchmarkId::from_parameter(n_items), &n_items, |b, _| {
            b.iter(|| {
                recommender
                    .recommend(black_box(1), black_box(&store), black_box(&catalog))
                    .expect("user 1 exists")
            });
        });
    }

    group.finish();
}

fn bench_explain(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(7);
    let store = generate_store(100, 200, 20, &mut rng);
    let catalog = generate_catalog(200, &mut rng);
    let recommender = HybridRecommender::new();

    // Explain whichever item tops the ranking for user 1.
    let top = recommender
        .recommend(1, &store, &catalog)
        .expect("user 1 exists")
        .first()
        .copied()
        .unwrap_or(1);

    c.bench_function("explain_recommendation", |b| {
        b.iter(|| {
            recommender
                .explain(black_box(1), black_box(top), &store, &catalog)
                .expect("user 1 exists")
        });
    });
}

criterion_group!(benches, bench_recommend, bench_explain);
criterion_main!(benches);
