// Build and query benchmarks for the recommendation engine
use cinex_core::{Engine, Movie};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::prelude::*;

const GENRES: &[&str] = &[
    "Action", "Adventure", "Animation", "Comedy", "Crime", "Documentary", "Drama", "Family",
    "Fantasy", "Horror", "Romance", "Thriller",
];

const WORDS: &[&str] = &[
    "detective", "island", "haunted", "robot", "heist", "journey", "kingdom", "secret",
    "revenge", "summer", "winter", "city", "murder", "love", "war", "space", "dream",
    "monster", "family", "escape", "treasure", "storm", "legend", "shadow",
];

fn generate_movie(id: usize, rng: &mut impl Rng) -> Movie {
    let genre_count = rng.random_range(1..4);
    let genres: Vec<&str> = (0..genre_count)
        .map(|_| GENRES[rng.random_range(0..GENRES.len())])
        .collect();

    let overview: Vec<&str> = (0..rng.random_range(8..25))
        .map(|_| WORDS[rng.random_range(0..WORDS.len())])
        .collect();

    Movie::new(format!("Movie {}", id))
        .with_genres(genres.join(", "))
        .with_overview(overview.join(" "))
}

fn generate_corpus(size: usize) -> Vec<Movie> {
    let mut rng = rand::rng();
    (0..size).map(|id| generate_movie(id, &mut rng)).collect()
}

fn benchmark_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("build");
    group.sample_size(10);

    for size in [100, 500, 1000].iter() {
        let movies = generate_corpus(*size);
        group.bench_with_input(BenchmarkId::new("engine", size), size, |b, _| {
            b.iter(|| Engine::build(black_box(movies.clone())).unwrap());
        });
    }

    group.finish();
}

fn benchmark_recommend(c: &mut Criterion) {
    let mut group = c.benchmark_group("recommend");

    for size in [100, 1000].iter() {
        let engine = Engine::build(generate_corpus(*size)).unwrap();
        group.bench_with_input(BenchmarkId::new("top5", size), size, |b, &size| {
            let mut rng = rand::rng();
            b.iter(|| {
                let title = format!("Movie {}", rng.random_range(0..size));
                engine.recommend(black_box(&title))
            });
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_build, benchmark_recommend);
criterion_main!(benches);
