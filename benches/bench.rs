// Criterion benchmarks for Lume API

use criterion::{black_box, criterion_group, criterion_main, Criterion, BenchmarkId};
use lume_api::core::{CandidateRanker, compatibility_score};
use lume_api::models::{DirectoryEntry, Profile};

const INTERESTS: [&str; 12] = [
    "hiking", "chess", "art", "jazz", "tennis", "cooking",
    "travel", "films", "running", "yoga", "gaming", "poetry",
];

const CITIES: [&str; 4] = ["NY", "LA", "Berlin", "Oslo"];

fn create_profile(id: u64) -> Profile {
    let mut profile = Profile::empty(id);
    profile.interests = INTERESTS
        .iter()
        .enumerate()
        .filter(|(i, _)| (id as usize + i) % 3 == 0)
        .map(|(_, interest)| interest.to_string())
        .collect();
    profile.city = Some(CITIES[id as usize % CITIES.len()].to_string());
    profile
}

fn create_directory(count: u64) -> Vec<DirectoryEntry> {
    (1..=count)
        .map(|id| DirectoryEntry {
            display_name: format!("User {}", id),
            profile: create_profile(id),
        })
        .collect()
}

fn bench_compatibility_score(c: &mut Criterion) {
    let a = create_profile(1);
    let b = create_profile(2);

    c.bench_function("compatibility_score", |bench| {
        bench.iter(|| compatibility_score(black_box(&a), black_box(&b)));
    });
}

fn bench_ranking(c: &mut Criterion) {
    let ranker = CandidateRanker::default();

    let mut group = c.benchmark_group("ranking");

    for user_count in [10, 100, 1000, 10000].iter() {
        let directory = create_directory(*user_count);

        group.bench_with_input(
            BenchmarkId::new("rank", user_count),
            user_count,
            |b, _| {
                b.iter(|| {
                    ranker.rank(
                        black_box(1),
                        black_box(directory.clone()),
                        black_box(10),
                    )
                });
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_compatibility_score,
    bench_ranking
);

criterion_main!(benches);
