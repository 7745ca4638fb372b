use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use std::hint::black_box;
use wordgame::{
    calculate_score, BackendConfig, InMemoryBackend, Leaderboard, ScoreInput, WordDraft, WordStore,
};

fn in_memory_board(size: usize) -> Leaderboard {
    let board = Leaderboard::with_backend(Box::new(InMemoryBackend::new())).unwrap();
    for i in 0..size {
        board.upsert(&format!("player{i}"), (i * 7 % 1000) as u64).unwrap();
    }
    board
}

/// Benchmark the pure score formula
fn bench_calculate_score(c: &mut Criterion) {
    let input = ScoreInput::new(2_000, 1, false, 5);
    c.bench_function("calculate_score", |b| {
        b.iter(|| calculate_score(black_box(&input)))
    });
}

/// Benchmark leaderboard upserts; each one re-sorts and re-serializes the board
fn bench_leaderboard_upsert(c: &mut Criterion) {
    let mut group = c.benchmark_group("leaderboard_upsert");

    for size in [10, 100, 1000] {
        group.throughput(Throughput::Elements(1));
        group.bench_function(format!("in_memory_{size}"), |b| {
            let board = in_memory_board(size);
            let mut score = 0u64;
            b.iter(|| {
                score += 1;
                board.upsert(black_box("climber"), score).unwrap();
            });
        });
    }

    group.bench_function("file_100", |b| {
        let dir = tempfile::tempdir().unwrap();
        let board = Leaderboard::open(&BackendConfig::file(dir.path().join("scores.json"))).unwrap();
        for i in 0..100u64 {
            board.upsert(&format!("player{i}"), i).unwrap();
        }
        let mut score = 0u64;
        b.iter(|| {
            score += 1;
            board.upsert(black_box("climber"), score).unwrap();
        });
    });

    group.finish();
}

/// Benchmark random selection over a seeded dictionary
fn bench_random_word(c: &mut Criterion) {
    let words = WordStore::with_backend(Box::new(InMemoryBackend::new())).unwrap();
    let drafts = (0..500u32)
        .map(|i| {
            let word: String = i
                .to_string()
                .bytes()
                .map(|d| (b'a' + (d - b'0')) as char)
                .collect();
            WordDraft::new(if i % 2 == 0 { "even" } else { "odd" }, format!("w{word}"), "hint")
        })
        .collect();
    words.seed_if_empty(drafts).unwrap();

    c.bench_function("random_by_category", |b| {
        b.iter(|| words.random_by_category(black_box("even")).unwrap())
    });
}

criterion_group!(
    benches,
    bench_calculate_score,
    bench_leaderboard_upsert,
    bench_random_word
);
criterion_main!(benches);
