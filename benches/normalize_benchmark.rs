use criterion::{black_box, criterion_group, criterion_main, Criterion};
use gamefinder_engine::normalize;

const CLEAN: &str = r#"{"analysis":{"understoodMood":"cozy","recommendedStyle":"sims","keyFactors":["a","b","c"],"reasoning":"r"},"games":[{"name":"Stardew Valley","genre":"Simulation","description":"farm","moodMatch":0.9,"playtime":"endless","vibe":"cozy","whyPerfect":"comfort","platforms":["PC"]}]}"#;

const FENCED: &str = "Sure! Here are your games:\n```json\n{\"analysis\":{},\"games\":[{\"name\":\"Hades\",\"genre\":\"Roguelike\"}]}\n```\nEnjoy!";

const SLOPPY: &str =
    "{analysis: {understoodMood: 'cozy'}, games: [{name: 'Unpacking', genre: 'Puzzle',},]}";

const GARBAGE: &str = "I'm sorry, I cannot produce recommendations right now.";

fn bench_normalize(c: &mut Criterion) {
    let mut group = c.benchmark_group("normalize");

    group.bench_function("clean_json", |b| {
        b.iter(|| normalize(black_box(CLEAN), black_box("cozy evening")))
    });

    group.bench_function("fenced_with_prose", |b| {
        b.iter(|| normalize(black_box(FENCED), black_box("roguelike")))
    });

    group.bench_function("sloppy_needs_repair", |b| {
        b.iter(|| normalize(black_box(SLOPPY), black_box("puzzle")))
    });

    group.bench_function("garbage_fallback", |b| {
        b.iter(|| normalize(black_box(GARBAGE), black_box("something to relax")))
    });

    group.finish();
}

criterion_group!(benches, bench_normalize);
criterion_main!(benches);
