use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use nexus_wars::ai::{decide_draft, decide_move, Difficulty};
use nexus_wars::core::{Game, GameRng, Phase, PlayerId};
use nexus_wars::sim::{play_match, SelfPlayConfig};

/// Games paused at their first movement decision.
fn movement_states(n: u64) -> Vec<Game> {
    (0..n)
        .map(|seed| {
            let mut game = Game::with_seed(seed);
            while game.phase() == Phase::Draft {
                if let Some(player) = game.drafting_player() {
                    let _ = game.draft(player, 0);
                }
            }
            game
        })
        .collect()
}

fn bench_decide_draft(c: &mut Criterion) {
    let games: Vec<Game> = (0..64).map(Game::with_seed).collect();
    let mut g = c.benchmark_group("ai_draft");
    for difficulty in Difficulty::ALL {
        g.bench_with_input(BenchmarkId::new("decide_draft", difficulty), &games, |b, games| {
            let mut rng = GameRng::new(0);
            b.iter(|| {
                for game in games {
                    black_box(decide_draft(black_box(game), difficulty, &mut rng));
                }
            })
        });
    }
    g.finish();
}

fn bench_decide_move(c: &mut Criterion) {
    let games = movement_states(64);
    let mut g = c.benchmark_group("ai_move");
    for difficulty in Difficulty::ALL {
        g.bench_with_input(BenchmarkId::new("decide_move", difficulty), &games, |b, games| {
            let mut rng = GameRng::new(0);
            b.iter(|| {
                for game in games {
                    black_box(decide_move(black_box(game), difficulty, &mut rng));
                }
            })
        });
    }
    g.finish();
}

fn bench_play_match(c: &mut Criterion) {
    let mut g = c.benchmark_group("self_play");
    for difficulty in Difficulty::ALL {
        let config = SelfPlayConfig::default()
            .with_difficulty(PlayerId::A, difficulty)
            .with_difficulty(PlayerId::B, difficulty);
        g.bench_with_input(BenchmarkId::new("play_match", difficulty), &config, |b, config| {
            let mut seed = 0;
            b.iter(|| {
                seed += 1;
                black_box(play_match(config, seed))
            })
        });
    }
    g.finish();
}

criterion_group!(benches, bench_decide_draft, bench_decide_move, bench_play_match);
criterion_main!(benches);
