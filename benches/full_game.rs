//! Full-game throughput.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use pokemon_tcg::games::pokemon::{opening_hand_rate, PokemonGameBuilder};
use pokemon_tcg::{FirstMoveAgent, GameConfig, GameRng, RandomAgent};

fn bench_first_move_game(c: &mut Criterion) {
    c.bench_function("first_move_standard_deck", |b| {
        b.iter(|| {
            let (mut game, mut state) = PokemonGameBuilder::new()
                .standard_deck()
                .build(black_box(42))
                .unwrap();
            game.run(&mut state, &mut FirstMoveAgent, &mut FirstMoveAgent)
        })
    });
}

fn bench_random_game(c: &mut Criterion) {
    let mut seed = 0u64;
    c.bench_function("random_agents_filled_deck", |b| {
        b.iter(|| {
            seed += 1;
            let (mut game, mut state) = PokemonGameBuilder::new()
                .pokemon_count(15)
                .max_turns(1_000)
                .build(seed)
                .unwrap();
            game.run(&mut state, &mut RandomAgent::new(seed), &mut RandomAgent::new(!seed))
        })
    });
}

fn bench_opening_hand(c: &mut Criterion) {
    let config = GameConfig::default();
    let mut rng = GameRng::new(7);
    c.bench_function("opening_hand_rate_100_runs", |b| {
        b.iter(|| opening_hand_rate(100, black_box(10), &config, &mut rng).unwrap())
    });
}

criterion_group!(benches, bench_first_move_game, bench_random_game, bench_opening_hand);
criterion_main!(benches);
