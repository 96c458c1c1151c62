//! Opening-hand Monte Carlo.
//!
//! Estimates how often a freshly filled deck deals an opening hand with at
//! least one Pokémon, for a given number of Pokémon in the deck.

use serde::{Deserialize, Serialize};

use crate::core::{DeckError, GameConfig, GameRng, Player};
use crate::zones::Deck;

/// One row of an opening-hand sweep.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SweepPoint {
    pub pokemon_count: usize,
    /// Percentage (0-100) of runs whose opening hand held a Pokémon.
    pub percent: f64,
}

/// Percentage of `runs` opening hands holding at least one Pokémon when
/// the deck is filled with `pokemon_count` Pokémon.
///
/// Each run fills a fresh deck from `config` and deals `hand_size` random
/// draws. Zero runs yield `0.0`.
pub fn opening_hand_rate(
    runs: usize,
    pokemon_count: usize,
    config: &GameConfig,
    rng: &mut GameRng,
) -> Result<f64, DeckError> {
    if runs == 0 {
        return Ok(0.0);
    }

    let config = config.clone().with_pokemon_count(pokemon_count);
    let mut hits = 0usize;

    for _ in 0..runs {
        let mut deck = Deck::new();
        deck.fill(&config, rng)?;

        let mut hand = Player::new("Simulation");
        for _ in 0..config.hand_size {
            match deck.draw_random(rng) {
                Some(card) => hand.draw_card(card),
                None => break,
            }
        }

        if hand.has_pokemon_in_hand() {
            hits += 1;
        }
    }

    Ok(hits as f64 / runs as f64 * 100.0)
}

/// `opening_hand_rate` for every Pokémon count from 1 to `deck_size`.
pub fn opening_hand_sweep(
    runs: usize,
    config: &GameConfig,
    rng: &mut GameRng,
) -> Result<Vec<SweepPoint>, DeckError> {
    (1..=config.deck_size)
        .map(|pokemon_count| {
            opening_hand_rate(runs, pokemon_count, config, rng).map(|percent| SweepPoint {
                pokemon_count,
                percent,
            })
        })
        .collect()
}
