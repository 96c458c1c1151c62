//! Pokémon cards, their moves, and the four built-in species.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::entity::EntityId;

/// A named damage value a Pokémon can use on its turn.
///
/// Immutable once created.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    name: String,
    damage: u32,
}

impl Move {
    #[must_use]
    pub fn new(name: impl Into<String>, damage: u32) -> Self {
        Self {
            name: name.into(),
            damage,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn damage(&self) -> u32 {
        self.damage
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} (Damage: {})", self.name, self.damage)
    }
}

/// Move list of a Pokémon. Every preset has exactly two moves, so
/// SmallVec keeps them inline.
pub type MoveList = SmallVec<[Move; 2]>;

/// A Pokémon card instance.
///
/// Hit points are mutable: damage clamps at zero, healing is unbounded.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PokemonCard {
    pub id: EntityId,
    pub name: String,
    hit_points: u32,
    moves: MoveList,
}

impl PokemonCard {
    #[must_use]
    pub fn new(
        id: EntityId,
        name: impl Into<String>,
        hit_points: u32,
        moves: impl IntoIterator<Item = Move>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            hit_points,
            moves: moves.into_iter().collect(),
        }
    }

    #[must_use]
    pub fn hit_points(&self) -> u32 {
        self.hit_points
    }

    #[must_use]
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    #[must_use]
    pub fn get_move(&self, index: usize) -> Option<&Move> {
        self.moves.get(index)
    }

    /// True once hit points have reached zero.
    #[must_use]
    pub fn is_fainted(&self) -> bool {
        self.hit_points == 0
    }

    /// Apply damage, clamping hit points at zero.
    pub fn take_damage(&mut self, damage: u32) {
        self.hit_points = self.hit_points.saturating_sub(damage);
    }

    /// Restore hit points. There is no maximum.
    pub fn heal(&mut self, amount: u32) {
        self.hit_points = self.hit_points.saturating_add(amount);
    }
}

impl std::fmt::Display for PokemonCard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} (HP: {})", self.name, self.hit_points)
    }
}

/// The fixed-stat Pokémon presets a deck is filled from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Species {
    Bulbasaur,
    Charmander,
    Squirtle,
    Pikachu,
}

impl Species {
    /// All species, in the order used for uniform random picks.
    pub const ALL: [Species; 4] = [
        Species::Bulbasaur,
        Species::Squirtle,
        Species::Charmander,
        Species::Pikachu,
    ];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Species::Bulbasaur => "Bulbasaur",
            Species::Charmander => "Charmander",
            Species::Squirtle => "Squirtle",
            Species::Pikachu => "Pikachu",
        }
    }

    #[must_use]
    pub const fn base_hit_points(self) -> u32 {
        match self {
            Species::Pikachu => 60,
            Species::Bulbasaur | Species::Charmander | Species::Squirtle => 50,
        }
    }

    /// (name, damage) of both moves.
    #[must_use]
    pub const fn move_table(self) -> [(&'static str, u32); 2] {
        match self {
            Species::Bulbasaur => [("Vine Whip", 20), ("Tackle", 10)],
            Species::Charmander => [("Ember", 25), ("Scratch", 10)],
            Species::Squirtle => [("Water Gun", 20), ("Bubble", 10)],
            Species::Pikachu => [("Thunder Shock", 20), ("Quick Attack", 10)],
        }
    }

    /// Create a fresh card of this species.
    #[must_use]
    pub fn card(self, id: EntityId) -> PokemonCard {
        PokemonCard::new(
            id,
            self.name(),
            self.base_hit_points(),
            self.move_table()
                .into_iter()
                .map(|(name, damage)| Move::new(name, damage)),
        )
    }
}

impl std::fmt::Display for Species {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
