//! Game state.
//!
//! ## GameState
//!
//! Complete state of one session:
//! - The shared deck and the discard pile
//! - Both players (hand and active Pokémon)
//! - Phase and turn counter
//! - Action history and event log
//! - RNG
//!
//! Every card instance lives in exactly one of: the deck, a hand, an
//! active slot, or the discard pile. `card_ids` walks all of them.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::action::ActionRecord;
use super::entity::EntityId;
use super::event::GameEvent;
use super::player::{Player, PlayerId, PlayerMap};
use super::rng::GameRng;
use crate::cards::Card;
use crate::rules::GameResult;
use crate::zones::Deck;

/// Where the session is in its lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Deck built, hands not yet dealt.
    Setup,
    /// Waiting for this player's action.
    Turn(PlayerId),
    /// Terminal; no further turns.
    GameOver(GameResult),
}

/// Full game state.
///
/// Uses `im` persistent vectors for the history and event log so cloning
/// a state (e.g. to inspect a what-if) stays cheap.
#[derive(Clone, Debug)]
pub struct GameState {
    /// Shared draw deck.
    pub deck: Deck,

    /// Both players.
    pub players: PlayerMap<Player>,

    /// Session RNG.
    pub rng: GameRng,

    /// Spent trainers and fainted Pokémon.
    discard: Vec<Card>,

    phase: Phase,

    /// Turn number (starts at 1 once turns begin).
    turn_number: u32,

    /// Applied and rejected actions.
    history: Vector<ActionRecord>,

    /// Everything that happened, in order.
    log: Vector<GameEvent>,
}

impl GameState {
    /// Create a state in the `Setup` phase with empty hands.
    #[must_use]
    pub fn new(
        deck: Deck,
        first_name: impl Into<String>,
        second_name: impl Into<String>,
        rng: GameRng,
    ) -> Self {
        Self {
            deck,
            players: PlayerMap::from_array([Player::new(first_name), Player::new(second_name)]),
            rng,
            discard: Vec::new(),
            phase: Phase::Setup,
            turn_number: 0,
            history: Vector::new(),
            log: Vector::new(),
        }
    }

    // === Phase ===

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Start turn alternation with `first` to act.
    pub fn begin(&mut self, first: PlayerId) {
        self.turn_number = 1;
        self.phase = Phase::Turn(first);
    }

    /// The player whose turn it is, or `None` outside of turns.
    #[must_use]
    pub fn current_player(&self) -> Option<PlayerId> {
        match self.phase {
            Phase::Turn(player) => Some(player),
            Phase::Setup | Phase::GameOver(_) => None,
        }
    }

    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        match self.phase {
            Phase::GameOver(result) => Some(result),
            Phase::Setup | Phase::Turn(_) => None,
        }
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.result().is_some()
    }

    #[must_use]
    pub fn turn_number(&self) -> u32 {
        self.turn_number
    }

    /// Hand the turn to the next player.
    pub fn advance_turn(&mut self, next: PlayerId) {
        self.turn_number += 1;
        self.phase = Phase::Turn(next);
    }

    /// Enter the terminal phase.
    pub fn finish(&mut self, result: GameResult) {
        self.phase = Phase::GameOver(result);
    }

    // === Players ===

    #[must_use]
    pub fn player(&self, player: PlayerId) -> &Player {
        &self.players[player]
    }

    pub fn player_mut(&mut self, player: PlayerId) -> &mut Player {
        &mut self.players[player]
    }

    // === Discard ===

    pub fn discard(&mut self, card: Card) {
        self.discard.push(card);
    }

    #[must_use]
    pub fn discard_pile(&self) -> &[Card] {
        &self.discard
    }

    // === History ===

    /// Record an action in history.
    pub fn record_action(&mut self, record: ActionRecord) {
        self.history.push_back(record);
    }

    #[must_use]
    pub fn history(&self) -> &Vector<ActionRecord> {
        &self.history
    }

    /// Append an event to the log.
    pub fn push_event(&mut self, event: GameEvent) {
        self.log.push_back(event);
    }

    #[must_use]
    pub fn log(&self) -> &Vector<GameEvent> {
        &self.log
    }

    // === Conservation ===

    /// IDs of every card in the session, wherever it is.
    pub fn card_ids(&self) -> impl Iterator<Item = EntityId> + '_ {
        self.deck
            .cards()
            .iter()
            .map(Card::id)
            .chain(self.players.iter().flat_map(|(_, p)| p.card_ids()))
            .chain(self.discard.iter().map(Card::id))
    }
}
