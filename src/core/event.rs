//! Game events.
//!
//! Everything observable that happens during a game is recorded as a
//! `GameEvent` in the state's event log. The engine itself never prints;
//! front ends render events through `Display`, which yields the textual
//! status line for the event.

use serde::{Deserialize, Serialize};

use super::action::TurnAction;
use super::error::TurnFault;
use super::player::{AppliedEffect, PlayerId};
use crate::rules::GameResult;

/// A recorded happening.
///
/// `player` is always the player the event is about; `name` is that
/// player's display name at the time of the event.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Setup finished and turns begin.
    GameStarted { deck_remaining: usize },
    /// A player's turn began.
    TurnStarted {
        player: PlayerId,
        name: String,
        turn: u32,
    },
    /// A move hit the opponent's active Pokémon.
    MoveUsed {
        player: PlayerId,
        name: String,
        move_name: String,
        damage: u32,
        target: String,
        remaining_hp: u32,
    },
    /// A trainer card took effect.
    TrainerUsed {
        player: PlayerId,
        name: String,
        trainer: String,
        effect: AppliedEffect,
    },
    /// An active Pokémon reached zero hit points and was discarded.
    Fainted {
        player: PlayerId,
        pokemon: String,
    },
    /// A Pokémon was moved from the hand to the active slot.
    Promoted {
        player: PlayerId,
        name: String,
        pokemon: String,
    },
    /// A player has no active Pokémon and none in hand.
    OutOfPokemon { player: PlayerId, name: String },
    /// An action was voided; the turn is still consumed.
    Rejected {
        player: PlayerId,
        name: String,
        action: TurnAction,
        fault: TurnFault,
    },
    /// The game reached a terminal state.
    GameOver { result: GameResult, winner: Option<String> },
}

impl GameEvent {
    /// The player this event concerns, if any.
    #[must_use]
    pub fn player(&self) -> Option<PlayerId> {
        match self {
            GameEvent::TurnStarted { player, .. }
            | GameEvent::MoveUsed { player, .. }
            | GameEvent::TrainerUsed { player, .. }
            | GameEvent::Fainted { player, .. }
            | GameEvent::Promoted { player, .. }
            | GameEvent::OutOfPokemon { player, .. }
            | GameEvent::Rejected { player, .. } => Some(*player),
            GameEvent::GameStarted { .. } | GameEvent::GameOver { .. } => None,
        }
    }
}

impl std::fmt::Display for GameEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameEvent::GameStarted { deck_remaining } => {
                write!(f, "Hands dealt; {} cards left in the deck.", deck_remaining)
            }
            GameEvent::TurnStarted { name, turn, .. } => {
                write!(f, "Turn {}: {}'s turn.", turn, name)
            }
            GameEvent::MoveUsed {
                name,
                move_name,
                damage,
                target,
                remaining_hp,
                ..
            } => write!(
                f,
                "{} uses {} dealing {} damage to {} ({} HP left).",
                name, move_name, damage, target, remaining_hp
            ),
            GameEvent::TrainerUsed {
                name,
                trainer,
                effect,
                ..
            } => match effect {
                AppliedEffect::Healed {
                    pokemon, amount, ..
                } => write!(
                    f,
                    "{} uses {}. {} heals for {} HP.",
                    name, trainer, pokemon, amount
                ),
                AppliedEffect::Drew { cards } => write!(
                    f,
                    "{} uses {}. {} has been drawn.",
                    name,
                    trainer,
                    cards.join(", ")
                ),
            },
            GameEvent::Fainted { pokemon, .. } => write!(f, "{} has fainted!", pokemon),
            GameEvent::Promoted { name, pokemon, .. } => {
                write!(f, "{} sends out {}.", name, pokemon)
            }
            GameEvent::OutOfPokemon { name, .. } => write!(f, "{} has no Pokémon left!", name),
            GameEvent::Rejected { name, fault, .. } => write!(f, "{}: {}.", name, fault),
            GameEvent::GameOver { winner, .. } => match winner {
                Some(winner) => write!(f, "Game Over! {} wins.", winner),
                None => write!(f, "Game Over! It's a draw."),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_used_line() {
        let event = GameEvent::MoveUsed {
            player: PlayerId::FIRST,
            name: "Ash".to_string(),
            move_name: "Ember".to_string(),
            damage: 25,
            target: "Squirtle".to_string(),
            remaining_hp: 25,
        };

        assert_eq!(
            event.to_string(),
            "Ash uses Ember dealing 25 damage to Squirtle (25 HP left)."
        );
        assert_eq!(event.player(), Some(PlayerId::FIRST));
    }

    #[test]
    fn test_rejected_line() {
        let event = GameEvent::Rejected {
            player: PlayerId::SECOND,
            name: "Misty".to_string(),
            action: TurnAction::Invalid,
            fault: TurnFault::InvalidAction,
        };

        assert_eq!(event.to_string(), "Misty: Invalid action selection.");
    }

    #[test]
    fn test_game_over_lines() {
        let won = GameEvent::GameOver {
            result: GameResult::Winner(PlayerId::FIRST),
            winner: Some("Ash".to_string()),
        };
        let draw = GameEvent::GameOver {
            result: GameResult::Draw,
            winner: None,
        };

        assert_eq!(won.to_string(), "Game Over! Ash wins.");
        assert_eq!(draw.to_string(), "Game Over! It's a draw.");
        assert_eq!(won.player(), None);
    }

    #[test]
    fn test_event_serialization() {
        let event = GameEvent::TrainerUsed {
            player: PlayerId::FIRST,
            name: "Ash".to_string(),
            trainer: "Draw Trainer 3".to_string(),
            effect: AppliedEffect::Drew {
                cards: vec!["Energy: Energy Card 9".to_string()],
            },
        };

        let json = serde_json::to_string(&event).unwrap();
        let deserialized: GameEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(event, deserialized);
    }
}
