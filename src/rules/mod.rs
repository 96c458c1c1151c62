//! Turn resolution seam.
//!
//! - `RulesEngine`: legal actions, turn resolution, terminal check
//! - `GameResult`: winner or draw
//! - `TurnReport`: what a single turn did

pub mod engine;

pub use engine::{GameResult, RulesEngine, TurnReport};
