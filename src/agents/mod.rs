//! Turn agents: who picks each player's action.
//!
//! - `Agent`: Trait the game loop calls once per turn
//! - `FirstMoveAgent`: Always uses move 0
//! - `RandomAgent`: Uniform over legal actions
//! - `ScriptedAgent`: Fixed action list, for tests and replays
//!
//! The console driver implements `Agent` over stdin.

pub mod policy;

pub use policy::{Agent, FirstMoveAgent, RandomAgent, ScriptedAgent};
