//! Reverse-hangman solving engine
//!
//! Candidate pruning, letter selection and the game controller.

mod adapter;
mod candidates;
mod engine;
pub mod strategy;

pub use adapter::{Adapter, AdapterError, Presence};
pub use candidates::{CandidateSet, Constraint, PositionMode};
pub use engine::{
    Feedback, Game, GameConfig, GameError, LossReason, MAX_WRONG, Outcome, Status,
};
pub use strategy::{CoverageStrategy, FrequencyStrategy, Strategy, StrategyType};
