//! Klondike solitaire rules engine.
//!
//! The `game` module owns the board state (tableau, foundations, stock,
//! waste) and move legality; the `engine` module owns a playing session on
//! top of it (reversible history, hints, auto-complete, win detection);
//! `commentary` turns move outcomes into table talk and never touches
//! engine internals.
//!
//! The engine is synchronous and single-owner: one [`GameSession`] value
//! per game, mutated only through its public operations.

pub mod commentary;
pub mod engine;
pub mod game;

pub use engine::hinting::{Advice, Hint};
pub use engine::session::{AutoCompleteRun, GameSession, GameStats};
pub use game::{
    Card, DealConfig, Difficulty, DrawMode, DrawResult, GameState, MoveEffects, MoveSource,
    MoveTarget, RejectReason, Suit,
};
