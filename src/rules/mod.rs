//! Dealing rules.
//!
//! The match engine asks a `Dealer` for one secret per seat at the start of
//! every round. Swapping the dealer is how tests and replays pin secrets
//! without touching the engine.

pub mod dealer;

pub use dealer::{Dealer, ScriptedDealer, SeededDealer};
