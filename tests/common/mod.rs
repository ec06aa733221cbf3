//! Shared helpers for integration tests.

#![allow(dead_code)]

use std::sync::OnceLock;

use bluff_number::{ChannelId, Dealer, Match, MatchConfig, PlayerId, ScriptedDealer};
use tracing_subscriber::{fmt, EnvFilter};

static INITIALIZED: OnceLock<()> = OnceLock::new();

pub const A: PlayerId = PlayerId::new(1);
pub const B: PlayerId = PlayerId::new(2);
pub const C: PlayerId = PlayerId::new(3);

/// Install a test subscriber once.
///
/// Level comes from `TEST_LOG`, then `RUST_LOG`, then defaults to `warn`.
pub fn init_logging() {
    INITIALIZED.get_or_init(|| {
        let filter = std::env::var("TEST_LOG")
            .or_else(|_| std::env::var("RUST_LOG"))
            .map(EnvFilter::new)
            .unwrap_or_else(|_| EnvFilter::new("warn"));

        fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .without_time()
            .try_init()
            .ok();
    });
}

/// Reference-config lobby with A, B and C joined in that order.
pub fn full_lobby<D: Dealer>(dealer: D) -> Match<D> {
    init_logging();
    let mut game = Match::new(ChannelId::new(1), A, MatchConfig::default(), dealer);
    game.add_player(A, "A").unwrap();
    game.add_player(B, "B").unwrap();
    game.add_player(C, "C").unwrap();
    game
}

/// Started match replaying `hands` round by round.
pub fn scripted(hands: Vec<Vec<u32>>) -> Match<ScriptedDealer> {
    let mut game = full_lobby(ScriptedDealer::new(hands));
    game.start_game().unwrap();
    game
}

pub fn scores<D: Dealer>(game: &Match<D>) -> Vec<i32> {
    game.players().iter().map(|p| p.score).collect()
}
