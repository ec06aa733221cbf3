//! Secret dealing.
//!
//! Dealers must be deterministic given their own state, so that a
//! snapshot restores the exact future deals.

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use crate::core::GameRng;

/// Source of secret values.
///
/// ## Implementation Notes
///
/// - Return exactly `seats` values
/// - Every value must lie inside `range`
pub trait Dealer {
    /// Deal one secret per seat, in seat order.
    fn deal(&mut self, seats: usize, range: RangeInclusive<u32>) -> Vec<u32>;
}

/// Independent uniform draws from a seeded [`GameRng`].
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SeededDealer {
    rng: GameRng,
}

impl SeededDealer {
    /// Create a dealer from a seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: GameRng::new(seed),
        }
    }

    /// Create a dealer from an existing stream.
    #[must_use]
    pub fn from_rng(rng: GameRng) -> Self {
        Self { rng }
    }

    /// The underlying stream.
    #[must_use]
    pub fn rng(&self) -> &GameRng {
        &self.rng
    }
}

impl Dealer for SeededDealer {
    fn deal(&mut self, seats: usize, range: RangeInclusive<u32>) -> Vec<u32> {
        (0..seats)
            .map(|_| self.rng.gen_range_inclusive(range.clone()))
            .collect()
    }
}

/// Replays fixed hands in order, wrapping around when exhausted.
///
/// ```
/// use bluff_number::rules::{Dealer, ScriptedDealer};
///
/// let mut dealer = ScriptedDealer::new(vec![vec![7, 3, 5], vec![1, 2, 3]]);
/// assert_eq!(dealer.deal(3, 1..=10), vec![7, 3, 5]);
/// assert_eq!(dealer.deal(3, 1..=10), vec![1, 2, 3]);
/// assert_eq!(dealer.deal(3, 1..=10), vec![7, 3, 5]);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ScriptedDealer {
    hands: Vec<Vec<u32>>,
    next: usize,
}

impl ScriptedDealer {
    /// Create a dealer that replays `hands`.
    pub fn new(hands: Vec<Vec<u32>>) -> Self {
        assert!(!hands.is_empty(), "Scripted dealer needs at least 1 hand");
        Self { hands, next: 0 }
    }

    /// Deal the same hand every round.
    pub fn repeating(hand: Vec<u32>) -> Self {
        Self::new(vec![hand])
    }
}

impl Dealer for ScriptedDealer {
    fn deal(&mut self, seats: usize, range: RangeInclusive<u32>) -> Vec<u32> {
        let hand = &self.hands[self.next % self.hands.len()];
        self.next += 1;
        assert_eq!(hand.len(), seats, "Scripted hand has the wrong number of seats");
        assert!(
            hand.iter().all(|v| range.contains(v)),
            "Scripted hand {:?} falls outside {:?}",
            hand,
            range
        );
        hand.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_dealer_is_deterministic() {
        let mut a = SeededDealer::new(11);
        let mut b = SeededDealer::new(11);
        for _ in 0..20 {
            assert_eq!(a.deal(3, 1..=10), b.deal(3, 1..=10));
        }
    }

    #[test]
    fn test_seeded_dealer_respects_range() {
        let mut dealer = SeededDealer::new(5);
        for _ in 0..200 {
            let hand = dealer.deal(4, 1..=10);
            assert_eq!(hand.len(), 4);
            assert!(hand.iter().all(|v| (1..=10).contains(v)));
        }
    }

    #[test]
    fn test_scripted_dealer_wraps() {
        let mut dealer = ScriptedDealer::repeating(vec![2, 2, 2]);
        assert_eq!(dealer.deal(3, 1..=10), vec![2, 2, 2]);
        assert_eq!(dealer.deal(3, 1..=10), vec![2, 2, 2]);
    }

    #[test]
    #[should_panic(expected = "wrong number of seats")]
    fn test_scripted_dealer_seat_mismatch() {
        let mut dealer = ScriptedDealer::repeating(vec![1, 2]);
        dealer.deal(3, 1..=10);
    }

    #[test]
    #[should_panic(expected = "falls outside")]
    fn test_scripted_dealer_out_of_range() {
        let mut dealer = ScriptedDealer::repeating(vec![1, 2, 11]);
        dealer.deal(3, 1..=10);
    }
}
