use crate::cards::{Card, Rank, Suit};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::collections::HashSet;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DeckError {
    #[error("expected 52 cards, got {0}")]
    WrongCount(usize),
    #[error("duplicate card: {0}")]
    Duplicate(Card),
}

/// A standard 52-card deck, used only to produce the initial deal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// All 52 cards in a fixed suit-major order.
    ///
    /// ```
    /// use solitaire_rs::deck::Deck;
    ///
    /// let deck = Deck::standard();
    /// assert_eq!(deck.len(), 52);
    /// ```
    pub fn standard() -> Self {
        let mut cards = Vec::with_capacity(52);
        for &suit in &Suit::ALL {
            for &rank in &Rank::ALL {
                cards.push(Card::new(rank, suit));
            }
        }
        Self { cards }
    }

    /// A full deck already shuffled from the given seed.
    pub fn shuffled(seed: u64) -> Self {
        let mut deck = Self::standard();
        deck.shuffle_seeded(seed);
        deck
    }

    /// Build a deck from an explicit permutation, e.g. a layout imported
    /// from another program or a stacked deal for a test.
    ///
    /// The last card in `cards` is the top of the deck and is drawn
    /// first. The permutation must contain each of the 52 cards exactly
    /// once.
    pub fn try_from_cards(cards: Vec<Card>) -> Result<Self, DeckError> {
        if cards.len() != 52 {
            return Err(DeckError::WrongCount(cards.len()));
        }
        let mut seen = HashSet::with_capacity(52);
        for &card in &cards {
            if !seen.insert(card) {
                return Err(DeckError::Duplicate(card));
            }
        }
        Ok(Self { cards })
    }

    /// Consume the deck, yielding the undrawn cards bottom-to-top.
    pub(crate) fn into_cards(self) -> Vec<Card> {
        self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Shuffle using a seeded RNG for reproducibility.
    pub fn shuffle_seeded(&mut self, seed: u64) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        self.cards.shuffle(&mut rng);
    }

    /// Shuffle using the provided RNG implementing Rng.
    pub fn shuffle_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Draw one card from the top of the deck.
    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Draw `n` cards from the top of the deck.
    pub fn draw_n(&mut self, n: usize) -> Vec<Card> {
        (0..n).filter_map(|_| self.draw()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn standard_deck_has_52_distinct_cards() {
        let d = Deck::standard();
        assert_eq!(d.len(), 52);
        let set: HashSet<Card> = d.cards.iter().copied().collect();
        assert_eq!(set.len(), 52);
    }

    #[test]
    fn seeded_shuffle_is_reproducible() {
        let d1 = Deck::shuffled(42);
        let d2 = Deck::shuffled(42);
        assert_eq!(d1, d2);
    }

    #[test]
    fn different_seeds_permute_differently() {
        // Not guaranteed in principle, but with ChaCha8 and 52! orderings
        // two fixed seeds colliding would indicate a real bug.
        assert_ne!(Deck::shuffled(1), Deck::shuffled(2));
    }

    #[test]
    fn draw_reduces_length_and_returns_cards() {
        let mut d = Deck::shuffled(7);
        let c1 = d.draw().unwrap();
        let c2 = d.draw().unwrap();
        assert_ne!(c1, c2);
        assert_eq!(d.len(), 50);
        let pile = d.draw_n(7);
        assert_eq!(pile.len(), 7);
        assert_eq!(d.len(), 43);
    }

    #[test]
    fn draw_n_stops_at_empty() {
        let mut d = Deck::shuffled(7);
        let all = d.draw_n(60);
        assert_eq!(all.len(), 52);
        assert!(d.is_empty());
        assert!(d.draw().is_none());
    }

    #[test]
    fn try_from_cards_validates_the_permutation() {
        let full = Deck::standard().into_cards();
        assert!(Deck::try_from_cards(full.clone()).is_ok());

        let short = full[..51].to_vec();
        assert_eq!(Deck::try_from_cards(short), Err(DeckError::WrongCount(51)));

        let mut dup = full.clone();
        dup[51] = dup[0];
        assert_eq!(Deck::try_from_cards(dup), Err(DeckError::Duplicate(full[0])));
    }

    #[test]
    fn try_from_cards_draws_from_the_back() {
        let full = Deck::standard().into_cards();
        let top = full[51];
        let mut d = Deck::try_from_cards(full).unwrap();
        assert_eq!(d.draw(), Some(top));
    }
}
