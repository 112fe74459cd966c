//! The ordered card container.
//!
//! `Deck` is a double-ended sequence: index 0 is the top (next card drawn),
//! the last index is the bottom (where cards are normally added).
//!
//! Backed by `im::Vector`, so pushes and pops at either end are amortized
//! O(1), drawing `k` cards is a split rather than a scan, and cloning a deck
//! is O(1).
//!
//! ## Usage
//!
//! ```
//! use uno_deck::cards::{Card, CardColor};
//! use uno_deck::deck::Deck;
//!
//! let mut deck = Deck::new();
//! deck.add_cards([
//!     Card::number(CardColor::Red, 1),
//!     Card::number(CardColor::Red, 2),
//! ]);
//! deck.add_to_top(Card::number(CardColor::Blue, 9));
//!
//! let drawn = deck.draw(2).unwrap();
//! assert_eq!(drawn, vec![Card::number(CardColor::Blue, 9), Card::number(CardColor::Red, 1)]);
//! assert_eq!(deck.size(), 1);
//! ```

use im::Vector;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::cards::Card;
use crate::core::config::Composition;
use crate::core::error::{DeckError, DeckResult};
use crate::core::rng::DeckRng;

use super::distribution::CardDistribution;

/// An ordered, mutable pile of cards.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Deck {
    /// Top of the deck is index 0.
    cards: Vector<Card>,
}

impl Deck {
    /// Create an empty deck.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an unshuffled standard 108-card deck.
    #[must_use]
    pub fn standard() -> Self {
        Self::with_composition(&Composition::standard())
    }

    /// Create an unshuffled deck from a composition, in its construction order.
    #[must_use]
    pub fn with_composition(composition: &Composition) -> Self {
        let deck: Self = composition.cards().into_iter().collect();
        tracing::debug!(cards = deck.size(), "initialized deck from composition");
        deck
    }

    /// Shuffle with a freshly entropy-seeded RNG.
    pub fn shuffle(&mut self) {
        self.shuffle_with(&mut DeckRng::from_entropy());
    }

    /// Shuffle with the given RNG. Deterministic for a given RNG state.
    pub fn shuffle_with(&mut self, rng: &mut DeckRng) {
        let mut buf: Vec<Card> = self.cards.iter().copied().collect();
        rng.shuffle(&mut buf);
        self.cards = buf.into();
        tracing::debug!(cards = self.size(), seed = rng.seed(), "shuffled deck");
    }

    /// Remove and return the top `count` cards, top card first.
    ///
    /// Fails without touching the deck when `count` exceeds the size.
    pub fn draw(&mut self, count: usize) -> DeckResult<Vec<Card>> {
        self.check_range("draw", count)?;

        let rest = self.cards.split_off(count);
        let drawn = std::mem::replace(&mut self.cards, rest);
        tracing::trace!(count, remaining = self.size(), "drew cards");

        Ok(drawn.into_iter().collect())
    }

    /// Remove and return the top card, or `None` if the deck is empty.
    pub fn draw_one(&mut self) -> Option<Card> {
        self.cards.pop_front()
    }

    /// Add a card to the bottom.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push_back(card);
    }

    /// Add cards to the bottom, keeping their order.
    pub fn add_cards(&mut self, cards: impl IntoIterator<Item = Card>) {
        self.cards.extend(cards);
    }

    /// Add a card to the top; it is the next card drawn.
    pub fn add_to_top(&mut self, card: Card) {
        self.cards.push_front(card);
    }

    /// Add cards to the top so that, reading top-down, they appear in the
    /// same order as `cards`: `cards[0]` becomes the new top card.
    pub fn add_cards_to_top(&mut self, cards: impl IntoIterator<Item = Card>) {
        let cards: Vec<Card> = cards.into_iter().collect();
        for card in cards.into_iter().rev() {
            self.cards.push_front(card);
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Number of cards in the deck.
    #[must_use]
    pub fn size(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// The top `count` cards, top card first, without removing them.
    pub fn peek(&self, count: usize) -> DeckResult<Vec<Card>> {
        self.check_range("peek", count)?;
        Ok(self.cards.iter().take(count).copied().collect())
    }

    /// Remove every card.
    pub fn clear(&mut self) {
        self.cards.clear();
    }

    /// Cyclically shift the deck.
    ///
    /// Positive `positions` move cards from the bottom to the top
    /// (`rotate(1)` makes the bottom card the top card); negative values
    /// move cards from the top to the bottom. Shifts are taken modulo the
    /// deck size.
    pub fn rotate(&mut self, positions: isize) {
        let n = self.cards.len();
        if n == 0 {
            return;
        }

        let shift = positions.rem_euclid(n as isize) as usize;
        if shift == 0 {
            return;
        }

        let bottom = self.cards.split_off(n - shift);
        let top = std::mem::replace(&mut self.cards, bottom);
        self.cards.append(top);
    }

    /// Whether a card equal to `card` is in the deck.
    #[must_use]
    pub fn contains(&self, card: &Card) -> bool {
        self.cards.contains(card)
    }

    /// Counts by kind, color, and label.
    #[must_use]
    pub fn distribution(&self) -> CardDistribution {
        CardDistribution::from_cards(&self.cards)
    }

    /// Iterate from top to bottom.
    pub fn iter(&self) -> im::vector::Iter<'_, Card> {
        self.cards.iter()
    }

    fn check_range(&self, operation: &'static str, count: usize) -> DeckResult<()> {
        if count > self.cards.len() {
            tracing::debug!(operation, count, available = self.cards.len(), "rejected card count");
            return Err(DeckError::InvalidArgument {
                operation,
                requested: count,
                available: self.cards.len(),
            });
        }
        Ok(())
    }
}

impl fmt::Display for Deck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "UNO deck with {} cards", self.size())
    }
}

impl FromIterator<Card> for Deck {
    fn from_iter<T: IntoIterator<Item = Card>>(iter: T) -> Self {
        Self {
            cards: iter.into_iter().collect(),
        }
    }
}

impl Extend<Card> for Deck {
    fn extend<T: IntoIterator<Item = Card>>(&mut self, iter: T) {
        self.add_cards(iter);
    }
}

impl<'a> IntoIterator for &'a Deck {
    type Item = &'a Card;
    type IntoIter = im::vector::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}

impl IntoIterator for Deck {
    type Item = Card;
    type IntoIter = im::vector::ConsumingIter<Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.into_iter()
    }
}
