//! Free functions for the common ways of making a deck.

use crate::cards::Card;
use crate::core::rng::DeckRng;

use super::builder::DeckBuilder;
use super::pile::Deck;

/// A standard 108-card deck, shuffled when `shuffled` is true.
#[must_use]
pub fn create_standard_deck(shuffled: bool) -> Deck {
    let mut deck = Deck::standard();
    if shuffled {
        deck.shuffle();
    }
    deck
}

/// A standard deck shuffled with `rng`.
#[must_use]
pub fn create_standard_deck_with(rng: &mut DeckRng) -> Deck {
    let mut deck = Deck::standard();
    deck.shuffle_with(rng);
    deck
}

/// A deck with no cards.
#[must_use]
pub fn create_empty_deck() -> Deck {
    DeckBuilder::new().exclude_standard_cards().build()
}

/// A new deck holding all of `first` (top to bottom) followed by all of
/// `second`. Neither input is modified.
#[must_use]
pub fn merge_decks(first: &Deck, second: &Deck) -> Deck {
    let mut merged = create_empty_deck();
    merged.add_cards(first.iter().copied());
    merged.add_cards(second.iter().copied());
    tracing::debug!(first = first.size(), second = second.size(), "merged decks");
    merged
}

/// An empty pile, optionally seeded with a starting card.
#[must_use]
pub fn create_discard_pile(initial_card: Option<Card>) -> Deck {
    let mut pile = create_empty_deck();
    if let Some(card) = initial_card {
        pile.add_card(card);
    }
    pile
}
