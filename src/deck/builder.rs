//! Fluent construction of custom decks.

use crate::cards::Card;
use crate::core::config::Composition;

use super::pile::Deck;

/// Builder for decks that mix a standard composition with extra cards.
///
/// Builder state persists across `build` calls: building twice yields two
/// independent, identical decks. Decks already built never see later changes.
///
/// ```
/// use uno_deck::cards::{Card, WildKind};
/// use uno_deck::deck::DeckBuilder;
///
/// let deck = DeckBuilder::new()
///     .exclude_standard_cards()
///     .add_custom_card(Card::wild(WildKind::Wild))
///     .build();
///
/// assert_eq!(deck.size(), 1);
/// ```
#[derive(Clone, Debug)]
pub struct DeckBuilder {
    include_standard_cards: bool,
    composition: Composition,
    custom_cards: Vec<Card>,
}

impl DeckBuilder {
    /// A builder producing the standard deck with no extra cards.
    #[must_use]
    pub fn new() -> Self {
        Self {
            include_standard_cards: true,
            composition: Composition::standard(),
            custom_cards: Vec::new(),
        }
    }

    /// Start from an empty deck instead of the standard composition.
    #[must_use]
    pub fn exclude_standard_cards(mut self) -> Self {
        self.include_standard_cards = false;
        self
    }

    /// Use `composition` instead of the standard 108-card layout.
    #[must_use]
    pub fn with_composition(mut self, composition: Composition) -> Self {
        self.composition = composition;
        self
    }

    /// Queue a card to append after the standard cards.
    #[must_use]
    pub fn add_custom_card(mut self, card: Card) -> Self {
        self.custom_cards.push(card);
        self
    }

    /// Queue several cards, keeping their order.
    #[must_use]
    pub fn add_custom_cards(mut self, cards: impl IntoIterator<Item = Card>) -> Self {
        self.custom_cards.extend(cards);
        self
    }

    /// Drop every queued custom card.
    #[must_use]
    pub fn clear_custom_cards(mut self) -> Self {
        self.custom_cards.clear();
        self
    }

    /// Build a new deck. The builder is left untouched.
    #[must_use]
    pub fn build(&self) -> Deck {
        let mut deck = if self.include_standard_cards {
            Deck::with_composition(&self.composition)
        } else {
            Deck::new()
        };
        deck.add_cards(self.custom_cards.iter().copied());

        tracing::debug!(
            standard = self.include_standard_cards,
            custom = self.custom_cards.len(),
            cards = deck.size(),
            "built deck"
        );
        deck
    }
}

impl Default for DeckBuilder {
    fn default() -> Self {
        Self::new()
    }
}
