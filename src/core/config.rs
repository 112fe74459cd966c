//! Deck composition configuration.
//!
//! `Composition` describes how many copies of each card a "standard" deck
//! holds. The default is the 108-card UNO layout; games can load their own
//! (e.g. from JSON) and hand it to the builder.

use serde::{Deserialize, Serialize};

use crate::cards::{ActionKind, Card, CardColor, WildKind};

/// Copies of each card making up a standard deck.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Composition {
    /// Colors that receive number and action cards, in construction order.
    pub colors: Vec<CardColor>,

    /// Copies of the 0 card per color.
    pub zero_copies: usize,

    /// Copies of each of 1-9 per color.
    pub number_copies: usize,

    /// Copies of each action kind per color.
    pub action_copies: usize,

    /// Copies of each wild kind.
    pub wild_copies: usize,
}

impl Composition {
    /// The standard 108-card UNO deck.
    #[must_use]
    pub fn standard() -> Self {
        Self {
            colors: CardColor::STANDARD.to_vec(),
            zero_copies: 1,
            number_copies: 2,
            action_copies: 2,
            wild_copies: 4,
        }
    }

    /// Total number of cards this composition produces, or `None` if the
    /// copy counts overflow `usize`.
    ///
    /// Wild-sentinel entries in `colors` contribute nothing.
    #[must_use]
    pub fn card_count(&self) -> Option<usize> {
        let per_color = self
            .number_copies
            .checked_mul(9)?
            .checked_add(self.action_copies.checked_mul(ActionKind::ALL.len())?)?
            .checked_add(self.zero_copies)?;
        let colors = self.colors.iter().filter(|c| !c.is_wild()).count();
        let wilds = self.wild_copies.checked_mul(WildKind::ALL.len())?;
        colors.checked_mul(per_color)?.checked_add(wilds)
    }

    /// Materialize the cards in construction order: every color's number
    /// cards, then every color's action cards, then the wild cards.
    ///
    /// Wild-sentinel entries in `colors` are skipped.
    #[must_use]
    pub fn cards(&self) -> Vec<Card> {
        let colors = self.colors.iter().copied().filter(|c| !c.is_wild());
        let mut cards = Vec::with_capacity(self.card_count().unwrap_or(0));

        for color in colors.clone() {
            cards.extend(std::iter::repeat(Card::number(color, 0)).take(self.zero_copies));
            for value in 1..=9 {
                cards.extend(std::iter::repeat(Card::number(color, value)).take(self.number_copies));
            }
        }

        for color in colors {
            for kind in ActionKind::ALL {
                cards.extend(std::iter::repeat(Card::action(color, kind)).take(self.action_copies));
            }
        }

        for kind in WildKind::ALL {
            cards.extend(std::iter::repeat(Card::wild(kind)).take(self.wild_copies));
        }

        cards
    }
}

impl Default for Composition {
    fn default() -> Self {
        Self::standard()
    }
}
