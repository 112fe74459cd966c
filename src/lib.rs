//! # uno-deck
//!
//! An ordered UNO card deck: draw from the top, add to the top or bottom,
//! shuffle, peek, rotate, and take inventory.
//!
//! ## Design Principles
//!
//! 1. **Top is index 0**: `draw` and `peek` return cards top card first;
//!    `add_card` appends to the bottom.
//!
//! 2. **Errors vs. empty**: Asking for more cards than the deck holds is a
//!    `DeckError`. Drawing one card from an empty deck is `None`.
//!
//! 3. **Deterministic when asked**: `shuffle` uses entropy, `shuffle_with`
//!    takes a seedable `DeckRng` for reproducible games and tests.
//!
//! ## Architecture
//!
//! - **Persistent Data Structures**: `im::Vector` backing gives amortized
//!   O(1) operations at both ends and O(1) cloning.
//!
//! ## Modules
//!
//! - `core`: RNG, errors, composition configuration
//! - `cards`: Card values and factories
//! - `deck`: Deck container, builder, distribution, free constructors

pub mod core;
pub mod cards;
pub mod deck;

// Re-export commonly used types
pub use crate::core::{Composition, DeckError, DeckResult, DeckRng};

pub use crate::cards::{ActionKind, Card, CardColor, CardLabel, InvalidCard, WildKind};

pub use crate::deck::{
    create_discard_pile, create_empty_deck, create_standard_deck, create_standard_deck_with,
    merge_decks, CardDistribution, Deck, DeckBuilder,
};
