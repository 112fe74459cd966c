//! Deck container and construction helpers.
//!
//! ## Key Types
//!
//! - `Deck`: Ordered pile; index 0 is the top
//! - `CardDistribution`: Counts by kind, color, and label
//! - `DeckBuilder`: Fluent deck assembly
//!
//! Free functions in `factory` cover the common constructions: standard
//! deck, empty deck, discard pile, and merging two decks.

pub mod builder;
pub mod distribution;
pub mod factory;
pub mod pile;

pub use builder::DeckBuilder;
pub use distribution::CardDistribution;
pub use factory::{
    create_discard_pile, create_empty_deck, create_standard_deck, create_standard_deck_with,
    merge_decks,
};
pub use pile::Deck;
