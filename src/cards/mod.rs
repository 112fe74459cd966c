//! Card values consumed by the deck.
//!
//! ## Key Types
//!
//! - `Card`: A color plus a label, with number/action/wild factories
//! - `CardColor`: Four standard colors and the wild sentinel
//! - `CardLabel`: Numbers 0-9, action kinds, wild kinds

pub mod card;

pub use card::{ActionKind, Card, CardColor, CardLabel, InvalidCard, WildKind};
