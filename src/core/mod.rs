//! Core types: RNG, errors, and composition configuration.

pub mod config;
pub mod error;
pub mod rng;

pub use config::Composition;
pub use error::{DeckError, DeckResult};
pub use rng::DeckRng;
