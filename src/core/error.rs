//! Deck error types.
//!
//! Only range violations are errors. An empty deck answering `draw_one` is
//! not a failure: it returns `None`.

use thiserror::Error;

/// Errors returned by deck operations.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum DeckError {
    /// More cards were requested than the deck holds.
    #[error("cannot {operation} {requested} cards from a deck with {available} cards")]
    InvalidArgument {
        /// Operation that rejected the request (`draw` or `peek`).
        operation: &'static str,
        requested: usize,
        available: usize,
    },
}

/// Result alias for deck operations.
pub type DeckResult<T> = Result<T, DeckError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = DeckError::InvalidArgument {
            operation: "draw",
            requested: 5,
            available: 2,
        };
        assert_eq!(err.to_string(), "cannot draw 5 cards from a deck with 2 cards");
    }
}
