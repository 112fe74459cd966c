//! Property tests for the deck ordering contract.

use proptest::prelude::*;
use uno_deck::{merge_decks, Card, CardColor, Deck, DeckError, DeckRng};

fn cards_strategy() -> impl Strategy<Value = Vec<Card>> {
    prop::collection::vec((0usize..4, 0u8..10), 0..40).prop_map(|raw| {
        raw.into_iter()
            .map(|(color, value)| Card::number(CardColor::STANDARD[color], value))
            .collect()
    })
}

fn cards_and_count() -> impl Strategy<Value = (Vec<Card>, usize)> {
    cards_strategy().prop_flat_map(|cards| {
        let n = cards.len();
        (Just(cards), 0..=n)
    })
}

fn sorted(mut cards: Vec<Card>) -> Vec<Card> {
    cards.sort_by_key(|c| (c.color(), c.label()));
    cards
}

proptest! {
    #[test]
    fn draw_removes_exactly_count((cards, count) in cards_and_count()) {
        let mut deck: Deck = cards.iter().copied().collect();
        let drawn = deck.draw(count).unwrap();

        prop_assert_eq!(drawn.len(), count);
        prop_assert_eq!(deck.size(), cards.len() - count);
        prop_assert_eq!(&drawn[..], &cards[..count]);
    }

    #[test]
    fn draw_past_end_is_rejected(cards in cards_strategy(), extra in 1usize..10) {
        let mut deck: Deck = cards.iter().copied().collect();
        let before = deck.clone();
        let count = cards.len() + extra;

        let is_invalid = matches!(deck.draw(count), Err(DeckError::InvalidArgument { .. }));
        prop_assert!(is_invalid);
        let peek_invalid = matches!(deck.peek(count), Err(DeckError::InvalidArgument { .. }));
        prop_assert!(peek_invalid);
        prop_assert_eq!(deck, before);
    }

    #[test]
    fn peek_then_draw_then_restore((cards, count) in cards_and_count()) {
        let mut deck: Deck = cards.iter().copied().collect();
        let original = deck.clone();

        let peeked = deck.peek(count).unwrap();
        prop_assert_eq!(&deck, &original);

        let drawn = deck.draw(count).unwrap();
        prop_assert_eq!(&drawn, &peeked);

        deck.add_cards_to_top(drawn);
        prop_assert_eq!(deck, original);
    }

    #[test]
    fn draw_one_takes_former_top(cards in cards_strategy()) {
        let mut deck: Deck = cards.iter().copied().collect();
        prop_assert_eq!(deck.draw_one(), cards.first().copied());
        prop_assert_eq!(deck.size(), cards.len().saturating_sub(1));
    }

    #[test]
    fn shuffle_is_permutation(cards in cards_strategy(), seed in any::<u64>()) {
        let mut deck: Deck = cards.iter().copied().collect();
        deck.shuffle_with(&mut DeckRng::new(seed));

        prop_assert_eq!(deck.size(), cards.len());
        prop_assert_eq!(sorted(deck.into_iter().collect()), sorted(cards));
    }

    #[test]
    fn rotate_round_trip(cards in cards_strategy(), k in -500isize..500) {
        let mut deck: Deck = cards.iter().copied().collect();
        let original = deck.clone();

        deck.rotate(k);
        prop_assert_eq!(deck.size(), original.size());
        deck.rotate(-k);
        prop_assert_eq!(deck, original);
    }

    #[test]
    fn merge_preserves_both_orders(a in cards_strategy(), b in cards_strategy()) {
        let deck_a: Deck = a.iter().copied().collect();
        let deck_b: Deck = b.iter().copied().collect();

        let mut merged = merge_decks(&deck_a, &deck_b);
        prop_assert_eq!(merged.size(), a.len() + b.len());
        prop_assert_eq!(merged.draw(a.len()).unwrap(), a);
        prop_assert_eq!(merged.draw(b.len()).unwrap(), b);
    }
}
