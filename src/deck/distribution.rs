//! Inventory report for a deck.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::cards::{Card, CardColor, CardLabel};

/// Card counts by kind, color, and label.
///
/// Every color (including the wild sentinel) and every label has an entry,
/// zero when absent. Wild cards are counted under [`CardColor::Wild`] only,
/// never under a standard color.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardDistribution {
    pub total: usize,
    pub number_cards: usize,
    pub action_cards: usize,
    pub wild_cards: usize,
    pub by_color: FxHashMap<CardColor, usize>,
    pub by_label: FxHashMap<CardLabel, usize>,
}

impl CardDistribution {
    /// Tally `cards` in a single pass.
    pub fn from_cards<'a>(cards: impl IntoIterator<Item = &'a Card>) -> Self {
        let mut dist = Self::default();

        for card in cards {
            dist.total += 1;
            *dist.by_color.entry(card.color()).or_insert(0) += 1;
            *dist.by_label.entry(card.label()).or_insert(0) += 1;

            if card.is_number_card() {
                dist.number_cards += 1;
            } else if card.is_action_card() {
                dist.action_cards += 1;
            } else if card.is_wild() {
                dist.wild_cards += 1;
            }
        }

        dist
    }

    #[must_use]
    pub fn color_count(&self, color: CardColor) -> usize {
        self.by_color.get(&color).copied().unwrap_or(0)
    }

    #[must_use]
    pub fn label_count(&self, label: CardLabel) -> usize {
        self.by_label.get(&label).copied().unwrap_or(0)
    }
}

impl Default for CardDistribution {
    fn default() -> Self {
        Self {
            total: 0,
            number_cards: 0,
            action_cards: 0,
            wild_cards: 0,
            by_color: CardColor::ALL.iter().map(|&c| (c, 0)).collect(),
            by_label: CardLabel::ALL.iter().map(|&l| (l, 0)).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{ActionKind, WildKind};

    #[test]
    fn test_empty_has_all_keys() {
        let dist = CardDistribution::from_cards(std::iter::empty());

        assert_eq!(dist.total, 0);
        assert_eq!(dist.by_color.len(), CardColor::ALL.len());
        assert_eq!(dist.by_label.len(), CardLabel::ALL.len());
        assert!(dist.by_color.values().all(|&n| n == 0));
    }

    #[test]
    fn test_tally() {
        let cards = [
            Card::number(CardColor::Red, 3),
            Card::number(CardColor::Red, 3),
            Card::action(CardColor::Blue, ActionKind::Reverse),
            Card::wild(WildKind::Wild),
        ];
        let dist = CardDistribution::from_cards(&cards);

        assert_eq!(dist.total, 4);
        assert_eq!(dist.number_cards, 2);
        assert_eq!(dist.action_cards, 1);
        assert_eq!(dist.wild_cards, 1);
        assert_eq!(dist.color_count(CardColor::Red), 2);
        assert_eq!(dist.color_count(CardColor::Blue), 1);
        assert_eq!(dist.color_count(CardColor::Wild), 1);
        assert_eq!(dist.color_count(CardColor::Green), 0);
        assert_eq!(dist.label_count(CardLabel::Three), 2);
        assert_eq!(dist.label_count(CardLabel::Reverse), 1);
    }
}
