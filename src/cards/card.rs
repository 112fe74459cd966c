//! UNO card values.
//!
//! A card is a color plus a label. Number and action cards carry one of the
//! four standard colors; wild cards always carry [`CardColor::Wild`].

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Card color. `Wild` is the sentinel color for wild cards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum CardColor {
    Red,
    Blue,
    Green,
    Yellow,
    Wild,
}

impl CardColor {
    /// The four playable colors, in standard construction order.
    pub const STANDARD: [CardColor; 4] = [
        CardColor::Red,
        CardColor::Blue,
        CardColor::Green,
        CardColor::Yellow,
    ];

    /// Every color including the wild sentinel.
    pub const ALL: [CardColor; 5] = [
        CardColor::Red,
        CardColor::Blue,
        CardColor::Green,
        CardColor::Yellow,
        CardColor::Wild,
    ];

    #[must_use]
    pub const fn is_wild(self) -> bool {
        matches!(self, CardColor::Wild)
    }
}

impl fmt::Display for CardColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            CardColor::Red => "red",
            CardColor::Blue => "blue",
            CardColor::Green => "green",
            CardColor::Yellow => "yellow",
            CardColor::Wild => "wild",
        })
    }
}

/// Action card kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActionKind {
    Skip,
    Reverse,
    DrawTwo,
}

impl ActionKind {
    pub const ALL: [ActionKind; 3] = [ActionKind::Skip, ActionKind::Reverse, ActionKind::DrawTwo];
}

/// Wild card kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WildKind {
    Wild,
    WildDrawFour,
}

impl WildKind {
    pub const ALL: [WildKind; 2] = [WildKind::Wild, WildKind::WildDrawFour];
}

/// What is printed on a card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum CardLabel {
    Zero,
    One,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Skip,
    Reverse,
    DrawTwo,
    Wild,
    WildDrawFour,
}

impl CardLabel {
    pub const ALL: [CardLabel; 15] = [
        CardLabel::Zero,
        CardLabel::One,
        CardLabel::Two,
        CardLabel::Three,
        CardLabel::Four,
        CardLabel::Five,
        CardLabel::Six,
        CardLabel::Seven,
        CardLabel::Eight,
        CardLabel::Nine,
        CardLabel::Skip,
        CardLabel::Reverse,
        CardLabel::DrawTwo,
        CardLabel::Wild,
        CardLabel::WildDrawFour,
    ];

    /// Label for a number card, `None` if `n > 9`.
    #[must_use]
    pub const fn from_number(n: u8) -> Option<CardLabel> {
        Some(match n {
            0 => CardLabel::Zero,
            1 => CardLabel::One,
            2 => CardLabel::Two,
            3 => CardLabel::Three,
            4 => CardLabel::Four,
            5 => CardLabel::Five,
            6 => CardLabel::Six,
            7 => CardLabel::Seven,
            8 => CardLabel::Eight,
            9 => CardLabel::Nine,
            _ => return None,
        })
    }

    /// Face value of a number label.
    #[must_use]
    pub const fn number_value(self) -> Option<u8> {
        match self {
            CardLabel::Zero => Some(0),
            CardLabel::One => Some(1),
            CardLabel::Two => Some(2),
            CardLabel::Three => Some(3),
            CardLabel::Four => Some(4),
            CardLabel::Five => Some(5),
            CardLabel::Six => Some(6),
            CardLabel::Seven => Some(7),
            CardLabel::Eight => Some(8),
            CardLabel::Nine => Some(9),
            _ => None,
        }
    }

    #[must_use]
    pub const fn is_number(self) -> bool {
        self.number_value().is_some()
    }

    #[must_use]
    pub const fn is_action(self) -> bool {
        matches!(self, CardLabel::Skip | CardLabel::Reverse | CardLabel::DrawTwo)
    }

    #[must_use]
    pub const fn is_wild(self) -> bool {
        matches!(self, CardLabel::Wild | CardLabel::WildDrawFour)
    }
}

impl From<ActionKind> for CardLabel {
    fn from(kind: ActionKind) -> Self {
        match kind {
            ActionKind::Skip => CardLabel::Skip,
            ActionKind::Reverse => CardLabel::Reverse,
            ActionKind::DrawTwo => CardLabel::DrawTwo,
        }
    }
}

impl From<WildKind> for CardLabel {
    fn from(kind: WildKind) -> Self {
        match kind {
            WildKind::Wild => CardLabel::Wild,
            WildKind::WildDrawFour => CardLabel::WildDrawFour,
        }
    }
}

impl fmt::Display for CardLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(n) = self.number_value() {
            return write!(f, "{}", n);
        }
        f.write_str(match self {
            CardLabel::Skip => "skip",
            CardLabel::Reverse => "reverse",
            CardLabel::DrawTwo => "draw two",
            CardLabel::Wild => "wild",
            _ => "wild draw four",
        })
    }
}

/// A single UNO card.
///
/// ```
/// use uno_deck::cards::{ActionKind, Card, CardColor, WildKind};
///
/// let seven = Card::number(CardColor::Red, 7);
/// assert!(seven.is_number_card());
/// assert_eq!(seven.to_string(), "red 7");
///
/// let skip = Card::action(CardColor::Blue, ActionKind::Skip);
/// assert!(skip.is_action_card());
///
/// let wild = Card::wild(WildKind::WildDrawFour);
/// assert!(wild.is_wild());
/// assert_eq!(wild.color(), CardColor::Wild);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawCard")]
pub struct Card {
    color: CardColor,
    label: CardLabel,
}

/// A color/label pair that no card carries: a wild label on a standard
/// color, or a number/action label on the wild color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("{label} card cannot be {color}")]
pub struct InvalidCard {
    pub color: CardColor,
    pub label: CardLabel,
}

/// Unchecked wire form of [`Card`].
#[derive(Deserialize)]
struct RawCard {
    color: CardColor,
    label: CardLabel,
}

impl TryFrom<RawCard> for Card {
    type Error = InvalidCard;

    fn try_from(raw: RawCard) -> Result<Self, Self::Error> {
        Card::try_new(raw.color, raw.label)
    }
}

impl Card {
    /// Create a card from any color/label pair, rejecting combinations
    /// where the wild color and the wild labels don't go together.
    pub fn try_new(color: CardColor, label: CardLabel) -> Result<Self, InvalidCard> {
        if color.is_wild() != label.is_wild() {
            return Err(InvalidCard { color, label });
        }
        Ok(Self { color, label })
    }

    /// Create a number card.
    ///
    /// Panics if `value > 9` or `color` is the wild sentinel.
    #[must_use]
    pub fn number(color: CardColor, value: u8) -> Self {
        assert!(!color.is_wild(), "Number cards need a standard color");
        let label = match CardLabel::from_number(value) {
            Some(label) => label,
            None => panic!("Invalid number card value: {}", value),
        };
        Self { color, label }
    }

    /// Create an action card.
    ///
    /// Panics if `color` is the wild sentinel.
    #[must_use]
    pub fn action(color: CardColor, kind: ActionKind) -> Self {
        assert!(!color.is_wild(), "Action cards need a standard color");
        Self {
            color,
            label: kind.into(),
        }
    }

    /// Create a wild card.
    #[must_use]
    pub fn wild(kind: WildKind) -> Self {
        Self {
            color: CardColor::Wild,
            label: kind.into(),
        }
    }

    #[must_use]
    pub const fn color(&self) -> CardColor {
        self.color
    }

    #[must_use]
    pub const fn label(&self) -> CardLabel {
        self.label
    }

    /// Face value for number cards.
    #[must_use]
    pub const fn number_value(&self) -> Option<u8> {
        self.label.number_value()
    }

    #[must_use]
    pub const fn is_number_card(&self) -> bool {
        self.label.is_number()
    }

    #[must_use]
    pub const fn is_action_card(&self) -> bool {
        self.label.is_action()
    }

    #[must_use]
    pub const fn is_wild(&self) -> bool {
        self.label.is_wild()
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_wild() {
            write!(f, "{}", self.label)
        } else {
            write!(f, "{} {}", self.color, self.label)
        }
    }
}
