//! Outcomes of a single activation.

use serde::{Deserialize, Serialize};

use crate::kind::UtilityKind;

/// Which side of the coin landed up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CoinFace {
    /// Drawn as 0.
    Heads,
    /// Drawn as 1.
    Tails,
}

impl CoinFace {
    /// Map a `0..=1` draw to a face. Anything but 0 is tails.
    pub fn from_draw(n: u32) -> Self {
        match n {
            0 => Self::Heads,
            _ => Self::Tails,
        }
    }

    /// Capitalized name used in labels.
    pub fn name(self) -> &'static str {
        match self {
            Self::Heads => "Heads",
            Self::Tails => "Tails",
        }
    }

    /// Lower-case key used for assets and alt text.
    pub fn key(self) -> &'static str {
        match self {
            Self::Heads => "heads",
            Self::Tails => "tails",
        }
    }
}

impl std::fmt::Display for CoinFace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A playing-card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Suit {
    /// Drawn as 1.
    Clubs,
    /// Drawn as 2.
    Diamonds,
    /// Drawn as 3.
    Hearts,
    /// Drawn as 4.
    Spades,
}

impl Suit {
    /// Map a `1..=4` draw to a suit. Anything above 3 is spades.
    pub fn from_draw(n: u32) -> Self {
        match n {
            1 => Self::Clubs,
            2 => Self::Diamonds,
            3 => Self::Hearts,
            _ => Self::Spades,
        }
    }

    /// Lower-case name, as used in labels and asset keys.
    pub fn name(self) -> &'static str {
        match self {
            Self::Clubs => "clubs",
            Self::Diamonds => "diamonds",
            Self::Hearts => "hearts",
            Self::Spades => "spades",
        }
    }
}

impl std::fmt::Display for Suit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// The result of one activation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// A die face in `1..=6`.
    Dice(u32),
    /// A coin face.
    Coin(CoinFace),
    /// A card.
    Card {
        /// Rank in `1..=13`.
        rank: u32,
        /// Suit of the card.
        suit: Suit,
    },
}

impl Outcome {
    /// The utility that produced this outcome.
    pub fn kind(&self) -> UtilityKind {
        match self {
            Self::Dice(_) => UtilityKind::Dice,
            Self::Coin(_) => UtilityKind::Coin,
            Self::Card { .. } => UtilityKind::Card,
        }
    }
}
