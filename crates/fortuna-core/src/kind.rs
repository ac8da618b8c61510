//! The three randomizing utilities.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::UtilError;

/// Which utility is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum UtilityKind {
    /// Six-sided die.
    #[default]
    Dice,
    /// Two-sided coin.
    Coin,
    /// Single draw from a standard 52-card deck.
    Card,
}

impl UtilityKind {
    /// All kinds in menu order.
    pub const ALL: [UtilityKind; 3] = [UtilityKind::Dice, UtilityKind::Coin, UtilityKind::Card];

    /// Display name used in labels ("Dice", "Coin", "Card").
    pub fn name(self) -> &'static str {
        match self {
            Self::Dice => "Dice",
            Self::Coin => "Coin",
            Self::Card => "Card",
        }
    }

    /// Verb describing one activation.
    pub fn verb(self) -> &'static str {
        match self {
            Self::Dice => "roll",
            Self::Coin => "flip",
            Self::Card => "draw",
        }
    }

    /// Position in [`UtilityKind::ALL`].
    pub fn index(self) -> usize {
        match self {
            Self::Dice => 0,
            Self::Coin => 1,
            Self::Card => 2,
        }
    }

    /// The next kind in menu order (wrapping).
    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// The previous kind in menu order (wrapping).
    pub fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl FromStr for UtilityKind {
    type Err = UtilError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "dice" | "die" => Ok(Self::Dice),
            "coin" => Ok(Self::Coin),
            "card" => Ok(Self::Card),
            _ => Err(UtilError::InvalidKind(s.trim().to_string())),
        }
    }
}

impl std::fmt::Display for UtilityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_dice() {
        assert_eq!(UtilityKind::default(), UtilityKind::Dice);
    }

    #[test]
    fn parse_case_insensitive() {
        assert_eq!("Dice".parse::<UtilityKind>(), Ok(UtilityKind::Dice));
        assert_eq!(" COIN ".parse::<UtilityKind>(), Ok(UtilityKind::Coin));
        assert_eq!("card".parse::<UtilityKind>(), Ok(UtilityKind::Card));
        assert_eq!("die".parse::<UtilityKind>(), Ok(UtilityKind::Dice));
    }

    #[test]
    fn parse_rejects_unknown() {
        assert_eq!(
            "dragon".parse::<UtilityKind>(),
            Err(UtilError::InvalidKind("dragon".to_string()))
        );
    }

    #[test]
    fn next_and_prev_wrap() {
        assert_eq!(UtilityKind::Card.next(), UtilityKind::Dice);
        assert_eq!(UtilityKind::Dice.prev(), UtilityKind::Card);
        assert_eq!(UtilityKind::Dice.next(), UtilityKind::Coin);
    }

    #[test]
    fn display() {
        assert_eq!(UtilityKind::Coin.to_string(), "Coin");
    }
}
