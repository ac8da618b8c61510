//! Mapping outcomes to display faces, alt text, and history labels.

use serde::{Deserialize, Serialize};

use crate::kind::UtilityKind;
use crate::outcome::{CoinFace, Outcome};

/// What the display should show for an outcome or a freshly selected kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rendering {
    /// The utility this face belongs to.
    pub kind: UtilityKind,
    /// Asset key: die face, coin side, `{rank}_of_{suit}`, or `back`.
    pub image_key: String,
    /// Accessible description of the face.
    pub alt_text: String,
    /// History label. Empty for placeholders.
    pub label: String,
}

impl Rendering {
    /// The face shown right after `kind` is selected, before any activation.
    pub fn placeholder(kind: UtilityKind) -> Self {
        let (image_key, alt_text) = match kind {
            UtilityKind::Dice => ("1", "Dice face 1".to_string()),
            UtilityKind::Coin => (
                CoinFace::Tails.key(),
                format!("Coin face {}", CoinFace::Tails.key()),
            ),
            UtilityKind::Card => ("back", "Card".to_string()),
        };
        Self {
            kind,
            image_key: image_key.to_string(),
            alt_text,
            label: String::new(),
        }
    }

    /// Whether this is a placeholder face rather than a drawn result.
    pub fn is_placeholder(&self) -> bool {
        self.label.is_empty()
    }
}

/// Render an outcome into its display face and history label.
pub fn render(outcome: &Outcome) -> Rendering {
    match *outcome {
        Outcome::Dice(n) => Rendering {
            kind: UtilityKind::Dice,
            image_key: n.to_string(),
            alt_text: format!("Dice face {n}"),
            label: format!("Dice: {n}"),
        },
        Outcome::Coin(face) => Rendering {
            kind: UtilityKind::Coin,
            image_key: face.key().to_string(),
            alt_text: format!("Coin face {}", face.key()),
            label: format!("Coin: {face}"),
        },
        Outcome::Card { rank, suit } => {
            let label = format!("Card: {rank} of {suit}");
            Rendering {
                kind: UtilityKind::Card,
                image_key: format!("{rank}_of_{suit}"),
                alt_text: label.clone(),
                label,
            }
        }
    }
}

/// Resolves image keys to asset paths under a root directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetPaths {
    root: String,
}

impl Default for AssetPaths {
    fn default() -> Self {
        Self::new("assets")
    }
}

impl AssetPaths {
    /// Create a resolver rooted at `root` (no trailing slash needed).
    pub fn new(root: impl Into<String>) -> Self {
        let root = root.into();
        Self {
            root: root.trim_end_matches('/').to_string(),
        }
    }

    /// Asset path for a rendering.
    pub fn resolve(&self, rendering: &Rendering) -> String {
        let root = &self.root;
        let key = &rendering.image_key;
        match rendering.kind {
            UtilityKind::Dice => format!("{root}/dice-{key}.svg"),
            // Heads and tails were shipped in different formats.
            UtilityKind::Coin if key == CoinFace::Heads.key() => format!("{root}/heads.png"),
            UtilityKind::Coin => format!("{root}/{key}.webp"),
            UtilityKind::Card => format!("{root}/cards/{key}.png"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::outcome::Suit;

    #[test]
    fn dice_rendering() {
        let r = render(&Outcome::Dice(4));
        assert_eq!(r.image_key, "4");
        assert_eq!(r.alt_text, "Dice face 4");
        assert_eq!(r.label, "Dice: 4");
        assert_eq!(AssetPaths::default().resolve(&r), "assets/dice-4.svg");
    }

    #[test]
    fn coin_rendering() {
        let heads = render(&Outcome::Coin(CoinFace::Heads));
        assert_eq!(heads.label, "Coin: Heads");
        assert_eq!(heads.alt_text, "Coin face heads");
        assert_eq!(AssetPaths::default().resolve(&heads), "assets/heads.png");

        let tails = render(&Outcome::Coin(CoinFace::Tails));
        assert_eq!(tails.label, "Coin: Tails");
        assert_eq!(AssetPaths::default().resolve(&tails), "assets/tails.webp");
    }

    #[test]
    fn card_rendering() {
        let r = render(&Outcome::Card {
            rank: 13,
            suit: Suit::Hearts,
        });
        assert_eq!(r.label, "Card: 13 of hearts");
        assert_eq!(r.alt_text, "Card: 13 of hearts");
        assert_eq!(r.image_key, "13_of_hearts");
        assert_eq!(
            AssetPaths::default().resolve(&r),
            "assets/cards/13_of_hearts.png"
        );
    }

    #[test]
    fn placeholders() {
        let dice = Rendering::placeholder(UtilityKind::Dice);
        assert_eq!(dice.image_key, "1");
        assert_eq!(dice.alt_text, "Dice face 1");
        assert!(dice.is_placeholder());

        let coin = Rendering::placeholder(UtilityKind::Coin);
        assert_eq!(coin.image_key, "tails");
        assert_eq!(coin.alt_text, "Coin face tails");

        let card = Rendering::placeholder(UtilityKind::Card);
        assert_eq!(
            AssetPaths::default().resolve(&card),
            "assets/cards/back.png"
        );
        assert_eq!(card.alt_text, "Card");
    }

    #[test]
    fn custom_root() {
        let paths = AssetPaths::new("/srv/static/");
        let r = render(&Outcome::Dice(2));
        assert_eq!(paths.resolve(&r), "/srv/static/dice-2.svg");
    }
}
