//! Draws outcomes for a utility kind.

use crate::error::UtilResult;
use crate::kind::UtilityKind;
use crate::outcome::{CoinFace, Outcome, Suit};
use crate::random::{RandomSource, num_between};

/// Produces one uniformly random outcome per activation.
pub struct Randomizer {
    source: Box<dyn RandomSource>,
}

impl Randomizer {
    /// Create a randomizer drawing from `source`.
    pub fn new(source: Box<dyn RandomSource>) -> Self {
        Self { source }
    }

    /// Draw an inclusive integer in `[min, max]`.
    pub fn num_between(&mut self, min: u32, max: u32) -> UtilResult<u32> {
        num_between(self.source.as_mut(), min, max)
    }

    /// Draw one outcome for `kind`.
    ///
    /// Cards draw the rank first, then the suit, as two independent draws.
    pub fn activate(&mut self, kind: UtilityKind) -> UtilResult<Outcome> {
        let outcome = match kind {
            UtilityKind::Dice => Outcome::Dice(self.num_between(1, 6)?),
            UtilityKind::Coin => Outcome::Coin(CoinFace::from_draw(self.num_between(0, 1)?)),
            UtilityKind::Card => {
                let rank = self.num_between(1, 13)?;
                let suit = Suit::from_draw(self.num_between(1, 4)?);
                Outcome::Card { rank, suit }
            }
        };
        Ok(outcome)
    }
}

impl std::fmt::Debug for Randomizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Randomizer").finish_non_exhaustive()
    }
}
