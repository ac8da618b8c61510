//! Random sources and the inclusive-range integer draw.

use std::collections::VecDeque;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::{UtilError, UtilResult};

/// A source of uniform reals in `[0, 1)`.
pub trait RandomSource {
    /// Produce the next uniform real in `[0, 1)`.
    fn next_unit(&mut self) -> UtilResult<f64>;
}

/// Draw a uniform integer in `[min, max]`, both bounds inclusive.
///
/// Scales a unit draw to the span `max - min + 1`, floors it, and adds
/// `min`. A unit outside `[0, 1)` means the source is broken and fails with
/// [`UtilError::RandomSourceUnavailable`]. `min > max` fails with
/// [`UtilError::InvalidRange`] before anything is drawn.
pub fn num_between(source: &mut dyn RandomSource, min: u32, max: u32) -> UtilResult<u32> {
    if min > max {
        return Err(UtilError::InvalidRange { min, max });
    }
    let unit = source.next_unit()?;
    if !(0.0..1.0).contains(&unit) {
        return Err(UtilError::RandomSourceUnavailable);
    }
    let span = f64::from(max - min) + 1.0;
    // Rounding can push `unit * span` up to `span` for units just below 1.
    let offset = ((unit * span).floor() as u32).min(max - min);
    Ok(min + offset)
}

/// A [`RandomSource`] backed by the standard seeded RNG.
#[derive(Debug, Clone)]
pub struct RngSource {
    rng: StdRng,
}

impl RngSource {
    /// Create a reproducible source from a seed.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Create a source seeded from OS entropy.
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Seeded if a seed is given, OS entropy otherwise.
    pub fn from_seed_option(seed: Option<u64>) -> Self {
        seed.map_or_else(Self::from_entropy, Self::seeded)
    }
}

impl RandomSource for RngSource {
    fn next_unit(&mut self) -> UtilResult<f64> {
        Ok(self.rng.random::<f64>())
    }
}

/// A [`RandomSource`] that replays preset units, then runs dry.
#[derive(Debug, Clone, Default)]
pub struct ScriptedSource {
    units: VecDeque<f64>,
}

impl ScriptedSource {
    /// Create a source that yields the given units in order.
    pub fn new(units: impl IntoIterator<Item = f64>) -> Self {
        Self {
            units: units.into_iter().collect(),
        }
    }

    /// Queue the unit that makes `num_between(min, max)` return `value`.
    pub fn with_draw(mut self, value: u32, min: u32, max: u32) -> Self {
        self.push_draw(value, min, max);
        self
    }

    /// Queue the unit that makes `num_between(min, max)` return `value`.
    pub fn push_draw(&mut self, value: u32, min: u32, max: u32) {
        debug_assert!((min..=max).contains(&value));
        let span = f64::from(max - min) + 1.0;
        // Aim at the middle of the value's bucket.
        self.units.push_back((f64::from(value - min) + 0.5) / span);
    }

    /// Number of units still queued.
    pub fn remaining(&self) -> usize {
        self.units.len()
    }
}

impl RandomSource for ScriptedSource {
    fn next_unit(&mut self) -> UtilResult<f64> {
        self.units
            .pop_front()
            .ok_or(UtilError::RandomSourceUnavailable)
    }
}
