//! Core engine for Fortuna: a die, a coin, and a card deck with a result log.
//!
//! A [`UtilitySession`] owns the active utility, the random source, the
//! append-only [`HistoryLog`], and the menu panel. Front-ends drive it with
//! [`UiEvent`]s and receive output through the [`Display`] port.

pub mod config;
pub mod display;
pub mod error;
pub mod history;
pub mod kind;
pub mod menu;
pub mod outcome;
pub mod random;
pub mod randomizer;
pub mod render;
pub mod selector;
pub mod session;

pub use config::SessionConfig;
pub use display::{Display, RecordingDisplay};
pub use error::{UtilError, UtilResult};
pub use history::HistoryLog;
pub use kind::UtilityKind;
pub use menu::MenuPanel;
pub use outcome::{CoinFace, Outcome, Suit};
pub use random::{RandomSource, RngSource, ScriptedSource, num_between};
pub use randomizer::Randomizer;
pub use render::{AssetPaths, Rendering, render};
pub use selector::Selector;
pub use session::{UiEvent, UtilitySession};
