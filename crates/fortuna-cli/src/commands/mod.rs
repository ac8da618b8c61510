pub mod draw;
pub mod history;
pub mod session;
pub mod tui;

use fortuna_core::{SessionConfig, UtilityKind};

/// Build a session config from the shared CLI flags.
fn config(kind: UtilityKind, seed: Option<u64>) -> SessionConfig {
    let config = SessionConfig::default().with_kind(kind);
    match seed {
        Some(seed) => config.with_seed(seed),
        None => config,
    }
}
