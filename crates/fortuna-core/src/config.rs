//! Configuration for a utility session.

use crate::kind::UtilityKind;

/// Configuration for a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    /// RNG seed for reproducible draws. `None` seeds from OS entropy.
    pub seed: Option<u64>,
    /// Utility active when the session starts.
    pub initial_kind: UtilityKind,
    /// Directory that asset paths are resolved against.
    pub asset_root: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            seed: None,
            initial_kind: UtilityKind::Dice,
            asset_root: "assets".to_string(),
        }
    }
}

impl SessionConfig {
    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the starting utility.
    pub fn with_kind(mut self, kind: UtilityKind) -> Self {
        self.initial_kind = kind;
        self
    }

    /// Set the asset root directory.
    pub fn with_asset_root(mut self, root: impl Into<String>) -> Self {
        self.asset_root = root.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let cfg = SessionConfig::default();
        assert_eq!(cfg.seed, None);
        assert_eq!(cfg.initial_kind, UtilityKind::Dice);
        assert_eq!(cfg.asset_root, "assets");
    }

    #[test]
    fn builder_methods() {
        let cfg = SessionConfig::default()
            .with_seed(123)
            .with_kind(UtilityKind::Card)
            .with_asset_root("static");
        assert_eq!(cfg.seed, Some(123));
        assert_eq!(cfg.initial_kind, UtilityKind::Card);
        assert_eq!(cfg.asset_root, "static");
    }
}
