//! Holds the active utility kind.

use crate::display::Display;
use crate::error::UtilResult;
use crate::kind::UtilityKind;
use crate::render::Rendering;

/// The currently chosen utility. Always holds exactly one kind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Selector {
    active: UtilityKind,
}

impl Selector {
    /// Create a selector starting on `kind`.
    pub fn new(kind: UtilityKind) -> Self {
        Self { active: kind }
    }

    /// The active kind.
    pub fn active_kind(&self) -> UtilityKind {
        self.active
    }

    /// Show `kind`'s placeholder face and record it as active.
    /// The active kind is unchanged if the display fails.
    pub fn set_active_kind(
        &mut self,
        kind: UtilityKind,
        display: &mut dyn Display,
    ) -> UtilResult<()> {
        display.show(&Rendering::placeholder(kind))?;
        self.active = kind;
        tracing::debug!(%kind, "utility selected");
        Ok(())
    }

    /// Parse `name` and select it. An invalid name leaves everything as it was.
    pub fn select_named(
        &mut self,
        name: &str,
        display: &mut dyn Display,
    ) -> UtilResult<UtilityKind> {
        let kind = name.parse::<UtilityKind>()?;
        self.set_active_kind(kind, display)?;
        Ok(kind)
    }
}
