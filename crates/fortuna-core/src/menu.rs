//! The auxiliary menu panel.

use crate::display::Display;
use crate::error::UtilResult;

/// Visibility of the side menu. Independent of the active utility.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuPanel {
    visible: bool,
}

impl Default for MenuPanel {
    fn default() -> Self {
        Self { visible: true }
    }
}

impl MenuPanel {
    /// Whether the panel is shown.
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Flip visibility and tell the display. State is unchanged on failure.
    pub fn toggle(&mut self, display: &mut dyn Display) -> UtilResult<bool> {
        let visible = !self.visible;
        display.set_menu_visible(visible)?;
        self.visible = visible;
        tracing::debug!(visible, "menu toggled");
        Ok(visible)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::RecordingDisplay;

    #[test]
    fn toggles_back_and_forth() {
        let mut menu = MenuPanel::default();
        let mut d = RecordingDisplay::new();
        assert!(menu.is_visible());
        assert_eq!(menu.toggle(&mut d), Ok(false));
        assert_eq!(d.menu_visible(), Some(false));
        assert_eq!(menu.toggle(&mut d), Ok(true));
        assert!(menu.is_visible());
    }

    #[test]
    fn failed_toggle_keeps_state() {
        let mut menu = MenuPanel::default();
        let mut d = RecordingDisplay::new();
        d.set_available(false);
        assert!(menu.toggle(&mut d).is_err());
        assert!(menu.is_visible());
    }
}
