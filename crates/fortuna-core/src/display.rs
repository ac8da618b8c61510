//! The presentation port and an in-memory implementation.

use crate::error::{UtilError, UtilResult};
use crate::render::Rendering;

/// The presentation surface a session writes to.
pub trait Display {
    /// Show a face: update the image reference and alt text.
    fn show(&mut self, rendering: &Rendering) -> UtilResult<()>;

    /// Append one line to the visible result list.
    fn append_line(&mut self, line: &str) -> UtilResult<()>;

    /// Scroll the result list so the newest line is visible.
    fn scroll_to_end(&mut self) -> UtilResult<()>;

    /// Show or hide the auxiliary menu panel.
    fn set_menu_visible(&mut self, visible: bool) -> UtilResult<()>;
}

/// A [`Display`] that records every request in memory.
///
/// Used by the line-oriented CLI and by tests. It can be switched
/// unavailable to exercise the failure path.
#[derive(Debug, Clone)]
pub struct RecordingDisplay {
    current: Option<Rendering>,
    lines: Vec<String>,
    scrolls: usize,
    menu_visible: Option<bool>,
    available: bool,
}

impl Default for RecordingDisplay {
    fn default() -> Self {
        Self {
            current: None,
            lines: Vec::new(),
            scrolls: 0,
            menu_visible: None,
            available: true,
        }
    }
}

impl RecordingDisplay {
    /// Create an available, empty display.
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent request succeed or fail.
    pub fn set_available(&mut self, available: bool) {
        self.available = available;
    }

    /// The face currently shown.
    pub fn current(&self) -> Option<&Rendering> {
        self.current.as_ref()
    }

    /// Lines appended to the result list.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// How many scroll-to-end requests were made.
    pub fn scroll_count(&self) -> usize {
        self.scrolls
    }

    /// Last menu visibility requested, if any.
    pub fn menu_visible(&self) -> Option<bool> {
        self.menu_visible
    }

    fn check(&self) -> UtilResult<()> {
        if self.available {
            Ok(())
        } else {
            Err(UtilError::DisplayUnavailable("display detached".into()))
        }
    }
}

impl Display for RecordingDisplay {
    fn show(&mut self, rendering: &Rendering) -> UtilResult<()> {
        self.check()?;
        self.current = Some(rendering.clone());
        Ok(())
    }

    fn append_line(&mut self, line: &str) -> UtilResult<()> {
        self.check()?;
        self.lines.push(line.to_string());
        Ok(())
    }

    fn scroll_to_end(&mut self) -> UtilResult<()> {
        self.check()?;
        self.scrolls += 1;
        Ok(())
    }

    fn set_menu_visible(&mut self, visible: bool) -> UtilResult<()> {
        self.check()?;
        self.menu_visible = Some(visible);
        Ok(())
    }
}
