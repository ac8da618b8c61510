//! The ratatui-backed presentation surface.

use fortuna_core::{Display, Rendering, UtilResult, UtilityKind};

/// Display state read by the view on every frame.
#[derive(Debug, Clone)]
pub struct TuiDisplay {
    /// The face currently shown.
    pub face: Rendering,
    /// Result lines, oldest first.
    pub lines: Vec<String>,
    /// Whether the side menu is drawn.
    pub menu_visible: bool,
    /// First visible history line when not following.
    scroll: usize,
    /// Pin the history view to its newest line.
    follow: bool,
    /// History rows available in the last frame.
    view_height: usize,
}

impl Default for TuiDisplay {
    fn default() -> Self {
        Self {
            face: Rendering::placeholder(UtilityKind::default()),
            lines: Vec::new(),
            menu_visible: true,
            scroll: 0,
            follow: true,
            view_height: 0,
        }
    }
}

impl TuiDisplay {
    /// Create an empty display.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record how many history rows fit on screen.
    pub fn set_view_height(&mut self, height: usize) {
        self.view_height = height;
    }

    /// Index of the first history line to draw.
    pub fn offset(&self) -> usize {
        let max = self.lines.len().saturating_sub(self.view_height);
        if self.follow { max } else { self.scroll.min(max) }
    }

    /// Scroll the history up by `n` lines.
    pub fn scroll_up(&mut self, n: usize) {
        self.scroll = self.offset().saturating_sub(n);
        self.follow = false;
    }

    /// Scroll the history down by `n` lines. Reaching the end re-pins it.
    pub fn scroll_down(&mut self, n: usize) {
        let max = self.lines.len().saturating_sub(self.view_height);
        self.scroll = (self.offset() + n).min(max);
        self.follow = self.scroll == max;
    }

    /// Jump to the oldest line.
    pub fn scroll_top(&mut self) {
        self.scroll = 0;
        self.follow = false;
    }
}

impl Display for TuiDisplay {
    fn show(&mut self, rendering: &Rendering) -> UtilResult<()> {
        self.face = rendering.clone();
        Ok(())
    }

    fn append_line(&mut self, line: &str) -> UtilResult<()> {
        self.lines.push(line.to_string());
        Ok(())
    }

    fn scroll_to_end(&mut self) -> UtilResult<()> {
        self.follow = true;
        Ok(())
    }

    fn set_menu_visible(&mut self, visible: bool) -> UtilResult<()> {
        self.menu_visible = visible;
        Ok(())
    }
}
