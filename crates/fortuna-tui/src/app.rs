//! Top-level application state and key routing.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use fortuna_core::{UiEvent, UtilitySession, UtilityKind};

use crate::display::TuiDisplay;

/// Main application state for the TUI.
pub struct TuiApp {
    /// The session behind the screen.
    pub session: UtilitySession,
    /// What the view draws.
    pub display: TuiDisplay,
    /// Whether to show the help popup.
    pub show_help: bool,
    /// Whether the app should quit.
    pub should_quit: bool,
    /// Last error, shown in the status bar until the next key.
    pub message: Option<String>,
}

impl TuiApp {
    /// Create an app around a session and sync the display to it.
    pub fn new(session: UtilitySession) -> Self {
        let mut display = TuiDisplay::new();
        let message = session.attach(&mut display).err().map(|e| e.to_string());
        Self {
            session,
            display,
            show_help: false,
            should_quit: false,
            message,
        }
    }

    /// Feed one event to the session, keeping any error for the status bar.
    pub fn dispatch(&mut self, event: UiEvent) {
        if let Err(e) = self.session.handle(event, &mut self.display) {
            self.message = Some(e.to_string());
        }
    }

    /// Handle a key press.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        self.message = None;

        if self.show_help {
            if matches!(key.code, KeyCode::Char('?') | KeyCode::Esc) {
                self.show_help = false;
            }
            return;
        }

        let active = self.session.active_kind();
        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('?') => self.show_help = true,
            KeyCode::Char('m') => self.dispatch(UiEvent::ToggleMenu),
            KeyCode::Char(' ') | KeyCode::Enter => self.dispatch(UiEvent::Activate),
            KeyCode::Char(c @ '1'..='3') => {
                let idx = c as usize - '1' as usize;
                self.dispatch(UiEvent::SelectionChanged(UtilityKind::ALL[idx]));
            }
            KeyCode::Left | KeyCode::Char('h') => {
                self.dispatch(UiEvent::SelectionChanged(active.prev()));
            }
            KeyCode::Right | KeyCode::Char('l') => {
                self.dispatch(UiEvent::SelectionChanged(active.next()));
            }
            KeyCode::Up | KeyCode::Char('k') => self.display.scroll_up(1),
            KeyCode::Down | KeyCode::Char('j') => self.display.scroll_down(1),
            KeyCode::Char('g') => self.display.scroll_top(),
            KeyCode::Char('G') => self.display.scroll_down(usize::MAX / 2),
            _ => {}
        }
    }

    /// Context-sensitive status bar text.
    pub fn status_hint(&self) -> &str {
        if self.show_help {
            "?/Esc:close help"
        } else {
            "1-3/\u{2190}\u{2192}:utility  Space/Enter:use  j/k:scroll  m:menu  ?:help  q:quit"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fortuna_core::{ScriptedSource, SessionConfig};

    fn press(app: &mut TuiApp, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn app(source: ScriptedSource) -> TuiApp {
        TuiApp::new(UtilitySession::with_source(
            SessionConfig::default(),
            Box::new(source),
        ))
    }

    #[test]
    fn starts_on_dice_placeholder() {
        let app = app(ScriptedSource::default());
        assert_eq!(app.display.face.kind, UtilityKind::Dice);
        assert!(app.display.face.is_placeholder());
        assert!(app.display.menu_visible);
    }

    #[test]
    fn number_keys_select() {
        let mut app = app(ScriptedSource::default());
        press(&mut app, KeyCode::Char('2'));
        assert_eq!(app.session.active_kind(), UtilityKind::Coin);
        assert_eq!(app.display.face.image_key, "tails");
        press(&mut app, KeyCode::Char('3'));
        assert_eq!(app.session.active_kind(), UtilityKind::Card);
        assert!(app.session.history().is_empty());
    }

    #[test]
    fn arrows_cycle_selection() {
        let mut app = app(ScriptedSource::default());
        press(&mut app, KeyCode::Left);
        assert_eq!(app.session.active_kind(), UtilityKind::Card);
        press(&mut app, KeyCode::Char('l'));
        assert_eq!(app.session.active_kind(), UtilityKind::Dice);
    }

    #[test]
    fn space_activates_and_logs() {
        let mut app = app(
            ScriptedSource::default()
                .with_draw(4, 1, 6)
                .with_draw(2, 1, 6),
        );
        press(&mut app, KeyCode::Char(' '));
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.display.lines, vec!["Dice: 4", "Dice: 2"]);
        assert_eq!(app.display.face.label, "Dice: 2");
        assert_eq!(app.session.history().len(), 2);
    }

    #[test]
    fn failed_activation_sets_message() {
        let mut app = app(ScriptedSource::default());
        press(&mut app, KeyCode::Char(' '));
        assert_eq!(app.message.as_deref(), Some("random source unavailable"));
        assert!(app.session.history().is_empty());
        press(&mut app, KeyCode::Char('j'));
        assert!(app.message.is_none());
    }

    #[test]
    fn menu_and_help_and_quit() {
        let mut app = app(ScriptedSource::default());
        press(&mut app, KeyCode::Char('m'));
        assert!(!app.display.menu_visible);
        press(&mut app, KeyCode::Char('?'));
        assert!(app.show_help);
        press(&mut app, KeyCode::Char('q'));
        assert!(!app.should_quit);
        press(&mut app, KeyCode::Esc);
        assert!(!app.show_help);
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }

    #[test]
    fn ctrl_c_quits() {
        let mut app = app(ScriptedSource::default());
        app.show_help = true;
        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit);
    }
}
