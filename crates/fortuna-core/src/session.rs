//! Utility session: the single stateful component behind every front-end.
//!
//! `UtilitySession` owns the selector, randomizer, history, and menu panel.
//! The display is borrowed per event, never stored.

use crate::config::SessionConfig;
use crate::display::Display;
use crate::error::{UtilError, UtilResult};
use crate::history::HistoryLog;
use crate::kind::UtilityKind;
use crate::menu::MenuPanel;
use crate::outcome::Outcome;
use crate::random::{RandomSource, RngSource};
use crate::randomizer::Randomizer;
use crate::render::{AssetPaths, Rendering, render};
use crate::selector::Selector;

const HELP: &str = "\
Commands:
  dice | coin | card    Select a utility
  select <kind>         Select a utility by name
  use | roll | flip | draw
                        Use the active utility and log the result
  menu                  Toggle the menu panel
  history               List logged results
  status                Show the active utility and result count
  help                  Show this help";

/// An event from the presentation surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiEvent {
    /// The user picked a different utility.
    SelectionChanged(UtilityKind),
    /// The user activated the current utility.
    Activate,
    /// The user toggled the menu panel.
    ToggleMenu,
}

/// An interactive randomizing session.
#[derive(Debug)]
pub struct UtilitySession {
    selector: Selector,
    randomizer: Randomizer,
    history: HistoryLog,
    menu: MenuPanel,
    assets: AssetPaths,
}

impl UtilitySession {
    /// Create a session drawing from the standard RNG.
    pub fn new(config: SessionConfig) -> Self {
        let source = RngSource::from_seed_option(config.seed);
        Self::with_source(config, Box::new(source))
    }

    /// Create a session drawing from a custom random source.
    pub fn with_source(config: SessionConfig, source: Box<dyn RandomSource>) -> Self {
        Self {
            selector: Selector::new(config.initial_kind),
            randomizer: Randomizer::new(source),
            history: HistoryLog::new(),
            menu: MenuPanel::default(),
            assets: AssetPaths::new(config.asset_root),
        }
    }

    /// Bring a fresh display in line with the session state.
    pub fn attach(&self, display: &mut dyn Display) -> UtilResult<()> {
        display.show(&Rendering::placeholder(self.active_kind()))?;
        display.set_menu_visible(self.menu.is_visible())?;
        for entry in self.history.entries() {
            display.append_line(entry)?;
        }
        display.scroll_to_end()
    }

    /// The active utility.
    pub fn active_kind(&self) -> UtilityKind {
        self.selector.active_kind()
    }

    /// The result log.
    pub fn history(&self) -> &HistoryLog {
        &self.history
    }

    /// Whether the menu panel is shown.
    pub fn menu_visible(&self) -> bool {
        self.menu.is_visible()
    }

    /// Asset path resolver for this session.
    pub fn assets(&self) -> &AssetPaths {
        &self.assets
    }

    /// Select a utility and show its placeholder face.
    pub fn set_active_kind(
        &mut self,
        kind: UtilityKind,
        display: &mut dyn Display,
    ) -> UtilResult<()> {
        self.selector.set_active_kind(kind, display)
    }

    /// Draw an outcome for the active utility without logging it.
    pub fn activate(&mut self) -> UtilResult<Outcome> {
        self.randomizer.activate(self.selector.active_kind())
    }

    /// Draw, show, and log one outcome for the active utility.
    ///
    /// The history is appended last: on any failure it is left untouched.
    pub fn activate_and_log(&mut self, display: &mut dyn Display) -> UtilResult<Outcome> {
        let kind = self.selector.active_kind();
        self.try_activate_and_log(display)
            .inspect_err(|e| tracing::warn!(%kind, error = %e, "activation aborted"))
    }

    fn try_activate_and_log(&mut self, display: &mut dyn Display) -> UtilResult<Outcome> {
        let outcome = self.activate()?;
        let rendering = render(&outcome);
        display.show(&rendering)?;
        display.append_line(&rendering.label)?;
        display.scroll_to_end()?;
        tracing::debug!(kind = %outcome.kind(), label = %rendering.label, "result logged");
        self.history.append(rendering.label);
        Ok(outcome)
    }

    /// Toggle the menu panel. Returns the new visibility.
    pub fn toggle_menu(&mut self, display: &mut dyn Display) -> UtilResult<bool> {
        self.menu.toggle(display)
    }

    /// Dispatch a UI event. Returns the outcome for activations.
    pub fn handle(
        &mut self,
        event: UiEvent,
        display: &mut dyn Display,
    ) -> UtilResult<Option<Outcome>> {
        match event {
            UiEvent::SelectionChanged(kind) => {
                self.set_active_kind(kind, display)?;
                Ok(None)
            }
            UiEvent::Activate => self.activate_and_log(display).map(Some),
            UiEvent::ToggleMenu => {
                self.toggle_menu(display)?;
                Ok(None)
            }
        }
    }

    /// Process one line of the command interface and return a response.
    pub fn process(&mut self, input: &str, display: &mut dyn Display) -> UtilResult<String> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Ok(String::new());
        }

        let parts: Vec<&str> = trimmed.splitn(2, ' ').collect();
        let cmd = parts[0].to_lowercase();
        let rest = parts.get(1).map(|s| s.trim()).unwrap_or("");

        match cmd.as_str() {
            "select" | "pick" if rest.is_empty() => {
                Ok("Usage: select <dice|coin|card>".to_string())
            }
            "select" | "pick" => {
                let kind = self.selector.select_named(rest, display)?;
                Ok(format!("Selected {kind}."))
            }
            "dice" | "die" | "coin" | "card" => {
                let kind = self.selector.select_named(&cmd, display)?;
                Ok(format!("Selected {kind}."))
            }
            "use" | "roll" | "flip" | "draw" | "activate" => {
                let outcome = self.activate_and_log(display)?;
                Ok(render(&outcome).label)
            }
            "menu" => {
                let msg = if self.toggle_menu(display)? {
                    "Menu shown."
                } else {
                    "Menu hidden."
                };
                Ok(msg.to_string())
            }
            "history" | "log" => Ok(self.history_listing()),
            "status" => Ok(format!(
                "Active: {} | Results: {} | Menu: {}",
                self.active_kind(),
                self.history.len(),
                if self.menu_visible() { "shown" } else { "hidden" }
            )),
            "help" | "?" => Ok(HELP.to_string()),
            _ => Err(UtilError::UnknownCommand(trimmed.to_string())),
        }
    }

    fn history_listing(&self) -> String {
        if self.history.is_empty() {
            return "No results yet.".to_string();
        }
        self.history
            .entries()
            .iter()
            .enumerate()
            .map(|(i, e)| format!("{:>3}. {e}", i + 1))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::RecordingDisplay;
    use crate::random::ScriptedSource;

    fn session(source: ScriptedSource) -> UtilitySession {
        UtilitySession::with_source(SessionConfig::default(), Box::new(source))
    }

    #[test]
    fn default_kind_dice_fixed_draw() {
        let mut s = session(ScriptedSource::default().with_draw(4, 1, 6));
        let mut d = RecordingDisplay::new();
        assert_eq!(s.active_kind(), UtilityKind::Dice);
        let outcome = s.activate_and_log(&mut d).unwrap();
        assert_eq!(outcome, Outcome::Dice(4));
        let shown = d.current().unwrap();
        assert_eq!(shown.image_key, "4");
        assert_eq!(shown.label, "Dice: 4");
        assert_eq!(s.history().entries(), &["Dice: 4"]);
        assert_eq!(d.lines(), &["Dice: 4"]);
        assert_eq!(d.scroll_count(), 1);
    }

    #[test]
    fn coin_heads_then_tails() {
        let mut s = session(
            ScriptedSource::default()
                .with_draw(0, 0, 1)
                .with_draw(1, 0, 1),
        );
        let mut d = RecordingDisplay::new();
        s.handle(UiEvent::SelectionChanged(UtilityKind::Coin), &mut d)
            .unwrap();
        s.handle(UiEvent::Activate, &mut d).unwrap();
        s.handle(UiEvent::Activate, &mut d).unwrap();
        assert_eq!(s.history().entries(), &["Coin: Heads", "Coin: Tails"]);
    }

    #[test]
    fn card_thirteen_of_hearts() {
        let mut s = session(
            ScriptedSource::default()
                .with_draw(13, 1, 13)
                .with_draw(3, 1, 4),
        );
        let mut d = RecordingDisplay::new();
        s.set_active_kind(UtilityKind::Card, &mut d).unwrap();
        s.activate_and_log(&mut d).unwrap();
        assert_eq!(s.history().latest(), Some("Card: 13 of hearts"));
        assert_eq!(
            s.assets().resolve(d.current().unwrap()),
            "assets/cards/13_of_hearts.png"
        );
    }

    #[test]
    fn selection_change_logs_nothing() {
        let mut s = session(ScriptedSource::default());
        let mut d = RecordingDisplay::new();
        let result = s
            .handle(UiEvent::SelectionChanged(UtilityKind::Coin), &mut d)
            .unwrap();
        assert_eq!(result, None);
        assert_eq!(d.current().unwrap().image_key, "tails");
        assert!(s.history().is_empty());
        assert!(d.lines().is_empty());
    }

    #[test]
    fn exhausted_source_leaves_history_untouched() {
        let mut s = session(ScriptedSource::default().with_draw(2, 1, 6));
        let mut d = RecordingDisplay::new();
        s.activate_and_log(&mut d).unwrap();
        assert_eq!(
            s.activate_and_log(&mut d),
            Err(UtilError::RandomSourceUnavailable)
        );
        assert_eq!(s.history().len(), 1);
    }

    #[test]
    fn unavailable_display_leaves_history_untouched() {
        let mut s = session(ScriptedSource::default().with_draw(2, 1, 6));
        let mut d = RecordingDisplay::new();
        d.set_available(false);
        assert!(matches!(
            s.handle(UiEvent::Activate, &mut d),
            Err(UtilError::DisplayUnavailable(_))
        ));
        assert!(s.history().is_empty());
    }

    #[test]
    fn toggle_menu_event() {
        let mut s = session(ScriptedSource::default());
        let mut d = RecordingDisplay::new();
        assert!(s.menu_visible());
        s.handle(UiEvent::ToggleMenu, &mut d).unwrap();
        assert!(!s.menu_visible());
        assert_eq!(d.menu_visible(), Some(false));
        assert_eq!(s.active_kind(), UtilityKind::Dice);
    }

    #[test]
    fn attach_replays_state() {
        let mut s = session(ScriptedSource::default().with_draw(6, 1, 6));
        let mut first = RecordingDisplay::new();
        s.activate_and_log(&mut first).unwrap();

        let mut second = RecordingDisplay::new();
        s.attach(&mut second).unwrap();
        assert_eq!(second.lines(), &["Dice: 6"]);
        assert_eq!(second.menu_visible(), Some(true));
        assert!(second.current().unwrap().is_placeholder());
    }

    #[test]
    fn process_commands() {
        let mut s = session(
            ScriptedSource::default()
                .with_draw(5, 1, 6)
                .with_draw(1, 0, 1),
        );
        let mut d = RecordingDisplay::new();
        assert_eq!(s.process("roll", &mut d).unwrap(), "Dice: 5");
        assert_eq!(s.process("coin", &mut d).unwrap(), "Selected Coin.");
        assert_eq!(s.process("flip", &mut d).unwrap(), "Coin: Tails");
        assert_eq!(s.process("menu", &mut d).unwrap(), "Menu hidden.");
        assert_eq!(
            s.process("status", &mut d).unwrap(),
            "Active: Coin | Results: 2 | Menu: hidden"
        );
        assert_eq!(
            s.process("history", &mut d).unwrap(),
            "  1. Dice: 5\n  2. Coin: Tails"
        );
        assert_eq!(s.process("   ", &mut d).unwrap(), "");
    }

    #[test]
    fn process_select_by_name() {
        let mut s = session(ScriptedSource::default());
        let mut d = RecordingDisplay::new();
        assert_eq!(s.process("select Card", &mut d).unwrap(), "Selected Card.");
        assert_eq!(s.active_kind(), UtilityKind::Card);
    }

    #[test]
    fn process_select_without_kind_shows_usage() {
        let mut s = session(ScriptedSource::default());
        let mut d = RecordingDisplay::new();
        assert_eq!(
            s.process("select", &mut d).unwrap(),
            "Usage: select <dice|coin|card>"
        );
        assert_eq!(s.active_kind(), UtilityKind::Dice);
        assert!(d.current().is_none());
    }

    #[test]
    fn selection_on_detached_display_keeps_kind() {
        let mut s = session(ScriptedSource::default().with_draw(4, 1, 6));
        let mut d = RecordingDisplay::new();
        d.set_available(false);
        assert!(matches!(
            s.handle(UiEvent::SelectionChanged(UtilityKind::Card), &mut d),
            Err(UtilError::DisplayUnavailable(_))
        ));
        assert_eq!(s.active_kind(), UtilityKind::Dice);

        d.set_available(true);
        assert_eq!(
            s.handle(UiEvent::Activate, &mut d),
            Ok(Some(Outcome::Dice(4)))
        );
        assert_eq!(s.history().entries(), &["Dice: 4"]);
    }

    #[test]
    fn process_errors_are_recoverable() {
        let mut s = session(ScriptedSource::default());
        let mut d = RecordingDisplay::new();
        let err = s.process("select dragon", &mut d).unwrap_err();
        assert_eq!(err, UtilError::InvalidKind("dragon".into()));
        assert!(err.is_recoverable());
        assert_eq!(s.active_kind(), UtilityKind::Dice);

        let err = s.process("shuffle", &mut d).unwrap_err();
        assert_eq!(err, UtilError::UnknownCommand("shuffle".into()));
        assert_eq!(s.process("history", &mut d).unwrap(), "No results yet.");
    }
}
