//! Terminal UI for Fortuna.
//!
//! Renders the active utility, its latest face, the result history, and the
//! side menu with ratatui. Key presses become session events.

pub mod app;
pub mod display;
pub mod terminal;
pub mod view;
