use fortuna_core::{SessionConfig, UtilityKind, UtilitySession};
use fortuna_tui::app::TuiApp;

pub fn run(kind: UtilityKind, seed: Option<u64>, assets: String) -> Result<(), String> {
    let config: SessionConfig = super::config(kind, seed).with_asset_root(assets);
    let app = TuiApp::new(UtilitySession::new(config));
    fortuna_tui::terminal::run(app)
}
