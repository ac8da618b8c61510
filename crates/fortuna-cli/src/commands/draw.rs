use colored::Colorize;

use fortuna_core::{RecordingDisplay, UtilityKind, UtilitySession};

pub fn run(
    kind: UtilityKind,
    count: usize,
    seed: Option<u64>,
    verbose: bool,
) -> Result<(), String> {
    let mut session = UtilitySession::new(super::config(kind, seed));
    let mut display = RecordingDisplay::new();

    for _ in 0..count {
        session
            .activate_and_log(&mut display)
            .map_err(|e| format!("{} failed: {e}", kind.verb()))?;
        let Some(face) = display.current() else {
            continue;
        };
        if verbose {
            println!(
                "{}  {}  {}",
                face.label.bold(),
                session.assets().resolve(face).dimmed(),
                face.alt_text
            );
        } else {
            println!("{}", face.label);
        }
    }

    Ok(())
}
