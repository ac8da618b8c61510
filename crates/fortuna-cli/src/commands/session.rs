use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::Path;

use colored::Colorize;

use fortuna_core::{RecordingDisplay, UtilityKind, UtilitySession};

pub fn run(kind: UtilityKind, seed: Option<u64>, script: Option<&Path>) -> Result<(), String> {
    let mut reader: Box<dyn BufRead> = match script {
        Some(path) => {
            let file = File::open(path)
                .map_err(|e| format!("cannot open script '{}': {e}", path.display()))?;
            Box::new(BufReader::new(file))
        }
        None => Box::new(io::stdin().lock()),
    };
    let interactive = script.is_none();

    let mut session = UtilitySession::new(super::config(kind, seed));
    let mut display = RecordingDisplay::new();
    session
        .attach(&mut display)
        .map_err(|e| format!("failed to start session: {e}"))?;

    if interactive {
        println!("  {} Fortuna session", "Starting".bold());
        println!("  Utility: {kind}. Type 'help' for commands, 'quit' to exit.\n");
    }

    let mut line = String::new();

    loop {
        if interactive {
            print!("> ");
            io::stdout().flush().map_err(|e| e.to_string())?;
        }

        line.clear();
        if reader.read_line(&mut line).map_err(|e| e.to_string())? == 0 {
            break; // EOF
        }

        let input = line.trim();
        if input.is_empty() || input.starts_with('#') {
            continue;
        }
        if input.eq_ignore_ascii_case("quit") || input.eq_ignore_ascii_case("q") {
            break;
        }

        match session.process(input, &mut display) {
            Ok(output) => {
                if !output.is_empty() {
                    println!("{output}");
                }
            }
            Err(e) if e.is_recoverable() => println!("{}", e.to_string().yellow()),
            Err(e) => return Err(e.to_string()),
        }
    }

    tracing::debug!(results = session.history().len(), "session finished");
    Ok(())
}
