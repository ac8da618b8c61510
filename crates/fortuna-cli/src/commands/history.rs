use comfy_table::{ContentArrangement, Table};

use fortuna_core::{RecordingDisplay, UtilityKind, UtilitySession};

pub fn run(
    format: &str,
    count: usize,
    kind: UtilityKind,
    seed: Option<u64>,
) -> Result<(), String> {
    let format = format.to_lowercase();
    if !matches!(format.as_str(), "text" | "markdown" | "md" | "json" | "table") {
        return Err(format!(
            "unknown format '{format}' (expected text, markdown, json, or table)"
        ));
    }

    let mut session = UtilitySession::new(super::config(kind, seed));
    let mut display = RecordingDisplay::new();
    for _ in 0..count {
        session
            .activate_and_log(&mut display)
            .map_err(|e| e.to_string())?;
    }
    let history = session.history();

    match format.as_str() {
        "markdown" | "md" => print!("{}", history.export_markdown()),
        "json" => {
            let json = serde_json::to_string_pretty(history).map_err(|e| e.to_string())?;
            println!("{json}");
        }
        "table" => {
            let mut table = Table::new();
            table.set_content_arrangement(ContentArrangement::Dynamic);
            table.set_header(vec!["#", "Result"]);
            for (i, entry) in history.entries().iter().enumerate() {
                table.add_row(vec![(i + 1).to_string(), entry.clone()]);
            }
            println!("{table}");
            println!();
            println!("  {} results", history.len());
        }
        _ => print!("{}", history.export_text()),
    }

    Ok(())
}
