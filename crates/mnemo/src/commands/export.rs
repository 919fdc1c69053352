use chrono::Utc;
use mnemo_store::{full_json_export, latest_prompt, markdown_export, summary_text};

use super::open_store;
use crate::cli::ExportFormat;

pub fn run(format: ExportFormat, output: Option<&str>) -> anyhow::Result<()> {
    let store = open_store()?;
    let ws = store.active();
    let prompt = latest_prompt(ws).unwrap_or_default();
    let now = Utc::now();

    let document = match format {
        ExportFormat::Json => full_json_export(ws, &prompt, now)?,
        ExportFormat::Markdown => markdown_export(ws, &prompt, now),
        ExportFormat::Workspace => store.export_workspace(&ws.id)?,
        ExportFormat::Summary => summary_text(ws, &prompt, now),
    };

    match output {
        Some(path) => {
            std::fs::write(path, &document)?;
            eprintln!("Wrote {path}");
        }
        None => println!("{document}"),
    }
    Ok(())
}
