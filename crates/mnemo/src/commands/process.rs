use std::io::Read;

use mnemo_core::{DelayPolicy, LogEvent, LogStatus, Pipeline, ProgressSink, TOTAL_STAGES};

use super::open_store;

/// Sink that renders stage progress to stderr, keeping stdout clean for
/// the enhanced prompt
struct ConsoleSink;

impl ProgressSink for ConsoleSink {
    fn event(&mut self, event: &LogEvent) {
        match event.status {
            LogStatus::Processing => {
                eprintln!("[{}/{}] {}", event.step, TOTAL_STAGES, event.title);
                eprintln!("        {}", event.content);
            }
            LogStatus::Complete => {
                for detail in &event.details {
                    eprintln!("        - {detail}");
                }
            }
            LogStatus::Pending => {}
        }
    }
}

pub fn run(file: Option<&str>, fast: bool, dry_run: bool) -> anyhow::Result<()> {
    let text = match file {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    let mut store = open_store()?;
    let delays = if fast {
        DelayPolicy::None
    } else {
        DelayPolicy::Interactive
    };

    let mut pipeline = Pipeline::new(delays);
    let result = pipeline.run(&text, store.active(), &mut ConsoleSink)?;

    println!("{}", result.enhanced);

    if dry_run {
        tracing::info!("dry run, nothing committed");
        return Ok(());
    }

    store.store_conversation(
        result.parsed,
        result.extracted,
        result.insights,
        result.agenda_items,
    )?;
    let stats = store.stats();
    eprintln!(
        "Committed to '{}': {} conversations, {} agenda items, {} insights",
        store.active().name,
        stats.conversations,
        stats.agenda,
        stats.insights
    );
    Ok(())
}
