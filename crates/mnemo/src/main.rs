mod cli;
mod commands;

use clap::Parser;
use cli::{AgendaAction, Cli, Commands, WorkspaceAction};

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Process {
            file,
            fast,
            dry_run,
        } => commands::process::run(file.as_deref(), fast, dry_run),
        Commands::Workspace { action } => match action {
            Some(WorkspaceAction::List) | None => commands::workspace::run_list(),
            Some(WorkspaceAction::Create {
                name,
                description,
                color,
                icon,
            }) => commands::workspace::run_create(
                &name,
                &description,
                color.as_deref(),
                icon.as_deref(),
            ),
            Some(WorkspaceAction::Switch { id }) => commands::workspace::run_switch(&id),
            Some(WorkspaceAction::Delete { id }) => commands::workspace::run_delete(&id),
            Some(WorkspaceAction::Duplicate { id }) => commands::workspace::run_duplicate(&id),
            Some(WorkspaceAction::Rename { id, name }) => {
                commands::workspace::run_rename(&id, &name)
            }
        },
        Commands::Agenda { action } => match action {
            Some(AgendaAction::List) | None => commands::agenda::run_list(),
            Some(AgendaAction::Toggle { id }) => commands::agenda::run_toggle(id),
            Some(AgendaAction::Remove { id }) => commands::agenda::run_remove(id),
        },
        Commands::Status => commands::status::run(),
        Commands::Export { format, output } => commands::export::run(format, output.as_deref()),
        Commands::Import { file, legacy } => commands::import::run(&file, legacy),
        Commands::Clear => commands::clear::run(),
        Commands::Version => commands::version::run(),
    }
}
