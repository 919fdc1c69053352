use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "mnemo")]
#[command(version)]
#[command(about = "Persistent conversation memory and context-enhanced prompts")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run a transcript through the enhancement pipeline
    Process {
        /// Path to a transcript file (reads stdin if omitted)
        #[arg(short, long)]
        file: Option<String>,

        /// Skip the interactive per-stage pacing
        #[arg(long)]
        fast: bool,

        /// Print the enhanced prompt without committing to memory
        #[arg(long)]
        dry_run: bool,
    },

    /// Manage workspaces
    Workspace {
        #[command(subcommand)]
        action: Option<WorkspaceAction>,
    },

    /// Manage the active workspace's agenda
    Agenda {
        #[command(subcommand)]
        action: Option<AgendaAction>,
    },

    /// Show active workspace statistics
    Status,

    /// Export the active workspace
    Export {
        /// Output document format
        #[arg(short = 'F', long, value_enum, default_value = "json")]
        format: ExportFormat,

        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Import a workspace export document
    Import {
        /// Path to the export JSON
        file: String,

        /// Treat the file as a previous-generation single-memory blob
        #[arg(long)]
        legacy: bool,
    },

    /// Clear the active workspace's memory
    Clear,

    /// Print version information
    Version,
}

#[derive(Subcommand)]
pub enum WorkspaceAction {
    /// List all workspaces
    List,
    /// Create a workspace and switch to it
    Create {
        name: String,
        /// Workspace description
        #[arg(short, long, default_value = "")]
        description: String,
        /// Hex color (defaults to the first palette entry)
        #[arg(long)]
        color: Option<String>,
        /// Icon glyph (defaults to the first palette entry)
        #[arg(long)]
        icon: Option<String>,
    },
    /// Switch the active workspace
    Switch { id: String },
    /// Delete a workspace
    Delete { id: String },
    /// Duplicate a workspace
    Duplicate { id: String },
    /// Rename a workspace
    Rename { id: String, name: String },
}

#[derive(Subcommand)]
pub enum AgendaAction {
    /// List agenda items
    List,
    /// Cycle an item's status (pending -> in-progress -> completed)
    Toggle { id: i64 },
    /// Remove an item
    Remove { id: i64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// Full JSON data export
    Json,
    /// Human-readable Markdown
    Markdown,
    /// Single-workspace document for re-import
    Workspace,
    /// Short plain-text summary
    Summary,
}
