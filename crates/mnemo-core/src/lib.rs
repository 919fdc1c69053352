//! Conversation parsing, fact extraction, and prompt synthesis

mod agenda;
mod extract;
pub mod ids;
mod insight;
mod parser;
mod pipeline;
mod prompt;
mod types;

pub use agenda::build_agenda;
pub use extract::extract_information;
pub use insight::generate_insights;
pub use parser::parse_conversation;
pub use pipeline::{
    CollectSink, DelayPolicy, LogCategory, LogEvent, LogStatus, NullSink, Pipeline, PipelineError,
    PipelineResult, ProgressSink, Stage, TOTAL_STAGES,
};
pub use prompt::{synthesize_prompt, truncate_chars};
pub use types::{
    AgendaItem, AgendaPriority, AgendaStatus, AiInsight, ExtractedInfo, FactSet, InsightKind,
    ParsedConversation, ProjectWorkspace, StoredConversation, WorkspaceStats, WORKSPACE_COLORS,
    WORKSPACE_ICONS,
};
