//! Staged processing orchestrator

use crate::agenda::build_agenda;
use crate::extract::extract_information;
use crate::ids;
use crate::insight::generate_insights;
use crate::parser::parse_conversation;
use crate::prompt::{synthesize_prompt, truncate_chars};
use crate::types::{
    AgendaItem, AiInsight, ExtractedInfo, ParsedConversation, ProjectWorkspace,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const TOTAL_STAGES: usize = 8;

const PREVIEW_LIMIT: usize = 50;
const INSIGHT_PREVIEW_LIMIT: usize = 60;

/// Ordered pipeline stages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Stage {
    MemoryAccess,
    Parsing,
    Extraction,
    Reasoning,
    InsightGeneration,
    AgendaUpdate,
    Synthesis,
    OutputGeneration,
}

impl Stage {
    pub const ALL: [Stage; TOTAL_STAGES] = [
        Stage::MemoryAccess,
        Stage::Parsing,
        Stage::Extraction,
        Stage::Reasoning,
        Stage::InsightGeneration,
        Stage::AgendaUpdate,
        Stage::Synthesis,
        Stage::OutputGeneration,
    ];

    /// 1-based step number
    pub fn step(self) -> usize {
        Stage::ALL.iter().position(|s| *s == self).unwrap() + 1
    }

    pub fn category(self) -> LogCategory {
        match self {
            Stage::MemoryAccess => LogCategory::MemoryAccess,
            Stage::Parsing => LogCategory::Analysis,
            Stage::Extraction => LogCategory::Extraction,
            Stage::Reasoning => LogCategory::Thought,
            Stage::InsightGeneration => LogCategory::Insight,
            Stage::AgendaUpdate => LogCategory::Agenda,
            Stage::Synthesis => LogCategory::Connection,
            Stage::OutputGeneration => LogCategory::Output,
        }
    }
}

/// Log event category tag, mirroring the processing-log presentation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LogCategory {
    MemoryAccess,
    Analysis,
    Extraction,
    Thought,
    Insight,
    Agenda,
    Connection,
    Output,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogStatus {
    Pending,
    Processing,
    Complete,
}

/// Progress event emitted at each stage transition
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogEvent {
    pub id: i64,
    pub step: usize,
    pub category: LogCategory,
    pub title: String,
    pub content: String,
    pub status: LogStatus,
    #[serde(default)]
    pub details: Vec<String>,
    pub timestamp: DateTime<Utc>,
}

/// Observer for staged progress
pub trait ProgressSink {
    fn event(&mut self, event: &LogEvent);
}

/// Sink that drops all events
pub struct NullSink;

impl ProgressSink for NullSink {
    fn event(&mut self, _event: &LogEvent) {}
}

/// Sink that records every event, for tests and observers that render later
#[derive(Default)]
pub struct CollectSink {
    pub events: Vec<LogEvent>,
}

impl ProgressSink for CollectSink {
    fn event(&mut self, event: &LogEvent) {
        self.events.push(event.clone());
    }
}

/// Stage pacing. `None` runs the pipeline flat out; `Interactive` inserts
/// the per-stage delays that make staged progress observable. Delays never
/// change a computed result.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DelayPolicy {
    #[default]
    None,
    Interactive,
}

impl DelayPolicy {
    fn wait(self, stage: Stage) {
        let millis = match self {
            DelayPolicy::None => return,
            DelayPolicy::Interactive => match stage {
                Stage::MemoryAccess => 600,
                Stage::Parsing => 400,
                Stage::Extraction => 500,
                Stage::Reasoning => 700,
                Stage::InsightGeneration => 500,
                Stage::AgendaUpdate => 400,
                Stage::Synthesis => 500,
                Stage::OutputGeneration => 400,
            },
        };
        std::thread::sleep(Duration::from_millis(millis));
    }
}

#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("transcript is empty")]
    EmptyInput,
}

/// Everything one processing run produces; committing it to the store is
/// the caller's follow-up step.
#[derive(Debug, Clone)]
pub struct PipelineResult {
    pub parsed: ParsedConversation,
    pub extracted: ExtractedInfo,
    pub enhanced: String,
    pub insights: Vec<AiInsight>,
    pub agenda_items: Vec<AgendaItem>,
}

/// Sequential 8-stage orchestrator. Each stage emits a `processing` event
/// on entry and a `complete` event (with detail lines) on exit; no stage
/// begins before the previous one completes.
pub struct Pipeline {
    delays: DelayPolicy,
    current_step: usize,
}

impl Pipeline {
    pub fn new(delays: DelayPolicy) -> Self {
        Self {
            delays,
            current_step: 0,
        }
    }

    pub fn current_step(&self) -> usize {
        self.current_step
    }

    pub fn total_steps(&self) -> usize {
        TOTAL_STAGES
    }

    fn emit(
        &mut self,
        sink: &mut dyn ProgressSink,
        stage: Stage,
        status: LogStatus,
        title: &str,
        content: &str,
        details: Vec<String>,
    ) {
        let event = LogEvent {
            id: ids::next_id(),
            step: stage.step(),
            category: stage.category(),
            title: title.to_string(),
            content: content.to_string(),
            status,
            details,
            timestamp: Utc::now(),
        };
        tracing::debug!(step = event.step, status = ?event.status, "{}", event.title);
        sink.event(&event);
    }

    fn run_stage<T>(
        &mut self,
        sink: &mut dyn ProgressSink,
        stage: Stage,
        title: &str,
        content: &str,
        entry_details: Vec<String>,
        compute: impl FnOnce() -> (T, Vec<String>),
    ) -> T {
        self.current_step = stage.step();
        self.emit(sink, stage, LogStatus::Processing, title, content, entry_details);
        self.delays.wait(stage);
        let (value, details) = compute();
        self.emit(sink, stage, LogStatus::Complete, title, content, details);
        value
    }

    /// Run all eight stages against a workspace snapshot.
    pub fn run(
        &mut self,
        text: &str,
        workspace: &ProjectWorkspace,
        sink: &mut dyn ProgressSink,
    ) -> Result<PipelineResult, PipelineError> {
        if text.trim().is_empty() {
            return Err(PipelineError::EmptyInput);
        }
        self.current_step = 0;

        let memory_details = vec![
            format!(
                "Found {} previous conversations",
                workspace.conversations.len()
            ),
            format!("{} known projects", workspace.projects.len()),
            format!("{} tracked technologies", workspace.technologies.len()),
            format!("{} agenda items", workspace.agenda.len()),
        ];
        self.run_stage(
            sink,
            Stage::MemoryAccess,
            &format!("Accessing {} Memory Bank", workspace.name),
            "Retrieving previous conversations and stored context...",
            memory_details.clone(),
            || ((), memory_details.clone()),
        );

        let parsed = self.run_stage(
            sink,
            Stage::Parsing,
            "Parsing Conversation",
            "Analyzing input structure and identifying speakers...",
            Vec::new(),
            || {
                let parsed = parse_conversation(text);
                let details = vec![
                    format!("User message: {}", truncate_chars(&parsed.user, PREVIEW_LIMIT)),
                    if parsed.assistant.is_empty() {
                        "No assistant response found".to_string()
                    } else {
                        format!(
                            "Assistant response detected: {}",
                            truncate_chars(&parsed.assistant, PREVIEW_LIMIT)
                        )
                    },
                ];
                (parsed, details)
            },
        );

        let extracted = self.run_stage(
            sink,
            Stage::Extraction,
            "Extracting Information",
            "Identifying projects, technologies, tasks, and entities...",
            Vec::new(),
            || {
                let extracted = extract_information(&parsed);
                let details = vec![
                    format!("Projects: {} found", extracted.projects.len()),
                    format!("Technologies: {} detected", extracted.technologies.len()),
                    format!("Tasks: {} identified", extracted.tasks.len()),
                    format!("Actions: {} recognized", extracted.actions.len()),
                ];
                (extracted, details)
            },
        );

        self.run_stage(
            sink,
            Stage::Reasoning,
            "AI Reasoning Process",
            "Analyzing patterns and making connections...",
            Vec::new(),
            || {
                let recent_projects = workspace.projects.last(3);
                let recent_techs = workspace.technologies.last(5);
                let details = vec![
                    format!(
                        "Comparing with {} historical conversations",
                        workspace.conversations.len()
                    ),
                    if recent_projects.is_empty() {
                        "No previous projects".to_string()
                    } else {
                        format!("Recent projects: {}", recent_projects.join(", "))
                    },
                    if recent_techs.is_empty() {
                        "No tracked technologies".to_string()
                    } else {
                        format!("Tech stack: {}", recent_techs.join(", "))
                    },
                ];
                ((), details)
            },
        );

        let insights = self.run_stage(
            sink,
            Stage::InsightGeneration,
            "Generating Insights",
            "Creating observations, recommendations, and warnings...",
            Vec::new(),
            || {
                let insights = generate_insights(&extracted, workspace);
                let details = insights
                    .iter()
                    .map(|i| {
                        format!(
                            "{}: {}",
                            i.kind.label().to_uppercase(),
                            truncate_chars(&i.content, INSIGHT_PREVIEW_LIMIT)
                        )
                    })
                    .collect();
                (insights, details)
            },
        );

        let agenda_items = self.run_stage(
            sink,
            Stage::AgendaUpdate,
            "Updating Agenda",
            "Creating and prioritizing task items...",
            Vec::new(),
            || {
                let items = build_agenda(&extracted);
                let details = items
                    .iter()
                    .map(|a| format!("[{}] {}", a.priority.label().to_uppercase(), a.task))
                    .collect();
                (items, details)
            },
        );

        self.run_stage(
            sink,
            Stage::Synthesis,
            "Synthesizing Context",
            "Building comprehensive context from all sources...",
            Vec::new(),
            || ((), Vec::new()),
        );

        let enhanced = self.run_stage(
            sink,
            Stage::OutputGeneration,
            "Generating Enhanced Prompt",
            "Creating optimized prompt with full context...",
            Vec::new(),
            || {
                let enhanced = synthesize_prompt(&parsed, workspace, &extracted, &insights);
                (enhanced, Vec::new())
            },
        );

        Ok(PipelineResult {
            parsed,
            extracted,
            enhanced,
            insights,
            agenda_items,
        })
    }
}
