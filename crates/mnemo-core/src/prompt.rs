//! Enhanced-prompt document assembly

use crate::types::{
    AgendaPriority, AgendaStatus, AiInsight, ExtractedInfo, InsightKind, ParsedConversation,
    ProjectWorkspace,
};

const BANNER: &str =
    "╔══════════════════════════════════════════════════════════════╗";
const BANNER_END: &str =
    "╚══════════════════════════════════════════════════════════════╝";
const RULE: &str =
    "───────────────────────────────────────────────────────────────";

const KNOWN_PROJECTS_WINDOW: usize = 5;
const KNOWN_TECH_WINDOW: usize = 8;
const TOPIC_LIMIT: usize = 100;
const RESPONSE_LIMIT: usize = 300;
const AGENDA_WINDOW: usize = 5;
const TASK_PREVIEW: usize = 3;

/// Truncate to `limit` characters, appending `...` only when the source
/// actually exceeds the limit.
pub fn truncate_chars(s: &str, limit: usize) -> String {
    if s.chars().count() <= limit {
        s.to_string()
    } else {
        let head: String = s.chars().take(limit).collect();
        format!("{head}...")
    }
}

fn join(values: &[String], sep: &str) -> String {
    values
        .iter()
        .map(|s| s.as_str())
        .collect::<Vec<_>>()
        .join(sep)
}

fn join_or_none(values: &[String]) -> String {
    if values.is_empty() {
        "None".to_string()
    } else {
        join(values, ", ")
    }
}

fn priority_glyph(priority: AgendaPriority) -> &'static str {
    match priority {
        AgendaPriority::High => "🔴",
        AgendaPriority::Medium => "🟡",
        AgendaPriority::Low => "🟢",
    }
}

fn insight_glyph(kind: InsightKind) -> &'static str {
    match kind {
        InsightKind::Observation => "👁️",
        InsightKind::Recommendation => "💡",
        InsightKind::Warning => "⚠️",
        InsightKind::Connection => "🔗",
    }
}

/// Render the enhanced prompt document.
///
/// Deterministic: all timestamps come from the inputs, so identical inputs
/// produce byte-identical output.
pub fn synthesize_prompt(
    parsed: &ParsedConversation,
    workspace: &ProjectWorkspace,
    extracted: &ExtractedInfo,
    insights: &[AiInsight],
) -> String {
    let mut lines: Vec<String> = Vec::new();

    lines.push(BANNER.to_string());
    lines.push(format!(
        "║   🤖 AI CONTEXT MANAGER - {:<30}  ║",
        workspace.name.to_uppercase()
    ));
    lines.push(BANNER_END.to_string());
    lines.push(String::new());

    lines.push(format!(
        "## 📂 WORKSPACE: {} {}",
        workspace.icon, workspace.name
    ));
    lines.push(format!("Description: {}", workspace.description));
    lines.push(format!(
        "Last Updated: {}",
        workspace.updated_at.format("%Y-%m-%d %H:%M:%S")
    ));
    lines.push(String::new());

    lines.push("## 🧠 MEMORY ACCESS LOG".to_string());
    lines.push(format!(
        "📊 Total Conversations in Memory: {}",
        workspace.conversations.len()
    ));
    lines.push(format!(
        "📁 Known Projects: {}",
        join_or_none(workspace.projects.last(KNOWN_PROJECTS_WINDOW))
    ));
    lines.push(format!(
        "💻 Technology Stack: {}",
        join_or_none(workspace.technologies.last(KNOWN_TECH_WINDOW))
    ));
    lines.push(String::new());

    if let Some(last) = workspace.conversations.last() {
        lines.push("## 📜 LAST SESSION SUMMARY".to_string());
        lines.push(format!(
            "Last Activity: {}",
            last.timestamp.format("%Y-%m-%d %H:%M:%S")
        ));
        lines.push(format!("Topic: {}", truncate_chars(&last.user, TOPIC_LIMIT)));
        if !last.extracted.projects.is_empty() {
            lines.push(format!(
                "Projects Discussed: {}",
                join(&last.extracted.projects, ", ")
            ));
        }
        lines.push(String::new());
    }

    let pending: Vec<_> = workspace
        .agenda
        .iter()
        .filter(|a| a.status != AgendaStatus::Completed)
        .collect();
    if !pending.is_empty() {
        lines.push("## 📋 CURRENT AGENDA".to_string());
        for (idx, item) in pending.iter().take(AGENDA_WINDOW).enumerate() {
            lines.push(format!(
                "{}. {} {}",
                idx + 1,
                priority_glyph(item.priority),
                item.task
            ));
        }
        lines.push(String::new());
    }

    if !insights.is_empty() {
        lines.push("## 💭 AI THOUGHT PROCESS".to_string());
        for insight in insights {
            lines.push(format!(
                "{} [{}] {}",
                insight_glyph(insight.kind),
                insight.kind.label().to_uppercase(),
                insight.content
            ));
        }
        lines.push(String::new());
    }

    lines.push("## 🔍 CURRENT INPUT ANALYSIS".to_string());
    if !extracted.projects.is_empty() {
        lines.push(format!("📁 Projects: {}", join(&extracted.projects, ", ")));
    }
    if !extracted.technologies.is_empty() {
        lines.push(format!(
            "💻 Technologies: {}",
            join(&extracted.technologies, ", ")
        ));
    }
    if !extracted.tasks.is_empty() {
        let preview: Vec<String> = extracted.tasks.iter().take(TASK_PREVIEW).cloned().collect();
        lines.push(format!("📋 Tasks: {}", join(&preview, "; ")));
    }
    if !extracted.constraints.is_empty() {
        lines.push(format!(
            "⚠️ Constraints: {}",
            join(&extracted.constraints, "; ")
        ));
    }
    if !extracted.goals.is_empty() {
        lines.push(format!("🎯 Goals: {}", join(&extracted.goals, "; ")));
    }
    lines.push(String::new());

    lines.push("## 💬 CURRENT REQUEST".to_string());
    lines.push(RULE.to_string());
    lines.push(format!("User: {}", parsed.user));
    if !parsed.assistant.is_empty() {
        lines.push(String::new());
        lines.push(format!(
            "Previous Response: {}",
            truncate_chars(&parsed.assistant, RESPONSE_LIMIT)
        ));
    }
    lines.push(RULE.to_string());
    lines.push(String::new());

    lines.push("## 📝 CONTINUITY INSTRUCTIONS".to_string());
    lines.push("• Reference memory context when addressing the user's request".to_string());
    lines.push("• Continue any ongoing tasks mentioned in the agenda".to_string());
    lines.push("• Consider the AI insights and recommendations above".to_string());
    lines.push("• Maintain consistency with previous project names and terminology".to_string());
    lines.push("• Address any warnings or constraints identified".to_string());
    lines.push("• Build upon the established technology stack when relevant".to_string());
    lines.push(String::new());
    lines.push(BANNER.to_string());
    lines.push("║                    END OF CONTEXT PROMPT                     ║".to_string());
    lines.push(BANNER_END.to_string());

    lines.join("\n")
}
