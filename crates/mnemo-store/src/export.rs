//! Shareable export documents built from a workspace

use chrono::{DateTime, Utc};
use mnemo_core::{synthesize_prompt, AgendaStatus, ParsedConversation, ProjectWorkspace};

const SUMMARY_PROJECTS: usize = 5;
const SUMMARY_TECHNOLOGIES: usize = 8;
const SUMMARY_PROMPT_PREVIEW: usize = 500;
const MARKDOWN_INSIGHT_TAIL: usize = 10;
const PROMPT_INSIGHT_TAIL: usize = 4;

/// Regenerate the enhanced prompt for the most recent stored
/// conversation. The synthesizer is deterministic, so this reproduces
/// what the pipeline emitted when the conversation was committed, drawn
/// from the insights still retained in memory.
pub fn latest_prompt(ws: &ProjectWorkspace) -> Option<String> {
    let last = ws.conversations.last()?;
    let parsed = ParsedConversation {
        user: last.user.clone(),
        assistant: last.assistant.clone(),
        full_text: last.full_text.clone(),
        timestamp: last.timestamp,
    };
    let tail = ws.insights.len().saturating_sub(PROMPT_INSIGHT_TAIL);
    Some(synthesize_prompt(
        &parsed,
        ws,
        &last.extracted,
        &ws.insights[tail..],
    ))
}

/// Full-fidelity JSON export of a workspace's memory
pub fn full_json_export(
    ws: &ProjectWorkspace,
    latest_prompt: &str,
    exported_at: DateTime<Utc>,
) -> Result<String, serde_json::Error> {
    let conversations: Vec<serde_json::Value> = ws
        .conversations
        .iter()
        .map(|c| {
            serde_json::json!({
                "timestamp": c.timestamp,
                "user": c.user,
                "assistant": c.assistant,
                "extracted": c.extracted,
            })
        })
        .collect();

    serde_json::to_string_pretty(&serde_json::json!({
        "exportDate": exported_at.to_rfc3339(),
        "statistics": {
            "totalConversations": ws.conversations.len(),
            "projects": ws.projects.as_slice(),
            "technologies": ws.technologies.as_slice(),
            "agendaItems": ws.agenda.len(),
            "insights": ws.insights.len(),
        },
        "conversations": conversations,
        "agenda": ws.agenda,
        "insights": ws.insights,
        "latestEnhancedPrompt": latest_prompt,
    }))
}

fn joined_or_none(values: &[String]) -> String {
    if values.is_empty() {
        "None".to_string()
    } else {
        values.join(", ")
    }
}

/// Human-readable Markdown export
pub fn markdown_export(
    ws: &ProjectWorkspace,
    latest_prompt: &str,
    exported_at: DateTime<Utc>,
) -> String {
    let mut md = String::new();
    md.push_str("# AI Context Manager Export\n");
    md.push_str(&format!(
        "_Exported on {}_\n\n",
        exported_at.format("%Y-%m-%d %H:%M:%S")
    ));

    md.push_str("## Statistics\n");
    md.push_str(&format!(
        "- **Conversations:** {}\n",
        ws.conversations.len()
    ));
    md.push_str(&format!(
        "- **Projects:** {}\n",
        joined_or_none(ws.projects.as_slice())
    ));
    md.push_str(&format!(
        "- **Technologies:** {}\n",
        joined_or_none(ws.technologies.as_slice())
    ));
    md.push_str(&format!("- **Agenda Items:** {}\n", ws.agenda.len()));
    md.push_str(&format!("- **Insights:** {}\n\n", ws.insights.len()));

    if !ws.agenda.is_empty() {
        md.push_str("## Agenda\n");
        for item in &ws.agenda {
            let glyph = match item.status {
                AgendaStatus::Completed => "✅",
                AgendaStatus::InProgress => "🔄",
                AgendaStatus::Pending => "⬜",
            };
            md.push_str(&format!(
                "{} {} ({})\n",
                glyph,
                item.task,
                item.priority.label()
            ));
        }
        md.push('\n');
    }

    if !ws.insights.is_empty() {
        md.push_str("## Insights\n");
        let tail = ws.insights.len().saturating_sub(MARKDOWN_INSIGHT_TAIL);
        for insight in &ws.insights[tail..] {
            md.push_str(&format!(
                "- **[{}]** {}\n",
                insight.kind.label(),
                insight.content
            ));
        }
        md.push('\n');
    }

    if !latest_prompt.is_empty() {
        md.push_str("## Latest Enhanced Prompt\n");
        md.push_str("```\n");
        md.push_str(latest_prompt);
        md.push_str("\n```\n");
    }

    md
}

/// Short plain-text summary for quick sharing
pub fn summary_text(
    ws: &ProjectWorkspace,
    latest_prompt: &str,
    exported_at: DateTime<Utc>,
) -> String {
    let pending = ws
        .agenda
        .iter()
        .filter(|a| a.status != AgendaStatus::Completed)
        .count();

    let mut summary = format!(
        "AI Context Summary ({})\n\n\
         📊 Stats: {} conversations, {} projects, {} technologies\n\n\
         📁 Projects: {}\n\
         💻 Technologies: {}\n\
         📋 Pending Tasks: {}\n",
        exported_at.format("%Y-%m-%d"),
        ws.conversations.len(),
        ws.projects.len(),
        ws.technologies.len(),
        joined_or_none(&ws.projects.as_slice()[..ws.projects.len().min(SUMMARY_PROJECTS)]),
        joined_or_none(
            &ws.technologies.as_slice()[..ws.technologies.len().min(SUMMARY_TECHNOLOGIES)]
        ),
        pending,
    );

    if !latest_prompt.is_empty() {
        let preview: String = latest_prompt.chars().take(SUMMARY_PROMPT_PREVIEW).collect();
        summary.push_str(&format!("\n---\nLatest Prompt:\n{preview}...\n"));
    }

    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use mnemo_core::{
        ids, AgendaItem, AgendaPriority, AiInsight, ExtractedInfo, InsightKind,
        StoredConversation,
    };

    fn sample_workspace() -> ProjectWorkspace {
        let mut ws = ProjectWorkspace::default_workspace();
        ws.projects.extend(["DataAnalyzer"]);
        ws.technologies.extend(["Python", "Rust"]);
        let parsed = ParsedConversation {
            user: "we need to ship DataAnalyzer".to_string(),
            assistant: "Understood.".to_string(),
            full_text: "User: we need to ship DataAnalyzer Assistant: Understood.".to_string(),
            timestamp: Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap(),
        };
        let extracted = ExtractedInfo {
            projects: vec!["DataAnalyzer".to_string()],
            tasks: vec!["ship DataAnalyzer".to_string()],
            ..Default::default()
        };
        ws.conversations
            .push(StoredConversation::new(parsed, extracted));
        ws.agenda.push(AgendaItem {
            id: ids::next_id(),
            task: "Ship DataAnalyzer".to_string(),
            status: mnemo_core::AgendaStatus::InProgress,
            priority: AgendaPriority::High,
            created_at: Utc::now(),
            completed_at: None,
        });
        ws.insights.push(AiInsight {
            id: ids::next_id(),
            kind: InsightKind::Observation,
            content: "Working on 1 project(s). Total projects tracked: 1".to_string(),
            timestamp: Utc::now(),
            related_to: None,
        });
        ws
    }

    fn at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 2, 8, 30, 0).unwrap()
    }

    #[test]
    fn test_json_export_shape() {
        let ws = sample_workspace();
        let doc = full_json_export(&ws, "PROMPT BODY", at()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&doc).unwrap();
        assert_eq!(value["statistics"]["totalConversations"], 1);
        assert_eq!(value["statistics"]["projects"][0], "DataAnalyzer");
        assert_eq!(value["statistics"]["agendaItems"], 1);
        assert_eq!(value["conversations"][0]["user"], "we need to ship DataAnalyzer");
        assert_eq!(value["insights"][0]["type"], "observation");
        assert_eq!(value["latestEnhancedPrompt"], "PROMPT BODY");
        assert!(value["exportDate"].as_str().unwrap().starts_with("2024-06-02"));
    }

    #[test]
    fn test_markdown_export_sections() {
        let ws = sample_workspace();
        let md = markdown_export(&ws, "PROMPT BODY", at());
        assert!(md.starts_with("# AI Context Manager Export\n"));
        assert!(md.contains("_Exported on 2024-06-02 08:30:00_"));
        assert!(md.contains("- **Conversations:** 1"));
        assert!(md.contains("- **Projects:** DataAnalyzer"));
        assert!(md.contains("🔄 Ship DataAnalyzer (high)"));
        assert!(md.contains("- **[observation]** Working on 1 project(s)."));
        assert!(md.contains("## Latest Enhanced Prompt\n```\nPROMPT BODY\n```\n"));
    }

    #[test]
    fn test_markdown_skips_empty_sections() {
        let ws = ProjectWorkspace::default_workspace();
        let md = markdown_export(&ws, "", at());
        assert!(md.contains("- **Projects:** None"));
        assert!(!md.contains("## Agenda"));
        assert!(!md.contains("## Insights"));
        assert!(!md.contains("## Latest Enhanced Prompt"));
    }

    #[test]
    fn test_summary_counts_pending_only() {
        let mut ws = sample_workspace();
        ws.agenda.push(AgendaItem {
            id: ids::next_id(),
            task: "Done already".to_string(),
            status: mnemo_core::AgendaStatus::Completed,
            priority: AgendaPriority::Low,
            created_at: Utc::now(),
            completed_at: Some(Utc::now()),
        });
        let summary = summary_text(&ws, "", at());
        assert!(summary.contains("📋 Pending Tasks: 1"));
        assert!(summary.contains("AI Context Summary (2024-06-02)"));
        assert!(!summary.contains("Latest Prompt:"));
    }

    #[test]
    fn test_summary_prompt_preview_truncated() {
        let ws = sample_workspace();
        let long_prompt = "x".repeat(800);
        let summary = summary_text(&ws, &long_prompt, at());
        let preview_line = summary
            .lines()
            .find(|l| l.starts_with('x'))
            .unwrap();
        assert_eq!(preview_line.chars().count(), 503);
        assert!(preview_line.ends_with("..."));
    }

    #[test]
    fn test_latest_prompt_regenerates_from_last_conversation() {
        let ws = sample_workspace();
        let prompt = latest_prompt(&ws).unwrap();
        assert!(prompt.contains("CURRENT REQUEST"));
        assert!(prompt.contains("we need to ship DataAnalyzer"));
        let again = latest_prompt(&ws).unwrap();
        assert_eq!(prompt, again);
    }

    #[test]
    fn test_latest_prompt_none_without_conversations() {
        let ws = ProjectWorkspace::default_workspace();
        assert!(latest_prompt(&ws).is_none());
    }
}
