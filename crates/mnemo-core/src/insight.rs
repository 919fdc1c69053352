//! Insight generation from extraction deltas

use crate::ids;
use crate::types::{AiInsight, ExtractedInfo, InsightKind, ProjectWorkspace};
use chrono::Utc;

const KNOWN_STACK_SAMPLE: usize = 3;
const TASK_OVERLOAD_THRESHOLD: usize = 3;

/// Compare a fresh extraction against workspace memory.
///
/// At most one insight per rule, in fixed order: connection, observation,
/// warning, recommendation. Rules fire independently.
pub fn generate_insights(extracted: &ExtractedInfo, workspace: &ProjectWorkspace) -> Vec<AiInsight> {
    let mut insights = Vec::new();
    let now = Utc::now();

    let new_techs: Vec<&String> = extracted
        .technologies
        .iter()
        .filter(|t| !workspace.technologies.contains(t))
        .collect();
    if !new_techs.is_empty() && !workspace.technologies.is_empty() {
        let known: Vec<&String> = workspace
            .technologies
            .iter()
            .take(KNOWN_STACK_SAMPLE)
            .collect();
        let related: Vec<String> = new_techs
            .iter()
            .chain(known.iter())
            .map(|s| s.to_string())
            .collect();
        insights.push(AiInsight {
            id: ids::next_id(),
            kind: InsightKind::Connection,
            content: format!(
                "New technologies ({}) mentioned alongside existing stack ({})",
                join(&new_techs),
                join(&known)
            ),
            timestamp: now,
            related_to: Some(related),
        });
    }

    if !extracted.projects.is_empty() && !workspace.projects.is_empty() {
        insights.push(AiInsight {
            id: ids::next_id(),
            kind: InsightKind::Observation,
            content: format!(
                "Working on {} project(s). Total projects tracked: {}",
                extracted.projects.len(),
                workspace.projects.len() + extracted.projects.len()
            ),
            timestamp: now,
            related_to: Some(extracted.projects.clone()),
        });
    }

    if !extracted.constraints.is_empty() {
        insights.push(AiInsight {
            id: ids::next_id(),
            kind: InsightKind::Warning,
            content: format!(
                "Detected {} constraint(s): {}",
                extracted.constraints.len(),
                extracted.constraints[0]
            ),
            timestamp: now,
            related_to: None,
        });
    }

    if extracted.tasks.len() > TASK_OVERLOAD_THRESHOLD {
        insights.push(AiInsight {
            id: ids::next_id(),
            kind: InsightKind::Recommendation,
            content: format!(
                "Multiple tasks detected ({}). Consider prioritizing and breaking down into smaller steps.",
                extracted.tasks.len()
            ),
            timestamp: now,
            related_to: None,
        });
    }

    insights
}

fn join(values: &[&String]) -> String {
    values
        .iter()
        .map(|s| s.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}
