//! Data model for conversation memory

use crate::ids;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Workspace color palette (name, hex value)
pub const WORKSPACE_COLORS: &[(&str, &str)] = &[
    ("Violet", "#8b5cf6"),
    ("Blue", "#3b82f6"),
    ("Emerald", "#10b981"),
    ("Orange", "#f97316"),
    ("Pink", "#ec4899"),
    ("Cyan", "#06b6d4"),
    ("Red", "#ef4444"),
    ("Yellow", "#eab308"),
];

/// Workspace icon glyphs
pub const WORKSPACE_ICONS: &[&str] = &[
    "📁", "💼", "🚀", "💻", "🎨", "📊", "🔧", "📱", "🌐", "🤖", "📈", "🎯", "🔬", "📚", "🎮", "🏢",
];

/// A transcript split into speaker-attributed segments
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedConversation {
    pub user: String,
    pub assistant: String,
    pub full_text: String,
    pub timestamp: DateTime<Utc>,
}

/// Structured facts extracted from a conversation
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExtractedInfo {
    #[serde(default)]
    pub projects: Vec<String>,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default)]
    pub tasks: Vec<String>,
    #[serde(default)]
    pub names: Vec<String>,
    #[serde(default)]
    pub numbers: Vec<String>,
    #[serde(default)]
    pub dates: Vec<String>,
    #[serde(default)]
    pub quotes: Vec<String>,
    #[serde(default)]
    pub actions: Vec<String>,
    #[serde(default)]
    pub goals: Vec<String>,
    #[serde(default)]
    pub constraints: Vec<String>,
}

/// A conversation committed to workspace memory
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredConversation {
    pub id: i64,
    pub user: String,
    pub assistant: String,
    pub full_text: String,
    pub timestamp: DateTime<Utc>,
    pub extracted: ExtractedInfo,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
}

impl StoredConversation {
    pub fn new(parsed: ParsedConversation, extracted: ExtractedInfo) -> Self {
        Self {
            id: ids::next_id(),
            user: parsed.user,
            assistant: parsed.assistant,
            full_text: parsed.full_text,
            timestamp: parsed.timestamp,
            extracted,
            summary: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AgendaStatus {
    Pending,
    InProgress,
    Completed,
}

impl AgendaStatus {
    /// Cycle pending -> in-progress -> completed -> pending
    pub fn next(self) -> Self {
        match self {
            AgendaStatus::Pending => AgendaStatus::InProgress,
            AgendaStatus::InProgress => AgendaStatus::Completed,
            AgendaStatus::Completed => AgendaStatus::Pending,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AgendaPriority {
    Low,
    Medium,
    High,
}

impl AgendaPriority {
    pub fn label(self) -> &'static str {
        match self {
            AgendaPriority::Low => "low",
            AgendaPriority::Medium => "medium",
            AgendaPriority::High => "high",
        }
    }
}

/// A prioritized task derived from extracted task phrases
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgendaItem {
    pub id: i64,
    pub task: String,
    pub status: AgendaStatus,
    pub priority: AgendaPriority,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InsightKind {
    Observation,
    Recommendation,
    Warning,
    Connection,
}

impl InsightKind {
    pub fn label(self) -> &'static str {
        match self {
            InsightKind::Observation => "observation",
            InsightKind::Recommendation => "recommendation",
            InsightKind::Warning => "warning",
            InsightKind::Connection => "connection",
        }
    }
}

/// A qualitative statement comparing new extraction against memory
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AiInsight {
    pub id: i64,
    #[serde(rename = "type")]
    pub kind: InsightKind,
    pub content: String,
    pub timestamp: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub related_to: Option<Vec<String>>,
}

/// Ordered-insertion deduplicated string collection.
///
/// Serializes as a plain sequence; deserialization runs the input back
/// through dedup so a hand-edited blob cannot violate the no-duplicates
/// invariant.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct FactSet {
    values: Vec<String>,
}

impl FactSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a value, returning false if it was already present
    pub fn insert(&mut self, value: impl Into<String>) -> bool {
        let value = value.into();
        if self.values.contains(&value) {
            false
        } else {
            self.values.push(value);
            true
        }
    }

    pub fn extend<I, S>(&mut self, values: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for value in values {
            self.insert(value);
        }
    }

    pub fn contains(&self, value: &str) -> bool {
        self.values.iter().any(|v| v == value)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &String> {
        self.values.iter()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.values
    }

    /// Most recently inserted `n` values, in insertion order
    pub fn last(&self, n: usize) -> &[String] {
        let start = self.values.len().saturating_sub(n);
        &self.values[start..]
    }

    pub fn clear(&mut self) {
        self.values.clear();
    }
}

impl From<Vec<String>> for FactSet {
    fn from(values: Vec<String>) -> Self {
        let mut set = FactSet::new();
        set.extend(values);
        set
    }
}

impl From<FactSet> for Vec<String> {
    fn from(set: FactSet) -> Self {
        set.values
    }
}

/// Per-workspace counters for status output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WorkspaceStats {
    pub conversations: usize,
    pub facts: usize,
    pub projects: usize,
    pub tasks: usize,
    pub agenda: usize,
    pub insights: usize,
}

/// An isolated named container for one project's memory
#[derive(Debug, Clone)]
pub struct ProjectWorkspace {
    pub id: String,
    pub name: String,
    pub description: String,
    pub color: String,
    pub icon: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub conversations: Vec<StoredConversation>,
    pub projects: FactSet,
    pub tasks: FactSet,
    pub technologies: FactSet,
    pub names: FactSet,
    pub numbers: FactSet,
    pub agenda: Vec<AgendaItem>,
    pub insights: Vec<AiInsight>,
}

impl ProjectWorkspace {
    pub fn new(name: &str, description: &str, color: &str, icon: &str) -> Self {
        let now = Utc::now();
        Self {
            id: ids::workspace_id(),
            name: name.to_string(),
            description: description.to_string(),
            color: color.to_string(),
            icon: icon.to_string(),
            created_at: now,
            updated_at: now,
            conversations: Vec::new(),
            projects: FactSet::new(),
            tasks: FactSet::new(),
            technologies: FactSet::new(),
            names: FactSet::new(),
            numbers: FactSet::new(),
            agenda: Vec::new(),
            insights: Vec::new(),
        }
    }

    pub fn default_workspace() -> Self {
        Self::new(
            "Default Workspace",
            "Your main workspace for general conversations",
            WORKSPACE_COLORS[0].1,
            WORKSPACE_ICONS[0],
        )
    }

    /// Refresh the last-modified timestamp
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    /// Drop all accumulated memory, keeping workspace identity
    pub fn clear_memory(&mut self) {
        self.conversations.clear();
        self.projects.clear();
        self.tasks.clear();
        self.technologies.clear();
        self.names.clear();
        self.numbers.clear();
        self.agenda.clear();
        self.insights.clear();
        self.touch();
    }

    pub fn stats(&self) -> WorkspaceStats {
        WorkspaceStats {
            conversations: self.conversations.len(),
            facts: self.projects.len() + self.technologies.len() + self.names.len(),
            projects: self.projects.len(),
            tasks: self.tasks.len(),
            agenda: self.agenda.len(),
            insights: self.insights.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fact_set_dedup() {
        let mut set = FactSet::new();
        assert!(set.insert("Python"));
        assert!(!set.insert("Python"));
        assert!(set.insert("Rust"));
        assert_eq!(set.len(), 2);
        assert_eq!(set.as_slice(), ["Python", "Rust"]);
    }

    #[test]
    fn test_fact_set_last_window() {
        let mut set = FactSet::new();
        set.extend(["a", "b", "c", "d"]);
        assert_eq!(set.last(2), ["c", "d"]);
        assert_eq!(set.last(10).len(), 4);
    }

    #[test]
    fn test_fact_set_deserialize_dedups() {
        let set: FactSet = serde_json::from_str(r#"["React","React","Vue"]"#).unwrap();
        assert_eq!(set.as_slice(), ["React", "Vue"]);

        let json = serde_json::to_string(&set).unwrap();
        assert_eq!(json, r#"["React","Vue"]"#);
    }

    #[test]
    fn test_agenda_status_cycle() {
        let mut status = AgendaStatus::Pending;
        status = status.next();
        assert_eq!(status, AgendaStatus::InProgress);
        status = status.next();
        assert_eq!(status, AgendaStatus::Completed);
        status = status.next();
        assert_eq!(status, AgendaStatus::Pending);
    }

    #[test]
    fn test_agenda_item_wire_names() {
        let item = AgendaItem {
            id: 1,
            task: "Ship it".to_string(),
            status: AgendaStatus::InProgress,
            priority: AgendaPriority::High,
            created_at: Utc::now(),
            completed_at: None,
        };
        let json = serde_json::to_string(&item).unwrap();
        assert!(json.contains(r#""status":"in-progress""#));
        assert!(json.contains(r#""priority":"high""#));
        assert!(json.contains(r#""createdAt""#));
        assert!(!json.contains("completedAt"));
    }

    #[test]
    fn test_insight_type_field_name() {
        let insight = AiInsight {
            id: 7,
            kind: InsightKind::Warning,
            content: "Detected 1 constraint(s)".to_string(),
            timestamp: Utc::now(),
            related_to: None,
        };
        let json = serde_json::to_string(&insight).unwrap();
        assert!(json.contains(r#""type":"warning""#));
    }

    #[test]
    fn test_extracted_info_missing_fields_default() {
        let info: ExtractedInfo = serde_json::from_str(r#"{"projects":["DataAnalyzer"]}"#).unwrap();
        assert_eq!(info.projects, ["DataAnalyzer"]);
        assert!(info.quotes.is_empty());
        assert!(info.constraints.is_empty());
    }

    #[test]
    fn test_workspace_clear_keeps_identity() {
        let mut ws = ProjectWorkspace::new("Research", "notes", "#3b82f6", "🔬");
        ws.projects.insert("DataAnalyzer");
        ws.agenda.push(AgendaItem {
            id: 1,
            task: "t".to_string(),
            status: AgendaStatus::Pending,
            priority: AgendaPriority::Low,
            created_at: Utc::now(),
            completed_at: None,
        });
        ws.clear_memory();
        assert_eq!(ws.name, "Research");
        assert!(ws.projects.is_empty());
        assert!(ws.agenda.is_empty());
    }

    #[test]
    fn test_workspace_stats_counts() {
        let mut ws = ProjectWorkspace::default_workspace();
        ws.projects.extend(["A", "B"]);
        ws.technologies.insert("Rust");
        ws.names.insert("Ada Lovelace");
        let stats = ws.stats();
        assert_eq!(stats.facts, 4);
        assert_eq!(stats.projects, 2);
    }
}
