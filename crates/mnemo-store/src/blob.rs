//! Persisted wire shapes

use chrono::{DateTime, Utc};
use mnemo_core::{AgendaItem, AiInsight, FactSet, ProjectWorkspace, StoredConversation};
use serde::{Deserialize, Serialize};

/// Storage key for the workspace collection blob
pub const WORKSPACES_KEY: &str = "llm_workspaces_v3";

/// Storage key for the previous generation's single-memory blob,
/// supported as an import format only
pub const LEGACY_MEMORY_KEY: &str = "llm_context_v2";

/// Fact collections as flat arrays; rehydrated through dedup on load
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SerializedMemory {
    #[serde(default)]
    pub conversations: Vec<StoredConversation>,
    #[serde(default)]
    pub projects: Vec<String>,
    #[serde(default)]
    pub tasks: Vec<String>,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default)]
    pub names: Vec<String>,
    #[serde(default)]
    pub numbers: Vec<String>,
    #[serde(default)]
    pub agenda: Vec<AgendaItem>,
    #[serde(default)]
    pub insights: Vec<AiInsight>,
}

/// Per-workspace shape in the collection blob and in single-workspace
/// export documents
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SerializedWorkspace {
    pub id: String,
    pub name: String,
    pub description: String,
    pub color: String,
    pub icon: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub memory: SerializedMemory,
}

impl SerializedWorkspace {
    pub fn from_workspace(ws: &ProjectWorkspace) -> Self {
        Self {
            id: ws.id.clone(),
            name: ws.name.clone(),
            description: ws.description.clone(),
            color: ws.color.clone(),
            icon: ws.icon.clone(),
            created_at: ws.created_at,
            updated_at: ws.updated_at,
            memory: SerializedMemory {
                conversations: ws.conversations.clone(),
                projects: ws.projects.as_slice().to_vec(),
                tasks: ws.tasks.as_slice().to_vec(),
                technologies: ws.technologies.as_slice().to_vec(),
                names: ws.names.as_slice().to_vec(),
                numbers: ws.numbers.as_slice().to_vec(),
                agenda: ws.agenda.clone(),
                insights: ws.insights.clone(),
            },
        }
    }

    pub fn into_workspace(self) -> ProjectWorkspace {
        ProjectWorkspace {
            id: self.id,
            name: self.name,
            description: self.description,
            color: self.color,
            icon: self.icon,
            created_at: self.created_at,
            updated_at: self.updated_at,
            conversations: self.memory.conversations,
            projects: FactSet::from(self.memory.projects),
            tasks: FactSet::from(self.memory.tasks),
            technologies: FactSet::from(self.memory.technologies),
            names: FactSet::from(self.memory.names),
            numbers: FactSet::from(self.memory.numbers),
            agenda: self.memory.agenda,
            insights: self.memory.insights,
        }
    }
}

/// Top-level workspace collection blob
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppStateBlob {
    #[serde(default)]
    pub active_workspace_id: String,
    #[serde(default)]
    pub workspaces: Vec<SerializedWorkspace>,
}
